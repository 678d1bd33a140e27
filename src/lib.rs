//! Live, cancellable filename search.
//!
//! A [`SearchSession`] walks one or more roots on a worker thread and streams
//! every file whose name contains the query as soon as it is found. Front-ends
//! usually hold a [`SearchController`], which owns the current session and
//! replaces it whenever a new search starts.

pub mod actions;
pub mod app_dirs;
pub mod logging;
mod systems;

pub use systems::filesystem::{
	CancelToken, MatchRecord, NO_EXTENSION, ScanOptions, ScanSummary, SkipSet, Volume,
	default_skip_fragments, extension_label, mounted_volumes, scan,
};
pub use systems::search::{
	Query, SearchController, SearchError, SearchEvent, SearchRequest, SearchSession,
	SearchSummary, SessionState,
};
