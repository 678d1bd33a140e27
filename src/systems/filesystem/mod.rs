//! The traversal engine: walk a root, prune skipped subtrees and report files
//! whose names contain the query.

mod cancel;
mod options;
mod record;
mod skip;
mod traversal;
pub mod volumes;

pub use cancel::CancelToken;
pub use options::ScanOptions;
pub use record::{MatchRecord, NO_EXTENSION, extension_label};
pub use skip::{SkipSet, default_skip_fragments};
pub use traversal::{ScanSummary, scan};
pub use volumes::{Volume, mounted_volumes};
