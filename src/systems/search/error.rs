use std::io;

use thiserror::Error;

/// Reasons a search session refuses to start.
///
/// Filesystem faults met while walking are absorbed by the traversal engine
/// and never show up here.
#[derive(Debug, Error)]
pub enum SearchError {
	/// The search term was empty once surrounding whitespace was removed.
	#[error("search term must not be empty")]
	InvalidQuery,

	/// No root directories were supplied.
	#[error("at least one root directory is required")]
	NoRoots,

	/// The worker thread could not be created.
	#[error("failed to spawn search worker: {0}")]
	Spawn(#[source] io::Error),
}
