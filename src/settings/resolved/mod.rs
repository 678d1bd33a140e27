use std::path::PathBuf;
use std::time::Duration;

use livefind::{ScanOptions, SearchRequest, SkipSet};

use crate::cli::OutputFormat;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// How results are reported and when the consumer gives up on a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
	pub format: OutputFormat,
	pub max_results: Option<usize>,
	pub time_limit_secs: Option<u64>,
}

impl OutputSettings {
	pub fn time_limit(&self) -> Option<Duration> {
		self.time_limit_secs.map(Duration::from_secs)
	}
}

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub roots: Vec<PathBuf>,
	pub all_volumes: bool,
	pub skip: SkipSet,
	pub options: ScanOptions,
	pub query: String,
	pub output: OutputSettings,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Build the request handed to the search controller.
	pub fn search_request(&self) -> SearchRequest {
		SearchRequest::new(self.roots.iter().cloned(), self.query.clone())
			.with_skip(self.skip.clone())
			.with_options(self.options.clone())
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
