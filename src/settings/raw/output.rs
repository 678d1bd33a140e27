use serde::Deserialize;

use crate::cli::{CliArgs, OutputFormat};

use super::super::resolved::{ConfigError, ConfigSources, OutputSettings};

/// `[output]` options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct OutputSection {
	pub(super) format: Option<String>,
	pub(super) max_results: Option<usize>,
	pub(super) time_limit_secs: Option<u64>,
}

impl OutputSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(format) = cli.output {
			self.format = Some(format.as_str().to_string());
		}
		if let Some(value) = cli.max_results {
			self.max_results = Some(value);
		}
		if let Some(value) = cli.time_limit {
			self.time_limit_secs = Some(value);
		}
	}

	pub(super) fn resolve(self, sources: &ConfigSources) -> Result<OutputSettings, ConfigError> {
		let format = match self.format {
			Some(value) => OutputFormat::parse(&value).ok_or_else(|| {
				ConfigError::invalid(
					"output.format",
					value,
					sources.source_for_format(),
					"expected `plain` or `json`",
				)
			})?,
			None => OutputFormat::default(),
		};

		Ok(OutputSettings {
			format,
			max_results: self.max_results,
			time_limit_secs: self.time_limit_secs,
		})
	}
}
