use std::env;
use std::path::Path;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod output;
mod search;

use output::OutputSection;
use search::SearchSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	search: SearchSection,
	output: OutputSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.search.apply_cli_overrides(cli);
		self.output.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs, cwd: &Path) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			search_roots: detect_source(
				!cli.roots.is_empty(),
				self.search.roots.is_some(),
				"LIVEFIND__SEARCH__ROOTS",
				"--root",
				"search.roots",
			),
			search_max_depth: detect_source(
				cli.max_depth.is_some(),
				self.search.max_depth.is_some(),
				"LIVEFIND__SEARCH__MAX_DEPTH",
				"--max-depth",
				"search.max_depth",
			),
			output_format: detect_source(
				cli.output.is_some(),
				self.output.format.is_some(),
				"LIVEFIND__OUTPUT__FORMAT",
				"--output",
				"output.format",
			),
			output_max_results: detect_source(
				cli.max_results.is_some(),
				self.output.max_results.is_some(),
				"LIVEFIND__OUTPUT__MAX_RESULTS",
				"--max-results",
				"output.max_results",
			),
			output_time_limit: detect_source(
				cli.time_limit.is_some(),
				self.output.time_limit_secs.is_some(),
				"LIVEFIND__OUTPUT__TIME_LIMIT_SECS",
				"--time-limit",
				"output.time_limit_secs",
			),
		};

		let search = self.search.resolve(cwd);
		let output = self.output.resolve(&sources)?;

		let config = ResolvedConfig {
			roots: search.roots,
			all_volumes: search.all_volumes,
			skip: search.skip,
			options: search.options,
			query: search.query,
			output,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
