use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if !config.all_volumes
		&& let Some(root) = config.roots.iter().find(|root| !root.is_dir())
	{
		return Err(ConfigError::invalid(
			"search.roots",
			root.display().to_string(),
			sources.source_for_roots(),
			"must be an existing directory",
		));
	}

	if let Some(max_depth) = config.options.max_depth
		&& max_depth == 0
	{
		return Err(ConfigError::invalid(
			"search.max_depth",
			max_depth.to_string(),
			sources.source_for_max_depth(),
			"must be at least 1",
		));
	}

	if let Some(limit) = config.output.max_results
		&& limit == 0
	{
		return Err(ConfigError::invalid(
			"output.max_results",
			limit.to_string(),
			sources.source_for_max_results(),
			"must be greater than zero",
		));
	}

	if let Some(secs) = config.output.time_limit_secs
		&& secs == 0
	{
		return Err(ConfigError::invalid(
			"output.time_limit_secs",
			secs.to_string(),
			sources.source_for_time_limit(),
			"must be greater than zero",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use livefind::{ScanOptions, SkipSet};
	use tempfile::tempdir;

	use super::super::{OutputSettings, SettingSource};
	use super::*;
	use crate::cli::OutputFormat;

	fn config_at(root: &std::path::Path) -> ResolvedConfig {
		ResolvedConfig {
			roots: vec![root.to_path_buf()],
			all_volumes: false,
			skip: SkipSet::default(),
			options: ScanOptions::default(),
			query: "x".into(),
			output: OutputSettings {
				format: OutputFormat::Plain,
				max_results: None,
				time_limit_secs: None,
			},
		}
	}

	#[test]
	fn validation_accepts_defaults() {
		let dir = tempdir().unwrap();
		assert!(validate(&config_at(dir.path()), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_max_depth() {
		let dir = tempdir().unwrap();
		let mut config = config_at(dir.path());
		config.options.max_depth = Some(0);

		let sources = ConfigSources {
			search_max_depth: Some(SettingSource::Environment("LIVEFIND__SEARCH__MAX_DEPTH")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "search.max_depth"));
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_rejects_zero_max_results() {
		let dir = tempdir().unwrap();
		let mut config = config_at(dir.path());
		config.output.max_results = Some(0);

		let sources = ConfigSources {
			output_max_results: Some(SettingSource::CliFlag("--max-results")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "output.max_results"));
		assert!(err.to_string().contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_zero_time_limit() {
		let dir = tempdir().unwrap();
		let mut config = config_at(dir.path());
		config.output.time_limit_secs = Some(0);

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "output.time_limit_secs"));
		assert!(err.to_string().contains("configuration key"));
	}

	#[test]
	fn validation_rejects_files_as_roots() {
		let dir = tempdir().unwrap();
		let file = dir.path().join("plain.txt");
		std::fs::write(&file, b"x").unwrap();

		let err = validate(&config_at(&file), &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "search.roots"));
		assert!(err.to_string().contains("must be an existing directory"));
	}
}
