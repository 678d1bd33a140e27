use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) search_roots: Option<SettingSource>,
	pub(crate) search_max_depth: Option<SettingSource>,
	pub(crate) output_format: Option<SettingSource>,
	pub(crate) output_max_results: Option<SettingSource>,
	pub(crate) output_time_limit: Option<SettingSource>,
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

impl ConfigSources {
	pub(crate) fn source_for_roots(&self) -> SettingSource {
		or_key(&self.search_roots, "search.roots")
	}

	pub(crate) fn source_for_max_depth(&self) -> SettingSource {
		or_key(&self.search_max_depth, "search.max_depth")
	}

	pub(crate) fn source_for_format(&self) -> SettingSource {
		or_key(&self.output_format, "output.format")
	}

	pub(crate) fn source_for_max_results(&self) -> SettingSource {
		or_key(&self.output_max_results, "output.max_results")
	}

	pub(crate) fn source_for_time_limit(&self) -> SettingSource {
		or_key(&self.output_time_limit, "output.time_limit_secs")
	}
}
