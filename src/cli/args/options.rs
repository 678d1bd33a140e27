use clap::ValueEnum;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// One aligned row per match.
	#[default]
	Plain,
	/// One JSON object per event.
	Json,
}

impl OutputFormat {
	/// Return the identifier used in configuration files.
	pub fn as_str(self) -> &'static str {
		match self {
			OutputFormat::Plain => "plain",
			OutputFormat::Json => "json",
		}
	}

	/// Parse the identifier used in configuration files.
	pub(crate) fn parse(value: &str) -> Option<Self> {
		OutputFormat::from_str(value.trim(), true).ok()
	}
}
