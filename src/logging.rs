//! Tracing setup for the `livefind` binary.
//!
//! Logs go to stderr so that stdout stays reserved for match output.

use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(verbosity: u8) -> &'static str {
	match verbosity {
		0 => "livefind=warn",
		1 => "livefind=info",
		2 => "livefind=debug",
		_ => "livefind=trace",
	}
}

/// Install the global subscriber. Returns `false` if one was already set.
pub fn initialize(verbosity: u8) -> bool {
	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(io::stderr)
				.with_target(verbosity > 1)
				.compact(),
		)
		.try_init()
		.is_ok()
}
