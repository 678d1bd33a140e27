use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	eprintln!("Effective configuration:");
	if config.all_volumes {
		eprintln!("  Roots: all mounted volumes");
	} else {
		eprintln!("  Roots:");
	}
	for root in &config.roots {
		eprintln!("    {}", root.display());
	}
	if config.query.is_empty() {
		eprintln!("  Query: (none)");
	} else {
		eprintln!("  Query: {}", config.query);
	}
	if config.skip.is_empty() {
		eprintln!("  Skip: (none)");
	} else {
		eprintln!("  Skip: {}", config.skip.fragments().join(", "));
	}
	eprintln!(
		"  Follow symlinks: {}",
		bool_to_word(config.options.follow_symlinks)
	);
	match config.options.max_depth {
		Some(depth) => eprintln!("  Max depth: {depth}"),
		None => eprintln!("  Max depth: unlimited"),
	}
	eprintln!(
		"  Same file system: {}",
		bool_to_word(config.options.same_file_system)
	);
	eprintln!(
		"  Parallel roots: {}",
		bool_to_word(config.options.parallel_roots)
	);
	eprintln!("  Output: {}", config.output.format.as_str());
	match config.output.max_results {
		Some(limit) => eprintln!("  Max results: {limit}"),
		None => eprintln!("  Max results: unlimited"),
	}
	match config.output.time_limit_secs {
		Some(secs) => eprintln!("  Time limit: {secs}s"),
		None => eprintln!("  Time limit: none"),
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use livefind::{ScanOptions, SkipSet};

	use super::super::OutputSettings;
	use super::*;
	use crate::cli::OutputFormat;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "yes");
		assert_eq!(super::bool_to_word(false), "no");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			roots: vec![PathBuf::from("/tmp")],
			all_volumes: false,
			skip: SkipSet::new(["/proc/"]),
			options: ScanOptions::default(),
			query: "foo".into(),
			output: OutputSettings {
				format: OutputFormat::Json,
				max_results: Some(5),
				time_limit_secs: None,
			},
		};

		print_summary(&config);
	}
}
