use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `livefind` binary.
#[derive(Parser, Debug)]
#[command(
	name = "livefind",
	version,
	long_version = long_version(),
	about = "Search file names across directories and drives, streaming results as they are found",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "QUERY",
		help = "Case-insensitive text to look for in file names"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "LIVEFIND_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'r',
		long = "root",
		value_name = "PATH",
		action = ArgAction::Append,
		help = "Directory to search, repeat for several (default: current directory)"
	)]
	pub(crate) roots: Vec<PathBuf>,
	#[arg(
		short = 'a',
		long = "all-volumes",
		conflicts_with = "roots",
		help = "Search every mounted volume instead of specific roots (default: disabled)"
	)]
	pub(crate) all_volumes: bool,
	#[arg(
		long = "skip",
		value_delimiter = ',',
		value_name = "FRAGMENT",
		help = "Comma-separated path fragments whose directories are never entered (default: none)"
	)]
	pub(crate) skip: Option<Vec<String>>,
	#[arg(
		long = "no-default-skips",
		help = "Also search OS-managed directories such as /proc or \\Windows (default: disabled)"
	)]
	pub(crate) no_default_skips: bool,
	#[arg(
		short = 's',
		long = "follow-symlinks",
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		default_missing_value = "true",
		help = "Follow symbolic links while scanning (default: disabled)"
	)]
	pub(crate) follow_symlinks: Option<bool>,
	#[arg(
		short = 'd',
		long = "max-depth",
		value_name = "NUM",
		help = "Limit directory traversal depth (default: unlimited)"
	)]
	pub(crate) max_depth: Option<usize>,
	#[arg(
		long = "same-file-system",
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		default_missing_value = "true",
		help = "Do not cross into other mounted filesystems (default: disabled, forced with --all-volumes)"
	)]
	pub(crate) same_file_system: Option<bool>,
	#[arg(
		short = 'P',
		long = "parallel-roots",
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		default_missing_value = "true",
		help = "Scan every root on its own thread (default: disabled)"
	)]
	pub(crate) parallel_roots: Option<bool>,
	#[arg(
		short = 'm',
		long = "max-results",
		value_name = "NUM",
		help = "Stop the search after this many matches (default: unlimited)"
	)]
	pub(crate) max_results: Option<usize>,
	#[arg(
		short = 'T',
		long = "time-limit",
		value_name = "SECS",
		help = "Stop the search after this many seconds (default: unlimited)"
	)]
	pub(crate) time_limit: Option<u64>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		help = "Output format for matches (default: plain)"
	)]
	pub(crate) output: Option<OutputFormat>,
	#[arg(
		short = 'l',
		long = "list-volumes",
		help = "List mounted volumes and exit (default: disabled)"
	)]
	pub(crate) list_volumes: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before searching (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Increase log verbosity, repeat for more detail (default: warnings only)"
	)]
	pub(crate) verbose: u8,
}
