mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_event, print_volumes};
use livefind::{logging, mounted_volumes};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	if cli.list_volumes {
		return print_volumes(cli.output.unwrap_or_default(), &mounted_volumes());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_search(resolved.output.format, &resolved)
}

/// Execute the search workflow and print events in the chosen format.
fn run_search(format: OutputFormat, settings: &ResolvedConfig) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings);
	workflow.run(|event| print_event(format, event))?;
	Ok(())
}
