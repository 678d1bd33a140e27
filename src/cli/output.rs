use std::io::{self, Write};

use anyhow::Result;
use chrono::{DateTime, Local};
use livefind::{MatchRecord, SearchEvent, SearchSummary, Volume};
use serde_json::{Value, json};

use super::OutputFormat;

const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Render a byte count the way file managers do, e.g. `1.50 KB`.
pub(crate) fn format_size(size_bytes: u64) -> String {
	let mut size = size_bytes as f64;
	for unit in SIZE_UNITS {
		if size < 1024.0 {
			return format!("{size:.2} {unit}");
		}
		size /= 1024.0;
	}
	format!("{size:.2} TB")
}

fn format_modified(record: &MatchRecord) -> String {
	let local: DateTime<Local> = record.modified.into();
	local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// One plain-text row: extension, size, local date, then path.
pub(crate) fn format_match_row(record: &MatchRecord) -> String {
	format!(
		"{:<6} {:>11}  {}  {}",
		record.extension,
		format_size(record.size_bytes),
		format_modified(record),
		record.full_path.display()
	)
}

fn format_summary_line(summary: &SearchSummary) -> String {
	format!(
		"{}: {} matches across {} roots ({} files inspected, {} directories skipped, {} unreadable)",
		summary.state,
		summary.scan.matched,
		summary.roots_scanned,
		summary.scan.files_inspected,
		summary.scan.dirs_pruned,
		summary.scan.unreadable
	)
}

/// Convert an event into the object printed in JSON mode.
pub(crate) fn event_json(event: &SearchEvent) -> Value {
	match event {
		SearchEvent::Status(message) => json!({
			"type": "status",
			"message": message,
		}),
		SearchEvent::Match(record) => json!({
			"type": "match",
			"name": record.name,
			"path": record.full_path.display().to_string(),
			"extension": record.extension,
			"size_bytes": record.size_bytes,
			"modified": format_modified(record),
		}),
		SearchEvent::Finished(summary) => json!({
			"type": "finished",
			"state": summary.state.as_str(),
			"roots_scanned": summary.roots_scanned,
			"matched": summary.scan.matched,
			"files_inspected": summary.scan.files_inspected,
			"dirs_pruned": summary.scan.dirs_pruned,
			"unreadable": summary.scan.unreadable,
		}),
	}
}

/// Print a single event as soon as it arrives.
///
/// Plain mode keeps stdout for match rows and sends everything else to
/// stderr. JSON mode writes one object per line to stdout.
pub(crate) fn print_event(format: OutputFormat, event: &SearchEvent) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(event),
		OutputFormat::Json => print_json(event),
	}
}

fn print_plain(event: &SearchEvent) -> Result<()> {
	match event {
		SearchEvent::Status(message) => eprintln!("{message}"),
		SearchEvent::Match(record) => {
			let mut stdout = io::stdout().lock();
			writeln!(stdout, "{}", format_match_row(record))?;
		}
		SearchEvent::Finished(summary) => eprintln!("{}", format_summary_line(summary)),
	}
	Ok(())
}

fn print_json(event: &SearchEvent) -> Result<()> {
	let mut stdout = io::stdout().lock();
	writeln!(stdout, "{}", serde_json::to_string(&event_json(event))?)?;
	Ok(())
}

/// Print the detected volumes, one per line.
pub(crate) fn print_volumes(format: OutputFormat, volumes: &[Volume]) -> Result<()> {
	let mut stdout = io::stdout().lock();
	for volume in volumes {
		match format {
			OutputFormat::Plain => {
				writeln!(stdout, "{}\t{}", volume.root.display(), volume.label)?;
			}
			OutputFormat::Json => {
				let payload = json!({
					"root": volume.root.display().to_string(),
					"label": volume.label,
				});
				writeln!(stdout, "{}", serde_json::to_string(&payload)?)?;
			}
		}
	}
	Ok(())
}
