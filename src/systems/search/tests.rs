use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use std::time::Duration;

use tempfile::{TempDir, tempdir};

use super::*;
use crate::systems::filesystem::{MatchRecord, ScanOptions, SkipSet};

const EVENT_TIMEOUT: Duration = Duration::from_secs(30);

fn touch(root: &Path, relative: &str) {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).unwrap();
	}
	fs::write(path, b"x").unwrap();
}

/// `/data` with the layout used throughout the search docs.
fn sample_tree() -> (TempDir, PathBuf) {
	let dir = tempdir().unwrap();
	let data = dir.path().join("data");
	touch(&data, "a/report.pdf");
	touch(&data, "b/old_report.txt");
	touch(&data, "b/unrelated.txt");
	touch(&data, "skip/report_secret.pdf");
	(dir, data)
}

fn large_tree(root: &Path, prefix: &str) {
	for branch in 0..30 {
		for leaf in 0..30 {
			touch(root, &format!("{prefix}{branch}/nested/{prefix}_{leaf}.bin"));
		}
	}
}

fn collect_until_finished(events: &Receiver<SearchEvent>) -> Vec<SearchEvent> {
	let mut collected = Vec::new();
	loop {
		let event = events
			.recv_timeout(EVENT_TIMEOUT)
			.expect("session should finish");
		let finished = matches!(event, SearchEvent::Finished(_));
		collected.push(event);
		if finished {
			return collected;
		}
	}
}

fn matches_of(events: &[SearchEvent]) -> Vec<&MatchRecord> {
	events
		.iter()
		.filter_map(|event| match event {
			SearchEvent::Match(record) => Some(record),
			_ => None,
		})
		.collect()
}

fn statuses_of(events: &[SearchEvent]) -> Vec<&str> {
	events
		.iter()
		.filter_map(|event| match event {
			SearchEvent::Status(message) => Some(message.as_str()),
			_ => None,
		})
		.collect()
}

fn summary_of(events: &[SearchEvent]) -> SearchSummary {
	match events.last() {
		Some(SearchEvent::Finished(summary)) => *summary,
		other => panic!("expected a finished event last, got {other:?}"),
	}
}

#[test]
fn example_scenario_skips_pruned_folder() {
	let (_dir, data) = sample_tree();
	let skip = SkipSet::new([data.join("skip").to_string_lossy().into_owned()]);
	let request = SearchRequest::new([&data], "report").with_skip(skip);

	let (session, events) = SearchSession::start(request).unwrap();
	let collected = collect_until_finished(&events);

	let names: BTreeSet<&str> = matches_of(&collected)
		.iter()
		.map(|record| record.name.as_str())
		.collect();
	assert_eq!(names, BTreeSet::from(["report.pdf", "old_report.txt"]));

	let summary = summary_of(&collected);
	assert_eq!(summary.state, SessionState::Completed);
	assert_eq!(summary.scan.matched, 2);
	assert_eq!(summary.roots_scanned, 1);
	assert_eq!(session.wait(), SessionState::Completed);
}

#[test]
fn lifecycle_statuses_frame_the_matches() {
	let (_dir, data) = sample_tree();
	let request = SearchRequest::new([&data], "REPORT");

	let (session, events) = SearchSession::start(request).unwrap();
	let collected = collect_until_finished(&events);

	let statuses = statuses_of(&collected);
	assert_eq!(statuses.first(), Some(&"Starting live search..."));
	assert_eq!(statuses[1], format!("Scanning: {}", data.display()));
	assert_eq!(statuses.last(), Some(&"Search complete."));
	assert_eq!(matches_of(&collected).len(), 3);

	// Nothing follows the finished event.
	assert!(events.recv_timeout(Duration::from_secs(5)).is_err());
	assert_eq!(session.state(), SessionState::Completed);
}

#[test]
fn empty_query_is_rejected() {
	let (_dir, data) = sample_tree();

	for term in ["", "   ", "\t"] {
		let result = SearchSession::start(SearchRequest::new([&data], term));
		assert!(matches!(result, Err(SearchError::InvalidQuery)));
	}
}

#[test]
fn missing_roots_are_rejected() {
	let request = SearchRequest::new(Vec::<PathBuf>::new(), "report");
	assert!(matches!(
		SearchSession::start(request),
		Err(SearchError::NoRoots)
	));
}

#[test]
fn vanished_root_finishes_with_no_matches() {
	let dir = tempdir().unwrap();
	let request = SearchRequest::new([dir.path().join("gone")], "anything");

	let (session, events) = SearchSession::start(request).unwrap();
	let collected = collect_until_finished(&events);

	assert!(matches_of(&collected).is_empty());
	assert_eq!(summary_of(&collected).state, SessionState::Completed);
	assert_eq!(session.wait(), SessionState::Completed);
}

#[test]
fn roots_are_scanned_in_order() {
	let dir = tempdir().unwrap();
	let first = dir.path().join("first");
	let second = dir.path().join("second");
	touch(&first, "x/match_one.txt");
	touch(&second, "y/match_two.txt");
	touch(&second, "match_three.txt");

	let request = SearchRequest::new([&first, &second], "match");
	let (_session, events) = SearchSession::start(request).unwrap();
	let collected = collect_until_finished(&events);

	let mut current_root: Option<PathBuf> = None;
	for event in &collected {
		match event {
			SearchEvent::Status(message) => {
				if let Some(root) = message.strip_prefix("Scanning: ") {
					current_root = Some(PathBuf::from(root));
				}
			}
			SearchEvent::Match(record) => {
				let root = current_root.as_ref().expect("match before any root");
				assert!(record.full_path.starts_with(root));
			}
			SearchEvent::Finished(summary) => assert_eq!(summary.roots_scanned, 2),
		}
	}
	assert_eq!(matches_of(&collected).len(), 3);
}

#[test]
fn parallel_roots_find_everything() {
	let dir = tempdir().unwrap();
	let first = dir.path().join("first");
	let second = dir.path().join("second");
	touch(&first, "deep/er/hit_a.txt");
	touch(&second, "hit_b.txt");
	touch(&second, "miss.txt");

	let options = ScanOptions {
		parallel_roots: true,
		..ScanOptions::default()
	};
	let request = SearchRequest::new([&first, &second], "hit").with_options(options);
	let (session, events) = SearchSession::start(request).unwrap();
	let collected = collect_until_finished(&events);

	let names: BTreeSet<&str> = matches_of(&collected)
		.iter()
		.map(|record| record.name.as_str())
		.collect();
	assert_eq!(names, BTreeSet::from(["hit_a.txt", "hit_b.txt"]));
	let summary = summary_of(&collected);
	assert_eq!(summary.roots_scanned, 2);
	assert_eq!(summary.state, SessionState::Completed);
	assert_eq!(session.wait(), SessionState::Completed);
}

#[test]
fn stop_returns_immediately_and_finishes_once() {
	let dir = tempdir().unwrap();
	large_tree(dir.path(), "item");

	let (session, events) = SearchSession::start(SearchRequest::new([dir.path()], "item")).unwrap();
	session.stop();
	assert!(matches!(
		session.state(),
		SessionState::Stopping | SessionState::Stopped | SessionState::Completed
	));

	let collected = collect_until_finished(&events);
	let summary = summary_of(&collected);
	assert!(summary.state.is_terminal());
	if summary.state == SessionState::Stopped {
		assert_eq!(statuses_of(&collected).last(), Some(&"Search stopped."));
		assert!(matches_of(&collected).len() < 900);
	}
	assert!(events.recv_timeout(Duration::from_secs(5)).is_err());
	assert_eq!(session.wait(), summary.state);
}

#[test]
fn stop_after_first_match_bounds_remaining_work() {
	let dir = tempdir().unwrap();
	large_tree(dir.path(), "item");

	let (session, events) = SearchSession::start(SearchRequest::new([dir.path()], "item_")).unwrap();
	let mut seen = 0;
	let mut summary = None;
	while let Ok(event) = events.recv_timeout(EVENT_TIMEOUT) {
		match event {
			SearchEvent::Match(_) => {
				seen += 1;
				if seen == 1 {
					session.stop();
				}
			}
			SearchEvent::Finished(finished) => {
				summary = Some(finished);
				break;
			}
			SearchEvent::Status(_) => {}
		}
	}

	let summary = summary.expect("finished event");
	assert!(summary.state.is_terminal());
	assert_eq!(session.wait(), summary.state);
}

#[test]
fn dropped_consumer_stops_the_worker() {
	let dir = tempdir().unwrap();
	large_tree(dir.path(), "item");

	let (session, events) = SearchSession::start(SearchRequest::new([dir.path()], "item")).unwrap();
	drop(events);

	assert!(session.wait().is_terminal());
}

#[test]
fn controller_starts_idle_and_keeps_idle_on_invalid_query() {
	let (_dir, data) = sample_tree();
	let mut controller = SearchController::new();
	assert_eq!(controller.state(), SessionState::Idle);
	assert!(controller.try_next().is_none());

	let result = controller.start(SearchRequest::new([&data], "  "));
	assert!(matches!(result, Err(SearchError::InvalidQuery)));
	assert_eq!(controller.state(), SessionState::Idle);
	assert!(controller.session().is_none());
}

fn drain_controller(controller: &SearchController) -> Vec<SearchEvent> {
	let mut collected = Vec::new();
	while let Some(event) = controller.next_timeout(EVENT_TIMEOUT) {
		let finished = matches!(event, SearchEvent::Finished(_));
		collected.push(event);
		if finished {
			break;
		}
	}
	collected
}

#[test]
fn controller_restart_yields_fresh_stream() {
	let dir = tempdir().unwrap();
	touch(dir.path(), "alpha_one.txt");
	touch(dir.path(), "nested/alpha_two.txt");
	touch(dir.path(), "beta_one.txt");

	let mut controller = SearchController::new();
	let first = controller
		.start(SearchRequest::new([dir.path()], "alpha"))
		.unwrap();
	let first_events = drain_controller(&controller);
	assert_eq!(matches_of(&first_events).len(), 2);
	assert_eq!(controller.state(), SessionState::Completed);

	let second = controller
		.start(SearchRequest::new([dir.path()], "beta"))
		.unwrap();
	assert_ne!(first, second);
	let second_events = drain_controller(&controller);

	let names: Vec<&str> = matches_of(&second_events)
		.iter()
		.map(|record| record.name.as_str())
		.collect();
	assert_eq!(names, ["beta_one.txt"]);
	assert_eq!(controller.state(), SessionState::Completed);
	assert!(controller.drain().is_empty());
}

#[test]
fn controller_restart_while_running_drops_old_results() {
	let dir = tempdir().unwrap();
	large_tree(dir.path(), "alpha");
	touch(dir.path(), "beta_only.txt");

	let mut controller = SearchController::new();
	controller
		.start(SearchRequest::new([dir.path()], "alpha"))
		.unwrap();
	controller
		.start(SearchRequest::new([dir.path()], "beta"))
		.unwrap();

	let events = drain_controller(&controller);
	let names: Vec<&str> = matches_of(&events)
		.iter()
		.map(|record| record.name.as_str())
		.collect();
	assert_eq!(names, ["beta_only.txt"]);
	assert_eq!(summary_of(&events).state, SessionState::Completed);
}

#[test]
fn controller_stop_reaches_terminal_state() {
	let dir = tempdir().unwrap();
	large_tree(dir.path(), "item");

	let mut controller = SearchController::new();
	controller
		.start(SearchRequest::new([dir.path()], "item"))
		.unwrap();
	controller.stop();

	let events = drain_controller(&controller);
	let summary = summary_of(&events);
	assert!(summary.state.is_terminal());
	assert_eq!(controller.state(), summary.state);
}
