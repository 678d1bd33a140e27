use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, trace};

use super::{CancelToken, MatchRecord, ScanOptions, SkipSet};

/// Counters describing a single root traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
	/// Records handed to the match callback.
	pub matched: usize,
	/// Non-directory entries whose names were compared against the query.
	pub files_inspected: usize,
	/// Directories (including the root) excluded by the skip set.
	pub dirs_pruned: usize,
	/// Entries the walker could not read. Their subtrees were skipped.
	pub unreadable: usize,
}

impl ScanSummary {
	/// Fold another root's counters into this one.
	pub fn absorb(&mut self, other: ScanSummary) {
		self.matched += other.matched;
		self.files_inspected += other.files_inspected;
		self.dirs_pruned += other.dirs_pruned;
		self.unreadable += other.unreadable;
	}
}

/// Walk `root` depth-first and report every file whose base name contains
/// `needle`.
///
/// `needle` must already be lowercased. Directories matched by `skip` are
/// neither descended into nor enumerated. `cancel` is polled before entering
/// each directory and before inspecting each file. `on_match` returning
/// `false` means the consumer is gone and ends the walk.
///
/// Read errors never escape: an unreadable directory only costs its own
/// subtree, and a file whose metadata vanished is skipped.
pub fn scan<F>(
	root: &Path,
	needle: &str,
	skip: &SkipSet,
	options: &ScanOptions,
	cancel: &CancelToken,
	mut on_match: F,
) -> ScanSummary
where
	F: FnMut(MatchRecord) -> bool,
{
	let mut summary = ScanSummary::default();
	if cancel.is_cancelled() {
		return summary;
	}
	if skip.prunes(root) {
		debug!(root = %root.display(), "root matches skip set; nothing to scan");
		summary.dirs_pruned = 1;
		return summary;
	}

	let pruned = Arc::new(AtomicUsize::new(0));
	let walker = build_walker(root, skip, options, cancel, Arc::clone(&pruned));

	for result in walker {
		if cancel.is_cancelled() {
			debug!(root = %root.display(), "scan cancelled");
			break;
		}

		let entry = match result {
			Ok(entry) => entry,
			Err(err) => {
				summary.unreadable += 1;
				debug!(root = %root.display(), error = %err, "skipping unreadable entry");
				continue;
			}
		};

		let Some(file_type) = entry.file_type() else {
			continue;
		};
		if file_type.is_dir() {
			continue;
		}

		summary.files_inspected += 1;
		let name = entry.file_name().to_string_lossy();
		if !name.to_lowercase().contains(needle) {
			continue;
		}

		let Some(record) = MatchRecord::stat(name.into_owned(), entry.path()) else {
			trace!(path = %entry.path().display(), "metadata unavailable; skipping");
			continue;
		};

		summary.matched += 1;
		if !on_match(record) {
			debug!(root = %root.display(), "match consumer disconnected");
			break;
		}
	}

	summary.dirs_pruned += pruned.load(Ordering::Relaxed);
	summary
}

fn build_walker(
	root: &Path,
	skip: &SkipSet,
	options: &ScanOptions,
	cancel: &CancelToken,
	pruned: Arc<AtomicUsize>,
) -> ignore::Walk {
	let skip = Arc::new(skip.clone());
	let cancel = cancel.clone();

	WalkBuilder::new(root)
		.standard_filters(false)
		.follow_links(options.follow_symlinks)
		.max_depth(options.max_depth)
		.same_file_system(options.same_file_system)
		.filter_entry(move |entry: &DirEntry| {
			if !entry.file_type().is_some_and(|file_type| file_type.is_dir()) {
				return true;
			}
			if cancel.is_cancelled() {
				return false;
			}
			if skip.prunes(entry.path()) {
				debug!(path = %entry.path().display(), "pruning directory");
				pruned.fetch_add(1, Ordering::Relaxed);
				return false;
			}
			true
		})
		.build()
}
