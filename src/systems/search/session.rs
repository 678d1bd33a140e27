use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};

use super::events::{EventStream, SearchEvent, SearchSummary, SessionState};
use super::{Query, SearchError};
use crate::systems::filesystem::{CancelToken, ScanOptions, ScanSummary, SkipSet, scan};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

const OUTCOME_PENDING: u8 = 0;
const OUTCOME_COMPLETED: u8 = 1;
const OUTCOME_STOPPED: u8 = 2;

/// Everything a session needs to run: where to look, what to look for and
/// what to leave out.
#[derive(Debug, Clone)]
pub struct SearchRequest {
	pub roots: Vec<PathBuf>,
	pub query: String,
	pub skip: SkipSet,
	pub options: ScanOptions,
}

impl SearchRequest {
	pub fn new<I, P>(roots: I, query: impl Into<String>) -> Self
	where
		I: IntoIterator<Item = P>,
		P: Into<PathBuf>,
	{
		Self {
			roots: roots.into_iter().map(Into::into).collect(),
			query: query.into(),
			skip: SkipSet::default(),
			options: ScanOptions::default(),
		}
	}

	#[must_use]
	pub fn with_skip(mut self, skip: SkipSet) -> Self {
		self.skip = skip;
		self
	}

	#[must_use]
	pub fn with_options(mut self, options: ScanOptions) -> Self {
		self.options = options;
		self
	}

	/// Check the preconditions for starting and return the parsed query.
	pub fn validate(&self) -> Result<Query, SearchError> {
		let query = Query::parse(&self.query)?;
		if self.roots.is_empty() {
			return Err(SearchError::NoRoots);
		}
		Ok(query)
	}
}

/// One search run bound to a fixed request.
///
/// A session is never restarted. Searching again means starting a new one;
/// see [`SearchController`](super::SearchController). Dropping a session
/// stops its traversal.
pub struct SearchSession {
	id: u64,
	query: Query,
	cancel: CancelToken,
	outcome: Arc<AtomicU8>,
	worker: Option<JoinHandle<()>>,
}

impl SearchSession {
	/// Validate `request` and launch the traversal on a worker thread.
	///
	/// Events arrive on the returned receiver in discovery order and always
	/// end with a single [`SearchEvent::Finished`].
	pub fn start(request: SearchRequest) -> Result<(Self, Receiver<SearchEvent>), SearchError> {
		let query = request.validate()?;
		let id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);
		let (tx, rx) = mpsc::channel();
		let cancel = CancelToken::new();
		let outcome = Arc::new(AtomicU8::new(OUTCOME_PENDING));

		let job = Job {
			roots: request.roots,
			needle: query.needle().to_string(),
			skip: request.skip,
			options: request.options,
			cancel: cancel.clone(),
			outcome: Arc::clone(&outcome),
			stream: EventStream::new(tx, id),
		};

		info!(
			session = id,
			query = %query,
			roots = job.roots.len(),
			skipped = job.skip.fragments().len(),
			"starting search"
		);

		let worker = thread::Builder::new()
			.name(format!("livefind-search-{id}"))
			.spawn(move || job.run())
			.map_err(SearchError::Spawn)?;

		let session = Self {
			id,
			query,
			cancel,
			outcome,
			worker: Some(worker),
		};
		Ok((session, rx))
	}

	pub fn id(&self) -> u64 {
		self.id
	}

	pub fn query(&self) -> &Query {
		&self.query
	}

	/// Ask the traversal to stop. Returns immediately.
	pub fn stop(&self) {
		if !self.state().is_terminal() {
			debug!(session = self.id, "stop requested");
		}
		self.cancel.cancel();
	}

	pub fn state(&self) -> SessionState {
		match self.outcome.load(Ordering::Acquire) {
			OUTCOME_COMPLETED => SessionState::Completed,
			OUTCOME_STOPPED => SessionState::Stopped,
			_ if self.cancel.is_cancelled() => SessionState::Stopping,
			_ => SessionState::Running,
		}
	}

	/// Whether the worker thread has exited, normally or not.
	pub fn is_finished(&self) -> bool {
		self.worker.as_ref().is_none_or(JoinHandle::is_finished)
	}

	/// Block until the worker has returned and report the final state.
	pub fn wait(mut self) -> SessionState {
		if let Some(worker) = self.worker.take()
			&& worker.join().is_err()
		{
			warn!(session = self.id, "search worker panicked");
			self.outcome.store(OUTCOME_STOPPED, Ordering::Release);
		}
		self.state()
	}
}

impl Drop for SearchSession {
	fn drop(&mut self) {
		self.cancel.cancel();
	}
}

/// State moved onto the worker thread.
struct Job {
	roots: Vec<PathBuf>,
	needle: String,
	skip: SkipSet,
	options: ScanOptions,
	cancel: CancelToken,
	outcome: Arc<AtomicU8>,
	stream: EventStream,
}

impl Job {
	fn run(self) {
		if !self.stream.status("Starting live search...") {
			self.cancel.cancel();
		}

		let (roots_scanned, scan_summary) = if self.options.parallel_roots && self.roots.len() > 1 {
			self.scan_parallel()
		} else {
			self.scan_sequential()
		};

		let state = if self.cancel.is_cancelled() {
			self.outcome.store(OUTCOME_STOPPED, Ordering::Release);
			SessionState::Stopped
		} else {
			self.outcome.store(OUTCOME_COMPLETED, Ordering::Release);
			SessionState::Completed
		};

		info!(
			state = %state,
			matched = scan_summary.matched,
			inspected = scan_summary.files_inspected,
			pruned = scan_summary.dirs_pruned,
			unreadable = scan_summary.unreadable,
			"search finished"
		);

		let message = match state {
			SessionState::Completed => "Search complete.",
			_ => "Search stopped.",
		};
		self.stream.status(message);
		self.stream.finished(SearchSummary {
			state,
			roots_scanned,
			scan: scan_summary,
		});
	}

	fn scan_sequential(&self) -> (usize, ScanSummary) {
		let mut summary = ScanSummary::default();
		let mut roots_scanned = 0;
		for root in &self.roots {
			if self.cancel.is_cancelled() {
				break;
			}
			summary.absorb(self.scan_root(root, &self.stream));
			roots_scanned += 1;
		}
		(roots_scanned, summary)
	}

	fn scan_parallel(&self) -> (usize, ScanSummary) {
		let mut summary = ScanSummary::default();
		let mut roots_scanned = 0;
		thread::scope(|scope| {
			let handles: Vec<_> = self
				.roots
				.iter()
				.map(|root| {
					let stream = self.stream.clone();
					scope.spawn(move || self.scan_root(root, &stream))
				})
				.collect();

			for handle in handles {
				match handle.join() {
					Ok(root_summary) => {
						summary.absorb(root_summary);
						roots_scanned += 1;
					}
					Err(_) => warn!("root scanner panicked"),
				}
			}
		});
		(roots_scanned, summary)
	}

	fn scan_root(&self, root: &Path, stream: &EventStream) -> ScanSummary {
		if !stream.status(format!("Scanning: {}", root.display())) {
			self.cancel.cancel();
			return ScanSummary::default();
		}

		scan(root, &self.needle, &self.skip, &self.options, &self.cancel, |record| {
			if stream.found(record) {
				true
			} else {
				self.cancel.cancel();
				false
			}
		})
	}
}
