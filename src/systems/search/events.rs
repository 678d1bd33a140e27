use std::fmt;
use std::sync::mpsc::Sender;

use crate::systems::filesystem::{MatchRecord, ScanSummary};

/// Lifecycle of a search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
	/// No search has been started.
	Idle,
	/// The traversal is walking the roots.
	Running,
	/// A stop was requested but the traversal has not noticed yet.
	Stopping,
	/// Every root was walked to the end.
	Completed,
	/// The traversal returned early because of a stop request.
	Stopped,
}

impl SessionState {
	/// Whether the session has produced its final event.
	pub fn is_terminal(self) -> bool {
		matches!(self, Self::Completed | Self::Stopped)
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Idle => "idle",
			Self::Running => "running",
			Self::Stopping => "stopping",
			Self::Completed => "completed",
			Self::Stopped => "stopped",
		}
	}
}

impl fmt::Display for SessionState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Final tally delivered with [`SearchEvent::Finished`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSummary {
	/// Either [`SessionState::Completed`] or [`SessionState::Stopped`].
	pub state: SessionState,
	pub roots_scanned: usize,
	pub scan: ScanSummary,
}

/// Messages relayed from a running session to its consumer, in order.
#[derive(Debug, Clone)]
pub enum SearchEvent {
	/// Human readable progress text.
	Status(String),
	/// A file matched the query.
	Match(MatchRecord),
	/// Always the last event of a session.
	Finished(SearchSummary),
}

/// Handle used by the worker to push events to the consumer.
pub(crate) struct EventStream {
	tx: Sender<SearchEvent>,
	session: u64,
}

impl EventStream {
	pub(crate) fn new(tx: Sender<SearchEvent>, session: u64) -> Self {
		Self { tx, session }
	}

	pub(crate) fn status(&self, message: impl Into<String>) -> bool {
		let message = message.into();
		tracing::debug!(session = self.session, %message, "status");
		self.tx.send(SearchEvent::Status(message)).is_ok()
	}

	pub(crate) fn found(&self, record: MatchRecord) -> bool {
		self.tx.send(SearchEvent::Match(record)).is_ok()
	}

	pub(crate) fn finished(&self, summary: SearchSummary) -> bool {
		self.tx.send(SearchEvent::Finished(summary)).is_ok()
	}
}

impl Clone for EventStream {
	fn clone(&self) -> Self {
		Self {
			tx: self.tx.clone(),
			session: self.session,
		}
	}
}
