use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use super::events::{SearchEvent, SessionState};
use super::session::{SearchRequest, SearchSession};
use super::SearchError;

/// Owns the current search on behalf of a consumer.
///
/// Each call to [`start`](Self::start) replaces the previous session with a
/// fresh one, so events from an earlier run can never leak into a later one.
#[derive(Default)]
pub struct SearchController {
	active: Option<ActiveSearch>,
}

struct ActiveSearch {
	session: SearchSession,
	events: Receiver<SearchEvent>,
}

impl SearchController {
	pub fn new() -> Self {
		Self::default()
	}

	/// Start a new search, stopping whatever ran before.
	///
	/// An invalid request is rejected before anything else happens, leaving
	/// the current session and state untouched.
	pub fn start(&mut self, request: SearchRequest) -> Result<u64, SearchError> {
		request.validate()?;
		self.stop();

		let (session, events) = SearchSession::start(request)?;
		let id = session.id();
		self.active = Some(ActiveSearch { session, events });
		Ok(id)
	}

	/// Request the current search to stop. Does not wait for it.
	pub fn stop(&self) {
		if let Some(active) = &self.active {
			active.session.stop();
		}
	}

	pub fn state(&self) -> SessionState {
		self.active
			.as_ref()
			.map_or(SessionState::Idle, |active| active.session.state())
	}

	pub fn session(&self) -> Option<&SearchSession> {
		self.active.as_ref().map(|active| &active.session)
	}

	/// Next pending event of the current search, if one is ready.
	pub fn try_next(&self) -> Option<SearchEvent> {
		self.active
			.as_ref()
			.and_then(|active| active.events.try_recv().ok())
	}

	/// Wait up to `timeout` for the next event of the current search.
	///
	/// Returns `None` on timeout, when idle, or once the session has
	/// delivered its final event.
	pub fn next_timeout(&self, timeout: Duration) -> Option<SearchEvent> {
		let active = self.active.as_ref()?;
		match active.events.recv_timeout(timeout) {
			Ok(event) => Some(event),
			Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
		}
	}

	/// Every event that is ready right now.
	pub fn drain(&self) -> Vec<SearchEvent> {
		self.active
			.as_ref()
			.map(|active| active.events.try_iter().collect())
			.unwrap_or_default()
	}
}
