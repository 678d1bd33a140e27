use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use livefind::{SearchController, SearchEvent, SearchRequest, SearchSummary};
use tracing::debug;

use crate::settings::ResolvedConfig;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Drives one search from configuration to its final event.
///
/// The workflow is the consumer side of a session: it relays every event to a
/// sink and stops the search once the match or time budget is used up.
pub(crate) struct SearchWorkflow {
	controller: SearchController,
	request: SearchRequest,
	max_results: Option<usize>,
	time_limit: Option<Duration>,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: &ResolvedConfig) -> Self {
		Self {
			controller: SearchController::new(),
			request: config.search_request(),
			max_results: config.output.max_results,
			time_limit: config.output.time_limit(),
		}
	}

	/// Run the search, handing each event to `sink` as it arrives.
	///
	/// Matches past `max_results` that were already in flight when the stop
	/// was requested are not passed on.
	pub(crate) fn run<F>(mut self, mut sink: F) -> Result<SearchSummary>
	where
		F: FnMut(&SearchEvent) -> Result<()>,
	{
		self.controller.start(self.request.clone())?;

		let deadline = self.time_limit.map(|limit| Instant::now() + limit);
		let mut delivered = 0usize;
		let mut stop_requested = false;

		loop {
			if !stop_requested
				&& let Some(deadline) = deadline
				&& Instant::now() >= deadline
			{
				debug!("time limit reached");
				self.controller.stop();
				stop_requested = true;
			}

			let exited = self.worker_exited();
			let Some(event) = self.controller.next_timeout(POLL_INTERVAL) else {
				// Buffered events outlive the worker, so an empty channel after
				// exit means the final event was never sent.
				if exited {
					bail!("search worker exited without a final result");
				}
				continue;
			};

			match &event {
				SearchEvent::Match(_) => {
					if self.max_results.is_some_and(|limit| delivered >= limit) {
						continue;
					}
					delivered += 1;
					sink(&event)?;
					if !stop_requested && self.max_results.is_some_and(|limit| delivered >= limit)
					{
						debug!(delivered, "result limit reached");
						self.controller.stop();
						stop_requested = true;
					}
				}
				SearchEvent::Status(_) => sink(&event)?,
				SearchEvent::Finished(summary) => {
					sink(&event)?;
					return Ok(*summary);
				}
			}
		}
	}

	fn worker_exited(&self) -> bool {
		self.controller
			.session()
			.is_none_or(|session| session.is_finished())
	}
}
