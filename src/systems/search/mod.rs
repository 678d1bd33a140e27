//! Search sessions: run the traversal engine off the caller's thread and relay
//! its discoveries as an ordered event stream.

mod controller;
mod error;
mod events;
mod query;
mod session;

pub use controller::SearchController;
pub use error::SearchError;
pub use events::{SearchEvent, SearchSummary, SessionState};
pub use query::Query;
pub use session::{SearchRequest, SearchSession};

#[cfg(test)]
mod tests;
