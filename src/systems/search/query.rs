use std::fmt;

use super::SearchError;

/// A validated, case-folded search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
	original: String,
	needle: String,
}

impl Query {
	/// Trim `term` and reject it when nothing is left.
	pub fn parse(term: &str) -> Result<Self, SearchError> {
		let trimmed = term.trim();
		if trimmed.is_empty() {
			return Err(SearchError::InvalidQuery);
		}
		Ok(Self {
			original: trimmed.to_string(),
			needle: trimmed.to_lowercase(),
		})
	}

	/// The term as entered, minus surrounding whitespace.
	pub fn as_str(&self) -> &str {
		&self.original
	}

	/// Lowercased form used for matching.
	pub fn needle(&self) -> &str {
		&self.needle
	}
}

impl fmt::Display for Query {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.original)
	}
}
