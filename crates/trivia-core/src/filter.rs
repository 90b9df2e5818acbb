//! Search and category filtering over question sequences.
//!
//! Both filters preserve input order and never sort or rank.

use crate::error::TriviaError;
use crate::model::{CategoryId, Question};

/// A validated, non-empty search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Parse the search field of a request. Absent and empty terms are rejected
    /// rather than treated as "match everything".
    pub fn parse(raw: Option<&str>) -> Result<Self, TriviaError> {
        match raw {
            None => Err(TriviaError::invalid("searchTerm is required")),
            Some("") => Err(TriviaError::invalid("searchTerm must not be empty")),
            Some(term) => Ok(Self(term.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Questions whose text contains `term`, compared case-insensitively.
///
/// Only the question text is matched, never the answer.
pub fn search(items: &[Question], term: &str) -> Result<Vec<Question>, TriviaError> {
    let term = SearchTerm::parse(Some(term))?;
    let needle = term.as_str().to_lowercase();

    Ok(items
        .iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .cloned()
        .collect())
}

/// Questions belonging to `category`, in input order.
pub fn by_category(items: &[Question], category: CategoryId) -> Vec<Question> {
    items
        .iter()
        .filter(|q| q.category == category)
        .cloned()
        .collect()
}
