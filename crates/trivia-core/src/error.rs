//! Error taxonomy surfaced to callers of the trivia engines and service.
//!
//! Quiz exhaustion is deliberately absent here: it is a normal outcome
//! represented by [`crate::quiz::QuizOutcome::Exhausted`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

/// Errors returned by the trivia engines and the request service.
#[derive(Debug, Error)]
pub enum TriviaError {
    /// A required field was missing, empty or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested resource, page or result set does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The question store failed.
    #[error(transparent)]
    Store(StoreError),
}

impl TriviaError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        TriviaError::InvalidArgument(message.into())
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        TriviaError::NotFound(message.into())
    }

    /// HTTP status a transport layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            TriviaError::InvalidArgument(_) => 422,
            TriviaError::NotFound(_) => 404,
            TriviaError::Store(_) => 500,
        }
    }
}

impl From<StoreError> for TriviaError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::QuestionNotFound(id) => {
                TriviaError::NotFound(format!("question {id} does not exist"))
            }
            other => TriviaError::Store(other),
        }
    }
}

/// Failure envelope of the question API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

impl From<&TriviaError> for ErrorResponse {
    fn from(err: &TriviaError) -> Self {
        let status = err.status_code();
        let message = match status {
            404 => "Not Found",
            422 => "Unprocessable",
            _ => "Internal Server Error",
        };
        Self {
            success: false,
            error: status.to_string(),
            message: message.to_string(),
        }
    }
}
