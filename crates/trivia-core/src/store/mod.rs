//! Question store contract and its implementations.
//!
//! The store owns question and category lifetimes. The engines only ever see
//! the sequences it returns.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by a question store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No question with this id exists.
    #[error("question {0} does not exist")]
    QuestionNotFound(QuestionId),

    /// A question referenced a category the store does not know.
    #[error("category {0} does not exist")]
    UnknownCategory(CategoryId),

    /// Reading or writing backing storage failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The bank could not be serialized for persistence.
    #[error("failed to serialize question bank: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Read/write access to the questions and categories of a trivia bank.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All questions, ordered by id ascending.
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;

    /// All categories, ordered by id ascending.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// Questions of one category, ordered by id ascending.
    async fn list_questions_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StoreError>;

    /// A single question, if it exists.
    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError>;

    /// Insert a question and return its newly assigned id.
    async fn insert_question(&self, question: NewQuestion) -> Result<QuestionId, StoreError>;

    /// Delete a question. Fails with [`StoreError::QuestionNotFound`] if absent.
    async fn delete_question(&self, id: QuestionId) -> Result<(), StoreError>;
}
