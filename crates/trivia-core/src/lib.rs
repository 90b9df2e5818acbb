//! trivia-core — Question selection and retrieval engine.
//!
//! This crate defines the trivia data model, the pure engines that page,
//! search, filter and draw quiz questions, the question store contract, and
//! the request orchestration that the `trivia` binary builds on.

pub mod bank;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod pagination;
pub mod quiz;
pub mod service;
pub mod store;

pub use error::{ErrorResponse, TriviaError};
pub use model::{Category, CategoryId, NewQuestion, Question, QuestionId};
pub use quiz::{CategorySelector, QuizOutcome};
pub use store::{FileStore, MemoryStore, QuestionStore, StoreError};
