//! Core data model types for trivia.
//!
//! Field names follow the JSON payloads of the question API, so these types
//! serialize directly into responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::TriviaError;

/// Identifier of a question, assigned by the store on insert.
pub type QuestionId = u64;

/// Identifier of a category.
pub type CategoryId = u64;

/// A single trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique, stable identifier.
    pub id: QuestionId,
    /// The question text shown to the player.
    pub question: String,
    /// The expected answer.
    pub answer: String,
    /// Category this question belongs to.
    pub category: CategoryId,
    /// Difficulty score, 1 and up.
    pub difficulty: u32,
}

/// A question category such as "Science" or "History".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: CategoryId,
    /// Display label.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Request to insert a new question. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u32,
}

impl NewQuestion {
    /// Reject empty text and a zero difficulty before anything reaches the store.
    pub fn validate(&self) -> Result<(), TriviaError> {
        if self.question.trim().is_empty() {
            return Err(TriviaError::invalid("question text must not be empty"));
        }
        if self.answer.trim().is_empty() {
            return Err(TriviaError::invalid("answer text must not be empty"));
        }
        if self.difficulty == 0 {
            return Err(TriviaError::invalid("difficulty must be at least 1"));
        }
        Ok(())
    }

    /// Attach a store-assigned identifier.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Build the `id → type` map returned alongside question listings.
pub fn category_map(categories: &[Category]) -> BTreeMap<CategoryId, String> {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question() -> NewQuestion {
        NewQuestion {
            question: "What is the heaviest organ in the human body?".into(),
            answer: "The Liver".into(),
            category: 1,
            difficulty: 4,
        }
    }

    #[test]
    fn category_serializes_kind_as_type() {
        let category = Category {
            id: 1,
            kind: "Science".into(),
        };
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 1, "type": "Science" }));
    }

    #[test]
    fn validate_accepts_complete_question() {
        assert!(new_question().validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_fields() {
        let mut q = new_question();
        q.question = "   ".into();
        assert!(matches!(
            q.validate(),
            Err(TriviaError::InvalidArgument(_))
        ));

        let mut q = new_question();
        q.answer = String::new();
        assert!(q.validate().is_err());

        let mut q = new_question();
        q.difficulty = 0;
        assert!(q.validate().is_err());
    }

    #[test]
    fn category_map_is_ordered_by_id() {
        let categories = vec![
            Category {
                id: 3,
                kind: "Geography".into(),
            },
            Category {
                id: 1,
                kind: "Science".into(),
            },
        ];
        let map = category_map(&categories);
        let ids: Vec<_> = map.keys().copied().collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(map[&3], "Geography");
    }
}
