//! Quiz engine: draw one unseen question at random, or report exhaustion.
//!
//! The engine keeps no state between calls. The history of served questions
//! belongs to the caller and is passed in on every draw.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;

use crate::error::TriviaError;
use crate::filter::by_category;
use crate::model::{CategoryId, Question, QuestionId};

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelector {
    /// Every question in the store.
    All,
    /// Only questions of one category.
    Specific(CategoryId),
}

impl CategorySelector {
    /// Parse the `quiz_category` request field.
    ///
    /// Accepts a JSON object whose `id` is a non-negative integer or `null`.
    /// An `id` of 0 or `null` selects every category.
    pub fn from_json(raw: Option<&Value>) -> Result<Self, TriviaError> {
        let Some(raw) = raw else {
            return Err(TriviaError::invalid("quiz_category is required"));
        };
        let Value::Object(fields) = raw else {
            return Err(TriviaError::invalid("quiz_category must be an object"));
        };
        let Some(id) = fields.get("id") else {
            return Err(TriviaError::invalid("quiz_category.id is required"));
        };

        match id {
            Value::Null => Ok(CategorySelector::All),
            Value::Number(n) => match n.as_u64() {
                Some(0) => Ok(CategorySelector::All),
                Some(id) => Ok(CategorySelector::Specific(id)),
                None => Err(TriviaError::invalid(format!(
                    "quiz_category.id must be a non-negative integer, got {n}"
                ))),
            },
            other => Err(TriviaError::invalid(format!(
                "quiz_category.id must be an integer, got {other}"
            ))),
        }
    }

    /// Build a selector from an optional category id, where 0 means all.
    pub fn from_id(id: Option<CategoryId>) -> Self {
        match id {
            None | Some(0) => CategorySelector::All,
            Some(id) => CategorySelector::Specific(id),
        }
    }

    /// Narrow the full question set to the pool this selector draws from.
    pub fn scope(&self, questions: &[Question]) -> Vec<Question> {
        match self {
            CategorySelector::All => questions.to_vec(),
            CategorySelector::Specific(id) => by_category(questions, *id),
        }
    }
}

/// Result of one quiz draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// A question the player has not seen yet.
    Selected(Question),
    /// Every question in the pool has already been served.
    Exhausted,
}

impl QuizOutcome {
    pub fn into_question(self) -> Option<Question> {
        match self {
            QuizOutcome::Selected(q) => Some(q),
            QuizOutcome::Exhausted => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, QuizOutcome::Exhausted)
    }
}

/// Draw a question from `pool` whose id is not in `previously_served`.
///
/// Every candidate is equally likely. Served ids that are not in the pool are
/// ignored.
pub fn next_question<R: Rng + ?Sized>(
    pool: &[Question],
    previously_served: &HashSet<QuestionId>,
    rng: &mut R,
) -> QuizOutcome {
    let mut seen = HashSet::with_capacity(pool.len());
    let candidates: Vec<&Question> = pool
        .iter()
        .filter(|q| !previously_served.contains(&q.id) && seen.insert(q.id))
        .collect();

    match candidates.choose(rng) {
        Some(question) => {
            tracing::debug!(
                question_id = question.id,
                candidates = candidates.len(),
                "selected quiz question"
            );
            QuizOutcome::Selected((*question).clone())
        }
        None => {
            tracing::debug!(pool = pool.len(), "quiz pool exhausted");
            QuizOutcome::Exhausted
        }
    }
}

/// Client-side quiz state: the ids served so far.
///
/// The session does not scope questions itself. Callers hand it a pool that is
/// already narrowed to the chosen category.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    served: Vec<QuestionId>,
    served_set: HashSet<QuestionId>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids served so far, in the order they were drawn.
    pub fn served(&self) -> &[QuestionId] {
        &self.served
    }

    /// Draw the next unseen question from `pool` and record it.
    pub fn next<R: Rng + ?Sized>(&mut self, pool: &[Question], rng: &mut R) -> QuizOutcome {
        let outcome = next_question(pool, &self.served_set, rng);
        if let QuizOutcome::Selected(q) = &outcome {
            self.served_set.insert(q.id);
            self.served.push(q.id);
        }
        outcome
    }
}
