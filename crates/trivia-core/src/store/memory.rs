//! In-memory question store.

use async_trait::async_trait;
use tokio::sync::{RwLock, RwLockWriteGuard};

use crate::bank::QuestionBank;
use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};

use super::{QuestionStore, StoreError};

#[derive(Clone)]
pub(super) struct Inner {
    pub(super) bank: QuestionBank,
    next_id: QuestionId,
}

impl Inner {
    pub(super) fn insert(&mut self, question: NewQuestion) -> Result<QuestionId, StoreError> {
        if !self.bank.categories.iter().any(|c| c.id == question.category) {
            return Err(StoreError::UnknownCategory(question.category));
        }

        let id = self.next_id;
        self.next_id += 1;
        // Ids only grow, so pushing keeps the list sorted.
        self.bank.questions.push(question.into_question(id));
        Ok(id)
    }

    pub(super) fn delete(&mut self, id: QuestionId) -> Result<(), StoreError> {
        let Some(pos) = self.bank.questions.iter().position(|q| q.id == id) else {
            return Err(StoreError::QuestionNotFound(id));
        };
        self.bank.questions.remove(pos);
        Ok(())
    }
}

/// A question store that keeps the whole bank in memory.
///
/// Ids are assigned as one past the highest id ever held, so a deleted id is
/// never handed out again by the same store.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new(mut bank: QuestionBank) -> Self {
        bank.questions.sort_by_key(|q| q.id);
        bank.categories.sort_by_key(|c| c.id);
        let next_id = bank.questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(Inner { bank, next_id }),
        }
    }

    pub fn empty() -> Self {
        Self::new(QuestionBank::default())
    }

    /// Exclusive access for stores that stage a change before committing it.
    pub(super) async fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().await
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.inner.read().await.bank.questions.clone())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.inner.read().await.bank.categories.clone())
    }

    async fn list_questions_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .bank
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.bank.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<QuestionId, StoreError> {
        let id = self.inner.write().await.insert(question)?;
        tracing::debug!(question_id = id, "inserted question");
        Ok(id)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), StoreError> {
        self.inner.write().await.delete(id)?;
        tracing::debug!(question_id = id, "deleted question");
        Ok(())
    }
}
