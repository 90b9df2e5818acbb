//! Question store persisted to a TOML bank file.

use std::path::{Path, PathBuf};

use anyhow::Result;
use async_trait::async_trait;

use crate::bank::{parse_bank, write_bank, QuestionBank};
use crate::model::{Category, CategoryId, NewQuestion, Question, QuestionId};

use super::{MemoryStore, QuestionStore, StoreError};

/// A [`MemoryStore`] that rewrites its bank file on every mutation.
///
/// A change is applied to a copy of the bank, written to disk, and only then
/// made visible. A failed write leaves both the file and memory untouched.
pub struct FileStore {
    path: PathBuf,
    memory: MemoryStore,
}

impl FileStore {
    /// Load the bank at `path`. A missing file starts an empty bank.
    pub fn open(path: &Path) -> Result<Self> {
        let bank = if path.exists() {
            parse_bank(path)?
        } else {
            tracing::warn!("bank file {} not found, starting empty", path.display());
            QuestionBank::default()
        };
        Ok(Self {
            path: path.to_path_buf(),
            memory: MemoryStore::new(bank),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, bank: &QuestionBank) -> Result<(), StoreError> {
        write_bank(&self.path, bank)?;
        tracing::debug!("wrote bank to {}", self.path.display());
        Ok(())
    }
}

#[async_trait]
impl QuestionStore for FileStore {
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        self.memory.list_questions().await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.memory.list_categories().await
    }

    async fn list_questions_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StoreError> {
        self.memory.list_questions_by_category(category).await
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        self.memory.get_question(id).await
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<QuestionId, StoreError> {
        let mut current = self.memory.write().await;
        let mut staged = current.clone();
        let id = staged.insert(question)?;
        self.persist(&staged.bank)?;
        *current = staged;
        tracing::debug!(question_id = id, "inserted question");
        Ok(id)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), StoreError> {
        let mut current = self.memory.write().await;
        let mut staged = current.clone();
        staged.delete(id)?;
        self.persist(&staged.bank)?;
        *current = staged;
        tracing::debug!(question_id = id, "deleted question");
        Ok(())
    }
}
