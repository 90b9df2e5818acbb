//! TOML question bank files.
//!
//! Loads banks from files and directories, writes them back, and validates
//! them for common authoring mistakes.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Category, Question};
use crate::store::StoreError;

/// The full contents of a question bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Parse a single TOML bank file.
pub fn parse_bank(path: &Path) -> Result<QuestionBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read bank file: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a bank (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))
}

/// Write `bank` to `path` as TOML, creating parent directories.
///
/// The content goes to a sibling `.toml.tmp` file first and is renamed over
/// `path`, so readers never see a partial bank.
pub fn write_bank(path: &Path, bank: &QuestionBank) -> Result<(), StoreError> {
    let content = toml::to_string_pretty(bank)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, content)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Recursively load all `.toml` bank files from a directory.
pub fn load_bank_directory(dir: &Path) -> Result<Vec<(String, QuestionBank)>> {
    let mut banks = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            banks.extend(load_bank_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_bank(&path) {
                Ok(bank) => banks.push((path.display().to_string(), bank)),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    banks.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(banks)
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question id (if applicable).
    pub question_id: Option<u64>,
    /// Warning message.
    pub message: String,
}

/// Validate a bank for common issues.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut category_ids = HashSet::new();
    for category in &bank.categories {
        if !category_ids.insert(category.id) {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("duplicate category ID: {}", category.id),
            });
        }
        if category.kind.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("category {} has an empty type", category.id),
            });
        }
    }

    let mut seen_ids = HashSet::new();
    for q in &bank.questions {
        if !seen_ids.insert(q.id) {
            warnings.push(warning(q, format!("duplicate question ID: {}", q.id)));
        }
        if !category_ids.contains(&q.category) {
            warnings.push(warning(q, format!("unknown category: {}", q.category)));
        }
        if q.question.trim().is_empty() {
            warnings.push(warning(q, "question text is empty".into()));
        }
        if q.answer.trim().is_empty() {
            warnings.push(warning(q, "answer is empty".into()));
        }
        if q.difficulty == 0 {
            warnings.push(warning(q, "difficulty must be at least 1".into()));
        }
    }

    let used: HashSet<_> = bank.questions.iter().map(|q| q.category).collect();
    for category in &bank.categories {
        if !used.contains(&category.id) {
            warnings.push(ValidationWarning {
                question_id: None,
                message: format!("category {} ({}) has no questions", category.id, category.kind),
            });
        }
    }

    warnings
}

fn warning(q: &Question, message: String) -> ValidationWarning {
    ValidationWarning {
        question_id: Some(q.id),
        message,
    }
}
