//! Subcommand implementations and the helpers they share.

use std::sync::Arc;

use anyhow::Result;
use comfy_table::{Cell, Table};
use serde::Serialize;

use trivia_core::config::{load_config_from, TriviaConfig};
use trivia_core::service::TriviaService;
use trivia_core::{FileStore, Question};

use crate::GlobalArgs;

pub mod browse;
pub mod edit;
pub mod init;
pub mod play;
pub mod quiz;
pub mod validate;

/// Load config and apply the `--bank` override.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<TriviaConfig> {
    let mut config = load_config_from(global.config.as_deref())?;
    if let Some(bank) = &global.bank {
        config.bank_path = bank.clone();
    }
    Ok(config)
}

pub(crate) fn open_service(global: &GlobalArgs) -> Result<TriviaService> {
    let config = load_config(global)?;
    let store = FileStore::open(&config.bank_path)?;
    tracing::debug!("opened bank {}", store.path().display());
    Ok(TriviaService::new(Arc::new(store)).with_page_size(config.page_size))
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn question_table(questions: &[Question]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Question", "Answer", "Category", "Difficulty"]);
    for q in questions {
        table.add_row(vec![
            Cell::new(q.id),
            Cell::new(&q.question),
            Cell::new(&q.answer),
            Cell::new(q.category),
            Cell::new(q.difficulty),
        ]);
    }
    table
}
