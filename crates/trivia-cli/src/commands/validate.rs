//! The `trivia validate` command.

use std::path::PathBuf;

use anyhow::Result;

use trivia_core::bank;

use super::load_config;
use crate::GlobalArgs;

pub fn execute(global: &GlobalArgs, path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => load_config(global)?.bank_path,
    };

    let banks = if path.is_dir() {
        bank::load_bank_directory(&path)?
    } else {
        vec![(path.display().to_string(), bank::parse_bank(&path)?)]
    };

    let mut total_warnings = 0;

    for (source, bank) in &banks {
        println!(
            "Bank: {} ({} categories, {} questions)",
            source,
            bank.categories.len(),
            bank.questions.len()
        );

        let warnings = bank::validate_bank(bank);
        for w in &warnings {
            let prefix = w
                .question_id
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All banks valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
