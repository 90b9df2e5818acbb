//! The `trivia play` command: an interactive quiz on stdin/stdout.

use std::io::Write;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

use trivia_core::quiz::QuizSession;
use trivia_core::{CategorySelector, QuizOutcome};

use super::{open_service, print_json};
use crate::GlobalArgs;

/// Final tally printed with `--json`.
#[derive(Debug, Serialize)]
struct PlaySummary {
    success: bool,
    answered: usize,
    correct: usize,
    previous_questions: Vec<u64>,
}

pub async fn execute(
    global: &GlobalArgs,
    category: Option<u64>,
    rounds: Option<usize>,
) -> Result<()> {
    anyhow::ensure!(rounds != Some(0), "rounds must be at least 1");

    let service = open_service(global)?;
    let pool = service
        .quiz_pool(CategorySelector::from_id(category))
        .await?;

    let mut session = QuizSession::new();
    let mut rng = StdRng::from_entropy();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut answered = 0usize;
    let mut correct = 0usize;

    loop {
        if rounds.is_some_and(|limit| answered >= limit) {
            break;
        }

        let question = match session.next(&pool, &mut rng) {
            QuizOutcome::Selected(q) => q,
            QuizOutcome::Exhausted => {
                if !global.json {
                    println!("No more questions in this quiz.");
                }
                break;
            }
        };

        if !global.json {
            println!("\nQuestion {}: {}", answered + 1, question.question);
            print!("> ");
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };
        answered += 1;

        if answers_match(&line, &question.answer) {
            correct += 1;
            if !global.json {
                println!("Correct!");
            }
        } else if !global.json {
            println!("Wrong. The answer was: {}", question.answer);
        }
    }

    if global.json {
        return print_json(&PlaySummary {
            success: true,
            answered,
            correct,
            previous_questions: session.served().to_vec(),
        });
    }

    println!("\nScore: {correct}/{answered}");
    Ok(())
}

/// Compare a typed answer with the expected one, ignoring case and
/// surrounding whitespace.
fn answers_match(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.trim().to_lowercase()
}
