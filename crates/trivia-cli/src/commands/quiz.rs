//! The `trivia quiz` command: one stateless quiz step.

use anyhow::{Context, Result};
use serde_json::json;

use trivia_core::service::QuizRequest;

use super::{open_service, print_json};
use crate::GlobalArgs;

pub async fn execute(
    global: &GlobalArgs,
    category: Option<u64>,
    previous: Option<String>,
    raw_request: Option<String>,
) -> Result<()> {
    let request = match raw_request {
        Some(raw) => serde_json::from_str::<QuizRequest>(&raw)
            .context("failed to parse quiz request JSON")?,
        None => QuizRequest {
            previous_questions: Some(parse_previous(previous.as_deref())?),
            quiz_category: Some(json!({ "id": category.unwrap_or(0) })),
        },
    };

    let response = open_service(global)?.play(request).await?;
    if global.json {
        return print_json(&response);
    }

    match response.question {
        Some(q) => {
            println!("[{}] {}", q.id, q.question);
            println!("Answer: {}", q.answer);
        }
        None => println!("No more questions in this quiz."),
    }
    Ok(())
}

/// Parse a comma-separated list of question ids.
fn parse_previous(raw: Option<&str>) -> Result<Vec<u64>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u64>()
                .map_err(|_| anyhow::anyhow!("invalid question id: '{s}'"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_previous_ids() {
        assert_eq!(parse_previous(None).unwrap(), Vec::<u64>::new());
        assert_eq!(parse_previous(Some("1, 4,9")).unwrap(), vec![1, 4, 9]);
        assert_eq!(parse_previous(Some("3,")).unwrap(), vec![3]);
        assert!(parse_previous(Some("1,x")).is_err());
    }
}
