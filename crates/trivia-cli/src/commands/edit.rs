//! The `trivia add` and `trivia delete` commands.

use anyhow::Result;

use trivia_core::service::CreateQuestionRequest;

use super::{open_service, print_json};
use crate::GlobalArgs;

pub async fn add(
    global: &GlobalArgs,
    question: String,
    answer: String,
    category: u64,
    difficulty: u32,
) -> Result<()> {
    let request = CreateQuestionRequest {
        question: Some(question),
        answer: Some(answer),
        category: Some(category),
        difficulty: Some(difficulty),
    };
    let response = open_service(global)?.create_question(request, None).await?;
    if global.json {
        return print_json(&response);
    }

    println!(
        "Created question {} ({} questions total)",
        response.created_question, response.total_questions
    );
    Ok(())
}

pub async fn delete(global: &GlobalArgs, id: u64) -> Result<()> {
    let response = open_service(global)?.delete_question(id, None).await?;
    if global.json {
        return print_json(&response);
    }

    println!(
        "Deleted question {} ({} questions left)",
        response.deleted_question, response.total_questions
    );
    Ok(())
}
