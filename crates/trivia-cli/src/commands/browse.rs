//! The read-only commands: `categories`, `list`, `search` and `category`.

use anyhow::Result;

use trivia_core::pagination::{page_count, DEFAULT_PAGE};
use trivia_core::service::SearchRequest;

use super::{open_service, print_json, question_table};
use crate::GlobalArgs;

pub async fn categories(global: &GlobalArgs) -> Result<()> {
    let response = open_service(global)?.categories().await?;
    if global.json {
        return print_json(&response);
    }

    for (id, kind) in &response.categories {
        println!("{id:>3}  {kind}");
    }
    Ok(())
}

pub async fn list(global: &GlobalArgs, page: Option<usize>) -> Result<()> {
    let service = open_service(global)?;
    let response = service.list_questions(page).await?;
    if global.json {
        return print_json(&response);
    }

    println!("{}", question_table(&response.questions));
    println!(
        "Page {} of {} ({} questions)",
        page.unwrap_or(DEFAULT_PAGE),
        page_count(response.total_questions, service.page_size()),
        response.total_questions
    );
    Ok(())
}

pub async fn search(global: &GlobalArgs, term: String) -> Result<()> {
    let response = open_service(global)?
        .search(SearchRequest {
            search_term: Some(term),
        })
        .await?;
    if global.json {
        return print_json(&response);
    }

    println!("{}", question_table(&response.questions));
    println!("{} matching question(s)", response.total_questions);
    Ok(())
}

pub async fn category(global: &GlobalArgs, id: u64) -> Result<()> {
    let response = open_service(global)?.questions_by_category(id).await?;
    if global.json {
        return print_json(&response);
    }

    println!("{}", question_table(&response.questions));
    println!("{} question(s) in category {id}", response.total_questions);
    Ok(())
}
