//! Request orchestration for the question API.
//!
//! Each method mirrors one endpoint: it reads from the store, threads the data
//! through the pure engines, and returns a serializable response. The service
//! is transport-agnostic; the binary maps [`TriviaError`] onto exit codes and
//! the error envelope.
//!
//! Empty results are handled with one rule: a read whose result set is empty
//! is [`TriviaError::NotFound`]. Mutation responses embed whatever page is
//! left, even an empty one, and an exhausted quiz is a successful response
//! with no question.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TriviaError;
use crate::filter::{search, SearchTerm};
use crate::model::{category_map, CategoryId, NewQuestion, Question, QuestionId};
use crate::pagination::{paginate, DEFAULT_PAGE, QUESTIONS_PER_PAGE};
use crate::quiz::{next_question, CategorySelector, QuizOutcome};
use crate::store::QuestionStore;

/// Body of a search request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

/// Body of a create request. Every field is required; missing ones are
/// reported as [`TriviaError::InvalidArgument`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryId>,
    #[serde(default)]
    pub difficulty: Option<u32>,
}

impl CreateQuestionRequest {
    pub fn into_new_question(self) -> Result<NewQuestion, TriviaError> {
        let missing = |field: &str| TriviaError::invalid(format!("{field} is required"));
        let question = NewQuestion {
            question: self.question.ok_or_else(|| missing("question"))?,
            answer: self.answer.ok_or_else(|| missing("answer"))?,
            category: self.category.ok_or_else(|| missing("category"))?,
            difficulty: self.difficulty.ok_or_else(|| missing("difficulty"))?,
        };
        question.validate()?;
        Ok(question)
    }
}

/// Body of a quiz request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizRequest {
    /// Ids already served in this quiz.
    #[serde(default)]
    pub previous_questions: Option<Vec<QuestionId>>,
    /// Raw category selector, validated by [`CategorySelector::from_json`].
    #[serde(default)]
    pub quiz_category: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<CategoryId, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<CategoryId, String>,
    pub current_category: Option<CategoryId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<CategoryId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created_question: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted_question: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayResponse {
    pub success: bool,
    /// The drawn question, or `None` once the pool is exhausted.
    pub question: Option<Question>,
}

impl From<QuizOutcome> for PlayResponse {
    fn from(outcome: QuizOutcome) -> Self {
        Self {
            success: true,
            question: outcome.into_question(),
        }
    }
}

/// Endpoint logic over a question store.
pub struct TriviaService {
    store: Arc<dyn QuestionStore>,
    page_size: usize,
}

impl TriviaService {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self {
            store,
            page_size: QUESTIONS_PER_PAGE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// All categories as an `id → type` map.
    pub async fn categories(&self) -> Result<CategoriesResponse, TriviaError> {
        let categories = self.store.list_categories().await?;
        if categories.is_empty() {
            return Err(TriviaError::not_found("no categories"));
        }
        Ok(CategoriesResponse {
            success: true,
            categories: category_map(&categories),
        })
    }

    /// One page of all questions, ordered by id.
    pub async fn list_questions(
        &self,
        page: Option<usize>,
    ) -> Result<QuestionPageResponse, TriviaError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let (questions, categories) = futures::try_join!(
            self.store.list_questions(),
            self.store.list_categories()
        )?;

        let current = paginate(&questions, page, self.page_size)?;
        if current.is_empty() {
            return Err(TriviaError::not_found(format!("page {page} is empty")));
        }

        Ok(QuestionPageResponse {
            success: true,
            questions: current.to_vec(),
            total_questions: questions.len(),
            categories: category_map(&categories),
            current_category: None,
        })
    }

    /// Insert a question and return the requested page of the updated list.
    pub async fn create_question(
        &self,
        request: CreateQuestionRequest,
        page: Option<usize>,
    ) -> Result<CreatedResponse, TriviaError> {
        let new_question = request.into_new_question()?;
        let id = self.store.insert_question(new_question).await?;
        tracing::info!(question_id = id, "created question");

        let (questions, total_questions) = self.page_after_mutation(page).await?;
        Ok(CreatedResponse {
            success: true,
            created_question: id,
            questions,
            total_questions,
        })
    }

    /// Delete a question and return the requested page of what remains.
    pub async fn delete_question(
        &self,
        id: QuestionId,
        page: Option<usize>,
    ) -> Result<DeletedResponse, TriviaError> {
        self.store.delete_question(id).await?;
        tracing::info!(question_id = id, "deleted question");

        let (questions, total_questions) = self.page_after_mutation(page).await?;
        Ok(DeletedResponse {
            success: true,
            deleted_question: id,
            questions,
            total_questions,
        })
    }

    /// Questions whose text contains the search term, case-insensitively.
    pub async fn search(
        &self,
        request: SearchRequest,
    ) -> Result<QuestionListResponse, TriviaError> {
        let term = SearchTerm::parse(request.search_term.as_deref())?;
        let questions = self.store.list_questions().await?;

        let results = search(&questions, term.as_str())?;
        if results.is_empty() {
            return Err(TriviaError::not_found(format!(
                "no questions match '{}'",
                term.as_str()
            )));
        }

        Ok(QuestionListResponse {
            success: true,
            total_questions: results.len(),
            questions: results,
            current_category: None,
        })
    }

    /// All questions of one category.
    pub async fn questions_by_category(
        &self,
        category: CategoryId,
    ) -> Result<QuestionListResponse, TriviaError> {
        let questions = self.store.list_questions_by_category(category).await?;
        if questions.is_empty() {
            return Err(TriviaError::not_found(format!(
                "no questions in category {category}"
            )));
        }

        Ok(QuestionListResponse {
            success: true,
            total_questions: questions.len(),
            questions,
            current_category: Some(category),
        })
    }

    /// Draw the next unseen quiz question using the thread-local RNG.
    pub async fn play(&self, request: QuizRequest) -> Result<PlayResponse, TriviaError> {
        let (pool, served) = self.quiz_round(request).await?;
        let outcome = next_question(&pool, &served, &mut rand::thread_rng());
        Ok(outcome.into())
    }

    /// Draw the next unseen quiz question with a caller-supplied RNG.
    pub async fn play_with<R: Rng + Send + ?Sized>(
        &self,
        request: QuizRequest,
        rng: &mut R,
    ) -> Result<PlayResponse, TriviaError> {
        let (pool, served) = self.quiz_round(request).await?;
        Ok(next_question(&pool, &served, rng).into())
    }

    /// Questions a quiz over `selector` draws from.
    ///
    /// A specific category that does not exist is `NotFound`. An existing
    /// category without questions gives an empty pool.
    pub async fn quiz_pool(
        &self,
        selector: CategorySelector,
    ) -> Result<Vec<Question>, TriviaError> {
        let (questions, categories) = futures::try_join!(
            self.store.list_questions(),
            self.store.list_categories()
        )?;
        if let CategorySelector::Specific(id) = selector {
            if !categories.iter().any(|c| c.id == id) {
                return Err(TriviaError::not_found(format!("category {id} does not exist")));
            }
        }

        let pool = selector.scope(&questions);
        tracing::debug!(?selector, pool = pool.len(), "resolved quiz pool");
        Ok(pool)
    }

    /// Validate the selector before touching the store, then scope the pool.
    async fn quiz_round(
        &self,
        request: QuizRequest,
    ) -> Result<(Vec<Question>, HashSet<QuestionId>), TriviaError> {
        let selector = CategorySelector::from_json(request.quiz_category.as_ref())?;
        let served: HashSet<QuestionId> = request
            .previous_questions
            .unwrap_or_default()
            .into_iter()
            .collect();

        let pool = self.quiz_pool(selector).await?;
        tracing::debug!(served = served.len(), "quiz round ready");
        Ok((pool, served))
    }

    async fn page_after_mutation(
        &self,
        page: Option<usize>,
    ) -> Result<(Vec<Question>, usize), TriviaError> {
        let questions = self.store.list_questions().await?;
        let current = paginate(&questions, page.unwrap_or(DEFAULT_PAGE), self.page_size)?;
        Ok((current.to_vec(), questions.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QuestionBank;
    use crate::model::Category;
    use crate::store::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn bank(question_count: u64) -> QuestionBank {
        QuestionBank {
            categories: vec![
                Category {
                    id: 1,
                    kind: "Science".into(),
                },
                Category {
                    id: 2,
                    kind: "Art".into(),
                },
                Category {
                    id: 3,
                    kind: "Sports".into(),
                },
            ],
            questions: (1..=question_count)
                .map(|id| Question {
                    id,
                    question: if id == 4 {
                        "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?".into()
                    } else {
                        format!("Question number {id}")
                    },
                    answer: format!("Answer {id}"),
                    category: if id % 2 == 0 { 2 } else { 1 },
                    difficulty: 1 + (id % 5) as u32,
                })
                .collect(),
        }
    }

    fn service(question_count: u64) -> TriviaService {
        TriviaService::new(Arc::new(MemoryStore::new(bank(question_count))))
    }

    #[tokio::test]
    async fn categories_are_listed() {
        let response = service(3).categories().await.unwrap();
        assert!(response.success);
        assert_eq!(response.categories.len(), 3);
        assert_eq!(response.categories[&2], "Art");
    }

    #[tokio::test]
    async fn no_categories_is_not_found() {
        let service = TriviaService::new(Arc::new(MemoryStore::empty()));
        assert!(matches!(
            service.categories().await,
            Err(TriviaError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn first_page_by_default() {
        let response = service(25).list_questions(None).await.unwrap();
        assert_eq!(response.questions.len(), 10);
        assert_eq!(response.questions[0].id, 1);
        assert_eq!(response.total_questions, 25);
        assert_eq!(response.categories.len(), 3);
        assert!(response.current_category.is_none());
    }

    #[tokio::test]
    async fn last_partial_page() {
        let response = service(25).list_questions(Some(3)).await.unwrap();
        let ids: Vec<_> = response.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![21, 22, 23, 24, 25]);
    }

    #[tokio::test]
    async fn page_beyond_range_is_not_found() {
        let err = service(25).list_questions(Some(1000)).await.unwrap_err();
        assert!(matches!(err, TriviaError::NotFound(_)));
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn configured_page_size_is_used() {
        let response = service(25)
            .with_page_size(4)
            .list_questions(Some(2))
            .await
            .unwrap();
        let ids: Vec<_> = response.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![5, 6, 7, 8]);
    }

    #[tokio::test]
    async fn create_returns_new_id_and_page() {
        let service = service(3);
        let request: CreateQuestionRequest = serde_json::from_value(json!({
            "question": "Who discovered penicillin?",
            "answer": "Alexander Fleming",
            "category": 1,
            "difficulty": 3
        }))
        .unwrap();

        let response = service.create_question(request, None).await.unwrap();
        assert_eq!(response.created_question, 4);
        assert_eq!(response.total_questions, 4);
        assert_eq!(response.questions.len(), 4);
    }

    #[tokio::test]
    async fn create_with_missing_field_is_invalid() {
        let request: CreateQuestionRequest = serde_json::from_value(json!({
            "question": "Who discovered penicillin?",
            "answer": "Alexander Fleming",
            "category": 1
        }))
        .unwrap();
        let err = service(3).create_question(request, None).await.unwrap_err();
        assert!(matches!(err, TriviaError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn create_in_unknown_category_is_store_error() {
        let request = CreateQuestionRequest {
            question: Some("Q".into()),
            answer: Some("A".into()),
            category: Some(99),
            difficulty: Some(1),
        };
        let err = service(3).create_question(request, None).await.unwrap_err();
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn delete_removes_question() {
        let service = service(4);
        let response = service.delete_question(4, None).await.unwrap();
        assert_eq!(response.deleted_question, 4);
        assert_eq!(response.total_questions, 3);
        assert!(response.questions.iter().all(|q| q.id != 4));
    }

    #[tokio::test]
    async fn delete_last_question_returns_empty_page() {
        let service = service(1);
        let response = service.delete_question(1, None).await.unwrap();
        assert!(response.questions.is_empty());
        assert_eq!(response.total_questions, 0);
    }

    #[tokio::test]
    async fn delete_missing_question_is_not_found() {
        let err = service(4).delete_question(1000, None).await.unwrap_err();
        assert!(matches!(err, TriviaError::NotFound(_)));
    }

    #[tokio::test]
    async fn search_finds_matching_questions() {
        let response = service(10)
            .search(SearchRequest {
                search_term: Some("CAGED bird".into()),
            })
            .await
            .unwrap();
        assert_eq!(response.total_questions, 1);
        assert_eq!(response.questions[0].id, 4);
        assert!(response.current_category.is_none());
    }

    #[tokio::test]
    async fn search_without_term_is_invalid() {
        let service = service(10);
        for term in [None, Some(String::new())] {
            let err = service
                .search(SearchRequest { search_term: term })
                .await
                .unwrap_err();
            assert_eq!(err.status_code(), 422);
        }
    }

    #[tokio::test]
    async fn search_without_results_is_not_found() {
        let err = service(10)
            .search(SearchRequest {
                search_term: Some("zebra".into()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, TriviaError::NotFound(_)));
    }

    #[tokio::test]
    async fn questions_by_category_sets_current_category() {
        let response = service(6).questions_by_category(2).await.unwrap();
        let ids: Vec<_> = response.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![2, 4, 6]);
        assert_eq!(response.current_category, Some(2));
    }

    #[tokio::test]
    async fn empty_category_is_not_found() {
        let err = service(6).questions_by_category(3).await.unwrap_err();
        assert!(matches!(err, TriviaError::NotFound(_)));
    }

    #[tokio::test]
    async fn play_serves_remaining_question_in_category() {
        let request: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [2, 4],
            "quiz_category": { "type": "Art", "id": 2 }
        }))
        .unwrap();
        let response = service(6).play(request).await.unwrap();
        assert_eq!(response.question.map(|q| q.id), Some(6));
    }

    #[tokio::test]
    async fn play_reports_exhaustion_as_success() {
        let request: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [1, 2, 3],
            "quiz_category": { "type": "click", "id": 0 }
        }))
        .unwrap();
        let response = service(3).play(request).await.unwrap();
        assert!(response.success);
        assert!(response.question.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["question"], Value::Null);
    }

    #[tokio::test]
    async fn play_without_history_draws_from_whole_pool() {
        let service = service(5);
        let mut rng = StdRng::seed_from_u64(11);
        let request = QuizRequest {
            previous_questions: None,
            quiz_category: Some(json!({ "id": 0 })),
        };
        let question = service
            .play_with(request, &mut rng)
            .await
            .unwrap()
            .question
            .unwrap();
        assert!((1..=5).contains(&question.id));
    }

    #[tokio::test]
    async fn play_rejects_malformed_category() {
        let request = QuizRequest {
            previous_questions: Some(vec![]),
            quiz_category: Some(json!("Science")),
        };
        let err = service(3).play(request).await.unwrap_err();
        assert!(matches!(err, TriviaError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn play_in_unknown_category_is_not_found() {
        let request = QuizRequest {
            previous_questions: Some(vec![]),
            quiz_category: Some(json!({ "id": 99 })),
        };
        let err = service(6).play(request).await.unwrap_err();
        assert!(matches!(err, TriviaError::NotFound(_)));
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn play_in_empty_category_is_exhausted() {
        let request = QuizRequest {
            previous_questions: Some(vec![]),
            quiz_category: Some(json!({ "id": 3 })),
        };
        let response = service(6).play(request).await.unwrap();
        assert!(response.success);
        assert!(response.question.is_none());
    }

    #[tokio::test]
    async fn quiz_pool_scopes_to_category() {
        let pool = service(6)
            .quiz_pool(CategorySelector::Specific(1))
            .await
            .unwrap();
        let ids: Vec<_> = pool.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }
}
