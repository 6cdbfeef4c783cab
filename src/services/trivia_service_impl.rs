//! `SeaORM` implementation of the `TriviaService` trait.

use crate::db::Store;
use crate::domain::{CategoryId, Page, QuestionId, QuizCategory};
use crate::models::{CategoryMap, NewQuestion, Question, QuestionPage, category_map};
use crate::services::trivia_service::{CategoryQuestions, TriviaError, TriviaService};
use async_trait::async_trait;
use rand::seq::IndexedRandom;
use tracing::{debug, warn};

pub struct SeaOrmTriviaService {
    store: Store,
}

impl SeaOrmTriviaService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TriviaService for SeaOrmTriviaService {
    async fn list_categories(&self) -> Result<CategoryMap, TriviaError> {
        let categories = self.store.list_categories().await?;
        Ok(category_map(categories))
    }

    async fn list_questions(&self, page: Page) -> Result<QuestionPage, TriviaError> {
        let result = self.store.list_questions_page(page.index()).await?;

        if result.questions.is_empty() {
            return Err(TriviaError::NotFound(format!(
                "No questions on page {}",
                page.number()
            )));
        }

        Ok(result)
    }

    async fn search_questions(&self, term: &str, page: Page) -> Result<QuestionPage, TriviaError> {
        let result = self.store.search_questions_page(term, page.index()).await?;

        if result.total == 0 {
            return Err(TriviaError::NotFound(format!(
                "No questions match '{term}'"
            )));
        }

        debug!(
            "Search '{}' matched {} questions, {} on page {}",
            term,
            result.total,
            result.questions.len(),
            page.number()
        );
        Ok(result)
    }

    async fn create_question(&self, question: NewQuestion) -> Result<QuestionId, TriviaError> {
        self.store.add_question(&question).await.map_err(|e| {
            warn!("Insert of new question rolled back: {e:#}");
            TriviaError::Internal(format!("Failed to create question: {e:#}"))
        })
    }

    async fn delete_question(&self, id: QuestionId) -> Result<QuestionId, TriviaError> {
        if self.store.get_question(id).await?.is_none() {
            return Err(TriviaError::question_not_found(id));
        }

        match self.store.remove_question(id).await {
            Ok(true) => Ok(id),
            // Deleted concurrently between lookup and delete.
            Ok(false) => Err(TriviaError::question_not_found(id)),
            Err(e) => {
                warn!("Delete of question {} rolled back: {e:#}", id);
                Err(TriviaError::Unprocessable(format!(
                    "Failed to delete question {id}"
                )))
            }
        }
    }

    async fn questions_in_category(
        &self,
        category: CategoryId,
        page: Page,
    ) -> Result<CategoryQuestions, TriviaError> {
        let found = self
            .store
            .get_category(category)
            .await?
            .ok_or(TriviaError::CategoryNotFound(category))?;

        let page = self
            .store
            .list_questions_in_category_page(category, page.index())
            .await?;

        Ok(CategoryQuestions {
            page,
            current_category: found.category_type,
        })
    }

    async fn next_quiz_question(
        &self,
        category: QuizCategory,
        previous_questions: &[QuestionId],
    ) -> Result<Option<Question>, TriviaError> {
        let filter = match category {
            QuizCategory::All => None,
            QuizCategory::Only(id) => Some(id),
        };

        let candidates = self
            .store
            .quiz_candidates(filter, previous_questions)
            .await?;

        let picked = candidates.choose(&mut rand::rng()).cloned();
        if picked.is_none() {
            debug!(
                "Quiz candidates exhausted for {:?} after {} questions",
                category,
                previous_questions.len()
            );
        }
        Ok(picked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded_service() -> SeaOrmTriviaService {
        let store = Store::new("sqlite::memory:").await.unwrap();
        store.add_category(CategoryId::new(1), "Science").await.unwrap();
        store.add_category(CategoryId::new(2), "Art").await.unwrap();

        for i in 0..12 {
            let category = if i % 3 == 0 { 2 } else { 1 };
            store
                .add_question(&NewQuestion {
                    question: format!("What is fact number {i}?"),
                    answer: format!("Fact {i}"),
                    difficulty: (i % 5) + 1,
                    category: CategoryId::new(category),
                })
                .await
                .unwrap();
        }

        SeaOrmTriviaService::new(store)
    }

    #[tokio::test]
    async fn list_questions_pages_by_ten() {
        let service = seeded_service().await;

        let first = service.list_questions(Page::FIRST).await.unwrap();
        assert_eq!(first.questions.len(), 10);
        assert_eq!(first.total, 12);

        let second = service.list_questions(Page::new(2)).await.unwrap();
        assert_eq!(second.questions.len(), 2);
        assert_eq!(second.total, 12);
    }

    #[tokio::test]
    async fn list_questions_out_of_range_is_not_found() {
        let service = seeded_service().await;

        let err = service.list_questions(Page::new(3)).await.unwrap_err();
        assert!(matches!(err, TriviaError::NotFound(_)));

        let err = service.list_questions(Page::new(0)).await.unwrap_err();
        assert!(matches!(err, TriviaError::NotFound(_)));
    }

    #[tokio::test]
    async fn search_ignores_case_and_reports_full_match_count() {
        let service = seeded_service().await;

        let result = service.search_questions("NUMBER 1", Page::FIRST).await.unwrap();
        // "number 1", "number 10", "number 11"
        assert_eq!(result.total, 3);
        assert!(
            result
                .questions
                .iter()
                .all(|q| q.question.to_lowercase().contains("number 1"))
        );

        let err = service
            .search_questions("no such words", Page::FIRST)
            .await
            .unwrap_err();
        assert!(matches!(err, TriviaError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_unknown_question_is_not_found() {
        let service = seeded_service().await;

        let err = service
            .delete_question(QuestionId::new(999))
            .await
            .unwrap_err();
        assert!(matches!(err, TriviaError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let service = seeded_service().await;

        let deleted = service.delete_question(QuestionId::new(1)).await.unwrap();
        assert_eq!(deleted, QuestionId::new(1));
        assert!(
            service
                .store
                .get_question(QuestionId::new(1))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn questions_in_category_rejects_unknown_category() {
        let service = seeded_service().await;

        let err = service
            .questions_in_category(CategoryId::new(42), Page::FIRST)
            .await
            .unwrap_err();
        assert!(matches!(err, TriviaError::CategoryNotFound(id) if id.value() == 42));

        let art = service
            .questions_in_category(CategoryId::new(2), Page::FIRST)
            .await
            .unwrap();
        assert_eq!(art.current_category, "Art");
        assert_eq!(art.page.total, 4);
        assert!(art.page.questions.iter().all(|q| q.category.value() == 2));
    }

    #[tokio::test]
    async fn quiz_never_repeats_and_runs_dry() {
        let service = seeded_service().await;
        let mut seen = Vec::new();

        while let Some(question) = service
            .next_quiz_question(QuizCategory::Only(CategoryId::new(2)), &seen)
            .await
            .unwrap()
        {
            assert_eq!(question.category, CategoryId::new(2));
            assert!(!seen.contains(&question.id));
            seen.push(question.id);
        }

        assert_eq!(seen.len(), 4);
    }

    #[tokio::test]
    async fn quiz_all_categories_excludes_previous() {
        let service = seeded_service().await;
        let previous: Vec<QuestionId> = (1..=11).map(QuestionId::new).collect();

        let question = service
            .next_quiz_question(QuizCategory::All, &previous)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(question.id, QuestionId::new(12));
    }
}
