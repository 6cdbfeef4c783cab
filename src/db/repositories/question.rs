use crate::domain::{CategoryId, QUESTIONS_PER_PAGE, QuestionId};
use crate::entities::{prelude::*, questions};
use crate::models::{NewQuestion, Question, QuestionPage};
use anyhow::Result;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Select, Set, TransactionTrait,
};
use tracing::{debug, info};

/// Repository for question reads and mutations
pub struct QuestionRepository {
    conn: DatabaseConnection,
}

impl QuestionRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    // ========================================================================
    // Model Conversion Helpers
    // ========================================================================

    fn map_model(model: questions::Model) -> Question {
        Question {
            id: QuestionId::new(model.id),
            question: model.question,
            answer: model.answer,
            difficulty: model.difficulty,
            category: CategoryId::new(model.category),
        }
    }

    /// Cuts one page out of `select` and counts the full result set.
    /// `page_index` is zero-based; `None` yields an empty page.
    async fn fetch_page(
        &self,
        select: Select<Questions>,
        page_index: Option<u64>,
    ) -> Result<QuestionPage> {
        let paginator = select
            .order_by_asc(questions::Column::Id)
            .paginate(&self.conn, QUESTIONS_PER_PAGE);

        let total = paginator.num_items().await?;
        let rows = match page_index {
            Some(index) if page_in_range(index, total) => paginator.fetch_page(index).await?,
            _ => Vec::new(),
        };

        Ok(QuestionPage {
            questions: rows.into_iter().map(Self::map_model).collect(),
            total,
        })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub async fn page_all(&self, page_index: Option<u64>) -> Result<QuestionPage> {
        self.fetch_page(Questions::find(), page_index).await
    }

    pub async fn page_by_category(
        &self,
        category: CategoryId,
        page_index: Option<u64>,
    ) -> Result<QuestionPage> {
        let select = Questions::find().filter(questions::Column::Category.eq(category.value()));
        self.fetch_page(select, page_index).await
    }

    /// Case-insensitive substring search over question text. `total` is the
    /// size of the whole match set.
    pub async fn search_page(&self, term: &str, page_index: Option<u64>) -> Result<QuestionPage> {
        let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
        debug!("Searching questions with pattern {}", pattern);

        let select = Questions::find().filter(
            Expr::expr(Func::lower(Expr::col(questions::Column::Question)))
                .like(LikeExpr::new(pattern).escape('\\')),
        );
        self.fetch_page(select, page_index).await
    }

    pub async fn get(&self, id: QuestionId) -> Result<Option<Question>> {
        let row = Questions::find_by_id(id.value()).one(&self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    pub async fn find_by_text(&self, text: &str) -> Result<Vec<Question>> {
        let rows = Questions::find()
            .filter(questions::Column::Question.eq(text))
            .order_by_asc(questions::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    /// Every question not in `exclude`, optionally limited to one category.
    pub async fn quiz_candidates(
        &self,
        category: Option<CategoryId>,
        exclude: &[QuestionId],
    ) -> Result<Vec<Question>> {
        let mut condition = Condition::all();
        if let Some(category) = category {
            condition = condition.add(questions::Column::Category.eq(category.value()));
        }
        if !exclude.is_empty() {
            condition = condition
                .add(questions::Column::Id.is_not_in(exclude.iter().map(QuestionId::value)));
        }

        let rows = Questions::find()
            .filter(condition)
            .order_by_asc(questions::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Questions::find().count(&self.conn).await?)
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    pub async fn add(&self, question: &NewQuestion) -> Result<QuestionId> {
        let active_model = questions::ActiveModel {
            question: Set(question.question.clone()),
            answer: Set(question.answer.clone()),
            difficulty: Set(question.difficulty),
            category: Set(question.category.value()),
            ..Default::default()
        };

        let txn = self.conn.begin().await?;
        let res = Questions::insert(active_model).exec(&txn).await?;
        txn.commit().await?;

        let id = QuestionId::new(res.last_insert_id);
        info!("Added question {} in category {}", id, question.category);
        Ok(id)
    }

    /// Deletes one question inside a transaction. An error leaves the row in
    /// place; the transaction is rolled back when dropped uncommitted.
    pub async fn remove(&self, id: QuestionId) -> Result<bool> {
        let txn = self.conn.begin().await?;
        let result = Questions::delete_by_id(id.value()).exec(&txn).await?;
        txn.commit().await?;

        let removed = result.rows_affected > 0;
        if removed {
            info!("Removed question with ID: {}", id);
        }
        Ok(removed)
    }
}

/// Whether the zero-based page `index` starts inside a result set of `total`
/// rows. Offsets that overflow `u64` are out of range.
fn page_in_range(index: u64, total: u64) -> bool {
    index
        .checked_mul(QUESTIONS_PER_PAGE)
        .is_some_and(|offset| offset < total)
}

/// Escapes LIKE wildcards so the term is matched literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_in_range_checks_offset_against_total() {
        assert!(page_in_range(0, 1));
        assert!(page_in_range(1, 14));
        assert!(!page_in_range(2, 14));
        assert!(!page_in_range(0, 0));
        assert!(!page_in_range(u64::MAX / 2, 14));
        assert!(!page_in_range(1_844_674_407_370_955_162, 14));
    }

    #[test]
    fn escape_like_leaves_plain_text() {
        assert_eq!(escape_like("what is"), "what is");
    }

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\"), "c:\\\\");
    }
}
