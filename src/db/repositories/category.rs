use crate::domain::CategoryId;
use crate::entities::{categories, prelude::*};
use crate::models::Category;
use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set};
use tracing::info;

/// Repository for the read-mostly category table
pub struct CategoryRepository {
    conn: DatabaseConnection,
}

impl CategoryRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(model: categories::Model) -> Category {
        Category {
            id: CategoryId::new(model.id),
            category_type: model.category_type,
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Category>> {
        let rows = Categories::find()
            .order_by_asc(categories::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn get(&self, id: CategoryId) -> Result<Option<Category>> {
        let row = Categories::find_by_id(id.value()).one(&self.conn).await?;
        Ok(row.map(Self::map_model))
    }

    /// Categories are reference data; this exists for seeding and tests.
    pub async fn add(&self, id: CategoryId, category_type: &str) -> Result<()> {
        let active_model = categories::ActiveModel {
            id: Set(id.value()),
            category_type: Set(category_type.to_string()),
        };

        Categories::insert(active_model).exec(&self.conn).await?;
        info!("Added category {}: {}", id, category_type);
        Ok(())
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Categories::find().count(&self.conn).await?)
    }
}
