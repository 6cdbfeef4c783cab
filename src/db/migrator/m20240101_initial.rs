use crate::entities::prelude::*;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        manager
            .create_table(
                schema
                    .create_table_from_entity(Categories)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Questions)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_questions_category")
                    .table(QuestionsTable::Table)
                    .col(QuestionsTable::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(QuestionsTable::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CategoriesTable::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum QuestionsTable {
    #[sea_orm(iden = "questions")]
    Table,
    Category,
}

#[derive(DeriveIden)]
enum CategoriesTable {
    #[sea_orm(iden = "categories")]
    Table,
}
