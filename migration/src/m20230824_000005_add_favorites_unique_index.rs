use sea_orm_migration::prelude::*;

use super::m20230823_000004_create_favorites_table::Favorites;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One favorite per (user, item type, item)
        manager
            .create_index(
                Index::create()
                    .name("idx_favorites_user_item")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::ItemType)
                    .col(Favorites::ItemId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_favorites_user_item")
                    .table(Favorites::Table)
                    .to_owned(),
            )
            .await
    }
}
