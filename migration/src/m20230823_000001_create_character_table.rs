use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len(Character::Name, 250))
                    .col(string_len_null(Character::BirthYear, 10))
                    .col(string_len_null(Character::EyeColor, 250))
                    .col(string_len_null(Character::Gender, 250))
                    .col(string_len_null(Character::HairColor, 250))
                    .col(string_len_null(Character::Height, 10))
                    .col(string_len_null(Character::Mass, 10))
                    .col(string_len_null(Character::SkinColor, 250))
                    .col(string_len_null(Character::Homeworld, 250))
                    .col(text_null(Character::Films))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    BirthYear,
    EyeColor,
    Gender,
    HairColor,
    Height,
    Mass,
    SkinColor,
    Homeworld,
    Films,
}
