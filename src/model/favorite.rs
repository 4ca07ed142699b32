use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalog item kind a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemTypeDto {
    Character,
    Planet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub item_type: ItemTypeDto,
    pub item_id: i32,
}

/// Response of a successful favorite creation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteCreatedDto {
    pub message: String,
    pub favorite: FavoriteDto,
}
