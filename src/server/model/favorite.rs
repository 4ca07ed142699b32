//! Favorite domain models and parameters.
//!
//! A favorite ties a user to one catalog item. The item kind is the closed `ItemType`
//! enum; the database stores it as its lowercase name.

use std::fmt;
use std::str::FromStr;

use crate::{
    model::favorite::{FavoriteDto, ItemTypeDto},
    server::error::{internal::InternalError, AppError},
};

/// Kind of catalog item a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Character,
    Planet,
}

impl ItemType {
    /// Value stored in the `favorites.item_type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Planet => "planet",
        }
    }

    /// Capitalized name used at the start of client messages, e.g. "Planet not found".
    pub fn title(self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Planet => "Planet",
        }
    }

    pub fn into_dto(self) -> ItemTypeDto {
        match self {
            Self::Character => ItemTypeDto::Character,
            Self::Planet => ItemTypeDto::Planet,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "character" => Ok(Self::Character),
            "planet" => Ok(Self::Planet),
            other => Err(InternalError::InvalidItemType(other.to_string())),
        }
    }
}

/// A user's favorite catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub item_type: ItemType,
    pub item_id: i32,
}

impl Favorite {
    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            user_id: self.user_id,
            item_type: self.item_type.into_dto(),
            item_id: self.item_id,
        }
    }

    /// Converts an entity model to a favorite domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The converted favorite
    /// - `Err(AppError::InternalErr(InvalidItemType))` - Stored item type is not a known kind
    pub fn from_entity(entity: entity::favorite::Model) -> Result<Self, AppError> {
        let item_type = entity.item_type.parse::<ItemType>()?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            item_type,
            item_id: entity.item_id,
        })
    }
}

/// Identifies one favorite by its owner and target item.
///
/// Used both to create a favorite and to look up or delete an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteKey {
    pub user_id: i32,
    pub item_type: ItemType,
    pub item_id: i32,
}

impl FavoriteKey {
    pub fn new(user_id: i32, item_type: ItemType, item_id: i32) -> Self {
        Self {
            user_id,
            item_type,
            item_id,
        }
    }
}
