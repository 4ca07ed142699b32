//! Wire-format DTOs shared by the API handlers and their OpenAPI documentation.
//!
//! These types are what clients see. Server-side domain models in `server::model` are
//! converted into them at the controller boundary via `into_dto()`.

pub mod api;
pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
