//! HTTP request handlers.
//!
//! Handlers authenticate through `AuthGuard`, call into the service layer, and convert
//! domain models to DTOs. Each handler carries a `utoipa::path` annotation that feeds
//! the OpenAPI document served at `/api/docs`.

pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

#[cfg(test)]
mod test;
