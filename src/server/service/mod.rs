//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing existence and uniqueness rules for favorites
//! - **Orchestration**: Coordinating catalog and favorite repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod token;
pub mod user;
