//! SeaORM entity models for the holonet database schema.
//!
//! Each module maps one table created by the `migration` crate. Entities are only used
//! inside the server's data layer and the test utilities; the rest of the application
//! works with domain models converted at the repository boundary.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod prelude;
pub mod user;
