//! Catalog and favorites REST API for characters and planets.
//!
//! `model` holds the JSON DTOs exchanged with clients; `server` holds everything else.

pub mod model;
pub mod server;
