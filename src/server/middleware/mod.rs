//! Request middleware.
//!
//! `auth` resolves the bearer token on a request to a stored user.

pub mod auth;

#[cfg(test)]
mod test;
