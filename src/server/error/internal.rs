use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored favorite has an item type outside of `character` / `planet`.
    ///
    /// Only possible if rows were written outside the API. Results in a 500 Internal
    /// Server Error with a generic message returned to client.
    #[error("Unknown favorite item type '{0}' in database")]
    InvalidItemType(String),
}
