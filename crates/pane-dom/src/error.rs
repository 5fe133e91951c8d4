//! DOM operation errors

use thiserror::Error;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomError {
    /// Node id does not refer to a node in the arena
    #[error("node not found")]
    NotFound,
    /// Operation requires an element node
    #[error("node is not an element")]
    NotAnElement,
}
