//! Page runtime errors

use pane_dom::DomError;
use thiserror::Error;

/// Page runtime errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// A lookup by fixed identifier found nothing
    #[error("required element #{0} is missing")]
    MissingElement(String),

    /// Underlying DOM operation failed
    #[error(transparent)]
    Dom(#[from] DomError),
}
