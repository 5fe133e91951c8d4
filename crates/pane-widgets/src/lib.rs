//! Pane widgets
//!
//! The widget layer the dashboard behaviors drive: tooltips, dismissible
//! alerts, toasts, a confirm-dialog seam and clipboard backends. Each
//! widget is constructed over a DOM element handle.

mod alert;
mod clipboard;
mod dialog;
mod toast;
mod tooltip;

pub use alert::Alert;
pub use clipboard::{ClipboardBackend, MemoryClipboard, SystemClipboard};
pub use dialog::{DialogHost, HeadlessDialogs};
pub use toast::Toast;
pub use tooltip::{Tooltip, TooltipPlacement};

use pane_dom::NodeId;
use thiserror::Error;

/// Widget construction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// Widgets can only be bound to element nodes
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
}
