//! Pane page runtime
//!
//! Owns a document plus the runtime pieces the dashboard behaviors need:
//! an event listener registry, a one-shot timer wheel over an explicit
//! clock, the activated widgets, and the dialog/clipboard seams.
//!
//! The hosting application builds a [`Page`], calls
//! [`Page::initialize_dashboard_behaviors`] once, then feeds it input
//! events and clock time.

mod behaviors;
mod config;
mod error;
mod events;
mod page;
mod timers;

pub use config::BehaviorConfig;
pub use error::PageError;
pub use events::{EventListeners, EventType, Listener};
pub use page::{Page, TimerTask};
pub use timers::{TimerId, TimerManager};
