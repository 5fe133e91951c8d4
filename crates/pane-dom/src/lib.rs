//! Pane DOM - Document Object Model
//!
//! Arena-based DOM tree with typed element access. Lookups that can miss
//! return `Option`/`Result` so "element not found" is an explicit branch,
//! not a null check.

mod document;
mod error;
mod node;
mod selector;
mod style;
mod tree;

pub use document::Document;
pub use error::{DomError, DomResult};
pub use node::{Attribute, ElementData, Node, NodeData};
pub use selector::Selector;
pub use style::InlineStyle;
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Root node ID (the document node)
    pub const ROOT: NodeId = NodeId(0);

    /// Check that this id refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }
}
