//! Alert widget
//!
//! Dismissible alert banner. `close` detaches the element from the tree,
//! which is the dismiss operation; a closed alert stays closed.

use crate::WidgetError;
use pane_dom::{DomTree, NodeId};

/// Alert bound to a banner element
#[derive(Debug)]
pub struct Alert {
    node: NodeId,
    closed: bool,
}

impl Alert {
    /// Bind an alert to a banner element
    pub fn new(tree: &DomTree, node: NodeId) -> Result<Self, WidgetError> {
        if tree.get(node).is_none_or(|n| !n.is_element()) {
            return Err(WidgetError::NotAnElement(node));
        }
        Ok(Self {
            node,
            closed: false,
        })
    }

    /// The banner element
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Dismiss the alert by removing its element from the tree.
    /// Returns false if it was already closed.
    pub fn close(&mut self, tree: &mut DomTree) -> bool {
        if self.closed || tree.detach(self.node).is_err() {
            return false;
        }
        self.closed = true;
        tracing::debug!("alert {:?} dismissed", self.node);
        true
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_detaches_element() {
        let mut tree = DomTree::new();
        let body = tree.create_element("body");
        let root = tree.root();
        tree.append_child(root, body).unwrap();
        let banner = tree.create_element("div");
        tree.add_class(banner, "alert").unwrap();
        tree.append_child(body, banner).unwrap();

        let mut alert = Alert::new(&tree, banner).unwrap();
        assert!(alert.close(&mut tree));

        assert!(alert.is_closed());
        assert!(tree.query_selector_all(".alert").is_empty());
    }

    #[test]
    fn test_double_close_is_noop() {
        let mut tree = DomTree::new();
        let banner = tree.create_element("div");

        let mut alert = Alert::new(&tree, banner).unwrap();
        assert!(alert.close(&mut tree));
        assert!(!alert.close(&mut tree));
    }
}
