//! Toast widget
//!
//! Transient notification overlay. Showing swaps the `hide` class for
//! `show` on the element, mirroring how the styling layer expects toast
//! state to be surfaced.

use crate::WidgetError;
use pane_dom::{DomTree, NodeId};

/// Toast bound to a notification element
#[derive(Debug)]
pub struct Toast {
    node: NodeId,
    visible: bool,
}

impl Toast {
    /// Bind a toast to a notification element
    pub fn new(tree: &DomTree, node: NodeId) -> Result<Self, WidgetError> {
        if tree.get(node).is_none_or(|n| !n.is_element()) {
            return Err(WidgetError::NotAnElement(node));
        }
        Ok(Self {
            node,
            visible: false,
        })
    }

    /// The notification element
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Show the toast
    pub fn show(&mut self, tree: &mut DomTree) -> bool {
        if tree.remove_class(self.node, "hide").is_err()
            || tree.add_class(self.node, "show").is_err()
        {
            return false;
        }
        self.visible = true;
        tracing::debug!("toast {:?} shown", self.node);
        true
    }

    /// Hide the toast
    pub fn hide(&mut self, tree: &mut DomTree) -> bool {
        if tree.remove_class(self.node, "show").is_err()
            || tree.add_class(self.node, "hide").is_err()
        {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_swaps_classes() {
        let mut tree = DomTree::new();
        let el = tree.create_element("div");
        tree.set_attribute(el, "class", "toast hide").unwrap();

        let mut toast = Toast::new(&tree, el).unwrap();
        assert!(toast.show(&mut tree));

        assert!(toast.is_visible());
        assert!(tree.has_class(el, "show"));
        assert!(!tree.has_class(el, "hide"));
    }

    #[test]
    fn test_hide_reverses() {
        let mut tree = DomTree::new();
        let el = tree.create_element("div");

        let mut toast = Toast::new(&tree, el).unwrap();
        toast.show(&mut tree);
        assert!(toast.hide(&mut tree));

        assert!(!toast.is_visible());
        assert!(tree.has_class(el, "hide"));
    }
}
