//! Tooltip widget
//!
//! Bound to a trigger element carrying `data-bs-toggle="tooltip"`. The
//! title comes from `data-bs-title`, falling back to `title`; placement
//! from `data-bs-placement`.

use crate::WidgetError;
use pane_dom::{DomTree, NodeId};

/// Tooltip placement relative to the trigger element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipPlacement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl TooltipPlacement {
    /// Parse a placement attribute; unknown values fall back to top
    pub fn parse(value: &str) -> Self {
        match value {
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            "right" => Self::Right,
            _ => Self::Top,
        }
    }
}

/// Tooltip bound to a trigger element
#[derive(Debug)]
pub struct Tooltip {
    node: NodeId,
    title: String,
    placement: TooltipPlacement,
    visible: bool,
}

impl Tooltip {
    /// Bind a tooltip to a trigger element, reading its configuration
    /// from the element's attributes
    pub fn new(tree: &DomTree, node: NodeId) -> Result<Self, WidgetError> {
        let el = tree
            .get(node)
            .and_then(|n| n.as_element())
            .ok_or(WidgetError::NotAnElement(node))?;

        let title = el
            .attr("data-bs-title")
            .or_else(|| el.attr("title"))
            .unwrap_or_default()
            .to_string();
        let placement = el
            .attr("data-bs-placement")
            .map(TooltipPlacement::parse)
            .unwrap_or_default();

        Ok(Self {
            node,
            title,
            placement,
            visible: false,
        })
    }

    /// The trigger element
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Tooltip text
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn placement(&self) -> TooltipPlacement {
        self.placement
    }

    /// Show the tooltip popup
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the tooltip popup
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Toggle visibility
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_title_and_placement() {
        let mut tree = DomTree::new();
        let button = tree.create_element("button");
        tree.set_attribute(button, "data-bs-title", "Copy to clipboard")
            .unwrap();
        tree.set_attribute(button, "data-bs-placement", "bottom")
            .unwrap();

        let tip = Tooltip::new(&tree, button).unwrap();
        assert_eq!(tip.title(), "Copy to clipboard");
        assert_eq!(tip.placement(), TooltipPlacement::Bottom);
    }

    #[test]
    fn test_title_falls_back_to_title_attr() {
        let mut tree = DomTree::new();
        let button = tree.create_element("button");
        tree.set_attribute(button, "title", "Delete").unwrap();

        let tip = Tooltip::new(&tree, button).unwrap();
        assert_eq!(tip.title(), "Delete");
        assert_eq!(tip.placement(), TooltipPlacement::Top);
    }

    #[test]
    fn test_show_hide_toggle() {
        let mut tree = DomTree::new();
        let button = tree.create_element("button");
        let mut tip = Tooltip::new(&tree, button).unwrap();

        assert!(!tip.is_visible());
        tip.show();
        assert!(tip.is_visible());
        tip.toggle();
        assert!(!tip.is_visible());
    }

    #[test]
    fn test_rejects_text_node() {
        let mut tree = DomTree::new();
        let text = tree.create_text("hi");

        assert!(Tooltip::new(&tree, text).is_err());
    }
}
