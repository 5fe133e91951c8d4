//! DOM Tree (arena-based allocation)
//!
//! Nodes live in a flat arena addressed by `NodeId`. Detached nodes stay
//! in the arena (their ids remain valid) but are unreachable from the
//! root, so traversals and queries never see them.

use crate::{DomError, DomResult, InlineStyle, Node, NodeId, Selector};

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree containing only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.is_valid() {
            self.nodes.get(id.0 as usize)
        } else {
            None
        }
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.is_valid() {
            self.nodes.get_mut(id.0 as usize)
        } else {
            None
        }
    }

    /// Number of nodes in the arena (including detached ones)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element node
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.alloc(Node::text(content))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.alloc(Node::comment(content))
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return Err(DomError::NotFound);
        }
        self.detach(child)?;

        let last = self.nodes[parent.0 as usize].last_child;
        {
            let c = &mut self.nodes[child.0 as usize];
            c.parent = parent;
            c.prev_sibling = last;
            c.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.0 as usize].next_sibling = child;
        } else {
            self.nodes[parent.0 as usize].first_child = child;
        }
        self.nodes[parent.0 as usize].last_child = child;
        Ok(())
    }

    /// Unlink a node (and its subtree) from its parent. The node stays in
    /// the arena; a node with no parent is left as-is.
    pub fn detach(&mut self, id: NodeId) -> DomResult<()> {
        let (parent, prev, next) = {
            let node = self.get(id).ok_or(DomError::NotFound)?;
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return Ok(());
        }

        if prev.is_valid() {
            self.nodes[prev.0 as usize].next_sibling = next;
        } else {
            self.nodes[parent.0 as usize].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.0 as usize].prev_sibling = prev;
        } else {
            self.nodes[parent.0 as usize].last_child = prev;
        }

        let node = &mut self.nodes[id.0 as usize];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
        Ok(())
    }

    /// Iterate over the direct children of a node
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(parent).map(|n| n.first_child).unwrap_or(NodeId::NONE),
        }
    }

    fn push_children_rev(&self, parent: NodeId, stack: &mut Vec<NodeId>) {
        let start = stack.len();
        for (id, _) in self.children(parent) {
            stack.push(id);
        }
        stack[start..].reverse();
    }

    /// Visit every node under `start` in document order
    pub fn walk(&self, start: NodeId, f: &mut impl FnMut(NodeId, &Node)) {
        let mut stack = Vec::new();
        self.push_children_rev(start, &mut stack);
        while let Some(id) = stack.pop() {
            if let Some(node) = self.get(id) {
                f(id, node);
                self.push_children_rev(id, &mut stack);
            }
        }
    }

    /// All elements under the root matching a selector, in document order.
    /// An unparseable selector matches nothing.
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        let Some(sel) = Selector::parse(selector) else {
            tracing::debug!("unsupported selector: {selector:?}");
            return Vec::new();
        };
        let mut out = Vec::new();
        self.walk(self.root(), &mut |id, node| {
            if let Some(el) = node.as_element() {
                if sel.matches(el) {
                    out.push(id);
                }
            }
        });
        out
    }

    /// First element matching a selector
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.query_selector_all(selector).into_iter().next()
    }

    /// First element with a matching `id` attribute
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let mut found = None;
        self.walk(self.root(), &mut |node_id, node| {
            if found.is_none() {
                if let Some(el) = node.as_element() {
                    if el.id() == Some(id) {
                        found = Some(node_id);
                    }
                }
            }
        });
        found
    }

    /// Get an attribute value of an element
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id)?.as_element()?.attr(name)
    }

    /// Set an attribute on an element
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.element_mut(id)?.set_attr(name, value);
        Ok(())
    }

    /// Remove an attribute from an element
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<Option<String>> {
        Ok(self.element_mut(id)?.remove_attr(name))
    }

    /// Check class membership on an element
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get(id)
            .and_then(|n| n.as_element())
            .is_some_and(|el| el.has_class(class))
    }

    /// Add a class to an element
    pub fn add_class(&mut self, id: NodeId, class: &str) -> DomResult<()> {
        self.element_mut(id)?.add_class(class);
        Ok(())
    }

    /// Remove a class from an element
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> DomResult<()> {
        self.element_mut(id)?.remove_class(class);
        Ok(())
    }

    /// Concatenated text of all text nodes under `id`
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(text) = self.get(id).and_then(|n| n.as_text()) {
            out.push_str(text);
        }
        self.walk(id, &mut |_, node| {
            if let Some(text) = node.as_text() {
                out.push_str(text);
            }
        });
        out
    }

    /// Replace all children of `id` with a single text node
    pub fn set_text_content(&mut self, id: NodeId, content: &str) -> DomResult<()> {
        if self.get(id).is_none() {
            return Err(DomError::NotFound);
        }
        let children: Vec<NodeId> = self.children(id).map(|(cid, _)| cid).collect();
        for child in children {
            self.detach(child)?;
        }
        let text = self.create_text(content);
        self.append_child(id, text)
    }

    /// Read a single inline style property of an element
    pub fn style_property(&self, id: NodeId, name: &str) -> Option<String> {
        let css = self.attribute(id, "style")?;
        InlineStyle::parse(css).get(name).map(str::to_string)
    }

    /// Set a single inline style property, rewriting the `style` attribute
    pub fn set_style_property(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        let mut style = match self.attribute(id, "style") {
            Some(css) => InlineStyle::parse(css),
            None => InlineStyle::new(),
        };
        style.set(name, value);
        let css = style.to_css();
        self.set_attribute(id, "style", &css)
    }

    fn element_mut(&mut self, id: NodeId) -> DomResult<&mut crate::ElementData> {
        self.get_mut(id)
            .ok_or(DomError::NotFound)?
            .as_element_mut()
            .ok_or(DomError::NotAnElement)
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> (DomTree, NodeId, NodeId, NodeId) {
        let mut tree = DomTree::new();
        let body = tree.create_element("body");
        tree.append_child(tree.root(), body).unwrap();

        let first = tree.create_element("div");
        let second = tree.create_element("div");
        tree.append_child(body, first).unwrap();
        tree.append_child(body, second).unwrap();
        (tree, body, first, second)
    }

    #[test]
    fn test_append_links_siblings() {
        let (tree, body, first, second) = sample_tree();

        let children: Vec<NodeId> = tree.children(body).map(|(id, _)| id).collect();
        assert_eq!(children, vec![first, second]);
        assert_eq!(tree.get(first).unwrap().next_sibling, second);
        assert_eq!(tree.get(second).unwrap().prev_sibling, first);
    }

    #[test]
    fn test_detach_unlinks_but_keeps_node() {
        let (mut tree, body, first, second) = sample_tree();

        tree.detach(first).unwrap();

        let children: Vec<NodeId> = tree.children(body).map(|(id, _)| id).collect();
        assert_eq!(children, vec![second]);
        assert!(tree.get(first).is_some());
        assert!(!tree.get(first).unwrap().parent.is_valid());

        // detaching again is a no-op
        tree.detach(first).unwrap();
    }

    #[test]
    fn test_query_selector_all_skips_detached() {
        let (mut tree, _, first, second) = sample_tree();
        tree.add_class(first, "alert").unwrap();
        tree.add_class(second, "alert").unwrap();

        assert_eq!(tree.query_selector_all(".alert"), vec![first, second]);

        tree.detach(first).unwrap();
        assert_eq!(tree.query_selector_all(".alert"), vec![second]);
    }

    #[test]
    fn test_query_not_selector() {
        let (mut tree, _, first, second) = sample_tree();
        tree.set_attribute(first, "class", "alert").unwrap();
        tree.set_attribute(second, "class", "alert alert-important")
            .unwrap();

        let matches = tree.query_selector_all(".alert:not(.alert-important)");
        assert_eq!(matches, vec![first]);
    }

    #[test]
    fn test_element_by_id() {
        let (mut tree, _, first, _) = sample_tree();
        tree.set_attribute(first, "id", "welcome_text").unwrap();

        assert_eq!(tree.element_by_id("welcome_text"), Some(first));
        assert_eq!(tree.element_by_id("missing"), None);
    }

    #[test]
    fn test_text_content_roundtrip() {
        let (mut tree, _, first, _) = sample_tree();
        tree.set_text_content(first, "Hello").unwrap();
        assert_eq!(tree.text_content(first), "Hello");

        tree.set_text_content(first, "Replaced").unwrap();
        assert_eq!(tree.text_content(first), "Replaced");
    }

    #[test]
    fn test_style_property_readback() {
        let (mut tree, _, first, _) = sample_tree();

        tree.set_style_property(first, "background-color", "#ff0000")
            .unwrap();
        assert_eq!(
            tree.style_property(first, "background-color").as_deref(),
            Some("#ff0000")
        );

        tree.set_style_property(first, "background-color", "#00ff00")
            .unwrap();
        assert_eq!(
            tree.style_property(first, "background-color").as_deref(),
            Some("#00ff00")
        );
        // other properties untouched
        tree.set_style_property(first, "color", "red").unwrap();
        assert_eq!(tree.style_property(first, "color").as_deref(), Some("red"));
    }

    #[test]
    fn test_set_attribute_on_text_node_fails() {
        let mut tree = DomTree::new();
        let text = tree.create_text("hi");

        assert_eq!(
            tree.set_attribute(text, "id", "x"),
            Err(DomError::NotAnElement)
        );
    }
}
