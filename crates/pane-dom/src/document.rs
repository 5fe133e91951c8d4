//! Document - High-level document API

use crate::{DomTree, NodeId};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    tree: DomTree,
    url: String,
    html_element: NodeId,
    head_element: NodeId,
    body_element: NodeId,
}

impl Document {
    /// Create a new document with an html/head/body skeleton
    pub fn new(url: &str) -> Self {
        let mut doc = Self::empty(url);

        let html = doc.tree.create_element("html");
        let head = doc.tree.create_element("head");
        let body = doc.tree.create_element("body");

        let root = doc.tree.root();
        // infallible: all four ids were just allocated
        let _ = doc.tree.append_child(root, html);
        let _ = doc.tree.append_child(html, head);
        let _ = doc.tree.append_child(html, body);

        doc.html_element = html;
        doc.head_element = head;
        doc.body_element = body;
        doc
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate and cache the html/head/body elements after external
    /// construction (the HTML parser builds the tree, then calls this)
    pub fn finalize(&mut self) {
        self.html_element = self.tree.query_selector("html").unwrap_or(NodeId::NONE);
        self.head_element = self.tree.query_selector("head").unwrap_or(NodeId::NONE);
        self.body_element = self.tree.query_selector("body").unwrap_or(NodeId::NONE);
    }

    /// Document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Document title (text of the first <title> in <head>)
    pub fn title(&self) -> String {
        if !self.head_element.is_valid() {
            return String::new();
        }
        for (id, node) in self.tree.children(self.head_element) {
            if node.as_element().is_some_and(|el| el.tag() == "title") {
                return self.tree.text_content(id);
            }
        }
        String::new()
    }

    /// The <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// The <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// The <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Get element by ID
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree.element_by_id(id)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
