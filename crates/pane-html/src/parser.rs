//! HTML5 Parser implementation
//!
//! Uses html5ever's built-in RcDom and converts the result into pane-dom
//! nodes. Doctype and processing-instruction nodes are dropped; the
//! behaviors never look at them.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use pane_dom::{Document, DomTree, NodeId};

/// HTML5 parser
#[derive(Debug, Default)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse an HTML string into a Document
    pub fn parse(&self, html: &str) -> Document {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a base URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Document {
        tracing::debug!("parsing document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .expect("reading from an in-memory string cannot fail");

        let mut document = Document::empty(url);
        let root = document.tree().root();
        convert_node(&dom.document, document.tree_mut(), root);
        document.finalize();

        tracing::debug!("parsed {} nodes", document.tree().len());
        document
    }
}

/// Convert an RcDom node (and its subtree) into the pane-dom arena
fn convert_node(handle: &Handle, tree: &mut DomTree, parent: NodeId) {
    match &handle.data {
        RcNodeData::Document => {
            for child in handle.children.borrow().iter() {
                convert_node(child, tree, parent);
            }
        }
        RcNodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            if !text.trim().is_empty() {
                let id = tree.create_text(&text);
                let _ = tree.append_child(parent, id);
            }
        }
        RcNodeData::Comment { contents } => {
            let id = tree.create_comment(&contents.to_string());
            let _ = tree.append_child(parent, id);
        }
        RcNodeData::Element { name, attrs, .. } => {
            let id = tree.create_element(name.local.as_ref());
            for attr in attrs.borrow().iter() {
                let _ = tree.set_attribute(id, attr.name.local.as_ref(), &attr.value);
            }
            let _ = tree.append_child(parent, id);

            for child in handle.children.borrow().iter() {
                convert_node(child, tree, id);
            }
        }
        RcNodeData::Doctype { .. } | RcNodeData::ProcessingInstruction { .. } => {}
    }
}
