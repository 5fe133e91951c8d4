//! DOM Node
//!
//! Sibling-linked node records addressed by `NodeId` instead of pointers.
//! Element data caches the `id` attribute and the class list, the two
//! lookups the selector engine hits constantly.

use crate::NodeId;

/// DOM Node - parent/child/sibling links plus node-specific data
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn unlinked(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::unlinked(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::unlinked(NodeData::Text(content.into()))
    }

    /// Create a new comment node
    pub fn comment(content: impl Into<String>) -> Self {
        Self::unlinked(NodeData::Comment(content.into()))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::unlinked(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Element-specific data
///
/// The `id` and class caches are kept coherent with the raw attribute
/// list by `set_attr`/`remove_attr`; callers never touch both sides.
#[derive(Debug)]
pub struct ElementData {
    tag: String,
    attrs: Vec<Attribute>,
    id: Option<String>,
    classes: Vec<String>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            id: None,
            classes: Vec::new(),
        }
    }

    /// Tag name (lowercased)
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Cached `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Cached class list
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Get an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Check if an attribute is present
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|a| a.name == name)
    }

    /// Set an attribute, updating the id/class caches
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value.to_string(),
            None => self.attrs.push(Attribute {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
        self.refresh_cache(name);
    }

    /// Remove an attribute, returning its old value
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.attrs.iter().position(|a| a.name == name)?;
        let old = self.attrs.remove(index);
        self.refresh_cache(name);
        Some(old.value)
    }

    /// Check class membership
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class (no-op if already present)
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
            self.write_class_attr();
        }
    }

    /// Remove a class (no-op if absent)
    pub fn remove_class(&mut self, class: &str) {
        if self.has_class(class) {
            self.classes.retain(|c| c != class);
            self.write_class_attr();
        }
    }

    /// Iterate over attributes
    pub fn attrs(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter()
    }

    fn refresh_cache(&mut self, name: &str) {
        match name {
            "id" => self.id = self.attr("id").map(str::to_string),
            "class" => {
                self.classes = self
                    .attr("class")
                    .map(|v| v.split_whitespace().map(str::to_string).collect())
                    .unwrap_or_default();
            }
            _ => {}
        }
    }

    fn write_class_attr(&mut self) {
        let joined = self.classes.join(" ");
        match self.attrs.iter_mut().find(|a| a.name == "class") {
            Some(attr) => attr.value = joined,
            None => self.attrs.push(Attribute {
                name: "class".to_string(),
                value: joined,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_set_get() {
        let mut el = ElementData::new("DIV");
        el.set_attr("data-preview", "#swatch");

        assert_eq!(el.tag(), "div");
        assert_eq!(el.attr("data-preview"), Some("#swatch"));
        assert!(el.has_attr("data-preview"));
        assert!(!el.has_attr("data-target"));
    }

    #[test]
    fn test_id_cache_follows_attr() {
        let mut el = ElementData::new("span");
        assert_eq!(el.id(), None);

        el.set_attr("id", "copyToast");
        assert_eq!(el.id(), Some("copyToast"));

        el.remove_attr("id");
        assert_eq!(el.id(), None);
    }

    #[test]
    fn test_class_cache_follows_attr() {
        let mut el = ElementData::new("div");
        el.set_attr("class", "alert alert-important");

        assert!(el.has_class("alert"));
        assert!(el.has_class("alert-important"));
        assert!(!el.has_class("toast"));
    }

    #[test]
    fn test_add_remove_class_rewrites_attr() {
        let mut el = ElementData::new("div");
        el.add_class("toast");
        el.add_class("hide");
        assert_eq!(el.attr("class"), Some("toast hide"));

        el.remove_class("hide");
        el.add_class("show");
        assert_eq!(el.attr("class"), Some("toast show"));
    }
}
