//! Selector matching
//!
//! Compound simple selectors: tag, `#id`, `.class`, `[attr]`,
//! `[attr="value"]` and `:not(<simple>)`. No combinators - the dashboard
//! behaviors only ever match single elements.

use crate::ElementData;

/// Attribute presence/value check
#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrCheck {
    name: String,
    value: Option<String>,
}

/// Parsed compound selector, e.g. `input[type="color"]` or
/// `.alert:not(.alert-important)`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrCheck>,
    not: Vec<Selector>,
}

fn name_end(s: &str) -> usize {
    s.find(['#', '.', '[', ':', ' ', '\t', '>', '+', '~', ','])
        .unwrap_or(s.len())
}

impl Selector {
    /// Parse a selector string; `None` on empty input or unsupported syntax
    pub fn parse(input: &str) -> Option<Self> {
        let mut sel = Selector::default();
        let mut rest = input.trim();
        if rest.is_empty() {
            return None;
        }

        if let Some(r) = rest.strip_prefix('*') {
            rest = r;
        } else if rest.starts_with(|c: char| c.is_ascii_alphanumeric()) {
            let end = name_end(rest);
            sel.tag = Some(rest[..end].to_ascii_lowercase());
            rest = &rest[end..];
        }

        while !rest.is_empty() {
            if let Some(r) = rest.strip_prefix('#') {
                let end = name_end(r);
                if end == 0 {
                    return None;
                }
                sel.id = Some(r[..end].to_string());
                rest = &r[end..];
            } else if let Some(r) = rest.strip_prefix('.') {
                let end = name_end(r);
                if end == 0 {
                    return None;
                }
                sel.classes.push(r[..end].to_string());
                rest = &r[end..];
            } else if let Some(r) = rest.strip_prefix('[') {
                let close = r.find(']')?;
                let body = &r[..close];
                let (name, value) = match body.split_once('=') {
                    Some((n, v)) => {
                        let v = v.trim().trim_matches(|c| c == '"' || c == '\'');
                        (n.trim(), Some(v.to_string()))
                    }
                    None => (body.trim(), None),
                };
                if name.is_empty() {
                    return None;
                }
                sel.attrs.push(AttrCheck {
                    name: name.to_string(),
                    value,
                });
                rest = &r[close + 1..];
            } else if let Some(r) = rest.strip_prefix(":not(") {
                let close = r.find(')')?;
                sel.not.push(Selector::parse(&r[..close])?);
                rest = &r[close + 1..];
            } else {
                // combinators and other pseudo-classes are unsupported
                return None;
            }
        }

        Some(sel)
    }

    /// Check whether an element matches this selector
    pub fn matches(&self, el: &ElementData) -> bool {
        if let Some(tag) = &self.tag {
            if !el.tag().eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.id() != Some(id.as_str()) {
                return false;
            }
        }
        for class in &self.classes {
            if !el.has_class(class) {
                return false;
            }
        }
        for check in &self.attrs {
            match (el.attr(&check.name), &check.value) {
                (None, _) => return false,
                (Some(_), None) => {}
                (Some(actual), Some(expected)) => {
                    if actual != expected {
                        return false;
                    }
                }
            }
        }
        for neg in &self.not {
            if neg.matches(el) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(important: bool) -> ElementData {
        let mut el = ElementData::new("div");
        el.set_attr(
            "class",
            if important {
                "alert alert-important"
            } else {
                "alert"
            },
        );
        el
    }

    #[test]
    fn test_parse_basic_forms() {
        assert!(Selector::parse("div").is_some());
        assert!(Selector::parse("#main").is_some());
        assert!(Selector::parse(".alert").is_some());
        assert!(Selector::parse("*").is_some());
        assert!(Selector::parse("").is_none());
        assert!(Selector::parse("div > span").is_none());
    }

    #[test]
    fn test_attr_value_selector() {
        let sel = Selector::parse(r#"[data-bs-toggle="tooltip"]"#).unwrap();

        let mut el = ElementData::new("button");
        assert!(!sel.matches(&el));

        el.set_attr("data-bs-toggle", "tooltip");
        assert!(sel.matches(&el));

        el.set_attr("data-bs-toggle", "popover");
        assert!(!sel.matches(&el));
    }

    #[test]
    fn test_tag_attr_compound() {
        let sel = Selector::parse(r#"input[type="color"]"#).unwrap();

        let mut color = ElementData::new("input");
        color.set_attr("type", "color");
        assert!(sel.matches(&color));

        let mut text = ElementData::new("input");
        text.set_attr("type", "text");
        assert!(!sel.matches(&text));
    }

    #[test]
    fn test_not_class() {
        let sel = Selector::parse(".alert:not(.alert-important)").unwrap();

        assert!(sel.matches(&alert(false)));
        assert!(!sel.matches(&alert(true)));
    }

    #[test]
    fn test_id_selector() {
        let sel = Selector::parse("#welcome_preview_text").unwrap();

        let mut el = ElementData::new("p");
        el.set_attr("id", "welcome_preview_text");
        assert!(sel.matches(&el));
    }
}
