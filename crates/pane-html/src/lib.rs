//! Pane HTML loader
//!
//! Parses HTML5 into `pane-dom` documents via html5ever's RcDom, which is
//! simpler and more reliable than implementing TreeSink directly.

mod parser;

pub use parser::HtmlParser;

/// Parse an HTML string into a document
pub fn parse(html: &str) -> pane_dom::Document {
    HtmlParser::new().parse(html)
}
