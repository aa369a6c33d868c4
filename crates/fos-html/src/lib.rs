//! fOS HTML Parser
//!
//! HTML5 parser built on html5ever, producing `fos-dom` documents.

mod parser;

pub use fos_dom::Document;
pub use parser::HtmlParser;

/// Parse an HTML string into a document
pub fn parse(html: &str) -> Result<Document, HtmlError> {
    HtmlParser::new().parse(html)
}

/// Parse error
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    #[error("Failed to read HTML input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to build DOM: {0}")]
    Dom(#[from] fos_dom::DomError),
}
