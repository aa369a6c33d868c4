//! Accordion errors

use fos_dom::DomError;

/// Accordion error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccordionError {
    #[error("No accordion container matches {selector}")]
    ContainerNotFound { selector: String },

    #[error("Accordion item {index} has no [fl-accordion-header] element")]
    MissingHeader { index: usize },

    #[error("Accordion item {index} has no [fl-accordion-content] element")]
    MissingContent { index: usize },

    #[error("DOM error: {0}")]
    Dom(#[from] DomError),
}
