//! Page bootstrap
//!
//! Explicit factory for the "mount the page's accordion once the document is
//! ready" convention. The composition root calls it after parsing.

use std::rc::Rc;

use fos_dom::Document;

use crate::{Accordion, AccordionError, AccordionOptions, ACCORDION_SELECTOR};

/// Mount an accordion on the first `[fl-accordion]` element of `doc`,
/// taking its options from the container's markup.
pub fn bootstrap(doc: &mut Document) -> Result<Rc<Accordion>, AccordionError> {
    let container = doc
        .query_selector(ACCORDION_SELECTOR)
        .ok_or_else(|| AccordionError::ContainerNotFound {
            selector: ACCORDION_SELECTOR.to_string(),
        })?;
    let options = AccordionOptions::from_element(doc.tree(), container);
    Accordion::mount(doc, container, options)
}
