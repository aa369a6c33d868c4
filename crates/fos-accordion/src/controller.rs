//! Accordion Controller
//!
//! Wires header/content pairs inside a container and keeps their ARIA
//! state, visual state and keyboard focus in sync.
//!
//! The header's `aria-expanded` attribute is the only record of whether an
//! item is open; the controller itself holds nothing but node ids.

use std::rc::Rc;

use fos_a11y::{
    aria, wrap_next, wrap_prev, AriaState, NavAction, TabIndex, ARIA_CONTROLS, ARIA_EXPANDED, ARIA_LABELLEDBY,
};
use fos_dom::{Document, Event, EventType, NodeId};

use crate::{
    AccordionConfig, AccordionError, AccordionOptions, ACTIVE_CLASS, CONTENT_SELECTOR, HEADER_SELECTOR,
    ITEM_SELECTOR,
};

type Result<T> = std::result::Result<T, AccordionError>;

/// One header/content pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccordionItem {
    index: usize,
    element: NodeId,
    header: NodeId,
    content: NodeId,
}

impl AccordionItem {
    /// Position in document order
    pub fn index(&self) -> usize {
        self.index
    }

    /// The `[fl-accordion-item]` element
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// The `[fl-accordion-header]` element
    pub fn header(&self) -> NodeId {
        self.header
    }

    /// The `[fl-accordion-content]` element
    pub fn content(&self) -> NodeId {
        self.content
    }
}

/// Accordion controller
#[derive(Debug)]
pub struct Accordion {
    container: NodeId,
    config: AccordionConfig,
    items: Vec<AccordionItem>,
}

impl Accordion {
    /// Mount an accordion on `container`.
    ///
    /// Every item is validated before the document is touched, so an error
    /// leaves the document unchanged. On success each header gets its ids,
    /// ARIA relationships, `tabindex="0"` and click/keydown listeners.
    pub fn mount(doc: &mut Document, container: NodeId, options: AccordionOptions) -> Result<Rc<Self>> {
        doc.tree().element(container)?;

        let accordion = Rc::new(Self {
            container,
            config: AccordionConfig::with_options(&options),
            items: Self::discover(doc, container)?,
        });
        accordion.wire(doc)?;

        tracing::debug!(
            "Mounted accordion on {:?}: {} items, allow_multiple_open={}",
            container,
            accordion.items.len(),
            accordion.config.allow_multiple_open
        );
        Ok(accordion)
    }

    fn discover(doc: &Document, container: NodeId) -> Result<Vec<AccordionItem>> {
        let tree = doc.tree();
        tree.query_selector_all(container, ITEM_SELECTOR)
            .into_iter()
            .enumerate()
            .map(|(index, element)| -> Result<AccordionItem> {
                let header = tree
                    .query_selector(element, HEADER_SELECTOR)
                    .ok_or(AccordionError::MissingHeader { index })?;
                let content = tree
                    .query_selector(element, CONTENT_SELECTOR)
                    .ok_or(AccordionError::MissingContent { index })?;
                Ok(AccordionItem {
                    index,
                    element,
                    header,
                    content,
                })
            })
            .collect()
    }

    fn wire(self: &Rc<Self>, doc: &mut Document) -> Result<()> {
        for &item in &self.items {
            let header_id = format!("accordion-header-{}", item.index);
            let content_id = format!("accordion-content-{}", item.index);

            let tree = doc.tree_mut();
            tree.set_attribute(item.header, "id", &header_id)?;
            tree.set_attribute(item.content, "id", &content_id)?;
            tree.set_attribute(item.header, ARIA_CONTROLS, &content_id)?;
            tree.set_attribute(item.content, ARIA_LABELLEDBY, &header_id)?;

            let accordion = Rc::clone(self);
            doc.add_event_listener(item.header, EventType::Click, move |doc, _| {
                if let Err(err) = accordion.toggle(doc, item) {
                    tracing::warn!("Accordion click on item {} failed: {}", item.index, err);
                }
            });
            let accordion = Rc::clone(self);
            doc.add_event_listener(item.header, EventType::KeyDown, move |doc, event| {
                if let Err(err) = accordion.handle_key(doc, event, item) {
                    tracing::warn!("Accordion keydown on item {} failed: {}", item.index, err);
                }
            });

            doc.tree_mut()
                .set_attribute(item.header, "tabindex", &TabIndex::Sequential(0).to_string())?;
        }
        Ok(())
    }

    /// Container element
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Effective configuration
    pub fn config(&self) -> &AccordionConfig {
        &self.config
    }

    /// Items in document order
    pub fn items(&self) -> &[AccordionItem] {
        &self.items
    }

    /// Item at `index`
    pub fn item(&self, index: usize) -> Option<AccordionItem> {
        self.items.get(index).copied()
    }

    /// Item whose header is `header`
    pub fn item_for_header(&self, header: NodeId) -> Option<AccordionItem> {
        self.items.iter().find(|item| item.header == header).copied()
    }

    /// Whether the item's header reads `aria-expanded="true"`
    pub fn is_expanded(&self, doc: &Document, item: AccordionItem) -> bool {
        doc.tree()
            .get_attribute(item.header, ARIA_EXPANDED)
            .is_some_and(aria::parse_bool)
    }

    /// Write the expanded flag; visual state is left to `open`/`close`
    pub fn set_expanded(&self, doc: &mut Document, item: AccordionItem, expanded: bool) -> Result<()> {
        let state = AriaState::Expanded(expanded);
        doc.tree_mut()
            .set_attribute(item.header, state.attribute_name(), &state.attribute_value())?;
        Ok(())
    }

    /// Indices of expanded items
    pub fn expanded_indices(&self, doc: &Document) -> Vec<usize> {
        self.items
            .iter()
            .filter(|&&item| self.is_expanded(doc, item))
            .map(|item| item.index)
            .collect()
    }

    /// Flip an item; without `allow_multiple_open` every other item closes first
    pub fn toggle(&self, doc: &mut Document, item: AccordionItem) -> Result<()> {
        let expanded = self.is_expanded(doc, item);
        tracing::trace!("Toggling accordion item {} (expanded={})", item.index, expanded);

        if !self.config.allow_multiple_open {
            for &other in self.items.iter().filter(|&&other| other != item) {
                self.close(doc, other)?;
            }
        }

        if expanded {
            self.close(doc, item)
        } else {
            self.open(doc, item)
        }
    }

    /// Expand an item. Idempotent.
    pub fn open(&self, doc: &mut Document, item: AccordionItem) -> Result<()> {
        self.set_expanded(doc, item, true)?;
        let tree = doc.tree_mut();
        let height = tree.scroll_height(item.content)?;
        if height == 0 {
            tracing::debug!("Accordion item {} has no layout height; opening to 0px", item.index);
        }
        tree.set_style_property(item.content, "max-height", &format!("{height}px"))?;
        tree.add_class(item.content, ACTIVE_CLASS)?;
        tracing::trace!("Opened accordion item {} ({}px)", item.index, height);
        Ok(())
    }

    /// Collapse an item. Idempotent.
    pub fn close(&self, doc: &mut Document, item: AccordionItem) -> Result<()> {
        self.set_expanded(doc, item, false)?;
        let tree = doc.tree_mut();
        tree.remove_style_property(item.content, "max-height")?;
        tree.remove_class(item.content, ACTIVE_CLASS)?;
        tracing::trace!("Closed accordion item {}", item.index);
        Ok(())
    }

    /// Route a keydown received by `item`'s header.
    ///
    /// Handled keys have their default action prevented; anything else is
    /// left untouched.
    pub fn handle_key(&self, doc: &mut Document, event: &mut Event, item: AccordionItem) -> Result<()> {
        let Some(action) = event.key().and_then(NavAction::from_key) else {
            return Ok(());
        };
        event.prevent_default();

        match action {
            NavAction::Activate => self.toggle(doc, item)?,
            NavAction::NextElement => self.focus_next_header(doc, item.header),
            NavAction::PrevElement => self.focus_previous_header(doc, item.header),
            NavAction::FirstElement => self.focus_first_header(doc),
            NavAction::LastElement => self.focus_last_header(doc),
        }
        Ok(())
    }

    /// Headers currently under the container, queried fresh on each call
    pub fn headers(&self, doc: &Document) -> Vec<NodeId> {
        doc.tree().query_selector_all(self.container, HEADER_SELECTOR)
    }

    /// Focus the header after `current`, wrapping to the first
    pub fn focus_next_header(&self, doc: &mut Document, current: NodeId) {
        let headers = self.headers(doc);
        let position = headers.iter().position(|&h| h == current);
        if let Some(next) = wrap_next(position, headers.len()) {
            doc.focus(headers[next]);
        }
    }

    /// Focus the header before `current`, wrapping to the last
    pub fn focus_previous_header(&self, doc: &mut Document, current: NodeId) {
        let headers = self.headers(doc);
        let position = headers.iter().position(|&h| h == current);
        if let Some(prev) = wrap_prev(position, headers.len()) {
            doc.focus(headers[prev]);
        }
    }

    pub fn focus_first_header(&self, doc: &mut Document) {
        if let Some(&first) = self.headers(doc).first() {
            doc.focus(first);
        }
    }

    pub fn focus_last_header(&self, doc: &mut Document) {
        if let Some(&last) = self.headers(doc).last() {
            doc.focus(last);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Container with `n` items built directly through the tree API
    fn build(n: usize, options: AccordionOptions) -> (Document, Rc<Accordion>) {
        let mut doc = Document::new("about:blank").unwrap();
        let body = doc.body().unwrap();
        let tree = doc.tree_mut();
        let container = tree.create_element("div");
        tree.append_child(body, container).unwrap();
        tree.set_attribute(container, "fl-accordion", "").unwrap();

        for i in 0..n {
            let item = tree.create_element("div");
            let header = tree.create_element("button");
            let content = tree.create_element("div");
            tree.append_child(container, item).unwrap();
            tree.append_child(item, header).unwrap();
            tree.append_child(item, content).unwrap();
            tree.set_attribute(item, "fl-accordion-item", "").unwrap();
            tree.set_attribute(header, "fl-accordion-header", "").unwrap();
            tree.set_attribute(content, "fl-accordion-content", "").unwrap();
            tree.set_scroll_height(content, 100 + i as u32).unwrap();
        }

        let accordion = Accordion::mount(&mut doc, container, options).unwrap();
        (doc, accordion)
    }

    #[test]
    fn test_mount_wires_ids_and_listeners() {
        let (doc, accordion) = build(2, AccordionOptions::new());
        let tree = doc.tree();

        for item in accordion.items() {
            let i = item.index();
            assert_eq!(tree.get_attribute(item.header(), "id"), Some(format!("accordion-header-{i}").as_str()));
            assert_eq!(tree.get_attribute(item.content(), "id"), Some(format!("accordion-content-{i}").as_str()));
            assert_eq!(tree.get_attribute(item.header(), "tabindex"), Some("0"));
            assert_eq!(doc.listener_count(item.header(), EventType::Click), 1);
            assert_eq!(doc.listener_count(item.header(), EventType::KeyDown), 1);
            // Not initialised until first interaction
            assert_eq!(tree.get_attribute(item.header(), ARIA_EXPANDED), None);
        }
    }

    #[test]
    fn test_open_sets_visual_state() {
        let (mut doc, accordion) = build(2, AccordionOptions::new());
        let item = accordion.item(1).unwrap();

        accordion.open(&mut doc, item).unwrap();
        let tree = doc.tree();
        assert_eq!(tree.get_attribute(item.header(), ARIA_EXPANDED), Some("true"));
        assert_eq!(tree.style_property(item.content(), "max-height").as_deref(), Some("101px"));
        assert!(tree.has_class(item.content(), ACTIVE_CLASS));
    }

    #[test]
    fn test_close_clears_visual_state() {
        let (mut doc, accordion) = build(1, AccordionOptions::new());
        let item = accordion.item(0).unwrap();

        accordion.open(&mut doc, item).unwrap();
        accordion.close(&mut doc, item).unwrap();
        let tree = doc.tree();
        assert_eq!(tree.get_attribute(item.header(), ARIA_EXPANDED), Some("false"));
        assert_eq!(tree.style_property(item.content(), "max-height"), None);
        assert!(!tree.has_class(item.content(), ACTIVE_CLASS));
    }

    #[test]
    fn test_open_and_close_are_idempotent() {
        let (mut doc, accordion) = build(1, AccordionOptions::new());
        let item = accordion.item(0).unwrap();
        let snapshot = |doc: &Document| {
            let tree = doc.tree();
            (
                tree.get_attribute(item.header(), ARIA_EXPANDED).map(str::to_string),
                tree.get_attribute(item.content(), "style").map(str::to_string),
                tree.get_attribute(item.content(), "class").map(str::to_string),
            )
        };

        accordion.open(&mut doc, item).unwrap();
        let once = snapshot(&doc);
        accordion.open(&mut doc, item).unwrap();
        assert_eq!(snapshot(&doc), once);

        accordion.close(&mut doc, item).unwrap();
        let once = snapshot(&doc);
        accordion.close(&mut doc, item).unwrap();
        assert_eq!(snapshot(&doc), once);
    }

    #[test]
    fn test_open_close_touch_only_max_height_and_active() {
        let (mut doc, accordion) = build(1, AccordionOptions::new());
        let item = accordion.item(0).unwrap();
        let authored = "--Panel-Gap: 4px; background: url(data:image/gif;base64,R0lG) no-repeat";
        doc.tree_mut().set_attribute(item.content(), "style", authored).unwrap();
        doc.tree_mut().set_attribute(item.content(), "class", "panel wide").unwrap();

        accordion.open(&mut doc, item).unwrap();
        assert_eq!(
            doc.tree().get_attribute(item.content(), "style"),
            Some(format!("{authored}; max-height: 100px").as_str())
        );
        assert_eq!(doc.tree().get_attribute(item.content(), "class"), Some("panel wide active"));

        accordion.close(&mut doc, item).unwrap();
        assert_eq!(doc.tree().get_attribute(item.content(), "style"), Some(authored));
        assert_eq!(doc.tree().get_attribute(item.content(), "class"), Some("panel wide"));
    }

    #[test]
    fn test_toggle_exclusive() {
        let (mut doc, accordion) = build(3, AccordionOptions::new());
        let [a, b, _] = [0, 1, 2].map(|i| accordion.item(i).unwrap());

        accordion.toggle(&mut doc, a).unwrap();
        assert_eq!(accordion.expanded_indices(&doc), vec![0]);
        accordion.toggle(&mut doc, b).unwrap();
        assert_eq!(accordion.expanded_indices(&doc), vec![1]);
        accordion.toggle(&mut doc, b).unwrap();
        assert!(accordion.expanded_indices(&doc).is_empty());
    }

    #[test]
    fn test_toggle_multiple() {
        let (mut doc, accordion) = build(3, AccordionOptions::new().allow_multiple_open(true));
        accordion.toggle(&mut doc, accordion.item(0).unwrap()).unwrap();
        accordion.toggle(&mut doc, accordion.item(2).unwrap()).unwrap();
        assert_eq!(accordion.expanded_indices(&doc), vec![0, 2]);
    }

    #[test]
    fn test_expanded_state_reads_attribute() {
        let (mut doc, accordion) = build(1, AccordionOptions::new());
        let item = accordion.item(0).unwrap();

        for (value, expected) in [("true", true), ("false", false), ("TRUE", false), ("", false)] {
            doc.tree_mut().set_attribute(item.header(), ARIA_EXPANDED, value).unwrap();
            assert_eq!(accordion.is_expanded(&doc, item), expected, "aria-expanded={value:?}");
        }

        accordion.set_expanded(&mut doc, item, true).unwrap();
        assert!(accordion.is_expanded(&doc, item));
    }

    #[test]
    fn test_handle_key_ignores_unhandled() {
        let (mut doc, accordion) = build(2, AccordionOptions::new());
        let item = accordion.item(0).unwrap();
        doc.focus(item.header());

        let mut event = Event::key_down(item.header(), "Tab");
        accordion.handle_key(&mut doc, &mut event, item).unwrap();
        assert!(!event.is_default_prevented());
        assert_eq!(doc.active_element(), Some(item.header()));
        assert!(accordion.expanded_indices(&doc).is_empty());
    }

    #[test]
    fn test_focus_helpers_with_unknown_current() {
        let (mut doc, accordion) = build(3, AccordionOptions::new());
        let headers = accordion.headers(&doc);
        let stranger = accordion.container();

        accordion.focus_next_header(&mut doc, stranger);
        assert_eq!(doc.active_element(), Some(headers[0]));
        accordion.focus_previous_header(&mut doc, stranger);
        assert_eq!(doc.active_element(), Some(headers[2]));
    }

    #[test]
    fn test_item_lookup() {
        let (_doc, accordion) = build(2, AccordionOptions::new());
        let second = accordion.item(1).unwrap();
        assert_eq!(accordion.item_for_header(second.header()), Some(second));
        assert_eq!(accordion.item_for_header(second.content()), None);
        assert_eq!(accordion.item(2), None);
    }
}
