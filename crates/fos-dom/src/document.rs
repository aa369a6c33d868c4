//! Document - High-level document API
//!
//! Owns the tree, the focused element and the registered event listeners.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::{DomTree, Event, EventListener, EventType, NodeId, Result};

/// Elements focusable without a `tabindex`
const INTRINSICALLY_FOCUSABLE: &[&str] = &["a", "button", "input", "select", "textarea"];

/// HTML Document
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// `document.activeElement`
    focused: Option<NodeId>,
    listeners: HashMap<(NodeId, EventType), Vec<EventListener>>,
}

impl Document {
    /// Create a document with an `<html><head/><body/></html>` skeleton
    pub fn new(url: &str) -> Result<Self> {
        let mut doc = Self::empty(url);
        let tree = doc.tree_mut();
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.append_child(NodeId::ROOT, html)?;
        tree.append_child(html, head)?;
        tree.append_child(html, body)?;
        Ok(doc)
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            focused: None,
            listeners: HashMap::new(),
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get `<body>` element
    pub fn body(&self) -> Option<NodeId> {
        self.tree.query_selector(self.tree.root(), "body")
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.query_selector(&format!("#{id}"))
    }

    /// `document.querySelector`
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.tree.query_selector(self.tree.root(), selector)
    }

    /// `document.querySelectorAll`
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        self.tree.query_selector_all(self.tree.root(), selector)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    // Focus

    /// Whether `element.focus()` would take effect
    pub fn is_focusable(&self, id: NodeId) -> bool {
        let Ok(element) = self.tree.element(id) else {
            return false;
        };
        match element.get_attr("tabindex") {
            Some(value) => value.trim().parse::<i32>().is_ok_and(|n| n >= 0),
            None => INTRINSICALLY_FOCUSABLE.contains(&element.tag_name.as_str()),
        }
    }

    /// `element.focus()`; returns false when the element cannot take focus
    pub fn focus(&mut self, id: NodeId) -> bool {
        if !self.is_focusable(id) {
            tracing::trace!("Ignoring focus on non-focusable {:?}", id);
            return false;
        }
        self.focused = Some(id);
        tracing::trace!("Focus moved to {:?}", id);
        true
    }

    /// `document.activeElement`
    pub fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    /// Blur current focus
    pub fn blur(&mut self) {
        self.focused = None;
    }

    // Events

    /// `addEventListener`
    pub fn add_event_listener<F>(&mut self, target: NodeId, event_type: EventType, listener: F)
    where
        F: Fn(&mut Document, &mut Event) + 'static,
    {
        self.listeners
            .entry((target, event_type))
            .or_default()
            .push(Rc::new(listener));
    }

    /// Number of listeners registered on `target` for `event_type`
    pub fn listener_count(&self, target: NodeId, event_type: EventType) -> usize {
        self.listeners
            .get(&(target, event_type))
            .map_or(0, Vec::len)
    }

    /// Dispatch an event at its target, bubbling through ancestors.
    ///
    /// Returns false if a listener called `prevent_default`.
    pub fn dispatch_event(&mut self, event: &mut Event) -> bool {
        let mut path = vec![event.target];
        if event.bubbles {
            let mut cursor = self.tree.parent(event.target);
            while let Some(id) = cursor {
                path.push(id);
                cursor = self.tree.parent(id);
            }
        }

        for node in path {
            // Cloned so listeners can register more listeners mid-dispatch
            let Some(listeners) = self.listeners.get(&(node, event.event_type)).cloned() else {
                continue;
            };
            event.current_target = Some(node);
            for listener in listeners {
                listener(&mut *self, &mut *event);
            }
            if event.is_propagation_stopped() {
                break;
            }
        }
        event.current_target = None;

        !event.is_default_prevented()
    }

    /// Dispatch a click on `target`
    pub fn click(&mut self, target: NodeId) -> Event {
        let mut event = Event::click(target);
        self.dispatch_event(&mut event);
        event
    }

    /// Dispatch a keydown on `target`
    pub fn key_down(&mut self, target: NodeId, key: &str) -> Event {
        let mut event = Event::key_down(target, key);
        self.dispatch_event(&mut event);
        event
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("url", &self.url)
            .field("nodes", &self.tree.len())
            .field("focused", &self.focused)
            .field("listeners", &self.listeners.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty("about:blank")
    }
}
