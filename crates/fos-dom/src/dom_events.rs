//! DOM Events
//!
//! UI events dispatched to element listeners.

use std::rc::Rc;

use crate::{Document, NodeId};

/// DOM event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    KeyDown,
}

/// Event listener callback
///
/// Listeners receive the document mutably, so they may freely change
/// attributes, focus or dispatch further events.
pub type EventListener = Rc<dyn Fn(&mut Document, &mut Event)>;

/// DOM event
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: EventType,
    pub target: NodeId,
    pub current_target: Option<NodeId>,
    /// `KeyboardEvent.key` for key events
    pub key: Option<String>,
    pub bubbles: bool,
    pub cancelable: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    fn new(event_type: EventType, target: NodeId, key: Option<String>) -> Self {
        Self {
            event_type,
            target,
            current_target: None,
            key,
            bubbles: true,
            cancelable: true,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Create click event
    pub fn click(target: NodeId) -> Self {
        Self::new(EventType::Click, target, None)
    }

    /// Create keydown event
    pub fn key_down(target: NodeId, key: &str) -> Self {
        Self::new(EventType::KeyDown, target, Some(key.to_string()))
    }

    /// Pressed key, for key events
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    /// Stop propagation
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Check if propagation was stopped
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event() {
        let mut event = Event::key_down(NodeId(5), "Enter");

        assert_eq!(event.event_type, EventType::KeyDown);
        assert_eq!(event.key(), Some("Enter"));
        assert!(!event.is_default_prevented());

        event.prevent_default();
        assert!(event.is_default_prevented());
    }

    #[test]
    fn test_non_cancelable_ignores_prevent_default() {
        let mut event = Event::click(NodeId(1));
        event.cancelable = false;
        event.prevent_default();

        assert!(!event.is_default_prevented());
        assert_eq!(event.key(), None);
    }
}
