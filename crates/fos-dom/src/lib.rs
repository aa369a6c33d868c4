//! fOS DOM - Document Object Model
//!
//! Arena-based DOM tree with the element APIs widgets build on:
//! attributes, class lists, inline style, layout metrics, focus and
//! event dispatch.

mod classlist;
mod document;
mod dom_events;
mod element;
mod node;
mod style;
mod tree;

pub use classlist::DomTokenList;
pub use document::Document;
pub use dom_events::{Event, EventListener, EventType};
pub use element::SimpleSelector;
pub use node::{Attribute, ElementData, Node, NodeData, TextData};
pub use style::InlineStyle;
pub use tree::{Children, Descendants, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this is not the `NONE` sentinel
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// DOM error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Invalid node: {0:?}")]
    InvalidNode(NodeId),

    #[error("Node {0:?} is not an element")]
    NotAnElement(NodeId),
}

/// Result alias for DOM operations
pub type Result<T> = std::result::Result<T, DomError>;
