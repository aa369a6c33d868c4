//! Element Query and Methods
//!
//! querySelector, closest, attribute, classList and style helpers.

use crate::{DomTree, ElementData, NodeId, Result};

/// Simple selector for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
    /// `[name]` attribute presence
    Attribute(String),
    Universal,
}

impl SimpleSelector {
    /// Parse a simple selector string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if s == "*" {
            Some(Self::Universal)
        } else if let Some(id) = s.strip_prefix('#') {
            Some(Self::Id(id.to_string()))
        } else if let Some(class) = s.strip_prefix('.') {
            Some(Self::Class(class.to_string()))
        } else if let Some(inner) = s.strip_prefix('[') {
            let name = inner.strip_suffix(']')?.trim();
            if name.is_empty() {
                return None;
            }
            Some(Self::Attribute(name.to_ascii_lowercase()))
        } else {
            Some(Self::Tag(s.to_ascii_lowercase()))
        }
    }

    /// Check if an element matches
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => element.tag_name == *tag,
            Self::Id(id) => element.id() == Some(id.as_str()),
            Self::Class(class) => element.class_list().contains(class),
            Self::Attribute(name) => element.has_attr(name),
        }
    }
}

impl DomTree {
    /// First descendant of `root` matching `selector`, in document order
    pub fn query_selector(&self, root: NodeId, selector: &str) -> Option<NodeId> {
        let selector = Self::parse_selector(selector)?;
        self.descendants(root)
            .find(|&id| self.node_matches(id, &selector))
    }

    /// All descendants of `root` matching `selector`, in document order
    pub fn query_selector_all(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(selector) = Self::parse_selector(selector) else {
            return Vec::new();
        };
        self.descendants(root)
            .filter(|&id| self.node_matches(id, &selector))
            .collect()
    }

    /// Closest inclusive ancestor matching `selector`
    pub fn closest(&self, element: NodeId, selector: &str) -> Option<NodeId> {
        let selector = Self::parse_selector(selector)?;
        let mut cursor = Some(element);
        while let Some(id) = cursor {
            if self.node_matches(id, &selector) {
                return Some(id);
            }
            cursor = self.parent(id);
        }
        None
    }

    /// Check if element matches selector
    pub fn matches(&self, element: NodeId, selector: &str) -> bool {
        Self::parse_selector(selector).is_some_and(|s| self.node_matches(element, &s))
    }

    fn parse_selector(selector: &str) -> Option<SimpleSelector> {
        let parsed = SimpleSelector::parse(selector);
        if parsed.is_none() {
            tracing::warn!("Unsupported selector: {:?}", selector);
        }
        parsed
    }

    fn node_matches(&self, id: NodeId, selector: &SimpleSelector) -> bool {
        self.get(id)
            .and_then(|n| n.as_element())
            .is_some_and(|e| selector.matches(e))
    }

    // Attributes

    /// Get attribute value (None for missing attributes and non-elements)
    pub fn get_attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).ok()?.get_attr(name)
    }

    /// Set attribute value
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> Result<()> {
        self.element_mut(id)?.set_attr(name, value);
        Ok(())
    }

    /// Remove attribute
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<()> {
        self.element_mut(id)?.remove_attr(name);
        Ok(())
    }

    /// Check if attribute exists
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.element(id).is_ok_and(|e| e.has_attr(name))
    }

    // classList

    /// `classList.add`
    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<()> {
        let element = self.element_mut(id)?;
        let mut classes = element.class_list();
        classes.add(&[class]);
        element.set_class_list(&classes);
        Ok(())
    }

    /// `classList.remove`; leaves an empty `class` attribute when present
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> Result<()> {
        let element = self.element_mut(id)?;
        if !element.has_attr("class") {
            return Ok(());
        }
        let mut classes = element.class_list();
        classes.remove(&[class]);
        element.set_class_list(&classes);
        Ok(())
    }

    /// `classList.contains`
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_ok_and(|e| e.class_list().contains(class))
    }

    // Inline style

    /// Set one inline style property
    pub fn set_style_property(&mut self, id: NodeId, property: &str, value: &str) -> Result<()> {
        let element = self.element_mut(id)?;
        let mut style = element.style();
        style.set(property, value);
        element.set_style(&style);
        Ok(())
    }

    /// Clear one inline style property (`style.prop = null`)
    pub fn remove_style_property(&mut self, id: NodeId, property: &str) -> Result<()> {
        let element = self.element_mut(id)?;
        let mut style = element.style();
        if style.remove(property).is_some() {
            element.set_style(&style);
        }
        Ok(())
    }

    /// Read one inline style property
    pub fn style_property(&self, id: NodeId, property: &str) -> Option<String> {
        self.element(id)
            .ok()?
            .style()
            .get(property)
            .map(str::to_string)
    }

    // Layout metrics

    /// Natural content height (`scrollHeight`) in CSS pixels; 0 until layout
    /// has reported one
    pub fn scroll_height(&self, id: NodeId) -> Result<u32> {
        Ok(self.element(id)?.scroll_height)
    }

    /// Record the natural content height computed by layout
    pub fn set_scroll_height(&mut self, id: NodeId, height: u32) -> Result<()> {
        self.element_mut(id)?.scroll_height = height;
        Ok(())
    }
}
