//! Accordion Configuration

use std::time::Duration;

use fos_dom::{DomTree, NodeId};
use serde::Deserialize;

use crate::{ALLOW_MULTIPLE_OPEN_ATTR, ANIMATION_DURATION_ATTR};

/// Accordion configuration, fixed once the accordion is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionConfig {
    /// Allow more than one item to be expanded at a time
    pub allow_multiple_open: bool,

    /// Transition length for the visual layer (ms). Not awaited by the controller.
    pub animation_duration_ms: u32,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            allow_multiple_open: false,
            animation_duration_ms: 300,
        }
    }
}

impl AccordionConfig {
    /// Defaults with `options` merged on top
    pub fn with_options(options: &AccordionOptions) -> Self {
        let defaults = Self::default();
        Self {
            allow_multiple_open: options
                .allow_multiple_open
                .unwrap_or(defaults.allow_multiple_open),
            animation_duration_ms: options
                .animation_duration_ms
                .unwrap_or(defaults.animation_duration_ms),
        }
    }

    /// Advisory transition duration
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.animation_duration_ms))
    }
}

/// Caller-supplied partial configuration; unset fields keep their defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccordionOptions {
    pub allow_multiple_open: Option<bool>,
    pub animation_duration_ms: Option<u32>,
}

impl AccordionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_multiple_open(mut self, allow: bool) -> Self {
        self.allow_multiple_open = Some(allow);
        self
    }

    pub fn animation_duration_ms(mut self, ms: u32) -> Self {
        self.animation_duration_ms = Some(ms);
        self
    }

    /// Read options from container markup.
    ///
    /// `fl-accordion-allow-multiple-open` is a presence flag and is always
    /// set explicitly. `fl-accordion-animation-duration` is optional and
    /// ignored when it is not a non-negative integer.
    pub fn from_element(tree: &DomTree, container: NodeId) -> Self {
        let mut options = Self::new().allow_multiple_open(tree.has_attribute(container, ALLOW_MULTIPLE_OPEN_ATTR));

        if let Some(value) = tree.get_attribute(container, ANIMATION_DURATION_ATTR) {
            match value.trim().parse::<u32>() {
                Ok(ms) => options.animation_duration_ms = Some(ms),
                Err(_) => tracing::warn!(
                    "Ignoring {}={:?}: expected milliseconds",
                    ANIMATION_DURATION_ATTR,
                    value
                ),
            }
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AccordionConfig::default();
        assert!(!config.allow_multiple_open);
        assert_eq!(config.animation_duration_ms, 300);
        assert_eq!(config.animation_duration(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_override_is_shallow_merge() {
        let config = AccordionConfig::with_options(&AccordionOptions::new().allow_multiple_open(true));
        assert!(config.allow_multiple_open);
        assert_eq!(config.animation_duration_ms, 300);

        let config = AccordionConfig::with_options(&AccordionOptions::new().animation_duration_ms(150));
        assert!(!config.allow_multiple_open);
        assert_eq!(config.animation_duration_ms, 150);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let options: AccordionOptions = serde_json::from_str(r#"{"allowMultipleOpen": true}"#).unwrap();
        assert_eq!(options, AccordionOptions::new().allow_multiple_open(true));

        let options: AccordionOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, AccordionOptions::default());

        let options: AccordionOptions =
            serde_json::from_str(r#"{"animationDurationMs": 0, "unknown": 1}"#).unwrap();
        assert_eq!(AccordionConfig::with_options(&options).animation_duration_ms, 0);
    }

    fn container(attrs: &[(&str, &str)]) -> (DomTree, NodeId) {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        tree.append_child(tree.root(), div).unwrap();
        for (name, value) in attrs {
            tree.set_attribute(div, name, value).unwrap();
        }
        (tree, div)
    }

    #[test]
    fn test_from_element_presence_flag() {
        let (tree, div) = container(&[]);
        assert_eq!(
            AccordionOptions::from_element(&tree, div),
            AccordionOptions::new().allow_multiple_open(false)
        );

        // Presence is what counts, not the value
        let (tree, div) = container(&[(ALLOW_MULTIPLE_OPEN_ATTR, "false")]);
        assert_eq!(AccordionOptions::from_element(&tree, div).allow_multiple_open, Some(true));
    }

    #[test]
    fn test_from_element_duration() {
        let (tree, div) = container(&[(ANIMATION_DURATION_ATTR, " 450 ")]);
        assert_eq!(AccordionOptions::from_element(&tree, div).animation_duration_ms, Some(450));

        let (tree, div) = container(&[(ANIMATION_DURATION_ATTR, "fast")]);
        assert_eq!(AccordionOptions::from_element(&tree, div).animation_duration_ms, None);
    }
}
