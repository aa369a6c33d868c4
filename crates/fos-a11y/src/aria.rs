//! ARIA Support
//!
//! ARIA states and relationship attributes used by disclosure widgets.

/// `aria-expanded`
pub const ARIA_EXPANDED: &str = "aria-expanded";
/// `aria-controls`
pub const ARIA_CONTROLS: &str = "aria-controls";
/// `aria-labelledby`
pub const ARIA_LABELLEDBY: &str = "aria-labelledby";

/// ARIA state/property
#[derive(Debug, Clone, PartialEq)]
pub enum AriaState {
    Expanded(bool),
    Controls(Vec<String>),
    LabelledBy(Vec<String>),
}

impl AriaState {
    /// Parse from an attribute name and value
    pub fn parse(name: &str, value: &str) -> Option<Self> {
        let ids = || -> Vec<String> { value.split_whitespace().map(String::from).collect() };
        Some(match name.strip_prefix("aria-")? {
            "expanded" => Self::Expanded(parse_bool(value)),
            "controls" => Self::Controls(ids()),
            "labelledby" => Self::LabelledBy(ids()),
            _ => return None,
        })
    }

    /// Attribute name
    pub fn attribute_name(&self) -> &'static str {
        match self {
            Self::Expanded(_) => ARIA_EXPANDED,
            Self::Controls(_) => ARIA_CONTROLS,
            Self::LabelledBy(_) => ARIA_LABELLEDBY,
        }
    }

    /// Attribute value, as assistive technology expects it
    pub fn attribute_value(&self) -> String {
        match self {
            Self::Expanded(true) => "true".to_string(),
            Self::Expanded(false) => "false".to_string(),
            Self::Controls(ids) | Self::LabelledBy(ids) => ids.join(" "),
        }
    }
}

/// ARIA boolean: only the exact string `"true"` is true
pub fn parse_bool(value: &str) -> bool {
    value == "true"
}
