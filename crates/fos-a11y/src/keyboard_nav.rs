//! Keyboard Navigation
//!
//! Maps `KeyboardEvent.key` values to navigation actions.

/// Navigation action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Space / Enter
    Activate,
    NextElement,
    PrevElement,
    FirstElement,
    LastElement,
}

impl NavAction {
    /// Action for a `KeyboardEvent.key` value, if the key is handled
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            " " | "Enter" => Self::Activate,
            "ArrowDown" => Self::NextElement,
            "ArrowUp" => Self::PrevElement,
            "Home" => Self::FirstElement,
            "End" => Self::LastElement,
            _ => return None,
        })
    }
}
