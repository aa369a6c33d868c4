//! fOS Accessibility
//!
//! Accessibility building blocks for fOS widgets.
//!
//! Features:
//! - ARIA state attributes and their string encoding
//! - Tab index parsing
//! - Keyboard navigation actions with wrap-around focus order

pub mod aria;
pub mod focus;
pub mod keyboard_nav;

pub use aria::{AriaState, ARIA_CONTROLS, ARIA_EXPANDED, ARIA_LABELLEDBY};
pub use focus::{TabIndex, wrap_next, wrap_prev};
pub use keyboard_nav::NavAction;
