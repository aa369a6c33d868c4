//! fOS Accordion
//!
//! Accessible accordion widget for fOS documents.
//!
//! Features:
//! - Exclusive or multiple open items
//! - `aria-expanded` / `aria-controls` / `aria-labelledby` wiring
//! - Keyboard support: Space/Enter, ArrowUp/ArrowDown with wrap-around, Home/End
//! - `active` class and `max-height` hooks for CSS transitions
//!
//! Markup:
//!
//! ```html
//! <div fl-accordion fl-accordion-allow-multiple-open>
//!   <div fl-accordion-item>
//!     <button fl-accordion-header>Section</button>
//!     <div fl-accordion-content>Body</div>
//!   </div>
//! </div>
//! ```
//!
//! Opening a panel writes `max-height: <scrollHeight>px`. Heights come from
//! the host's layout via `DomTree::set_scroll_height`; a document straight
//! out of the parser has none, so its panels open to `max-height: 0px`
//! until layout reports real heights. Only `max-height` and the `active`
//! class are touched; other inline declarations and classes are left as
//! authored.

mod bootstrap;
mod config;
mod controller;
mod error;

pub use bootstrap::bootstrap;
pub use config::{AccordionConfig, AccordionOptions};
pub use controller::{Accordion, AccordionItem};
pub use error::AccordionError;

/// Container marker attribute
pub const ACCORDION_ATTR: &str = "fl-accordion";
/// Presence flag enabling `allow_multiple_open` at bootstrap
pub const ALLOW_MULTIPLE_OPEN_ATTR: &str = "fl-accordion-allow-multiple-open";
/// Optional transition length in milliseconds
pub const ANIMATION_DURATION_ATTR: &str = "fl-accordion-animation-duration";

pub const ACCORDION_SELECTOR: &str = "[fl-accordion]";
pub const ITEM_SELECTOR: &str = "[fl-accordion-item]";
pub const HEADER_SELECTOR: &str = "[fl-accordion-header]";
pub const CONTENT_SELECTOR: &str = "[fl-accordion-content]";

/// Class marking open content panels
pub const ACTIVE_CLASS: &str = "active";
