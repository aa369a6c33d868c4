//! Focus Management
//!
//! Tab index parsing and wrap-around focus order.

use std::fmt;

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    NotFocusable,       // tabindex="-1" or invalid
    Sequential(i32),    // tabindex="0" or positive
}

impl TabIndex {
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<i32>() {
            Ok(n) if n < 0 => Self::NotFocusable,
            Ok(n) => Self::Sequential(n),
            Err(_) => Self::NotFocusable,
        }
    }

    pub fn is_focusable(&self) -> bool {
        matches!(self, Self::Sequential(_))
    }
}

impl fmt::Display for TabIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFocusable => f.write_str("-1"),
            Self::Sequential(n) => write!(f, "{n}"),
        }
    }
}

/// Index after `current` in a list of `len`, wrapping to the first.
///
/// An unknown current position also resolves to the first entry.
pub fn wrap_next(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(p) if p + 1 < len => Some(p + 1),
        _ => Some(0),
    }
}

/// Index before `current` in a list of `len`, wrapping to the last.
///
/// An unknown current position also resolves to the last entry.
pub fn wrap_prev(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        Some(p) if p > 0 && p < len => Some(p - 1),
        _ => Some(len - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_index() {
        assert!(!TabIndex::parse("-1").is_focusable());
        assert!(TabIndex::parse("0").is_focusable());
        assert!(TabIndex::parse("5").is_focusable());
        assert!(!TabIndex::parse("abc").is_focusable());
        assert_eq!(TabIndex::Sequential(0).to_string(), "0");
        assert_eq!(TabIndex::NotFocusable.to_string(), "-1");
    }

    #[test]
    fn test_wrap_next() {
        assert_eq!(wrap_next(Some(0), 3), Some(1));
        assert_eq!(wrap_next(Some(2), 3), Some(0));
        assert_eq!(wrap_next(None, 3), Some(0));
        assert_eq!(wrap_next(Some(0), 1), Some(0));
        assert_eq!(wrap_next(None, 0), None);
    }

    #[test]
    fn test_wrap_prev() {
        assert_eq!(wrap_prev(Some(2), 3), Some(1));
        assert_eq!(wrap_prev(Some(0), 3), Some(2));
        assert_eq!(wrap_prev(None, 3), Some(2));
        assert_eq!(wrap_prev(Some(0), 1), Some(0));
        assert_eq!(wrap_prev(Some(0), 0), None);
    }
}
