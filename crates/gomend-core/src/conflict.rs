//! Merge-conflict marker recognition.

use std::fmt;

/// Prefix of the line that opens a conflict region (our side).
pub const OPEN_MARKER: &str = "<<<<<<<";
/// Exact text of the line separating the two sides.
pub const SEPARATOR_MARKER: &str = "=======";
/// Prefix of the line that closes a conflict region (their side).
pub const CLOSE_MARKER: &str = ">>>>>>>";

/// The kind of conflict-marker boundary a line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Open,
    Separator,
    Close,
}

/// Classify a line, ignoring surrounding whitespace.
///
/// Returns `None` for ordinary lines.
pub fn classify(text: &str) -> Option<Marker> {
    let text = text.trim();
    if text.starts_with(OPEN_MARKER) {
        Some(Marker::Open)
    } else if text == SEPARATOR_MARKER {
        Some(Marker::Separator)
    } else if text.starts_with(CLOSE_MARKER) {
        Some(Marker::Close)
    } else {
        None
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Separator => write!(f, "separator"),
            Self::Close => write!(f, "close"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_marker_with_label() {
        assert_eq!(classify("<<<<<<< HEAD"), Some(Marker::Open));
        assert_eq!(classify("  <<<<<<<"), Some(Marker::Open));
    }

    #[test]
    fn separator_must_be_exact() {
        assert_eq!(classify("======="), Some(Marker::Separator));
        assert_eq!(classify("\t=======  "), Some(Marker::Separator));
        assert_eq!(classify("======= x"), None);
        assert_eq!(classify("========"), None);
    }

    #[test]
    fn close_marker_with_label() {
        assert_eq!(classify(">>>>>>> feature/deps"), Some(Marker::Close));
    }

    #[test]
    fn short_sequences_are_not_markers() {
        assert_eq!(classify("<<<<<< HEAD"), None);
        assert_eq!(classify(">>>>>>"), None);
        assert_eq!(classify("github.com/a/b v1.0.0"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn display_names_marker_kind() {
        assert_eq!(Marker::Open.to_string(), "open");
        assert_eq!(Marker::Separator.to_string(), "separator");
        assert_eq!(Marker::Close.to_string(), "close");
    }
}
