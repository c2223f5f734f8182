//! Line-level view of a `go.mod` file.

use std::hash::{Hash, Hasher};

/// Trimmed text that opens the multi-line `require` block.
pub const REQUIRE_OPEN: &str = "require (";

/// Trimmed text that closes the `require` block.
pub const BLOCK_CLOSE: &str = ")";

/// Separator used both to split the original file and to join the output.
pub const LINE_SEPARATOR: &str = "\n";

/// One line of the original manifest.
///
/// A line is identified by its zero-based `index` in the original file; two
/// lines with the same index are the same line.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    pub index: usize,
    pub text: &'a str,
}

impl<'a> Line<'a> {
    pub fn new(index: usize, text: &'a str) -> Self {
        Self { index, text }
    }

    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// One-based line number, as editors show it.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

impl PartialEq for Line<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Line<'_> {}

impl Hash for Line<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

/// Split manifest content into indexed lines.
///
/// A trailing newline yields a final empty line so that joining the result
/// reproduces the input byte for byte.
pub fn split_lines(content: &str) -> Vec<Line<'_>> {
    content
        .split(LINE_SEPARATOR)
        .enumerate()
        .map(|(index, text)| Line::new(index, text))
        .collect()
}
