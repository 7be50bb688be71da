//! Line store, language profiles and syntax highlighting.
//!
//! The document model is byte oriented: one byte is one column before tab
//! expansion. `Document` owns the ordered lines and keeps each line's render
//! cache and highlight array in sync with its bytes on every edit.

pub mod document;
pub mod highlight;
pub mod line;
pub mod syntax;

pub use document::{DEFAULT_TAB_STOP, Document};
pub use highlight::{Highlight, highlight_line, is_separator};
pub use line::Line;
pub use syntax::{Keyword, KeywordClass, Syntax, SyntaxFlags};

/// A logical cursor position: line index and byte offset within that line.
///
/// `line` may equal the document's line count, addressing the virtual empty
/// line past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub byte: usize,
}

impl Position {
    pub fn new(line: usize, byte: usize) -> Self {
        Self { line, byte }
    }

    pub fn origin() -> Self {
        Self { line: 0, byte: 0 }
    }

    /// Pull the position back inside `doc`: line within `0..=line_count`, byte
    /// within the line length.
    pub fn clamp_to(&mut self, doc: &Document) {
        if self.line > doc.line_count() {
            self.line = doc.line_count();
        }
        let max_len = doc.line_len(self.line);
        if self.byte > max_len {
            self.byte = max_len;
        }
    }
}
