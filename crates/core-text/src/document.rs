//! Ordered line store.
//!
//! Invariants (must hold after every public call):
//! * `lines[i].index == i` for every line; structural edits renumber the tail.
//! * Every line's `render`/`highlight` pair reflects its current `bytes`.
//! * `lines[i].highlight` was computed with `lines[i - 1].open_comment` as its
//!   starting comment state.
//!
//! Out-of-range requests are no-ops returning `false`; they never panic and
//! never touch the dirty counter.

use std::path::{Path, PathBuf};

use crate::highlight::{Highlight, highlight_line};
use crate::line::Line;
use crate::syntax::{self, Syntax};

/// Tab width used when no configuration overrides it.
pub const DEFAULT_TAB_STOP: usize = 4;

#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<Line>,
    dirty: usize,
    path: Option<PathBuf>,
    syntax: Option<&'static Syntax>,
    tab_stop: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP)
    }
}

impl Document {
    pub fn new(tab_stop: usize) -> Self {
        Self {
            lines: Vec::new(),
            dirty: 0,
            path: None,
            syntax: None,
            tab_stop: tab_stop.max(1),
        }
    }

    /// Build a document from file contents: one line per `\n`-separated
    /// segment (a trailing `\r` is stripped), including the final segment.
    /// Empty content gives an empty document. The result is clean.
    pub fn from_bytes(content: &[u8], tab_stop: usize) -> Self {
        let mut doc = Self::new(tab_stop);
        if content.is_empty() {
            return doc;
        }
        for segment in content.split(|&b| b == b'\n') {
            let segment = segment.strip_suffix(b"\r").unwrap_or(segment);
            let at = doc.lines.len();
            doc.insert_line(at, segment);
        }
        doc.dirty = 0;
        tracing::debug!(
            target: "text.line",
            lines = doc.lines.len(),
            bytes = content.len(),
            "document_loaded"
        );
        doc
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, at: usize) -> Option<&Line> {
        self.lines.get(at)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Byte length of line `at`; 0 for the virtual line past the end.
    pub fn line_len(&self, at: usize) -> usize {
        self.lines.get(at).map_or(0, Line::len)
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    /// Number of edits since the last load or save.
    pub fn dirty(&self) -> usize {
        self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty != 0
    }

    pub fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Associate a path and select the language profile it implies.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        let syntax = syntax::select_for_path(&path);
        self.path = Some(path);
        self.set_syntax(syntax);
    }

    pub fn syntax(&self) -> Option<&'static Syntax> {
        self.syntax
    }

    /// Switch profile and re-highlight every line in order.
    pub fn set_syntax(&mut self, syntax: Option<&'static Syntax>) {
        self.syntax = syntax;
        tracing::debug!(
            target: "text.syntax",
            profile = syntax.map(|s| s.name),
            lines = self.lines.len(),
            "syntax_selected"
        );
        for at in 0..self.lines.len() {
            self.highlight_one(at);
        }
    }

    /// Insert a new line at `at` (`0..=line_count`).
    pub fn insert_line(&mut self, at: usize, content: &[u8]) -> bool {
        if at > self.lines.len() {
            tracing::trace!(target: "text.line", at, count = self.lines.len(), "insert_line_out_of_range");
            return false;
        }
        self.lines.insert(at, Line::new(at, content));
        self.renumber_from(at + 1);
        self.lines[at].rebuild_render(self.tab_stop);
        // the successor's predecessor changed as well
        self.rehighlight(at, at + 1);
        self.dirty += 1;
        true
    }

    /// Remove line `at` (`0..line_count`).
    pub fn delete_line(&mut self, at: usize) -> bool {
        if at >= self.lines.len() {
            tracing::trace!(target: "text.line", at, count = self.lines.len(), "delete_line_out_of_range");
            return false;
        }
        self.lines.remove(at);
        self.renumber_from(at);
        if at < self.lines.len() {
            self.rehighlight(at, at);
        }
        self.dirty += 1;
        true
    }

    /// Insert `ch` at byte `at` of line `line`; `at` past the end appends.
    pub fn insert_char(&mut self, line: usize, at: usize, ch: u8) -> bool {
        let Some(l) = self.lines.get_mut(line) else {
            return false;
        };
        let at = at.min(l.bytes.len());
        l.bytes.insert(at, ch);
        self.refresh_line(line);
        true
    }

    /// Remove the byte at `at` of line `line`; no-op outside `0..len`.
    pub fn delete_char(&mut self, line: usize, at: usize) -> bool {
        let Some(l) = self.lines.get_mut(line) else {
            return false;
        };
        if at >= l.bytes.len() {
            return false;
        }
        l.bytes.remove(at);
        self.refresh_line(line);
        true
    }

    /// Concatenate `data` onto line `line`.
    pub fn append_bytes(&mut self, line: usize, data: &[u8]) -> bool {
        let Some(l) = self.lines.get_mut(line) else {
            return false;
        };
        l.bytes.extend_from_slice(data);
        self.refresh_line(line);
        true
    }

    /// Cut line `line` down to its first `at` bytes.
    pub fn truncate_line(&mut self, line: usize, at: usize) -> bool {
        let Some(l) = self.lines.get_mut(line) else {
            return false;
        };
        if at >= l.bytes.len() {
            return false;
        }
        l.bytes.truncate(at);
        self.refresh_line(line);
        true
    }

    /// All lines joined by `\n`.
    pub fn serialize(&self) -> Vec<u8> {
        let total: usize = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push(b'\n');
            }
            out.extend_from_slice(&line.bytes);
        }
        out
    }

    /// Render column of byte offset `cx` on line `line` (`cx` itself past the end).
    pub fn cx_to_rx(&self, line: usize, cx: usize) -> usize {
        match self.lines.get(line) {
            Some(l) => l.cx_to_rx(cx, self.tab_stop),
            None => cx,
        }
    }

    /// Byte offset on line `line` for render column `rx`.
    pub fn rx_to_cx(&self, line: usize, rx: usize) -> usize {
        match self.lines.get(line) {
            Some(l) => l.rx_to_cx(rx, self.tab_stop),
            None => 0,
        }
    }

    /// Paint `hl` over `range` of line `line`'s highlight array and return the
    /// previous array so the caller can restore it.
    pub fn overlay_highlight(
        &mut self,
        line: usize,
        range: std::ops::Range<usize>,
        hl: Highlight,
    ) -> Option<Vec<Highlight>> {
        let l = self.lines.get_mut(line)?;
        let saved = l.highlight.clone();
        let end = range.end.min(l.highlight.len());
        let start = range.start.min(end);
        l.highlight[start..end].fill(hl);
        Some(saved)
    }

    /// Put back a highlight array taken by `overlay_highlight`. Ignored when the
    /// line no longer has the same render length.
    pub fn restore_highlight(&mut self, line: usize, saved: Vec<Highlight>) -> bool {
        match self.lines.get_mut(line) {
            Some(l) if l.highlight.len() == saved.len() => {
                l.highlight = saved;
                true
            }
            _ => false,
        }
    }

    /// Recompute caches for an edited line and count the edit.
    fn refresh_line(&mut self, at: usize) {
        self.lines[at].rebuild_render(self.tab_stop);
        self.rehighlight(at, at);
        self.dirty += 1;
    }

    fn renumber_from(&mut self, start: usize) {
        for (i, line) in self.lines.iter_mut().enumerate().skip(start) {
            line.index = i;
        }
    }

    /// Highlight lines starting at `start`, always through `through`, then keep
    /// going while a line's end-of-line comment state changes.
    fn rehighlight(&mut self, start: usize, through: usize) {
        let mut at = start;
        let mut visited = 0usize;
        while at < self.lines.len() {
            let changed = self.highlight_one(at);
            visited += 1;
            if !changed && at >= through {
                break;
            }
            at += 1;
        }
        if visited > 1 {
            tracing::trace!(target: "text.syntax", start, visited, "comment_state_propagated");
        }
    }

    /// Classify line `at`; returns true when its open-comment state changed.
    fn highlight_one(&mut self, at: usize) -> bool {
        let starts_in_comment = self.syntax.is_some() && at > 0 && self.lines[at - 1].open_comment;
        let line = &mut self.lines[at];
        let open = highlight_line(&line.render, self.syntax, starts_in_comment, &mut line.highlight);
        let changed = line.open_comment != open;
        line.open_comment = open;
        changed
    }
}
