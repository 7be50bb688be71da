//! A single document line with its render cache.
//!
//! `bytes` is the authoritative content. `render` is `bytes` with tabs expanded
//! to the next tab stop and `highlight` holds one class per `render` byte.
//! Only `Document` mutates lines, and every mutation goes through
//! `Document::refresh_line` so the caches are never observed stale.

use crate::highlight::Highlight;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub(crate) index: usize,
    pub(crate) bytes: Vec<u8>,
    pub(crate) render: Vec<u8>,
    pub(crate) highlight: Vec<Highlight>,
    pub(crate) open_comment: bool,
}

impl Line {
    pub(crate) fn new(index: usize, content: &[u8]) -> Self {
        Self {
            index,
            bytes: content.to_vec(),
            ..Self::default()
        }
    }

    /// Position of this line within its document.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn render(&self) -> &[u8] {
        &self.render
    }

    pub fn highlight(&self) -> &[Highlight] {
        &self.highlight
    }

    /// True when a multi-line comment is still open at the end of this line.
    pub fn continues_comment(&self) -> bool {
        self.open_comment
    }

    /// Length of `bytes`.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn render_len(&self) -> usize {
        self.render.len()
    }

    /// Render column of byte offset `cx` (clamped to the line length).
    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        let mut rx = 0;
        for &b in self.bytes.iter().take(cx) {
            rx = advance_column(rx, b, tab_stop);
        }
        rx
    }

    /// Smallest byte offset whose render column is at or past `rx`; the line
    /// length when `rx` lies beyond the rendered line.
    pub fn rx_to_cx(&self, rx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        let mut cur = 0;
        for (cx, &b) in self.bytes.iter().enumerate() {
            if cur >= rx {
                return cx;
            }
            cur = advance_column(cur, b, tab_stop);
        }
        self.bytes.len()
    }

    /// Byte offset of the first occurrence of `needle` in `render`.
    pub fn find_in_render(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() || needle.len() > self.render.len() {
            return None;
        }
        self.render
            .windows(needle.len())
            .position(|window| window == needle)
    }

    /// Regenerate `render` from `bytes`. Highlighting is the caller's job.
    pub(crate) fn rebuild_render(&mut self, tab_stop: usize) {
        let tab_stop = tab_stop.max(1);
        let tabs = self.bytes.iter().filter(|&&b| b == b'\t').count();
        self.render.clear();
        self.render
            .reserve(self.bytes.len() + tabs * (tab_stop - 1));
        for &b in &self.bytes {
            if b == b'\t' {
                self.render.push(b' ');
                while self.render.len() % tab_stop != 0 {
                    self.render.push(b' ');
                }
            } else {
                self.render.push(b);
            }
        }
    }
}

#[inline]
fn advance_column(rx: usize, b: u8, tab_stop: usize) -> usize {
    if b == b'\t' {
        rx + (tab_stop - 1) - (rx % tab_stop) + 1
    } else {
        rx + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(content: &[u8]) -> Line {
        let mut l = Line::new(0, content);
        l.rebuild_render(4);
        l
    }

    #[test]
    fn render_expands_tabs_to_next_stop() {
        assert_eq!(line(b"\tx").render(), b"    x");
        assert_eq!(line(b"ab\tc").render(), b"ab  c");
        assert_eq!(line(b"abcd\te").render(), b"abcd    e");
        assert_eq!(line(b"").render(), b"");
    }

    #[test]
    fn cx_to_rx_accounts_for_tabs() {
        let l = line(b"a\tb\tc");
        assert_eq!(l.cx_to_rx(0, 4), 0);
        assert_eq!(l.cx_to_rx(1, 4), 1);
        assert_eq!(l.cx_to_rx(2, 4), 4);
        assert_eq!(l.cx_to_rx(3, 4), 5);
        assert_eq!(l.cx_to_rx(4, 4), 8);
        assert_eq!(l.cx_to_rx(99, 4), 9);
    }

    #[test]
    fn rx_to_cx_inside_tab_lands_after_the_tab() {
        let l = line(b"\tx");
        assert_eq!(l.rx_to_cx(0, 4), 0);
        // columns 1..=3 are inside the tab expansion
        assert_eq!(l.rx_to_cx(1, 4), 1);
        assert_eq!(l.rx_to_cx(3, 4), 1);
        assert_eq!(l.rx_to_cx(4, 4), 1);
        assert_eq!(l.rx_to_cx(5, 4), 2);
        assert_eq!(l.rx_to_cx(40, 4), 2);
    }

    #[test]
    fn rx_to_cx_at_tab_stop_boundaries_inverts_cx_to_rx() {
        let l = line(b"ab\t\tcd");
        for cx in 0..=l.len() {
            let rx = l.cx_to_rx(cx, 4);
            assert_eq!(l.rx_to_cx(rx, 4), cx, "cx={cx} rx={rx}");
        }
    }

    #[test]
    fn find_in_render_uses_expanded_text() {
        let l = line(b"\tfoo");
        assert_eq!(l.find_in_render(b"foo"), Some(4));
        assert_eq!(l.find_in_render(b"  f"), Some(2));
        assert_eq!(l.find_in_render(b"bar"), None);
        assert_eq!(l.find_in_render(b""), None);
    }
}
