//! Highlight class to terminal color mapping and per-row color state.

use core_text::Highlight;

pub const DEFAULT_FG: &[u8] = b"\x1b[39m";
pub const INVERSE: &[u8] = b"\x1b[7m";
pub const RESET: &[u8] = b"\x1b[m";

/// ANSI foreground color code for a highlight class.
pub fn color_for(hl: Highlight) -> u8 {
    match hl {
        Highlight::Comment | Highlight::MlComment => 36,
        Highlight::Keyword1 => 33,
        Highlight::Keyword2 => 32,
        Highlight::String => 35,
        Highlight::Number => 31,
        Highlight::Match => 34,
        Highlight::Normal => 37,
    }
}

/// Printable stand-in for a control byte: `@`, `A`..`Z` for 0..=26, `?` otherwise.
pub fn control_glyph(byte: u8) -> u8 {
    if byte <= 26 { b'@' + byte } else { b'?' }
}

pub(crate) fn push_sgr(out: &mut Vec<u8>, code: u8) {
    out.extend_from_slice(format!("\x1b[{code}m").as_bytes());
}

/// Tracks the active foreground color while streaming one row so escapes are
/// only written on class transitions.
#[derive(Debug, Default)]
pub struct ColorRun {
    current: Option<u8>,
}

impl ColorRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<u8> {
        self.current
    }

    pub fn push(&mut self, out: &mut Vec<u8>, byte: u8, hl: Highlight) {
        if byte.is_ascii_control() {
            out.extend_from_slice(INVERSE);
            out.push(control_glyph(byte));
            out.extend_from_slice(RESET);
            // RESET dropped the foreground too
            if let Some(code) = self.current {
                push_sgr(out, code);
            }
        } else if hl == Highlight::Normal {
            if self.current.take().is_some() {
                out.extend_from_slice(DEFAULT_FG);
            }
            out.push(byte);
        } else {
            let code = color_for(hl);
            if self.current != Some(code) {
                self.current = Some(code);
                push_sgr(out, code);
            }
            out.push(byte);
        }
    }
}
