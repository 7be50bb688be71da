//! Core input event and key code types for Quill.
//!
//! Two layers live here:
//! * `RawEvent` is what the platform event source hands over: one byte per
//!   key transition plus resize notices. Escape sequences arrive split across
//!   several raw events.
//! * `Key` is the logical key code the input decoder produces: exactly one per
//!   decode call, either a literal byte, a named key, or `Key::None` when the
//!   batch held nothing actionable.
//!
//! Byte-valued keys keep their terminal encoding (Enter is `\r`, Backspace is
//! 127, Ctrl-letter is the letter masked with `0x1f`) so the controller can
//! dispatch on plain bytes.

use std::fmt;

/// Escape byte introducing multi-byte key sequences.
pub const ESC: u8 = 0x1b;
/// Byte produced by the Enter key in raw mode.
pub const ENTER: u8 = b'\r';
/// Byte produced by the Backspace key in raw mode.
pub const BACKSPACE: u8 = 127;
pub const TAB: u8 = b'\t';

/// Map an ASCII letter to the byte its Ctrl chord produces.
pub const fn ctrl_key(k: u8) -> u8 {
    k & 0x1f
}

/// True for C0 control bytes and DEL.
pub const fn is_control(b: u8) -> bool {
    b < 0x20 || b == 0x7f
}

/// Raw event as delivered by the external event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    /// Key transition carrying the byte the key produced (0 for keys without one,
    /// e.g. a bare modifier).
    Key { down: bool, byte: u8 },
    /// Terminal resized to `cols` x `rows` cells (full window, bars included).
    Resize { cols: u16, rows: u16 },
}

impl RawEvent {
    pub fn key_down(byte: u8) -> Self {
        RawEvent::Key { down: true, byte }
    }

    pub fn key_up(byte: u8) -> Self {
        RawEvent::Key { down: false, byte }
    }

    /// Byte of a key-down event, `None` for key-ups and resizes.
    pub fn down_byte(&self) -> Option<u8> {
        match *self {
            RawEvent::Key { down: true, byte } => Some(byte),
            _ => None,
        }
    }
}

/// Keys recognized from escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
}

/// Logical key code produced by the input decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Key {
    /// No actionable key in the consumed events; poll again.
    #[default]
    None,
    /// Literal byte (printable character or control byte).
    Byte(u8),
    Named(NamedKey),
}

impl Key {
    pub fn is_none(&self) -> bool {
        matches!(self, Key::None)
    }

    pub fn is_byte(&self, b: u8) -> bool {
        matches!(self, Key::Byte(x) if *x == b)
    }

    /// Keys the prompt and the controller treat as "delete one byte backwards".
    pub fn is_delete_like(&self) -> bool {
        matches!(
            self,
            Key::Byte(BACKSPACE) | Key::Named(NamedKey::Delete)
        ) || self.is_byte(ctrl_key(b'h'))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::None => write!(f, "none"),
            Key::Byte(b) if is_control(*b) => write!(f, "ctrl(0x{:02x})", b),
            Key::Byte(b) => write!(f, "byte({})", *b as char),
            Key::Named(n) => write!(f, "{:?}", n),
        }
    }
}
