//! Editor actions: key translation, the controller, the prompt, incremental
//! search and persistence.
//!
//! Flow per keystroke: a [`Key`](core_events::Key) from the input decoder is
//! translated to an [`Action`] by [`translate_key`], then applied by the
//! [`Controller`]. Actions that need further input (save-as, find) re-enter
//! the render/read loop through the [`Frontend`] seam.

mod dispatcher;
pub mod io_ops;
mod key_translator;
pub mod prompt;
pub mod search;

pub use dispatcher::{Controller, LoopControl};
pub use io_ops::{OpenError, SaveError, open_file, write_document};
pub use key_translator::translate_key;
pub use prompt::{Frontend, PromptCallback, prompt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    InsertByte(u8),
    InsertNewline,
    /// Delete the byte before the cursor, joining lines at column 0.
    Backspace,
    /// Delete the byte under the cursor (move right, then backspace).
    DeleteUnder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    Save,
    Find,
    Quit,
    /// Bound keys that intentionally do nothing (Ctrl-L, bare Escape).
    Noop,
}
