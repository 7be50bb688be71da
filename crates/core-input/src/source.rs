//! Crossterm-backed event source.
//!
//! Crossterm already parses terminal escape sequences into key codes, so named
//! keys are re-encoded here as the byte sequences the decoder recognizes. That
//! keeps one decoding path for every source.

use std::time::Duration;

use core_events::{BACKSPACE, ENTER, ESC, RawEvent, TAB, ctrl_key};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, trace};

use crate::{EventSource, InputError};

/// Reads from the process terminal via `crossterm::event`.
#[derive(Debug, Default)]
pub struct CrosstermEventSource {
    batches: u64,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSource for CrosstermEventSource {
    fn read_batch(&mut self) -> Result<Vec<RawEvent>, InputError> {
        let mut out = map_event(event::read()?);
        // drain whatever else is already buffered
        while event::poll(Duration::ZERO)? {
            out.extend(map_event(event::read()?));
        }
        self.batches += 1;
        trace!(target: "input.source", batch = self.batches, events = out.len(), "batch");
        Ok(out)
    }
}

fn sequence(down: bool, bytes: &[u8]) -> Vec<RawEvent> {
    bytes
        .iter()
        .map(|&byte| RawEvent::Key { down, byte })
        .collect()
}

fn key_bytes(key: &KeyEvent) -> Vec<u8> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii() => {
            let b = c as u8;
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                vec![ctrl_key(b)]
            } else {
                vec![b]
            }
        }
        KeyCode::Enter => vec![ENTER],
        KeyCode::Tab => vec![TAB],
        KeyCode::Backspace => vec![BACKSPACE],
        KeyCode::Esc => vec![ESC],
        KeyCode::Up => b"\x1b[A".to_vec(),
        KeyCode::Down => b"\x1b[B".to_vec(),
        KeyCode::Right => b"\x1b[C".to_vec(),
        KeyCode::Left => b"\x1b[D".to_vec(),
        KeyCode::Home => b"\x1b[H".to_vec(),
        KeyCode::End => b"\x1b[F".to_vec(),
        KeyCode::PageUp => b"\x1b[5~".to_vec(),
        KeyCode::PageDown => b"\x1b[6~".to_vec(),
        KeyCode::Delete => b"\x1b[3~".to_vec(),
        _ => vec![0],
    }
}

/// Translate one crossterm event into raw events.
///
/// Keys without a byte representation (function keys, non-ASCII characters)
/// map to a single zero byte, which the decoder ignores.
pub fn map_event(ev: Event) -> Vec<RawEvent> {
    match ev {
        Event::Key(key) => {
            let down = matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat);
            sequence(down, &key_bytes(&key))
        }
        Event::Resize(cols, rows) => {
            debug!(target: "input.source", cols, rows, "resize");
            vec![RawEvent::Resize { cols, rows }]
        }
        _ => Vec::new(),
    }
}
