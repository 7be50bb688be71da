use std::collections::VecDeque;

use core_events::{ESC, Key, NamedKey, RawEvent};
use tracing::trace;

use crate::{EventSource, InputError};

/// Recognize the bytes following an escape.
///
/// Returns the key and the number of bytes consumed from `seq`, or `None`
/// when the bytes do not form a known sequence (the escape is then literal).
pub fn decode_sequence(seq: &[u8]) -> Option<(NamedKey, usize)> {
    use NamedKey::*;
    match seq {
        [b'[', d @ b'0'..=b'9', b'~', ..] => {
            let key = match d {
                b'1' | b'7' => Home,
                b'3' => Delete,
                b'4' | b'8' => End,
                b'5' => PageUp,
                b'6' => PageDown,
                _ => return None,
            };
            Some((key, 3))
        }
        [b'[', c, ..] => {
            let key = match c {
                b'A' => ArrowUp,
                b'B' => ArrowDown,
                b'C' => ArrowRight,
                b'D' => ArrowLeft,
                b'H' => Home,
                b'F' => End,
                _ => return None,
            };
            Some((key, 2))
        }
        [b'O', c, ..] => match c {
            b'H' => Some((Home, 2)),
            b'F' => Some((End, 2)),
            _ => None,
        },
        _ => None,
    }
}

/// Stateful decoder over an [`EventSource`].
///
/// Events left over from a batch are kept for the next call, so a batch
/// holding several keystrokes yields them one by one.
pub struct InputDecoder<S> {
    source: S,
    pending: VecDeque<RawEvent>,
}

impl<S: EventSource> InputDecoder<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            pending: VecDeque::new(),
        }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Number of events buffered but not yet decoded.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Decode the next key. Blocks on the source only when nothing is buffered.
    ///
    /// `on_resize` receives `(cols, rows)` of the full terminal for every
    /// resize event passed over. Returns [`Key::None`] when the consumed events
    /// held no actionable key.
    pub fn next_key(
        &mut self,
        mut on_resize: impl FnMut(u16, u16),
    ) -> Result<Key, InputError> {
        if self.pending.is_empty() {
            let batch = self.source.read_batch()?;
            trace!(target: "input.decode", events = batch.len(), "batch_read");
            self.pending.extend(batch);
        }

        while let Some(ev) = self.pending.pop_front() {
            match ev {
                RawEvent::Resize { cols, rows } => {
                    trace!(target: "input.decode", cols, rows, "resize");
                    on_resize(cols, rows);
                }
                RawEvent::Key { down: false, .. } | RawEvent::Key { byte: 0, .. } => {}
                RawEvent::Key { byte: ESC, .. } => {
                    let key = self.finish_escape();
                    trace!(
                        target: "input.decode",
                        kind = "escape",
                        named = !key.is_byte(ESC),
                        "key_decoded"
                    );
                    return Ok(key);
                }
                RawEvent::Key { byte, .. } => {
                    trace!(target: "input.decode", kind = "byte", "key_decoded");
                    return Ok(Key::Byte(byte));
                }
            }
        }
        Ok(Key::None)
    }

    fn finish_escape(&mut self) -> Key {
        // look at the next few key-down bytes without consuming them
        let mut seq = [0u8; 3];
        let mut seq_len = 0;
        let mut positions = [0usize; 3];
        for (idx, ev) in self.pending.iter().enumerate() {
            if seq_len == seq.len() {
                break;
            }
            match ev {
                RawEvent::Key { down: true, byte } => {
                    seq[seq_len] = *byte;
                    positions[seq_len] = idx;
                    seq_len += 1;
                }
                RawEvent::Key { down: false, .. } => {}
                RawEvent::Resize { .. } => break,
            }
        }

        match decode_sequence(&seq[..seq_len]) {
            Some((named, used)) => {
                // drop everything up to and including the last sequence byte
                self.pending.drain(..=positions[used - 1]);
                Key::Named(named)
            }
            None => Key::Byte(ESC),
        }
    }
}
