//! Input decoding: raw event batches in, one logical key out.
//!
//! An [`EventSource`] yields batches of [`RawEvent`]s. The [`InputDecoder`]
//! walks those batches, applies resizes as they pass, drops key-ups and
//! byte-less keys, and folds escape sequences into named keys.

mod decoder;
mod source;

pub use decoder::{InputDecoder, decode_sequence};
pub use source::{CrosstermEventSource, map_event};

use core_events::RawEvent;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("reading terminal input: {0}")]
    Io(#[from] std::io::Error),
}

/// Blocking producer of raw input events.
pub trait EventSource {
    /// Block until at least one event is available and return every event
    /// currently buffered. An empty batch is allowed and decodes to "no key".
    fn read_batch(&mut self) -> Result<Vec<RawEvent>, InputError>;
}

impl<S: EventSource + ?Sized> EventSource for Box<S> {
    fn read_batch(&mut self) -> Result<Vec<RawEvent>, InputError> {
        (**self).read_batch()
    }
}
