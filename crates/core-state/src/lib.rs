//! Editor state: the document plus the timed status message.
//!
//! Cursor and scroll state live in `core-model::View`; this crate stays
//! document-centric so the line store and the message bar can be exercised
//! without any presentation state.

use std::time::{Duration, Instant};

use core_text::Document;

/// How long a status message stays on the message bar when not configured.
pub const DEFAULT_MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Status message shown on the message bar until `expires_at`.
#[derive(Debug, Clone)]
pub struct EphemeralMessage {
    pub text: String,
    pub expires_at: Instant,
}

impl EphemeralMessage {
    pub fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug)]
pub struct EditorState {
    pub document: Document,
    pub ephemeral_status: Option<EphemeralMessage>,
    message_timeout: Duration,
}

impl EditorState {
    pub fn new(document: Document) -> Self {
        Self::with_message_timeout(document, DEFAULT_MESSAGE_TIMEOUT)
    }

    pub fn with_message_timeout(document: Document, message_timeout: Duration) -> Self {
        Self {
            document,
            ephemeral_status: None,
            message_timeout,
        }
    }

    pub fn message_timeout(&self) -> Duration {
        self.message_timeout
    }

    /// Replace the status message; the display timeout restarts now.
    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.set_status_at(msg, Instant::now());
    }

    pub fn set_status_at<S: Into<String>>(&mut self, msg: S, now: Instant) {
        let text = msg.into();
        tracing::trace!(target: "state.status", len = text.len(), "status_set");
        self.ephemeral_status = Some(EphemeralMessage {
            text,
            expires_at: now + self.message_timeout,
        });
    }

    pub fn clear_status(&mut self) {
        self.ephemeral_status = None;
    }

    /// Message text to draw at `now`, if any is set and not yet expired.
    pub fn visible_status(&self, now: Instant) -> Option<&str> {
        self.ephemeral_status
            .as_ref()
            .filter(|m| m.is_live(now) && !m.text.is_empty())
            .map(|m| m.text.as_str())
    }

    /// Last message text regardless of expiry (tests, logging).
    pub fn status_text(&self) -> Option<&str> {
        self.ephemeral_status.as_ref().map(|m| m.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing::subscriber::with_default;

    #[test]
    fn message_expires_after_timeout() {
        let mut st = EditorState::with_message_timeout(Document::default(), Duration::from_secs(5));
        let t0 = Instant::now();
        st.set_status_at("hello", t0);
        assert_eq!(st.visible_status(t0), Some("hello"));
        assert_eq!(st.visible_status(t0 + Duration::from_secs(4)), Some("hello"));
        assert_eq!(st.visible_status(t0 + Duration::from_secs(5)), None);
        // text kept, only suppressed
        assert_eq!(st.status_text(), Some("hello"));
    }

    #[test]
    fn empty_message_is_not_visible() {
        let mut st = EditorState::new(Document::default());
        let t0 = Instant::now();
        st.set_status_at("", t0);
        assert_eq!(st.visible_status(t0), None);
        st.set_status_at("x", t0);
        st.clear_status();
        assert_eq!(st.visible_status(t0), None);
    }

    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn status_updates_log_length_not_text() {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&buf);
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_ansi(false)
            .without_time()
            .with_writer(move || Sink(Arc::clone(&sink)))
            .finish();

        with_default(subscriber, || {
            let mut st = EditorState::new(Document::default());
            st.set_status("secret words");
        });

        let out = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
        assert!(out.contains("state.status"), "{out}");
        assert!(out.contains("len=12"), "{out}");
        assert!(!out.contains("secret"), "{out}");
    }
}
