//! Incremental, directional, wrap-around search.
//!
//! [`find`] drives the prompt with [`FindState::on_key`] as its callback.
//! The state remembers the last matched line, the scan direction and the
//! highlight array of the decorated line so the match overlay never leaks
//! into the permanent highlight state.

use anyhow::Result;
use core_events::{ENTER, ESC, Key, NamedKey};
use core_model::{EditorModel, Offset};
use core_text::{Highlight, Position};
use tracing::debug;

use crate::prompt::{Frontend, PromptCallback, prompt};

pub const SEARCH_PROMPT: &str = "Search: {} (Use ESC/Arrows/Enter)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug)]
pub struct FindState {
    /// Cursor line when the search began; fresh scans start just after it.
    origin_line: usize,
    last_match: Option<usize>,
    direction: Direction,
    saved: Option<(usize, Vec<Highlight>)>,
}

impl FindState {
    pub fn new(origin_line: usize) -> Self {
        Self {
            origin_line,
            last_match: None,
            direction: Direction::Forward,
            saved: None,
        }
    }

    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Prompt callback: restore the previous overlay, then scan for `query`.
    pub fn on_key(&mut self, model: &mut EditorModel, query: &str, key: Key) {
        if let Some((line, hl)) = self.saved.take() {
            model.state_mut().document.restore_highlight(line, hl);
        }

        if key.is_byte(ENTER) || key.is_byte(ESC) {
            self.last_match = None;
            self.direction = Direction::Forward;
            return;
        }
        match key {
            Key::Named(NamedKey::ArrowRight | NamedKey::ArrowDown) => {
                self.direction = Direction::Forward;
            }
            Key::Named(NamedKey::ArrowLeft | NamedKey::ArrowUp) => {
                self.direction = Direction::Backward;
            }
            _ => {
                self.last_match = None;
                self.direction = Direction::Forward;
            }
        }
        if self.last_match.is_none() {
            self.direction = Direction::Forward;
        }
        if query.is_empty() {
            return;
        }

        let (state, view) = model.split_state_and_view();
        let doc = &mut state.document;
        let count = doc.line_count();
        if count == 0 {
            return;
        }
        // a fresh forward scan visits origin + 1 first and the origin last
        let mut current = match self.last_match {
            Some(line) => line,
            None if self.origin_line < count => self.origin_line,
            None => count - 1,
        };
        let needle = query.as_bytes();
        for _ in 0..count {
            current = match self.direction {
                Direction::Forward => (current + 1) % count,
                Direction::Backward => current.checked_sub(1).unwrap_or(count - 1),
            };
            let Some(rx) = doc.line(current).and_then(|l| l.find_in_render(needle)) else {
                continue;
            };
            self.last_match = Some(current);
            view.cursor = Position::new(current, doc.rx_to_cx(current, rx));
            // forces the next scroll to bring the match line to the top
            view.offset.row = count;
            self.saved = doc
                .overlay_highlight(current, rx..rx + needle.len(), Highlight::Match)
                .map(|hl| (current, hl));
            debug!(target: "actions.search", line = current, dir = ?self.direction, "match");
            return;
        }
        debug!(target: "actions.search", len = needle.len(), "no_match");
    }
}

/// Interactive search. Escape restores the cursor and scroll offset that were
/// current when the search began.
pub fn find<F: Frontend + ?Sized>(model: &mut EditorModel, frontend: &mut F) -> Result<()> {
    let saved_cursor = model.view().cursor;
    let saved_offset: Offset = model.view().offset;
    let mut find_state = FindState::new(saved_cursor.line);
    let mut on_key = |m: &mut EditorModel, q: &str, k: Key| find_state.on_key(m, q, k);
    let callback: PromptCallback<'_> = &mut on_key;
    let query = prompt(model, frontend, SEARCH_PROMPT, Some(callback))?;
    if query.is_none() {
        let view = model.view_mut();
        view.cursor = saved_cursor;
        view.offset = saved_offset;
    }
    Ok(())
}
