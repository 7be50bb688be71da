//! Controller applying actions to the editor model.
//!
//! Sub-modules:
//! * `motion` - cursor movement semantics
//! * `edit`   - text mutation (insert/backspace/delete/newline)
//!
//! Save and find live here and in `search` because they re-enter the
//! render/read loop through the [`Frontend`].

use std::path::PathBuf;

use anyhow::Result;
use core_events::Key;
use core_model::EditorModel;
use tracing::{debug, info};

use crate::io_ops::write_document;
use crate::prompt::{Frontend, prompt};
use crate::{Action, search, translate_key};

mod edit;
mod motion;

pub const SAVE_AS_PROMPT: &str = "Save as: {} (ESC to cancel)";

/// What the main loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Owns the quit confirmation counter; everything else lives in the model.
#[derive(Debug)]
pub struct Controller {
    quit_times: u32,
    quit_remaining: u32,
}

impl Controller {
    /// `quit_times` consecutive Ctrl-Q presses are needed to leave a dirty
    /// document (at least one).
    pub fn new(quit_times: u32) -> Self {
        let quit_times = quit_times.max(1);
        Self {
            quit_times,
            quit_remaining: quit_times,
        }
    }

    /// Presses still required before a dirty quit goes through.
    pub fn quit_remaining(&self) -> u32 {
        self.quit_remaining
    }

    /// Translate and dispatch one decoded key. `Key::None` is ignored and
    /// leaves the quit counter alone.
    pub fn process_key<F: Frontend + ?Sized>(
        &mut self,
        key: Key,
        model: &mut EditorModel,
        frontend: &mut F,
    ) -> Result<LoopControl> {
        match translate_key(key) {
            Some(action) => self.dispatch(action, model, frontend),
            None => Ok(LoopControl::Continue),
        }
    }

    pub fn dispatch<F: Frontend + ?Sized>(
        &mut self,
        action: Action,
        model: &mut EditorModel,
        frontend: &mut F,
    ) -> Result<LoopControl> {
        debug!(target: "actions.dispatch", ?action, "dispatch");
        match action {
            Action::Quit => {
                if model.state().document.is_dirty() && self.quit_remaining > 1 {
                    self.quit_remaining -= 1;
                    model.state_mut().set_status(format!(
                        "WARNING: File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                        self.quit_remaining
                    ));
                    return Ok(LoopControl::Continue);
                }
                info!(
                    target: "actions.dispatch",
                    dirty = model.state().document.is_dirty(),
                    "quit"
                );
                return Ok(LoopControl::Quit);
            }
            Action::Save => save(model, frontend)?,
            Action::Find => search::find(model, frontend)?,
            Action::Edit(kind) => {
                let (state, view) = model.split_state_and_view();
                edit::handle_edit(kind, &mut state.document, &mut view.cursor);
            }
            Action::Motion(kind) => {
                let (state, view) = model.split_state_and_view();
                motion::handle_motion(kind, &state.document, view);
            }
            Action::Noop => {}
        }
        self.quit_remaining = self.quit_times;
        Ok(LoopControl::Continue)
    }
}

/// Save the document, prompting for a name when it has none.
fn save<F: Frontend + ?Sized>(model: &mut EditorModel, frontend: &mut F) -> Result<()> {
    let path = match model.state().document.path() {
        Some(p) => p.to_path_buf(),
        None => match prompt(model, frontend, SAVE_AS_PROMPT, None)? {
            Some(name) => {
                let path = PathBuf::from(name);
                model.state_mut().document.set_path(&path);
                path
            }
            None => {
                model.state_mut().set_status("Save aborted");
                return Ok(());
            }
        },
    };
    let state = model.state_mut();
    match write_document(&mut state.document, &path) {
        Ok(n) => state.set_status(format!("{n} bytes written to disk")),
        Err(e) => state.set_status(format!("Can't save! I/O error: {}", e.io_error())),
    }
    Ok(())
}
