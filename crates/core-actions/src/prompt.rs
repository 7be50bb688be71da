//! Modal single-line prompt on the message bar.
//!
//! The prompt re-enters the render/read loop through [`Frontend`] until the
//! user commits with Enter (non-empty input) or cancels with Escape. An
//! optional callback observes the buffer after every key, which is how
//! incremental search hooks in.

use anyhow::Result;
use core_events::{ENTER, ESC, Key, is_control};
use core_model::EditorModel;
use tracing::debug;

/// Render/read seam between the controller and the terminal.
pub trait Frontend {
    /// Draw the current model state.
    fn refresh(&mut self, model: &mut EditorModel) -> Result<()>;
    /// Block until the next key; implementations apply resizes to the model.
    fn read_key(&mut self, model: &mut EditorModel) -> Result<Key>;
}

/// Observer invoked with the current buffer and the key just processed.
pub type PromptCallback<'a> = &'a mut dyn FnMut(&mut EditorModel, &str, Key);

/// Replace the first `{}` in `template` with `input`.
pub fn fill_template(template: &str, input: &str) -> String {
    template.replacen("{}", input, 1)
}

/// Run the prompt. Returns the committed input, or `None` when cancelled.
pub fn prompt<F: Frontend + ?Sized>(
    model: &mut EditorModel,
    frontend: &mut F,
    template: &str,
    mut callback: Option<PromptCallback<'_>>,
) -> Result<Option<String>> {
    let mut buf = String::new();
    loop {
        model.state_mut().set_status(fill_template(template, &buf));
        frontend.refresh(model)?;
        let key = frontend.read_key(model)?;

        if key.is_none() {
            continue;
        }
        if key.is_delete_like() {
            buf.pop();
        } else if key.is_byte(ESC) {
            model.state_mut().clear_status();
            if let Some(cb) = callback.as_mut() {
                cb(model, &buf, key);
            }
            debug!(target: "actions.prompt", "prompt_cancelled");
            return Ok(None);
        } else if key.is_byte(ENTER) {
            if !buf.is_empty() {
                model.state_mut().clear_status();
                if let Some(cb) = callback.as_mut() {
                    cb(model, &buf, key);
                }
                debug!(target: "actions.prompt", len = buf.len(), "prompt_committed");
                return Ok(Some(buf));
            }
        } else if let Key::Byte(b) = key {
            if !is_control(b) && b < 128 {
                buf.push(char::from(b));
            }
        }

        if let Some(cb) = callback.as_mut() {
            cb(model, &buf, key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_placeholder() {
        assert_eq!(
            fill_template("Save as: {} (ESC to cancel)", "a.c"),
            "Save as: a.c (ESC to cancel)"
        );
        assert_eq!(fill_template("no slot", "x"), "no slot");
        assert_eq!(fill_template("{} {}", "x"), "x {}");
    }
}
