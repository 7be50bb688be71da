//! Terminal frontend: the render/read seam the controller drives.

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use core_actions::Frontend;
use core_events::Key;
use core_input::{EventSource, InputDecoder};
use core_model::EditorModel;
use core_render::RenderEngine;
use tracing::trace;

pub struct TerminalFrontend<S, W> {
    decoder: InputDecoder<S>,
    engine: RenderEngine,
    out: W,
}

impl<S: EventSource, W: Write> TerminalFrontend<S, W> {
    pub fn new(source: S, engine: RenderEngine, out: W) -> Self {
        Self {
            decoder: InputDecoder::new(source),
            engine,
            out,
        }
    }

    pub fn frames(&self) -> u64 {
        self.engine.frames()
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.out
    }
}

impl<S: EventSource, W: Write> Frontend for TerminalFrontend<S, W> {
    fn refresh(&mut self, model: &mut EditorModel) -> Result<()> {
        self.engine
            .render(model, Instant::now(), &mut self.out)
            .context("drawing frame")
    }

    fn read_key(&mut self, model: &mut EditorModel) -> Result<Key> {
        let key = self
            .decoder
            .next_key(|cols, rows| {
                trace!(target: "runtime", cols, rows, "terminal_resized");
                model.view_mut().resize(cols, rows);
            })
            .context("reading terminal input")?;
        Ok(key)
    }
}
