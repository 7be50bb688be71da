//! RenderEngine: turns the editor model into one terminal frame.

use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use crossterm::Command;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::terminal::{Clear, ClearType};
use tracing::debug;

use crate::status::{StatusContext, compose_status, format_message, format_status};
use crate::style::{ColorRun, DEFAULT_FG, INVERSE, RESET};
use crate::viewport::scroll;
use crate::writer::write_frame;
use core_model::{EditorModel, View};
use core_state::EditorState;
use core_text::Document;

const HOME: &[u8] = b"\x1b[H";

/// Append the ANSI form of a crossterm command to a byte frame.
fn push_ansi(out: &mut Vec<u8>, cmd: impl Command) {
    let mut s = String::new();
    // fmt::Write for String cannot fail
    let _ = cmd.write_ansi(&mut s);
    out.extend_from_slice(s.as_bytes());
}

fn clamp_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

/// Public facade used by the binary to produce a frame from the model and
/// flush it to the terminal.
pub struct RenderEngine {
    banner: String,
    frames: u64,
}

impl Default for RenderEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderEngine {
    pub fn new() -> Self {
        Self::with_banner(format!(
            "Quill editor -- version {}",
            env!("CARGO_PKG_VERSION")
        ))
    }

    /// Engine with a custom welcome banner (shown for empty documents).
    pub fn with_banner(banner: impl Into<String>) -> Self {
        Self {
            banner: banner.into(),
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Scroll the view around the cursor and assemble the full frame.
    pub fn build_frame(&mut self, model: &mut EditorModel, now: Instant) -> Vec<u8> {
        let (state, view) = model.split_state_and_view();
        scroll(view, &state.document);

        let mut out = Vec::with_capacity((view.rows + 2) * (view.cols + 16));
        push_ansi(&mut out, Hide);
        out.extend_from_slice(HOME);
        self.draw_rows(&mut out, &state.document, view);
        draw_status_bar(&mut out, state, view);
        draw_message_bar(&mut out, state, view, now);
        push_ansi(
            &mut out,
            MoveTo(
                clamp_u16(view.cursor_screen_col()),
                clamp_u16(view.cursor_screen_row()),
            ),
        );
        push_ansi(&mut out, Show);

        self.frames += 1;
        debug!(
            target: "render",
            frame = self.frames,
            bytes = out.len(),
            first_line = view.offset.row,
            "frame_built"
        );
        out
    }

    /// Build a frame and write it to `out` in a single write.
    pub fn render<W: Write>(
        &mut self,
        model: &mut EditorModel,
        now: Instant,
        out: &mut W,
    ) -> Result<()> {
        let frame = self.build_frame(model, now);
        write_frame(out, &frame)
    }

    fn draw_rows(&self, out: &mut Vec<u8>, doc: &Document, view: &View) {
        for screen_row in 0..view.rows {
            let file_row = screen_row + view.offset.row;
            match doc.line(file_row) {
                Some(line) => {
                    let render = line.render();
                    let start = view.offset.col.min(render.len());
                    let end = (start + view.cols).min(render.len());
                    let mut run = ColorRun::new();
                    let hls = &line.highlight()[start..end];
                    for (b, hl) in render[start..end].iter().zip(hls) {
                        run.push(out, *b, *hl);
                    }
                    out.extend_from_slice(DEFAULT_FG);
                }
                None if doc.is_empty() && screen_row == view.rows / 3 => {
                    self.draw_banner(out, view.cols);
                }
                None => out.push(b'~'),
            }
            push_ansi(out, Clear(ClearType::UntilNewLine));
            out.extend_from_slice(b"\r\n");
        }
    }

    fn draw_banner(&self, out: &mut Vec<u8>, cols: usize) {
        let banner = self.banner.as_bytes();
        let len = banner.len().min(cols);
        let mut padding = (cols - len) / 2;
        if padding > 0 {
            out.push(b'~');
            padding -= 1;
        }
        out.extend(std::iter::repeat_n(b' ', padding));
        out.extend_from_slice(&banner[..len]);
    }
}

fn draw_status_bar(out: &mut Vec<u8>, state: &EditorState, view: &View) {
    let doc = &state.document;
    let ctx = StatusContext {
        file_name: doc.path().map(|p| p.to_string_lossy()),
        line_count: doc.line_count(),
        dirty: doc.is_dirty(),
        filetype: doc.syntax().map(|s| s.name),
        cursor_line: view.cursor.line,
    };
    out.extend_from_slice(INVERSE);
    out.extend_from_slice(&format_status(&compose_status(&ctx), view.cols));
    out.extend_from_slice(RESET);
    out.extend_from_slice(b"\r\n");
}

fn draw_message_bar(out: &mut Vec<u8>, state: &EditorState, view: &View, now: Instant) {
    push_ansi(out, Clear(ClearType::UntilNewLine));
    out.extend_from_slice(format_message(state.visible_status(now), view.cols));
}
