//! Frame emission.
//!
//! The whole frame goes out in one `write_all` followed by a flush so the
//! terminal never shows a partially drawn screen.

use anyhow::{Context, Result};
use std::io::Write;
use tracing::trace;

pub fn write_frame<W: Write>(out: &mut W, frame: &[u8]) -> Result<()> {
    out.write_all(frame).context("writing frame")?;
    out.flush().context("flushing frame")?;
    trace!(target: "render", bytes = frame.len(), "frame_written");
    Ok(())
}
