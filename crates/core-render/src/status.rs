//! Status bar and message bar composition.
//!
//! Two-stage pipeline: `compose_status` produces ordered segments from a
//! `StatusContext`, `format_status` lays them out across the terminal width.
//!
//! Layout: `"{name:.20} - {n} lines {(modified)}"` on the left, then spaces,
//! with `"{ft} - {line}/{total}"` appended flush right only when the remaining
//! width equals its length exactly. The left part is cut at the width.

use std::borrow::Cow;

/// Maximum number of file name characters shown on the status bar.
pub const NAME_WIDTH: usize = 20;

pub struct StatusContext<'a> {
    pub file_name: Option<Cow<'a, str>>,
    pub line_count: usize,
    pub dirty: bool,
    pub filetype: Option<&'static str>,
    /// 0-based cursor line.
    pub cursor_line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    /// Truncated file name or `[No Name]`.
    FileName(Cow<'a, str>),
    LineCount(usize),
    Modified(bool),
    /// Right side: profile name or `no ft`.
    FileType(&'static str),
    /// Right side: 1-based cursor line over total lines.
    Position { line_1: usize, total: usize },
}

pub fn compose_status<'a>(ctx: &'a StatusContext<'a>) -> Vec<StatusSegment<'a>> {
    let name: Cow<'a, str> = match &ctx.file_name {
        Some(n) if n.chars().count() > NAME_WIDTH => {
            Cow::Owned(n.chars().take(NAME_WIDTH).collect())
        }
        Some(n) => Cow::Borrowed(n.as_ref()),
        None => "[No Name]".into(),
    };
    vec![
        StatusSegment::FileName(name),
        StatusSegment::LineCount(ctx.line_count),
        StatusSegment::Modified(ctx.dirty),
        StatusSegment::FileType(ctx.filetype.unwrap_or("no ft")),
        StatusSegment::Position {
            line_1: ctx.cursor_line + 1,
            total: ctx.line_count,
        },
    ]
}

/// Lay the segments out into exactly the bar content (no escapes).
pub fn format_status(segments: &[StatusSegment<'_>], width: usize) -> Vec<u8> {
    let mut left = String::with_capacity(48);
    let mut right = String::with_capacity(24);
    for seg in segments {
        match seg {
            StatusSegment::FileName(n) => left.push_str(n),
            StatusSegment::LineCount(n) => {
                left.push_str(" - ");
                left.push_str(&n.to_string());
                left.push_str(" lines ");
            }
            StatusSegment::Modified(true) => left.push_str("(modified)"),
            StatusSegment::Modified(false) => {}
            StatusSegment::FileType(ft) => right.push_str(ft),
            StatusSegment::Position { line_1, total } => {
                right.push_str(&format!(" - {line_1}/{total}"));
            }
        }
    }

    let mut out = left.into_bytes();
    out.truncate(width);
    while out.len() < width {
        if width - out.len() == right.len() {
            out.extend_from_slice(right.as_bytes());
            break;
        }
        out.push(b' ');
    }
    out
}

/// Message bar content: the message cut at the terminal width.
pub fn format_message(message: Option<&str>, width: usize) -> &[u8] {
    let bytes = message.map(str::as_bytes).unwrap_or_default();
    &bytes[..bytes.len().min(width)]
}
