//! Text edit action handling (insert/backspace/delete/newline).
//!
//! Every mutation goes through `Document`, which keeps render and highlight
//! caches in sync before returning; this module only moves the cursor.

use super::motion::move_cursor;
use crate::{EditKind, MotionKind};
use core_text::{Document, Position};
use tracing::trace;

pub(crate) fn handle_edit(kind: EditKind, doc: &mut Document, cursor: &mut Position) {
    let before = *cursor;
    match kind {
        EditKind::InsertByte(b) => insert_char(doc, cursor, b),
        EditKind::InsertNewline => insert_newline(doc, cursor),
        EditKind::Backspace => del_char(doc, cursor),
        EditKind::DeleteUnder => {
            move_cursor(MotionKind::Right, doc, cursor);
            del_char(doc, cursor);
        }
    }
    trace!(
        target: "actions.dispatch",
        op = ?kind,
        line = before.line,
        byte = before.byte,
        to_line = cursor.line,
        to_byte = cursor.byte,
        "edit"
    );
}

/// Insert at the cursor; typing on the virtual final line appends a line first.
pub(crate) fn insert_char(doc: &mut Document, cursor: &mut Position, b: u8) {
    if cursor.line == doc.line_count() {
        doc.insert_line(doc.line_count(), b"");
    }
    doc.insert_char(cursor.line, cursor.byte, b);
    cursor.byte += 1;
}

/// Split the line at the cursor. At column 0 an empty line goes above instead.
pub(crate) fn insert_newline(doc: &mut Document, cursor: &mut Position) {
    if cursor.byte == 0 {
        doc.insert_line(cursor.line, b"");
    } else {
        let tail = doc
            .line(cursor.line)
            .and_then(|l| l.bytes().get(cursor.byte..))
            .map(<[u8]>::to_vec)
            .unwrap_or_default();
        doc.insert_line(cursor.line + 1, &tail);
        doc.truncate_line(cursor.line, cursor.byte);
    }
    cursor.line += 1;
    cursor.byte = 0;
}

/// Delete the byte before the cursor; at column 0 join with the previous line.
pub(crate) fn del_char(doc: &mut Document, cursor: &mut Position) {
    if cursor.line >= doc.line_count() || (cursor.line == 0 && cursor.byte == 0) {
        return;
    }
    if cursor.byte > 0 {
        doc.delete_char(cursor.line, cursor.byte - 1);
        cursor.byte -= 1;
    } else {
        let prev = cursor.line - 1;
        let prev_len = doc.line_len(prev);
        let moved = doc
            .line(cursor.line)
            .map(|l| l.bytes().to_vec())
            .unwrap_or_default();
        doc.append_bytes(prev, &moved);
        doc.delete_line(cursor.line);
        cursor.line = prev;
        cursor.byte = prev_len;
    }
}
