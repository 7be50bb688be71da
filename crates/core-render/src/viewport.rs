//! Scroll policy.
//!
//! Keeps the cursor inside `[offset.row, offset.row + rows)` vertically and
//! `[offset.col, offset.col + cols)` horizontally (render columns), moving the
//! offsets by the minimal amount. No re-centering.

use core_model::View;
use core_text::Document;
use tracing::trace;

/// Recompute the cursor render column and clamp the offsets around it.
///
/// Returns true when either offset moved.
pub fn scroll(view: &mut View, doc: &Document) -> bool {
    view.rx = doc.cx_to_rx(view.cursor.line, view.cursor.byte);
    let before = view.offset;

    if view.cursor.line < view.offset.row {
        view.offset.row = view.cursor.line;
    }
    if view.cursor.line >= view.offset.row + view.rows {
        view.offset.row = view.cursor.line + 1 - view.rows;
    }
    if view.rx < view.offset.col {
        view.offset.col = view.rx;
    }
    if view.rx >= view.offset.col + view.cols {
        view.offset.col = view.rx + 1 - view.cols;
    }

    let moved = view.offset != before;
    if moved {
        trace!(
            target: "render",
            row = view.offset.row,
            col = view.offset.col,
            "viewport_scrolled"
        );
    }
    moved
}
