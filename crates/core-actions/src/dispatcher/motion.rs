//! Motion sub-dispatch (cursor movement).
//!
//! Every motion ends with the byte offset clamped to the destination line's
//! length, so the cursor never sits past the end of a line.

use crate::MotionKind;
use core_model::View;
use core_text::{Document, Position};

pub(crate) fn handle_motion(kind: MotionKind, doc: &Document, view: &mut View) {
    match kind {
        MotionKind::LineStart => view.cursor.byte = 0,
        MotionKind::LineEnd => {
            if view.cursor.line < doc.line_count() {
                view.cursor.byte = doc.line_len(view.cursor.line);
            }
        }
        MotionKind::PageUp | MotionKind::PageDown => page(kind, doc, view),
        MotionKind::Left | MotionKind::Right | MotionKind::Up | MotionKind::Down => {
            move_cursor(kind, doc, &mut view.cursor);
        }
    }
}

/// One arrow step. Left at column 0 wraps to the end of the previous line;
/// right at the end of a line wraps to the start of the next.
pub(crate) fn move_cursor(kind: MotionKind, doc: &Document, cursor: &mut Position) {
    let count = doc.line_count();
    match kind {
        MotionKind::Left => {
            if cursor.byte > 0 {
                cursor.byte -= 1;
            } else if cursor.line > 0 {
                cursor.line -= 1;
                cursor.byte = doc.line_len(cursor.line);
            }
        }
        MotionKind::Right => {
            if cursor.line < count {
                if cursor.byte < doc.line_len(cursor.line) {
                    cursor.byte += 1;
                } else {
                    cursor.byte = 0;
                    cursor.line += 1;
                }
            }
        }
        MotionKind::Up => cursor.line = cursor.line.saturating_sub(1),
        MotionKind::Down => {
            if cursor.line < count {
                cursor.line += 1;
            }
        }
        _ => {}
    }
    cursor.byte = cursor.byte.min(doc.line_len(cursor.line));
}

/// Jump to the top (or bottom) screen row, then step a full screen.
fn page(kind: MotionKind, doc: &Document, view: &mut View) {
    let step = if kind == MotionKind::PageUp {
        view.cursor.line = view.offset.row;
        MotionKind::Up
    } else {
        view.cursor.line = (view.offset.row + view.rows)
            .saturating_sub(1)
            .min(doc.line_count());
        MotionKind::Down
    };
    for _ in 0..view.rows {
        move_cursor(step, doc, &mut view.cursor);
    }
    view.cursor.clamp_to(doc);
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::DEFAULT_TAB_STOP;

    fn doc(text: &str) -> Document {
        Document::from_bytes(text.as_bytes(), DEFAULT_TAB_STOP)
    }

    #[test]
    fn left_and_right_wrap_across_lines() {
        let d = doc("ab\ncde");
        let mut c = Position::new(1, 0);
        move_cursor(MotionKind::Left, &d, &mut c);
        assert_eq!(c, Position::new(0, 2));
        move_cursor(MotionKind::Right, &d, &mut c);
        assert_eq!(c, Position::new(1, 0));
        let mut c = Position::origin();
        move_cursor(MotionKind::Left, &d, &mut c);
        assert_eq!(c, Position::origin());
    }

    #[test]
    fn right_reaches_virtual_line_and_stops() {
        let d = doc("a");
        let mut c = Position::new(0, 1);
        move_cursor(MotionKind::Right, &d, &mut c);
        assert_eq!(c, Position::new(1, 0));
        move_cursor(MotionKind::Right, &d, &mut c);
        assert_eq!(c, Position::new(1, 0));
    }

    #[test]
    fn vertical_moves_clamp_byte() {
        let d = doc("long line\nab");
        let mut c = Position::new(0, 8);
        move_cursor(MotionKind::Down, &d, &mut c);
        assert_eq!(c, Position::new(1, 2));
        move_cursor(MotionKind::Down, &d, &mut c);
        assert_eq!(c, Position::new(2, 0));
        move_cursor(MotionKind::Down, &d, &mut c);
        assert_eq!(c, Position::new(2, 0));
    }

    #[test]
    fn home_end() {
        let d = doc("hello");
        let mut v = View::new(80, 24);
        v.cursor = Position::new(0, 2);
        handle_motion(MotionKind::LineEnd, &d, &mut v);
        assert_eq!(v.cursor.byte, 5);
        handle_motion(MotionKind::LineStart, &d, &mut v);
        assert_eq!(v.cursor.byte, 0);
        v.cursor = Position::new(1, 0);
        handle_motion(MotionKind::LineEnd, &d, &mut v);
        assert_eq!(v.cursor, Position::new(1, 0));
    }

    #[test]
    fn page_down_and_up_move_by_a_screen() {
        let text: Vec<String> = (0..100).map(|i| i.to_string()).collect();
        let d = doc(&text.join("\n"));
        let mut v = View::new(80, 12); // 10 rows
        handle_motion(MotionKind::PageDown, &d, &mut v);
        assert_eq!(v.cursor.line, 19);
        v.offset.row = 10;
        handle_motion(MotionKind::PageUp, &d, &mut v);
        assert_eq!(v.cursor.line, 0);
        v.offset.row = 95;
        handle_motion(MotionKind::PageDown, &d, &mut v);
        assert_eq!(v.cursor.line, 100, "stops on the virtual line");
    }
}
