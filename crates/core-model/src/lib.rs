//! Editor model: the document state plus the single view onto it.
//!
//! `EditorState` owns the text and the status message; `View` owns the
//! cursor, the scroll offsets and the text-area geometry. Keeping them as
//! separate fields lets action code borrow both mutably at once through
//! [`EditorModel::split_state_and_view`].

use core_state::EditorState;
use core_text::Position;

/// Screen rows reserved below the text area (status bar + message bar).
pub const RESERVED_ROWS: u16 = 2;

/// First visible line and first visible render column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct View {
    /// Logical cursor (line, byte). The line may be the virtual line past the end.
    pub cursor: Position,
    /// Render column of the cursor, recomputed on every scroll.
    pub rx: usize,
    pub offset: Offset,
    /// Text-area rows (terminal rows minus [`RESERVED_ROWS`]).
    pub rows: usize,
    pub cols: usize,
}

impl View {
    /// View sized for a terminal of `cols` x `term_rows` cells.
    pub fn new(cols: u16, term_rows: u16) -> Self {
        let mut v = Self::default();
        v.resize(cols, term_rows);
        v
    }

    pub fn resize(&mut self, cols: u16, term_rows: u16) {
        self.cols = cols as usize;
        self.rows = term_rows.saturating_sub(RESERVED_ROWS) as usize;
    }

    /// Screen row (0-based) the cursor occupies inside the text area.
    pub fn cursor_screen_row(&self) -> usize {
        self.cursor.line.saturating_sub(self.offset.row)
    }

    /// Screen column (0-based) the cursor occupies.
    pub fn cursor_screen_col(&self) -> usize {
        self.rx.saturating_sub(self.offset.col)
    }
}

#[derive(Debug)]
pub struct EditorModel {
    state: EditorState,
    view: View,
}

impl EditorModel {
    pub fn new(state: EditorState, view: View) -> Self {
        Self { state, view }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Disjoint mutable borrows of the state and the view.
    pub fn split_state_and_view(&mut self) -> (&mut EditorState, &mut View) {
        (&mut self.state, &mut self.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::{DEFAULT_TAB_STOP, Document};

    #[test]
    fn resize_reserves_two_rows() {
        let mut v = View::new(80, 24);
        assert_eq!((v.cols, v.rows), (80, 22));
        v.resize(10, 1);
        assert_eq!((v.cols, v.rows), (10, 0));
    }

    #[test]
    fn split_borrow_mutates_both() {
        let doc = Document::from_bytes(b"abc", DEFAULT_TAB_STOP);
        let mut model = EditorModel::new(EditorState::new(doc), View::new(80, 24));
        {
            let (state, view) = model.split_state_and_view();
            state.document.insert_char(0, 3, b'd');
            view.cursor.byte = 4;
        }
        assert_eq!(model.state().document.line(0).unwrap().bytes(), b"abcd");
        assert_eq!(model.view().cursor.byte, 4);
    }

    #[test]
    fn screen_coordinates_subtract_offsets() {
        let mut v = View::new(80, 24);
        v.cursor = Position::new(12, 3);
        v.rx = 7;
        v.offset = Offset { row: 10, col: 2 };
        assert_eq!(v.cursor_screen_row(), 2);
        assert_eq!(v.cursor_screen_col(), 5);
    }
}
