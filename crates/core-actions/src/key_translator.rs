//! Key -> Action translation. Stateless: the quit confirmation counter lives
//! in the controller.

use crate::{Action, EditKind, MotionKind};
use core_events::{ENTER, ESC, Key, NamedKey, ctrl_key};

/// Map a decoded key to the action it triggers. `Key::None` maps to `None`.
pub fn translate_key(key: Key) -> Option<Action> {
    let action = match key {
        Key::None => return None,
        Key::Named(named) => match named {
            NamedKey::ArrowLeft => Action::Motion(MotionKind::Left),
            NamedKey::ArrowRight => Action::Motion(MotionKind::Right),
            NamedKey::ArrowUp => Action::Motion(MotionKind::Up),
            NamedKey::ArrowDown => Action::Motion(MotionKind::Down),
            NamedKey::Home => Action::Motion(MotionKind::LineStart),
            NamedKey::End => Action::Motion(MotionKind::LineEnd),
            NamedKey::PageUp => Action::Motion(MotionKind::PageUp),
            NamedKey::PageDown => Action::Motion(MotionKind::PageDown),
            NamedKey::Delete => Action::Edit(EditKind::DeleteUnder),
        },
        Key::Byte(_) if key.is_delete_like() => Action::Edit(EditKind::Backspace),
        Key::Byte(ENTER) => Action::Edit(EditKind::InsertNewline),
        Key::Byte(b) if b == ctrl_key(b'q') => Action::Quit,
        Key::Byte(b) if b == ctrl_key(b's') => Action::Save,
        Key::Byte(b) if b == ctrl_key(b'f') => Action::Find,
        Key::Byte(b) if b == ctrl_key(b'l') => Action::Noop,
        Key::Byte(ESC) => Action::Noop,
        Key::Byte(b) => Action::Edit(EditKind::InsertByte(b)),
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::{BACKSPACE, TAB};

    #[test]
    fn control_chords() {
        assert_eq!(translate_key(Key::Byte(ctrl_key(b'q'))), Some(Action::Quit));
        assert_eq!(translate_key(Key::Byte(ctrl_key(b's'))), Some(Action::Save));
        assert_eq!(translate_key(Key::Byte(ctrl_key(b'f'))), Some(Action::Find));
        assert_eq!(translate_key(Key::Byte(ctrl_key(b'l'))), Some(Action::Noop));
        assert_eq!(translate_key(Key::Byte(ESC)), Some(Action::Noop));
    }

    #[test]
    fn deletion_keys() {
        let back = Some(Action::Edit(EditKind::Backspace));
        assert_eq!(translate_key(Key::Byte(BACKSPACE)), back);
        assert_eq!(translate_key(Key::Byte(ctrl_key(b'h'))), back);
        assert_eq!(
            translate_key(Key::Named(NamedKey::Delete)),
            Some(Action::Edit(EditKind::DeleteUnder))
        );
    }

    #[test]
    fn other_bytes_are_inserted_verbatim() {
        assert_eq!(
            translate_key(Key::Byte(b'x')),
            Some(Action::Edit(EditKind::InsertByte(b'x')))
        );
        assert_eq!(
            translate_key(Key::Byte(TAB)),
            Some(Action::Edit(EditKind::InsertByte(TAB)))
        );
        assert_eq!(
            translate_key(Key::Byte(ENTER)),
            Some(Action::Edit(EditKind::InsertNewline))
        );
        assert_eq!(translate_key(Key::None), None);
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(
            translate_key(Key::Named(NamedKey::Home)),
            Some(Action::Motion(MotionKind::LineStart))
        );
        assert_eq!(
            translate_key(Key::Named(NamedKey::PageDown)),
            Some(Action::Motion(MotionKind::PageDown))
        );
    }
}
