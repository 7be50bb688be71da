mod common;

use common::*;
use core_actions::{Controller, Frontend, prompt};
use core_events::{BACKSPACE, Key, NamedKey};
use core_model::EditorModel;
use core_text::{Highlight, Position};
use pretty_assertions::assert_eq;

fn find_with(m: &mut EditorModel, keys: Vec<Key>) -> ScriptedFrontend {
    let mut fe = ScriptedFrontend::new([ctrl(b'f')].into_iter().chain(keys));
    let mut c = Controller::new(3);
    run(&mut c, m, &mut fe);
    fe
}

#[test]
fn search_wraps_through_matches() {
    let mut m = model("foo\nbar\nfoo");
    let mut keys = typed("foo");
    keys.push(arrow(NamedKey::ArrowDown));
    keys.push(enter());
    find_with(&mut m, keys);
    // first match after the origin line is line 2, next wraps to line 0
    assert_eq!(m.view().cursor, Position::new(0, 0));
    assert_eq!(m.state().status_text(), None);
    let hl = m.state().document.line(0).unwrap().highlight();
    assert!(!hl.contains(&Highlight::Match), "overlay cleared on Enter");
}

#[test]
fn search_from_last_line_wraps_to_top_then_back() {
    let mut m = model("foo\nbar\nfoo");
    m.view_mut().cursor = Position::new(2, 0);
    let mut keys = typed("foo");
    keys.push(enter());
    find_with(&mut m, keys);
    assert_eq!(m.view().cursor, Position::new(0, 0));

    m.view_mut().cursor = Position::new(2, 0);
    let mut keys = typed("foo");
    keys.push(arrow(NamedKey::ArrowDown));
    keys.push(enter());
    find_with(&mut m, keys);
    assert_eq!(m.view().cursor, Position::new(2, 0));
}

#[test]
fn escape_restores_cursor_and_offset() {
    let mut m = model("alpha\nbeta\ngamma");
    m.view_mut().cursor = Position::new(0, 3);
    let mut keys = typed("gam");
    keys.push(esc());
    find_with(&mut m, keys);
    assert_eq!(m.view().cursor, Position::new(0, 3));
    assert_eq!(m.view().offset.row, 0);
    assert!(
        m.state()
            .document
            .lines()
            .iter()
            .all(|l| !l.highlight().contains(&Highlight::Match))
    );
}

#[test]
fn search_prompt_shows_live_query() {
    let mut m = model("abc");
    let fe = find_with(&mut m, vec![Key::Byte(b'b'), esc()]);
    let shown: Vec<_> = fe.statuses.iter().flatten().cloned().collect();
    assert!(shown.contains(&"Search:  (Use ESC/Arrows/Enter)".to_string()));
    assert!(shown.contains(&"Search: b (Use ESC/Arrows/Enter)".to_string()));
}

#[test]
fn prompt_edits_buffer_and_ignores_empty_enter() {
    let mut m = model("");
    let mut fe = ScriptedFrontend::new([
        enter(),
        Key::Byte(b'a'),
        Key::Byte(b'\t'),
        Key::Byte(b'b'),
        Key::Byte(BACKSPACE),
        Key::Byte(b'c'),
        Key::None,
        enter(),
    ]);
    let got = prompt(&mut m, &mut fe, "Name: {}", None).unwrap();
    assert_eq!(got.as_deref(), Some("ac"));
    assert_eq!(m.state().status_text(), None);
    assert_eq!(fe.remaining(), 0);
}

#[test]
fn prompt_callback_sees_every_key() {
    let mut m = model("");
    let mut fe = ScriptedFrontend::new([Key::Byte(b'x'), esc()]);
    let mut seen = Vec::new();
    let mut cb = |_: &mut EditorModel, buf: &str, key: Key| seen.push((buf.to_string(), key));
    let got = prompt(&mut m, &mut fe, "{}", Some(&mut cb)).unwrap();
    assert_eq!(got, None);
    assert_eq!(
        seen,
        vec![("x".to_string(), Key::Byte(b'x')), ("x".to_string(), esc())]
    );
}

#[test]
fn save_as_names_document_and_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.c");
    let mut m = model("");
    let mut keys = typed("int");
    keys.push(ctrl(b's'));
    keys.extend(typed(path.to_str().unwrap()));
    keys.push(enter());
    let mut fe = ScriptedFrontend::new(keys);
    let mut c = Controller::new(3);
    run(&mut c, &mut m, &mut fe);

    assert_eq!(std::fs::read(&path).unwrap(), b"int\n");
    assert_eq!(m.state().status_text(), Some("4 bytes written to disk"));
    assert!(!m.state().document.is_dirty());
    assert_eq!(m.state().document.syntax().map(|s| s.name), Some("c"));
    assert_eq!(
        m.state().document.line(0).unwrap().highlight(),
        &[Highlight::Keyword2; 3]
    );
}

#[test]
fn save_as_cancel_reports_abort() {
    let mut m = model("");
    let mut fe = ScriptedFrontend::new([
        Key::Byte(b'z'),
        ctrl(b's'),
        Key::Byte(b'f'),
        esc(),
    ]);
    let mut c = Controller::new(3);
    run(&mut c, &mut m, &mut fe);
    assert_eq!(m.state().status_text(), Some("Save aborted"));
    assert!(m.state().document.path().is_none());
    assert!(m.state().document.is_dirty());
}

#[test]
fn save_failure_is_reported_and_keeps_dirty() {
    let dir = tempfile::tempdir().unwrap();
    let mut m = model("x");
    m.state_mut()
        .document
        .set_path(dir.path().join("no_such_dir").join("f.txt"));
    let mut keys = typed("y");
    keys.push(ctrl(b's'));
    let mut fe = ScriptedFrontend::new(keys);
    let mut c = Controller::new(3);
    run(&mut c, &mut m, &mut fe);
    let status = m.state().status_text().unwrap_or_default().to_string();
    assert!(status.starts_with("Can't save! I/O error: "), "{status}");
    assert!(m.state().document.is_dirty());
}

#[test]
fn frontend_errors_propagate_out_of_prompt() {
    let mut m = model("abc");
    let mut fe = ScriptedFrontend::new([]);
    assert!(fe.refresh(&mut m).is_ok());
    let err = prompt(&mut m, &mut fe, "{}", None).unwrap_err();
    assert!(err.to_string().contains("exhausted"));
}
