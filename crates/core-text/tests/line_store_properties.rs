use core_text::{DEFAULT_TAB_STOP, Document, Highlight, syntax};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(usize, Vec<u8>),
    Delete(usize),
    InsertChar(usize, usize, u8),
    DeleteChar(usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..12, proptest::collection::vec(b' '..=b'~', 0..8)).prop_map(|(at, s)| Op::Insert(at, s)),
        (0usize..12).prop_map(Op::Delete),
        (0usize..12, 0usize..10, b' '..=b'~').prop_map(|(l, at, c)| Op::InsertChar(l, at, c)),
        (0usize..12, 0usize..10).prop_map(|(l, at)| Op::DeleteChar(l, at)),
    ]
}

fn lines_text() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        proptest::collection::vec(prop_oneof![b' '..=b'~', Just(b'\t')], 0..20),
        0..10,
    )
    .prop_map(|lines| {
        let mut out = Vec::new();
        for l in lines {
            out.extend_from_slice(&l);
            out.push(b'\n');
        }
        out
    })
}

proptest! {
    #[test]
    fn tab_free_conversion_is_an_exact_inverse(content in proptest::collection::vec(b' '..=b'~', 0..64)) {
        let doc = Document::from_bytes(&content, 4);
        for cx in 0..=content.len() {
            prop_assert_eq!(doc.rx_to_cx(0, doc.cx_to_rx(0, cx)), cx);
        }
    }

    #[test]
    fn serialize_reproduces_loaded_text(text in lines_text()) {
        let doc = Document::from_bytes(&text, DEFAULT_TAB_STOP);
        prop_assert_eq!(doc.serialize(), text);
        prop_assert!(!doc.is_dirty());
    }

    #[test]
    fn indices_and_caches_survive_any_edit_sequence(ops in proptest::collection::vec(op(), 0..40)) {
        let mut doc = Document::from_bytes(b"int a;\n/* x\ny */\n\tb", DEFAULT_TAB_STOP);
        doc.set_syntax(Some(&syntax::C));
        for op in ops {
            match op {
                Op::Insert(at, s) => { doc.insert_line(at, &s); }
                Op::Delete(at) => { doc.delete_line(at); }
                Op::InsertChar(l, at, c) => { doc.insert_char(l, at, c); }
                Op::DeleteChar(l, at) => { doc.delete_char(l, at); }
            }
            let mut open = false;
            for (i, line) in doc.lines().iter().enumerate() {
                prop_assert_eq!(line.index(), i);
                prop_assert_eq!(line.render().len(), line.highlight().len());
                prop_assert!(!line.render().contains(&b'\t'));
                // recomputing from scratch must agree with the incremental state
                let mut fresh = Vec::new();
                let fresh_open = core_text::highlight_line(line.render(), Some(&syntax::C), open, &mut fresh);
                prop_assert_eq!(fresh.as_slice(), line.highlight());
                prop_assert_eq!(fresh_open, line.continues_comment());
                open = fresh_open;
            }
        }
    }
}

#[test]
fn match_overlay_is_not_produced_by_classifier() {
    let doc = {
        let mut d = Document::from_bytes(b"int x = 1; // \"s\" /* y */", DEFAULT_TAB_STOP);
        d.set_syntax(Some(&syntax::C));
        d
    };
    assert!(!doc.line(0).unwrap().highlight().contains(&Highlight::Match));
}
