//! Single-pass syntax classifier.
//!
//! `highlight_line` classifies one line's render bytes given the comment state
//! inherited from the previous line and returns the comment state at the end
//! of the line. Cross-line propagation is driven by `Document`.

use crate::syntax::{KeywordClass, Syntax, SyntaxFlags};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Highlight {
    #[default]
    Normal,
    Comment,
    MlComment,
    Keyword1,
    Keyword2,
    String,
    Number,
    /// Search match overlay; never produced by the classifier.
    Match,
}

impl From<KeywordClass> for Highlight {
    fn from(class: KeywordClass) -> Self {
        match class {
            KeywordClass::Control => Highlight::Keyword1,
            KeywordClass::Type => Highlight::Keyword2,
        }
    }
}

const SEPARATORS: &[u8] = b",.()+-/*=~%<>[];";

/// Whitespace, NUL, or punctuation that delimits words and numbers.
pub fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b'\x0b' || b == 0 || SEPARATORS.contains(&b)
}

/// Classify `render` into `out` (resized to `render.len()`).
///
/// Returns true when a multi-line comment is still open at the end of the line.
pub fn highlight_line(
    render: &[u8],
    syntax: Option<&Syntax>,
    starts_in_comment: bool,
    out: &mut Vec<Highlight>,
) -> bool {
    out.clear();
    out.resize(render.len(), Highlight::Normal);
    let Some(syntax) = syntax else {
        return false;
    };

    let scs = syntax.single_line_comment.unwrap_or("").as_bytes();
    let (mcs, mce) = syntax
        .multi_line_comment
        .map(|(open, close)| (open.as_bytes(), close.as_bytes()))
        .unwrap_or((b"", b""));
    let strings = syntax.flags.contains(SyntaxFlags::HIGHLIGHT_STRINGS);
    let numbers = syntax.flags.contains(SyntaxFlags::HIGHLIGHT_NUMBERS);

    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    let mut in_comment = starts_in_comment;

    let mut i = 0;
    while i < render.len() {
        let c = render[i];
        let prev_hl = if i > 0 { out[i - 1] } else { Highlight::Normal };
        let rest = &render[i..];

        if !scs.is_empty() && in_string.is_none() && !in_comment && rest.starts_with(scs) {
            out[i..].fill(Highlight::Comment);
            break;
        }

        if !mcs.is_empty() && !mce.is_empty() && in_string.is_none() {
            if in_comment {
                out[i] = Highlight::MlComment;
                if rest.starts_with(mce) {
                    out[i..i + mce.len()].fill(Highlight::MlComment);
                    i += mce.len();
                    in_comment = false;
                    prev_sep = true;
                } else {
                    i += 1;
                }
                continue;
            } else if rest.starts_with(mcs) {
                out[i..i + mcs.len()].fill(Highlight::MlComment);
                i += mcs.len();
                in_comment = true;
                continue;
            }
        }

        if strings {
            if let Some(quote) = in_string {
                out[i] = Highlight::String;
                if c == b'\\' && i + 1 < render.len() {
                    out[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if c == quote {
                    in_string = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if c == b'"' || c == b'\'' {
                in_string = Some(c);
                out[i] = Highlight::String;
                i += 1;
                continue;
            }
        }

        if numbers
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
                || (c == b'.' && prev_hl == Highlight::Number))
        {
            out[i] = Highlight::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep {
            if let Some(kw) = match_keyword(rest, syntax) {
                let len = kw.text.len();
                out[i..i + len].fill(kw.class.into());
                i += len;
                prev_sep = false;
                continue;
            }
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    in_comment
}

/// First keyword that starts `rest` and is followed by a separator or the line end.
fn match_keyword<'a>(rest: &[u8], syntax: &'a Syntax) -> Option<&'a crate::syntax::Keyword> {
    syntax.keywords.iter().find(|kw| {
        let text = kw.text.as_bytes();
        rest.starts_with(text) && rest.get(text.len()).is_none_or(|&b| is_separator(b))
    })
}
