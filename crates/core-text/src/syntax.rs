//! Language profiles driving the highlighter.
//!
//! A profile is immutable and `'static`: the built-in database is a plain
//! slice, and a document only ever holds a reference to one entry.

use std::path::Path;

bitflags::bitflags! {
    /// Optional highlighting passes enabled per profile.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SyntaxFlags: u8 {
        const HIGHLIGHT_NUMBERS = 0b0000_0001;
        const HIGHLIGHT_STRINGS = 0b0000_0010;
    }
}

/// Which of the two keyword colors a keyword gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeywordClass {
    /// Control flow and declaration words (`if`, `return`, `struct`).
    Control,
    /// Type-like words (`int`, `char`, `u8`).
    Type,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keyword {
    pub text: &'static str,
    pub class: KeywordClass,
}

impl Keyword {
    pub const fn control(text: &'static str) -> Self {
        Self {
            text,
            class: KeywordClass::Control,
        }
    }

    pub const fn ty(text: &'static str) -> Self {
        Self {
            text,
            class: KeywordClass::Type,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Syntax {
    /// Short name shown in the status bar.
    pub name: &'static str,
    /// Patterns starting with `.` match the file extension; anything else
    /// matches as a substring of the file name.
    pub file_match: &'static [&'static str],
    pub keywords: &'static [Keyword],
    pub single_line_comment: Option<&'static str>,
    /// Multi-line comment (open, close) markers.
    pub multi_line_comment: Option<(&'static str, &'static str)>,
    pub flags: SyntaxFlags,
}

impl Syntax {
    /// True when `file_name` is claimed by this profile.
    pub fn matches(&self, file_name: &str) -> bool {
        let ext = file_name.rfind('.').map(|i| &file_name[i..]);
        self.file_match.iter().any(|pattern| {
            if pattern.starts_with('.') {
                ext == Some(*pattern)
            } else {
                file_name.contains(pattern)
            }
        })
    }
}

const C_KEYWORDS: &[Keyword] = &[
    Keyword::control("switch"),
    Keyword::control("if"),
    Keyword::control("while"),
    Keyword::control("for"),
    Keyword::control("break"),
    Keyword::control("continue"),
    Keyword::control("return"),
    Keyword::control("else"),
    Keyword::control("struct"),
    Keyword::control("union"),
    Keyword::control("typedef"),
    Keyword::control("static"),
    Keyword::control("enum"),
    Keyword::control("class"),
    Keyword::control("case"),
    Keyword::ty("int"),
    Keyword::ty("long"),
    Keyword::ty("double"),
    Keyword::ty("float"),
    Keyword::ty("char"),
    Keyword::ty("unsigned"),
    Keyword::ty("signed"),
    Keyword::ty("void"),
];

const RUST_KEYWORDS: &[Keyword] = &[
    Keyword::control("fn"),
    Keyword::control("let"),
    Keyword::control("mut"),
    Keyword::control("if"),
    Keyword::control("else"),
    Keyword::control("match"),
    Keyword::control("loop"),
    Keyword::control("while"),
    Keyword::control("for"),
    Keyword::control("in"),
    Keyword::control("break"),
    Keyword::control("continue"),
    Keyword::control("return"),
    Keyword::control("struct"),
    Keyword::control("enum"),
    Keyword::control("impl"),
    Keyword::control("trait"),
    Keyword::control("pub"),
    Keyword::control("use"),
    Keyword::control("mod"),
    Keyword::control("const"),
    Keyword::control("static"),
    Keyword::ty("bool"),
    Keyword::ty("char"),
    Keyword::ty("str"),
    Keyword::ty("u8"),
    Keyword::ty("u16"),
    Keyword::ty("u32"),
    Keyword::ty("u64"),
    Keyword::ty("usize"),
    Keyword::ty("i8"),
    Keyword::ty("i16"),
    Keyword::ty("i32"),
    Keyword::ty("i64"),
    Keyword::ty("isize"),
    Keyword::ty("f32"),
    Keyword::ty("f64"),
    Keyword::ty("Self"),
];

pub static C: Syntax = Syntax {
    name: "c",
    file_match: &[".c", ".h", ".cpp"],
    keywords: C_KEYWORDS,
    single_line_comment: Some("//"),
    multi_line_comment: Some(("/*", "*/")),
    flags: SyntaxFlags::HIGHLIGHT_NUMBERS.union(SyntaxFlags::HIGHLIGHT_STRINGS),
};

pub static RUST: Syntax = Syntax {
    name: "rust",
    file_match: &[".rs"],
    keywords: RUST_KEYWORDS,
    single_line_comment: Some("//"),
    multi_line_comment: Some(("/*", "*/")),
    flags: SyntaxFlags::HIGHLIGHT_NUMBERS.union(SyntaxFlags::HIGHLIGHT_STRINGS),
};

/// Built-in profile database, searched in order.
pub static SYNTAX_DB: &[&Syntax] = &[&C, &RUST];

/// Pick the first profile claiming `path`'s file name.
pub fn select_for_path(path: &Path) -> Option<&'static Syntax> {
    let name = path.file_name()?.to_str()?;
    SYNTAX_DB.iter().copied().find(|s| s.matches(name))
}
