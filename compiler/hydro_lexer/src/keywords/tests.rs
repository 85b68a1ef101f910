use hydro_ir::TokenKind;

use super::lookup;

#[test]
fn resolves_every_reserved_keyword() {
    let cases = [
        ("exit", TokenKind::Exit),
        ("let", TokenKind::Let),
        ("if", TokenKind::If),
        ("elif", TokenKind::Elif),
        ("else", TokenKind::Else),
        ("for", TokenKind::For),
    ];
    for (text, kind) in cases {
        assert_eq!(lookup(text), Some(kind), "{text}");
    }
}

#[test]
fn lookup_agrees_with_keyword_labels() {
    // Every keyword kind's label is its backticked spelling.
    for kind in TokenKind::ALL.into_iter().filter(|k| k.is_keyword()) {
        let spelling = kind.display_name().trim_matches('`');
        assert_eq!(lookup(spelling), Some(kind));
    }
}

#[test]
fn matching_is_case_sensitive() {
    assert_eq!(lookup("Exit"), None);
    assert_eq!(lookup("LET"), None);
    assert_eq!(lookup("If"), None);
}

#[test]
fn prefixes_and_extensions_are_identifiers() {
    for text in ["i", "iffy", "el", "elifs", "lets", "fo", "exits", "forx"] {
        assert_eq!(lookup(text), None, "{text}");
    }
}

#[test]
fn empty_and_long_text_rejected() {
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("exitexitexit"), None);
}
