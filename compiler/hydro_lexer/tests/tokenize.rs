//! Public-API tests for `hydro_lexer`.
//!
//! Property tests generate sources from recognized lexemes only, so every
//! generated input must tokenize successfully.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    clippy::redundant_closure_for_method_calls,
    reason = "proptest macros generate code with these patterns"
)]

use hydro_lexer::{bin_prec, tokenize, LexErrorKind, LexerConfig, Token, TokenKind, Tokenizer};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

// === Documented behavior ===

#[test]
fn empty_input_yields_no_tokens() {
    assert_eq!(tokenize(""), Ok(Vec::new()));
}

#[test]
fn let_statement_on_line_one() {
    let Ok(tokens) = tokenize("let x = 5 ;") else {
        panic!("valid source");
    };
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Let,
            TokenKind::Ident,
            TokenKind::Eq,
            TokenKind::IntLit,
            TokenKind::Semi,
        ]
    );
    assert_eq!(tokens[1].value(), Some("x"));
    assert_eq!(tokens[3].value(), Some("5"));
    assert!(tokens.iter().all(|t| t.line == 1));
}

#[test]
fn comments_produce_no_tokens() {
    let Ok(line) = tokenize("// comment\nexit") else {
        panic!("valid source");
    };
    assert_eq!(kinds(&line), vec![TokenKind::Exit]);
    assert_eq!(line[0].line, 2);

    let Ok(block) = tokenize("/* a\nb */ exit") else {
        panic!("valid source");
    };
    assert_eq!(kinds(&block), vec![TokenKind::Exit]);
    assert_eq!(block[0].line, 2);
}

#[test]
fn iffy_is_one_identifier() {
    let Ok(tokens) = tokenize("iffy") else {
        panic!("valid source");
    };
    assert_eq!(kinds(&tokens), vec![TokenKind::Ident]);
    assert_eq!(tokens[0].value(), Some("iffy"));
}

#[test]
fn precedence_query() {
    assert_eq!(bin_prec(TokenKind::Plus), Some(0));
    assert_eq!(bin_prec(TokenKind::Minus), Some(0));
    assert_eq!(bin_prec(TokenKind::Star), Some(1));
    assert_eq!(bin_prec(TokenKind::FSlash), Some(1));
    assert_eq!(bin_prec(TokenKind::Eq), None);
    assert_eq!(bin_prec(TokenKind::IntLit), None);
}

#[test]
fn error_returns_no_partial_stream() {
    let Err(err) = tokenize("exit(0);\n#") else {
        panic!("`#` is not a Hydro character");
    };
    assert_eq!(err.kind, LexErrorKind::UnrecognizedCharacter('#'));
    assert_eq!(err.line, 2);
    assert_eq!(err.to_string(), "line 2: invalid token: unrecognized character '#'");
}

#[test]
fn strict_config_changes_only_unterminated_comments() {
    let source = "let y = 2; /* trailing";
    let Ok(lenient) = Tokenizer::new(source).tokenize() else {
        panic!("lenient mode accepts unterminated comments");
    };
    assert_eq!(lenient.len(), 5);

    let strict = Tokenizer::with_config(source, LexerConfig::strict()).tokenize();
    assert!(matches!(
        strict,
        Err(ref e) if e.kind == LexErrorKind::UnterminatedBlockComment
    ));
}

// === Properties ===

/// One recognized lexeme, rendered as source text.
fn lexeme() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec!["exit", "let", "if", "elif", "else", "for"])
            .prop_map(String::from),
        prop::sample::select(vec!["(", ")", ";", "=", "+", "-", "*", "/", "{", "}", ":"])
            .prop_map(String::from),
        prop::string::string_regex("[a-zA-Z][a-zA-Z0-9]{0,8}").expect("valid regex"),
        prop::string::string_regex("[0-9]{1,6}").expect("valid regex"),
        Just(String::from("// note")),
        prop::string::string_regex("/\\*[a-z \n]{0,8}\\*/").expect("valid regex"),
    ]
}

/// Separator between lexemes. Always includes a space or newline so that
/// adjacent lexemes never merge (`/` + `/` would form a comment).
fn separator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![" ", "\n", " \t", "\r\n", "\n\n"])
}

fn source() -> impl Strategy<Value = String> {
    proptest::collection::vec((lexeme(), separator()), 0..40).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(lexeme, sep)| {
                // A line comment must end before the next lexeme.
                let sep = if lexeme.starts_with("//") { "\n" } else { sep };
                format!("{lexeme}{sep}")
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn tokenizing_is_deterministic(src in source()) {
        let first = tokenize(&src);
        let second = tokenize(&src);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn lines_are_monotonic_and_match_newlines(src in source()) {
        let tokens = tokenize(&src).map_err(|e| TestCaseError::fail(e.to_string()))?;
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].line <= pair[1].line);
        }
        for token in &tokens {
            let start = token.span.start as usize;
            let newlines_before = src[..start].bytes().filter(|&b| b == b'\n').count();
            prop_assert_eq!(token.line as usize, newlines_before + 1);
        }
    }

    #[test]
    fn spans_cover_lexeme_text(src in source()) {
        let tokens = tokenize(&src).map_err(|e| TestCaseError::fail(e.to_string()))?;
        for token in &tokens {
            let text = &src[token.span.to_range()];
            match token.value() {
                Some(value) => {
                    prop_assert_eq!(text, value);
                }
                None => {
                    prop_assert_eq!(format!("`{text}`"), token.kind.display_name());
                }
            }
        }
    }

    #[test]
    fn identifiers_are_maximal(word in "[a-zA-Z][a-zA-Z0-9]{0,12}") {
        let tokens = tokenize(&word).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(tokens.len(), 1);
        let token = &tokens[0];
        if token.kind.is_keyword() {
            prop_assert_eq!(format!("`{word}`"), token.kind.display_name());
        } else {
            prop_assert_eq!(token.kind, TokenKind::Ident);
            prop_assert_eq!(token.value(), Some(word.as_str()));
        }
    }
}
