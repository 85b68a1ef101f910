//! Single-pass scanner producing the flat token stream.
//!
//! Dispatch is on the next byte (plus one byte of lookahead for comment
//! openers), with no backtracking:
//!
//! | Input              | Result                                   |
//! |--------------------|------------------------------------------|
//! | ASCII letter       | keyword or `Ident`, maximal alnum run    |
//! | ASCII digit        | `IntLit`, maximal digit run              |
//! | `//`               | skipped to end of line (newline kept)    |
//! | `/* ... */`        | skipped; inner newlines count as lines   |
//! | `( ) ; = + - * / { } :` | single-character token              |
//! | `\n`               | no token, line counter + 1               |
//! | other whitespace   | skipped                                  |
//! | anything else      | [`LexErrorKind::UnrecognizedCharacter`]  |

use hydro_ir::{Span, Token, TokenKind};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::keywords;
use crate::{LexError, LexErrorKind, LexerConfig};

/// Tokenizer over one complete source text.
///
/// Owns the source for its whole lifetime. Every call to
/// [`tokenize`](Self::tokenize) scans from the start with a fresh cursor, so
/// repeated calls return identical results.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    src: String,
    config: LexerConfig,
}

impl Tokenizer {
    /// Create a tokenizer with the default configuration.
    pub fn new(src: impl Into<String>) -> Self {
        Self::with_config(src, LexerConfig::default())
    }

    pub fn with_config(src: impl Into<String>, config: LexerConfig) -> Self {
        Tokenizer {
            src: src.into(),
            config,
        }
    }

    /// The source text being tokenized.
    pub fn source(&self) -> &str {
        &self.src
    }

    pub fn config(&self) -> LexerConfig {
        self.config
    }

    /// Scan the whole source into an ordered token list.
    ///
    /// The first error aborts the pass; no partial token list is returned.
    pub fn tokenize(&self) -> Result<Vec<Token>, LexError> {
        if u32::try_from(self.src.len()).is_err() {
            return Err(LexError::source_too_large(self.src.len()));
        }
        Scanner::new(&self.src, self.config).run()
    }
}

/// Map a single-character lexeme to its kind.
fn punctuation(byte: u8) -> Option<TokenKind> {
    match byte {
        b'(' => Some(TokenKind::OpenParen),
        b')' => Some(TokenKind::CloseParen),
        b';' => Some(TokenKind::Semi),
        b'=' => Some(TokenKind::Eq),
        b'+' => Some(TokenKind::Plus),
        b'*' => Some(TokenKind::Star),
        b'-' => Some(TokenKind::Minus),
        b'/' => Some(TokenKind::FSlash),
        b'{' => Some(TokenKind::OpenCurly),
        b'}' => Some(TokenKind::CloseCurly),
        b':' => Some(TokenKind::Colon),
        _ => None,
    }
}

/// Whitespace other than `\n`: space, tab, carriage return, vertical tab,
/// form feed.
#[inline]
fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | 0x0B | 0x0C)
}

/// Scanning state for one pass.
struct Scanner<'a> {
    cursor: Cursor<'a>,
    config: LexerConfig,
    /// Line of the next token (1-based).
    line: u32,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str, config: LexerConfig) -> Self {
        Scanner {
            cursor: Cursor::new(src),
            config,
            line: 1,
            // Rough guess: one token every four bytes.
            tokens: Vec::with_capacity(src.len() / 4),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(byte) = self.cursor.current() {
            let start = self.cursor.pos();
            match byte {
                b if b.is_ascii_alphabetic() => self.word(start),
                b if b.is_ascii_digit() => self.int_lit(start),
                b'/' if self.cursor.peek(1) == Some(b'/') => self.line_comment(),
                b'/' if self.cursor.peek(1) == Some(b'*') => self.block_comment(start)?,
                b'\n' => {
                    self.cursor.advance();
                    self.line += 1;
                }
                b if is_blank(b) => self.cursor.advance(),
                b => match punctuation(b) {
                    Some(kind) => {
                        self.cursor.advance();
                        self.push(Token::new(kind, self.line, self.span_from(start)));
                    }
                    None => return Err(self.unrecognized(start)),
                },
            }
        }

        debug!(
            tokens = self.tokens.len(),
            lines = self.line,
            "tokenized source"
        );
        Ok(self.tokens)
    }

    fn push(&mut self, token: Token) {
        trace!(
            kind = token.kind.display_name(),
            line = token.line,
            span = %token.span,
            "token"
        );
        self.tokens.push(token);
    }

    #[inline]
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.cursor.pos())
    }

    /// Keyword or identifier: a letter followed by letters and digits.
    fn word(&mut self, start: u32) {
        self.cursor.advance();
        self.cursor.eat_while(|b| b.is_ascii_alphanumeric());
        let text = self.cursor.slice_from(start);
        let span = self.span_from(start);
        let token = match keywords::lookup(text) {
            Some(kind) => Token::new(kind, self.line, span),
            None => Token::with_value(TokenKind::Ident, self.line, span, text),
        };
        self.push(token);
    }

    /// Decimal digits only; the value is checked downstream.
    fn int_lit(&mut self, start: u32) {
        self.cursor.advance();
        self.cursor.eat_while(|b| b.is_ascii_digit());
        let text = self.cursor.slice_from(start);
        let token = Token::with_value(TokenKind::IntLit, self.line, self.span_from(start), text);
        self.push(token);
    }

    /// `//` up to, not including, the newline.
    fn line_comment(&mut self) {
        self.cursor.advance_n(2);
        self.cursor.eat_while(|b| b != b'\n');
    }

    /// `/* ... */`, non-nesting.
    fn block_comment(&mut self, start: u32) -> Result<(), LexError> {
        let opened_on = self.line;
        self.cursor.advance_n(2);
        loop {
            if self.cursor.current() == Some(b'*') && self.cursor.peek(1) == Some(b'/') {
                self.cursor.advance_n(2);
                return Ok(());
            }
            match self.cursor.consume() {
                Some(b'\n') => self.line += 1,
                Some(_) => {}
                None => return self.unterminated_block_comment(start, opened_on),
            }
        }
    }

    fn unterminated_block_comment(&self, start: u32, opened_on: u32) -> Result<(), LexError> {
        let span = self.span_from(start);
        if self.config.strict_block_comments {
            return Err(LexError::new(
                LexErrorKind::UnterminatedBlockComment,
                opened_on,
                span,
            ));
        }
        debug!(line = opened_on, %span, "block comment runs to end of input");
        Ok(())
    }

    fn unrecognized(&self, start: u32) -> LexError {
        let ch = self
            .cursor
            .char_at_pos()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        let end = start + ch.len_utf8() as u32;
        LexError::new(
            LexErrorKind::UnrecognizedCharacter(ch),
            self.line,
            Span::new(start, end),
        )
    }
}
