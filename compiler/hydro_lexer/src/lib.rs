//! Lexer for the Hydro language.
//!
//! Turns a complete source string into a flat, ordered `Vec<Token>`, each
//! token tagged with its 1-based line and byte span. There is no error
//! recovery: the first unrecognized character aborts the pass with a
//! [`LexError`].
//!
//! ```
//! use hydro_lexer::{tokenize, TokenKind};
//!
//! # fn main() -> Result<(), hydro_lexer::LexError> {
//! let tokens = tokenize("let x = 5;")?;
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Let, TokenKind::Ident, TokenKind::Eq, TokenKind::IntLit, TokenKind::Semi]
//! );
//! assert_eq!(tokens[1].value(), Some("x"));
//! # Ok(())
//! # }
//! ```

mod config;
mod cursor;
mod keywords;
mod lex_error;
mod tokenizer;

pub use config::LexerConfig;
pub use hydro_ir::{Span, Token, TokenKind};
pub use lex_error::{LexError, LexErrorKind};
pub use tokenizer::Tokenizer;

/// Tokenize `source` with the default configuration.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(source).tokenize()
}

/// Binding power of `kind` as a binary operator, if it is one.
///
/// See [`TokenKind::bin_prec`].
#[inline]
pub fn bin_prec(kind: TokenKind) -> Option<u8> {
    kind.bin_prec()
}
