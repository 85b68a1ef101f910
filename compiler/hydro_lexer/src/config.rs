//! Lexer configuration.

/// Options controlling how the tokenizer treats questionable input.
///
/// The default matches the historical behavior of the language: an
/// unterminated block comment silently swallows the rest of the file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LexerConfig {
    /// Report `/*` without a closing `*/` as
    /// [`LexErrorKind::UnterminatedBlockComment`](crate::LexErrorKind::UnterminatedBlockComment)
    /// instead of treating it as reaching end of input.
    pub strict_block_comments: bool,
}

impl LexerConfig {
    /// Configuration with every strictness option enabled.
    pub const fn strict() -> Self {
        LexerConfig {
            strict_block_comments: true,
        }
    }
}
