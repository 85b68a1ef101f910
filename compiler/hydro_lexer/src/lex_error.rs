//! Lexer error types.
//!
//! Lexing stops at the first error: there is no recovery and no partial
//! token stream. A [`LexError`] records WHERE (`line` and `span`) and WHAT
//! (`kind`).

use hydro_ir::Span;
use thiserror::Error;

/// A lexer error that aborted the whole pass.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("line {line}: {kind}")]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// 1-based line the offending input starts on.
    pub line: u32,
    /// Byte range of the offending input.
    pub span: Span,
}

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("invalid token: unrecognized character {0:?}")]
    UnrecognizedCharacter(char),
    /// `/*` with no closing `*/`. Only reported in strict mode.
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    /// The source cannot be addressed with `u32` byte offsets.
    #[error("source is {len} bytes, more than the {max} byte limit", max = u32::MAX)]
    SourceTooLarge { len: usize },
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: u32, span: Span) -> Self {
        LexError { kind, line, span }
    }

    /// Error for a source longer than `u32::MAX` bytes.
    ///
    /// Raised before scanning starts, so it points at line 1 with an empty
    /// span.
    pub fn source_too_large(len: usize) -> Self {
        LexError {
            kind: LexErrorKind::SourceTooLarge { len },
            line: 1,
            span: Span::default(),
        }
    }
}
