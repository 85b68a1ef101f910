//! Token types for the Hydro lexer.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use super::Span;

/// A token with its position in the source.
///
/// `line` is 1-based and names the line the token starts on. `value` holds
/// the lexeme for [`TokenKind::Ident`] and [`TokenKind::IntLit`] and is `None`
/// for every other kind.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub span: Span,
    pub value: Option<String>,
}

impl Token {
    /// Create a token without a text payload.
    #[inline]
    pub fn new(kind: TokenKind, line: u32, span: Span) -> Self {
        debug_assert!(!kind.has_value(), "{kind} tokens carry their text");
        Token {
            kind,
            line,
            span,
            value: None,
        }
    }

    /// Create an identifier or integer-literal token carrying its text.
    #[inline]
    pub fn with_value(kind: TokenKind, line: u32, span: Span, value: impl Into<String>) -> Self {
        debug_assert!(kind.has_value(), "{kind} tokens carry no text");
        Token {
            kind,
            line,
            span,
            value: Some(value.into()),
        }
    }

    /// The text payload, if any.
    #[inline]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{:?}({value:?})", self.kind)?,
            None => write!(f, "{:?}", self.kind)?,
        }
        write!(f, " @ {}:{}", self.line, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::TokenKind;
    crate::static_assert_size!(TokenKind, 1);
}
