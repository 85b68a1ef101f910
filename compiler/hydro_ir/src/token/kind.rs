//! Token kinds for Hydro.

use std::fmt;

/// Token kinds for Hydro.
///
/// A closed, fieldless set: the text of identifiers and integer literals
/// travels in [`Token::value`](super::Token::value), so every query on the
/// kind is a pure function of the variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    Exit,
    IntLit,
    Semi,       // ;
    OpenParen,  // (
    CloseParen, // )
    Ident,
    Let,
    Eq,         // =
    Plus,       // +
    Star,       // *
    Minus,      // -
    FSlash,     // /
    OpenCurly,  // {
    CloseCurly, // }
    If,
    Elif,
    Else,
    Colon, // :
    For,
}

impl TokenKind {
    /// Every variant, in declaration order.
    pub const ALL: [TokenKind; 19] = [
        TokenKind::Exit,
        TokenKind::IntLit,
        TokenKind::Semi,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::Ident,
        TokenKind::Let,
        TokenKind::Eq,
        TokenKind::Plus,
        TokenKind::Star,
        TokenKind::Minus,
        TokenKind::FSlash,
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        TokenKind::If,
        TokenKind::Elif,
        TokenKind::Else,
        TokenKind::Colon,
        TokenKind::For,
    ];

    /// Binding power of this kind as a binary operator.
    ///
    /// Higher binds tighter: `+`/`-` are 0, `*`/`/` are 1. Every other kind
    /// is not a binary operator.
    #[inline]
    pub const fn bin_prec(self) -> Option<u8> {
        match self {
            TokenKind::Plus | TokenKind::Minus => Some(0),
            TokenKind::Star | TokenKind::FSlash => Some(1),
            _ => None,
        }
    }

    /// Check if this is a reserved keyword.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Exit
                | TokenKind::Let
                | TokenKind::If
                | TokenKind::Elif
                | TokenKind::Else
                | TokenKind::For
        )
    }

    /// Check if tokens of this kind carry their source text.
    #[inline]
    pub const fn has_value(self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::IntLit)
    }

    /// Human-readable label for diagnostics.
    ///
    /// Keywords and punctuation render as the backticked lexeme.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Exit => "`exit`",
            TokenKind::IntLit => "int literal",
            TokenKind::Semi => "`;`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Ident => "identifier",
            TokenKind::Let => "`let`",
            TokenKind::Eq => "`=`",
            TokenKind::Plus => "`+`",
            TokenKind::Star => "`*`",
            TokenKind::Minus => "`-`",
            TokenKind::FSlash => "`/`",
            TokenKind::OpenCurly => "`{`",
            TokenKind::CloseCurly => "`}`",
            TokenKind::If => "`if`",
            TokenKind::Elif => "`elif`",
            TokenKind::Else => "`else`",
            TokenKind::Colon => "`:`",
            TokenKind::For => "`for`",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
