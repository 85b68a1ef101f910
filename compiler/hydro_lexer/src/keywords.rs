//! Reserved keyword resolution.
//!
//! Keywords are matched against the whole identifier run after maximal
//! munch, so `iffy` stays an identifier. Matching is exact and
//! case-sensitive.

use hydro_ir::TokenKind;

/// Look up a reserved keyword by text.
///
/// Returns the keyword's `TokenKind`, or `None` for a regular identifier.
/// Uses length-bucketing for fast rejection: every keyword is 2-4 bytes.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    match text.len() {
        2 => match text {
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "let" => Some(TokenKind::Let),
            _ => None,
        },
        4 => match text {
            "elif" => Some(TokenKind::Elif),
            "else" => Some(TokenKind::Else),
            "exit" => Some(TokenKind::Exit),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
