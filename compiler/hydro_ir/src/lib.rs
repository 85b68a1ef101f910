//! Hydro IR - front-end data types
//!
//! This crate holds the types shared between the lexer and the (future)
//! parser:
//! - [`Span`] for byte ranges in source text
//! - [`Token`] and [`TokenKind`] for lexer output
//!
//! Every type is cheap to compare and hash so token streams can be diffed
//! and cached by downstream passes.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::{Span, SpanError};
pub use token::{Token, TokenKind};
