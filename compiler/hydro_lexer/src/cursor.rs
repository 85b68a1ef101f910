//! Byte cursor over the source text.
//!
//! The scanner classifies bytes with ASCII predicates, so the cursor works on
//! bytes and only decodes a full `char` when reporting an unrecognized one.
//! Positions are `u32` byte offsets; the tokenizer rejects sources longer
//! than `u32::MAX` before a cursor is created.

/// Cursor over a source string with arbitrary lookahead.
///
/// The cursor is [`Copy`], enabling cheap state snapshots.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    /// Current read position (byte index into `src`).
    pos: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub(crate) fn new(src: &'a str) -> Self {
        debug_assert!(
            u32::try_from(src.len()).is_ok(),
            "source length must fit in u32"
        );
        Self { src, pos: 0 }
    }

    /// Returns the byte `offset` positions ahead of the cursor, or `None`
    /// past the end of the source. Never advances.
    #[inline]
    pub(crate) fn peek(&self, offset: usize) -> Option<u8> {
        self.src.as_bytes().get(self.pos as usize + offset).copied()
    }

    /// Returns the byte at the cursor.
    #[inline]
    pub(crate) fn current(&self) -> Option<u8> {
        self.peek(0)
    }

    /// Returns the byte at the cursor and advances past it.
    #[inline]
    pub(crate) fn consume(&mut self) -> Option<u8> {
        let byte = self.current()?;
        self.pos += 1;
        Some(byte)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub(crate) fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, stopping at the end of the source.
    #[inline]
    pub(crate) fn advance_n(&mut self, n: u32) {
        let len = self.src.len() as u32;
        self.pos = self.pos.saturating_add(n).min(len);
    }

    /// Advance over a maximal run of bytes satisfying `pred`.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        let rest = &self.src.as_bytes()[self.pos as usize..];
        let run = rest.iter().take_while(|&&b| pred(b)).count();
        self.pos += run as u32;
    }

    /// Current byte offset in the source.
    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    /// Extract the source text from `start` up to the cursor.
    ///
    /// # Contract
    ///
    /// `start` and the cursor must sit on character boundaries. The scanner
    /// only slices runs of ASCII bytes, which guarantees this.
    #[inline]
    pub(crate) fn slice_from(&self, start: u32) -> &'a str {
        debug_assert!(start <= self.pos, "slice start {start} past cursor");
        &self.src[start as usize..self.pos as usize]
    }

    /// The full character at the cursor, decoded from UTF-8.
    pub(crate) fn char_at_pos(&self) -> Option<char> {
        self.src
            .get(self.pos as usize..)
            .and_then(|rest| rest.chars().next())
    }
}
