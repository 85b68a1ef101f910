//! Arena allocation errors.

use thiserror::Error;

/// Error returned when the arena cannot satisfy a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ArenaError {
    /// No aligned region of the requested size is left before the buffer end.
    ///
    /// `remaining` counts the free bytes past the cursor, before alignment
    /// padding is taken out.
    #[error(
        "arena exhausted: requested {size} bytes (align {align}) with {remaining} bytes remaining"
    )]
    Exhausted {
        size: usize,
        align: usize,
        remaining: usize,
    },
    /// The backing buffer could not be obtained from the global allocator.
    #[error("failed to allocate arena buffer of {capacity} bytes")]
    BackingAllocation { capacity: usize },
}
