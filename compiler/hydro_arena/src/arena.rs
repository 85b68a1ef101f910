//! Bump-pointer arena over a single fixed-size buffer.
//!
//! # Layout
//!
//! ```text
//! [ used bytes (values + padding) | free bytes ............ ]
//!  ^                               ^                         ^
//!  0                             offset                  capacity
//! ```
//!
//! `offset` only moves forward. Each request pads `offset` up to the
//! alignment of the requested type, reserves `size_of::<T>()` bytes, and moves
//! `offset` to the end of the reservation. The buffer base is aligned to
//! [`Arena::BASE_ALIGN`], so padding is deterministic for alignments up to
//! that value.

use std::alloc::{self, Layout};
use std::cell::Cell;
use std::fmt;
use std::mem::{self, MaybeUninit};
use std::ptr::NonNull;

use tracing::{debug, trace};

use crate::ArenaError;

/// Fixed-capacity bump allocator.
///
/// Values are carved out of one contiguous buffer and live until the arena is
/// dropped. References returned by [`alloc`](Self::alloc) and
/// [`emplace`](Self::emplace) borrow the arena, so it can be neither moved nor
/// dropped while any of them is alive.
///
/// # Ownership
///
/// The arena is move-only: it does not implement `Clone`. A plain Rust move
/// transfers it; [`take`](Self::take) transfers the buffer out of a `&mut`
/// place and leaves an empty arena behind, which drops as a no-op.
///
/// # Leaks
///
/// Dropping the arena releases the buffer without running destructors of the
/// values stored in it. A `String` or `Vec` placed in the arena leaks its heap
/// allocation.
///
/// # Thread Safety
///
/// `Send` but not `Sync`: the cursor is a [`Cell`]. Use one arena per thread,
/// or serialize access externally.
pub struct Arena {
    /// Start of the backing buffer. Dangling when `layout.size() == 0`.
    buf: NonNull<u8>,
    /// Layout the buffer was allocated with; its size is the capacity.
    layout: Layout,
    /// Byte offset of the next free (unaligned) position.
    offset: Cell<usize>,
}

/// Marker used only for its alignment, so an empty arena's dangling base
/// pads like a real buffer.
#[allow(dead_code, reason = "only the alignment is used")]
#[repr(align(16))]
struct BaseAligned;

/// Arena owns its buffer outright: no other handle to it survives a move
/// (all references borrow the arena), and the arena never reads or drops the
/// values stored in it.
#[allow(unsafe_code, reason = "Send for a uniquely owned raw buffer")]
unsafe impl Send for Arena {}

impl Arena {
    /// Alignment of the buffer base.
    pub const BASE_ALIGN: usize = 16;

    /// Conventional budget for one compilation unit's nodes (4 MiB).
    pub const DEFAULT_CAPACITY: usize = 4 * 1024 * 1024;

    /// Create an arena backed by a buffer of exactly `capacity` bytes.
    ///
    /// A zero capacity performs no allocation.
    #[allow(unsafe_code, reason = "raw allocation of the backing buffer")]
    pub fn new(capacity: usize) -> Result<Self, ArenaError> {
        if capacity == 0 {
            return Ok(Self::empty());
        }

        let layout = Layout::from_size_align(capacity, Self::BASE_ALIGN)
            .map_err(|_| ArenaError::BackingAllocation { capacity })?;

        // SAFETY: `layout` has a non-zero size (checked above).
        let raw = unsafe { alloc::alloc(layout) };
        let buf = NonNull::new(raw).ok_or(ArenaError::BackingAllocation { capacity })?;

        debug!(capacity, "arena created");
        Ok(Self {
            buf,
            layout,
            offset: Cell::new(0),
        })
    }

    /// Create an arena with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) bytes.
    pub fn with_default_capacity() -> Result<Self, ArenaError> {
        Self::new(Self::DEFAULT_CAPACITY)
    }

    /// An arena with no buffer. Every allocation fails except zero-sized
    /// ones.
    pub const fn empty() -> Self {
        Self {
            buf: NonNull::<BaseAligned>::dangling().cast(),
            layout: Layout::new::<()>(),
            offset: Cell::new(0),
        }
    }

    /// Move the buffer, capacity and cursor into a new arena, leaving `self`
    /// empty.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Total size of the backing buffer in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.layout.size()
    }

    /// Bytes consumed so far, alignment padding included.
    #[inline]
    pub fn used(&self) -> usize {
        self.offset.get()
    }

    /// Bytes left past the cursor, before any alignment padding.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.used()
    }

    /// Reserve uninitialized, correctly aligned storage for one `T`.
    ///
    /// The caller must initialize the slot before reading it. On failure the
    /// cursor does not move.
    #[allow(
        unsafe_code,
        clippy::mut_from_ref,
        reason = "each reservation is a fresh, disjoint region of the buffer"
    )]
    pub fn alloc<T>(&self) -> Result<&mut MaybeUninit<T>, ArenaError> {
        let slot = self.reserve(mem::size_of::<T>(), mem::align_of::<T>())?;

        // SAFETY: `slot` is aligned for `T` and has `size_of::<T>()` bytes of
        // room inside the buffer. The region was carved off just now and the
        // cursor has moved past it, so no other reference aliases it.
        // `MaybeUninit<T>` has no validity requirement on its bytes.
        let slot = unsafe { slot.cast::<MaybeUninit<T>>().as_mut() };
        Ok(slot)
    }

    /// Move `value` into the arena and return a reference to it.
    ///
    /// The arena never drops `value`. If the arena is exhausted, `value` is
    /// dropped here as usual, since it never entered the buffer.
    #[allow(
        clippy::mut_from_ref,
        reason = "each reservation is a fresh, disjoint region of the buffer"
    )]
    pub fn emplace<T>(&self, value: T) -> Result<&mut T, ArenaError> {
        Ok(self.alloc::<T>()?.write(value))
    }

    /// Reserve a slot, then build the value in it by calling `init`.
    ///
    /// `init` is not called when the arena is exhausted.
    #[allow(
        clippy::mut_from_ref,
        reason = "each reservation is a fresh, disjoint region of the buffer"
    )]
    pub fn emplace_with<T, F>(&self, init: F) -> Result<&mut T, ArenaError>
    where
        F: FnOnce() -> T,
    {
        Ok(self.alloc::<T>()?.write(init()))
    }

    /// Find the first `align`-aligned address at or after the cursor with
    /// `size` bytes of room, and move the cursor past it.
    #[allow(unsafe_code, reason = "offset within the owned buffer")]
    fn reserve(&self, size: usize, align: usize) -> Result<NonNull<u8>, ArenaError> {
        debug_assert!(align.is_power_of_two(), "alignment must be a power of two");

        let offset = self.offset.get();
        let capacity = self.capacity();
        let exhausted = ArenaError::Exhausted {
            size,
            align,
            remaining: capacity - offset,
        };

        let unaligned = self.buf.as_ptr() as usize + offset;
        let start = unaligned
            .checked_next_multiple_of(align)
            .and_then(|aligned| offset.checked_add(aligned - unaligned))
            .ok_or(exhausted)?;
        let end = start
            .checked_add(size)
            .filter(|&end| end <= capacity)
            .ok_or_else(|| {
                debug!(size, align, offset, capacity, "arena exhausted");
                exhausted
            })?;

        self.offset.set(end);
        trace!(size, align, offset = start, "arena alloc");

        // SAFETY: `start <= end <= capacity`, so the pointer stays inside the
        // buffer or one past its end (only when `size == 0`).
        let slot = unsafe { self.buf.add(start) };
        Ok(slot)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::empty()
    }
}

impl Drop for Arena {
    #[allow(unsafe_code, reason = "release of the backing buffer")]
    fn drop(&mut self) {
        // Stored values are not dropped; only the buffer is released.
        if self.layout.size() == 0 {
            return;
        }
        // SAFETY: `buf` was returned by `alloc::alloc(self.layout)` in `new`
        // and is released exactly once: `take` swaps in an empty arena, whose
        // zero-sized layout skips this branch.
        unsafe {
            alloc::dealloc(self.buf.as_ptr(), self.layout);
        }
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.capacity())
            .field("used", &self.used())
            .finish_non_exhaustive()
    }
}
