//! Hydro Arena - fixed-capacity bump allocation
//!
//! The parser stores its nodes in one contiguous buffer handed out by
//! [`Arena`]. Allocation bumps a byte cursor forward; nothing is freed until
//! the whole arena goes away.
//!
//! # Design Philosophy
//!
//! - **One buffer, one owner**: capacity is fixed at construction, the arena
//!   is move-only (no `Clone`), and [`Arena::take`] transfers the buffer
//!   explicitly.
//! - **Fail at the call that overflows**: every allocation returns
//!   `Result<_, ArenaError>`; a failed request leaves the cursor untouched.
//! - **No destructors**: values placed in the arena are never dropped. Types
//!   that own heap memory or handles leak it when the arena is torn down, so
//!   store plain data only.
//!
//! ```
//! use hydro_arena::Arena;
//!
//! # fn main() -> Result<(), hydro_arena::ArenaError> {
//! let arena = Arena::new(256)?;
//! let answer = arena.emplace(42_u64)?;
//! assert_eq!(*answer, 42);
//! assert_eq!(arena.used(), 8);
//! # Ok(())
//! # }
//! ```

mod arena;
mod error;

pub use arena::Arena;
pub use error::ArenaError;
