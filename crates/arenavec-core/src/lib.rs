//! # arenavec-core
//!
//! Region allocation for single-threaded workloads.
//!
//! - [`Arena`] owns one fixed-size buffer and hands out aligned ranges front
//!   to back. Nothing is reclaimed until the arena is dropped.
//! - [`ArenaAllocator<T>`] is a cheap, cloneable, typed handle sharing one
//!   arena. Handles for different element types can share the same arena via
//!   [`ArenaAllocator::rebind`]; `deallocate` through a handle is a no-op.
//! - [`GrowVec<T, A>`] is a contiguous growable array over any
//!   [`ElementAllocator`], doubling its capacity when full.
//!
//! # Example
//! ```
//! use arenavec_core::{ArenaAllocator, GrowVec};
//!
//! let alloc = ArenaAllocator::<i32>::new(5).unwrap();
//! let mut values = GrowVec::new_in(alloc.clone());
//! values.push(1).unwrap();
//! values.push(2).unwrap();
//! assert_eq!(values.capacity(), 2);
//! // Blocks of 1 and 2 elements were taken from the arena.
//! assert_eq!(alloc.arena().used(), 12);
//! ```
#![warn(missing_docs)]

pub mod align;
pub mod allocator;
pub mod arena;
pub mod constants;
pub mod error;
pub mod handle;
pub mod stats;
pub mod vector;

// Re-exports
pub use allocator::{ElementAllocator, HeapAllocator};
pub use arena::Arena;
pub use constants::{BUFFER_ALIGN, DEFAULT_CAPACITY_ELEMS, GROWTH_FACTOR, INITIAL_CAPACITY};
pub use error::AllocError;
pub use handle::ArenaAllocator;
pub use stats::ArenaStats;
pub use vector::GrowVec;
