//! Allocation error type shared by the arena, its handles, and containers.

/// Error returned by every fallible allocation path.
///
/// Both variants propagate unchanged from [`Arena`](crate::Arena) through
/// [`ArenaAllocator`](crate::ArenaAllocator) and [`GrowVec`](crate::GrowVec)
/// to the caller. Nothing in this crate retries or suppresses them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    /// The system allocator could not provide the arena's backing buffer.
    #[error("allocation failure: could not obtain a {bytes}-byte buffer")]
    AllocationFailure {
        /// Size of the buffer that was requested.
        bytes: usize,
    },

    /// The request does not fit in the remaining capacity after padding.
    ///
    /// `requested` is `usize::MAX` when computing the byte count overflowed.
    #[error("out of memory: requested {requested} bytes, {available} bytes available")]
    OutOfMemory {
        /// Number of bytes requested (excluding alignment padding).
        requested: usize,
        /// Bytes left in the arena when the request was made.
        available: usize,
    },
}

impl AllocError {
    /// Build an `OutOfMemory` error for a byte count that overflowed `usize`.
    #[must_use]
    pub fn overflow(available: usize) -> Self {
        Self::OutOfMemory {
            requested: usize::MAX,
            available,
        }
    }

    /// Whether this is an `OutOfMemory` error.
    #[must_use]
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. })
    }
}
