//! Fixed-capacity region arena with forward-only bump allocation.
//!
//! An [`Arena`] owns one raw byte buffer allocated once at construction.
//! Every request advances a single `used` cursor; space is never handed back
//! until the arena itself is dropped.
//!
//! ```text
//! base                                                     base + capacity
//! +------+--+-----------+----+----------+---------------------------+
//! | a[0] |//|   b[0..2] |////|   c[0]   |        (free)             |
//! +------+--+-----------+----+----------+---------------------------+
//!           ^ padding        ^ padding  ^ used
//! ```

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::cell::Cell;
use std::ptr::NonNull;

use tracing::{debug, trace};

use crate::align::next_aligned;
use crate::constants::BUFFER_ALIGN;
use crate::error::AllocError;
use crate::stats::{ArenaCounters, ArenaStats};

/// A region of `capacity` bytes handed out front to back.
///
/// Not thread-safe: the cursor lives in a `Cell`, so `Arena` is neither
/// `Send` nor `Sync`. Give each thread its own arena.
#[derive(Debug)]
pub struct Arena {
    base: NonNull<u8>,
    capacity: usize,
    used: Cell<usize>,
    counters: ArenaCounters,
}

impl Arena {
    /// Create an arena owning exactly `capacity` bytes.
    ///
    /// A zero capacity allocates nothing; every non-empty request then fails.
    pub fn new(capacity: usize) -> Result<Self, AllocError> {
        let base = if capacity == 0 {
            dangling()
        } else {
            let layout = Self::buffer_layout(capacity)?;
            // SAFETY: `layout` has a non-zero size.
            let ptr = unsafe { alloc::alloc(layout) };
            NonNull::new(ptr).ok_or(AllocError::AllocationFailure { bytes: capacity })?
        };

        debug!(capacity, "Arena created");
        Ok(Self {
            base,
            capacity,
            used: Cell::new(0),
            counters: ArenaCounters::new(),
        })
    }

    fn buffer_layout(capacity: usize) -> Result<Layout, AllocError> {
        Layout::from_size_align(capacity, BUFFER_ALIGN)
            .map_err(|_| AllocError::AllocationFailure { bytes: capacity })
    }

    /// Reserve room for `count` values of layout `elem`.
    ///
    /// The returned address is a multiple of `elem.align()` and the
    /// `count * elem.size()` bytes behind it lie inside the buffer and overlap
    /// no earlier allocation. On success `used` moves to the end of the new
    /// range; on failure nothing changes.
    pub fn allocate(&self, count: usize, elem: Layout) -> Result<NonNull<u8>, AllocError> {
        let used = self.used.get();
        let available = self.capacity - used;

        let Some(bytes) = count.checked_mul(elem.size()) else {
            self.counters.record_failure();
            debug!(count, size = elem.size(), "Arena request size overflowed");
            return Err(AllocError::overflow(available));
        };

        // Pad on the absolute address so alignments above BUFFER_ALIGN hold too.
        let base_addr = self.base.as_ptr() as usize;
        let start = next_aligned(base_addr + used, elem.align()).map(|addr| addr - base_addr);
        let end = start.and_then(|start| start.checked_add(bytes));

        match (start, end) {
            (Some(start), Some(end)) if end <= self.capacity => {
                self.used.set(end);
                self.counters.record_allocation(start - used);
                trace!(
                    offset = start,
                    bytes,
                    align = elem.align(),
                    padding = start - used,
                    "Arena allocation"
                );
                // SAFETY: `start <= end <= capacity`, so the result stays within
                // (or one past the end of) the buffer owned by `self`.
                let ptr = unsafe { self.base.as_ptr().add(start) };
                // SAFETY: derived from the non-null `base` by an in-bounds offset.
                Ok(unsafe { NonNull::new_unchecked(ptr) })
            }
            _ => {
                self.counters.record_failure();
                debug!(
                    requested = bytes,
                    available,
                    align = elem.align(),
                    "Arena out of memory"
                );
                Err(AllocError::OutOfMemory {
                    requested: bytes,
                    available,
                })
            }
        }
    }

    /// Reserve room for a single block described by `layout`.
    pub fn alloc_layout(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        self.allocate(1, layout)
    }

    /// Total size of the buffer in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes committed so far, alignment padding included.
    #[must_use]
    pub fn used(&self) -> usize {
        self.used.get()
    }

    /// Bytes not yet committed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity - self.used.get()
    }

    /// Whether `ptr` points into the committed part of this arena.
    #[must_use]
    pub fn contains<T>(&self, ptr: *const T) -> bool {
        let base = self.base.as_ptr() as usize;
        let addr = ptr as usize;
        addr >= base && addr < base + self.used.get()
    }

    /// Snapshot of the usage counters.
    #[must_use]
    pub fn stats(&self) -> ArenaStats {
        self.counters.snapshot(self.capacity, self.used.get())
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        if self.capacity == 0 {
            return;
        }
        debug!(
            capacity = self.capacity,
            used = self.used.get(),
            "Arena released"
        );
        if let Ok(layout) = Self::buffer_layout(self.capacity) {
            // SAFETY: `base` was returned by `alloc::alloc` with this exact layout
            // in `new`, and is released only here.
            unsafe { alloc::dealloc(self.base.as_ptr(), layout) };
        }
    }
}

/// Non-null, `BUFFER_ALIGN`-aligned pointer that owns no memory.
fn dangling() -> NonNull<u8> {
    // SAFETY: `BUFFER_ALIGN` is a non-zero constant.
    unsafe { NonNull::new_unchecked(BUFFER_ALIGN as *mut u8) }
}
