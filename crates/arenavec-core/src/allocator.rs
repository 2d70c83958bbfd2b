//! Typed allocation capability consumed by containers.
//!
//! [`ElementAllocator`] is the seam between a container and where its storage
//! comes from. [`HeapAllocator`] draws from the system heap and really frees;
//! [`ArenaAllocator`](crate::ArenaAllocator) draws from a shared region and
//! never frees.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::AllocError;

/// Allocates uninitialised storage for values of type `T`.
///
/// # Safety
///
/// Containers write to and read from returned storage without further
/// checks. An `Ok(ptr)` from `allocate(n)` must point to memory that is
/// aligned for `T`, valid for reads and writes of `n` values of `T`, and
/// disjoint from every other block this allocator (or any allocator equal
/// to it) has handed out and not yet deallocated. The storage must stay
/// valid until it is passed to `deallocate` or the allocator's backing store
/// is dropped, whichever comes first. Clones and rebinds must share that store.
pub unsafe trait ElementAllocator<T>: Clone {
    /// The same capability producing storage for `U` instead of `T`.
    type Rebind<U>: ElementAllocator<U>;

    /// Obtain uninitialised, correctly aligned storage for `n` values.
    ///
    /// Requests of zero bytes never fail.
    fn allocate(&self, n: usize) -> Result<NonNull<T>, AllocError>;

    /// Give back storage previously returned by [`allocate`](Self::allocate).
    ///
    /// # Safety
    ///
    /// `ptr` must come from `allocate(n)` on this allocator (or one equal to
    /// it), with the same `n`, and must not have been deallocated already.
    unsafe fn deallocate(&self, ptr: NonNull<T>, n: usize);

    /// A capability for `U` backed by the same store as `self`.
    fn rebind<U>(&self) -> Self::Rebind<U>;
}

/// System-heap allocator. Stateless; every instance is interchangeable.
pub struct HeapAllocator<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> HeapAllocator<T> {
    /// Create a heap allocator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

// SAFETY: every non-empty block is a fresh `alloc::alloc` of
// `Layout::array::<T>(n)`, so it is aligned, sized for `n` values and owned
// until `deallocate`. Empty requests get a dangling, aligned pointer.
unsafe impl<T> ElementAllocator<T> for HeapAllocator<T> {
    type Rebind<U> = HeapAllocator<U>;

    fn allocate(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        let layout = Layout::array::<T>(n).map_err(|_| AllocError::overflow(0))?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }
        // SAFETY: `layout` has a non-zero size.
        let ptr = unsafe { alloc::alloc(layout) };
        NonNull::new(ptr.cast::<T>()).ok_or(AllocError::OutOfMemory {
            requested: layout.size(),
            available: 0,
        })
    }

    unsafe fn deallocate(&self, ptr: NonNull<T>, n: usize) {
        let Ok(layout) = Layout::array::<T>(n) else {
            return;
        };
        if layout.size() == 0 {
            return;
        }
        // SAFETY: the caller guarantees `ptr` came from `allocate(n)`, which
        // used this same layout.
        unsafe { alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout) };
    }

    fn rebind<U>(&self) -> HeapAllocator<U> {
        HeapAllocator::new()
    }
}

impl<T> Clone for HeapAllocator<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Default for HeapAllocator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for HeapAllocator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HeapAllocator")
    }
}

impl<T, U> PartialEq<HeapAllocator<U>> for HeapAllocator<T> {
    fn eq(&self, _other: &HeapAllocator<U>) -> bool {
        true
    }
}

impl<T> Eq for HeapAllocator<T> {}
