//! Contiguous growable array over a pluggable [`ElementAllocator`].
//!
//! Capacity grows `0 -> 1 -> 2 -> 4 -> ...` when a push finds the storage
//! full. Every growth obtains a new block, moves the live elements into it
//! and hands the old block back to the allocator. With an
//! [`ArenaAllocator`](crate::ArenaAllocator) that hand-back is a no-op, so
//! abandoned blocks stay consumed for the arena's lifetime.
//!
//! Indexing is checked: `v[i]` panics when `i >= v.len()`, and
//! [`get`](slice::get) returns `None`.

#![allow(unsafe_code)]

use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr::{self, NonNull};
use std::slice;

use tracing::trace;

use crate::allocator::{ElementAllocator, HeapAllocator};
use crate::constants::{GROWTH_FACTOR, INITIAL_CAPACITY};
use crate::error::AllocError;

/// Growable array whose storage comes from `A`.
///
/// Slots `[0, len)` hold live values; `[len, capacity)` are uninitialised.
pub struct GrowVec<T, A: ElementAllocator<T> = HeapAllocator<T>> {
    alloc: A,
    ptr: NonNull<T>,
    len: usize,
    cap: usize,
    reallocations: usize,
    _owns: PhantomData<T>,
}

impl<T> GrowVec<T> {
    /// Create an empty heap-backed array. Allocates nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::new_in(HeapAllocator::new())
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: ElementAllocator<T>> GrowVec<T, A> {
    /// Create an empty array drawing storage from `alloc`. Allocates nothing.
    pub fn new_in(alloc: A) -> Self {
        Self {
            alloc,
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
            reallocations: 0,
            _owns: PhantomData,
        }
    }

    /// Create an empty array with room for exactly `capacity` values.
    pub fn with_capacity_in(capacity: usize, alloc: A) -> Result<Self, AllocError> {
        let mut vec = Self::new_in(alloc);
        vec.reserve(capacity)?;
        Ok(vec)
    }

    /// Number of live values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of values the current storage block can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Whether the array holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of storage blocks obtained from the allocator so far.
    #[must_use]
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// The allocator this array draws from.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Append `value`, doubling the capacity first if the array is full.
    ///
    /// If growing fails the error is returned, `value` is dropped, and the
    /// array is left exactly as it was.
    pub fn push(&mut self, value: T) -> Result<(), AllocError> {
        if self.len == self.cap {
            let new_cap = if self.cap == 0 {
                INITIAL_CAPACITY
            } else {
                self.cap
                    .checked_mul(GROWTH_FACTOR)
                    .ok_or_else(|| AllocError::overflow(0))?
            };
            self.reserve(new_cap)?;
        }
        // SAFETY: `len < cap`, so the slot is inside the block and uninitialised.
        unsafe { self.ptr.as_ptr().add(self.len).write(value) };
        self.len += 1;
        Ok(())
    }

    /// Make the capacity at least `capacity`. Never shrinks.
    ///
    /// When growing, exactly `capacity` slots are allocated, the live values
    /// are moved over in order, and the old block is returned to the
    /// allocator. On failure the array is unchanged.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), AllocError> {
        if capacity <= self.cap {
            return Ok(());
        }
        let new_ptr = self.alloc.allocate(capacity)?;
        // SAFETY: the old block holds `len` initialised values and the new one
        // has room for `capacity > len`; distinct allocations never overlap.
        // After the copy the old slots are treated as uninitialised.
        unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len) };

        let old_ptr = mem::replace(&mut self.ptr, new_ptr);
        let old_cap = mem::replace(&mut self.cap, capacity);
        if old_cap != 0 {
            // SAFETY: `old_ptr` was returned by `allocate(old_cap)` on `self.alloc`.
            unsafe { self.alloc.deallocate(old_ptr, old_cap) };
        }
        self.reallocations += 1;
        trace!(old_cap, new_cap = capacity, len = self.len, "GrowVec storage grown");
        Ok(())
    }

    /// Drop every live value in index order. The capacity is kept.
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        // SAFETY: the first `len` slots were initialised and, with `len` already
        // reset, are no longer reachable through `self`.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), len)) };
    }

    /// Append every value yielded by `iter`, stopping at the first failure.
    ///
    /// Values pushed before the failure stay in the array.
    pub fn extend_from_iter<I>(&mut self, iter: I) -> Result<(), AllocError>
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push(value)?;
        }
        Ok(())
    }

    /// The live values as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` is non-null and aligned (dangling only when `len == 0`),
        // and the first `len` slots are initialised.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The live values as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T, A: ElementAllocator<T>> Drop for GrowVec<T, A> {
    fn drop(&mut self) {
        self.clear();
        if self.cap != 0 {
            // SAFETY: `ptr` was returned by `allocate(cap)` on `self.alloc`.
            unsafe { self.alloc.deallocate(self.ptr, self.cap) };
        }
    }
}

// SAFETY: `GrowVec` owns its values like `Vec`; it is as thread-safe as its
// values and allocator are.
unsafe impl<T: Send, A: ElementAllocator<T> + Send> Send for GrowVec<T, A> {}
// SAFETY: shared access only hands out `&T` and `&A`.
unsafe impl<T: Sync, A: ElementAllocator<T> + Sync> Sync for GrowVec<T, A> {}

impl<T, A: ElementAllocator<T>> Deref for GrowVec<T, A> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: ElementAllocator<T>> DerefMut for GrowVec<T, A> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: ElementAllocator<T>> Index<usize> for GrowVec<T, A> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.as_slice().get(index) {
            Some(value) => value,
            None => panic!("index {index} out of bounds for GrowVec of length {}", self.len),
        }
    }
}

impl<T, A: ElementAllocator<T>> IndexMut<usize> for GrowVec<T, A> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.as_mut_slice().get_mut(index) {
            Some(value) => value,
            None => panic!("index {index} out of bounds for GrowVec of length {len}"),
        }
    }
}

impl<'a, T, A: ElementAllocator<T>> IntoIterator for &'a GrowVec<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, A: ElementAllocator<T>> IntoIterator for &'a mut GrowVec<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: fmt::Debug, A: ElementAllocator<T>> fmt::Debug for GrowVec<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, A, B> PartialEq<GrowVec<T, B>> for GrowVec<T, A>
where
    T: PartialEq,
    A: ElementAllocator<T>,
    B: ElementAllocator<T>,
{
    fn eq(&self, other: &GrowVec<T, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, A: ElementAllocator<T>> PartialEq<[T]> for GrowVec<T, A> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, A: ElementAllocator<T>, const N: usize> PartialEq<[T; N]> for GrowVec<T, A> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
