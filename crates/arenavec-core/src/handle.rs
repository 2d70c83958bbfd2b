//! Typed, shareable views onto one [`Arena`].
//!
//! An [`ArenaAllocator<T>`] is a reference-counted pointer to an arena plus
//! the layout of `T`. Cloning or rebinding a handle shares the arena; the
//! arena's buffer is released when the last handle goes away.
//!
//! Deallocation through a handle is permanently a no-op. Storage given out
//! by an arena is only reclaimed by dropping the arena, which lets several
//! containers of different element types draw from one pre-sized region.

use std::alloc::Layout;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;
use std::rc::Rc;

use crate::allocator::ElementAllocator;
use crate::arena::Arena;
use crate::constants::DEFAULT_CAPACITY_ELEMS;
use crate::error::AllocError;

/// Region allocator handle for values of type `T`.
///
/// Two handles are equal iff they share the same arena, whatever their
/// element types.
pub struct ArenaAllocator<T> {
    arena: Rc<Arena>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ArenaAllocator<T> {
    /// Create a handle over a fresh arena sized for `capacity` values of `T`.
    pub fn new(capacity: usize) -> Result<Self, AllocError> {
        let bytes = capacity
            .checked_mul(std::mem::size_of::<T>())
            .ok_or(AllocError::AllocationFailure { bytes: usize::MAX })?;
        Ok(Self::from_arena(Rc::new(Arena::new(bytes)?)))
    }

    /// Create a handle over a fresh arena sized for [`DEFAULT_CAPACITY_ELEMS`] values.
    pub fn with_default_capacity() -> Result<Self, AllocError> {
        Self::new(DEFAULT_CAPACITY_ELEMS)
    }

    /// Create a handle over an existing shared arena.
    #[must_use]
    pub fn from_arena(arena: Rc<Arena>) -> Self {
        Self {
            arena,
            _marker: PhantomData,
        }
    }

    /// A handle for `U` sharing this handle's arena.
    #[must_use]
    pub fn rebind<U>(&self) -> ArenaAllocator<U> {
        ArenaAllocator::from_arena(Rc::clone(&self.arena))
    }

    /// Obtain uninitialised storage for `n` values of `T` from the arena.
    pub fn allocate(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        self.arena
            .allocate(n, Layout::new::<T>())
            .map(NonNull::cast)
    }

    /// No-op. Arena storage is only reclaimed when the arena is dropped.
    ///
    /// Accepts any pointer, including ones already passed here, and never
    /// touches the arena's cursor.
    pub fn deallocate(&self, _ptr: NonNull<T>, _n: usize) {}

    /// The shared arena.
    #[must_use]
    pub fn arena(&self) -> &Rc<Arena> {
        &self.arena
    }

    /// Number of live handles (of any element type) sharing the arena.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.arena)
    }
}

// SAFETY: `Arena::allocate` returns ranges aligned for `Layout::new::<T>()`,
// sized for `n` values, inside the buffer and past every earlier range. The
// buffer lives as long as any handle holds the `Rc`, and clones and rebinds
// share that `Rc`.
#[allow(unsafe_code)]
unsafe impl<T> ElementAllocator<T> for ArenaAllocator<T> {
    type Rebind<U> = ArenaAllocator<U>;

    fn allocate(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        ArenaAllocator::allocate(self, n)
    }

    unsafe fn deallocate(&self, ptr: NonNull<T>, n: usize) {
        ArenaAllocator::deallocate(self, ptr, n);
    }

    fn rebind<U>(&self) -> ArenaAllocator<U> {
        ArenaAllocator::rebind(self)
    }
}

impl<T> Clone for ArenaAllocator<T> {
    fn clone(&self) -> Self {
        Self::from_arena(Rc::clone(&self.arena))
    }
}

impl<T, U> From<&ArenaAllocator<U>> for ArenaAllocator<T> {
    fn from(other: &ArenaAllocator<U>) -> Self {
        other.rebind()
    }
}

impl<T, U> PartialEq<ArenaAllocator<U>> for ArenaAllocator<T> {
    fn eq(&self, other: &ArenaAllocator<U>) -> bool {
        Rc::ptr_eq(&self.arena, &other.arena)
    }
}

impl<T> Eq for ArenaAllocator<T> {}

impl<T> fmt::Debug for ArenaAllocator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaAllocator")
            .field("element", &std::any::type_name::<T>())
            .field("capacity", &self.arena.capacity())
            .field("used", &self.arena.used())
            .field("handles", &self.handle_count())
            .finish()
    }
}
