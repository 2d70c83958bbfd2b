//! Sizing and growth constants.

/// Element capacity of an [`ArenaAllocator`](crate::ArenaAllocator) created
/// without an explicit size.
pub const DEFAULT_CAPACITY_ELEMS: usize = 100;

/// Alignment of every arena's raw buffer base address.
///
/// Matches the strictest fundamental alignment on common 64-bit targets.
pub const BUFFER_ALIGN: usize = 16;

/// Capacity a [`GrowVec`](crate::GrowVec) grows to from empty.
pub const INITIAL_CAPACITY: usize = 1;

/// Multiplier applied to a full [`GrowVec`](crate::GrowVec)'s capacity.
pub const GROWTH_FACTOR: usize = 2;
