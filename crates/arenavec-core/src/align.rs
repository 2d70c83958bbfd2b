//! Power-of-two alignment arithmetic.

/// Round `offset` up to the next multiple of `align`.
///
/// `align` must be a power of two. Returns `None` if the rounded value does
/// not fit in `usize`.
#[inline]
#[must_use]
pub const fn next_aligned(offset: usize, align: usize) -> Option<usize> {
    debug_assert!(align.is_power_of_two());
    match offset.checked_add(align - 1) {
        Some(bumped) => Some(bumped & !(align - 1)),
        None => None,
    }
}

/// Whether `addr` is a multiple of `align` (a power of two).
#[inline]
#[must_use]
pub const fn is_aligned(addr: usize, align: usize) -> bool {
    debug_assert!(align.is_power_of_two());
    addr & (align - 1) == 0
}
