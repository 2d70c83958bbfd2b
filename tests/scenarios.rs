//! Cross-crate scenarios for the arena, its handles, and `GrowVec`.

use std::alloc::Layout;
use std::rc::Rc;

use arenavec_core::{AllocError, Arena, ArenaAllocator, ElementAllocator, GrowVec};
use arenavec_ip::Ipv4Address;

// ---------------------------------------------------------------------------
// Arena and handles
// ---------------------------------------------------------------------------

#[test]
fn arena_sized_for_five_integers() {
    let alloc = ArenaAllocator::<i32>::new(5).unwrap();
    assert!(alloc.allocate(3).is_ok());
    assert!(alloc.allocate(2).is_ok());
    let err = alloc.allocate(1).unwrap_err();
    assert!(matches!(err, AllocError::OutOfMemory { .. }));
}

#[test]
fn byte_and_aligned_handles_share_one_arena() {
    let bytes = ArenaAllocator::<u8>::new(128).unwrap();
    let words: ArenaAllocator<u64> = bytes.rebind();
    assert!(bytes == words);

    let byte = bytes.allocate(1).unwrap().as_ptr() as usize;
    let word = words.allocate(1).unwrap().as_ptr() as usize;
    assert_eq!(word % 8, 0);
    assert!(word > byte, "aligned element overlaps the byte");
    assert_eq!(bytes.arena().used(), word - byte + 8);
}

#[test]
fn handles_compare_by_arena_identity() {
    let a = ArenaAllocator::<i32>::new(8).unwrap();
    let copy = a.clone();
    let rebound: ArenaAllocator<String> = a.rebind();
    let other = ArenaAllocator::<i32>::new(8).unwrap();

    assert!(a == copy);
    assert!(a == rebound);
    assert!(copy == rebound);
    assert!(a != other);
    assert!(rebound != other);
}

#[test]
fn explicit_arena_shared_by_handles() {
    let arena = Rc::new(Arena::new(64).unwrap());
    let first = ArenaAllocator::<u16>::from_arena(Rc::clone(&arena));
    let second = ArenaAllocator::<u32>::from_arena(Rc::clone(&arena));
    assert!(first == second);

    first.allocate(3).unwrap();
    second.allocate(1).unwrap();
    // 6 bytes, 2 bytes of padding, then 4 bytes.
    assert_eq!(arena.used(), 12);
    assert_eq!(arena.stats().padding, 2);
}

#[test]
fn trait_deallocate_is_a_no_op_for_arenas() {
    let alloc = ArenaAllocator::<u64>::new(2).unwrap();
    let ptr = ElementAllocator::allocate(&alloc, 2).unwrap();
    #[allow(unsafe_code)]
    // SAFETY: `ptr` came from `allocate(2)` on `alloc`.
    unsafe {
        alloc.deallocate(ptr, 2);
        ElementAllocator::deallocate(&alloc, ptr, 2);
    }
    assert_eq!(alloc.arena().used(), 16);
    assert!(alloc.allocate(1).is_err());
}

// ---------------------------------------------------------------------------
// GrowVec
// ---------------------------------------------------------------------------

#[test]
fn ten_pushes_on_default_array() {
    let mut values = GrowVec::new();
    for i in 0..10 {
        values.push(i * i).unwrap();
    }
    assert_eq!(values.len(), 10);
    assert_eq!(values.capacity(), 16);
    for (i, value) in values.iter().enumerate() {
        assert_eq!(*value, i * i);
    }
}

#[test]
fn reserve_then_exact_pushes() {
    let alloc = ArenaAllocator::<u32>::new(25).unwrap();
    let mut values = GrowVec::new_in(alloc);
    values.reserve(25).unwrap();
    let reserved = values.capacity();
    for i in 0..25 {
        values.push(i).unwrap();
    }
    assert_eq!(values.len(), 25);
    assert!(values.capacity() >= 25);
    assert_eq!(values.capacity(), reserved);
    assert_eq!(values.reallocations(), 1);
}

#[test]
fn capacity_sequence_under_arena() {
    let alloc = ArenaAllocator::<u8>::new(1024).unwrap();
    let mut values = GrowVec::new_in(alloc);
    let mut capacities = vec![values.capacity()];
    for i in 0..=64u8 {
        values.push(i).unwrap();
        if capacities.last() != Some(&values.capacity()) {
            capacities.push(values.capacity());
        }
    }
    assert_eq!(capacities, [0, 1, 2, 4, 8, 16, 32, 64, 128]);
}

#[test]
fn failed_push_keeps_existing_values() {
    let alloc = ArenaAllocator::<Ipv4Address>::new(7).unwrap();
    let mut addrs = GrowVec::new_in(alloc);
    for last in 0..4u8 {
        addrs.push(Ipv4Address::new(10, 0, 0, last)).unwrap();
    }
    // Growing 4 -> 8 needs 8 more slots; 0 remain after blocks of 1, 2 and 4.
    assert!(addrs.push(Ipv4Address::new(10, 0, 0, 4)).is_err());
    assert_eq!(addrs.len(), 4);
    assert_eq!(addrs[3].to_string(), "10.0.0.3");
}

#[test]
fn containers_of_different_types_share_an_arena() {
    let words = ArenaAllocator::<u64>::new(16).unwrap();
    let mut numbers = GrowVec::new_in(words.clone());
    let mut flags = GrowVec::new_in(words.rebind::<bool>());

    numbers.push(1).unwrap();
    flags.push(true).unwrap();
    numbers.push(2).unwrap();

    assert_eq!(numbers, [1, 2]);
    assert_eq!(flags, [true]);
    // 8 (u64) + 1 (bool) + 7 padding + 16 (two u64).
    assert_eq!(words.arena().used(), 32);
    assert!(numbers.allocator() == flags.allocator());
}

#[test]
fn clear_keeps_capacity_and_allows_reuse() {
    let alloc = ArenaAllocator::<String>::new(8).unwrap();
    let mut names = GrowVec::new_in(alloc);
    names.push("alpha".to_string()).unwrap();
    names.push("beta".to_string()).unwrap();
    names.clear();
    assert!(names.is_empty());
    assert_eq!(names.capacity(), 2);
    names.push("gamma".to_string()).unwrap();
    assert_eq!(names[0], "gamma");
}

#[test]
fn arena_outlives_dropped_handles() {
    let alloc = ArenaAllocator::<u32>::new(4).unwrap();
    let arena = Rc::clone(alloc.arena());
    {
        let mut values = GrowVec::new_in(alloc);
        values.push(5).unwrap();
    }
    assert_eq!(Rc::strong_count(&arena), 1);
    assert_eq!(arena.used(), 4);
    assert!(arena.allocate(3, Layout::new::<u32>()).is_ok());
}
