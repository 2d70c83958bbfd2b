#![no_main]

use std::alloc::Layout;

use libfuzzer_sys::fuzz_target;

use arenavec_core::{Arena, ArenaAllocator, GrowVec};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte sizes the arena, the rest drive requests.
    let capacity = usize::from(data[0]) * 8;

    let arena = Arena::new(capacity).unwrap();
    let mut last_end = 0usize;
    for pair in data[1..].chunks_exact(2) {
        let count = usize::from(pair[0] & 0x1f);
        let align = 1usize << (pair[1] % 7);
        let layout = Layout::from_size_align(usize::from(pair[1] >> 3) + 1, align).unwrap();
        if let Ok(ptr) = arena.allocate(count, layout) {
            let start = ptr.as_ptr() as usize;
            assert_eq!(start % align, 0);
            assert!(start >= last_end);
            last_end = start + count * layout.size();
        }
        assert!(arena.used() <= arena.capacity());
    }

    // Pushing until exhaustion must keep every earlier value intact.
    let alloc = ArenaAllocator::<u32>::new(usize::from(data[0])).unwrap();
    let mut values = GrowVec::new_in(alloc);
    let mut pushed = 0u32;
    while values.push(pushed).is_ok() {
        pushed += 1;
    }
    assert!(values.iter().copied().eq(0..pushed));
});
