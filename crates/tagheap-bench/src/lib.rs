//! Benchmark profiles for the tagheap allocator.
//!
//! - [`churned_arena`]: an arena driven to a fragmented steady state
//! - [`checkerboard_arena`]: alternating used/free blocks across the arena

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tagheap_arena::{PayloadPtr, TagArena};
use tagheap_test_utils::Workload;

/// Build an arena of `capacity` bytes after `steps` random operations.
///
/// Returns the arena and the workload so benches can keep churning from
/// the same state.
pub fn churned_arena(capacity: usize, seed: u64, steps: usize) -> (TagArena, Workload) {
    let mut arena = TagArena::with_capacity(capacity).unwrap();
    let mut work = Workload::new(seed, capacity / 16);
    work.run(&mut arena, steps);
    (arena, work)
}

/// Fill an arena with `block`-byte allocations and release every other one.
///
/// Produces the longest chain a given block size allows, with free
/// blocks that can never merge. Returns the pointers still live.
pub fn checkerboard_arena(capacity: usize, block: usize) -> (TagArena, Vec<PayloadPtr>) {
    let mut arena = TagArena::with_capacity(capacity).unwrap();
    let mut all = Vec::new();
    while let Ok(p) = arena.allocate(block) {
        all.push(p);
    }
    let mut live = Vec::with_capacity(all.len() / 2 + 1);
    for (i, p) in all.into_iter().enumerate() {
        if i % 2 == 0 {
            arena.release(p).unwrap();
        } else {
            live.push(p);
        }
    }
    (arena, live)
}
