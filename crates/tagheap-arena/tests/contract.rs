//! Integration test: the allocate/release contract at its edges.

use tagheap_arena::{AllocError, ArenaConfig, BlockStatus, PayloadPtr, ReleaseError, TagArena};
use tagheap_test_utils::{check_chain, layout};

#[test]
fn boundary_sizes_on_fresh_arena() {
    let mut arena = TagArena::default();
    let max = arena.config().max_request();
    assert_eq!(max, 4094);

    assert!(matches!(arena.allocate(0), Err(AllocError::InvalidSize { .. })));
    assert!(matches!(
        arena.allocate(max + 1),
        Err(AllocError::InvalidSize { .. })
    ));

    let whole = arena.allocate(max).unwrap();
    assert!(matches!(
        arena.allocate(1),
        Err(AllocError::OutOfMemory { .. })
    ));
    arena.release(whole).unwrap();
    assert_eq!(arena.allocate(max).unwrap(), whole);
}

#[test]
fn allocate_release_round_trip() {
    let mut arena = TagArena::default();
    let keep = arena.allocate(64).unwrap();
    let before = layout(&arena);

    let p = arena.allocate(200).unwrap();
    arena.release(p).unwrap();
    assert_eq!(layout(&arena), before);

    arena.release(keep).unwrap();
    assert_eq!(layout(&arena), vec![(BlockStatus::Free, 4094)]);
}

#[test]
fn double_free_is_reported_and_harmless() {
    let mut arena = TagArena::default();
    let a = arena.allocate(10).unwrap();
    let _b = arena.allocate(10).unwrap();
    arena.release(a).unwrap();

    let before = layout(&arena);
    assert_eq!(arena.release(a), Err(ReleaseError::DoubleFree { ptr: a }));
    assert_eq!(layout(&arena), before);
    check_chain(&arena).unwrap();
}

#[test]
fn pointers_from_another_arena_are_rejected() {
    let mut first = TagArena::with_capacity(256).unwrap();
    let mut second = TagArena::with_capacity(256).unwrap();
    first.allocate(10).unwrap();
    let foreign = first.allocate(10).unwrap();

    second.allocate(100).unwrap();
    assert_eq!(
        second.release(foreign),
        Err(ReleaseError::InvalidPointer { ptr: foreign })
    );
    check_chain(&second).unwrap();
}

#[test]
fn every_non_block_offset_is_rejected() {
    let mut arena = TagArena::with_capacity(128).unwrap();
    let live = [
        arena.allocate(7).unwrap(),
        arena.allocate(13).unwrap(),
        arena.allocate(21).unwrap(),
    ];
    let before = layout(&arena);
    for raw in 0..200u32 {
        let ptr = PayloadPtr(raw);
        if live.contains(&ptr) {
            continue;
        }
        assert!(arena.release(ptr).is_err(), "{ptr} accepted");
        assert_eq!(layout(&arena), before);
    }
}

#[test]
fn invalid_config_is_rejected() {
    assert!(TagArena::with_capacity(0).is_err());
    assert!(TagArena::new(ArenaConfig::new(ArenaConfig::MAX_CAPACITY + 1)).is_err());
}
