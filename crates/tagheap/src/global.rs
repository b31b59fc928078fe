//! Per-thread default arena.
//!
//! Each thread gets its own [`TagArena`] of
//! [`ArenaConfig::DEFAULT_CAPACITY`] bytes, created the first time the
//! thread touches it. As with any `TagArena`, its first header is only
//! placed on the first allocation. Pointers are only meaningful on the
//! thread that allocated them.

use std::cell::RefCell;

use tagheap_arena::{ArenaConfig, TagArena};
use tagheap_core::{AllocError, PayloadPtr, ReleaseError};
use tagheap_report::Report;

thread_local! {
    static ARENA: RefCell<TagArena> = RefCell::new(TagArena::default());
}

/// Run `f` with this thread's arena.
///
/// # Panics
///
/// Panics if `f` re-enters this module (for example by calling
/// [`allocate`] from inside the closure).
pub fn with_arena<R>(f: impl FnOnce(&mut TagArena) -> R) -> R {
    ARENA.with(|cell| f(&mut cell.borrow_mut()))
}

/// Allocate `size` bytes from this thread's arena.
pub fn allocate(size: usize) -> Result<PayloadPtr, AllocError> {
    with_arena(|arena| arena.allocate(size))
}

/// Release a pointer previously returned by [`allocate`] on this thread.
pub fn release(ptr: PayloadPtr) -> Result<(), ReleaseError> {
    with_arena(|arena| arena.release(ptr))
}

/// Render this thread's arena as text.
pub fn report() -> String {
    with_arena(|arena| Report(&*arena).to_string())
}

/// Capacity of every per-thread arena.
pub const DEFAULT_CAPACITY: usize = ArenaConfig::DEFAULT_CAPACITY;
