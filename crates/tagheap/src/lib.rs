//! tagheap: a fixed-capacity arena allocator with in-place block headers.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the tagheap sub-crates. For most users, adding `tagheap` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tagheap::prelude::*;
//!
//! let mut arena = TagArena::with_capacity(4096).unwrap();
//! let a = arena.allocate(100).unwrap();
//! let b = arena.allocate(50).unwrap();
//! arena.payload_mut(a).unwrap().fill(0xAB);
//!
//! arena.release(a).unwrap();
//! assert_eq!(arena.release(a), Err(ReleaseError::DoubleFree { ptr: a }));
//! arena.release(b).unwrap();
//!
//! let stats = HeapStats::collect(&arena);
//! assert_eq!(stats.free_blocks, 1);
//! assert_eq!(stats.free_bytes, 4094);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `tagheap-arena` | `TagArena`, `ArenaConfig`, block iteration |
//! | [`types`] | `tagheap-core` | Offsets, header codec, errors, `HeapView` |
//! | [`report`] | `tagheap-report` | `HeapStats` and the text dump |
//! | [`global`] | (this crate) | Per-thread default arena |
//!
//! # `malloc` / `free`
//!
//! With the `malloc-names` feature, `malloc` and `free` are exported
//! as aliases of [`global::allocate`] and [`global::release`]. They behave
//! identically; the feature only changes the names.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod global;

/// The allocator engine (`tagheap-arena`).
pub use tagheap_arena as arena;

/// Core types, header codec, errors, and the [`types::HeapView`] trait
/// (`tagheap-core`).
pub use tagheap_core as types;

/// Arena statistics and diagnostics (`tagheap-report`).
pub use tagheap_report as report;

#[cfg(feature = "malloc-names")]
pub use global::{allocate as malloc, release as free};

/// Common imports for typical tagheap usage.
///
/// ```rust
/// use tagheap::prelude::*;
/// ```
pub mod prelude {
    pub use tagheap_arena::{ArenaConfig, TagArena};
    pub use tagheap_core::{
        AllocError, BlockInfo, BlockStatus, HeapView, PayloadPtr, ReleaseError,
    };
    pub use tagheap_report::{HeapStats, Report};
}
