//! Fixed-capacity arena allocation with an intrusive header chain.
//!
//! A [`TagArena`] owns one byte buffer and manages it as a chain of blocks,
//! each starting with a two-byte header that records the payload size and
//! whether the block is in use. There is no separate bookkeeping: walking
//! the chain from offset 0 visits every block.
//!
//! # Architecture
//!
//! ```text
//! TagArena
//! ├── ArenaConfig (capacity, merge-on-alloc)
//! ├── Box<[u8]> buffer (allocated once, never resized)
//! └── chain (offset-based header navigation, split, merge)
//! ```
//!
//! # Operations
//!
//! - **allocate:** first-fit scan, split off any usable remainder.
//! - **release:** validate the pointer, mark free, coalesce the chain.
//! - **coalesce_pass:** merge every run of adjacent free blocks.
//! - **validate:** check that the chain tiles the buffer with no
//!   unmerged free neighbours.
//!
//! Pointers are [`PayloadPtr`] offsets, never raw addresses, so a bad
//! pointer is rejected rather than dereferenced.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
mod chain;
pub mod config;

pub use arena::TagArena;
pub use chain::Blocks;
pub use config::ArenaConfig;
pub use tagheap_core::{AllocError, BlockInfo, BlockStatus, PayloadPtr, ReleaseError};
