//! Core types and traits for the tagheap allocator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the allocator engine and its collaborators:
//! payload and block offsets, the in-arena header codec, block metadata,
//! error types, and the read-only [`HeapView`] trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod error;
pub mod header;
pub mod id;
pub mod traits;

pub use block::{BlockInfo, BlockList};
pub use error::{AllocError, ChainError, ConfigError, ReleaseError};
pub use header::{BlockStatus, Header, HEADER_SIZE, MAX_BLOCK_SIZE};
pub use id::{BlockOffset, PayloadPtr};
pub use traits::HeapView;
