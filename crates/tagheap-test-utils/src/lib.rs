//! Test utilities for tagheap development.
//!
//! Provides an independent header-chain checker ([`check_chain`]) that
//! works from the read-only [`HeapView`] listing rather than the arena's
//! own validation, and a seeded random [`Workload`] driver for churn tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod chain;
pub mod workload;

pub use chain::{check_chain, ChainSummary};
pub use workload::{Step, Workload, WorkloadStats};

use tagheap_core::HeapView;

/// `(status, size)` pairs in chain order, for compact layout assertions.
pub fn layout(view: &dyn HeapView) -> Vec<(tagheap_core::BlockStatus, usize)> {
    view.block_list().iter().map(|b| (b.status, b.size)).collect()
}
