//! Arena diagnostics for the tagheap allocator.
//!
//! Everything here reads allocator state through [`HeapView`] and never
//! mutates it. [`HeapStats`] aggregates the block listing into counts and
//! byte totals; [`Report`] renders the per-block table followed by those
//! statistics.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod render;
pub mod stats;

pub use render::{render, Report};
pub use stats::HeapStats;

use tagheap_core::HeapView;
