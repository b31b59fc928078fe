//! Read-only access to allocator state.

use crate::block::BlockList;
use crate::header::HEADER_SIZE;

/// Read-only view of an arena's header chain.
///
/// This trait decouples diagnostics and test tooling from the allocator
/// engine. Reporting code reads through `&dyn HeapView` and never sees
/// the arena's buffer or its mutating operations.
pub trait HeapView {
    /// Total arena size in bytes, headers included.
    fn capacity(&self) -> usize;

    /// Whether the first header has been placed.
    fn is_initialized(&self) -> bool;

    /// Every block in chain order. Empty before initialization.
    fn block_list(&self) -> BlockList;

    /// Per-block metadata overhead in bytes.
    fn header_size(&self) -> usize {
        HEADER_SIZE
    }

    /// Largest request this arena can ever satisfy.
    fn max_request(&self) -> usize {
        self.capacity() - self.header_size()
    }
}
