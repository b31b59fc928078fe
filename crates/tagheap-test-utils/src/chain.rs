//! Header-chain invariant checker.

use tagheap_core::{BlockStatus, HeapView};

/// Totals gathered while checking a chain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainSummary {
    pub blocks: usize,
    pub used_blocks: usize,
    pub free_blocks: usize,
    pub used_bytes: usize,
    pub free_bytes: usize,
}

impl ChainSummary {
    /// Header bytes across the whole chain.
    pub fn overhead(&self, header_size: usize) -> usize {
        self.blocks * header_size
    }
}

/// Check every structural invariant of `view`'s header chain.
///
/// - blocks are contiguous, starting at offset 0;
/// - `header_size + size` summed over all blocks equals the capacity;
/// - every block holds at least one byte;
/// - no two adjacent blocks are both free.
///
/// An uninitialized arena yields an empty summary. Returns a
/// human-readable description of the first violation found.
pub fn check_chain(view: &dyn HeapView) -> Result<ChainSummary, String> {
    let blocks = view.block_list();
    let mut summary = ChainSummary::default();
    if !view.is_initialized() {
        if !blocks.is_empty() {
            return Err(format!(
                "uninitialized arena lists {} blocks",
                blocks.len()
            ));
        }
        return Ok(summary);
    }

    let mut expected = 0usize;
    let mut prev_free = false;
    for b in &blocks {
        if b.offset.index() != expected {
            return Err(format!(
                "block at {} should start at {expected:#06x}",
                b.offset
            ));
        }
        if b.size == 0 {
            return Err(format!("zero-sized block at {}", b.offset));
        }
        if prev_free && b.is_free() {
            return Err(format!("free block at {} follows another free block", b.offset));
        }
        match b.status {
            BlockStatus::Used => {
                summary.used_blocks += 1;
                summary.used_bytes += b.size;
            }
            BlockStatus::Free => {
                summary.free_blocks += 1;
                summary.free_bytes += b.size;
            }
        }
        summary.blocks += 1;
        prev_free = b.is_free();
        expected = b.offset.index() + view.header_size() + b.size;
    }

    if expected != view.capacity() {
        return Err(format!(
            "chain spans {expected} bytes, arena capacity is {}",
            view.capacity()
        ));
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagheap_arena::TagArena;

    #[test]
    fn fresh_arena_has_empty_summary() {
        let arena = TagArena::with_capacity(128).unwrap();
        assert_eq!(check_chain(&arena), Ok(ChainSummary::default()));
    }

    #[test]
    fn summary_counts_blocks_and_bytes() {
        let mut arena = TagArena::with_capacity(128).unwrap();
        arena.allocate(10).unwrap();
        arena.allocate(20).unwrap();
        let s = check_chain(&arena).unwrap();
        assert_eq!(s.blocks, 3);
        assert_eq!(s.used_blocks, 2);
        assert_eq!(s.used_bytes, 30);
        assert_eq!(s.free_blocks, 1);
        assert_eq!(s.free_bytes, 128 - 6 - 30);
        assert_eq!(s.overhead(2), 6);
    }
}
