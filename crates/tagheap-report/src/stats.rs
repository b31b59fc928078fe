//! Aggregate arena statistics.

use tagheap_core::{BlockStatus, HeapView};

/// Block counts and byte totals for one arena at one point in time.
///
/// Sizes are payload bytes; header bytes are counted separately in
/// `overhead_bytes`, so `used_bytes + free_bytes + overhead_bytes` equals
/// `capacity` for any initialized arena.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeapStats {
    /// Total arena size in bytes.
    pub capacity: usize,
    /// Number of blocks handed out and not yet released.
    pub used_blocks: usize,
    /// Number of free blocks.
    pub free_blocks: usize,
    /// Payload bytes in used blocks.
    pub used_bytes: usize,
    /// Payload bytes in free blocks.
    pub free_bytes: usize,
    /// Largest used block's payload, 0 if none.
    pub largest_used: usize,
    /// Largest free block's payload, 0 if none.
    pub largest_free: usize,
    /// Metadata bytes per block.
    pub header_size: usize,
    /// Metadata bytes across all blocks.
    pub overhead_bytes: usize,
}

impl HeapStats {
    /// Walk `view` once and tally its blocks.
    pub fn collect(view: &dyn HeapView) -> Self {
        let header_size = view.header_size();
        let mut stats = Self {
            capacity: view.capacity(),
            header_size,
            ..Self::default()
        };
        for block in view.block_list() {
            match block.status {
                BlockStatus::Used => {
                    stats.used_blocks += 1;
                    stats.used_bytes += block.size;
                    stats.largest_used = stats.largest_used.max(block.size);
                }
                BlockStatus::Free => {
                    stats.free_blocks += 1;
                    stats.free_bytes += block.size;
                    stats.largest_free = stats.largest_free.max(block.size);
                }
            }
            stats.overhead_bytes += header_size;
        }
        stats
    }

    /// Total number of blocks.
    pub fn blocks(&self) -> usize {
        self.used_blocks + self.free_blocks
    }

    /// Share of free payload bytes outside the largest free block.
    ///
    /// 0.0 when all free space is one block (or there is none), rising
    /// toward 1.0 as free space splinters.
    pub fn fragmentation(&self) -> f64 {
        if self.free_bytes == 0 {
            return 0.0;
        }
        1.0 - self.largest_free as f64 / self.free_bytes as f64
    }
}
