//! Read-only block descriptors.

use smallvec::SmallVec;

use crate::header::{BlockStatus, HEADER_SIZE};
use crate::id::{BlockOffset, PayloadPtr};

/// A snapshot of one block in the header chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockInfo {
    /// Offset of the block's header.
    pub offset: BlockOffset,
    /// Free/used tag.
    pub status: BlockStatus,
    /// Payload size in bytes.
    pub size: usize,
}

impl BlockInfo {
    /// Pointer to the first payload byte.
    pub fn payload(&self) -> PayloadPtr {
        self.offset.payload()
    }

    /// Offset one past the last payload byte, i.e. where the next header
    /// (if any) begins.
    pub fn end(&self) -> usize {
        self.offset.index() + HEADER_SIZE + self.size
    }

    /// Whether the block is free.
    pub fn is_free(&self) -> bool {
        self.status == BlockStatus::Free
    }

    /// Header plus payload bytes.
    pub fn footprint(&self) -> usize {
        HEADER_SIZE + self.size
    }
}

/// Block listing in chain order.
///
/// Most arenas in practice hold a handful of blocks, so the list stays
/// inline until it grows past eight entries.
pub type BlockList = SmallVec<[BlockInfo; 8]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_accounts_for_header() {
        let b = BlockInfo {
            offset: BlockOffset(102),
            status: BlockStatus::Used,
            size: 50,
        };
        assert_eq!(b.payload(), PayloadPtr(104));
        assert_eq!(b.end(), 154);
        assert_eq!(b.footprint(), 52);
        assert!(!b.is_free());
    }
}
