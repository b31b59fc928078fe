//! Strongly-typed arena offsets.
//!
//! The allocator never hands out raw pointers. A block is named by the
//! [`BlockOffset`] of its header, and a live allocation by the
//! [`PayloadPtr`] of its first payload byte. Both are plain byte offsets
//! from the start of the arena buffer.

use std::fmt;

use crate::header::HEADER_SIZE;

/// Byte offset of a payload's first byte within an arena.
///
/// This is what `allocate` returns and what `release` accepts. The
/// inner value is public so callers can construct arbitrary (possibly
/// invalid) pointers; the arena validates every pointer it is given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PayloadPtr(pub u32);

impl PayloadPtr {
    /// The offset of the header that would precede this payload.
    ///
    /// Returns `None` when the pointer lies inside the first header,
    /// where no block can begin.
    pub fn header_offset(self) -> Option<BlockOffset> {
        self.0.checked_sub(HEADER_SIZE as u32).map(BlockOffset)
    }

    /// The offset as a `usize` index into the arena buffer.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PayloadPtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

impl From<u32> for PayloadPtr {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Byte offset of a block header within an arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockOffset(pub u32);

impl BlockOffset {
    /// The first block of every arena.
    pub const START: Self = Self(0);

    /// The payload pointer for the block whose header sits here.
    pub fn payload(self) -> PayloadPtr {
        PayloadPtr(self.0 + HEADER_SIZE as u32)
    }

    /// The offset as a `usize` index into the arena buffer.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BlockOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

impl From<u32> for BlockOffset {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
