//! In-arena block header codec.
//!
//! Every block starts with a [`HEADER_SIZE`]-byte header stored inside the
//! arena buffer itself. A header is a single little-endian `u16`:
//!
//! ```text
//!  15 14                                   0
//! ┌──┬─────────────────────────────────────┐
//! │U │            payload size             │
//! └──┴─────────────────────────────────────┘
//!  U = 1: block is in use, U = 0: block is free
//! ```
//!
//! The all-zero word (free, size 0) never describes a real block. It marks
//! an arena whose first header has not been placed yet.

use std::fmt;

/// Bytes occupied by one header in the arena.
pub const HEADER_SIZE: usize = 2;

/// Largest payload size a header can encode.
pub const MAX_BLOCK_SIZE: usize = 0x7FFF;

const USED_BIT: u16 = 0x8000;
const SIZE_MASK: u16 = 0x7FFF;

/// Free/used tag carried by every block header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockStatus {
    /// Available for allocation and for merging with free neighbours.
    Free,
    /// Handed out by `allocate` and not yet released.
    Used,
}

impl BlockStatus {
    /// The opposite status.
    pub fn toggled(self) -> Self {
        match self {
            Self::Free => Self::Used,
            Self::Used => Self::Free,
        }
    }
}

impl fmt::Display for BlockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => write!(f, "free"),
            Self::Used => write!(f, "used"),
        }
    }
}

/// Decoded block header: status tag plus payload size in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    /// Whether the block is free or in use.
    pub status: BlockStatus,
    /// Payload bytes following the header.
    pub size: u16,
}

impl Header {
    /// The uninitialized-arena marker.
    pub const SENTINEL: Self = Self {
        status: BlockStatus::Free,
        size: 0,
    };

    /// A free header for `size` payload bytes.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds [`MAX_BLOCK_SIZE`].
    pub fn free(size: usize) -> Self {
        assert!(size <= MAX_BLOCK_SIZE, "block size {size} not encodable");
        Self {
            status: BlockStatus::Free,
            size: size as u16,
        }
    }

    /// Decode a header from its two on-buffer bytes.
    pub fn decode(bytes: [u8; HEADER_SIZE]) -> Self {
        let word = u16::from_le_bytes(bytes);
        let status = if word & USED_BIT != 0 {
            BlockStatus::Used
        } else {
            BlockStatus::Free
        };
        Self {
            status,
            size: word & SIZE_MASK,
        }
    }

    /// Encode this header into its two on-buffer bytes.
    pub fn encode(self) -> [u8; HEADER_SIZE] {
        let mut word = self.size & SIZE_MASK;
        if self.status == BlockStatus::Used {
            word |= USED_BIT;
        }
        word.to_le_bytes()
    }

    /// Payload size as a `usize`.
    pub fn alloc_size(self) -> usize {
        self.size as usize
    }

    /// Whether the block is free.
    pub fn is_free(self) -> bool {
        self.status == BlockStatus::Free
    }

    /// Whether this is the uninitialized-arena marker.
    pub fn is_sentinel(self) -> bool {
        self == Self::SENTINEL
    }

    /// The same header with its status flipped.
    pub fn toggled(self) -> Self {
        Self {
            status: self.status.toggled(),
            size: self.size,
        }
    }
}
