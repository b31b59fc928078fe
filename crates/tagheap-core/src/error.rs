//! Error types for the tagheap allocator.
//!
//! None of these are fatal. Every failing operation leaves the arena
//! exactly as it was, so callers may log the error and carry on.

use std::error::Error;
use std::fmt;

use crate::id::{BlockOffset, PayloadPtr};

/// Errors from `allocate`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// Requested size is zero or larger than any single block can be.
    InvalidSize {
        /// Number of bytes requested.
        requested: usize,
        /// Largest request the arena can ever satisfy.
        max: usize,
    },
    /// No free block is large enough, even after merging free neighbours.
    OutOfMemory {
        /// Number of bytes requested.
        requested: usize,
        /// Size of the largest free block at the time of the request.
        largest_free: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { requested, max } => {
                write!(
                    f,
                    "allocation size must be within [1, {max}] bytes, requested {requested}"
                )
            }
            Self::OutOfMemory {
                requested,
                largest_free,
            } => {
                write!(
                    f,
                    "unable to allocate {requested} bytes, largest free block is {largest_free} bytes"
                )
            }
        }
    }
}

impl Error for AllocError {}

/// Errors from `release`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReleaseError {
    /// The block behind this pointer is already free.
    DoubleFree {
        /// The pointer passed to `release`.
        ptr: PayloadPtr,
    },
    /// The pointer does not refer to a block handed out by this arena.
    InvalidPointer {
        /// The pointer passed to `release`.
        ptr: PayloadPtr,
    },
}

impl fmt::Display for ReleaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DoubleFree { ptr } => {
                write!(f, "block at {ptr} is already free (double free?)")
            }
            Self::InvalidPointer { ptr } => {
                write!(f, "pointer {ptr} does not refer to a live allocation")
            }
        }
    }
}

impl Error for ReleaseError {}

/// Errors detected by `ArenaConfig::validate`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Capacity cannot hold one header plus one payload byte.
    CapacityTooSmall {
        /// The configured capacity.
        capacity: usize,
        /// Smallest accepted capacity.
        min: usize,
    },
    /// Capacity exceeds what a single header can describe.
    CapacityTooLarge {
        /// The configured capacity.
        capacity: usize,
        /// Largest accepted capacity.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityTooSmall { capacity, min } => {
                write!(f, "arena capacity {capacity} is below minimum of {min}")
            }
            Self::CapacityTooLarge { capacity, max } => {
                write!(f, "arena capacity {capacity} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for ConfigError {}

/// A broken header-chain invariant, reported by chain validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChainError {
    /// A header claims zero payload bytes after initialization.
    EmptyBlock {
        /// Offending header.
        offset: BlockOffset,
    },
    /// A block runs past the end of the arena.
    Overrun {
        /// Offending header.
        offset: BlockOffset,
        /// Where the block claims to end.
        end: usize,
        /// Arena capacity.
        capacity: usize,
    },
    /// The chain stops short of the arena end, leaving a gap too small
    /// for another header.
    Gap {
        /// Where the chain stopped.
        end: usize,
        /// Arena capacity.
        capacity: usize,
    },
    /// Two adjacent blocks are both free.
    UnmergedFree {
        /// The earlier of the two free blocks.
        offset: BlockOffset,
    },
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBlock { offset } => write!(f, "zero-sized block at {offset}"),
            Self::Overrun {
                offset,
                end,
                capacity,
            } => {
                write!(
                    f,
                    "block at {offset} ends at {end}, past arena capacity {capacity}"
                )
            }
            Self::Gap { end, capacity } => {
                write!(f, "chain ends at {end}, arena capacity is {capacity}")
            }
            Self::UnmergedFree { offset } => {
                write!(f, "free block at {offset} is followed by another free block")
            }
        }
    }
}

impl Error for ChainError {}
