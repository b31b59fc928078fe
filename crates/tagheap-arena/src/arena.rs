//! The fixed-capacity free-list arena.
//!
//! [`TagArena`] owns one byte buffer and threads a chain of in-place
//! headers through it:
//!
//! ```text
//! ┌────┬──────────┬────┬──────┬────┬────────────────────────────┐
//! │ H  │ payload  │ H  │ pay. │ H  │          payload           │
//! │used│   100    │used│  50  │free│           3940             │
//! └────┴──────────┴────┴──────┴────┴────────────────────────────┘
//! 0    2          102  104    154  156                        4096
//! ```
//!
//! Allocation is first-fit with splitting. Release flips the block back
//! to free and merges every run of adjacent free blocks, so the chain
//! never holds two free neighbours once an operation returns.

use tagheap_core::{
    AllocError, BlockList, BlockOffset, ChainError, ConfigError, Header, HeapView, PayloadPtr,
    ReleaseError, HEADER_SIZE,
};
use tracing::{debug, trace, warn};

use crate::chain::{self, Blocks};
use crate::config::ArenaConfig;

/// A single fixed-capacity arena with an intrusive header chain.
///
/// The buffer is allocated once at construction and never resized. The
/// first header is placed lazily on the first call to
/// [`allocate`](Self::allocate); until then the arena reports itself as
/// uninitialized and every release is rejected.
pub struct TagArena {
    buf: Box<[u8]>,
    config: ArenaConfig,
}

impl TagArena {
    /// Create an arena from a validated config.
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            buf: vec![0u8; config.capacity].into_boxed_slice(),
            config,
        })
    }

    /// Create an arena of `capacity` bytes with default settings.
    pub fn with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        Self::new(ArenaConfig::new(capacity))
    }

    /// The config this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Total arena size in bytes.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Whether the first header has been placed.
    pub fn is_initialized(&self) -> bool {
        !chain::header(&self.buf, BlockOffset::START).is_sentinel()
    }

    /// Iterate over every block in chain order.
    pub fn blocks(&self) -> Blocks<'_> {
        Blocks::new(&self.buf)
    }

    /// Size of the largest free block, or 0 if there is none.
    pub fn largest_free(&self) -> usize {
        self.blocks()
            .filter(|b| b.is_free())
            .map(|b| b.size)
            .max()
            .unwrap_or(0)
    }

    /// Allocate `size` bytes and return a pointer to the payload.
    ///
    /// Uses first fit: the first free block of at least `size` bytes wins,
    /// even if a tighter one exists further on. The chosen block is split
    /// when the leftover can hold a header plus at least one byte;
    /// otherwise the caller gets the whole block, which may be slightly
    /// larger than requested.
    ///
    /// On failure the arena is left unchanged.
    pub fn allocate(&mut self, size: usize) -> Result<PayloadPtr, AllocError> {
        trace!(size, "allocate");
        let max = self.config.max_request();
        if size == 0 || size > max {
            let err = AllocError::InvalidSize {
                requested: size,
                max,
            };
            warn!(%err, "allocation rejected");
            return Err(err);
        }

        if !self.is_initialized() {
            self.initialize();
        }
        if self.config.merge_on_alloc {
            self.coalesce_pass();
        }

        let Some(at) = self.first_fit(size) else {
            let err = AllocError::OutOfMemory {
                requested: size,
                largest_free: self.largest_free(),
            };
            warn!(%err, "allocation failed");
            return Err(err);
        };

        if let Some(tail) = chain::split(&mut self.buf, at, size) {
            debug!(block = %at, remainder = %tail, "split block");
        }
        chain::toggle_use(&mut self.buf, at);
        self.debug_check();
        Ok(at.payload())
    }

    /// Return the block behind `ptr` to the arena.
    ///
    /// The pointer is validated before anything is touched: it must lie
    /// inside the arena, its header must carry a plausible size, and it must
    /// name the start of a block on the current chain. A rejected pointer
    /// or a double free is logged and returned as an error; the arena is
    /// not modified in either case.
    pub fn release(&mut self, ptr: PayloadPtr) -> Result<(), ReleaseError> {
        trace!(%ptr, "release");
        let Some(at) = self.locate(ptr) else {
            let err = ReleaseError::InvalidPointer { ptr };
            warn!(%err, "release rejected");
            return Err(err);
        };
        if chain::is_free(&self.buf, at) {
            let err = ReleaseError::DoubleFree { ptr };
            warn!(%err, "release rejected");
            return Err(err);
        }

        chain::toggle_use(&mut self.buf, at);
        self.coalesce_pass();
        self.debug_check();
        Ok(())
    }

    /// Merge every run of adjacent free blocks into a single block.
    ///
    /// Walks the whole chain once. When a pair of neighbours is free, the
    /// earlier one absorbs the later and stays in place as the left side
    /// of the next comparison, so a run of any length collapses in one
    /// pass. Returns how many headers were absorbed; a second call right
    /// after returns 0.
    pub fn coalesce_pass(&mut self) -> usize {
        if !self.is_initialized() {
            return 0;
        }
        let mut merged = 0;
        let mut prev = BlockOffset::START;
        while !chain::is_last(&self.buf, prev) {
            let next = chain::next(&self.buf, prev);
            if chain::is_free(&self.buf, prev) && chain::is_free(&self.buf, next) {
                chain::merge_with_next(&mut self.buf, prev);
                merged += 1;
            } else {
                prev = next;
            }
        }
        if merged > 0 {
            debug!(merged, "coalesced free blocks");
        }
        merged
    }

    /// Check every header-chain invariant.
    ///
    /// An uninitialized arena is trivially valid. Otherwise every block
    /// must hold at least one byte, blocks must tile the buffer exactly,
    /// and no two neighbours may both be free.
    pub fn validate(&self) -> Result<(), ChainError> {
        if !self.is_initialized() {
            return Ok(());
        }
        let capacity = self.capacity();
        let mut at = BlockOffset::START;
        let mut prev_free: Option<BlockOffset> = None;
        loop {
            if at.index() + HEADER_SIZE > capacity {
                return Err(ChainError::Gap {
                    end: at.index(),
                    capacity,
                });
            }
            let h = chain::header(&self.buf, at);
            if h.size == 0 {
                return Err(ChainError::EmptyBlock { offset: at });
            }
            let end = at.index() + HEADER_SIZE + h.alloc_size();
            if end > capacity {
                return Err(ChainError::Overrun {
                    offset: at,
                    end,
                    capacity,
                });
            }
            if let (Some(offset), true) = (prev_free, h.is_free()) {
                return Err(ChainError::UnmergedFree { offset });
            }
            if end == capacity {
                return Ok(());
            }
            prev_free = h.is_free().then_some(at);
            at = BlockOffset(end as u32);
        }
    }

    /// The payload of a live allocation.
    ///
    /// The slice spans the whole block, which can be a few bytes longer
    /// than the original request when the block was not split. Returns
    /// `None` for pointers that `release` would reject or for free blocks.
    pub fn payload(&self, ptr: PayloadPtr) -> Option<&[u8]> {
        let at = self.locate(ptr)?;
        let h = chain::header(&self.buf, at);
        if h.is_free() {
            return None;
        }
        let start = ptr.index();
        Some(&self.buf[start..start + h.alloc_size()])
    }

    /// Mutable access to the payload of a live allocation.
    ///
    /// See [`payload`](Self::payload).
    pub fn payload_mut(&mut self, ptr: PayloadPtr) -> Option<&mut [u8]> {
        let at = self.locate(ptr)?;
        let h = chain::header(&self.buf, at);
        if h.is_free() {
            return None;
        }
        let start = ptr.index();
        Some(&mut self.buf[start..start + h.alloc_size()])
    }

    /// Forget every allocation and return to the uninitialized state.
    ///
    /// Pointers handed out before the reset are rejected afterwards until
    /// the same offsets are handed out again.
    pub fn reset(&mut self) {
        self.buf.fill(0);
        debug!(capacity = self.capacity(), "arena reset");
    }

    fn initialize(&mut self) {
        let size = self.config.max_request();
        chain::set_header(&mut self.buf, BlockOffset::START, Header::free(size));
        debug!(capacity = self.capacity(), size, "arena initialized");
    }

    fn first_fit(&self, size: usize) -> Option<BlockOffset> {
        self.blocks()
            .find(|b| b.is_free() && b.size >= size)
            .map(|b| b.offset)
    }

    /// Resolve `ptr` to the header of the block it starts, if any.
    fn locate(&self, ptr: PayloadPtr) -> Option<BlockOffset> {
        if ptr.index() >= self.capacity() || !self.is_initialized() {
            return None;
        }
        let at = ptr.header_offset()?;
        let size = chain::alloc_size(&self.buf, at);
        if size == 0 || size > self.config.max_request() {
            return None;
        }
        if ptr.index() + size > self.capacity() {
            return None;
        }
        // The header bytes look plausible; make sure they are a real header
        // and not payload that happens to decode as one.
        self.blocks()
            .take_while(|b| b.offset <= at)
            .any(|b| b.offset == at)
            .then_some(at)
    }

    fn debug_check(&self) {
        debug_assert_eq!(self.validate(), Ok(()), "header chain corrupted");
    }
}

impl Default for TagArena {
    fn default() -> Self {
        Self {
            buf: vec![0u8; ArenaConfig::DEFAULT_CAPACITY].into_boxed_slice(),
            config: ArenaConfig::default(),
        }
    }
}

impl HeapView for TagArena {
    fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn is_initialized(&self) -> bool {
        TagArena::is_initialized(self)
    }

    fn block_list(&self) -> BlockList {
        self.blocks().collect()
    }
}
