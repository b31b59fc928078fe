//! Header navigation over an arena buffer.
//!
//! The header chain is not a separate data structure: it lives inside the
//! buffer it describes. Everything here works on byte offsets into that
//! buffer and assumes the offset it is handed is the start of a block on
//! the current chain. [`TagArena`](crate::TagArena) is the only caller
//! and upholds that at its boundary.

use tagheap_core::{BlockInfo, BlockOffset, Header, HEADER_SIZE};

/// Decode the header at `at`.
pub(crate) fn header(buf: &[u8], at: BlockOffset) -> Header {
    let i = at.index();
    Header::decode([buf[i], buf[i + 1]])
}

/// Overwrite the header at `at`.
pub(crate) fn set_header(buf: &mut [u8], at: BlockOffset, h: Header) {
    let i = at.index();
    buf[i..i + HEADER_SIZE].copy_from_slice(&h.encode());
}

/// Payload bytes of the block at `at`.
pub(crate) fn alloc_size(buf: &[u8], at: BlockOffset) -> usize {
    header(buf, at).alloc_size()
}

pub(crate) fn is_free(buf: &[u8], at: BlockOffset) -> bool {
    header(buf, at).is_free()
}

/// Offset of the header following the block at `at`.
///
/// Only meaningful when `at` is not the last block.
pub(crate) fn next(buf: &[u8], at: BlockOffset) -> BlockOffset {
    BlockOffset((at.index() + HEADER_SIZE + alloc_size(buf, at)) as u32)
}

/// Whether the block at `at` runs to the end of the arena.
pub(crate) fn is_last(buf: &[u8], at: BlockOffset) -> bool {
    next(buf, at).index() >= buf.len()
}

/// Flip the block at `at` between free and used. Size is untouched.
pub(crate) fn toggle_use(buf: &mut [u8], at: BlockOffset) {
    let h = header(buf, at);
    set_header(buf, at, h.toggled());
}

/// Absorb the block after `at` into it.
///
/// The absorbed header's bytes become payload of the merged block.
pub(crate) fn merge_with_next(buf: &mut [u8], at: BlockOffset) {
    let absorbed = alloc_size(buf, next(buf, at));
    let merged = alloc_size(buf, at) + HEADER_SIZE + absorbed;
    set_header(buf, at, Header::free(merged));
}

/// Free bytes left over if the block at `at` kept only `keep` bytes and a
/// new header were carved after them. Negative when it would not even fit.
pub(crate) fn split_remainder(buf: &[u8], at: BlockOffset, keep: usize) -> isize {
    alloc_size(buf, at) as isize - keep as isize - HEADER_SIZE as isize
}

/// Shrink the free block at `at` to `keep` bytes and place a new free
/// header for the remainder right after it.
///
/// Returns the new block's offset, or `None` (and changes nothing) when
/// the remainder would be smaller than one payload byte.
pub(crate) fn split(buf: &mut [u8], at: BlockOffset, keep: usize) -> Option<BlockOffset> {
    let remainder = split_remainder(buf, at, keep);
    if remainder < 1 {
        return None;
    }
    let tail = BlockOffset((at.index() + HEADER_SIZE + keep) as u32);
    set_header(buf, tail, Header::free(remainder as usize));
    set_header(buf, at, Header::free(keep));
    Some(tail)
}

/// Iterator over the blocks of an arena in chain order.
///
/// Yields nothing for an arena whose first header is still the
/// uninitialized sentinel.
pub struct Blocks<'a> {
    buf: &'a [u8],
    cursor: Option<BlockOffset>,
}

impl<'a> Blocks<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        let cursor = if header(buf, BlockOffset::START).is_sentinel() {
            None
        } else {
            Some(BlockOffset::START)
        };
        Self { buf, cursor }
    }
}

impl Iterator for Blocks<'_> {
    type Item = BlockInfo;

    fn next(&mut self) -> Option<BlockInfo> {
        let at = self.cursor?;
        let h = header(self.buf, at);
        let info = BlockInfo {
            offset: at,
            status: h.status,
            size: h.alloc_size(),
        };
        // A zero-sized header would never advance; stop rather than spin.
        self.cursor = if h.size == 0 || info.end() + HEADER_SIZE > self.buf.len() {
            None
        } else {
            Some(BlockOffset(info.end() as u32))
        };
        Some(info)
    }
}
