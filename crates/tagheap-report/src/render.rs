//! Human-readable arena dump.
//!
//! The exact text is for people, not parsers:
//!
//! ```text
//! ptr     status  size
//! 0x0002  used     100
//! 0x0068  used      50
//! 0x009c  free    3940
//! --
//! blocks: 2 used, 1 free
//! bytes:  150 used, 3940 free, 6 overhead (2 per block), 4096 capacity
//! largest: 100 used, 3940 free
//! ```

use std::fmt;

use crate::stats::HeapStats;
use crate::HeapView;

/// Write the block table and statistics for `view` into `out`.
pub fn render<W: fmt::Write>(view: &dyn HeapView, out: &mut W) -> fmt::Result {
    if !view.is_initialized() {
        return writeln!(out, "arena of {} bytes (uninitialized)", view.capacity());
    }
    writeln!(out, "{:<7} {:<6} {:>5}", "ptr", "status", "size")?;
    for block in view.block_list() {
        writeln!(
            out,
            "{:<7} {:<6} {:>5}",
            block.payload().to_string(),
            block.status.to_string(),
            block.size
        )?;
    }
    let s = HeapStats::collect(view);
    writeln!(out, "--")?;
    writeln!(out, "blocks: {} used, {} free", s.used_blocks, s.free_blocks)?;
    writeln!(
        out,
        "bytes:  {} used, {} free, {} overhead ({} per block), {} capacity",
        s.used_bytes, s.free_bytes, s.overhead_bytes, s.header_size, s.capacity
    )?;
    writeln!(
        out,
        "largest: {} used, {} free",
        s.largest_used, s.largest_free
    )
}

/// `Display` adapter over [`render`].
///
/// ```ignore
/// println!("{}", Report(&arena));
/// ```
pub struct Report<'a>(pub &'a dyn HeapView);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagheap_arena::TagArena;

    #[test]
    fn uninitialized_arena_renders_one_line() {
        let arena = TagArena::with_capacity(4096).unwrap();
        assert_eq!(
            Report(&arena).to_string(),
            "arena of 4096 bytes (uninitialized)\n"
        );
    }

    #[test]
    fn lists_every_block_then_stats() {
        let mut arena = TagArena::with_capacity(4096).unwrap();
        arena.allocate(100).unwrap();
        arena.allocate(50).unwrap();
        let text = Report(&arena).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[1].starts_with("0x0002"));
        assert!(lines[1].contains("used"));
        assert!(lines[3].contains("free"));
        assert!(lines[3].ends_with("3940"));
        assert_eq!(lines[5], "blocks: 2 used, 1 free");
        assert!(lines[6].contains("6 overhead (2 per block)"));
        assert_eq!(lines[7], "largest: 100 used, 3940 free");
    }

    #[test]
    fn render_into_string_buffer() {
        let mut arena = TagArena::with_capacity(64).unwrap();
        arena.allocate(62).unwrap();
        let mut out = String::new();
        render(&arena, &mut out).unwrap();
        assert!(out.contains("blocks: 1 used, 0 free"));
    }
}
