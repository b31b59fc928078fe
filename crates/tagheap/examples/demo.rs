//! tagheap demo: allocate, free, and inspect a 4 KiB arena.
//!
//! Demonstrates:
//!   1. Lazy arena initialization on the first allocation
//!   2. Block splitting and first-fit reuse
//!   3. Coalescing on release
//!   4. Rejected requests (oversized, double free, foreign pointer)
//!
//! Run with:
//!   RUST_LOG=tagheap_arena=debug cargo run -p tagheap --example demo

use tagheap::global;
use tagheap::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(true)
        .init();

    // ─── A private arena ────────────────────────────────────────

    let mut arena = TagArena::default();
    println!("{}", Report(&arena));

    let a = arena.allocate(100).expect("fresh arena has room for 100 bytes");
    let b = arena.allocate(50).expect("fresh arena has room for 50 more");
    arena.payload_mut(a).expect("a is live").fill(b'a');
    arena.payload_mut(b).expect("b is live").fill(b'b');
    println!("after allocating 100 and 50 bytes:\n{}", Report(&arena));

    arena.release(a).expect("a is live");
    println!("after releasing the first block:\n{}", Report(&arena));

    // First fit reuses the hole left by `a`.
    let c = arena.allocate(40).expect("the 100-byte hole fits 40");
    println!("allocated 40 bytes at {c} (first block was at {a})");

    // ─── Failures are reported, never fatal ─────────────────────

    if let Err(e) = arena.allocate(8192) {
        println!("allocate(8192): {e}");
    }
    arena.release(c).expect("c is live");
    if let Err(e) = arena.release(c) {
        println!("release twice: {e}");
    }
    if let Err(e) = arena.release(PayloadPtr(b.0 + 7)) {
        println!("release interior pointer: {e}");
    }

    arena.release(b).expect("b is live");
    let stats = HeapStats::collect(&arena);
    println!(
        "final: {} block(s), {} bytes free, fragmentation {:.2}",
        stats.blocks(),
        stats.free_bytes,
        stats.fragmentation()
    );

    // ─── The per-thread default arena ───────────────────────────

    let p = global::allocate(512).expect("default arena has room");
    println!("\ndefault arena:\n{}", global::report());
    global::release(p).expect("p is live");
}
