//! Seeded random allocate/release churn.
//!
//! A [`Workload`] picks between allocating a random size and releasing a
//! random live allocation, fills every new payload with a per-allocation
//! tag byte, and remembers the tag so overlap can be detected later.
//! The same seed always produces the same sequence of requests against
//! arenas that respond the same way.

use indexmap::IndexMap;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tagheap_arena::TagArena;
use tagheap_core::{AllocError, PayloadPtr, ReleaseError};

/// One operation performed by [`Workload::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Allocate {
        size: usize,
        result: Result<PayloadPtr, AllocError>,
    },
    Release {
        ptr: PayloadPtr,
        result: Result<(), ReleaseError>,
    },
}

/// Counters accumulated over a workload's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkloadStats {
    pub allocations: usize,
    pub alloc_failures: usize,
    pub releases: usize,
}

pub struct Workload {
    rng: ChaCha8Rng,
    /// Live allocations and the tag byte their payload was filled with.
    live: IndexMap<PayloadPtr, u8>,
    max_size: usize,
    release_percent: u32,
    next_tag: u8,
    stats: WorkloadStats,
}

impl Workload {
    /// Requests sizes in `1..=max_size`, releasing 40% of the time.
    pub fn new(seed: u64, max_size: usize) -> Self {
        assert!(max_size >= 1, "max_size must be at least 1");
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            live: IndexMap::new(),
            max_size,
            release_percent: 40,
            next_tag: 1,
            stats: WorkloadStats::default(),
        }
    }

    /// Chance, in percent, that a step releases instead of allocating.
    pub fn with_release_percent(mut self, percent: u32) -> Self {
        self.release_percent = percent.min(100);
        self
    }

    /// Perform one random operation against `arena`.
    pub fn step(&mut self, arena: &mut TagArena) -> Step {
        let roll = self.rng.next_u32() % 100;
        if !self.live.is_empty() && roll < self.release_percent {
            let idx = self.rng.next_u32() as usize % self.live.len();
            let (ptr, _) = self
                .live
                .swap_remove_index(idx)
                .expect("index is below live.len()");
            let result = arena.release(ptr);
            self.stats.releases += 1;
            return Step::Release { ptr, result };
        }

        let size = 1 + self.rng.next_u32() as usize % self.max_size;
        let result = arena.allocate(size);
        match result {
            Ok(ptr) => {
                let tag = self.next_tag;
                self.next_tag = self.next_tag.wrapping_add(1).max(1);
                if let Some(payload) = arena.payload_mut(ptr) {
                    payload.fill(tag);
                }
                self.live.insert(ptr, tag);
                self.stats.allocations += 1;
            }
            Err(_) => self.stats.alloc_failures += 1,
        }
        Step::Allocate { size, result }
    }

    /// Perform `steps` operations and return the running totals.
    pub fn run(&mut self, arena: &mut TagArena, steps: usize) -> WorkloadStats {
        for _ in 0..steps {
            self.step(arena);
        }
        self.stats.clone()
    }

    pub fn stats(&self) -> &WorkloadStats {
        &self.stats
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Live allocations in insertion order (modulo swap-removals).
    pub fn live(&self) -> impl Iterator<Item = PayloadPtr> + '_ {
        self.live.keys().copied()
    }

    /// Check that every live payload still holds only its own tag byte.
    pub fn verify_payloads(&self, arena: &TagArena) -> Result<(), String> {
        for (&ptr, &tag) in &self.live {
            let payload = arena
                .payload(ptr)
                .ok_or_else(|| format!("live allocation {ptr} not resolvable"))?;
            if let Some(pos) = payload.iter().position(|&b| b != tag) {
                return Err(format!(
                    "payload {ptr} byte {pos} is {:#04x}, expected tag {tag:#04x}",
                    payload[pos]
                ));
            }
        }
        Ok(())
    }

    /// Release every live allocation.
    pub fn drain(&mut self, arena: &mut TagArena) -> Result<(), ReleaseError> {
        for (ptr, _) in self.live.drain(..) {
            arena.release(ptr)?;
            self.stats.releases += 1;
        }
        Ok(())
    }
}
