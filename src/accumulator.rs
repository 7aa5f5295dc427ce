//! Concurrent accumulator: a fixed-shard sharded map from document id to
//! accumulated relevance, used by the parallel scorer and matcher.
//!
//! Grounded on the sharded-storage pattern used elsewhere in the wider
//! search/storage ecosystem (a fixed array of independently-lockable
//! shards rather than one global lock or a lock-free hash map) — see
//! `DESIGN.md`. Shard locks use `parking_lot::Mutex`, which has no
//! poisoning to propagate on the hot scoring path.

use parking_lot::Mutex;
use std::collections::BTreeMap;

/// Default number of shards, per `spec.md` §4.6.
pub const DEFAULT_SHARD_COUNT: usize = 12;

/// A sharded `HashMap<u32, f64>`. Each shard is independently locked;
/// `add` and `erase` touch exactly one shard and never block on another.
/// `drain` is the sole operation permitted to observe the full state —
/// it acquires every shard in shard-index order.
pub struct ConcurrentAccumulator {
    shards: Vec<Mutex<std::collections::HashMap<u32, f64>>>,
}

impl ConcurrentAccumulator {
    /// Creates an accumulator with the given shard count.
    ///
    /// # Panics
    ///
    /// Panics if `shard_count == 0`.
    pub fn new(shard_count: usize) -> Self {
        assert!(shard_count > 0, "shard_count must be positive");
        let mut shards = Vec::with_capacity(shard_count);
        shards.resize_with(shard_count, || Mutex::new(std::collections::HashMap::new()));
        Self { shards }
    }

    fn shard_index(&self, key: u32) -> usize {
        key as usize % self.shards.len()
    }

    /// Adds `delta` to the accumulated value for `key`, locking only the
    /// shard `key` hashes to.
    pub fn add(&self, key: u32, delta: f64) {
        let idx = self.shard_index(key);
        let mut shard = self.shards[idx].lock();
        *shard.entry(key).or_insert(0.0) += delta;
    }

    /// Removes `key` from whichever shard it would live in. A no-op if
    /// absent — matching spec.md §4.5 step 4, which erases minus-word
    /// document ids "even if not currently present".
    pub fn erase(&self, key: u32) {
        let idx = self.shard_index(key);
        self.shards[idx].lock().remove(&key);
    }

    /// Acquires every shard in shard-index order and merges them into a
    /// single ordered map. The only legal way to observe the accumulator's
    /// full state.
    pub fn drain(&self) -> BTreeMap<u32, f64> {
        let mut result = BTreeMap::new();
        for shard in &self.shards {
            let guard = shard.lock();
            result.extend(guard.iter().map(|(&k, &v)| (k, v)));
        }
        result
    }
}
