// crates/shared-kernel/src/infrastructure/offset_tracker.rs

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct PartitionOffsets {
    in_flight: BTreeSet<i64>,
    highest_done: Option<i64>,
    stored: Option<i64>,
}

/// Suivi des offsets traités en parallèle, par partition.
///
/// Les messages d'une partition terminent dans le désordre (handlers concurrents).
/// On ne stocke jamais un offset au-delà du plus petit message encore en vol :
/// après un crash, tout message non acquitté est redélivré.
#[derive(Debug, Default)]
pub struct OffsetTracker {
    partitions: Mutex<HashMap<i32, PartitionOffsets>>,
}

impl OffsetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, partition: i32, offset: i64) {
        let mut partitions = self.partitions.lock().unwrap_or_else(|e| e.into_inner());
        partitions
            .entry(partition)
            .or_default()
            .in_flight
            .insert(offset);
    }

    /// Marque le message comme acquitté.
    /// Renvoie le prochain offset à stocker (offset du prochain message à lire) s'il a avancé.
    pub fn complete(&self, partition: i32, offset: i64) -> Option<i64> {
        let mut partitions = self.partitions.lock().unwrap_or_else(|e| e.into_inner());
        let state = partitions.entry(partition).or_default();

        state.in_flight.remove(&offset);
        state.highest_done = Some(state.highest_done.map_or(offset, |h| h.max(offset)));

        let watermark = match state.in_flight.first() {
            Some(&lowest) => lowest,
            None => state.highest_done? + 1,
        };

        if state.stored.is_some_and(|stored| stored >= watermark) {
            return None;
        }
        state.stored = Some(watermark);
        Some(watermark)
    }

    pub fn in_flight(&self, partition: i32) -> usize {
        let partitions = self.partitions.lock().unwrap_or_else(|e| e.into_inner());
        partitions.get(&partition).map_or(0, |p| p.in_flight.len())
    }
}
