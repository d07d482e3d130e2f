//! Host integration seams. The engine talks to the surrounding game only
//! through these traits, so tests and tools can run it headless.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::content::TrainerEntry;
use crate::types::{CalendarDate, ItemId, MapId};

/// Source of the current calendar date. Rotation freshness is decided against
/// this, never against wall-clock time directly.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Uniform random words for spawn counts, pool picks, and dialog draws.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform-enough index into a non-empty pool. Modulo bias is acceptable
    /// here; pools are tiny compared to the word size.
    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.next_u32() as usize) % len
    }
}

/// Outward-facing effects the engine requests from the host. Returning `false`
/// from [`PresentationSink::grant_item`] reports a full inventory; the engine
/// treats that as a recoverable refusal, not an error.
pub trait PresentationSink {
    fn show_trainer(&mut self, slot: usize, entry: TrainerEntry);
    fn hide_trainer(&mut self, slot: usize);
    fn warp(&mut self, map: MapId, spawn: (u8, u8));
    fn grant_item(&mut self, item: ItemId) -> bool;
}

pub struct ChaChaRandom {
    rng: ChaCha8Rng,
}

impl ChaChaRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl RandomSource for ChaChaRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

/// One outward effect, as recorded by [`RecordingSink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresentationIntent {
    TrainerShown { slot: usize, entry: TrainerEntry },
    TrainerHidden { slot: usize },
    Warped { map: MapId, spawn: (u8, u8) },
    ItemGranted { item: ItemId },
    ItemRefused { item: ItemId },
}

/// Sink that records every request instead of performing it. Used by the
/// simulation tool and throughout the test suites.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub intents: Vec<PresentationIntent>,
    /// Remaining item grants before the sink reports a full inventory.
    /// `None` means unlimited.
    pub item_capacity: Option<u32>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item_capacity(capacity: u32) -> Self {
        Self { intents: Vec::new(), item_capacity: Some(capacity) }
    }
}

impl PresentationSink for RecordingSink {
    fn show_trainer(&mut self, slot: usize, entry: TrainerEntry) {
        self.intents.push(PresentationIntent::TrainerShown { slot, entry });
    }

    fn hide_trainer(&mut self, slot: usize) {
        self.intents.push(PresentationIntent::TrainerHidden { slot });
    }

    fn warp(&mut self, map: MapId, spawn: (u8, u8)) {
        self.intents.push(PresentationIntent::Warped { map, spawn });
    }

    fn grant_item(&mut self, item: ItemId) -> bool {
        match self.item_capacity {
            Some(0) => {
                self.intents.push(PresentationIntent::ItemRefused { item });
                false
            }
            Some(ref mut remaining) => {
                *remaining -= 1;
                self.intents.push(PresentationIntent::ItemGranted { item });
                true
            }
            None => {
                self.intents.push(PresentationIntent::ItemGranted { item });
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chacha_random_is_reproducible() {
        let mut a = ChaChaRandom::from_seed(77);
        let mut b = ChaChaRandom::from_seed(77);
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn pick_index_stays_in_bounds() {
        let mut rng = ChaChaRandom::from_seed(5);
        for _ in 0..200 {
            assert!(rng.pick_index(3) < 3);
        }
    }

    #[test]
    fn recording_sink_enforces_item_capacity() {
        let mut sink = RecordingSink::with_item_capacity(1);
        assert!(sink.grant_item(ItemId(9)));
        assert!(!sink.grant_item(ItemId(9)));
        assert_eq!(
            sink.intents,
            vec![
                PresentationIntent::ItemGranted { item: ItemId(9) },
                PresentationIntent::ItemRefused { item: ItemId(9) },
            ]
        );
    }
}
