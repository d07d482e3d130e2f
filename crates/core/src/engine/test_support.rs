//! Shared test fixtures for the engine submodule test suites.
//! This module exists to avoid repeating entry and room-clearing setup
//! across many tests. It does not own production logic.

use super::*;
use crate::config::RotationOverride;
use crate::host::{ChaChaRandom, FixedClock, RecordingSink};
use crate::types::CalendarDate;

pub(super) fn fresh_engine() -> DungeonEngine {
    DungeonEngine::new(ContentCatalog::build_default(), EngineConfig::default())
        .expect("default catalog and config are valid")
}

pub(super) fn engine_with_override(forced: RotationOverride) -> DungeonEngine {
    let config = EngineConfig { debug_override: Some(forced), ..Default::default() };
    DungeonEngine::new(ContentCatalog::build_default(), config)
        .expect("default catalog and config are valid")
}

pub(super) fn test_rng() -> ChaChaRandom {
    ChaChaRandom::from_seed(42)
}

pub(super) fn entered_engine(
    dungeon: DungeonId,
) -> (DungeonEngine, FixedClock, ChaChaRandom, RecordingSink) {
    entered_engine_seeded(dungeon, 42)
}

pub(super) fn entered_engine_seeded(
    dungeon: DungeonId,
    seed: u64,
) -> (DungeonEngine, FixedClock, ChaChaRandom, RecordingSink) {
    let mut engine = fresh_engine();
    let clock = FixedClock(CalendarDate::new(2026, 8, 28));
    let mut rng = ChaChaRandom::from_seed(seed);
    let mut sink = RecordingSink::new();
    engine.enter_dungeon(dungeon, &clock, &mut rng, &mut sink).expect("entry succeeds");
    (engine, clock, rng, sink)
}

pub(super) fn clear_current_room(engine: &mut DungeonEngine, sink: &mut RecordingSink) {
    for slot in 0..engine.config().max_trainers_per_room {
        engine.on_trainer_defeated(slot, sink);
    }
}

pub(super) fn walk_to_boss_floor(
    engine: &mut DungeonEngine,
    rng: &mut ChaChaRandom,
    sink: &mut RecordingSink,
) {
    while !engine.is_on_boss_floor() {
        clear_current_room(engine, sink);
        engine.advance_room(rng, sink).expect("advance");
    }
}

pub(super) fn finish_run(
    engine: &mut DungeonEngine,
    rng: &mut ChaChaRandom,
    sink: &mut RecordingSink,
) {
    walk_to_boss_floor(engine, rng, sink);
    engine.spawn_boss(sink);
    engine.on_boss_defeated(sink);
}
