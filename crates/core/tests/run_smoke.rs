use core::{
    BossSpec, CalendarDate, ChaChaRandom, ContentCatalog, DungeonEngine, DungeonId, EngineConfig,
    EngineEvent, FixedClock, RecordingSink, RewardOutcome, RewardTier, RotationOverride,
};

fn engine() -> DungeonEngine {
    DungeonEngine::new(ContentCatalog::build_default(), EngineConfig::default()).expect("engine")
}

fn clock() -> FixedClock {
    FixedClock(CalendarDate::new(2026, 8, 28))
}

fn clear_room(engine: &mut DungeonEngine, sink: &mut RecordingSink) -> u16 {
    let mut downed = 0;
    for slot in 0..engine.config().max_trainers_per_room {
        if engine.trainer_in_slot(slot).is_some() {
            engine.on_trainer_defeated(slot, sink);
            downed += 1;
        }
    }
    downed
}

#[test]
fn test_full_run_scores_and_rewards() {
    let mut engine = engine();
    let clock = clock();
    let mut rng = ChaChaRandom::from_seed(7);
    let mut sink = RecordingSink::new();

    engine.enter_dungeon(DungeonId(0), &clock, &mut rng, &mut sink).expect("enter");
    assert!(engine.is_active());
    assert_eq!(engine.current_room(), Some(0));

    let mut trainers_downed = 0;
    while !engine.is_on_boss_floor() {
        trainers_downed += clear_room(&mut engine, &mut sink);
        engine.advance_room(&mut rng, &mut sink).expect("advance");
    }

    let expected_clear_score = trainers_downed * engine.config().points_per_trainer;
    assert_eq!(engine.reward_score(), expected_clear_score);

    let boss = engine.spawn_boss(&mut sink);
    assert_ne!(boss, BossSpec::None);
    engine.on_boss_defeated(&mut sink);
    assert_eq!(
        engine.reward_score(),
        expected_clear_score + engine.config().points_per_boss
    );

    let outcome = engine.distribute_rewards(&mut sink);
    assert!(matches!(outcome, RewardOutcome::Granted { .. }));
    assert!(!engine.is_active());

    // The event stream tells the whole story in order.
    let log = engine.log();
    let position = |needle: &EngineEvent| log.iter().position(|event| event == needle);
    let entered = position(&EngineEvent::EnteredDungeon { dungeon: DungeonId(0) }).expect("entered");
    let boss_floor = position(&EngineEvent::BossFloorReached).expect("boss floor");
    let boss_down = position(&EngineEvent::BossDefeated).expect("boss defeated");
    let exited = position(&EngineEvent::RunExited).expect("exited");
    assert!(entered < boss_floor && boss_floor < boss_down && boss_down < exited);
}

#[test]
fn test_captures_push_the_tier_upward() {
    let mut engine = engine();
    let clock = clock();
    let mut rng = ChaChaRandom::from_seed(7);
    let mut sink = RecordingSink::new();
    engine.enter_dungeon(DungeonId(0), &clock, &mut rng, &mut sink).expect("enter");

    assert_eq!(engine.reward_tier(), RewardTier::Bronze);
    // 18 captures at 10 points reach the silver cutoff of 171.
    for _ in 0..18 {
        engine.on_creature_captured();
    }
    assert_eq!(engine.reward_score(), 180);
    assert_eq!(engine.reward_tier(), RewardTier::Silver);

    for _ in 0..17 {
        engine.on_creature_captured();
    }
    assert_eq!(engine.reward_tier(), RewardTier::Gold);

    // The ceiling holds no matter how many more come in.
    for _ in 0..100 {
        engine.on_creature_captured();
    }
    assert_eq!(engine.reward_score(), engine.config().score_ceiling);
}

#[test]
fn test_save_restore_mid_run_preserves_the_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dungeon_state.json");

    let mut engine = engine();
    let clock = clock();
    let mut rng = ChaChaRandom::from_seed(11);
    let mut sink = RecordingSink::new();
    engine.enter_dungeon(DungeonId(0), &clock, &mut rng, &mut sink).expect("enter");
    clear_room(&mut engine, &mut sink);
    engine.advance_room(&mut rng, &mut sink).expect("advance");

    core::save_state(&path, engine.run_state(), engine.rotation_state()).expect("save");
    let loaded = core::load_state(&path).expect("load");
    assert_eq!(&loaded.run, engine.run_state());
    assert_eq!(&loaded.rotation, engine.rotation_state());

    let mut restored = DungeonEngine::from_parts(
        ContentCatalog::build_default(),
        EngineConfig::default(),
        loaded.run,
        loaded.rotation,
    )
    .expect("restore");
    let mut sink2 = RecordingSink::new();
    let mut rng2 = ChaChaRandom::from_seed(99);
    restored.resume(&mut rng2, &mut sink2);

    assert_eq!(restored.current_room(), engine.current_room());
    assert_eq!(restored.reward_score(), engine.reward_score());
    assert_eq!(
        restored.active_narrative(DungeonId(0)),
        engine.active_narrative(DungeonId(0))
    );

    // The restored run can still be finished.
    while !restored.is_on_boss_floor() {
        clear_room(&mut restored, &mut sink2);
        restored.advance_room(&mut rng2, &mut sink2).expect("advance");
    }
    restored.spawn_boss(&mut sink2);
    restored.on_boss_defeated(&mut sink2);
    assert!(matches!(
        restored.distribute_rewards(&mut sink2),
        RewardOutcome::Granted { .. } | RewardOutcome::NothingConfigured
    ));
}

#[test]
fn test_forced_content_runs_end_to_end() {
    use core::{ModifierId, NarrativeId};

    let config = EngineConfig {
        debug_override: Some(RotationOverride {
            narrative: NarrativeId(2),
            modifier: ModifierId(9),
        }),
        ..Default::default()
    };
    let mut engine = DungeonEngine::new(ContentCatalog::build_default(), config).expect("engine");
    let clock = clock();
    let mut rng = ChaChaRandom::from_seed(3);
    let mut sink = RecordingSink::new();

    engine.enter_dungeon(DungeonId(2), &clock, &mut rng, &mut sink).expect("enter");
    assert_eq!(engine.active_narrative(DungeonId(2)), NarrativeId(2));
    assert_eq!(engine.battle_scaling().exp_multiplier, 2);

    while !engine.is_on_boss_floor() {
        clear_room(&mut engine, &mut sink);
        engine.advance_room(&mut rng, &mut sink).expect("advance");
    }
    // Narrative 2 has a trainer boss regardless of the dungeon it is forced into.
    assert!(matches!(engine.spawn_boss(&mut sink), BossSpec::Trainer { .. }));
    engine.on_boss_defeated(&mut sink);
    assert!(matches!(engine.distribute_rewards(&mut sink), RewardOutcome::Granted { .. }));
}

#[test]
fn test_two_engines_with_the_same_inputs_stay_in_lockstep() {
    let mut a = engine();
    let mut b = engine();
    let clock = clock();
    let mut rng_a = ChaChaRandom::from_seed(21);
    let mut rng_b = ChaChaRandom::from_seed(21);
    let mut sink_a = RecordingSink::new();
    let mut sink_b = RecordingSink::new();

    a.enter_dungeon(DungeonId(0), &clock, &mut rng_a, &mut sink_a).expect("enter a");
    b.enter_dungeon(DungeonId(0), &clock, &mut rng_b, &mut sink_b).expect("enter b");
    assert_eq!(a.snapshot_hash(), b.snapshot_hash());
    assert_eq!(sink_a.intents, sink_b.intents);

    while !a.is_on_boss_floor() {
        clear_room(&mut a, &mut sink_a);
        clear_room(&mut b, &mut sink_b);
        a.advance_room(&mut rng_a, &mut sink_a).expect("advance a");
        b.advance_room(&mut rng_b, &mut sink_b).expect("advance b");
        assert_eq!(a.snapshot_hash(), b.snapshot_hash());
    }
    assert_eq!(sink_a.intents, sink_b.intents);
    assert_eq!(a.log(), b.log());
}
