//! Read-side battle context: encounter tables, effective levels, modifier
//! scaling, and dialog draws for the active run.

use super::*;
use crate::content::EncounterTable;
use crate::host::RandomSource;
use crate::types::BattleStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    TrainerIntro,
    TrainerDefeat,
    BossIntro,
    BossDefeat,
    BossVictory,
}

/// Everything the battle system needs from the active modifier, plus the
/// dungeon's level band. Neutral defaults while idle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleScaling {
    pub target_level: u8,
    pub level_range: u8,
    pub status: BattleStatus,
    pub status_duration: u8,
    pub inverse_types: bool,
    pub exp_multiplier: u8,
    pub money_multiplier: u8,
}

impl BattleScaling {
    fn neutral(target_level: u8) -> Self {
        Self {
            target_level,
            level_range: 0,
            status: BattleStatus::None,
            status_duration: 0,
            inverse_types: false,
            exp_multiplier: 1,
            money_multiplier: 1,
        }
    }
}

impl DungeonEngine {
    pub fn land_encounters(&self) -> Option<&EncounterTable> {
        self.active_narrative_def().and_then(|narrative| narrative.land_encounters.as_ref())
    }

    pub fn water_encounters(&self) -> Option<&EncounterTable> {
        self.active_narrative_def().and_then(|narrative| narrative.water_encounters.as_ref())
    }

    /// Rolls an effective wild level: uniform within the dungeon's level band
    /// with the modifier delta folded in, clamped to the valid range. The
    /// configured fallback while idle.
    pub fn current_level(&self, rng: &mut dyn RandomSource) -> u8 {
        if !self.run.active {
            return self.config.fallback_level;
        }
        let Some(definition) = self.catalog.dungeon(self.run.dungeon) else {
            return self.config.fallback_level;
        };
        let delta = self.catalog.modifier(self.run.modifier).map_or(0, |m| m.level_delta);
        let range = definition.level_range as i16;
        let offset =
            if range == 0 { 0 } else { rng.pick_index(2 * range as usize + 1) as i16 - range };
        (definition.base_level as i16 + offset + delta as i16).clamp(1, 100) as u8
    }

    fn target_level(&self) -> u8 {
        let Some(definition) = self.catalog.dungeon(self.run.dungeon) else {
            return self.config.fallback_level;
        };
        let delta = self.catalog.modifier(self.run.modifier).map_or(0, |m| m.level_delta);
        (definition.base_level as i16 + delta as i16).clamp(1, 100) as u8
    }

    pub fn battle_scaling(&self) -> BattleScaling {
        if !self.run.active {
            return BattleScaling::neutral(self.config.fallback_level);
        }
        let target_level = self.target_level();
        let level_range =
            self.catalog.dungeon(self.run.dungeon).map_or(0, |definition| definition.level_range);
        let Some(modifier) = self.catalog.modifier(self.run.modifier) else {
            return BattleScaling { level_range, ..BattleScaling::neutral(target_level) };
        };
        BattleScaling {
            target_level,
            level_range,
            status: modifier.status,
            status_duration: modifier.status_duration,
            inverse_types: modifier.inverse_types,
            exp_multiplier: modifier.exp_multiplier,
            money_multiplier: modifier.money_multiplier,
        }
    }

    /// One line from the active narrative's pool for `kind`, or `None` when
    /// the pool is empty or no run is active.
    pub fn dialog_line(
        &self,
        kind: DialogKind,
        rng: &mut dyn RandomSource,
    ) -> Option<&'static str> {
        let narrative = self.active_narrative_def()?;
        let pool = match kind {
            DialogKind::TrainerIntro => &narrative.dialog.trainer_intro,
            DialogKind::TrainerDefeat => &narrative.dialog.trainer_defeat,
            DialogKind::BossIntro => &narrative.dialog.boss_intro,
            DialogKind::BossDefeat => &narrative.dialog.boss_defeat,
            DialogKind::BossVictory => &narrative.dialog.boss_victory,
        };
        if pool.is_empty() {
            return None;
        }
        Some(pool[rng.pick_index(pool.len())])
    }

    fn active_narrative_def(&self) -> Option<&crate::content::Narrative> {
        if !self.run.active {
            return None;
        }
        self.catalog.narrative(self.run.narrative)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::config::RotationOverride;
    use crate::host::{FixedClock, RecordingSink};
    use crate::types::{CalendarDate, ModifierId, NarrativeId};

    #[test]
    fn idle_engine_reports_fallback_level_and_neutral_scaling() {
        let engine = fresh_engine();
        let mut rng = test_rng();
        assert_eq!(engine.current_level(&mut rng), engine.config().fallback_level);
        assert_eq!(
            engine.battle_scaling(),
            BattleScaling::neutral(engine.config().fallback_level)
        );
        assert!(engine.land_encounters().is_none());
    }

    #[test]
    fn expert_modifier_raises_the_level_band() {
        let forced = RotationOverride { narrative: NarrativeId(1), modifier: ModifierId(10) };
        let mut engine = engine_with_override(forced);
        let clock = FixedClock(CalendarDate::new(2026, 8, 28));
        let mut rng = test_rng();
        let mut sink = RecordingSink::new();
        engine.enter_dungeon(DungeonId(0), &clock, &mut rng, &mut sink).expect("enter");

        // Cave base level 20 with range 5, expert delta +5: rolls land in
        // [20, 30] and the scaling midpoint sits at 25.
        for _ in 0..50 {
            let level = engine.current_level(&mut rng);
            assert!((20..=30).contains(&level), "level {level} outside the band");
        }
        let scaling = engine.battle_scaling();
        assert_eq!(scaling.target_level, 25);
        assert_eq!(scaling.money_multiplier, 2);
        assert_eq!(scaling.level_range, 5);
    }

    #[test]
    fn trick_room_scaling_carries_status_and_duration() {
        let forced = RotationOverride { narrative: NarrativeId(1), modifier: ModifierId(7) };
        let mut engine = engine_with_override(forced);
        let clock = FixedClock(CalendarDate::new(2026, 8, 28));
        let mut rng = test_rng();
        let mut sink = RecordingSink::new();
        engine.enter_dungeon(DungeonId(0), &clock, &mut rng, &mut sink).expect("enter");

        let scaling = engine.battle_scaling();
        assert_eq!(scaling.status, BattleStatus::TrickRoom);
        assert_eq!(scaling.status_duration, 5);
    }

    #[test]
    fn encounter_tables_follow_the_active_narrative() {
        let forced = RotationOverride { narrative: NarrativeId(4), modifier: ModifierId(0) };
        let mut engine = engine_with_override(forced);
        let clock = FixedClock(CalendarDate::new(2026, 8, 28));
        let mut rng = test_rng();
        let mut sink = RecordingSink::new();
        engine.enter_dungeon(DungeonId(1), &clock, &mut rng, &mut sink).expect("enter");

        assert!(engine.land_encounters().is_some());
        assert!(engine.water_encounters().is_some());
    }

    #[test]
    fn dialog_draws_come_from_the_right_pool() {
        let forced = RotationOverride { narrative: NarrativeId(2), modifier: ModifierId(0) };
        let mut engine = engine_with_override(forced);
        let clock = FixedClock(CalendarDate::new(2026, 8, 28));
        let mut rng = test_rng();
        let mut sink = RecordingSink::new();
        engine.enter_dungeon(DungeonId(0), &clock, &mut rng, &mut sink).expect("enter");

        let narrative =
            engine.catalog().narrative(NarrativeId(2)).expect("narrative").dialog.clone();
        for _ in 0..20 {
            let line = engine.dialog_line(DialogKind::TrainerIntro, &mut rng).expect("line");
            assert!(narrative.trainer_intro.contains(&line));
        }
    }

    #[test]
    fn dialog_is_silent_while_idle() {
        let engine = fresh_engine();
        let mut rng = test_rng();
        assert_eq!(engine.dialog_line(DialogKind::BossIntro, &mut rng), None);
    }
}
