//! Boss resolution and the capture/boss scoring hooks.

use super::*;
use crate::types::BossSpec;

fn apply_level_delta(level: u8, delta: i8) -> u8 {
    (level as i16 + delta as i16).clamp(1, 100) as u8
}

impl DungeonEngine {
    /// Boss of the active narrative, with the modifier's level delta folded
    /// into creature bosses. [`BossSpec::None`] while idle.
    pub fn boss_spec(&self) -> BossSpec {
        if !self.run.active {
            return BossSpec::None;
        }
        let Some(narrative) = self.catalog.narrative(self.run.narrative) else {
            return BossSpec::None;
        };
        match narrative.boss {
            BossSpec::Creature { species, level, held_item, stat_boosts } => {
                let delta =
                    self.catalog.modifier(self.run.modifier).map_or(0, |m| m.level_delta);
                BossSpec::Creature {
                    species,
                    level: apply_level_delta(level, delta),
                    held_item,
                    stat_boosts,
                }
            }
            other => other,
        }
    }

    /// Places the boss on the boss floor. Trainer bosses occupy slot 0 so the
    /// host shows them through the same seam as room trainers; creature
    /// bosses are returned for the battle system to materialize.
    pub fn spawn_boss(&mut self, sink: &mut dyn PresentationSink) -> BossSpec {
        if !self.is_on_boss_floor() {
            return BossSpec::None;
        }
        let spec = self.boss_spec();
        if let BossSpec::Trainer { trainer, graphics } = spec {
            let entry = TrainerEntry { trainer, graphics };
            self.slots[0] = Some(entry);
            sink.show_trainer(0, entry);
        }
        spec
    }

    /// Scores the boss kill once. Off the boss floor, or repeated, this is a
    /// no-op.
    pub fn on_boss_defeated(&mut self, sink: &mut dyn PresentationSink) {
        if !self.is_on_boss_floor() || self.run.boss_defeated {
            return;
        }
        self.run.boss_defeated = true;
        self.increment_score(self.config.points_per_boss);
        self.hide_all_trainers(sink);
        self.log.push(EngineEvent::BossDefeated);
    }

    /// Scores a wild capture. Counts anywhere in the run, boss floor included.
    pub fn on_creature_captured(&mut self) {
        if !self.run.active {
            return;
        }
        self.increment_score(self.config.points_per_capture);
        self.log.push(EngineEvent::CreatureCaptured);
    }
}
