//! The dungeon run state machine. This file owns run entry, exit, scoring,
//! and reward distribution; room, trainer, boss, and encounter concerns live
//! in focused submodules.

use std::collections::BTreeSet;
use std::fmt;

use crate::config::{ConfigError, EngineConfig};
use crate::content::{ContentCatalog, ContentError, TrainerEntry};
use crate::host::{Clock, PresentationSink, RandomSource};
use crate::rewards;
use crate::rotation;
use crate::state::{CompletionRecord, RotationState, RunState};
use crate::types::{
    DungeonId, EngineEvent, ModifierId, NarrativeId, RewardOutcome, RewardTier, RotationMode,
};

mod boss;
pub mod encounters;
mod hash;
mod rooms;
#[cfg(test)]
mod test_support;
mod trainers;

pub use encounters::{BattleScaling, DialogKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    Config(ConfigError),
    Content(Vec<ContentError>),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Config(error) => write!(f, "invalid engine config: {error:?}"),
            SetupError::Content(errors) => write!(f, "invalid content catalog: {errors:?}"),
        }
    }
}

impl std::error::Error for SetupError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnterError {
    UnknownDungeon(DungeonId),
    RunInProgress,
    LockedOut(DungeonId),
}

impl fmt::Display for EnterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnterError::UnknownDungeon(dungeon) => write!(f, "unknown dungeon {}", dungeon.0),
            EnterError::RunInProgress => write!(f, "a run is already in progress"),
            EnterError::LockedOut(dungeon) => {
                write!(f, "dungeon {} is locked out this window", dungeon.0)
            }
        }
    }
}

impl std::error::Error for EnterError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceError {
    RunInactive,
    RoomNotCleared,
    AlreadyAtBossFloor,
}

impl fmt::Display for AdvanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvanceError::RunInactive => write!(f, "no run is active"),
            AdvanceError::RoomNotCleared => write!(f, "current room still has trainers standing"),
            AdvanceError::AlreadyAtBossFloor => write!(f, "already at the boss floor"),
        }
    }
}

impl std::error::Error for AdvanceError {}

pub struct DungeonEngine {
    catalog: ContentCatalog,
    config: EngineConfig,
    run: RunState,
    rotation: RotationState,
    /// Runtime trainer slots for the current room; never persisted. A slot is
    /// `None` when hidden.
    slots: Vec<Option<TrainerEntry>>,
    /// Trainers actually placed in the current room; room-cleared is judged
    /// against this, not against the configured maximum.
    spawned_count: u8,
    log: Vec<EngineEvent>,
}

impl DungeonEngine {
    pub fn new(catalog: ContentCatalog, config: EngineConfig) -> Result<Self, SetupError> {
        Self::from_parts(catalog, config, RunState::idle(), RotationState::empty())
    }

    /// Rebuilds an engine around previously persisted state. Trainer slots
    /// start empty; call [`DungeonEngine::resume`] to repopulate the room.
    pub fn from_parts(
        catalog: ContentCatalog,
        config: EngineConfig,
        run: RunState,
        rotation: RotationState,
    ) -> Result<Self, SetupError> {
        config.validate().map_err(SetupError::Config)?;
        catalog.validate().map_err(SetupError::Content)?;
        let slots = vec![None; config.max_trainers_per_room];
        Ok(Self { catalog, config, run, rotation, slots, spawned_count: 0, log: Vec::new() })
    }

    /// Refreshes the rotation if the stored snapshot is stale for today.
    /// Returns whether a refresh happened.
    pub fn ensure_rotation_current(&mut self, clock: &dyn Clock) -> bool {
        let today = clock.today();
        if rotation::is_current(&self.rotation, today)
            && rotation::selection_is_valid(&self.rotation, &self.catalog)
        {
            return false;
        }
        rotation::recompute(&mut self.rotation, &self.catalog, self.config.debug_override, today);
        self.log.push(EngineEvent::RotationRefreshed { seed: self.rotation.daily_seed });
        if let Some(forced) = self.config.debug_override {
            self.log.push(EngineEvent::RotationOverrideActive {
                narrative: forced.narrative,
                modifier: forced.modifier,
            });
        }
        true
    }

    pub fn enter_dungeon(
        &mut self,
        dungeon: DungeonId,
        clock: &dyn Clock,
        rng: &mut dyn RandomSource,
        sink: &mut dyn PresentationSink,
    ) -> Result<(), EnterError> {
        if self.run.active {
            self.log.push(EngineEvent::EnterRejected { dungeon });
            return Err(EnterError::RunInProgress);
        }

        self.ensure_rotation_current(clock);

        let Some(definition) = self.catalog.dungeon(dungeon) else {
            self.log.push(EngineEvent::EnterRejected { dungeon });
            return Err(EnterError::UnknownDungeon(dungeon));
        };
        if rotation::is_locked_out(&self.rotation, definition) {
            self.log.push(EngineEvent::LockedOut { dungeon });
            return Err(EnterError::LockedOut(dungeon));
        }

        let (narrative, modifier) = match (self.config.debug_override, definition.rotation) {
            (Some(forced), _) => (forced.narrative, forced.modifier),
            (None, RotationMode::PerEntry) => rotation::roll_per_entry(definition, rng),
            (None, _) => (
                rotation::selected_narrative(&self.rotation, dungeon),
                rotation::selected_modifier(&self.rotation, dungeon),
            ),
        };

        self.run = RunState {
            active: true,
            dungeon,
            room_index: 0,
            score: 0,
            narrative,
            modifier,
            defeated: BTreeSet::new(),
            boss_defeated: false,
        };
        self.log.push(EngineEvent::EnteredDungeon { dungeon });
        self.enter_current_room(rng, sink);
        Ok(())
    }

    /// Abandons the run at any point. No completion is recorded, so lockouts
    /// never trigger from an abandoned run. No-op while idle.
    pub fn exit_run(&mut self, sink: &mut dyn PresentationSink) {
        if !self.run.active {
            return;
        }
        self.hide_all_trainers(sink);
        self.run.reset();
        self.log.push(EngineEvent::RunExited);
    }

    /// Re-enters the current room after a restore from disk. Idle engines
    /// ignore this.
    pub fn resume(&mut self, rng: &mut dyn RandomSource, sink: &mut dyn PresentationSink) {
        if !self.run.active {
            return;
        }
        if self.is_on_boss_floor() {
            self.warp_to_boss_room(sink);
        } else {
            self.enter_current_room(rng, sink);
        }
    }

    /// Adds points, saturating at the configured ceiling. Idle no-op.
    pub fn increment_score(&mut self, points: u16) {
        if !self.run.active {
            return;
        }
        self.run.score = self.run.score.saturating_add(points).min(self.config.score_ceiling);
    }

    pub fn is_active(&self) -> bool {
        self.run.active
    }

    /// Zero-based room index of the active run.
    pub fn current_room(&self) -> Option<u8> {
        self.run.active.then_some(self.run.room_index)
    }

    pub fn reward_score(&self) -> u16 {
        self.run.score
    }

    pub fn reward_tier(&self) -> RewardTier {
        rewards::tier_for_score(self.run.score, &self.config)
    }

    /// Narrative in effect for a dungeon: the run's own snapshot while that
    /// run is active, the rotation's pick otherwise.
    pub fn active_narrative(&self, dungeon: DungeonId) -> NarrativeId {
        if self.run.active && self.run.dungeon == dungeon {
            self.run.narrative
        } else {
            rotation::selected_narrative(&self.rotation, dungeon)
        }
    }

    pub fn active_modifier(&self, dungeon: DungeonId) -> ModifierId {
        if self.run.active && self.run.dungeon == dungeon {
            self.run.modifier
        } else {
            rotation::selected_modifier(&self.rotation, dungeon)
        }
    }

    /// Grants the earned reward, records the completion for lockout purposes,
    /// and resets the run. Requires a defeated boss; otherwise there is no
    /// completed run to reward. A refused grant leaves the run in place so the
    /// host can free inventory space and call again.
    pub fn distribute_rewards(&mut self, sink: &mut dyn PresentationSink) -> RewardOutcome {
        if !self.run.active || !self.run.boss_defeated {
            return RewardOutcome::RunInactive;
        }

        let tier = self.reward_tier();
        let narrative_id = self.run.narrative;
        let outcome = match self
            .catalog
            .narrative(narrative_id)
            .and_then(|narrative| rewards::reward_for_tier(narrative, tier))
        {
            None => {
                self.log.push(EngineEvent::NoRewardConfigured { narrative: narrative_id });
                RewardOutcome::NothingConfigured
            }
            Some(pick) => {
                if pick.clamped {
                    self.log.push(EngineEvent::RewardListClamped { narrative: narrative_id, tier });
                }
                if sink.grant_item(pick.item) {
                    self.log.push(EngineEvent::RewardGranted { item: pick.item, tier });
                    RewardOutcome::Granted { item: pick.item, tier }
                } else {
                    self.log.push(EngineEvent::RewardGrantRefused { item: pick.item });
                    return RewardOutcome::InventoryFull { item: pick.item, tier };
                }
            }
        };

        self.rotation.record_completion(CompletionRecord {
            dungeon: self.run.dungeon,
            daily_seed: self.rotation.daily_seed,
            weekly_seed: self.rotation.weekly_seed,
        });
        self.hide_all_trainers(sink);
        self.run.reset();
        self.log.push(EngineEvent::RunExited);
        outcome
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    pub fn rotation_state(&self) -> &RotationState {
        &self.rotation
    }

    pub fn log(&self) -> &[EngineEvent] {
        &self.log
    }
}
