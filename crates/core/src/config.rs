//! Tunable engine constants, kept out of the state machine so balance passes
//! never touch control flow.

use crate::types::{ModifierId, NarrativeId, TrainerId};

/// Forces a fixed narrative/modifier for every dungeon, bypassing rotation.
/// Runtime counterpart of a debug build switch; selected at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationOverride {
    pub narrative: NarrativeId,
    pub modifier: ModifierId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fixed number of trainer slots a room can address.
    pub max_trainers_per_room: usize,
    /// Fallback spawn bounds for rooms that define none.
    pub trainer_count_min: u8,
    pub trainer_count_max: u8,
    /// Score awarded per defeated room trainer.
    pub points_per_trainer: u16,
    /// Score awarded for defeating the boss.
    pub points_per_boss: u16,
    /// Score awarded per captured wild creature.
    pub points_per_capture: u16,
    /// Stored score saturates here instead of wrapping.
    pub score_ceiling: u16,
    /// Score at or above this reaches Silver.
    pub silver_threshold: u16,
    /// Score at or above this reaches Gold.
    pub gold_threshold: u16,
    /// Level reported while no run is active.
    pub fallback_level: u8,
    /// Inert identity assigned to hidden trainer slots and used when a
    /// narrative's pool is empty.
    pub fallback_trainer: TrainerId,
    pub debug_override: Option<RotationOverride>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_trainers_per_room: 4,
            trainer_count_min: 2,
            trainer_count_max: 4,
            points_per_trainer: 20,
            points_per_boss: 50,
            points_per_capture: 10,
            score_ceiling: 511,
            silver_threshold: 171,
            gold_threshold: 341,
            fallback_level: 5,
            fallback_trainer: TrainerId(0),
            debug_override: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    ThresholdsOutOfOrder { silver: u16, gold: u16 },
    TrainerBoundsInverted { min: u8, max: u8 },
    TrainerMaxExceedsSlots { max: u8, slots: usize },
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.silver_threshold >= self.gold_threshold {
            return Err(ConfigError::ThresholdsOutOfOrder {
                silver: self.silver_threshold,
                gold: self.gold_threshold,
            });
        }
        if self.trainer_count_min > self.trainer_count_max {
            return Err(ConfigError::TrainerBoundsInverted {
                min: self.trainer_count_min,
                max: self.trainer_count_max,
            });
        }
        if self.trainer_count_max as usize > self.max_trainers_per_room {
            return Err(ConfigError::TrainerMaxExceedsSlots {
                max: self.trainer_count_max,
                slots: self.max_trainers_per_room,
            });
        }
        Ok(())
    }
}
