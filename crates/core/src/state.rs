//! Persisted state: the current run and the rotation snapshot. This module
//! owns the data shapes only; all transitions live in the engine and rotation
//! modules.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{DungeonId, ModifierId, NarrativeId, TrainerId};

/// Progress of the run in flight. The narrative and modifier are captured at
/// entry so a rotation refresh mid-run never changes content under the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    pub active: bool,
    pub dungeon: DungeonId,
    pub room_index: u8,
    pub score: u16,
    pub narrative: NarrativeId,
    pub modifier: ModifierId,
    pub defeated: BTreeSet<TrainerId>,
    pub boss_defeated: bool,
}

impl RunState {
    pub fn idle() -> Self {
        Self {
            active: false,
            dungeon: DungeonId(0),
            room_index: 0,
            score: 0,
            narrative: NarrativeId::NONE,
            modifier: ModifierId::NONE,
            defeated: BTreeSet::new(),
            boss_defeated: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::idle();
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Which rotation window a dungeon was last completed in. Lockouts compare
/// these seeds against the current ones instead of storing dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub dungeon: DungeonId,
    pub daily_seed: u32,
    pub weekly_seed: u32,
}

/// Snapshot of the current rotation. `daily_seed` doubles as the freshness
/// token: zero means the rotation has never been computed, and no calendar
/// date maps to zero.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationState {
    pub daily_seed: u32,
    pub weekly_seed: u32,
    pub selected_narratives: Vec<NarrativeId>,
    pub selected_modifiers: Vec<ModifierId>,
    pub completions: Vec<CompletionRecord>,
}

impl RotationState {
    pub fn empty() -> Self {
        Self {
            daily_seed: 0,
            weekly_seed: 0,
            selected_narratives: Vec::new(),
            selected_modifiers: Vec::new(),
            completions: Vec::new(),
        }
    }

    pub fn completion_for(&self, dungeon: DungeonId) -> Option<&CompletionRecord> {
        self.completions.iter().find(|record| record.dungeon == dungeon)
    }

    /// Keeps at most one record per dungeon; a newer completion replaces the
    /// older window.
    pub fn record_completion(&mut self, record: CompletionRecord) {
        if let Some(existing) =
            self.completions.iter_mut().find(|existing| existing.dungeon == record.dungeon)
        {
            *existing = record;
        } else {
            self.completions.push(record);
        }
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::empty()
    }
}
