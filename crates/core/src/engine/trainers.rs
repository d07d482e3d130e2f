//! Trainer slot management for the current room: spawn counts, identity
//! picks, and defeat bookkeeping.

use super::*;
use crate::content::RoomDefinition;
use crate::types::GraphicsId;

impl DungeonEngine {
    pub(super) fn spawn_trainers(
        &mut self,
        room: &RoomDefinition,
        rng: &mut dyn RandomSource,
        sink: &mut dyn PresentationSink,
    ) {
        self.hide_all_trainers(sink);
        self.run.defeated.clear();

        // Rooms with no bounds of their own fall back to the configured ones.
        let (min, max) = if room.trainer_count_max == 0 {
            (self.config.trainer_count_min, self.config.trainer_count_max)
        } else {
            (room.trainer_count_min, room.trainer_count_max)
        };
        let span = (max.saturating_sub(min)) as usize + 1;
        let rolled = min as usize + rng.pick_index(span);
        let mut count = rolled.min(self.slots.len());

        let pool: Vec<TrainerEntry> = self
            .catalog
            .narrative(self.run.narrative)
            .map(|narrative| narrative.trainer_pool.clone())
            .unwrap_or_default();

        if pool.is_empty() {
            // A single placeholder keeps the room clearable instead of
            // soft-locking the run.
            self.log.push(EngineEvent::EmptyTrainerPool { narrative: self.run.narrative });
            let fallback =
                TrainerEntry { trainer: self.config.fallback_trainer, graphics: GraphicsId(0) };
            self.slots[0] = Some(fallback);
            sink.show_trainer(0, fallback);
            self.spawned_count = 1;
            self.log.push(EngineEvent::TrainersSpawned { room: self.run.room_index, count: 1 });
            return;
        }

        // Identities within a room must be distinct; defeat tracking is per
        // trainer id, so a duplicate would fall with its twin.
        count = count.min(pool.len());
        let mut indices: Vec<usize> = (0..pool.len()).collect();
        for slot in 0..count {
            let picked = slot + rng.pick_index(indices.len() - slot);
            indices.swap(slot, picked);
            let entry = pool[indices[slot]];
            self.slots[slot] = Some(entry);
            sink.show_trainer(slot, entry);
        }

        self.spawned_count = count as u8;
        self.log.push(EngineEvent::TrainersSpawned {
            room: self.run.room_index,
            count: self.spawned_count,
        });
    }

    /// Marks the trainer in `slot` defeated and scores it. Out-of-range slots,
    /// hidden slots, and repeated reports are all no-ops.
    pub fn on_trainer_defeated(&mut self, slot: usize, sink: &mut dyn PresentationSink) {
        if !self.run.active || self.is_on_boss_floor() {
            return;
        }
        let Some(Some(entry)) = self.slots.get(slot).copied() else {
            return;
        };
        if !self.run.defeated.insert(entry.trainer) {
            return;
        }
        self.increment_score(self.config.points_per_trainer);
        self.slots[slot] = None;
        sink.hide_trainer(slot);
        self.log.push(EngineEvent::TrainerDefeated { trainer: entry.trainer });
    }

    pub fn trainer_in_slot(&self, slot: usize) -> Option<TrainerEntry> {
        self.slots.get(slot).copied().flatten()
    }

    pub(super) fn hide_all_trainers(&mut self, sink: &mut dyn PresentationSink) {
        for (slot, entry) in self.slots.iter_mut().enumerate() {
            if entry.take().is_some() {
                sink.hide_trainer(slot);
            }
        }
    }
}
