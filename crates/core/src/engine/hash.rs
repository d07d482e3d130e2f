//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from run control
//! code. It does not own persistence.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl DungeonEngine {
    /// Order-sensitive digest of everything that defines observable behavior.
    /// Two engines with equal hashes respond identically to the same inputs.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u32(self.rotation.daily_seed);
        hasher.write_u32(self.rotation.weekly_seed);
        for narrative in &self.rotation.selected_narratives {
            hasher.write_u8(narrative.0);
        }
        for modifier in &self.rotation.selected_modifiers {
            hasher.write_u8(modifier.0);
        }
        for record in &self.rotation.completions {
            hasher.write_u8(record.dungeon.0);
            hasher.write_u32(record.daily_seed);
            hasher.write_u32(record.weekly_seed);
        }

        hasher.write_u8(u8::from(self.run.active));
        hasher.write_u8(self.run.dungeon.0);
        hasher.write_u8(self.run.room_index);
        hasher.write_u16(self.run.score);
        hasher.write_u8(self.run.narrative.0);
        hasher.write_u8(self.run.modifier.0);
        hasher.write_u8(u8::from(self.run.boss_defeated));
        for trainer in &self.run.defeated {
            hasher.write_u16(trainer.0);
        }
        hasher.write_u8(self.spawned_count);
        for slot in &self.slots {
            match slot {
                None => hasher.write_u16(u16::MAX),
                Some(entry) => {
                    hasher.write_u16(entry.trainer.0);
                    hasher.write_u16(entry.graphics.0);
                }
            }
        }
        hasher.finish()
    }
}
