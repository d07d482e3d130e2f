//! Room progression. Rooms are linear; the floor after the last room is the
//! boss floor.

use super::*;

impl DungeonEngine {
    /// Moves to the next room, or onto the boss floor after the last one.
    /// Refused while trainers are still standing.
    pub fn advance_room(
        &mut self,
        rng: &mut dyn RandomSource,
        sink: &mut dyn PresentationSink,
    ) -> Result<(), AdvanceError> {
        if !self.run.active {
            return Err(AdvanceError::RunInactive);
        }
        if self.is_on_boss_floor() {
            return Err(AdvanceError::AlreadyAtBossFloor);
        }
        if !self.is_room_cleared() {
            return Err(AdvanceError::RoomNotCleared);
        }

        self.run.room_index += 1;
        if self.is_on_boss_floor() {
            self.log.push(EngineEvent::BossFloorReached);
            self.warp_to_boss_room(sink);
        } else {
            self.log.push(EngineEvent::RoomAdvanced { room: self.run.room_index });
            self.enter_current_room(rng, sink);
        }
        Ok(())
    }

    pub fn is_on_boss_floor(&self) -> bool {
        self.run.active
            && self
                .catalog
                .dungeon(self.run.dungeon)
                .is_some_and(|definition| self.run.room_index >= definition.room_count)
    }

    /// On a regular floor: every spawned trainer is down. On the boss floor:
    /// the boss is down.
    pub fn is_room_cleared(&self) -> bool {
        if !self.run.active {
            return false;
        }
        if self.is_on_boss_floor() {
            self.run.boss_defeated
        } else {
            self.run.defeated.len() >= self.spawned_count as usize
        }
    }

    pub(super) fn enter_current_room(
        &mut self,
        rng: &mut dyn RandomSource,
        sink: &mut dyn PresentationSink,
    ) {
        let room = {
            let Some(definition) = self.catalog.dungeon(self.run.dungeon) else {
                return;
            };
            *self.catalog.room_for_index(definition, self.run.room_index)
        };
        sink.warp(room.map, room.spawn);
        self.spawn_trainers(&room, rng, sink);
    }

    pub(super) fn warp_to_boss_room(&mut self, sink: &mut dyn PresentationSink) {
        let Some(room) = self.catalog.dungeon(self.run.dungeon).map(|d| d.boss_room) else {
            return;
        };
        self.hide_all_trainers(sink);
        self.spawned_count = 0;
        self.run.defeated.clear();
        sink.warp(room.map, room.spawn);
    }
}
