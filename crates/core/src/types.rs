use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DungeonId(pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NarrativeId(pub u8);

impl NarrativeId {
    /// Sentinel for "no narrative selected" (empty pool, fresh state).
    pub const NONE: NarrativeId = NarrativeId(0);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModifierId(pub u8);

impl ModifierId {
    pub const NONE: ModifierId = ModifierId(0);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TrainerId(pub u16);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GraphicsId(pub u16);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpeciesId(pub u16);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u16);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MapId(pub u16);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DungeonTier {
    Early,
    Mid,
    Late,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Biome {
    Cave,
    Forest,
    Mountain,
    Water,
    Desert,
    Snow,
}

/// How often a dungeon may be completed before re-entry is refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockoutMode {
    None,
    Daily,
    Weekly,
}

/// When a dungeon's narrative/modifier selection is re-derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationMode {
    Fixed { narrative: NarrativeId, modifier: ModifierId },
    PerEntry,
    Daily,
    Weekly,
}

/// Weather-or-terrain status a modifier imposes at battle start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleStatus {
    None,
    Sun,
    Rain,
    Sandstorm,
    Hail,
    Snow,
    StrongWinds,
    TrickRoom,
}

/// Boss payload for a narrative. The discriminant carries the payload, so a
/// stale external tag can never select the wrong union arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BossSpec {
    None,
    Trainer { trainer: TrainerId, graphics: GraphicsId },
    Creature { species: SpeciesId, level: u8, held_item: Option<ItemId>, stat_boosts: [i8; 7] },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RewardTier {
    Bronze,
    Silver,
    Gold,
}

impl RewardTier {
    /// Zero-based index into a narrative's reward list, before clamping.
    pub fn reward_index(self) -> usize {
        match self {
            RewardTier::Bronze => 0,
            RewardTier::Silver => 1,
            RewardTier::Gold => 2,
        }
    }
}

/// Result of a reward distribution. "Nothing configured" and "grant refused"
/// are distinct recoverable outcomes; neither is an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardOutcome {
    Granted { item: ItemId, tier: RewardTier },
    InventoryFull { item: ItemId, tier: RewardTier },
    NothingConfigured,
    RunInactive,
}

/// Non-fatal diagnostics accumulated by the engine, in the order they occur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    RotationRefreshed { seed: u32 },
    RotationOverrideActive { narrative: NarrativeId, modifier: ModifierId },
    EnteredDungeon { dungeon: DungeonId },
    EnterRejected { dungeon: DungeonId },
    LockedOut { dungeon: DungeonId },
    RoomAdvanced { room: u8 },
    BossFloorReached,
    TrainersSpawned { room: u8, count: u8 },
    EmptyTrainerPool { narrative: NarrativeId },
    TrainerDefeated { trainer: TrainerId },
    BossDefeated,
    CreatureCaptured,
    RewardListClamped { narrative: NarrativeId, tier: RewardTier },
    RewardGranted { item: ItemId, tier: RewardTier },
    RewardGrantRefused { item: ItemId },
    NoRewardConfigured { narrative: NarrativeId },
    RunExited,
}

/// A calendar date as reported by the host clock. Time-of-day never matters;
/// rotation seeds are a pure function of this value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl CalendarDate {
    pub fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    fn is_leap_year(year: u16) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    /// ISO weekday, Monday = 1 through Sunday = 7 (Sakamoto's method).
    pub fn iso_weekday(self) -> u8 {
        const OFFSETS: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let mut y = self.year as u32;
        if self.month < 3 {
            y -= 1;
        }
        let w = (y + y / 4 - y / 100 + y / 400
            + OFFSETS[(self.month - 1) as usize]
            + self.day as u32)
            % 7;
        // Sakamoto yields 0 = Sunday.
        if w == 0 { 7 } else { w as u8 }
    }

    /// Day of year, 1-based.
    pub fn ordinal(self) -> u16 {
        const CUMULATIVE: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];
        let mut ordinal = CUMULATIVE[(self.month - 1) as usize] + self.day as u16;
        if self.month > 2 && Self::is_leap_year(self.year) {
            ordinal += 1;
        }
        ordinal
    }

    /// ISO 8601 week number plus the week-based year it belongs to. Dates in
    /// early January can fall in the previous week-year and dates in late
    /// December in the next one.
    pub fn iso_week_and_year(self) -> (u16, u8) {
        let week = (self.ordinal() as i32 - self.iso_weekday() as i32 + 10) / 7;
        if week < 1 {
            (self.year - 1, iso_weeks_in_year(self.year - 1))
        } else if week > iso_weeks_in_year(self.year) as i32 {
            (self.year + 1, 1)
        } else {
            (self.year, week as u8)
        }
    }
}

/// An ISO year has 53 weeks when January 1st is a Thursday, or a Wednesday in
/// a leap year; otherwise 52.
fn iso_weeks_in_year(year: u16) -> u8 {
    let weekday = CalendarDate::new(year, 1, 1).iso_weekday();
    if weekday == 4 || (weekday == 3 && CalendarDate::is_leap_year(year)) { 53 } else { 52 }
}
