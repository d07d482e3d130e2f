//! Read-only content tables: dungeons, rooms, narratives, and modifiers.
//! The engine never mutates these; everything is looked up by small integer id.

use crate::types::{
    BattleStatus, Biome, BossSpec, DungeonId, DungeonTier, GraphicsId, ItemId, LockoutMode, MapId,
    ModifierId, NarrativeId, RotationMode, SpeciesId, TrainerId,
};

pub mod keys {
    use crate::types::{GraphicsId, ItemId, MapId, SpeciesId, TrainerId};

    pub const TRAINER_FILLER: TrainerId = TrainerId(0);
    pub const TRAINER_SURVEYOR_NICO: TrainerId = TrainerId(11);
    pub const TRAINER_SCOUT_CALLA: TrainerId = TrainerId(12);
    pub const TRAINER_CAMPER_ANDRE: TrainerId = TrainerId(13);
    pub const TRAINER_EMBER_GRUNT_A: TrainerId = TrainerId(21);
    pub const TRAINER_EMBER_GRUNT_B: TrainerId = TrainerId(22);
    pub const TRAINER_EMBER_CAPTAIN: TrainerId = TrainerId(23);
    pub const TRAINER_ATHLETE_ALYSSA: TrainerId = TrainerId(31);
    pub const TRAINER_ATHLETE_PAULO: TrainerId = TrainerId(32);
    pub const TRAINER_BLACK_BELT_NOB: TrainerId = TrainerId(33);
    pub const TRAINER_COACH_DYLAN: TrainerId = TrainerId(34);
    pub const TRAINER_POACHER_VERN: TrainerId = TrainerId(41);
    pub const TRAINER_POACHER_SABLE: TrainerId = TrainerId(42);
    pub const TRAINER_POACHER_BOSS: TrainerId = TrainerId(43);
    pub const TRAINER_HIKER_BRUNO: TrainerId = TrainerId(51);
    pub const TRAINER_HIKER_WREN: TrainerId = TrainerId(52);

    pub const GFX_HIKER: GraphicsId = GraphicsId(1);
    pub const GFX_YOUNGSTER: GraphicsId = GraphicsId(2);
    pub const GFX_CAMPER: GraphicsId = GraphicsId(3);
    pub const GFX_EMBER_GRUNT_F: GraphicsId = GraphicsId(4);
    pub const GFX_EMBER_GRUNT_M: GraphicsId = GraphicsId(5);
    pub const GFX_EMBER_CAPTAIN: GraphicsId = GraphicsId(6);
    pub const GFX_TRIATHLETE_F: GraphicsId = GraphicsId(7);
    pub const GFX_TRIATHLETE_M: GraphicsId = GraphicsId(8);
    pub const GFX_BLACK_BELT: GraphicsId = GraphicsId(9);
    pub const GFX_RANGER: GraphicsId = GraphicsId(10);
    pub const GFX_POACHER: GraphicsId = GraphicsId(11);
    pub const GFX_MOUNTAINEER: GraphicsId = GraphicsId(12);

    pub const SPECIES_PEBBLIT: SpeciesId = SpeciesId(101);
    pub const SPECIES_CAVE_BAT: SpeciesId = SpeciesId(102);
    pub const SPECIES_GRAVELMAW: SpeciesId = SpeciesId(103);
    pub const SPECIES_STONE_SERPENT: SpeciesId = SpeciesId(104);
    pub const SPECIES_MAGNETITE: SpeciesId = SpeciesId(105);
    pub const SPECIES_EMBERLING: SpeciesId = SpeciesId(106);
    pub const SPECIES_ASH_STOAT: SpeciesId = SpeciesId(107);
    pub const SPECIES_CINDER_HOUND: SpeciesId = SpeciesId(108);
    pub const SPECIES_THICKET_FOX: SpeciesId = SpeciesId(201);
    pub const SPECIES_BRIAR_BOAR: SpeciesId = SpeciesId(202);
    pub const SPECIES_MOSS_OWL: SpeciesId = SpeciesId(203);
    pub const SPECIES_RIVER_EEL: SpeciesId = SpeciesId(204);
    pub const SPECIES_FROST_WOLF: SpeciesId = SpeciesId(301);
    pub const SPECIES_RIME_CONDOR: SpeciesId = SpeciesId(302);
    pub const SPECIES_GLACIER_TITAN: SpeciesId = SpeciesId(303);

    pub const ITEM_PLAIN_BALL: ItemId = ItemId(1);
    pub const ITEM_GREAT_BALL: ItemId = ItemId(2);
    pub const ITEM_ULTRA_BALL: ItemId = ItemId(3);
    pub const ITEM_HEAT_ROCK: ItemId = ItemId(10);
    pub const ITEM_FLAME_CHARM: ItemId = ItemId(11);
    pub const ITEM_FIRE_STONE: ItemId = ItemId(12);
    pub const ITEM_CARBOS: ItemId = ItemId(20);
    pub const ITEM_CHOICE_SCARF: ItemId = ItemId(21);
    pub const ITEM_HARD_STONE: ItemId = ItemId(30);
    pub const ITEM_NET_BALL: ItemId = ItemId(31);
    pub const ITEM_ICICLE_PLATE: ItemId = ItemId(40);
    pub const ITEM_NEVER_MELT_ICE: ItemId = ItemId(41);

    pub const MAP_CAVE_ROOM_1: MapId = MapId(100);
    pub const MAP_CAVE_ROOM_2: MapId = MapId(101);
    pub const MAP_CAVE_ROOM_3: MapId = MapId(102);
    pub const MAP_CAVE_ROOM_4: MapId = MapId(103);
    pub const MAP_CAVE_ROOM_5: MapId = MapId(104);
    pub const MAP_CAVE_BOSS: MapId = MapId(109);
    pub const MAP_FOREST_ROOM_1: MapId = MapId(200);
    pub const MAP_FOREST_ROOM_2: MapId = MapId(201);
    pub const MAP_FOREST_ROOM_3: MapId = MapId(202);
    pub const MAP_FOREST_BOSS: MapId = MapId(209);
    pub const MAP_MOUNTAIN_ROOM_1: MapId = MapId(300);
    pub const MAP_MOUNTAIN_ROOM_2: MapId = MapId(301);
    pub const MAP_MOUNTAIN_ROOM_3: MapId = MapId(302);
    pub const MAP_MOUNTAIN_ROOM_4: MapId = MapId(303);
    pub const MAP_MOUNTAIN_BOSS: MapId = MapId(309);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomDefinition {
    pub map: MapId,
    pub trainer_count_min: u8,
    pub trainer_count_max: u8,
    pub spawn: (u8, u8),
    pub exit: (u8, u8),
}

#[derive(Clone, Debug)]
pub struct DungeonDefinition {
    pub id: DungeonId,
    pub name: &'static str,
    pub tier: DungeonTier,
    pub biome: Biome,
    pub base_level: u8,
    pub level_range: u8,
    /// Rooms before the boss floor; the room pool may be smaller and is
    /// indexed modulo its length.
    pub room_count: u8,
    pub rooms: Vec<RoomDefinition>,
    pub boss_room: RoomDefinition,
    pub narrative_pool: Vec<NarrativeId>,
    pub modifier_pool: Vec<ModifierId>,
    pub lockout: LockoutMode,
    pub rotation: RotationMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrainerEntry {
    pub trainer: TrainerId,
    pub graphics: GraphicsId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncounterSlot {
    pub min_level: u8,
    pub max_level: u8,
    pub species: SpeciesId,
}

/// Twelve slots distributed by rarity (20/20/10/10/10/10/5/5/4/4/1/1 percent),
/// matching the host battle engine's expectations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncounterTable {
    pub encounter_rate: u8,
    pub slots: Vec<EncounterSlot>,
}

/// Flavor text pools; one line is drawn at random when displayed.
#[derive(Clone, Debug, Default)]
pub struct DialogSet {
    pub trainer_intro: Vec<&'static str>,
    pub trainer_defeat: Vec<&'static str>,
    pub boss_intro: Vec<&'static str>,
    pub boss_defeat: Vec<&'static str>,
    pub boss_victory: Vec<&'static str>,
}

#[derive(Clone, Debug)]
pub struct Narrative {
    pub id: NarrativeId,
    pub name: &'static str,
    pub description: &'static str,
    pub trainer_pool: Vec<TrainerEntry>,
    pub land_encounters: Option<EncounterTable>,
    pub water_encounters: Option<EncounterTable>,
    pub boss: BossSpec,
    /// Reward per tier, Bronze first. May be shorter than the tier count;
    /// empty means the narrative grants nothing.
    pub reward_items: Vec<ItemId>,
    pub dialog: DialogSet,
}

#[derive(Clone, Debug)]
pub struct Modifier {
    pub id: ModifierId,
    pub name: &'static str,
    pub description: &'static str,
    pub status: BattleStatus,
    /// Turns the status lasts; 0 means the whole battle.
    pub status_duration: u8,
    pub inverse_types: bool,
    /// Signed level delta applied to enemies.
    pub level_delta: i8,
    pub exp_multiplier: u8,
    pub money_multiplier: u8,
}

impl Modifier {
    fn neutral(id: ModifierId, name: &'static str, description: &'static str) -> Self {
        Self {
            id,
            name,
            description,
            status: BattleStatus::None,
            status_duration: 0,
            inverse_types: false,
            level_delta: 0,
            exp_multiplier: 1,
            money_multiplier: 1,
        }
    }

    fn weather(
        id: ModifierId,
        name: &'static str,
        description: &'static str,
        status: BattleStatus,
    ) -> Self {
        Self { status, ..Self::neutral(id, name, description) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentError {
    EmptyRoomPool { dungeon: DungeonId },
    ZeroRoomCount { dungeon: DungeonId },
    TrainerBoundsInverted { dungeon: DungeonId, room: usize },
    UnknownNarrative { dungeon: DungeonId, narrative: NarrativeId },
    UnknownModifier { dungeon: DungeonId, modifier: ModifierId },
    TrainerBossWithoutPool { narrative: NarrativeId },
}

pub struct ContentCatalog {
    pub dungeons: Vec<DungeonDefinition>,
    pub narratives: Vec<Narrative>,
    pub modifiers: Vec<Modifier>,
}

impl ContentCatalog {
    pub fn dungeon(&self, id: DungeonId) -> Option<&DungeonDefinition> {
        self.dungeons.get(id.0 as usize)
    }

    pub fn narrative(&self, id: NarrativeId) -> Option<&Narrative> {
        self.narratives.get(id.0 as usize)
    }

    pub fn modifier(&self, id: ModifierId) -> Option<&Modifier> {
        self.modifiers.get(id.0 as usize)
    }

    pub fn dungeon_count(&self) -> usize {
        self.dungeons.len()
    }

    /// Room definition for a given progress index, reusing the pool modulo
    /// its length when the pool is smaller than the dungeon's room count.
    pub fn room_for_index<'a>(
        &self,
        dungeon: &'a DungeonDefinition,
        room_index: u8,
    ) -> &'a RoomDefinition {
        &dungeon.rooms[room_index as usize % dungeon.rooms.len()]
    }

    pub fn validate(&self) -> Result<(), Vec<ContentError>> {
        let mut errors = Vec::new();
        for dungeon in &self.dungeons {
            if dungeon.room_count == 0 {
                errors.push(ContentError::ZeroRoomCount { dungeon: dungeon.id });
            }
            if dungeon.rooms.is_empty() {
                errors.push(ContentError::EmptyRoomPool { dungeon: dungeon.id });
            }
            for (index, room) in dungeon.rooms.iter().enumerate() {
                if room.trainer_count_min > room.trainer_count_max {
                    errors.push(ContentError::TrainerBoundsInverted {
                        dungeon: dungeon.id,
                        room: index,
                    });
                }
            }
            for &narrative in &dungeon.narrative_pool {
                if self.narrative(narrative).is_none() {
                    errors.push(ContentError::UnknownNarrative { dungeon: dungeon.id, narrative });
                }
            }
            for &modifier in &dungeon.modifier_pool {
                if self.modifier(modifier).is_none() {
                    errors.push(ContentError::UnknownModifier { dungeon: dungeon.id, modifier });
                }
            }
        }
        for narrative in &self.narratives {
            if matches!(narrative.boss, BossSpec::Trainer { .. }) && narrative.trainer_pool.is_empty()
            {
                errors.push(ContentError::TrainerBossWithoutPool { narrative: narrative.id });
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    pub fn build_default() -> Self {
        Self {
            dungeons: vec![
                DungeonDefinition {
                    id: DungeonId(0),
                    name: "Whispering Hollow",
                    tier: DungeonTier::Early,
                    biome: Biome::Cave,
                    base_level: 20,
                    level_range: 5,
                    room_count: 5,
                    rooms: vec![
                        room(keys::MAP_CAVE_ROOM_1, 1, 2, (3, 3), (3, 12)),
                        room(keys::MAP_CAVE_ROOM_2, 2, 3, (9, 8), (9, 1)),
                        room(keys::MAP_CAVE_ROOM_3, 2, 4, (11, 9), (2, 9)),
                        room(keys::MAP_CAVE_ROOM_4, 2, 4, (8, 1), (8, 13)),
                        room(keys::MAP_CAVE_ROOM_5, 3, 4, (12, 8), (1, 8)),
                    ],
                    boss_room: room(keys::MAP_CAVE_BOSS, 0, 0, (9, 12), (9, 1)),
                    narrative_pool: vec![NarrativeId(1), NarrativeId(2), NarrativeId(3)],
                    modifier_pool: vec![
                        ModifierId(1),
                        ModifierId(3),
                        ModifierId(7),
                        ModifierId(8),
                        ModifierId(9),
                    ],
                    lockout: LockoutMode::None,
                    rotation: RotationMode::Daily,
                },
                DungeonDefinition {
                    id: DungeonId(1),
                    name: "Tanglewood",
                    tier: DungeonTier::Mid,
                    biome: Biome::Forest,
                    base_level: 40,
                    level_range: 5,
                    room_count: 5,
                    rooms: vec![
                        room(keys::MAP_FOREST_ROOM_1, 1, 2, (9, 8), (9, 1)),
                        room(keys::MAP_FOREST_ROOM_2, 2, 3, (9, 8), (9, 1)),
                        room(keys::MAP_FOREST_ROOM_3, 2, 4, (9, 8), (9, 1)),
                    ],
                    boss_room: room(keys::MAP_FOREST_BOSS, 0, 0, (9, 12), (9, 1)),
                    narrative_pool: vec![NarrativeId(4)],
                    modifier_pool: vec![ModifierId(2), ModifierId(7), ModifierId(8)],
                    lockout: LockoutMode::Daily,
                    rotation: RotationMode::Weekly,
                },
                DungeonDefinition {
                    id: DungeonId(2),
                    name: "Frostspire",
                    tier: DungeonTier::Late,
                    biome: Biome::Mountain,
                    base_level: 60,
                    level_range: 5,
                    room_count: 5,
                    rooms: vec![
                        room(keys::MAP_MOUNTAIN_ROOM_1, 2, 3, (9, 8), (9, 1)),
                        room(keys::MAP_MOUNTAIN_ROOM_2, 2, 3, (9, 8), (9, 1)),
                        room(keys::MAP_MOUNTAIN_ROOM_3, 3, 4, (9, 8), (9, 1)),
                        room(keys::MAP_MOUNTAIN_ROOM_4, 3, 4, (9, 8), (9, 1)),
                    ],
                    boss_room: room(keys::MAP_MOUNTAIN_BOSS, 0, 0, (9, 12), (9, 1)),
                    narrative_pool: vec![NarrativeId(5)],
                    modifier_pool: vec![
                        ModifierId(4),
                        ModifierId(5),
                        ModifierId(7),
                        ModifierId(10),
                    ],
                    lockout: LockoutMode::Weekly,
                    rotation: RotationMode::Daily,
                },
            ],
            narratives: vec![
                Narrative {
                    id: NarrativeId::NONE,
                    name: "None",
                    description: "No narrative active.",
                    trainer_pool: Vec::new(),
                    land_encounters: None,
                    water_encounters: None,
                    boss: BossSpec::None,
                    reward_items: Vec::new(),
                    dialog: DialogSet::default(),
                },
                Narrative {
                    id: NarrativeId(1),
                    name: "Survey Expedition",
                    description: "A survey team is mapping the hollow and woke something old.",
                    trainer_pool: vec![
                        entry(keys::TRAINER_SURVEYOR_NICO, keys::GFX_HIKER),
                        entry(keys::TRAINER_SCOUT_CALLA, keys::GFX_YOUNGSTER),
                        entry(keys::TRAINER_CAMPER_ANDRE, keys::GFX_CAMPER),
                    ],
                    land_encounters: Some(EncounterTable {
                        encounter_rate: 4,
                        slots: vec![
                            slot(18, 20, keys::SPECIES_PEBBLIT),
                            slot(18, 20, keys::SPECIES_CAVE_BAT),
                            slot(19, 21, keys::SPECIES_PEBBLIT),
                            slot(19, 21, keys::SPECIES_CAVE_BAT),
                            slot(18, 20, keys::SPECIES_GRAVELMAW),
                            slot(19, 21, keys::SPECIES_GRAVELMAW),
                            slot(20, 22, keys::SPECIES_STONE_SERPENT),
                            slot(20, 22, keys::SPECIES_STONE_SERPENT),
                            slot(21, 23, keys::SPECIES_MAGNETITE),
                            slot(21, 23, keys::SPECIES_MAGNETITE),
                            slot(22, 24, keys::SPECIES_GLACIER_TITAN),
                            slot(22, 24, keys::SPECIES_GLACIER_TITAN),
                        ],
                    }),
                    water_encounters: None,
                    boss: BossSpec::Creature {
                        species: keys::SPECIES_STONE_SERPENT,
                        level: 28,
                        held_item: Some(keys::ITEM_HARD_STONE),
                        stat_boosts: [1, 1, 1, 1, 1, 1, 1],
                    },
                    reward_items: vec![
                        keys::ITEM_PLAIN_BALL,
                        keys::ITEM_GREAT_BALL,
                        keys::ITEM_ULTRA_BALL,
                    ],
                    dialog: DialogSet {
                        trainer_intro: vec![
                            "This tunnel isn't on any of my charts!",
                            "Watch your step, the floor gives way here.",
                            "You shouldn't be past the survey line!",
                        ],
                        trainer_defeat: vec![
                            "I'll mark you down as a hazard.",
                            "Back to the drafting table...",
                            "The depths keep their secrets, I suppose.",
                        ],
                        boss_intro: vec![
                            "The ground trembles as something massive uncoils from the dark!",
                        ],
                        boss_defeat: vec!["..."],
                        boss_victory: vec!["The cavern falls silent once more."],
                    },
                },
                Narrative {
                    id: NarrativeId(2),
                    name: "Ember Gang Heist",
                    description: "The Ember Gang is stripping the hollow for fire stones.",
                    trainer_pool: vec![
                        entry(keys::TRAINER_EMBER_GRUNT_A, keys::GFX_EMBER_GRUNT_F),
                        entry(keys::TRAINER_EMBER_GRUNT_B, keys::GFX_EMBER_GRUNT_M),
                    ],
                    land_encounters: Some(EncounterTable {
                        encounter_rate: 4,
                        slots: vec![
                            slot(18, 20, keys::SPECIES_EMBERLING),
                            slot(18, 20, keys::SPECIES_ASH_STOAT),
                            slot(19, 21, keys::SPECIES_EMBERLING),
                            slot(19, 21, keys::SPECIES_ASH_STOAT),
                            slot(18, 20, keys::SPECIES_CINDER_HOUND),
                            slot(19, 21, keys::SPECIES_CINDER_HOUND),
                            slot(20, 22, keys::SPECIES_CAVE_BAT),
                            slot(20, 22, keys::SPECIES_CAVE_BAT),
                            slot(21, 23, keys::SPECIES_CINDER_HOUND),
                            slot(21, 23, keys::SPECIES_CINDER_HOUND),
                            slot(22, 24, keys::SPECIES_EMBERLING),
                            slot(22, 24, keys::SPECIES_EMBERLING),
                        ],
                    }),
                    water_encounters: None,
                    boss: BossSpec::Trainer {
                        trainer: keys::TRAINER_EMBER_CAPTAIN,
                        graphics: keys::GFX_EMBER_CAPTAIN,
                    },
                    reward_items: vec![
                        keys::ITEM_HEAT_ROCK,
                        keys::ITEM_FLAME_CHARM,
                        keys::ITEM_FIRE_STONE,
                    ],
                    dialog: DialogSet {
                        trainer_intro: vec![
                            "The gang will prevail!",
                            "Out of my way, intruder!",
                            "You'll never stop the Ember Gang!",
                        ],
                        trainer_defeat: vec![
                            "The gang won't forget this...",
                            "Impossible!",
                            "I've failed the job!",
                        ],
                        boss_intro: vec![
                            "You've made it this far... but this is where your run ends!",
                            "So, you're the one interfering with our operation!",
                        ],
                        boss_defeat: vec!["Impossible...!", "You're stronger than I thought."],
                        boss_victory: vec!["The Ember Gang retreats in defeat!"],
                    },
                },
                Narrative {
                    id: NarrativeId(3),
                    name: "Fitness Club",
                    description: "A running club has claimed the tunnels for altitude training.",
                    trainer_pool: vec![
                        entry(keys::TRAINER_ATHLETE_ALYSSA, keys::GFX_TRIATHLETE_F),
                        entry(keys::TRAINER_ATHLETE_PAULO, keys::GFX_TRIATHLETE_M),
                        entry(keys::TRAINER_BLACK_BELT_NOB, keys::GFX_BLACK_BELT),
                        entry(keys::TRAINER_COACH_DYLAN, keys::GFX_TRIATHLETE_M),
                    ],
                    land_encounters: None,
                    water_encounters: None,
                    boss: BossSpec::Trainer {
                        trainer: keys::TRAINER_COACH_DYLAN,
                        graphics: keys::GFX_TRIATHLETE_M,
                    },
                    // Only two tiers defined; Gold clamps to the last entry.
                    reward_items: vec![keys::ITEM_CARBOS, keys::ITEM_CHOICE_SCARF],
                    dialog: DialogSet {
                        trainer_intro: vec![
                            "Gotta go fast!",
                            "Can you keep up?",
                            "One more lap!",
                        ],
                        trainer_defeat: vec![
                            "I could use a break.",
                            "So fast!",
                            "Can you slow down?",
                        ],
                        boss_intro: vec![
                            "You want to join the club? It's pretty exclusive!",
                            "Are you lost?",
                        ],
                        boss_defeat: vec!["Alright, you should be here.", "I get it!"],
                        boss_victory: vec!["Time for an ice bath!"],
                    },
                },
                Narrative {
                    id: NarrativeId(4),
                    name: "Poacher Ring",
                    description: "Poachers are netting rare creatures deep in the Tanglewood.",
                    trainer_pool: vec![
                        entry(keys::TRAINER_POACHER_VERN, keys::GFX_POACHER),
                        entry(keys::TRAINER_POACHER_SABLE, keys::GFX_POACHER),
                    ],
                    land_encounters: Some(EncounterTable {
                        encounter_rate: 4,
                        slots: vec![
                            slot(38, 40, keys::SPECIES_THICKET_FOX),
                            slot(38, 40, keys::SPECIES_BRIAR_BOAR),
                            slot(39, 41, keys::SPECIES_THICKET_FOX),
                            slot(39, 41, keys::SPECIES_BRIAR_BOAR),
                            slot(38, 40, keys::SPECIES_MOSS_OWL),
                            slot(39, 41, keys::SPECIES_MOSS_OWL),
                            slot(40, 42, keys::SPECIES_MOSS_OWL),
                            slot(40, 42, keys::SPECIES_BRIAR_BOAR),
                            slot(41, 43, keys::SPECIES_THICKET_FOX),
                            slot(41, 43, keys::SPECIES_MOSS_OWL),
                            slot(42, 44, keys::SPECIES_BRIAR_BOAR),
                            slot(42, 44, keys::SPECIES_THICKET_FOX),
                        ],
                    }),
                    water_encounters: Some(EncounterTable {
                        encounter_rate: 2,
                        slots: vec![
                            slot(38, 42, keys::SPECIES_RIVER_EEL),
                            slot(38, 42, keys::SPECIES_RIVER_EEL),
                            slot(40, 44, keys::SPECIES_RIVER_EEL),
                            slot(40, 44, keys::SPECIES_RIVER_EEL),
                            slot(42, 45, keys::SPECIES_RIVER_EEL),
                        ],
                    }),
                    boss: BossSpec::Trainer {
                        trainer: keys::TRAINER_POACHER_BOSS,
                        graphics: keys::GFX_RANGER,
                    },
                    reward_items: vec![
                        keys::ITEM_PLAIN_BALL,
                        keys::ITEM_NET_BALL,
                        keys::ITEM_ULTRA_BALL,
                    ],
                    dialog: DialogSet {
                        trainer_intro: vec![
                            "This haul is worth more than your life!",
                            "Nobody walks away from the ring.",
                        ],
                        trainer_defeat: vec!["The boss won't like this.", "Scatter!"],
                        boss_intro: vec!["You've cost me a fortune. Time to collect."],
                        boss_defeat: vec!["The ring... is finished."],
                        boss_victory: vec!["The captured creatures scatter into the wood."],
                    },
                },
                Narrative {
                    id: NarrativeId(5),
                    name: "Summit Challenge",
                    description: "Mountaineers dare challengers to reach the frozen peak.",
                    trainer_pool: vec![
                        entry(keys::TRAINER_HIKER_BRUNO, keys::GFX_MOUNTAINEER),
                        entry(keys::TRAINER_HIKER_WREN, keys::GFX_MOUNTAINEER),
                    ],
                    land_encounters: Some(EncounterTable {
                        encounter_rate: 4,
                        slots: vec![
                            slot(58, 60, keys::SPECIES_FROST_WOLF),
                            slot(58, 60, keys::SPECIES_RIME_CONDOR),
                            slot(59, 61, keys::SPECIES_FROST_WOLF),
                            slot(59, 61, keys::SPECIES_RIME_CONDOR),
                            slot(58, 60, keys::SPECIES_PEBBLIT),
                            slot(59, 61, keys::SPECIES_PEBBLIT),
                            slot(60, 62, keys::SPECIES_RIME_CONDOR),
                            slot(60, 62, keys::SPECIES_FROST_WOLF),
                            slot(61, 63, keys::SPECIES_GLACIER_TITAN),
                            slot(61, 63, keys::SPECIES_GLACIER_TITAN),
                            slot(62, 64, keys::SPECIES_GLACIER_TITAN),
                            slot(62, 64, keys::SPECIES_GLACIER_TITAN),
                        ],
                    }),
                    water_encounters: None,
                    boss: BossSpec::Creature {
                        species: keys::SPECIES_GLACIER_TITAN,
                        level: 68,
                        held_item: Some(keys::ITEM_NEVER_MELT_ICE),
                        stat_boosts: [1, 1, 1, 1, 1, 1, 0],
                    },
                    reward_items: vec![
                        keys::ITEM_CARBOS,
                        keys::ITEM_ICICLE_PLATE,
                        keys::ITEM_NEVER_MELT_ICE,
                    ],
                    dialog: DialogSet {
                        trainer_intro: vec![
                            "The summit takes no shortcuts!",
                            "Thin air up here. Thinner patience.",
                        ],
                        trainer_defeat: vec!["Catch your breath, you've earned it."],
                        boss_intro: vec!["The blizzard parts around a towering shape of ice!"],
                        boss_defeat: vec!["..."],
                        boss_victory: vec!["The peak is yours, for today."],
                    },
                },
            ],
            modifiers: vec![
                Modifier::neutral(ModifierId::NONE, "No Modifier", "No special conditions active."),
                Modifier::weather(
                    ModifierId(1),
                    "Permanent Sunlight",
                    "Harsh sunlight shines throughout the dungeon.",
                    BattleStatus::Sun,
                ),
                Modifier::weather(
                    ModifierId(2),
                    "Permanent Rain",
                    "Rain falls constantly throughout the dungeon.",
                    BattleStatus::Rain,
                ),
                Modifier::weather(
                    ModifierId(3),
                    "Permanent Sandstorm",
                    "A sandstorm rages throughout the dungeon.",
                    BattleStatus::Sandstorm,
                ),
                Modifier::weather(
                    ModifierId(4),
                    "Permanent Hail",
                    "Hail falls constantly throughout the dungeon.",
                    BattleStatus::Hail,
                ),
                Modifier::weather(
                    ModifierId(5),
                    "Permanent Snow",
                    "Snow falls constantly throughout the dungeon.",
                    BattleStatus::Snow,
                ),
                Modifier::weather(
                    ModifierId(6),
                    "Strong Winds",
                    "Mysterious strong winds blow throughout the dungeon.",
                    BattleStatus::StrongWinds,
                ),
                Modifier {
                    status_duration: 5,
                    ..Modifier::weather(
                        ModifierId(7),
                        "Trick Room",
                        "Trick Room is active for five turns at battle start.",
                        BattleStatus::TrickRoom,
                    )
                },
                Modifier {
                    inverse_types: true,
                    ..Modifier::neutral(
                        ModifierId(8),
                        "Inverse Battle",
                        "Type matchups are inverted in all battles.",
                    )
                },
                Modifier {
                    exp_multiplier: 2,
                    ..Modifier::neutral(
                        ModifierId(9),
                        "Double Experience",
                        "All battles grant double experience.",
                    )
                },
                Modifier {
                    level_delta: 5,
                    money_multiplier: 2,
                    ..Modifier::neutral(
                        ModifierId(10),
                        "Expert Challenge",
                        "All enemies are five levels higher.",
                    )
                },
            ],
        }
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::build_default()
    }
}

fn room(
    map: MapId,
    trainer_count_min: u8,
    trainer_count_max: u8,
    spawn: (u8, u8),
    exit: (u8, u8),
) -> RoomDefinition {
    RoomDefinition { map, trainer_count_min, trainer_count_max, spawn, exit }
}

fn entry(trainer: TrainerId, graphics: GraphicsId) -> TrainerEntry {
    TrainerEntry { trainer, graphics }
}

fn slot(min_level: u8, max_level: u8, species: SpeciesId) -> EncounterSlot {
    EncounterSlot { min_level, max_level, species }
}
