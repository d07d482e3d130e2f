//! Calendar-driven narrative/modifier rotation. Everything here is a pure
//! function of the date and the catalog; the engine decides when to call it
//! and what to log.

use crate::config::RotationOverride;
use crate::content::{ContentCatalog, DungeonDefinition};
use crate::host::RandomSource;
use crate::state::RotationState;
use crate::types::{CalendarDate, DungeonId, LockoutMode, ModifierId, NarrativeId, RotationMode};

/// Packs a date into a seed that is unique per calendar day and strictly
/// increasing over time. Month gets 4 bits of room above its maximum and day
/// 5 bits, so distinct dates can never collide.
pub fn daily_seed(date: CalendarDate) -> u32 {
    date.year as u32 * 512 + date.month as u32 * 32 + date.day as u32
}

/// Weekly analog keyed on the ISO week, so the window flips on Monday and
/// late-December days share the seed of the week they actually belong to.
pub fn weekly_seed(date: CalendarDate) -> u32 {
    let (week_year, week) = date.iso_week_and_year();
    week_year as u32 * 64 + week as u32
}

/// Adjacent daily seeds differ in few bits; this finalizer spreads them so
/// per-dungeon picks do not move in lockstep from one day to the next.
pub(crate) fn mix_seed_stream(seed: u64, stream: u64) -> u64 {
    let mut mixed = seed ^ stream.wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    mixed ^ (mixed >> 33)
}

/// Narratives and modifiers draw from distinct streams, so the same dungeon
/// never correlates its two picks.
fn narrative_stream(dungeon: DungeonId) -> u64 {
    dungeon.0 as u64 * 2
}

fn modifier_stream(dungeon: DungeonId) -> u64 {
    dungeon.0 as u64 * 2 + 1
}

fn pick<T: Copy>(pool: &[T], seed: u32, stream: u64, none: T) -> T {
    if pool.is_empty() {
        return none;
    }
    pool[mix_seed_stream(seed as u64, stream) as usize % pool.len()]
}

/// True when the stored snapshot was computed for this exact date.
pub fn is_current(state: &RotationState, date: CalendarDate) -> bool {
    state.daily_seed == daily_seed(date) && state.weekly_seed == weekly_seed(date)
}

/// A snapshot from a stale or hand-edited save may carry ids the catalog no
/// longer knows. Such a snapshot must be regenerated, not trusted.
pub fn selection_is_valid(state: &RotationState, catalog: &ContentCatalog) -> bool {
    state.selected_narratives.len() == catalog.dungeon_count()
        && state.selected_modifiers.len() == catalog.dungeon_count()
        && state.selected_narratives.iter().all(|&id| catalog.narrative(id).is_some())
        && state.selected_modifiers.iter().all(|&id| catalog.modifier(id).is_some())
}

/// Rebuilds the full selection for every dungeon, then swaps it in whole.
/// Per-entry dungeons store the sentinel; their pick happens at entry time.
pub fn recompute(
    state: &mut RotationState,
    catalog: &ContentCatalog,
    forced: Option<RotationOverride>,
    date: CalendarDate,
) {
    let daily = daily_seed(date);
    let weekly = weekly_seed(date);

    let mut narratives = Vec::with_capacity(catalog.dungeon_count());
    let mut modifiers = Vec::with_capacity(catalog.dungeon_count());
    for dungeon in &catalog.dungeons {
        let (narrative, modifier) = match forced {
            Some(forced) => (forced.narrative, forced.modifier),
            None => match dungeon.rotation {
                RotationMode::Fixed { narrative, modifier } => (narrative, modifier),
                RotationMode::PerEntry => (NarrativeId::NONE, ModifierId::NONE),
                RotationMode::Daily => select_for(dungeon, daily),
                RotationMode::Weekly => select_for(dungeon, weekly),
            },
        };
        narratives.push(narrative);
        modifiers.push(modifier);
    }

    state.daily_seed = daily;
    state.weekly_seed = weekly;
    state.selected_narratives = narratives;
    state.selected_modifiers = modifiers;
}

fn select_for(dungeon: &DungeonDefinition, seed: u32) -> (NarrativeId, ModifierId) {
    (
        pick(&dungeon.narrative_pool, seed, narrative_stream(dungeon.id), NarrativeId::NONE),
        pick(&dungeon.modifier_pool, seed, modifier_stream(dungeon.id), ModifierId::NONE),
    )
}

pub fn selected_narrative(state: &RotationState, dungeon: DungeonId) -> NarrativeId {
    state.selected_narratives.get(dungeon.0 as usize).copied().unwrap_or(NarrativeId::NONE)
}

pub fn selected_modifier(state: &RotationState, dungeon: DungeonId) -> ModifierId {
    state.selected_modifiers.get(dungeon.0 as usize).copied().unwrap_or(ModifierId::NONE)
}

/// Entry-time pick for per-entry dungeons. Uses the host RNG, so two entries
/// on the same day can differ.
pub fn roll_per_entry(
    dungeon: &DungeonDefinition,
    rng: &mut dyn RandomSource,
) -> (NarrativeId, ModifierId) {
    let narrative = if dungeon.narrative_pool.is_empty() {
        NarrativeId::NONE
    } else {
        dungeon.narrative_pool[rng.pick_index(dungeon.narrative_pool.len())]
    };
    let modifier = if dungeon.modifier_pool.is_empty() {
        ModifierId::NONE
    } else {
        dungeon.modifier_pool[rng.pick_index(dungeon.modifier_pool.len())]
    };
    (narrative, modifier)
}

/// A completion in the current daily (or weekly) window blocks re-entry until
/// the window rolls over.
pub fn is_locked_out(state: &RotationState, dungeon: &DungeonDefinition) -> bool {
    let Some(record) = state.completion_for(dungeon.id) else {
        return false;
    };
    match dungeon.lockout {
        LockoutMode::None => false,
        LockoutMode::Daily => record.daily_seed == state.daily_seed,
        LockoutMode::Weekly => record.weekly_seed == state.weekly_seed,
    }
}
