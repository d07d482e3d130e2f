use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use game_core::{
    BossSpec, CalendarDate, ChaChaRandom, ContentCatalog, DungeonEngine, DungeonId, EngineConfig,
    FixedClock, RecordingSink, RewardOutcome, rotation,
};

#[derive(Parser)]
#[command(author, version, about = "Inspection tools for the dungeon run engine", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the narrative/modifier rotation for a calendar date
    Rotation {
        /// Date as YYYY-MM-DD
        #[arg(short, long)]
        date: String,
        /// Emit the raw rotation state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run one scripted dungeon run and print what happened
    Simulate {
        /// Dungeon id to run
        #[arg(short = 'n', long)]
        dungeon: u8,
        /// Seed for the host RNG
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
        /// Date as YYYY-MM-DD
        #[arg(short, long)]
        date: String,
    },
    /// Summarize a save file
    InspectSave {
        /// Path to the save file
        #[arg(short, long)]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Rotation { date, json } => print_rotation(&date, json),
        Command::Simulate { dungeon, seed, date } => simulate(dungeon, seed, &date),
        Command::InspectSave { path } => inspect_save(&path),
    }
}

fn parse_date(text: &str) -> Result<CalendarDate> {
    let parts: Vec<&str> = text.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        bail!("expected YYYY-MM-DD, got {text:?}");
    };
    let date = CalendarDate::new(
        year.parse().with_context(|| format!("bad year in {text:?}"))?,
        month.parse().with_context(|| format!("bad month in {text:?}"))?,
        day.parse().with_context(|| format!("bad day in {text:?}"))?,
    );
    if date.year == 0 || date.month < 1 || date.month > 12 {
        bail!("date out of range: {text}");
    }
    if date.day < 1 || date.day > days_in_month(date.year, date.month) {
        bail!("date out of range: {text}");
    }
    Ok(date)
}

fn days_in_month(year: u16, month: u8) -> u8 {
    let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if leap {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

fn print_rotation(date: &str, json: bool) -> Result<()> {
    let date = parse_date(date)?;
    let catalog = ContentCatalog::build_default();
    let mut state = game_core::RotationState::empty();
    rotation::recompute(&mut state, &catalog, None, date);

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    println!(
        "Rotation for {:04}-{:02}-{:02} (daily seed {}, weekly seed {})",
        date.year, date.month, date.day, state.daily_seed, state.weekly_seed
    );
    for dungeon in &catalog.dungeons {
        let narrative_id = rotation::selected_narrative(&state, dungeon.id);
        let modifier_id = rotation::selected_modifier(&state, dungeon.id);
        let narrative =
            catalog.narrative(narrative_id).map_or("per-entry", |narrative| narrative.name);
        let modifier = catalog.modifier(modifier_id).map_or("none", |modifier| modifier.name);
        println!("  [{}] {:<18} {} / {}", dungeon.id.0, dungeon.name, narrative, modifier);
    }
    Ok(())
}

fn simulate(dungeon: u8, seed: u64, date: &str) -> Result<()> {
    let date = parse_date(date)?;
    let catalog = ContentCatalog::build_default();
    let mut engine = DungeonEngine::new(catalog, EngineConfig::default())
        .map_err(|e| anyhow::anyhow!("engine setup failed: {e}"))?;
    let clock = FixedClock(date);
    let mut rng = ChaChaRandom::from_seed(seed);
    let mut sink = RecordingSink::new();

    let dungeon = DungeonId(dungeon);
    engine
        .enter_dungeon(dungeon, &clock, &mut rng, &mut sink)
        .map_err(|e| anyhow::anyhow!("entry refused: {e}"))?;

    let narrative = engine.active_narrative(dungeon);
    let modifier = engine.active_modifier(dungeon);
    println!(
        "Entered dungeon {} with narrative {} and modifier {}",
        dungeon.0, narrative.0, modifier.0
    );

    while !engine.is_on_boss_floor() {
        for slot in 0..engine.config().max_trainers_per_room {
            engine.on_trainer_defeated(slot, &mut sink);
        }
        engine
            .advance_room(&mut rng, &mut sink)
            .map_err(|e| anyhow::anyhow!("advance failed: {e}"))?;
    }

    match engine.spawn_boss(&mut sink) {
        BossSpec::None => println!("Boss floor: no boss configured"),
        BossSpec::Trainer { trainer, .. } => println!("Boss floor: trainer {}", trainer.0),
        BossSpec::Creature { species, level, .. } => {
            println!("Boss floor: creature {} at level {level}", species.0)
        }
    }
    engine.on_boss_defeated(&mut sink);

    let score = engine.reward_score();
    let tier = engine.reward_tier();
    let outcome = engine.distribute_rewards(&mut sink);
    println!("Final score: {score} ({tier:?})");
    match outcome {
        RewardOutcome::Granted { item, .. } => println!("Reward: item {}", item.0),
        RewardOutcome::InventoryFull { item, .. } => println!("Reward refused: item {}", item.0),
        RewardOutcome::NothingConfigured => println!("Reward: nothing configured"),
        RewardOutcome::RunInactive => println!("Reward: no completed run"),
    }
    println!("Snapshot hash: {:016x}", engine.snapshot_hash());
    println!("\nEvents:");
    for event in engine.log() {
        println!("  {event:?}");
    }
    Ok(())
}

fn inspect_save(path: &std::path::Path) -> Result<()> {
    let data = game_core::load_state(path)
        .map_err(|e| anyhow::anyhow!("could not load {}: {e}", path.display()))?;

    if data.run.active {
        println!(
            "Active run: dungeon {} room {} score {} (narrative {}, modifier {})",
            data.run.dungeon.0,
            data.run.room_index,
            data.run.score,
            data.run.narrative.0,
            data.run.modifier.0
        );
        println!("  defeated trainers: {}", data.run.defeated.len());
        println!("  boss defeated: {}", data.run.boss_defeated);
    } else {
        println!("No active run");
    }
    println!(
        "Rotation: daily seed {}, weekly seed {}",
        data.rotation.daily_seed, data.rotation.weekly_seed
    );
    for record in &data.rotation.completions {
        println!(
            "  completed dungeon {} in window {}/{}",
            record.dungeon.0, record.daily_seed, record.weekly_seed
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        let date = parse_date("2026-08-28").expect("valid");
        assert_eq!((date.year, date.month, date.day), (2026, 8, 28));
    }

    #[test]
    fn parse_date_rejects_malformed_input() {
        assert!(parse_date("2026/08/28").is_err());
        assert!(parse_date("2026-13-01").is_err());
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("2026-08").is_err());
        assert!(parse_date("0000-01-01").is_err());
    }

    #[test]
    fn parse_date_rejects_impossible_calendar_days() {
        assert!(parse_date("2026-02-31").is_err());
        assert!(parse_date("2026-04-31").is_err());
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2024-02-29").is_ok());
    }
}
