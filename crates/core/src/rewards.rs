//! Score-to-reward mapping, kept pure so the cutoffs are trivially testable.

use crate::config::EngineConfig;
use crate::content::Narrative;
use crate::types::{ItemId, RewardTier};

pub fn tier_for_score(score: u16, config: &EngineConfig) -> RewardTier {
    if score >= config.gold_threshold {
        RewardTier::Gold
    } else if score >= config.silver_threshold {
        RewardTier::Silver
    } else {
        RewardTier::Bronze
    }
}

/// The item a narrative grants for a tier. A short reward list clamps to its
/// last entry rather than dropping the reward; `clamped` reports when that
/// happened so the engine can log it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardPick {
    pub item: ItemId,
    pub clamped: bool,
}

pub fn reward_for_tier(narrative: &Narrative, tier: RewardTier) -> Option<RewardPick> {
    let last = narrative.reward_items.len().checked_sub(1)?;
    let wanted = tier.reward_index();
    let index = wanted.min(last);
    Some(RewardPick { item: narrative.reward_items[index], clamped: index < wanted })
}
