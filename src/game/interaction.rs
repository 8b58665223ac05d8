//! Pickup and disposal
//!
//! Both are edge-triggered and stop at the first overlap: one key press
//! never picks up two items or scores in two bins.

use super::bin::BinSet;
use super::player::Player;
use super::trash::{TrashKind, TrashPool};

/// Outcome of dropping trash into a bin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disposal {
    /// What the diver was carrying
    pub kind: TrashKind,
    /// What the bin accepts
    pub bin: TrashKind,
    /// Score change applied
    pub points: i32,
}

impl Disposal {
    #[cfg(test)]
    pub fn correct(&self) -> bool {
        self.kind == self.bin
    }
}

/// Points awarded and taken by disposals
#[derive(Debug, Clone, Copy)]
pub struct ScoreRules {
    pub correct_points: i32,
    pub wrong_penalty: i32,
}

/// Take the first active item overlapping the diver. Whatever was in hand is replaced.
/// Returns the slot and kind taken.
pub fn try_pickup(player: &mut Player, pool: &mut TrashPool) -> Option<(usize, TrashKind)> {
    let hitbox = player.rect();
    let size = pool.item_size();
    let (slot, kind) = pool
        .active()
        .find(|(_, item)| item.rect(size).overlaps(&hitbox))
        .map(|(slot, item)| (slot, item.kind))?;

    pool.deactivate(slot);
    player.carrying = Some(kind);
    Some((slot, kind))
}

/// Drop the carried item into the first bin overlapping the diver and score it.
/// No-op (hands untouched) when empty-handed or not touching any bin.
pub fn try_discard(player: &mut Player, bins: &BinSet, rules: &ScoreRules) -> Option<Disposal> {
    let kind = player.carrying?;
    let bin = bins.first_overlapping(&player.rect())?.accepts;

    let points = if kind == bin {
        rules.correct_points
    } else {
        -rules.wrong_penalty
    };
    player.score += points;
    player.carrying = None;

    Some(Disposal { kind, bin, points })
}
