//! Reward evaluation.
//!
//! Everything here is a pure function of the goal collection, recomputed
//! on every change; unlocked state is always re-derivable and never
//! persisted. The only persisted reward state is the per-goal celebration
//! marker, owned by the goal store.

use crate::goals::Goal;

use super::rewards_constants::{
    BadgeSpec, UniformSpec, BADGES, BASE_LEVEL_XP, LEVEL_XP_GROWTH, UNIFORMS,
    XP_PER_COMPLETED_GOAL, XP_PER_GOAL,
};
use super::rewards_model::{Badge, LevelInfo, Uniform};

impl From<&BadgeSpec> for Badge {
    fn from(spec: &BadgeSpec) -> Self {
        Badge {
            label: spec.label.to_string(),
            tooltip: spec.tooltip.to_string(),
            image: spec.image.to_string(),
            unlock_at: spec.unlock_at,
        }
    }
}

impl From<&UniformSpec> for Uniform {
    fn from(spec: &UniformSpec) -> Self {
        Uniform {
            label: spec.label.to_string(),
            tooltip: spec.tooltip.to_string(),
            image: spec.image.to_string(),
            unlock_at_level: spec.unlock_at_level,
        }
    }
}

/// The full badge table, locked entries included, for display.
pub fn badge_catalog() -> Vec<Badge> {
    BADGES.iter().map(Badge::from).collect()
}

/// Badges unlocked at the given goal count. Monotone: a larger collection
/// never unlocks fewer badges.
pub fn unlocked_badges(goal_count: usize) -> Vec<Badge> {
    BADGES
        .iter()
        .filter(|spec| goal_count >= spec.unlock_at)
        .map(Badge::from)
        .collect()
}

/// Badges whose threshold is exactly the given goal count. Used to emit
/// one `BadgeUnlocked` event per crossing when a goal is created.
pub fn badges_unlocked_at(goal_count: usize) -> Vec<Badge> {
    BADGES
        .iter()
        .filter(|spec| spec.unlock_at == goal_count)
        .map(Badge::from)
        .collect()
}

/// The full uniform table for display.
pub fn uniform_catalog() -> Vec<Uniform> {
    UNIFORMS.iter().map(Uniform::from).collect()
}

/// Uniforms unlocked at the given pilot level.
pub fn unlocked_uniforms(level: u32) -> Vec<Uniform> {
    UNIFORMS
        .iter()
        .filter(|spec| level >= spec.unlock_at_level)
        .map(Uniform::from)
        .collect()
}

/// Accumulated XP: every goal earns a creation award, completed goals earn
/// a second one.
pub fn xp(goals: &[Goal]) -> u32 {
    let completed = goals.iter().filter(|g| g.completed).count() as u32;
    goals.len() as u32 * XP_PER_GOAL + completed * XP_PER_COMPLETED_GOAL
}

/// Level derived from XP. The requirement starts at [`BASE_LEVEL_XP`] and
/// grows by `BASE_LEVEL_XP + level * LEVEL_XP_GROWTH` per level cleared.
pub fn level_info(xp: u32) -> LevelInfo {
    let mut level = 1u32;
    let mut remaining = xp;
    let mut required = BASE_LEVEL_XP;

    while remaining >= required {
        remaining -= required;
        level += 1;
        required = BASE_LEVEL_XP + level * LEVEL_XP_GROWTH;
    }

    LevelInfo {
        level,
        xp_into_level: remaining,
        xp_for_next: required,
        percent: f64::from(remaining) / f64::from(required) * 100.0,
    }
}

/// True when the goal has reached its target and its one-time celebration
/// has not been consumed yet.
pub fn should_celebrate(goal: &Goal) -> bool {
    !goal.celebrated && goal.total_saved() >= goal.amount
}
