//! Reward domain models.

use serde::{Deserialize, Serialize};

/// A goal-count achievement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub label: String,
    pub tooltip: String,
    pub image: String,
    pub unlock_at: usize,
}

/// A level-gated cosmetic unlock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Uniform {
    pub label: String,
    pub tooltip: String,
    pub image: String,
    pub unlock_at_level: u32,
}

/// Pilot level derived from accumulated XP.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    pub level: u32,
    pub xp_into_level: u32,
    pub xp_for_next: u32,
    pub percent: f64,
}
