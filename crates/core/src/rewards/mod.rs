//! Rewards module - badges, pilot levels, and celebration gating.

mod rewards_constants;
mod rewards_model;
mod rewards_service;


pub use rewards_constants::{
    BASE_LEVEL_XP, LEVEL_XP_GROWTH, XP_PER_COMPLETED_GOAL, XP_PER_GOAL,
};
pub use rewards_model::{Badge, LevelInfo, Uniform};
pub use rewards_service::{
    badge_catalog, badges_unlocked_at, level_info, should_celebrate, uniform_catalog,
    unlocked_badges, unlocked_uniforms, xp,
};
