//! Static reward definitions.
//!
//! Badges unlock on goal-count thresholds, uniforms on pilot levels.
//! Both are derived on demand from the goal collection; no unlocked state
//! is ever persisted.

/// XP awarded for each created goal.
pub const XP_PER_GOAL: u32 = 10;

/// Additional XP awarded once a goal is completed.
pub const XP_PER_COMPLETED_GOAL: u32 = 10;

/// XP required to clear level 1.
pub const BASE_LEVEL_XP: u32 = 100;

/// Per-level growth of the XP requirement.
pub const LEVEL_XP_GROWTH: u32 = 20;

pub(crate) struct BadgeSpec {
    pub label: &'static str,
    pub tooltip: &'static str,
    pub image: &'static str,
    pub unlock_at: usize,
}

pub(crate) const BADGES: [BadgeSpec; 6] = [
    BadgeSpec {
        label: "First Flight",
        tooltip: "Earned for creating your 1st goal",
        image: "/images/first flight badge.png",
        unlock_at: 1,
    },
    BadgeSpec {
        label: "Planning Cadet",
        tooltip: "Earned for creating your 5th goal",
        image: "/images/planning cadet badge.png",
        unlock_at: 5,
    },
    BadgeSpec {
        label: "Goal Getter",
        tooltip: "Earned for creating your 10th goal",
        image: "/images/goal getter badge.png",
        unlock_at: 10,
    },
    BadgeSpec {
        label: "Mission Strategist",
        tooltip: "Earned for creating your 15th goal",
        image: "/images/mission strategist badge.png",
        unlock_at: 15,
    },
    BadgeSpec {
        label: "Flight Commander",
        tooltip: "Earned for creating your 20th goal",
        image: "/images/flight commander badge.png",
        unlock_at: 20,
    },
    BadgeSpec {
        label: "Elite Pathfinder",
        tooltip: "Earned for creating your 25th goal",
        image: "/images/elite pathfinder badge.png",
        unlock_at: 25,
    },
];

pub(crate) struct UniformSpec {
    pub label: &'static str,
    pub tooltip: &'static str,
    pub image: &'static str,
    pub unlock_at_level: u32,
}

pub(crate) const UNIFORMS: [UniformSpec; 5] = [
    UniformSpec {
        label: "Cadet Pilot",
        tooltip: "Cadet Pilot (Level 1)",
        image: "/images/cadet pilot uniform icon.png",
        unlock_at_level: 1,
    },
    UniformSpec {
        label: "First Officer",
        tooltip: "First Officer (Level 4)",
        image: "/images/first officer uniform icon.png",
        unlock_at_level: 4,
    },
    UniformSpec {
        label: "Second Officer",
        tooltip: "Second Officer (Level 7)",
        image: "/images/second officer uniform icon.png",
        unlock_at_level: 7,
    },
    UniformSpec {
        label: "Captain",
        tooltip: "Captain (Level 10)",
        image: "/images/captain uniform icon.png",
        unlock_at_level: 10,
    },
    UniformSpec {
        label: "Elite Pilot",
        tooltip: "Elite Pilot (Level 15)",
        image: "/images/elite pilot uniform icon.png",
        unlock_at_level: 15,
    },
];
