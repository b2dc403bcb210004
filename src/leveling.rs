// ABOUTME: Experience-to-level curve: per-level costs, cumulative-sum inversion, in-level progress
// ABOUTME: Linear increasing cost with a hard cap calibrated for a multi-year horizon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forge Fitness

//! Experience-to-level curve.
//!
//! Each level past the first costs `base + slope * level` XP, so per-level
//! cost grows linearly while cumulative cost grows quadratically. With the
//! default parameters the cap (level 100) sits at 43,263 cumulative XP —
//! roughly 450 to 550 completed sessions at typical earn rates.
//!
//! Deriving a level from lifetime XP inverts the cumulative sum by walking
//! the curve upward; the cap bounds the walk, so no closed-form inverse is
//! needed and the guarantees (monotonic, never skips a level, clamps at the
//! cap) fall out directly.

use crate::config::LevelingConfig;
use serde::{Deserialize, Serialize};

/// Position within the current level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// XP earned since the current level was reached
    pub current: u64,
    /// XP required to reach the next level
    pub required: u64,
    /// Whole-percent progress toward the next level, capped at 100
    pub percent: u8,
}

/// Experience-to-level calculator
#[derive(Debug, Clone, Default)]
pub struct LevelingCurve {
    config: LevelingConfig,
}

impl LevelingCurve {
    /// Curve with the default cost parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Curve with custom cost parameters
    #[must_use]
    pub fn with_config(config: LevelingConfig) -> Self {
        Self { config }
    }

    /// XP cost of reaching `level` from the level below it
    ///
    /// Level 1 is the starting level and costs nothing.
    #[must_use]
    pub fn xp_for_level(&self, level: u32) -> u64 {
        if level <= 1 {
            0
        } else {
            self.config.base_cost_xp + self.config.cost_slope_xp * u64::from(level)
        }
    }

    /// Total XP required to sit exactly at the start of `level`
    #[must_use]
    pub fn cumulative_xp_for_level(&self, level: u32) -> u64 {
        (2..=level).map(|step| self.xp_for_level(step)).sum()
    }

    /// Level reached with `total_xp` lifetime experience
    ///
    /// Monotonic non-decreasing in `total_xp`, never skips a level, and
    /// clamps at the cap for any input at or beyond the cap's cumulative
    /// cost.
    #[must_use]
    pub fn level_for_xp(&self, total_xp: u64) -> u32 {
        let mut level = 1;
        let mut spent = 0_u64;
        while level < self.config.level_cap {
            let next_cost = self.xp_for_level(level + 1);
            if spent + next_cost > total_xp {
                break;
            }
            spent += next_cost;
            level += 1;
        }
        level
    }

    /// Progress from `current_level` toward the next one
    ///
    /// At or above the cap there is nothing left to earn and the result pins
    /// to `{0, 0, 100}`. The percentage is floored and capped at 100, so a
    /// `total_xp` inconsistent with `current_level` cannot push it past the
    /// bar's end.
    #[must_use]
    pub fn progress_toward_next(&self, total_xp: u64, current_level: u32) -> LevelProgress {
        if current_level >= self.config.level_cap {
            return LevelProgress {
                current: 0,
                required: 0,
                percent: 100,
            };
        }
        let current = total_xp.saturating_sub(self.cumulative_xp_for_level(current_level));
        let required = self.xp_for_level(current_level + 1);
        let percent = if required == 0 {
            100
        } else {
            ((current * 100) / required).min(100) as u8
        };
        LevelProgress {
            current,
            required,
            percent,
        }
    }
}
