// ABOUTME: Fixed numeric tables for the progression engine
// ABOUTME: Level-cost curve, session rewards, milestone thresholds, display cutoffs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forge Fitness

//! Progression constants organized by domain.
//!
//! These values calibrate the whole gamification loop and are tuned together:
//! changing one side (say, session rewards) shifts how quickly users walk the
//! level curve and hit milestones.

/// Level-cost curve parameters
pub mod leveling {
    /// Flat XP component of the cost of every level past the first
    pub const BASE_LEVEL_COST_XP: u64 = 80;

    /// Per-level XP component of the cost of every level past the first
    ///
    /// Together with the flat component this gives a linear, increasing cost
    /// curve: level `n` costs `80 + 7n` XP.
    pub const LEVEL_COST_SLOPE_XP: u64 = 7;

    /// Hard cap on the reachable level
    ///
    /// Cumulative cost at the cap is 43,263 XP — roughly 450 to 550 completed
    /// sessions at typical earn rates, a multi-year engagement horizon.
    pub const LEVEL_CAP: u32 = 100;
}

/// Per-session experience rewards
pub mod rewards {
    /// XP granted for logging any completed session
    pub const BASE_SESSION_XP: u64 = 80;

    /// XP granted per personal record set during the session
    pub const PR_BONUS_XP: u64 = 20;

    /// XP granted when every planned exercise was finished
    pub const COMPLETION_BONUS_XP: u64 = 15;
}

/// Celebration thresholds, ascending
pub mod milestones {
    /// Lifetime completed-session counts that earn a celebration
    pub const SESSION_THRESHOLDS: [u64; 6] = [10, 25, 50, 100, 250, 500];

    /// Lifetime lifted volume (kilograms) that earns a celebration
    pub const TONNAGE_THRESHOLDS_KG: [f64; 5] =
        [10_000.0, 50_000.0, 100_000.0, 500_000.0, 1_000_000.0];
}

/// Display formatting cutoffs
pub mod display {
    /// Volume at or above this renders in tonnes instead of kilograms
    pub const TONNES_CUTOFF_KG: f64 = 1000.0;

    /// Kilograms per tonne
    pub const KG_PER_TONNE: f64 = 1000.0;
}
