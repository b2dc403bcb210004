// ABOUTME: Engine configuration structs with defaults backed by the constants module
// ABOUTME: Curve and reward parameters are tunable; milestone tables stay fixed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forge Fitness

//! Progression engine configuration.
//!
//! Provides the tunable parameters of the gamification loop — the level-cost
//! curve and the per-session rewards — with defaults drawn from
//! [`crate::constants`]. Milestone threshold tables are deliberately not
//! configurable; their celebration copy is authored per threshold.

use crate::constants::{leveling, rewards};
use crate::errors::{ProgressionError, ProgressionResult};
use serde::{Deserialize, Serialize};

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Level-cost curve settings
    pub leveling: LevelingConfig,
    /// Per-session reward settings
    pub rewards: SessionRewardConfig,
}

/// Level-cost curve configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelingConfig {
    /// Flat XP component of each level past the first
    pub base_cost_xp: u64,
    /// Per-level XP component of each level past the first
    pub cost_slope_xp: u64,
    /// Hard cap on the reachable level
    pub level_cap: u32,
}

/// Session reward configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRewardConfig {
    /// XP granted for logging any completed session
    pub base_session_xp: u64,
    /// XP granted per personal record set during the session
    pub pr_bonus_xp: u64,
    /// XP granted when every planned exercise was finished
    pub completion_bonus_xp: u64,
}

impl Default for LevelingConfig {
    fn default() -> Self {
        Self {
            base_cost_xp: leveling::BASE_LEVEL_COST_XP,
            cost_slope_xp: leveling::LEVEL_COST_SLOPE_XP,
            level_cap: leveling::LEVEL_CAP,
        }
    }
}

impl Default for SessionRewardConfig {
    fn default() -> Self {
        Self {
            base_session_xp: rewards::BASE_SESSION_XP,
            pr_bonus_xp: rewards::PR_BONUS_XP,
            completion_bonus_xp: rewards::COMPLETION_BONUS_XP,
        }
    }
}

impl ProgressionConfig {
    /// Validate value domains before handing the config to an engine
    ///
    /// # Errors
    ///
    /// Returns [`ProgressionError::InvalidConfig`] when the level cap is zero
    /// or the cost curve would make every level free.
    pub fn validate(&self) -> ProgressionResult<()> {
        if self.leveling.level_cap == 0 {
            return Err(ProgressionError::invalid_config("level_cap must be at least 1"));
        }
        if self.leveling.base_cost_xp == 0 && self.leveling.cost_slope_xp == 0 {
            return Err(ProgressionError::invalid_config(
                "level cost curve cannot be flat zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ProgressionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_level_cap_rejected() {
        let mut config = ProgressionConfig::default();
        config.leveling.level_cap = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_flat_zero_curve_rejected() {
        let mut config = ProgressionConfig::default();
        config.leveling.base_cost_xp = 0;
        config.leveling.cost_slope_xp = 0;
        assert!(config.validate().is_err());
    }
}
