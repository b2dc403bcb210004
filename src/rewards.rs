// ABOUTME: Experience awarded for one completed workout session
// ABOUTME: Flat base plus personal-record and full-completion bonuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forge Fitness

//! Session rewards.

use crate::config::SessionRewardConfig;

/// XP earned by one completed session
///
/// Flat base award, plus a bonus per personal record set during the session,
/// plus a completion bonus when every planned exercise was finished. Pure and
/// total; no clamping.
#[must_use]
pub fn session_xp(config: &SessionRewardConfig, pr_count: u32, completed: bool) -> u64 {
    let mut xp = config.base_session_xp + u64::from(pr_count) * config.pr_bonus_xp;
    if completed {
        xp += config.completion_bonus_xp;
    }
    xp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_award_only() {
        let config = SessionRewardConfig::default();
        assert_eq!(session_xp(&config, 0, false), 80);
    }

    #[test]
    fn test_pr_and_completion_bonuses_stack() {
        let config = SessionRewardConfig::default();
        assert_eq!(session_xp(&config, 2, true), 80 + 40 + 15);
    }

    #[test]
    fn test_completion_bonus_alone() {
        let config = SessionRewardConfig::default();
        assert_eq!(session_xp(&config, 0, true), 95);
    }
}
