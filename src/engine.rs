// ABOUTME: Session-completion facade folding one workout into per-user progress
// ABOUTME: Pure by-value state in, updated state plus celebration events out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forge Fitness

//! Session-completion engine.
//!
//! One call per completed workout: the persisted [`ProgressState`] goes in,
//! the updated state and the ephemeral celebration payload come out. The
//! engine performs no I/O and holds no per-user state — the caller persists
//! the returned record (discarding it if persistence fails, leaving the
//! prior state intact) and forwards [`MilestoneEvent`]s to the celebration
//! surface one modal at a time.

use crate::calendar::WeekId;
use crate::config::ProgressionConfig;
use crate::leveling::{LevelProgress, LevelingCurve};
use crate::milestones::detect_milestones;
use crate::models::{MilestoneEvent, ProgressSnapshot, ProgressState, SetRecord};
use crate::rewards::session_xp;
use crate::streak::evaluate_week;
use crate::tonnage::session_tonnage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything the workout-logging flow knows about one completed session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInput {
    /// Personal records set during the session
    pub pr_count: u32,
    /// Whether every planned exercise was finished
    pub completed: bool,
    /// Sets performed, in logged order
    pub sets: Vec<SetRecord>,
    /// User-configured weekly session target (2-5 in the product UI)
    pub weekly_target: u32,
    /// Caller-computed count of non-deleted sessions in the current ISO week
    pub sessions_this_week: u32,
    /// Wall-clock completion instant
    pub recorded_at: DateTime<Utc>,
}

/// Result of folding one session into a user's progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// XP awarded for this session
    pub xp_awarded: u64,
    /// Volume lifted in this session, kilograms
    pub session_tonnage_kg: f64,
    /// Level after the fold
    pub level: u32,
    /// Position within that level after the fold
    pub level_progress: LevelProgress,
    /// Updated progress record for the caller to persist
    pub state: ProgressState,
    /// Celebrations to present sequentially, already ordered
    pub milestones: Vec<MilestoneEvent>,
}

/// Progression engine facade
#[derive(Debug, Clone, Default)]
pub struct ProgressionEngine {
    config: ProgressionConfig,
}

impl ProgressionEngine {
    /// Engine with the default curve and reward parameters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom parameters
    #[must_use]
    pub fn with_config(config: ProgressionConfig) -> Self {
        Self { config }
    }

    /// Fold one completed session into `state`
    ///
    /// Computes the session's XP, folds totals, evaluates the weekly streak
    /// for the session's ISO week, and diffs before/after snapshots into
    /// milestone events. Pure and synchronous; repeated invocation with the
    /// same arguments yields the same outcome.
    #[must_use]
    pub fn complete_session(&self, state: &ProgressState, input: &SessionInput) -> SessionOutcome {
        let curve = LevelingCurve::with_config(self.config.leveling.clone());

        let before = ProgressSnapshot {
            total_sessions: state.total_sessions,
            total_tonnage_kg: state.total_tonnage_kg,
            level: curve.level_for_xp(state.total_xp),
        };

        let xp_awarded = session_xp(&self.config.rewards, input.pr_count, input.completed);
        let session_tonnage_kg = session_tonnage(&input.sets);

        let week = WeekId::from_date(input.recorded_at.date_naive());
        let streak = evaluate_week(
            &state.streak,
            input.weekly_target,
            input.sessions_this_week,
            week,
        );

        let next_state = ProgressState {
            total_xp: state.total_xp + xp_awarded,
            total_sessions: state.total_sessions + 1,
            total_tonnage_kg: state.total_tonnage_kg + session_tonnage_kg,
            streak,
        };

        let level = curve.level_for_xp(next_state.total_xp);
        let after = ProgressSnapshot {
            total_sessions: next_state.total_sessions,
            total_tonnage_kg: next_state.total_tonnage_kg,
            level,
        };
        let milestones = detect_milestones(&before, &after);
        let level_progress = curve.progress_toward_next(next_state.total_xp, level);

        debug!(
            xp_awarded,
            level,
            session_tonnage_kg,
            milestones = milestones.len(),
            week = %week,
            "session folded into progress"
        );

        SessionOutcome {
            xp_awarded,
            session_tonnage_kg,
            level,
            level_progress,
            state: next_state,
            milestones,
        }
    }
}
