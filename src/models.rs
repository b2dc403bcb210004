// ABOUTME: Core data models for the progression engine
// ABOUTME: Set records, progress snapshots, streak state, milestone events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forge Fitness

//! # Data Models
//!
//! Data structures flowing through the progression engine. All of them are
//! plain values: the engine never mutates shared state, it consumes these by
//! reference or value and hands updated copies back to the caller.
//!
//! ## Lifecycle
//!
//! Everything here except [`StreakState`] (and the [`ProgressState`] record
//! that embeds it) is transient — created and consumed within a single
//! session-completion transaction. The streak record spans the user's entire
//! history: created once at its [`Default`] all-zero state, then updated at
//! most meaningfully once per distinct ISO week.

use crate::calendar::WeekId;
use serde::{Deserialize, Serialize};

/// One logged set: weight on the bar times repetitions performed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    /// Weight lifted, kilograms
    pub weight_kg: f64,
    /// Repetitions performed at that weight
    pub reps: u32,
}

/// Point-in-time view of a user's lifetime totals
///
/// Constructed immediately before and after a session is folded in, and
/// consumed only by [`crate::milestones::detect_milestones`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// Lifetime completed-session count
    pub total_sessions: u64,
    /// Lifetime lifted volume, kilograms
    pub total_tonnage_kg: f64,
    /// Level derived from lifetime XP
    pub level: u32,
}

/// Weekly streak record, persisted per user
///
/// Mutated exclusively through [`crate::streak::evaluate_week`]. After any
/// update `best_streak >= current_streak` holds, and `best_streak` never
/// decreases over the record's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakState {
    /// Consecutive ISO weeks, ending at the last evaluated one, in which the
    /// weekly session target was met
    pub current_streak: u32,
    /// Highest streak ever reached
    pub best_streak: u32,
    /// Last ISO week the state machine evaluated, if any
    pub last_evaluated_week: Option<WeekId>,
}

/// Persisted per-user progress record
///
/// Passed by value into and out of the engine; a separate persistence
/// component owns load/store around each call. The level is always derived
/// from `total_xp`, never stored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressState {
    /// Lifetime experience points
    pub total_xp: u64,
    /// Lifetime completed-session count
    pub total_sessions: u64,
    /// Lifetime lifted volume, kilograms
    pub total_tonnage_kg: f64,
    /// Weekly streak record
    pub streak: StreakState,
}

/// Milestone category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneKind {
    /// A new level was reached
    LevelUp,
    /// A lifetime session-count threshold was crossed
    Session,
    /// A lifetime tonnage threshold was crossed
    Tonnage,
}

/// One celebration for the UI to present
///
/// Ephemeral output: consumed by the celebration surface (one modal at a
/// time, advancing on dismissal) and then discarded, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneEvent {
    /// Milestone category
    pub kind: MilestoneKind,
    /// Reached level, or the crossed threshold value
    pub value: u64,
    /// Celebration icon asset key
    pub icon_key: String,
    /// Short headline for the celebration modal
    pub title: String,
    /// Supporting message for the celebration modal
    pub message: String,
}
