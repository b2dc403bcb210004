// ABOUTME: Progression and gamification engine for the Forge strength-training platform
// ABOUTME: Converts workout activity into XP, levels, weekly streaks, tonnage, milestones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forge Fitness

#![deny(unsafe_code)]

//! # Forge Progression
//!
//! Progression and gamification engine for the Forge strength-training
//! platform, extracted from the app backend as a standalone crate. Every
//! operation is pure, synchronous, and side-effect-free: per-user state goes
//! in by value, updated state and celebration events come out, and the
//! calling layer owns persistence and presentation.
//!
//! One call per completed workout session drives the whole engine: the
//! session earns XP ([`rewards`]), XP folds into a level ([`leveling`]), the
//! session counts toward the weekly streak ([`streak`], on ISO weeks from
//! [`calendar`]), lifted volume accumulates ([`tonnage`]), and before/after
//! snapshots are diffed into celebration events ([`milestones`]). The
//! [`engine`] module fronts that fold with a single facade call.
//!
//! The engine is designed for a single-writer-per-user context; callers
//! serialize session-completion transactions per user.

/// ISO-8601 week identifiers for streak bookkeeping
pub mod calendar;

/// Engine configuration with default curve and reward parameters
pub mod config;

/// Fixed numeric tables: level costs, rewards, milestone thresholds
pub mod constants;

/// Session-completion facade folding one workout into per-user progress
pub mod engine;

/// Error types for the engine's fallible boundaries
pub mod errors;

/// Experience-to-level curve and in-level progress
pub mod leveling;

/// Milestone detection between before/after progress snapshots
pub mod milestones;

/// Core data models shared across the engine
pub mod models;

/// Experience awarded for one completed session
pub mod rewards;

/// Weekly streak state machine
pub mod streak;

/// Lifted-volume aggregation and display formatting
pub mod tonnage;

pub use calendar::WeekId;
pub use config::{LevelingConfig, ProgressionConfig, SessionRewardConfig};
pub use engine::{ProgressionEngine, SessionInput, SessionOutcome};
pub use errors::{ProgressionError, ProgressionResult};
pub use leveling::{LevelProgress, LevelingCurve};
pub use milestones::detect_milestones;
pub use models::{
    MilestoneEvent, MilestoneKind, ProgressSnapshot, ProgressState, SetRecord, StreakState,
};
pub use rewards::session_xp;
pub use streak::evaluate_week;
pub use tonnage::{format_tonnage, session_tonnage};
