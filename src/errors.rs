// ABOUTME: Error types for the progression engine's fallible boundaries
// ABOUTME: Week-identifier parsing and configuration validation; everything else is total
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forge Fitness

//! Error handling for the progression engine.
//!
//! The computational surface of this crate is total over its documented
//! input domain — folding a session, evaluating a streak, or diffing
//! snapshots never fails. The two places an error can surface are the
//! persistence boundary (parsing a stored week identifier back into a
//! [`crate::calendar::WeekId`]) and configuration validation.

use thiserror::Error;

/// Result alias used throughout the crate
pub type ProgressionResult<T> = Result<T, ProgressionError>;

/// Errors produced at the engine's boundaries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressionError {
    /// A week identifier failed to parse or does not denote a real ISO week
    #[error("invalid week identifier: {0}")]
    InvalidWeekId(String),

    /// A configuration value is outside its documented domain
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ProgressionError {
    /// Build an [`Self::InvalidWeekId`] error from any displayable detail
    pub fn invalid_week_id(detail: impl Into<String>) -> Self {
        Self::InvalidWeekId(detail.into())
    }

    /// Build an [`Self::InvalidConfig`] error from any displayable detail
    pub fn invalid_config(detail: impl Into<String>) -> Self {
        Self::InvalidConfig(detail.into())
    }
}
