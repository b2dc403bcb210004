// ABOUTME: Weekly streak state machine over ISO weeks
// ABOUTME: Idempotent within a week; distinguishes "not yet met" from "missed entirely"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forge Fitness

//! Weekly streak evaluation.
//!
//! A streak counts consecutive ISO weeks in which the user met their weekly
//! session target. The caller drives evaluation after every completed
//! session, so the machine tolerates repeated calls within one week without
//! double-counting, while a week that has not met its target yet is left
//! open for a later call to promote.
//!
//! State is passed in by value and returned updated; persistence wraps the
//! call. Two racing callers holding stale copies of the same record can lose
//! an update or regress `best_streak` — the calling layer serializes
//! session-completion transactions per user.

use crate::calendar::WeekId;
use crate::models::StreakState;
use tracing::debug;

/// Evaluate the streak for `current_week`
///
/// Behavior, evaluated logically once per distinct ISO week:
///
/// 1. A week already recorded as evaluated returns the state unchanged, so
///    repeated calls within one week never double-count.
/// 2. A below-target week leaves both counters untouched. The week is
///    recorded only when no week was ever evaluated; otherwise the previous
///    record stays, so a later call in the same week — after the target is
///    finally met — can still extend the streak.
/// 3. Meeting the target extends the streak by one when the previous ISO
///    week was the last one evaluated, and restarts it at 1 after a gap or
///    on first use. `best_streak` ratchets up, never down.
#[must_use]
pub fn evaluate_week(
    state: &StreakState,
    weekly_target: u32,
    sessions_this_week: u32,
    current_week: WeekId,
) -> StreakState {
    if state.last_evaluated_week == Some(current_week) {
        return *state;
    }

    if sessions_this_week < weekly_target {
        let mut next = *state;
        if next.last_evaluated_week.is_none() {
            next.last_evaluated_week = Some(current_week);
        }
        return next;
    }

    let previous_week = current_week.previous();
    let current_streak = match state.last_evaluated_week {
        Some(last) if last == previous_week => state.current_streak + 1,
        // First streak ever, or one or more weeks were skipped
        _ => 1,
    };
    let next = StreakState {
        current_streak,
        best_streak: state.best_streak.max(current_streak),
        last_evaluated_week: Some(current_week),
    };
    debug!(
        week = %current_week,
        streak = next.current_streak,
        best = next.best_streak,
        continued = current_streak > 1,
        "weekly streak evaluated"
    );
    next
}
