// ABOUTME: Milestone detection between before/after progress snapshots
// ABOUTME: Fixed ascending threshold tables, crossed-once semantics, static celebration copy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forge Fitness

//! Milestone detection.
//!
//! Compares a user's lifetime totals before and after one session is folded
//! in, and emits a celebration event for every boundary crossed in between:
//! at most one level-up, then lifetime-session thresholds, then
//! lifetime-tonnage thresholds, each table ascending. A threshold the
//! before-snapshot already exceeds never fires again, so each celebration
//! appears exactly once in a user's history.

use crate::constants::milestones::{SESSION_THRESHOLDS, TONNAGE_THRESHOLDS_KG};
use crate::models::{MilestoneEvent, MilestoneKind, ProgressSnapshot};
use tracing::debug;

/// Celebration copy for session-count milestones, aligned with
/// [`SESSION_THRESHOLDS`]
const SESSION_COPY: [(&str, &str, &str); 6] = [
    (
        "medal-bronze",
        "10 workouts",
        "Ten sessions logged. The habit is real.",
    ),
    (
        "medal-silver",
        "25 workouts",
        "Twenty-five sessions. Consistency is showing.",
    ),
    ("medal-gold", "50 workouts", "Fifty sessions in the books."),
    ("trophy", "100 workouts", "Three digits. One hundred sessions."),
    (
        "trophy-star",
        "250 workouts",
        "Two hundred and fifty sessions strong.",
    ),
    ("crown", "500 workouts", "Five hundred sessions. Rare company."),
];

/// Celebration copy for tonnage milestones, aligned with
/// [`TONNAGE_THRESHOLDS_KG`]
const TONNAGE_COPY: [(&str, &str, &str); 5] = [
    (
        "barbell",
        "10 tonnes lifted",
        "10,000 kg of total volume moved.",
    ),
    (
        "barbell-plate",
        "50 tonnes lifted",
        "50,000 kg. A loaded truck and then some.",
    ),
    (
        "mountain",
        "100 tonnes lifted",
        "100,000 kg of iron over your lifetime.",
    ),
    (
        "mountain-peak",
        "500 tonnes lifted",
        "Half a million kilograms moved.",
    ),
    (
        "planet",
        "1,000 tonnes lifted",
        "One million kilograms. Welcome to the million-kilo club.",
    ),
];

fn level_up_event(level: u32) -> MilestoneEvent {
    MilestoneEvent {
        kind: MilestoneKind::LevelUp,
        value: u64::from(level),
        icon_key: "level-up".to_owned(),
        title: format!("Level {level}"),
        message: format!("You reached level {level}. Keep the momentum going."),
    }
}

/// Detect every milestone crossed between two snapshots
///
/// Emission order: level-up first (at most one per call, carrying the level
/// actually reached even when a burst of XP crossed several boundaries at
/// once), then session thresholds ascending, then tonnage thresholds
/// ascending. The session and tonnage tables are independent; several
/// thresholds from one table may fire in a single call when crossed
/// together.
#[must_use]
pub fn detect_milestones(
    before: &ProgressSnapshot,
    after: &ProgressSnapshot,
) -> Vec<MilestoneEvent> {
    let mut events = Vec::new();

    if after.level > before.level {
        events.push(level_up_event(after.level));
    }

    for (threshold, (icon_key, title, message)) in SESSION_THRESHOLDS.iter().zip(SESSION_COPY) {
        if before.total_sessions < *threshold && *threshold <= after.total_sessions {
            events.push(MilestoneEvent {
                kind: MilestoneKind::Session,
                value: *threshold,
                icon_key: icon_key.to_owned(),
                title: title.to_owned(),
                message: message.to_owned(),
            });
        }
    }

    for (threshold_kg, (icon_key, title, message)) in TONNAGE_THRESHOLDS_KG.iter().zip(TONNAGE_COPY)
    {
        if before.total_tonnage_kg < *threshold_kg && *threshold_kg <= after.total_tonnage_kg {
            events.push(MilestoneEvent {
                kind: MilestoneKind::Tonnage,
                value: *threshold_kg as u64,
                icon_key: icon_key.to_owned(),
                title: title.to_owned(),
                message: message.to_owned(),
            });
        }
    }

    if !events.is_empty() {
        debug!(count = events.len(), "milestones crossed");
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(total_sessions: u64, total_tonnage_kg: f64, level: u32) -> ProgressSnapshot {
        ProgressSnapshot {
            total_sessions,
            total_tonnage_kg,
            level,
        }
    }

    #[test]
    fn test_nothing_crossed_yields_no_events() {
        let before = snapshot(11, 12_000.0, 4);
        let after = snapshot(12, 13_000.0, 4);
        assert!(detect_milestones(&before, &after).is_empty());
    }

    #[test]
    fn test_burst_across_levels_emits_single_level_up() {
        let before = snapshot(5, 1_000.0, 3);
        let after = snapshot(6, 2_000.0, 7);
        let events = detect_milestones(&before, &after);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, MilestoneKind::LevelUp);
        assert_eq!(events[0].value, 7);
    }

    #[test]
    fn test_several_session_thresholds_fire_ascending() {
        let before = snapshot(9, 0.0, 2);
        let after = snapshot(60, 0.0, 2);
        let values: Vec<u64> = detect_milestones(&before, &after)
            .into_iter()
            .map(|event| event.value)
            .collect();
        assert_eq!(values, vec![10, 25, 50]);
    }

    #[test]
    fn test_threshold_landed_on_exactly_still_fires() {
        let before = snapshot(9, 0.0, 1);
        let after = snapshot(10, 0.0, 1);
        let events = detect_milestones(&before, &after);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].value, 10);
    }
}
