// ABOUTME: Streak state machine tests over ISO week arithmetic
// ABOUTME: Continuation, reset, idempotence, first-use, and year-boundary weeks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forge Fitness

use forge_progression::{evaluate_week, StreakState, WeekId};

fn week(id: &str) -> WeekId {
    id.parse().unwrap()
}

fn state(current: u32, best: u32, last: Option<&str>) -> StreakState {
    StreakState {
        current_streak: current,
        best_streak: best,
        last_evaluated_week: last.map(week),
    }
}

#[test]
fn test_consecutive_week_extends_streak() {
    let next = evaluate_week(&state(3, 5, Some("2026-W08")), 3, 3, week("2026-W09"));
    assert_eq!(next.current_streak, 4);
    assert_eq!(next.best_streak, 5);
    assert_eq!(next.last_evaluated_week, Some(week("2026-W09")));
}

#[test]
fn test_skipped_weeks_reset_streak_to_one() {
    let next = evaluate_week(&state(3, 5, Some("2026-W05")), 3, 3, week("2026-W09"));
    assert_eq!(next.current_streak, 1);
    assert_eq!(next.best_streak, 5);
    assert_eq!(next.last_evaluated_week, Some(week("2026-W09")));
}

#[test]
fn test_repeated_evaluation_within_a_week_is_idempotent() {
    let first = evaluate_week(&state(3, 5, Some("2026-W08")), 3, 3, week("2026-W09"));
    let second = evaluate_week(&first, 3, 4, week("2026-W09"));
    assert_eq!(first, second);
}

#[test]
fn test_new_best_streak_is_recorded() {
    let next = evaluate_week(&state(5, 5, Some("2026-W08")), 3, 3, week("2026-W09"));
    assert_eq!(next.current_streak, 6);
    assert_eq!(next.best_streak, 6);
}

#[test]
fn test_below_target_keeps_counters_and_prior_week() {
    let before = state(3, 5, Some("2026-W08"));
    let next = evaluate_week(&before, 3, 1, week("2026-W09"));
    assert_eq!(next, before);
}

#[test]
fn test_first_ever_below_target_records_the_week() {
    let next = evaluate_week(&StreakState::default(), 3, 0, week("2026-W09"));
    assert_eq!(next.current_streak, 0);
    assert_eq!(next.best_streak, 0);
    assert_eq!(next.last_evaluated_week, Some(week("2026-W09")));
}

#[test]
fn test_streak_continues_across_the_year_boundary() {
    // 2025-W52 is the week immediately before 2026-W01
    let next = evaluate_week(&state(10, 10, Some("2025-W52")), 3, 3, week("2026-W01"));
    assert_eq!(next.current_streak, 11);
    assert_eq!(next.best_streak, 11);
}

#[test]
fn test_streak_continues_across_a_53_week_year_boundary() {
    // 2026 has 53 ISO weeks; W53 precedes 2027-W01
    let next = evaluate_week(&state(2, 4, Some("2026-W53")), 3, 3, week("2027-W01"));
    assert_eq!(next.current_streak, 3);
}

#[test]
fn test_week_52_to_week_1_of_a_53_week_year_is_a_gap() {
    // 2026-W52 is not the week before 2027-W01 (2026-W53 is), so this resets
    let next = evaluate_week(&state(7, 7, Some("2026-W52")), 3, 3, week("2027-W01"));
    assert_eq!(next.current_streak, 1);
    assert_eq!(next.best_streak, 7);
}

#[test]
fn test_streak_state_serde_round_trip() {
    let original = state(4, 9, Some("2026-W09"));
    let json = serde_json::to_string(&original).unwrap();
    assert!(json.contains("\"2026-W09\""));
    let back: StreakState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, original);
}
