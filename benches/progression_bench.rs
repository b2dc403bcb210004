// ABOUTME: Criterion benchmarks for the progression engine
// ABOUTME: Measures level derivation, milestone diffing, and the full session fold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forge Fitness

//! Criterion benchmarks for the progression engine.
//!
//! The engine runs once per completed workout on the hot path of the session
//! flow; these benches keep the cumulative-sum walk and the fold itself
//! honest as the curve parameters evolve.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use forge_progression::{
    detect_milestones, LevelingCurve, ProgressSnapshot, ProgressState, ProgressionEngine,
    SessionInput, SetRecord,
};

fn bench_level_for_xp(c: &mut Criterion) {
    let curve = LevelingCurve::new();
    c.bench_function("level_for_xp_mid_curve", |b| {
        b.iter(|| curve.level_for_xp(black_box(20_000)))
    });
    c.bench_function("level_for_xp_at_cap", |b| {
        b.iter(|| curve.level_for_xp(black_box(43_263)))
    });
}

fn bench_detect_milestones(c: &mut Criterion) {
    let before = ProgressSnapshot {
        total_sessions: 9,
        total_tonnage_kg: 9_500.0,
        level: 3,
    };
    let after = ProgressSnapshot {
        total_sessions: 10,
        total_tonnage_kg: 10_500.0,
        level: 4,
    };
    c.bench_function("detect_milestones_three_categories", |b| {
        b.iter(|| detect_milestones(black_box(&before), black_box(&after)))
    });
}

fn bench_session_fold(c: &mut Criterion) {
    let engine = ProgressionEngine::new();
    let state = ProgressState {
        total_xp: 20_000,
        total_sessions: 240,
        total_tonnage_kg: 310_000.0,
        ..ProgressState::default()
    };
    let sets: Vec<SetRecord> = (0..24)
        .map(|index| SetRecord {
            weight_kg: 60.0 + f64::from(index) * 2.5,
            reps: 5 + index % 6,
        })
        .collect();
    let input = SessionInput {
        pr_count: 1,
        completed: true,
        sets,
        weekly_target: 3,
        sessions_this_week: 2,
        recorded_at: Utc.with_ymd_and_hms(2026, 2, 23, 18, 30, 0).single().unwrap_or_default(),
    };
    c.bench_function("complete_session_fold", |b| {
        b.iter(|| engine.complete_session(black_box(&state), black_box(&input)))
    });
}

criterion_group!(
    benches,
    bench_level_for_xp,
    bench_detect_milestones,
    bench_session_fold
);
criterion_main!(benches);
