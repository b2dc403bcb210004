// ABOUTME: Lifted-volume aggregation and human-readable formatting
// ABOUTME: Tonnage is weight times reps summed across sets, in kilograms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forge Fitness

//! Tonnage aggregation.
//!
//! Tonnage is the cumulative weight-times-repetitions volume a user has
//! lifted, tracked in kilograms and displayed in tonnes once it grows past
//! four digits.

use crate::constants::display::{KG_PER_TONNE, TONNES_CUTOFF_KG};
use crate::models::SetRecord;

/// Total volume of one session: `Σ weight × reps` over its sets
#[must_use]
pub fn session_tonnage(sets: &[SetRecord]) -> f64 {
    sets.iter()
        .map(|set| set.weight_kg * f64::from(set.reps))
        .sum()
}

/// Human-readable volume string
///
/// Values of a tonne or more render in tonnes with one decimal (`"32.5 t"`),
/// smaller values as whole kilograms (`"999 kg"`).
#[must_use]
pub fn format_tonnage(total_kg: f64) -> String {
    if total_kg >= TONNES_CUTOFF_KG {
        format!("{:.1} t", total_kg / KG_PER_TONNE)
    } else {
        format!("{} kg", total_kg.round() as i64)
    }
}
