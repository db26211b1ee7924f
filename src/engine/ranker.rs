//! Candidate ordering and the best-recommendation pick.

use std::cmp::Ordering;

use crate::models::recommendation::{FacilityKey, Recommendation};

use super::types::TriageSummary;

/// Maximum entries handed to the presentation layer.
pub const DISPLAY_LIMIT: usize = 10;

/// Stable (priority ascending, occupancy ascending) ordering. Stability
/// keeps directory order on ties, which the tests rely on.
pub fn rank(candidates: &mut [Recommendation]) {
    candidates.sort_by(|a, b| {
        a.priority.cmp(&b.priority).then(
            a.occupancy
                .partial_cmp(&b.occupancy)
                .unwrap_or(Ordering::Equal),
        )
    });
}

/// The lowest-occupancy priority-1 candidate, by stable key. `None` when no
/// priority-1 candidate exists — fallback tiers are never promoted to "best".
pub fn best_recommendation(ranked: &[Recommendation]) -> Option<FacilityKey> {
    ranked
        .iter()
        .filter(|r| r.priority == 1)
        .min_by(|a, b| {
            a.occupancy
                .partial_cmp(&b.occupancy)
                .unwrap_or(Ordering::Equal)
        })
        .map(|r| r.key.clone())
}

/// Summary statistics: full candidate count, and mean occupancy over the
/// priority-1 entries of the displayed list.
pub fn summarize(total_candidates: usize, displayed: &[Recommendation]) -> TriageSummary {
    let primary: Vec<f32> = displayed
        .iter()
        .filter(|r| r.priority == 1)
        .map(|r| r.occupancy)
        .collect();

    let average_primary_occupancy = if primary.is_empty() {
        None
    } else {
        Some(primary.iter().sum::<f32>() / primary.len() as f32)
    };

    TriageSummary {
        total_candidates,
        average_primary_occupancy,
    }
}
