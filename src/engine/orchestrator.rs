//! Query-path orchestration: classify, select, advise, rank, summarize.

use crate::catalog::snapshot::CatalogSnapshot;
use crate::ml::scorer::SuitabilityScorer;
use crate::region;

use super::types::{Classification, TriageReport, TriageRequest};
use super::{advisory, ranker, rules};

/// Serve one triage query against a consistent snapshot.
///
/// An unknown region or a condition with no regional match yields an empty
/// report (`found() == false`), never an error.
pub fn recommend(snapshot: &CatalogSnapshot, request: &TriageRequest) -> TriageReport {
    let region = region::normalize_region(&request.region);
    let rule = rules::rule_for(&request.condition);

    let mut candidates = rule.candidates(snapshot, &region);
    let advisory = advisory::check_advisory(&request.condition, &candidates, &request.urgency);

    ranker::rank(&mut candidates);
    let best = ranker::best_recommendation(&candidates);
    let total = candidates.len();
    candidates.truncate(ranker::DISPLAY_LIMIT);
    let summary = ranker::summarize(total, &candidates);

    tracing::info!(
        snapshot_id = %snapshot.id,
        condition = request.condition.as_str(),
        region = %region,
        candidates = total,
        advisory = advisory.is_some(),
        "triage query served"
    );

    TriageReport {
        classification: Classification {
            category: request.condition.as_str().to_string(),
            target: rule.target.to_string(),
            rationale: rule.rationale.to_string(),
        },
        advisory,
        recommendations: candidates,
        best,
        summary,
    }
}

/// `recommend`, with the suitability scorer annotating hospital candidates.
///
/// The rule table stays the source of selection and ordering; the ML stage
/// only attaches score/confidence so the presentation layer can surface or
/// re-rank by them.
pub fn recommend_scored(
    snapshot: &CatalogSnapshot,
    request: &TriageRequest,
    scorer: &SuitabilityScorer,
) -> TriageReport {
    let mut report = recommend(snapshot, request);
    scorer.annotate(&mut report.recommendations, snapshot, &request.condition);
    report
}
