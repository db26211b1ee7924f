pub mod advisory;
pub mod orchestrator;
pub mod ranker;
pub mod rules;
pub mod types;

pub use orchestrator::{recommend, recommend_scored};
pub use types::{Advisory, AdvisoryKind, Classification, TriageReport, TriageRequest, TriageSummary};
