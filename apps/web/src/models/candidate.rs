use serde::{Deserialize, Serialize};

/// One ranked entry returned by the matching service.
///
/// `score` is nominally 0–10 but is taken as-is; the service owns ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMatch {
    pub full_name: String,
    pub score: f64,
    pub explanation: String,
}
