//! Results panel: ordered candidate cards, first one flagged as the top match.
//!
//! Purely presentational. Display order is exactly the service's order.

use askama::Template;

use crate::models::candidate::CandidateMatch;

pub const NO_MATCHES_MESSAGE: &str = "No matching candidates found.";
pub const TOP_MATCH_LABEL: &str = "Top Match";

const RATING_MAX: f64 = 5.0;

/// Maps a 0–10 score onto the 5-star scale at half-star precision.
pub fn star_rating(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    score.round() / 2.0
}

/// Star glyphs for a rating, clamped to 0–5. The chip keeps the raw score.
fn stars(rating: f64) -> String {
    let rating = rating.clamp(0.0, RATING_MAX);
    let full = rating.floor() as usize;
    let half = rating - rating.floor() >= 0.5;
    let empty = RATING_MAX as usize - full - usize::from(half);

    let mut out = "★".repeat(full);
    if half {
        out.push('⯪');
    }
    out.push_str(&"☆".repeat(empty));
    out
}

#[derive(Debug, Clone)]
pub struct ResultCard {
    pub rank: usize,
    pub full_name: String,
    pub score_label: String,
    pub stars: String,
    pub explanation: String,
    pub is_top: bool,
}

impl ResultCard {
    pub fn from_match(rank: usize, candidate: &CandidateMatch) -> Self {
        Self {
            rank,
            full_name: candidate.full_name.clone(),
            score_label: format!("{:.1}/10", candidate.score),
            stars: stars(star_rating(candidate.score)),
            explanation: candidate.explanation.clone(),
            is_top: rank == 0,
        }
    }
}

#[derive(Debug, Template)]
#[template(path = "results.html")]
pub struct ResultsPanel {
    pub cards: Vec<ResultCard>,
    pub empty_message: &'static str,
    pub top_label: &'static str,
}

impl ResultsPanel {
    pub fn new(matches: &[CandidateMatch]) -> Self {
        Self {
            cards: matches
                .iter()
                .enumerate()
                .map(|(rank, candidate)| ResultCard::from_match(rank, candidate))
                .collect(),
            empty_message: NO_MATCHES_MESSAGE,
            top_label: TOP_MATCH_LABEL,
        }
    }
}
