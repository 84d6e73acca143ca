//! Line plan evaluation.
//!
//! - [`KScorer`] / [`k_score`] — coverage versus route count and minutes
//! - [`random_baseline`] — K-score distribution of random line plans

mod baseline;
mod kscore;

pub use baseline::{random_baseline, BaselineConfig, BaselineSummary};
pub use kscore::{
    k_score, KScorer, ScoreBreakdown, ScoreConfig, COVERAGE_WEIGHT, ROUTE_PENALTY, SCORE_CAP,
};
