//! Diversified greedy restarts.
//!
//! Runs the greedy scan once per forced first pick and keeps the line plan
//! with the highest K-score. Ranking is shared across restarts.

use serde::Serialize;
use tracing::{debug, info};

use crate::evaluation::KScorer;
use crate::models::{RailNetwork, Trajectory, TrajectorySet};

use super::greedy::{GreedyConfig, RankedCandidates};

/// Outcome of [`greedy_restarts`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestartResult {
    /// Highest-scoring plan.
    pub best: TrajectorySet,
    /// Its K-score.
    pub best_score: f64,
    /// First-pick index that produced it.
    pub first_pick_index: usize,
    /// Score of every restart, in the order the indices were given.
    pub scores: Vec<f64>,
}

/// Runs [`greedy_select`](super::greedy_select) for each index in
/// `first_picks`.
///
/// A later restart replaces the best only with a strictly higher score, so
/// the earliest index wins ties. Returns `None` when `first_picks` is empty.
///
/// # Examples
///
/// ```
/// use u_railnet::models::{Connection, RailNetwork, Station};
/// use u_railnet::enumeration::{enumerate, EnumerationConfig};
/// use u_railnet::constructive::{greedy_restarts, GreedyConfig};
/// use u_railnet::evaluation::KScorer;
///
/// let net = RailNetwork::from_records(
///     ["A", "B", "C"].map(|n| Station::new(n, 0.0, 0.0)),
///     [Connection::new("A", "B", 10.0), Connection::new("B", "C", 10.0)],
/// )
/// .unwrap();
/// let pool = enumerate(&net, &EnumerationConfig::new(180.0, 10));
/// let scorer = KScorer::new(&net);
///
/// let result = greedy_restarts(
///     pool.candidates(),
///     &net,
///     &GreedyConfig::default(),
///     &scorer,
///     0..pool.len(),
/// )
/// .unwrap();
/// assert_eq!(result.scores.len(), pool.len());
/// assert!((result.best_score - (10_000.0 - 100.0 - 20.0)).abs() < 1e-10);
/// ```
pub fn greedy_restarts<I>(
    candidates: &[Trajectory],
    network: &RailNetwork,
    config: &GreedyConfig,
    scorer: &KScorer<'_>,
    first_picks: I,
) -> Option<RestartResult>
where
    I: IntoIterator<Item = usize>,
{
    let ranked = RankedCandidates::new(candidates, config.max_time_per_route);
    let mut best: Option<(TrajectorySet, f64, usize)> = None;
    let mut scores = Vec::new();

    for index in first_picks {
        let plan = ranked.select(network, config.max_routes, index);
        let score = scorer.score(&plan);
        scores.push(score);
        debug!(first_pick = index, score, routes = plan.len(), "greedy restart");

        let improved = best.as_ref().is_none_or(|(_, s, _)| score > *s);
        if improved {
            best = Some((plan, score, index));
        }
    }

    let (best, best_score, first_pick_index) = best?;
    info!(
        restarts = scores.len(),
        best_score,
        first_pick_index,
        "greedy restarts finished"
    );
    Some(RestartResult {
        best,
        best_score,
        first_pick_index,
        scores,
    })
}
