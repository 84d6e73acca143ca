//! K-score: the quality measure of a line plan.
//!
//! # Formula
//!
//! ```text
//! p = U / E                  (0 when E = 0)
//! K = p · 10000 − (T · 100 + M)
//! ```
//!
//! where `E` is the number of distinct canonical edges in the network, `U`
//! the number of distinct canonical edges touched by any trajectory, `T` the
//! number of trajectories and `M` their summed duration in minutes.
//!
//! Scoring is pure and allocation-light: the only allocation is the set of
//! borrowed edge keys collected for `U`.

use serde::{Deserialize, Serialize};

use crate::models::{RailNetwork, Trajectory, TrajectorySet};

/// Weight of full coverage.
pub const COVERAGE_WEIGHT: f64 = 10_000.0;

/// Penalty per trajectory.
pub const ROUTE_PENALTY: f64 = 100.0;

/// Upper bound applied when clamping is enabled.
pub const SCORE_CAP: f64 = 10_000.0;

/// Scoring options.
///
/// Some planning runs clamp the score at [`SCORE_CAP`]; this is off by
/// default and has to be requested explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Clamp K to at most [`SCORE_CAP`].
    pub clamp_to_max: bool,
}

impl ScoreConfig {
    /// Enables or disables clamping.
    pub fn with_clamp_to_max(mut self, clamp: bool) -> Self {
        self.clamp_to_max = clamp;
        self
    }
}

/// Every term of a K-score evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// `U`: distinct canonical edges covered.
    pub covered_edges: usize,
    /// `E`: distinct canonical edges in the network.
    pub total_edges: usize,
    /// `p = U / E`.
    pub coverage: f64,
    /// `T`: number of trajectories.
    pub num_trajectories: usize,
    /// `M`: summed duration in minutes.
    pub total_minutes: f64,
    /// `K`.
    pub score: f64,
}

/// Scores trajectory sets against one network.
///
/// # Examples
///
/// ```
/// use u_railnet::models::{Connection, RailNetwork, Station, TrajectorySet};
/// use u_railnet::evaluation::KScorer;
///
/// let net = RailNetwork::from_records(
///     ["A", "B", "C"].map(|n| Station::new(n, 0.0, 0.0)),
///     [Connection::new("A", "B", 10.0), Connection::new("B", "C", 20.0)],
/// )
/// .unwrap();
/// let plan = TrajectorySet::from(vec![net.trajectory(["A", "B", "C"]).unwrap()]);
///
/// // full coverage, one route of 30 minutes
/// assert_eq!(KScorer::new(&net).score(&plan), 10_000.0 - (100.0 + 30.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KScorer<'a> {
    network: &'a RailNetwork,
    config: ScoreConfig,
}

impl<'a> KScorer<'a> {
    /// Creates a scorer with the default (unclamped) configuration.
    pub fn new(network: &'a RailNetwork) -> Self {
        Self {
            network,
            config: ScoreConfig::default(),
        }
    }

    /// Replaces the scoring options.
    pub fn with_config(mut self, config: ScoreConfig) -> Self {
        self.config = config;
        self
    }

    /// The network scores are computed against.
    pub fn network(&self) -> &'a RailNetwork {
        self.network
    }

    /// K-score of a trajectory set.
    pub fn score(&self, set: &TrajectorySet) -> f64 {
        self.score_routes(set.trajectories())
    }

    /// K-score of a slice of trajectories.
    pub fn score_routes(&self, routes: &[Trajectory]) -> f64 {
        self.breakdown_routes(routes).score
    }

    /// All terms of the K-score of a trajectory set.
    pub fn breakdown(&self, set: &TrajectorySet) -> ScoreBreakdown {
        self.breakdown_routes(set.trajectories())
    }

    fn breakdown_routes(&self, routes: &[Trajectory]) -> ScoreBreakdown {
        let covered: std::collections::HashSet<(&str, &str)> =
            routes.iter().flat_map(|t| t.edges()).collect();
        let total_edges = self.network.num_edges();
        let coverage = if total_edges == 0 {
            0.0
        } else {
            covered.len() as f64 / total_edges as f64
        };
        let total_minutes: f64 = routes.iter().map(Trajectory::duration).sum();

        let mut score =
            coverage * COVERAGE_WEIGHT - (routes.len() as f64 * ROUTE_PENALTY + total_minutes);
        if self.config.clamp_to_max {
            score = score.min(SCORE_CAP);
        }

        ScoreBreakdown {
            covered_edges: covered.len(),
            total_edges,
            coverage,
            num_trajectories: routes.len(),
            total_minutes,
            score,
        }
    }
}

/// K-score of `set` on `network` with default options.
pub fn k_score(set: &TrajectorySet, network: &RailNetwork) -> f64 {
    KScorer::new(network).score(set)
}
