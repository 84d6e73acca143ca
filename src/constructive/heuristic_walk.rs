//! Deterministic shortest-hop walks from hub stations.
//!
//! # Algorithm
//!
//! 1. Order stations by degree, highest first (ties keep insertion order)
//!    and take the first `2 × max_trajectories` as walk starts.
//! 2. From each start, repeatedly follow the shortest connection that no
//!    earlier walk has used, whose target has been entered fewer than
//!    `max_visits` times, and that still fits in `max_time`.
//! 3. Keep walks of at least two stations and return the
//!    `max_trajectories` with the highest walk score.
//!
//! Used connections and visit counts are shared by all walks, so later
//! walks are pushed towards the uncovered part of the network.
//!
//! A walk is scored as a one-route plan whose coverage is everything
//! covered by the walks built so far, capped at [`SCORE_CAP`]. Later walks
//! see more coverage and tend to rank higher.
//!
//! # Complexity
//!
//! O(s·L·d) for s starts, walks of length at most L and maximum degree d.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluation::{COVERAGE_WEIGHT, ROUTE_PENALTY, SCORE_CAP};
use crate::models::{RailNetwork, TrajectorySet};

/// Bounds of the hub walk heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// Number of walks returned.
    pub max_trajectories: usize,
    /// Time budget of each walk, in minutes.
    pub max_time: f64,
    /// Times a station may be entered across all walks.
    pub max_visits: usize,
}

impl HeuristicConfig {
    /// Sets the number of walks returned.
    pub fn with_max_trajectories(mut self, n: usize) -> Self {
        self.max_trajectories = n;
        self
    }

    /// Sets the per-walk time budget.
    pub fn with_max_time(mut self, minutes: f64) -> Self {
        self.max_time = minutes;
        self
    }

    /// Sets the visit cap.
    pub fn with_max_visits(mut self, visits: usize) -> Self {
        self.max_visits = visits;
        self
    }
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            max_trajectories: 20,
            max_time: 180.0,
            max_visits: 2,
        }
    }
}

/// Builds a line plan of greedy shortest-hop walks from hub stations.
///
/// # Examples
///
/// ```
/// use u_railnet::models::{Connection, RailNetwork, Station};
/// use u_railnet::constructive::{heuristic_walks, HeuristicConfig};
///
/// let net = RailNetwork::from_records(
///     ["A", "B", "C"].map(|n| Station::new(n, 0.0, 0.0)),
///     [Connection::new("A", "B", 10.0), Connection::new("B", "C", 5.0)],
/// )
/// .unwrap();
///
/// let plan = heuristic_walks(&net, &HeuristicConfig::default());
/// // B walks to C first; A-B then completes the coverage and ranks higher
/// assert_eq!(plan.trajectories()[0].stations(), ["A", "B"]);
/// assert_eq!(plan.trajectories()[1].stations(), ["B", "C"]);
/// ```
pub fn heuristic_walks(network: &RailNetwork, config: &HeuristicConfig) -> TrajectorySet {
    let mut starts: Vec<usize> = (0..network.num_stations()).collect();
    starts.sort_by_key(|&i| std::cmp::Reverse(network.adjacent(i).len()));
    starts.truncate(config.max_trajectories.saturating_mul(2));

    let mut used_edges = vec![false; network.num_edges()];
    let mut visits = vec![0usize; network.num_stations()];
    let mut walks = Vec::new();

    for start in starts {
        let mut route = vec![start];
        let mut time = 0.0;
        let mut current = start;

        while let Some(step) = network
            .adjacent(current)
            .iter()
            .filter(|a| {
                !used_edges[a.edge]
                    && visits[a.station] < config.max_visits
                    && time + a.time <= config.max_time
            })
            .min_by(|a, b| a.time.total_cmp(&b.time))
            .copied()
        {
            used_edges[step.edge] = true;
            visits[step.station] += 1;
            time += step.time;
            route.push(step.station);
            current = step.station;
        }

        if route.len() > 1 {
            let covered = used_edges.iter().filter(|&&used| used).count();
            let coverage = covered as f64 / network.num_edges() as f64;
            let score = (coverage * COVERAGE_WEIGHT - (ROUTE_PENALTY + time)).min(SCORE_CAP);
            debug!(
                start = network.name_of(start),
                stations = route.len(),
                minutes = time,
                score,
                "hub walk built"
            );
            walks.push((score, network.trajectory_from_indices(&route, time)));
        }
    }

    walks.sort_by(|a, b| b.0.total_cmp(&a.0));
    walks
        .into_iter()
        .take(config.max_trajectories)
        .map(|(_, t)| t)
        .collect()
}
