//! Greedy set-covering selection of trajectories.
//!
//! # Algorithm
//!
//! 1. Keep candidates with `0 < duration ≤ max_time_per_route`.
//! 2. Count each candidate's canonical edges that are new and that are
//!    already claimed. The counts are taken once, before any candidate is
//!    accepted.
//! 3. Rank by `(-new, used, duration)`; a stable sort keeps candidate order
//!    for remaining ties, so the ranking is total and reproducible.
//! 4. Optionally force-accept the candidate at `first_pick_index`.
//! 5. Scan in rank order and accept a candidate only if none of its edges
//!    is claimed yet. Stop at `max_routes` or when every network edge is
//!    claimed.
//!
//! The result never holds more than `max_routes` trajectories and no two
//! of them share a canonical edge.
//!
//! # Complexity
//!
//! O(c log c + c·L) for c candidates of length at most L.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{RailNetwork, Trajectory, TrajectorySet};

/// Bounds of a greedy selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GreedyConfig {
    /// Most trajectories in the selected plan.
    pub max_routes: usize,
    /// Longest admissible trajectory, in minutes.
    pub max_time_per_route: f64,
}

impl GreedyConfig {
    /// Creates a configuration.
    pub fn new(max_routes: usize, max_time_per_route: f64) -> Self {
        Self {
            max_routes,
            max_time_per_route,
        }
    }
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self::new(20, 180.0)
    }
}

#[derive(Debug, Clone)]
struct RankedEntry<'c> {
    trajectory: &'c Trajectory,
    edges: HashSet<(&'c str, &'c str)>,
    new_count: usize,
    used_count: usize,
}

/// Admissible candidates in greedy rank order.
///
/// Ranking is done once; [`select`](Self::select) can then be called for
/// many first-pick indices without sorting again.
#[derive(Debug, Clone)]
pub struct RankedCandidates<'c> {
    entries: Vec<RankedEntry<'c>>,
}

impl<'c> RankedCandidates<'c> {
    /// Filters and ranks `candidates`.
    pub fn new<I>(candidates: I, max_time_per_route: f64) -> Self
    where
        I: IntoIterator<Item = &'c Trajectory>,
    {
        let claimed: HashSet<(&str, &str)> = HashSet::new();
        let mut entries: Vec<RankedEntry<'c>> = candidates
            .into_iter()
            .filter(|t| t.duration() > 0.0 && t.duration() <= max_time_per_route)
            .map(|trajectory| {
                let edges = trajectory.unique_edges();
                let used_count = edges.iter().filter(|e| claimed.contains(*e)).count();
                RankedEntry {
                    trajectory,
                    new_count: edges.len() - used_count,
                    used_count,
                    edges,
                }
            })
            .collect();

        entries.sort_by(|a, b| {
            b.new_count
                .cmp(&a.new_count)
                .then(a.used_count.cmp(&b.used_count))
                .then(a.trajectory.duration().total_cmp(&b.trajectory.duration()))
        });
        Self { entries }
    }

    /// Number of admissible candidates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no candidate passed the duration filter.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Candidates in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &'c Trajectory> + '_ {
        self.entries.iter().map(|e| e.trajectory)
    }

    /// Runs the edge-disjoint scan.
    ///
    /// When `first_pick_index` is within range (and `max_routes > 0`) that
    /// candidate is accepted before the scan starts.
    pub fn select(
        &self,
        network: &RailNetwork,
        max_routes: usize,
        first_pick_index: usize,
    ) -> TrajectorySet {
        let total_edges = network.num_edges();
        let mut claimed: HashSet<(&str, &str)> = HashSet::new();
        let mut selected = TrajectorySet::new();
        if max_routes == 0 {
            return selected;
        }

        let forced = self.entries.get(first_pick_index);
        if let Some(entry) = forced {
            claimed.extend(entry.edges.iter().copied());
            selected.push(entry.trajectory.clone());
        }

        for (i, entry) in self.entries.iter().enumerate() {
            if selected.len() >= max_routes || claimed.len() >= total_edges {
                break;
            }
            if forced.is_some() && i == first_pick_index {
                continue;
            }
            if entry.edges.is_disjoint(&claimed) {
                claimed.extend(entry.edges.iter().copied());
                selected.push(entry.trajectory.clone());
                debug!(
                    rank = i,
                    edges = entry.edges.len(),
                    claimed = claimed.len(),
                    "greedy accepted candidate"
                );
            }
        }
        selected
    }
}

/// Picks an edge-disjoint line plan from `candidates` by greedy covering.
///
/// # Examples
///
/// ```
/// use u_railnet::models::{Connection, RailNetwork, Station};
/// use u_railnet::enumeration::{enumerate, EnumerationConfig};
/// use u_railnet::constructive::{greedy_select, GreedyConfig};
///
/// let net = RailNetwork::from_records(
///     ["A", "B", "C", "D"].map(|n| Station::new(n, 0.0, 0.0)),
///     [
///         Connection::new("A", "B", 10.0),
///         Connection::new("B", "C", 10.0),
///         Connection::new("C", "D", 10.0),
///         Connection::new("A", "D", 10.0),
///     ],
/// )
/// .unwrap();
/// let pool = enumerate(&net, &EnumerationConfig::new(30.0, 4));
///
/// let plan = greedy_select(pool.candidates(), &net, &GreedyConfig::new(1, 30.0), 0);
/// assert_eq!(plan.len(), 1);
/// assert_eq!(plan.trajectories()[0].stations(), ["A", "B", "C", "D"]);
/// ```
pub fn greedy_select(
    candidates: &[Trajectory],
    network: &RailNetwork,
    config: &GreedyConfig,
    first_pick_index: usize,
) -> TrajectorySet {
    RankedCandidates::new(candidates, config.max_time_per_route).select(
        network,
        config.max_routes,
        first_pick_index,
    )
}
