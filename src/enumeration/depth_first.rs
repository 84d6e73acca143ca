//! Bounded depth-first enumeration of candidate trajectories.
//!
//! # Algorithm
//!
//! A depth-first search is started from every station in insertion order.
//! Each node of the search is a loop-free route; it is recorded as a
//! candidate when its time is in `(0, max_duration]` and it holds at most
//! `max_stations` stations. A route is extended over an incident connection
//! unless that would exceed `max_duration`, the connection's canonical edge
//! has been used `max_connection_reuse` times on the current search path,
//! or the neighbour is already on the route.
//!
//! # Complexity
//!
//! Exponential in branching factor × `max_stations`. Callers bound the
//! search with `max_duration` and `max_stations`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::NetworkResult;
use crate::models::RailNetwork;

use super::pool::{CandidateIdentity, CandidatePool};
use super::walker::{Expand, WalkLimits, Walker};

/// Scope of the connection-usage counter.
///
/// The counter is backtracked together with the route, so at the start of
/// every station's subtree it is zero under either scope and both produce
/// the same pool. `PerStart` makes each start station's subtree a fully
/// independent unit of work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReuseScope {
    /// One counter for the whole enumeration run.
    #[default]
    Shared,
    /// A fresh counter for every start station.
    PerStart,
}

/// Bounds and policies of an enumeration run.
///
/// # Examples
///
/// ```
/// use u_railnet::enumeration::{CandidateIdentity, EnumerationConfig};
///
/// let config = EnumerationConfig::new(120.0, 8)
///     .with_max_connection_reuse(1)
///     .with_identity(CandidateIdentity::Undirected);
/// assert_eq!(config.max_stations, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnumerationConfig {
    /// Longest route duration recorded, in minutes.
    pub max_duration: f64,
    /// Most stations on a recorded route.
    pub max_stations: usize,
    /// How often one canonical edge may be used on a search path.
    pub max_connection_reuse: usize,
    /// Scope of the usage counter.
    pub reuse_scope: ReuseScope,
    /// Deduplication rule of the resulting pool.
    pub identity: CandidateIdentity,
}

impl EnumerationConfig {
    /// Creates a configuration with reuse 1, shared counter and ordered
    /// candidate identity.
    pub fn new(max_duration: f64, max_stations: usize) -> Self {
        Self {
            max_duration,
            max_stations,
            max_connection_reuse: 1,
            reuse_scope: ReuseScope::Shared,
            identity: CandidateIdentity::Ordered,
        }
    }

    /// Sets the per-edge usage bound.
    pub fn with_max_connection_reuse(mut self, reuse: usize) -> Self {
        self.max_connection_reuse = reuse;
        self
    }

    /// Sets the usage counter scope.
    pub fn with_reuse_scope(mut self, scope: ReuseScope) -> Self {
        self.reuse_scope = scope;
        self
    }

    /// Sets the candidate identity rule.
    pub fn with_identity(mut self, identity: CandidateIdentity) -> Self {
        self.identity = identity;
        self
    }

    fn limits(&self) -> WalkLimits {
        WalkLimits {
            max_duration: self.max_duration,
            max_stations: self.max_stations,
            max_reuse: self.max_connection_reuse,
        }
    }
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self::new(180.0, 100)
    }
}

/// Enumerates candidate trajectories from every station of the network.
///
/// # Examples
///
/// ```
/// use u_railnet::models::{Connection, RailNetwork, Station};
/// use u_railnet::enumeration::{enumerate, EnumerationConfig};
///
/// let net = RailNetwork::from_records(
///     ["A", "B", "C"].map(|n| Station::new(n, 0.0, 0.0)),
///     [Connection::new("A", "B", 10.0), Connection::new("B", "C", 10.0)],
/// )
/// .unwrap();
///
/// let pool = enumerate(&net, &EnumerationConfig::new(30.0, 3));
/// // A-B, A-B-C, B-A, B-C, C-B, C-B-A
/// assert_eq!(pool.len(), 6);
/// ```
pub fn enumerate(network: &RailNetwork, config: &EnumerationConfig) -> CandidatePool {
    let mut pool = CandidatePool::new(config.identity);
    let mut walker = Walker::new(network);

    for start in 0..network.num_stations() {
        if config.reuse_scope == ReuseScope::PerStart {
            walker.reset_usage();
        }
        let found = walk_from(&mut walker, start, config, &mut pool);
        debug!(
            station = network.name_of(start),
            found, "enumerated start station"
        );
    }

    info!(
        stations = network.num_stations(),
        candidates = pool.len(),
        "enumeration finished"
    );
    pool
}

/// Enumerates candidate trajectories starting at one station.
pub fn enumerate_from(
    network: &RailNetwork,
    start: &str,
    config: &EnumerationConfig,
) -> NetworkResult<CandidatePool> {
    let start = network.require(start)?;
    let mut pool = CandidatePool::new(config.identity);
    let mut walker = Walker::new(network);
    walk_from(&mut walker, start, config, &mut pool);
    Ok(pool)
}

/// Runs one start station's subtree, returning the number of new candidates.
fn walk_from(
    walker: &mut Walker<'_>,
    start: usize,
    config: &EnumerationConfig,
    pool: &mut CandidatePool,
) -> usize {
    let before = pool.len();
    walker.walk(start, config.limits(), |network, route, time| {
        if time > 0.0 && time <= config.max_duration && route.len() <= config.max_stations {
            pool.insert(network.trajectory_from_indices(route, time));
        }
        Expand::Continue
    });
    pool.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Connection, Station, Trajectory};

    fn square() -> RailNetwork {
        RailNetwork::from_records(
            ["A", "B", "C", "D"].map(|n| Station::new(n, 0.0, 0.0)),
            [
                Connection::new("A", "B", 10.0),
                Connection::new("B", "C", 10.0),
                Connection::new("C", "D", 10.0),
                Connection::new("A", "D", 10.0),
            ],
        )
        .expect("valid network")
    }

    fn names(t: &Trajectory) -> Vec<&str> {
        t.stations().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_square_from_a() {
        let net = square();
        let pool = enumerate_from(&net, "A", &EnumerationConfig::new(30.0, 4)).expect("known");
        let routes: Vec<Vec<&str>> = pool.iter().map(names).collect();
        assert_eq!(
            routes,
            vec![
                vec!["A", "B"],
                vec!["A", "B", "C"],
                vec!["A", "B", "C", "D"],
                vec!["A", "D"],
                vec!["A", "D", "C"],
                vec!["A", "D", "C", "B"],
            ]
        );
        let abcd = pool
            .iter()
            .find(|t| names(t) == ["A", "B", "C", "D"])
            .expect("A-B-C-D enumerated");
        assert_eq!(abcd.duration(), 30.0);
    }

    #[test]
    fn test_start_only_route_never_recorded() {
        let net = square();
        let pool = enumerate(&net, &EnumerationConfig::new(30.0, 4));
        assert!(pool.iter().all(|t| t.len() >= 2 && t.duration() > 0.0));
        assert_eq!(pool.len(), 24);
    }

    #[test]
    fn test_duration_bound() {
        let net = square();
        let pool = enumerate(&net, &EnumerationConfig::new(15.0, 4));
        assert_eq!(pool.len(), 8);
        assert!(pool.iter().all(|t| t.duration() <= 15.0));
    }

    #[test]
    fn test_station_bound() {
        let net = square();
        let pool = enumerate(&net, &EnumerationConfig::new(100.0, 2));
        assert!(pool.iter().all(|t| t.len() == 2));
        assert_eq!(pool.len(), 8);
    }

    #[test]
    fn test_zero_reuse_finds_nothing() {
        let net = square();
        let pool = enumerate(
            &net,
            &EnumerationConfig::new(100.0, 4).with_max_connection_reuse(0),
        );
        assert!(pool.is_empty());
    }

    #[test]
    fn test_reuse_scopes_agree() {
        let net = square();
        let shared = enumerate(&net, &EnumerationConfig::new(30.0, 4));
        let per_start = enumerate(
            &net,
            &EnumerationConfig::new(30.0, 4).with_reuse_scope(ReuseScope::PerStart),
        );
        assert_eq!(shared.candidates(), per_start.candidates());
    }

    #[test]
    fn test_undirected_identity_halves_pool() {
        let net = square();
        let pool = enumerate(
            &net,
            &EnumerationConfig::new(30.0, 4).with_identity(CandidateIdentity::Undirected),
        );
        assert_eq!(pool.len(), 12);
    }

    #[test]
    fn test_isolated_station_yields_nothing() {
        let mut net = square();
        net.add_station(Station::new("E", 0.0, 0.0)).expect("new");
        let pool = enumerate_from(&net, "E", &EnumerationConfig::default()).expect("known");
        assert!(pool.is_empty());
    }

    #[test]
    fn test_unknown_start() {
        let net = square();
        assert!(enumerate_from(&net, "Q", &EnumerationConfig::default()).is_err());
    }

    #[test]
    fn test_parallel_connections_give_distinct_candidates() {
        use crate::constructive::{greedy_select, GreedyConfig};
        use crate::evaluation::KScorer;

        let net = RailNetwork::from_records(
            ["A", "B", "C"].map(|n| Station::new(n, 0.0, 0.0)),
            [
                Connection::new("A", "B", 10.0),
                Connection::new("A", "B", 12.0),
                Connection::new("B", "C", 10.0),
            ],
        )
        .expect("valid network");
        let pool = enumerate_from(&net, "A", &EnumerationConfig::new(180.0, 10)).expect("known");

        let found: Vec<(Vec<&str>, f64)> = pool.iter().map(|t| (names(t), t.duration())).collect();
        assert_eq!(
            found,
            vec![
                (vec!["A", "B"], 10.0),
                (vec!["A", "B", "C"], 20.0),
                (vec!["A", "B"], 12.0),
                (vec!["A", "B", "C"], 22.0),
            ]
        );

        let plan = greedy_select(pool.candidates(), &net, &GreedyConfig::default(), 0);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.trajectories()[0].duration(), 20.0);

        let breakdown = KScorer::new(&net).breakdown(&plan);
        assert_eq!(breakdown.total_edges, 2);
        assert_eq!(breakdown.covered_edges, 2);
        assert_eq!(net.num_connections(), 3);
    }
}
