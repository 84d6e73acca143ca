//! Trajectory and trajectory set types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::NetworkError;

use super::canonical_pair;

/// A route through the network: an ordered, non-empty station sequence and
/// its accumulated travel time.
///
/// Trajectories are built by the network ([`RailNetwork::trajectory`]) or by
/// the search components, which keep `duration` equal to the sum of the
/// traversed connection times.
///
/// [`RailNetwork::trajectory`]: crate::models::RailNetwork::trajectory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TrajectoryRecord")]
pub struct Trajectory {
    stations: Vec<String>,
    duration: f64,
}

/// Serialized form, checked for a non-empty station list on load.
#[derive(Deserialize)]
struct TrajectoryRecord {
    stations: Vec<String>,
    duration: f64,
}

impl TryFrom<TrajectoryRecord> for Trajectory {
    type Error = NetworkError;

    fn try_from(record: TrajectoryRecord) -> Result<Self, Self::Error> {
        if record.stations.is_empty() {
            return Err(NetworkError::EmptyTrajectory);
        }
        Ok(Self {
            stations: record.stations,
            duration: record.duration,
        })
    }
}

impl Trajectory {
    /// Assembles a trajectory whose duration was computed by the caller.
    pub(crate) fn from_parts(stations: Vec<String>, duration: f64) -> Self {
        debug_assert!(!stations.is_empty(), "trajectory without stations");
        Self { stations, duration }
    }

    /// A trajectory standing still at one station.
    pub fn single(station: impl Into<String>) -> Self {
        Self {
            stations: vec![station.into()],
            duration: 0.0,
        }
    }

    /// Stations in travel order.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Total travel time in minutes.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Number of stations on the route.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always `false`: construction and deserialization reject empty
    /// station lists.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of connections traversed.
    pub fn num_connections(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    /// Start station.
    pub fn first(&self) -> &str {
        self.stations.first().map(String::as_str).unwrap_or_default()
    }

    /// End station.
    pub fn last(&self) -> &str {
        self.stations.last().map(String::as_str).unwrap_or_default()
    }

    /// Canonical edge keys along the route, one per traversed connection.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.stations
            .windows(2)
            .map(|w| canonical_pair(w[0].as_str(), w[1].as_str()))
    }

    /// Distinct canonical edges on the route.
    pub fn unique_edges(&self) -> HashSet<(&str, &str)> {
        self.edges().collect()
    }

    /// The same route travelled in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut stations = self.stations.clone();
        stations.reverse();
        Self {
            stations,
            duration: self.duration,
        }
    }
}

/// One candidate line plan: an ordered bundle of trajectories that is
/// scored as a whole.
///
/// # Examples
///
/// ```
/// use u_railnet::models::{Trajectory, TrajectorySet};
///
/// let mut set = TrajectorySet::new();
/// set.push(Trajectory::single("Utrecht Centraal"));
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.total_duration(), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySet {
    trajectories: Vec<Trajectory>,
}

impl TrajectorySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a trajectory.
    pub fn push(&mut self, trajectory: Trajectory) {
        self.trajectories.push(trajectory);
    }

    /// Replaces the trajectory in `slot`, returning the old one.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of bounds.
    pub fn replace(&mut self, slot: usize, trajectory: Trajectory) -> Trajectory {
        std::mem::replace(&mut self.trajectories[slot], trajectory)
    }

    /// Trajectories in order.
    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    /// Iterates over the trajectories.
    pub fn iter(&self) -> std::slice::Iter<'_, Trajectory> {
        self.trajectories.iter()
    }

    /// Number of trajectories.
    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    /// Returns `true` if the set holds no trajectories.
    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    /// Sum of all trajectory durations.
    pub fn total_duration(&self) -> f64 {
        self.trajectories.iter().map(Trajectory::duration).sum()
    }

    /// Distinct canonical edges touched by any trajectory.
    pub fn covered_edges(&self) -> HashSet<(&str, &str)> {
        self.trajectories.iter().flat_map(|t| t.edges()).collect()
    }

    /// Returns `true` if no canonical edge is used by two trajectories.
    pub fn is_edge_disjoint(&self) -> bool {
        let mut seen = HashSet::new();
        self.trajectories
            .iter()
            .all(|t| t.unique_edges().into_iter().all(|e| seen.insert(e)))
    }

    /// Consumes the set, returning the trajectories.
    pub fn into_vec(self) -> Vec<Trajectory> {
        self.trajectories
    }
}

impl From<Vec<Trajectory>> for TrajectorySet {
    fn from(trajectories: Vec<Trajectory>) -> Self {
        Self { trajectories }
    }
}

impl FromIterator<Trajectory> for TrajectorySet {
    fn from_iter<I: IntoIterator<Item = Trajectory>>(iter: I) -> Self {
        Self {
            trajectories: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TrajectorySet {
    type Item = &'a Trajectory;
    type IntoIter = std::slice::Iter<'a, Trajectory>;

    fn into_iter(self) -> Self::IntoIter {
        self.trajectories.iter()
    }
}
