//! Rail network graph: stations, connections, and the adjacency index.

use std::collections::HashMap;

use crate::error::{NetworkError, NetworkResult};

use super::{Connection, EdgeKey, Station, Trajectory};

/// One entry of a station's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Adjacent {
    /// Index of the neighbouring station.
    pub station: usize,
    /// Travel time of this connection.
    pub time: f64,
    /// Index of the canonical edge (shared by parallel connections).
    pub edge: usize,
}

/// Undirected, weighted rail network.
///
/// Stations are kept in insertion order and adjacency lists preserve the
/// order in which connections were added, so every search over the network
/// visits neighbours in a reproducible order. Parallel connections between
/// the same pair are all kept; coverage treats them as one canonical edge.
///
/// # Examples
///
/// ```
/// use u_railnet::models::{RailNetwork, Station};
///
/// let mut net = RailNetwork::new();
/// net.add_station(Station::new("Alkmaar", 52.63, 4.74)).unwrap();
/// net.add_station(Station::new("Hoorn", 52.64, 5.06)).unwrap();
/// net.add_edge("Alkmaar", "Hoorn", 24.0).unwrap();
///
/// assert_eq!(net.neighbors("Hoorn").unwrap(), vec![("Alkmaar", 24.0)]);
/// assert_eq!(net.num_edges(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RailNetwork {
    stations: Vec<Station>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<Adjacent>>,
    connections: Vec<Connection>,
    edges: Vec<EdgeKey>,
    edge_index: HashMap<EdgeKey, usize>,
}

impl RailNetwork {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a network from loader records.
    ///
    /// Stations are added first, then connections, both in the given order.
    pub fn from_records<S, C>(stations: S, connections: C) -> NetworkResult<Self>
    where
        S: IntoIterator<Item = Station>,
        C: IntoIterator<Item = Connection>,
    {
        let mut network = Self::new();
        for station in stations {
            network.add_station(station)?;
        }
        for c in connections {
            network.add_edge(&c.station_a, &c.station_b, c.time)?;
        }
        Ok(network)
    }

    /// Adds a station.
    ///
    /// Names are unique: adding a second station with an existing name is
    /// rejected with [`NetworkError::DuplicateStation`] and leaves the
    /// network unchanged.
    pub fn add_station(&mut self, station: Station) -> NetworkResult<()> {
        if self.index.contains_key(station.name()) {
            return Err(NetworkError::DuplicateStation(station.name().to_owned()));
        }
        self.index
            .insert(station.name().to_owned(), self.stations.len());
        self.stations.push(station);
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Adds an undirected connection with travel time `time`.
    ///
    /// Both endpoints must already exist and the time must be finite and
    /// strictly positive.
    pub fn add_edge(&mut self, a: &str, b: &str, time: f64) -> NetworkResult<()> {
        let ia = self.require(a)?;
        let ib = self.require(b)?;
        if ia == ib {
            return Err(NetworkError::SelfLoop(a.to_owned()));
        }
        if !time.is_finite() || time <= 0.0 {
            return Err(NetworkError::InvalidWeight {
                station_a: a.to_owned(),
                station_b: b.to_owned(),
                time,
            });
        }

        let key = EdgeKey::new(a, b);
        let edge = match self.edge_index.get(&key) {
            Some(&id) => id,
            None => {
                let id = self.edges.len();
                self.edges.push(key.clone());
                self.edge_index.insert(key, id);
                id
            }
        };

        self.adjacency[ia].push(Adjacent {
            station: ib,
            time,
            edge,
        });
        self.adjacency[ib].push(Adjacent {
            station: ia,
            time,
            edge,
        });
        self.connections.push(Connection::new(a, b, time));
        Ok(())
    }

    /// Neighbours of `name` with connection times, in insertion order.
    ///
    /// A neighbour reachable over parallel connections appears once per
    /// connection.
    pub fn neighbors(&self, name: &str) -> NetworkResult<Vec<(&str, f64)>> {
        let i = self.require(name)?;
        Ok(self.adjacency[i]
            .iter()
            .map(|a| (self.stations[a.station].name(), a.time))
            .collect())
    }

    /// Looks up a station by name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.index.get(name).map(|&i| &self.stations[i])
    }

    /// Returns `true` if a station with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All stations in insertion order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All connection records in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Distinct canonical edges in first-seen order.
    pub fn edge_keys(&self) -> &[EdgeKey] {
        &self.edges
    }

    /// Number of stations.
    pub fn num_stations(&self) -> usize {
        self.stations.len()
    }

    /// Number of connection records, parallel connections counted apiece.
    pub fn num_connections(&self) -> usize {
        self.connections.len()
    }

    /// Number of distinct canonical edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of connections incident to `name`.
    pub fn degree(&self, name: &str) -> NetworkResult<usize> {
        let i = self.require(name)?;
        Ok(self.adjacency[i].len())
    }

    /// Travel time between two adjacent stations.
    ///
    /// With parallel connections the first one added wins. Returns `None`
    /// if either station is unknown or the two are not adjacent.
    pub fn travel_time(&self, a: &str, b: &str) -> Option<f64> {
        let ia = *self.index.get(a)?;
        let ib = *self.index.get(b)?;
        self.adjacency[ia]
            .iter()
            .find(|adj| adj.station == ib)
            .map(|adj| adj.time)
    }

    /// Builds a trajectory from a station sequence, summing connection times.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_railnet::models::{Connection, RailNetwork, Station};
    ///
    /// let net = RailNetwork::from_records(
    ///     ["A", "B", "C"].map(|n| Station::new(n, 0.0, 0.0)),
    ///     [Connection::new("A", "B", 10.0), Connection::new("B", "C", 15.0)],
    /// )
    /// .unwrap();
    /// let t = net.trajectory(["A", "B", "C"]).unwrap();
    /// assert_eq!(t.duration(), 25.0);
    /// ```
    pub fn trajectory<I, S>(&self, stations: I) -> NetworkResult<Trajectory>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = stations
            .into_iter()
            .map(|s| s.as_ref().to_owned())
            .collect();
        let Some(first) = names.first() else {
            return Err(NetworkError::EmptyTrajectory);
        };
        self.require(first)?;

        let mut duration = 0.0;
        for w in names.windows(2) {
            self.require(&w[1])?;
            duration += self
                .travel_time(&w[0], &w[1])
                .ok_or_else(|| NetworkError::MissingConnection(w[0].clone(), w[1].clone()))?;
        }
        Ok(Trajectory::from_parts(names, duration))
    }

    /// Index of `name`, or [`NetworkError::UnknownStation`].
    pub(crate) fn require(&self, name: &str) -> NetworkResult<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| NetworkError::UnknownStation(name.to_owned()))
    }

    /// Adjacency list of the station at `index`.
    pub(crate) fn adjacent(&self, index: usize) -> &[Adjacent] {
        &self.adjacency[index]
    }

    /// Name of the station at `index`.
    pub(crate) fn name_of(&self, index: usize) -> &str {
        self.stations[index].name()
    }

    /// Converts a sequence of station indices into an owned trajectory.
    pub(crate) fn trajectory_from_indices(&self, route: &[usize], duration: f64) -> Trajectory {
        Trajectory::from_parts(
            route.iter().map(|&i| self.name_of(i).to_owned()).collect(),
            duration,
        )
    }
}
