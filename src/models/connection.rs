//! Connections and canonical edge keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Orders two station names so that both traversal directions of a
/// connection map to the same pair.
///
/// # Examples
///
/// ```
/// use u_railnet::models::canonical_pair;
///
/// assert_eq!(canonical_pair("Hoorn", "Alkmaar"), ("Alkmaar", "Hoorn"));
/// assert_eq!(canonical_pair("Alkmaar", "Hoorn"), ("Alkmaar", "Hoorn"));
/// ```
pub fn canonical_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Owned canonical edge key: the sorted pair of station names.
///
/// Parallel connections between the same two stations share one key, so
/// coverage counts the pair once no matter how many timetabled links
/// exist between them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    first: String,
    second: String,
}

impl EdgeKey {
    /// Creates the key for the unordered pair `{a, b}`.
    pub fn new(a: &str, b: &str) -> Self {
        let (first, second) = canonical_pair(a, b);
        Self {
            first: first.to_owned(),
            second: second.to_owned(),
        }
    }

    /// The lexicographically smaller station name.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The lexicographically larger station name.
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Borrowed form, comparable with [`canonical_pair`] output.
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.first, self.second)
    }
}

/// A timed link between two stations, as supplied by the loader.
///
/// # Examples
///
/// ```
/// use u_railnet::models::Connection;
///
/// let c = Connection::new("Hoorn", "Alkmaar", 24.0);
/// assert_eq!(c.key().as_pair(), ("Alkmaar", "Hoorn"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// One endpoint.
    pub station_a: String,
    /// The other endpoint.
    pub station_b: String,
    /// Travel time in minutes.
    pub time: f64,
}

impl Connection {
    /// Creates a connection record.
    pub fn new(station_a: impl Into<String>, station_b: impl Into<String>, time: f64) -> Self {
        Self {
            station_a: station_a.into(),
            station_b: station_b.into(),
            time,
        }
    }

    /// Canonical key of this connection.
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(&self.station_a, &self.station_b)
    }
}
