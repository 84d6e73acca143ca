//! Error types for network construction and station lookup.
//!
//! Searches over an already-built network never fail on their own: an
//! empty candidate pool or an empty trajectory set is a normal result.
//! Errors only arise when a caller names a station the network does not
//! know, or feeds the network a malformed connection.

use thiserror::Error;

/// Result alias for network operations.
pub type NetworkResult<T> = Result<T, NetworkError>;

/// Errors raised by [`RailNetwork`](crate::models::RailNetwork) and the
/// search entry points that take station names.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// A station with this name was already added.
    #[error("station '{0}' already exists")]
    DuplicateStation(String),

    /// The named station is not part of the network.
    #[error("unknown station '{0}'")]
    UnknownStation(String),

    /// Travel time must be finite and strictly positive.
    #[error("invalid travel time {time} on connection '{station_a}' - '{station_b}'")]
    InvalidWeight {
        /// First endpoint.
        station_a: String,
        /// Second endpoint.
        station_b: String,
        /// Rejected travel time.
        time: f64,
    },

    /// A connection from a station to itself.
    #[error("connection from '{0}' to itself")]
    SelfLoop(String),

    /// Two consecutive stations of a trajectory are not connected.
    #[error("no connection between '{0}' and '{1}'")]
    MissingConnection(String, String),

    /// A trajectory needs at least one station.
    #[error("trajectory has no stations")]
    EmptyTrajectory,
}
