//! Domain model types for rail line planning.
//!
//! Provides the core abstractions: named stations, timed connections with
//! their canonical edge keys, the read-only network graph, and trajectories
//! bundled into candidate line plans.

mod connection;
mod network;
mod station;
mod trajectory;

pub use connection::{canonical_pair, Connection, EdgeKey};
pub use network::RailNetwork;
pub use station::Station;
pub use trajectory::{Trajectory, TrajectorySet};
