//! # u-railnet
//!
//! Rail line planning library: builds sets of time-bounded train
//! trajectories over a station network, scored by how much of the network
//! they cover against how many routes and minutes they use.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Station, Connection, RailNetwork, Trajectory, TrajectorySet)
//! - [`enumeration`] — Bounded depth-first route enumeration
//! - [`evaluation`] — K-score and random baselines
//! - [`constructive`] — Greedy covering and hub-walk heuristics
//! - [`generators`] — Random walk and enumerated-endpoint route generators
//! - [`local_search`] — Hill climbing and depth climbing
//! - [`error`] — Network construction and lookup errors

pub mod constructive;
pub mod enumeration;
pub mod error;
pub mod evaluation;
pub mod generators;
pub mod local_search;
pub mod models;

pub use error::{NetworkError, NetworkResult};
