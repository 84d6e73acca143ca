//! Constructive heuristics for building line plans.
//!
//! - [`greedy_select`] — greedy edge-disjoint set covering over a candidate
//!   pool, O(c log c)
//! - [`greedy_restarts`] — greedy covering once per forced first pick, best
//!   plan kept
//! - [`heuristic_walks`] — deterministic shortest-hop walks from hub stations

mod greedy;
mod heuristic_walk;
mod restarts;

pub use greedy::{greedy_select, GreedyConfig, RankedCandidates};
pub use heuristic_walk::{heuristic_walks, HeuristicConfig};
pub use restarts::{greedy_restarts, RestartResult};
