//! Exhaustive route search over the rail network.
//!
//! - [`enumerate`] — bounded depth-first enumeration from every station
//! - [`enumerate_from`] — the same search from one station
//! - [`routes_between`] — all loop-free routes between two stations
//! - [`CandidatePool`] — deduplicated enumeration result

mod depth_first;
mod pairwise;
mod pool;
mod walker;

pub use depth_first::{enumerate, enumerate_from, EnumerationConfig, ReuseScope};
pub use pairwise::routes_between;
pub use pool::{CandidateIdentity, CandidatePool};
