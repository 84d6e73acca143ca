//! Route generators that feed the local search.
//!
//! A generator produces one fresh trajectory per call. The hill climber
//! uses it both to build its initial line plan and to replace trajectories
//! during mutation.
//!
//! - [`RandomWalkGenerator`] — bounded random walk from a random station
//! - [`EndpointRouteGenerator`] — random pick among the routes between a
//!   random pair of stations

mod endpoint;
mod random_walk;

pub use endpoint::EndpointRouteGenerator;
pub use random_walk::{random_walk, RandomWalkConfig, RandomWalkGenerator};

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::models::{RailNetwork, Trajectory, TrajectorySet};

/// Produces replacement trajectories for the local search.
///
/// All randomness is drawn from the caller's generator, so a seeded `rng`
/// makes every call reproducible.
pub trait RouteGenerator {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Generates one trajectory, or `None` if this attempt found no route.
    fn generate<R: Rng>(&mut self, network: &RailNetwork, rng: &mut R) -> Option<Trajectory>;

    /// Makes `count` generation attempts and collects the successes.
    fn generate_set<R: Rng>(
        &mut self,
        network: &RailNetwork,
        count: usize,
        rng: &mut R,
    ) -> TrajectorySet {
        (0..count)
            .filter_map(|_| self.generate(network, rng))
            .collect()
    }
}

/// Uniformly random station name, `None` for an empty network.
pub(crate) fn random_station<'n, R: Rng>(network: &'n RailNetwork, rng: &mut R) -> Option<&'n str> {
    network.stations().choose(rng).map(|s| s.name())
}
