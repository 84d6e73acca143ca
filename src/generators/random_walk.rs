//! Bounded random walk.
//!
//! # Algorithm
//!
//! Draw a step ceiling uniformly from `[min_steps, max_steps]`. From the
//! start station, repeatedly pick a neighbour uniformly among those still
//! below the per-station visit cap and travel there. The walk ends when the
//! ceiling is reached, no neighbour is eligible, or the picked connection
//! would take the walk past `max_duration`.
//!
//! Stations may repeat up to the visit cap, so walks are not necessarily
//! loop-free.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::NetworkResult;
use crate::models::{RailNetwork, Trajectory};

use super::{random_station, RouteGenerator};

/// Bounds of a random walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RandomWalkConfig {
    /// Time budget of one walk, in minutes.
    pub max_duration: f64,
    /// Lower end of the step ceiling draw.
    pub min_steps: usize,
    /// Upper end of the step ceiling draw.
    pub max_steps: usize,
    /// Visits allowed per station, the start included. `None` is unbounded.
    pub max_visits_per_station: Option<usize>,
}

impl RandomWalkConfig {
    /// Walk bounds used for random baseline sampling: 1 to 20 steps, no
    /// visit cap.
    pub fn baseline() -> Self {
        Self {
            max_duration: 180.0,
            min_steps: 1,
            max_steps: 20,
            max_visits_per_station: None,
        }
    }

    /// Sets the time budget.
    pub fn with_max_duration(mut self, max_duration: f64) -> Self {
        self.max_duration = max_duration;
        self
    }

    /// Sets the step ceiling range.
    pub fn with_steps(mut self, min_steps: usize, max_steps: usize) -> Self {
        self.min_steps = min_steps;
        self.max_steps = max_steps;
        self
    }

    /// Sets the visit cap.
    pub fn with_max_visits(mut self, cap: Option<usize>) -> Self {
        self.max_visits_per_station = cap;
        self
    }
}

impl Default for RandomWalkConfig {
    fn default() -> Self {
        Self {
            max_duration: 180.0,
            min_steps: 2,
            max_steps: 50,
            max_visits_per_station: Some(2),
        }
    }
}

/// Random walk from `start`.
///
/// Always returns a trajectory; if the first step already fails it is the
/// single start station with duration zero.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_railnet::models::{Connection, RailNetwork, Station};
/// use u_railnet::generators::{random_walk, RandomWalkConfig};
///
/// let net = RailNetwork::from_records(
///     ["A", "B"].map(|n| Station::new(n, 0.0, 0.0)),
///     [Connection::new("A", "B", 10.0)],
/// )
/// .unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let config = RandomWalkConfig::default().with_max_visits(Some(1));
///
/// let walk = random_walk(&net, "A", &config, &mut rng).unwrap();
/// assert_eq!(walk.stations(), ["A", "B"]);
/// ```
pub fn random_walk<R: Rng>(
    network: &RailNetwork,
    start: &str,
    config: &RandomWalkConfig,
    rng: &mut R,
) -> NetworkResult<Trajectory> {
    let start = network.require(start)?;
    let lo = config.min_steps.min(config.max_steps);
    let hi = config.min_steps.max(config.max_steps);
    let steps = rng.random_range(lo..=hi);

    let mut visits = vec![0usize; network.num_stations()];
    visits[start] = 1;
    let mut route = vec![start];
    let mut time = 0.0;
    let mut current = start;
    let mut options = Vec::new();

    for _ in 0..steps {
        options.clear();
        options.extend(network.adjacent(current).iter().copied().filter(|a| {
            config
                .max_visits_per_station
                .is_none_or(|cap| visits[a.station] < cap)
        }));

        let Some(&step) = options.choose(rng) else {
            break;
        };
        if time + step.time > config.max_duration {
            break;
        }
        time += step.time;
        visits[step.station] += 1;
        route.push(step.station);
        current = step.station;
    }

    Ok(network.trajectory_from_indices(&route, time))
}

/// Random walks from uniformly random start stations.
#[derive(Debug, Clone, Default)]
pub struct RandomWalkGenerator {
    config: RandomWalkConfig,
}

impl RandomWalkGenerator {
    /// Creates a generator with the given walk bounds.
    pub fn new(config: RandomWalkConfig) -> Self {
        Self { config }
    }

    /// Walk bounds.
    pub fn config(&self) -> &RandomWalkConfig {
        &self.config
    }
}

impl RouteGenerator for RandomWalkGenerator {
    fn name(&self) -> &str {
        "random_walk"
    }

    fn generate<R: Rng>(&mut self, network: &RailNetwork, rng: &mut R) -> Option<Trajectory> {
        let start = random_station(network, rng)?;
        random_walk(network, start, &self.config, rng).ok()
    }
}
