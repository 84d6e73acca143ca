//! Random line plan baseline.
//!
//! Samples line plans made of random walks and records their K-scores, to
//! give a reference distribution for the optimizers.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::generators::{RandomWalkConfig, RandomWalkGenerator, RouteGenerator};

use super::KScorer;

/// Sampling parameters of the random baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineConfig {
    /// Number of line plans to sample.
    pub samples: usize,
    /// Fewest trajectories per plan.
    pub min_routes: usize,
    /// Most trajectories per plan.
    pub max_routes: usize,
    /// Bounds of each random walk.
    pub walk: RandomWalkConfig,
}

impl BaselineConfig {
    /// Sets the sample count.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Sets the range of trajectories per plan.
    pub fn with_routes(mut self, min_routes: usize, max_routes: usize) -> Self {
        self.min_routes = min_routes;
        self.max_routes = max_routes;
        self
    }

    /// Sets the walk bounds.
    pub fn with_walk(mut self, walk: RandomWalkConfig) -> Self {
        self.walk = walk;
        self
    }
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            samples: 1000,
            min_routes: 1,
            max_routes: 20,
            walk: RandomWalkConfig::baseline(),
        }
    }
}

/// K-scores of the sampled plans, in sampling order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BaselineSummary {
    /// One score per sampled plan.
    pub scores: Vec<f64>,
}

impl BaselineSummary {
    /// Highest sampled score.
    pub fn best(&self) -> Option<f64> {
        self.scores.iter().copied().reduce(f64::max)
    }

    /// Lowest sampled score.
    pub fn worst(&self) -> Option<f64> {
        self.scores.iter().copied().reduce(f64::min)
    }

    /// Mean sampled score.
    pub fn mean(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        Some(self.scores.iter().sum::<f64>() / self.scores.len() as f64)
    }
}

/// Samples random line plans and scores them.
///
/// Each plan gets a route count drawn uniformly from
/// `[min_routes, max_routes]`, each route being a random walk from a random
/// station. The network is the one `scorer` was built for.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_railnet::models::{Connection, RailNetwork, Station};
/// use u_railnet::evaluation::{random_baseline, BaselineConfig, KScorer};
///
/// let net = RailNetwork::from_records(
///     ["A", "B", "C"].map(|n| Station::new(n, 0.0, 0.0)),
///     [Connection::new("A", "B", 10.0), Connection::new("B", "C", 10.0)],
/// )
/// .unwrap();
/// let config = BaselineConfig::default().with_samples(25);
///
/// let summary = random_baseline(&KScorer::new(&net), &config, &mut StdRng::seed_from_u64(1));
/// assert_eq!(summary.scores.len(), 25);
/// ```
pub fn random_baseline<R: Rng>(
    scorer: &KScorer<'_>,
    config: &BaselineConfig,
    rng: &mut R,
) -> BaselineSummary {
    let network = scorer.network();
    let mut generator = RandomWalkGenerator::new(config.walk);
    let lo = config.min_routes.min(config.max_routes);
    let hi = config.min_routes.max(config.max_routes);

    let scores: Vec<f64> = (0..config.samples)
        .map(|_| {
            let count = rng.random_range(lo..=hi);
            scorer.score(&generator.generate_set(network, count, rng))
        })
        .collect();

    let summary = BaselineSummary { scores };
    info!(
        samples = config.samples,
        best = summary.best(),
        mean = summary.mean(),
        "random baseline sampled"
    );
    summary
}
