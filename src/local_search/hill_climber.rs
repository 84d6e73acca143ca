//! Hill climbing over line plans.
//!
//! # Algorithm
//!
//! Start from a generated (or supplied) line plan. Each iteration copies the
//! best plan so far, picks `k` distinct slots with `k` uniform in
//! `1..=max(1, len / 2)`, overwrites each slot with a fresh trajectory from
//! the [`RouteGenerator`], and scores the result. The copy replaces the best
//! plan only if its K-score is strictly higher.
//!
//! With a [`RandomWalkGenerator`] this is the random hill climber; with an
//! [`EndpointRouteGenerator`] it is the depth climber, whose replacements are
//! enumerated routes between random station pairs.
//!
//! Pure ascent: there is no restart or acceptance of worse moves, so the
//! search can stall in a local optimum.
//!
//! # Complexity
//!
//! O(iterations × (k·g + s)) where g is the cost of one generation and s of
//! one scoring pass.

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::enumeration::CandidatePool;
use crate::evaluation::{KScorer, ScoreConfig};
use crate::generators::{
    EndpointRouteGenerator, RandomWalkConfig, RandomWalkGenerator, RouteGenerator,
};
use crate::models::{RailNetwork, TrajectorySet};

/// Hill climbing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimberConfig {
    /// Number of mutation steps.
    pub iterations: usize,
    /// Trajectories in the generated initial plan.
    pub num_routes: usize,
    /// Keep a copy of the plan after every accepted move.
    pub record_snapshots: bool,
}

impl ClimberConfig {
    /// Sets the number of mutation steps.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the size of the initial plan.
    pub fn with_num_routes(mut self, num_routes: usize) -> Self {
        self.num_routes = num_routes;
        self
    }

    /// Enables or disables snapshots of accepted plans.
    pub fn with_snapshots(mut self, record: bool) -> Self {
        self.record_snapshots = record;
        self
    }
}

impl Default for ClimberConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            num_routes: 10,
            record_snapshots: false,
        }
    }
}

/// An improving move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AcceptedStep {
    /// Zero-based iteration of the move.
    pub iteration: usize,
    /// K-score after the move.
    pub score: f64,
}

/// Outcome of a climb.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClimbResult {
    /// Best plan found.
    pub best: TrajectorySet,
    /// K-score of `best`.
    pub best_score: f64,
    /// Initial score, then the score of every mutated plan.
    pub history: Vec<f64>,
    /// Accepted moves in order; their scores strictly increase.
    pub accepted: Vec<AcceptedStep>,
    /// Plan after each accepted move, if snapshots were enabled.
    pub snapshots: Vec<TrajectorySet>,
}

/// Outcome of [`HillClimber::sweep_route_counts`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    /// Initial plan size of the best climb.
    pub num_routes: usize,
    /// The best climb.
    pub best: ClimbResult,
    /// `(num_routes, best_score)` of every climb.
    pub runs: Vec<(usize, f64)>,
}

/// Hill climber parameterized by its route generator.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_railnet::models::{Connection, RailNetwork, Station};
/// use u_railnet::generators::RandomWalkGenerator;
/// use u_railnet::local_search::{ClimberConfig, HillClimber};
///
/// let net = RailNetwork::from_records(
///     ["A", "B", "C", "D"].map(|n| Station::new(n, 0.0, 0.0)),
///     [
///         Connection::new("A", "B", 10.0),
///         Connection::new("B", "C", 10.0),
///         Connection::new("C", "D", 10.0),
///     ],
/// )
/// .unwrap();
/// let config = ClimberConfig::default().with_iterations(200).with_num_routes(3);
/// let mut climber = HillClimber::new(&net, RandomWalkGenerator::default(), config);
///
/// let result = climber.run(&mut StdRng::seed_from_u64(42));
/// assert_eq!(result.history.len(), 201);
/// assert!(result.best_score >= result.history[0]);
/// ```
#[derive(Debug, Clone)]
pub struct HillClimber<'a, G> {
    scorer: KScorer<'a>,
    generator: G,
    config: ClimberConfig,
}

impl<'a, G: RouteGenerator> HillClimber<'a, G> {
    /// Creates a climber scoring with the default K-score.
    pub fn new(network: &'a RailNetwork, generator: G, config: ClimberConfig) -> Self {
        Self {
            scorer: KScorer::new(network),
            generator,
            config,
        }
    }

    /// Uses a custom scoring configuration.
    pub fn with_score_config(mut self, config: ScoreConfig) -> Self {
        self.scorer = self.scorer.with_config(config);
        self
    }

    /// Climbing parameters.
    pub fn config(&self) -> &ClimberConfig {
        &self.config
    }

    /// The route generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generates `num_routes` trajectories and climbs from there.
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> ClimbResult {
        let initial =
            self.generator
                .generate_set(self.scorer.network(), self.config.num_routes, rng);
        self.run_from(initial, rng)
    }

    /// Climbs from a caller-supplied plan.
    pub fn run_from<R: Rng>(&mut self, initial: TrajectorySet, rng: &mut R) -> ClimbResult {
        let mut best_score = self.scorer.score(&initial);
        let mut result = ClimbResult {
            best: initial,
            best_score,
            history: vec![best_score],
            accepted: Vec::new(),
            snapshots: Vec::new(),
        };

        if result.best.is_empty() {
            warn!(
                generator = self.generator.name(),
                "initial line plan is empty, nothing to climb"
            );
            return result;
        }

        result.history.reserve(self.config.iterations);
        for iteration in 0..self.config.iterations {
            let candidate = self.mutate(&result.best, rng);
            let score = self.scorer.score(&candidate);
            result.history.push(score);

            if score > best_score {
                debug!(
                    generator = self.generator.name(),
                    iteration,
                    score,
                    previous = best_score,
                    "climb step accepted"
                );
                best_score = score;
                if self.config.record_snapshots {
                    result.snapshots.push(candidate.clone());
                }
                result.best = candidate;
                result.accepted.push(AcceptedStep { iteration, score });
            }
        }

        result.best_score = best_score;
        info!(
            generator = self.generator.name(),
            iterations = self.config.iterations,
            accepted = result.accepted.len(),
            best_score,
            "hill climb finished"
        );
        result
    }

    /// Copy of `set` with between one and half of its trajectories
    /// replaced by fresh ones. A slot whose generation fails keeps its
    /// trajectory.
    pub fn mutate<R: Rng>(&mut self, set: &TrajectorySet, rng: &mut R) -> TrajectorySet {
        let mut next = set.clone();
        let len = next.len();
        if len == 0 {
            return next;
        }

        let k = rng.random_range(1..=(len / 2).max(1));
        for slot in index::sample(rng, len, k) {
            if let Some(fresh) = self.generator.generate(self.scorer.network(), rng) {
                next.replace(slot, fresh);
            }
        }
        next
    }

    /// Runs one climb per initial plan size in `counts` and keeps the
    /// strictly best one (earliest wins ties). Returns `None` when `counts`
    /// is empty.
    pub fn sweep_route_counts<I, R>(&mut self, counts: I, rng: &mut R) -> Option<SweepResult>
    where
        I: IntoIterator<Item = usize>,
        R: Rng,
    {
        let saved = self.config.num_routes;
        let mut best: Option<(usize, ClimbResult)> = None;
        let mut runs = Vec::new();

        for count in counts {
            self.config.num_routes = count;
            let climb = self.run(rng);
            runs.push((count, climb.best_score));
            let improved = best
                .as_ref()
                .is_none_or(|(_, b)| climb.best_score > b.best_score);
            if improved {
                best = Some((count, climb));
            }
        }
        self.config.num_routes = saved;

        let (num_routes, best) = best?;
        info!(
            runs = runs.len(),
            num_routes,
            best_score = best.best_score,
            "route count sweep finished"
        );
        Some(SweepResult {
            num_routes,
            best,
            runs,
        })
    }
}

/// Hill climbing with random walk replacements.
pub fn hill_climb<R: Rng>(
    network: &RailNetwork,
    walk: &RandomWalkConfig,
    config: &ClimberConfig,
    rng: &mut R,
) -> ClimbResult {
    HillClimber::new(network, RandomWalkGenerator::new(*walk), *config).run(rng)
}

/// Depth climbing: replacements are enumerated routes between random
/// station pairs, drawn from `pool`.
pub fn depth_climb<R: Rng>(
    network: &RailNetwork,
    pool: &CandidatePool,
    config: &ClimberConfig,
    rng: &mut R,
) -> ClimbResult {
    HillClimber::new(network, EndpointRouteGenerator::from_pool(pool), *config).run(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumeration::{enumerate, EnumerationConfig};
    use crate::models::{Connection, Station, Trajectory};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square() -> RailNetwork {
        RailNetwork::from_records(
            ["A", "B", "C", "D"].map(|n| Station::new(n, 0.0, 0.0)),
            [
                Connection::new("A", "B", 10.0),
                Connection::new("B", "C", 10.0),
                Connection::new("C", "D", 10.0),
                Connection::new("A", "D", 10.0),
            ],
        )
        .expect("valid network")
    }

    /// Always returns the same trajectory.
    struct Fixed(Option<Trajectory>);

    impl RouteGenerator for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn generate<R: Rng>(&mut self, _: &RailNetwork, _: &mut R) -> Option<Trajectory> {
            self.0.clone()
        }
    }

    #[test]
    fn test_history_and_monotone_best() {
        let net = square();
        let config = ClimberConfig::default().with_iterations(300).with_num_routes(4);
        let mut rng = StdRng::seed_from_u64(1);
        let result = hill_climb(&net, &RandomWalkConfig::default(), &config, &mut rng);

        assert_eq!(result.history.len(), 301);
        for pair in result.accepted.windows(2) {
            assert!(pair[0].score < pair[1].score);
            assert!(pair[0].iteration < pair[1].iteration);
        }
        assert!(result.best_score >= result.history[0]);
        let max = result.history.iter().copied().fold(f64::MIN, f64::max);
        assert!((result.best_score - max).abs() < 1e-10);
        assert!((KScorer::new(&net).score(&result.best) - result.best_score).abs() < 1e-10);
        assert!(result.snapshots.is_empty());
    }

    #[test]
    fn test_seeded_runs_match() {
        let net = square();
        let config = ClimberConfig::default().with_iterations(100).with_num_routes(3);
        let walk = RandomWalkConfig::default();
        let a = hill_climb(&net, &walk, &config, &mut StdRng::seed_from_u64(77));
        let b = hill_climb(&net, &walk, &config, &mut StdRng::seed_from_u64(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_snapshots_follow_accepted_moves() {
        let net = square();
        let config = ClimberConfig::default()
            .with_iterations(200)
            .with_num_routes(4)
            .with_snapshots(true);
        let mut rng = StdRng::seed_from_u64(5);
        let result = hill_climb(&net, &RandomWalkConfig::default(), &config, &mut rng);
        assert_eq!(result.snapshots.len(), result.accepted.len());
        if let Some(last) = result.snapshots.last() {
            assert_eq!(last, &result.best);
        }
    }

    #[test]
    fn test_empty_plan_returns_immediately() {
        let net = square();
        let mut climber = HillClimber::new(&net, Fixed(None), ClimberConfig::default());
        let result = climber.run(&mut StdRng::seed_from_u64(0));
        assert!(result.best.is_empty());
        assert_eq!(result.history, vec![0.0]);
        assert!(result.accepted.is_empty());
    }

    #[test]
    fn test_mutate_keeps_size_and_only_replaces() {
        let net = square();
        let fresh = net.trajectory(["C", "D"]).expect("walk");
        let generator = Fixed(Some(fresh.clone()));
        let mut climber = HillClimber::new(&net, generator, ClimberConfig::default());
        let plan: TrajectorySet = (0..6).map(|_| Trajectory::single("A")).collect();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let next = climber.mutate(&plan, &mut rng);
            assert_eq!(next.len(), 6);
            let replaced = next.iter().filter(|t| **t == fresh).count();
            assert!((1..=3).contains(&replaced), "replaced {replaced}");
        }
    }

    #[test]
    fn test_failed_generation_leaves_slot() {
        let net = square();
        let mut climber = HillClimber::new(&net, Fixed(None), ClimberConfig::default());
        let plan: TrajectorySet = vec![net.trajectory(["A", "B"]).expect("walk")].into();
        let next = climber.mutate(&plan, &mut StdRng::seed_from_u64(2));
        assert_eq!(next, plan);
    }

    #[test]
    fn test_depth_climb_uses_pool_routes() {
        let net = square();
        let pool = enumerate(&net, &EnumerationConfig::new(30.0, 4));
        let config = ClimberConfig::default().with_iterations(150).with_num_routes(5);
        let result = depth_climb(&net, &pool, &config, &mut StdRng::seed_from_u64(21));
        for t in &result.best {
            assert!(pool.candidates().contains(t));
        }
        assert!(result.best_score >= result.history[0]);
    }

    #[test]
    fn test_sweep_keeps_best_count() {
        let net = square();
        let config = ClimberConfig::default().with_iterations(50);
        let mut climber = HillClimber::new(&net, RandomWalkGenerator::default(), config);
        let sweep = climber
            .sweep_route_counts(2..=4, &mut StdRng::seed_from_u64(3))
            .expect("non-empty sweep");
        assert_eq!(sweep.runs.len(), 3);
        let max = sweep.runs.iter().map(|r| r.1).fold(f64::MIN, f64::max);
        assert!((sweep.best.best_score - max).abs() < 1e-10);
        assert_eq!(climber.config().num_routes, 10);
        assert!(climber
            .sweep_route_counts(std::iter::empty(), &mut StdRng::seed_from_u64(3))
            .is_none());
    }
}
