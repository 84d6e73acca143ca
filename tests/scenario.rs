//! End-to-end runs on the four-station square network.

use rand::rngs::StdRng;
use rand::SeedableRng;
use u_railnet::constructive::{
    greedy_restarts, greedy_select, heuristic_walks, GreedyConfig, HeuristicConfig,
};
use u_railnet::enumeration::{enumerate, enumerate_from, EnumerationConfig};
use u_railnet::evaluation::{k_score, KScorer};
use u_railnet::generators::RandomWalkConfig;
use u_railnet::local_search::{depth_climb, hill_climb, ClimberConfig};
use u_railnet::models::{Connection, RailNetwork, Station, TrajectorySet};

fn square() -> RailNetwork {
    RailNetwork::from_records(
        [
            Station::new("A", 52.0, 4.0),
            Station::new("B", 52.1, 4.0),
            Station::new("C", 52.1, 4.1),
            Station::new("D", 52.0, 4.1),
        ],
        [
            Connection::new("A", "B", 10.0),
            Connection::new("B", "C", 10.0),
            Connection::new("C", "D", 10.0),
            Connection::new("A", "D", 10.0),
        ],
    )
    .expect("valid network")
}

fn config() -> EnumerationConfig {
    EnumerationConfig::new(30.0, 4).with_max_connection_reuse(1)
}

#[test]
fn test_enumeration_from_a() {
    let net = square();
    let pool = enumerate_from(&net, "A", &config()).expect("known station");

    let full = pool
        .iter()
        .find(|t| t.stations() == ["A", "B", "C", "D"])
        .expect("A-B-C-D enumerated");
    assert!((full.duration() - 30.0).abs() < 1e-10);

    for t in &pool {
        let ab = t.edges().filter(|e| *e == ("A", "B")).count();
        assert!(ab <= 1, "{:?} uses A-B {ab} times", t.stations());
        assert!(t.duration() <= 30.0);
    }
}

#[test]
fn test_greedy_single_route_covers_three_edges() {
    let net = square();
    let pool = enumerate(&net, &config());
    let plan = greedy_select(pool.candidates(), &net, &GreedyConfig::new(1, 30.0), 0);

    assert_eq!(plan.len(), 1);
    assert_eq!(plan.trajectories()[0].num_connections(), 3);
    let breakdown = KScorer::new(&net).breakdown(&plan);
    assert!((breakdown.coverage - 0.75).abs() < 1e-10);
    assert!((breakdown.score - (7500.0 - 130.0)).abs() < 1e-10);
}

#[test]
fn test_full_cover_with_one_route() {
    let net = square();
    let plan: TrajectorySet = vec![net.trajectory(["A", "B", "C", "D", "A"]).expect("cycle")].into();
    assert!((k_score(&plan, &net) - (10_000.0 - (100.0 + 40.0))).abs() < 1e-10);
}

#[test]
fn test_restarts_beat_or_match_plain_greedy() {
    let net = square();
    let pool = enumerate(&net, &config());
    let scorer = KScorer::new(&net);
    let greedy = GreedyConfig::new(2, 30.0);

    let plain = scorer.score(&greedy_select(pool.candidates(), &net, &greedy, usize::MAX));
    let restarts = greedy_restarts(pool.candidates(), &net, &greedy, &scorer, 0..pool.len())
        .expect("non-empty pool");
    assert!(restarts.best_score >= plain);
    assert!(restarts.best.is_edge_disjoint());
}

#[test]
fn test_hub_walks_cover_network() {
    let net = square();
    let plan = heuristic_walks(&net, &HeuristicConfig::default());
    assert_eq!(plan.covered_edges().len(), 4);
}

#[test]
fn test_seeded_climbs_reproduce() {
    let net = square();
    let climb = ClimberConfig::default().with_iterations(250).with_num_routes(3);
    let walk = RandomWalkConfig::default().with_max_duration(30.0);

    let a = hill_climb(&net, &walk, &climb, &mut StdRng::seed_from_u64(2024));
    let b = hill_climb(&net, &walk, &climb, &mut StdRng::seed_from_u64(2024));
    assert_eq!(a.accepted, b.accepted);
    assert_eq!(a.history, b.history);

    let pool = enumerate(&net, &config());
    let a = depth_climb(&net, &pool, &climb, &mut StdRng::seed_from_u64(7));
    let b = depth_climb(&net, &pool, &climb, &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}

#[test]
fn test_results_serialize() {
    let net = square();
    let climb = ClimberConfig::default().with_iterations(20).with_num_routes(2);
    let mut rng = StdRng::seed_from_u64(1);
    let result = hill_climb(&net, &RandomWalkConfig::default(), &climb, &mut rng);
    let json = serde_json::to_value(&result).expect("serializable");
    assert_eq!(json["history"].as_array().map(Vec::len), Some(21));

    let breakdown = KScorer::new(&net).breakdown(&result.best);
    let json = serde_json::to_value(breakdown).expect("serializable");
    assert_eq!(json["total_edges"], 4);
}
