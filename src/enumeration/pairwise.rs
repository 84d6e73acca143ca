//! All loop-free routes between two given stations.

use crate::error::NetworkResult;
use crate::models::{RailNetwork, Trajectory};

use super::walker::{Expand, WalkLimits, Walker};

/// Finds every loop-free route from `start` to `end` whose duration stays
/// within `max_duration`.
///
/// Routes are returned in depth-first discovery order. A route is not
/// extended past `end`. For `start == end` the single-station route is the
/// only result.
///
/// # Examples
///
/// ```
/// use u_railnet::models::{Connection, RailNetwork, Station};
/// use u_railnet::enumeration::routes_between;
///
/// let net = RailNetwork::from_records(
///     ["A", "B", "C", "D"].map(|n| Station::new(n, 0.0, 0.0)),
///     [
///         Connection::new("A", "B", 10.0),
///         Connection::new("B", "C", 10.0),
///         Connection::new("C", "D", 10.0),
///         Connection::new("A", "D", 10.0),
///     ],
/// )
/// .unwrap();
///
/// let routes = routes_between(&net, "A", "C", 30.0).unwrap();
/// assert_eq!(routes.len(), 2); // A-B-C and A-D-C
/// ```
pub fn routes_between(
    network: &RailNetwork,
    start: &str,
    end: &str,
    max_duration: f64,
) -> NetworkResult<Vec<Trajectory>> {
    let start = network.require(start)?;
    let end = network.require(end)?;

    let limits = WalkLimits {
        max_duration,
        max_stations: usize::MAX,
        max_reuse: usize::MAX,
    };
    let mut routes = Vec::new();
    Walker::new(network).walk(start, limits, |network, route, time| {
        if route.last() == Some(&end) {
            routes.push(network.trajectory_from_indices(route, time));
            Expand::Prune
        } else {
            Expand::Continue
        }
    });
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Connection, Station};

    fn network() -> RailNetwork {
        RailNetwork::from_records(
            ["A", "B", "C", "D", "E"].map(|n| Station::new(n, 0.0, 0.0)),
            [
                Connection::new("A", "B", 10.0),
                Connection::new("B", "C", 10.0),
                Connection::new("C", "D", 10.0),
                Connection::new("A", "D", 10.0),
                Connection::new("A", "C", 25.0),
            ],
        )
        .expect("valid network")
    }

    #[test]
    fn test_routes_sorted_by_discovery() {
        let net = network();
        let routes = routes_between(&net, "A", "C", 30.0).expect("known");
        let durations: Vec<f64> = routes.iter().map(Trajectory::duration).collect();
        assert_eq!(durations, vec![20.0, 20.0, 25.0]);
        assert!(routes.iter().all(|r| r.first() == "A" && r.last() == "C"));
    }

    #[test]
    fn test_time_limit_prunes() {
        let net = network();
        let routes = routes_between(&net, "A", "C", 19.0).expect("known");
        assert!(routes.is_empty());
    }

    #[test]
    fn test_same_endpoint() {
        let net = network();
        let routes = routes_between(&net, "B", "B", 30.0).expect("known");
        assert_eq!(routes, vec![Trajectory::single("B")]);
    }

    #[test]
    fn test_unreachable_and_unknown() {
        let net = network();
        assert!(routes_between(&net, "A", "E", 100.0)
            .expect("known")
            .is_empty());
        assert!(routes_between(&net, "A", "Z", 100.0).is_err());
    }

    #[test]
    fn test_routes_are_loop_free() {
        let net = network();
        for r in routes_between(&net, "B", "D", 100.0).expect("known") {
            let mut stations = r.stations().to_vec();
            stations.sort();
            stations.dedup();
            assert_eq!(stations.len(), r.len());
        }
    }
}
