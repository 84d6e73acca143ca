//! Enumerated-endpoint route generator (depth climbing).
//!
//! Picks a random start and a random end station and draws uniformly among
//! the depth-first routes between them. Routes come either from an
//! enumerated [`CandidatePool`] or from [`routes_between`], computed once
//! per station pair and cached.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::enumeration::{routes_between, CandidatePool};
use crate::error::NetworkResult;
use crate::models::{RailNetwork, Trajectory};

use super::{random_station, RouteGenerator};

type PairKey = (String, String);

#[derive(Debug, Clone)]
enum RouteSource {
    Pool,
    OnDemand { max_duration: f64 },
}

/// Draws routes between random station pairs.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_railnet::models::{Connection, RailNetwork, Station};
/// use u_railnet::generators::{EndpointRouteGenerator, RouteGenerator};
///
/// let net = RailNetwork::from_records(
///     ["A", "B", "C"].map(|n| Station::new(n, 0.0, 0.0)),
///     [Connection::new("A", "B", 10.0), Connection::new("B", "C", 10.0)],
/// )
/// .unwrap();
/// let mut generator = EndpointRouteGenerator::on_demand(180.0);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let plan = generator.generate_set(&net, 10, &mut rng);
/// assert!(plan.len() <= 10);
/// ```
#[derive(Debug, Clone)]
pub struct EndpointRouteGenerator {
    source: RouteSource,
    routes: HashMap<PairKey, Vec<Trajectory>>,
}

impl EndpointRouteGenerator {
    /// Groups the candidates of an enumeration run by their endpoints.
    pub fn from_pool(pool: &CandidatePool) -> Self {
        let mut routes: HashMap<PairKey, Vec<Trajectory>> = HashMap::new();
        for t in pool {
            routes
                .entry((t.first().to_owned(), t.last().to_owned()))
                .or_default()
                .push(t.clone());
        }
        Self {
            source: RouteSource::Pool,
            routes,
        }
    }

    /// Searches the routes of each station pair on first use.
    pub fn on_demand(max_duration: f64) -> Self {
        Self {
            source: RouteSource::OnDemand { max_duration },
            routes: HashMap::new(),
        }
    }

    /// Routes from `start` to `end` known to this generator.
    ///
    /// Fails with [`UnknownStation`](crate::NetworkError::UnknownStation) if
    /// either name is not in `network`; nothing is cached in that case.
    pub fn routes_for(
        &mut self,
        network: &RailNetwork,
        start: &str,
        end: &str,
    ) -> NetworkResult<&[Trajectory]> {
        network.require(start)?;
        network.require(end)?;
        let key = (start.to_owned(), end.to_owned());
        let routes = match self.source {
            RouteSource::Pool => self.routes.get(&key).map(Vec::as_slice).unwrap_or(&[]),
            RouteSource::OnDemand { max_duration } => match self.routes.entry(key) {
                Entry::Occupied(e) => e.into_mut().as_slice(),
                Entry::Vacant(e) => e
                    .insert(routes_between(network, start, end, max_duration)?)
                    .as_slice(),
            },
        };
        Ok(routes)
    }
}

impl RouteGenerator for EndpointRouteGenerator {
    fn name(&self) -> &str {
        "endpoint_routes"
    }

    fn generate<R: Rng>(&mut self, network: &RailNetwork, rng: &mut R) -> Option<Trajectory> {
        let start = random_station(network, rng)?;
        let end = random_station(network, rng)?;
        self.routes_for(network, start, end).ok()?.choose(rng).cloned()
    }
}
