//! Explicit-stack depth-first walker shared by the enumerators.
//!
//! One route vector, one visited vector and one usage counter are mutated
//! in place: a step pushes onto all three, backtracking undoes the push.
//! No state is cloned per search node.

use crate::models::RailNetwork;

/// Bounds applied while extending a route.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WalkLimits {
    /// A step is skipped if it would push the route time past this.
    pub max_duration: f64,
    /// Nodes holding this many stations are not extended.
    pub max_stations: usize,
    /// A step over a canonical edge whose counter reached this is skipped.
    pub max_reuse: usize,
}

/// Decision of the visitor for the node just reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expand {
    Continue,
    Prune,
}

struct Frame {
    station: usize,
    cursor: usize,
    time: f64,
    via_edge: Option<usize>,
}

/// Reusable search state sized for one network.
pub(crate) struct Walker<'a> {
    network: &'a RailNetwork,
    route: Vec<usize>,
    visited: Vec<bool>,
    usage: Vec<usize>,
    stack: Vec<Frame>,
}

impl<'a> Walker<'a> {
    pub fn new(network: &'a RailNetwork) -> Self {
        Self {
            network,
            route: Vec::new(),
            visited: vec![false; network.num_stations()],
            usage: vec![0; network.num_edges()],
            stack: Vec::new(),
        }
    }

    /// Clears the connection-usage counter.
    pub fn reset_usage(&mut self) {
        self.usage.iter_mut().for_each(|u| *u = 0);
    }

    /// Current usage of every canonical edge. All zero between walks.
    #[cfg(test)]
    pub fn usage(&self) -> &[usize] {
        &self.usage
    }

    /// Depth-first walk from `start`.
    ///
    /// `visit` is called with the route and its time on every node,
    /// including the start node at time zero. Children are generated in
    /// adjacency order.
    pub fn walk<F>(&mut self, start: usize, limits: WalkLimits, mut visit: F)
    where
        F: FnMut(&RailNetwork, &[usize], f64) -> Expand,
    {
        self.route.clear();
        self.route.push(start);
        self.visited[start] = true;
        let expand = visit(self.network, &self.route, 0.0);
        let exhausted = expand == Expand::Prune || limits.max_stations <= 1;
        self.stack.push(Frame {
            station: start,
            cursor: if exhausted { usize::MAX } else { 0 },
            time: 0.0,
            via_edge: None,
        });

        while let Some(top) = self.stack.last_mut() {
            let adjacent = self.network.adjacent(top.station);
            if top.cursor < adjacent.len() {
                let step = adjacent[top.cursor];
                top.cursor += 1;
                let time = top.time + step.time;
                if time > limits.max_duration
                    || self.usage[step.edge] >= limits.max_reuse
                    || self.visited[step.station]
                {
                    continue;
                }

                self.usage[step.edge] += 1;
                self.visited[step.station] = true;
                self.route.push(step.station);

                let expand = visit(self.network, &self.route, time);
                let exhausted =
                    expand == Expand::Prune || self.route.len() >= limits.max_stations;
                self.stack.push(Frame {
                    station: step.station,
                    cursor: if exhausted { usize::MAX } else { 0 },
                    time,
                    via_edge: Some(step.edge),
                });
            } else {
                let Some(frame) = self.stack.pop() else { break };
                if let Some(edge) = frame.via_edge {
                    self.usage[edge] -= 1;
                    self.visited[frame.station] = false;
                    self.route.pop();
                }
            }
        }

        self.visited[start] = false;
        self.route.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Connection, Station};

    fn path_network() -> RailNetwork {
        RailNetwork::from_records(
            ["A", "B", "C"].map(|n| Station::new(n, 0.0, 0.0)),
            [Connection::new("A", "B", 5.0), Connection::new("B", "C", 5.0)],
        )
        .expect("valid network")
    }

    fn open() -> WalkLimits {
        WalkLimits {
            max_duration: f64::INFINITY,
            max_stations: usize::MAX,
            max_reuse: 1,
        }
    }

    #[test]
    fn test_walk_visits_every_simple_path() {
        let net = path_network();
        let mut walker = Walker::new(&net);
        let mut seen = Vec::new();
        walker.walk(0, open(), |_, route, time| {
            seen.push((route.to_vec(), time));
            Expand::Continue
        });
        assert_eq!(
            seen,
            vec![(vec![0], 0.0), (vec![0, 1], 5.0), (vec![0, 1, 2], 10.0)]
        );
        assert!(walker.usage().iter().all(|&u| u == 0));
    }

    #[test]
    fn test_walk_prune_stops_descent() {
        let net = path_network();
        let mut walker = Walker::new(&net);
        let mut count = 0;
        walker.walk(0, open(), |_, route, _| {
            count += 1;
            if route.len() == 2 {
                Expand::Prune
            } else {
                Expand::Continue
            }
        });
        assert_eq!(count, 2);
    }

    #[test]
    fn test_walk_respects_limits() {
        let net = path_network();
        let mut walker = Walker::new(&net);
        let mut longest = 0;
        let limits = WalkLimits {
            max_duration: 7.0,
            ..open()
        };
        walker.walk(0, limits, |_, route, _| {
            longest = longest.max(route.len());
            Expand::Continue
        });
        assert_eq!(longest, 2);

        let mut longest = 0;
        let limits = WalkLimits {
            max_stations: 2,
            ..open()
        };
        walker.walk(0, limits, |_, route, _| {
            longest = longest.max(route.len());
            Expand::Continue
        });
        assert_eq!(longest, 2);

        let mut count = 0;
        let limits = WalkLimits {
            max_reuse: 0,
            ..open()
        };
        walker.walk(0, limits, |_, _, _| {
            count += 1;
            Expand::Continue
        });
        assert_eq!(count, 1);
    }
}
