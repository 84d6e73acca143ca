//! Deduplicated candidate pool.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::Trajectory;

/// When two enumerated routes count as the same candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateIdentity {
    /// Same station sequence in the same order and same duration.
    /// A path and its reverse are two candidates.
    #[default]
    Ordered,
    /// A path and its reverse with the same duration are one candidate;
    /// the first one discovered is kept.
    Undirected,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CandidateKey {
    stations: Vec<String>,
    duration_bits: u64,
}

/// All trajectories found by one enumeration run, in discovery order.
///
/// # Examples
///
/// ```
/// use u_railnet::enumeration::{CandidateIdentity, CandidatePool};
/// use u_railnet::models::{Connection, RailNetwork, Station};
///
/// let net = RailNetwork::from_records(
///     ["A", "B"].map(|n| Station::new(n, 0.0, 0.0)),
///     [Connection::new("A", "B", 5.0)],
/// )
/// .unwrap();
/// let ab = net.trajectory(["A", "B"]).unwrap();
///
/// let mut ordered = CandidatePool::new(CandidateIdentity::Ordered);
/// assert!(ordered.insert(ab.clone()));
/// assert!(ordered.insert(ab.reversed()));
/// assert!(!ordered.insert(ab.clone()));
///
/// let mut undirected = CandidatePool::new(CandidateIdentity::Undirected);
/// assert!(undirected.insert(ab.clone()));
/// assert!(!undirected.insert(ab.reversed()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    identity: CandidateIdentity,
    candidates: Vec<Trajectory>,
    seen: HashSet<CandidateKey>,
}

impl CandidatePool {
    /// Creates an empty pool with the given identity rule.
    pub fn new(identity: CandidateIdentity) -> Self {
        Self {
            identity,
            candidates: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Adds a candidate unless an identical one is present.
    ///
    /// Returns `true` if the candidate was added.
    pub fn insert(&mut self, trajectory: Trajectory) -> bool {
        let key = self.key_of(&trajectory);
        if !self.seen.insert(key) {
            return false;
        }
        self.candidates.push(trajectory);
        true
    }

    fn key_of(&self, trajectory: &Trajectory) -> CandidateKey {
        let forward = trajectory.stations();
        let stations = match self.identity {
            CandidateIdentity::Ordered => forward.to_vec(),
            CandidateIdentity::Undirected => {
                if forward.iter().rev().lt(forward.iter()) {
                    forward.iter().rev().cloned().collect()
                } else {
                    forward.to_vec()
                }
            }
        };
        CandidateKey {
            stations,
            duration_bits: trajectory.duration().to_bits(),
        }
    }

    /// Identity rule of this pool.
    pub fn identity(&self) -> CandidateIdentity {
        self.identity
    }

    /// Candidates in discovery order.
    pub fn candidates(&self) -> &[Trajectory] {
        &self.candidates
    }

    /// Iterates over the candidates.
    pub fn iter(&self) -> std::slice::Iter<'_, Trajectory> {
        self.candidates.iter()
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` if the enumeration found nothing.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates that start at `start` and end at `end`.
    pub fn between<'p>(
        &'p self,
        start: &'p str,
        end: &'p str,
    ) -> impl Iterator<Item = &'p Trajectory> + 'p {
        self.candidates
            .iter()
            .filter(move |t| t.first() == start && t.last() == end)
    }

    /// Consumes the pool, returning the candidates.
    pub fn into_vec(self) -> Vec<Trajectory> {
        self.candidates
    }
}

impl Extend<Trajectory> for CandidatePool {
    fn extend<I: IntoIterator<Item = Trajectory>>(&mut self, iter: I) {
        for t in iter {
            self.insert(t);
        }
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a Trajectory;
    type IntoIter = std::slice::Iter<'a, Trajectory>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
