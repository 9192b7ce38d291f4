//! Candidate routes and their evaluation.

use crate::graph::Graph;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Edge weights and route lengths.
pub type Distance = i64;

/// Sentinel for a missing edge and for any unusable distance.
pub const NO_EDGE: Distance = Distance::MAX;

/// Total weight of `route`.
///
/// Returns [`NO_EDGE`] as soon as a consecutive pair has no edge, or when the
/// running sum overflows. Empty and single-node routes cost 0.
pub fn evaluate(graph: &Graph, route: &[usize]) -> Distance {
    let mut total: Distance = 0;

    for (&a, &b) in route.iter().tuple_windows() {
        let w = graph.weight(a, b);
        if w == NO_EDGE {
            return NO_EDGE;
        }
        total = match total.checked_add(w) {
            Some(sum) => sum,
            None => return NO_EDGE,
        };
    }

    total
}

/// A route paired with its total distance.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Node indices from start to end
    pub route: Vec<usize>,
    /// Sum of edge weights, or [`NO_EDGE`]
    pub distance: Distance,
}

impl Candidate {
    /// The "no path found" marker: empty route, sentinel distance.
    pub fn not_found() -> Self {
        Candidate {
            route: Vec::new(),
            distance: NO_EDGE,
        }
    }

    /// Wrap a route with its evaluated distance.
    pub fn evaluated(graph: &Graph, route: Vec<usize>) -> Self {
        let distance = evaluate(graph, &route);
        Candidate { route, distance }
    }

    /// Whether this candidate holds a usable path.
    pub fn is_found(&self) -> bool {
        !self.route.is_empty() && self.distance != NO_EDGE
    }

    pub fn start(&self) -> Option<usize> {
        self.route.first().copied()
    }

    pub fn end(&self) -> Option<usize> {
        self.route.last().copied()
    }

    /// Number of nodes on the route.
    pub fn len(&self) -> usize {
        self.route.len()
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// True if no node repeats.
    pub fn is_simple(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.route.len());
        self.route.iter().all(|node| seen.insert(*node))
    }

    /// Check the full route invariant against `graph`.
    pub fn is_valid(&self, graph: &Graph, start: usize, end: usize) -> bool {
        self.start() == Some(start)
            && self.end() == Some(end)
            && self.is_simple()
            && self
                .route
                .iter()
                .tuple_windows()
                .all(|(&a, &b)| graph.has_edge(a, b))
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.distance == NO_EDGE {
            write!(f, "Candidate {{ route: {:?}, distance: none }}", self.route)
        } else {
            write!(
                f,
                "Candidate {{ route: {:?}, distance: {} }}",
                self.route, self.distance
            )
        }
    }
}
