//! Forage phase: greedy single-position refinement of scout routes.

use crate::graph::Graph;
use crate::route::{evaluate, Candidate, NO_EDGE};
use rand::Rng;

/// Refines candidates by replacing one random interior node at a time.
///
/// Each attempt looks at a single position only. It is not a full
/// neighborhood search.
pub struct Forager {
    /// Mutation attempts per candidate
    pub attempts: usize,
}

impl Forager {
    /// Create a forager making `attempts` mutation attempts per candidate.
    pub fn new(attempts: usize) -> Self {
        Forager { attempts }
    }

    /// Refine `candidate`, returning the best variant seen.
    ///
    /// The result is never worse than the input. Routes with fewer than
    /// three nodes have no interior position and come back unchanged.
    pub fn exploit<R: Rng + ?Sized>(
        &self,
        candidate: &Candidate,
        graph: &Graph,
        rng: &mut R,
    ) -> Candidate {
        let mut best = candidate.clone();

        if best.route.len() < 3 {
            return best;
        }

        for _ in 0..self.attempts {
            let position = rng.gen_range(1..best.route.len() - 1);
            if let Some(improved) = Self::mutate(&best, position, graph) {
                best = improved;
            }
        }

        best
    }

    /// Try swapping the node at `position` for the lightest unused neighbor
    /// of its predecessor. Ties go to the lowest node index.
    fn mutate(candidate: &Candidate, position: usize, graph: &Graph) -> Option<Candidate> {
        let route = &candidate.route;
        let prev = route[position - 1];
        let next = route[position + 1];

        let replacement = graph
            .neighbors(prev)
            .iter()
            .copied()
            .filter(|v| !route.contains(v))
            .min_by_key(|&v| graph.weight(prev, v))?;

        if !graph.has_edge(replacement, next) {
            return None;
        }

        let mut mutated = route.clone();
        mutated[position] = replacement;
        let distance = evaluate(graph, &mutated);

        (distance != NO_EDGE && distance < candidate.distance).then_some(Candidate {
            route: mutated,
            distance,
        })
    }
}
