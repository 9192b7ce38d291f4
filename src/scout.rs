//! Scout phase: random simple walks from start to end.

use crate::graph::Graph;
use crate::route::Candidate;
use log::trace;
use rand::{seq::SliceRandom, Rng};

/// Generates scout routes by random walks over unvisited neighbors.
pub struct Scout;

impl Scout {
    /// Run `count` independent walks and return those that reach `end`.
    ///
    /// A walk that reaches a node with no unvisited neighbor is dropped, so
    /// fewer than `count` candidates (possibly none) may come back.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        graph: &Graph,
        start: usize,
        end: usize,
        count: usize,
        rng: &mut R,
    ) -> Vec<Candidate> {
        let mut candidates = Vec::with_capacity(count);

        for _ in 0..count {
            if let Some(route) = Self::walk(graph, start, end, rng) {
                candidates.push(Candidate::evaluated(graph, route));
            }
        }

        trace!("Scouts reached the target on {}/{} walks", candidates.len(), count);
        candidates
    }

    /// One random walk; `None` on a dead end.
    fn walk<R: Rng + ?Sized>(
        graph: &Graph,
        start: usize,
        end: usize,
        rng: &mut R,
    ) -> Option<Vec<usize>> {
        let n = graph.node_count();
        let mut route = vec![start];
        let mut visited = vec![false; n];
        visited[start] = true;
        let mut current = start;
        let mut options = Vec::new();

        // Each step visits a new node, so n steps always suffice
        for _ in 0..n {
            if current == end {
                return Some(route);
            }

            options.clear();
            options.extend(graph.neighbors(current).iter().copied().filter(|&v| !visited[v]));

            let &next = options.choose(rng)?;
            visited[next] = true;
            route.push(next);
            current = next;
        }

        debug_assert!(route.len() <= n);
        (current == end).then_some(route)
    }
}
