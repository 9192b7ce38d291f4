//! # bee_path
//!
//! A bee colony metaheuristic for finding near-shortest simple paths between
//! two nodes of a sparse, weighted, undirected graph.
//!
//! Each iteration sends out a colony of scouts that walk randomly from the
//! start node towards the end node. Every scout route that arrives is then
//! refined by foragers through greedy single-node substitutions. The search
//! stops once the best route has not improved for a configured number of
//! iterations.
//!
//! This is a best-effort heuristic: it gives no optimality guarantee and
//! reports [`Candidate::not_found`] when no route is ever discovered.

pub mod config;
pub mod error;
pub mod forage;
pub mod graph;
pub mod route;
pub mod scout;
pub mod utils;

pub use crate::config::Config;
pub use crate::error::BeeError;
pub use crate::graph::Graph;
pub use crate::route::{Candidate, Distance, NO_EDGE};

use crate::error::Result;
use crate::forage::Forager;
use crate::scout::Scout;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};

/// Lifecycle of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Terminated,
}

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TerminationReason {
    /// The stagnation threshold was reached
    Stagnation,
    /// The iteration cap was reached
    IterationLimit,
    /// The time limit was reached
    TimeLimit,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TerminationReason::Stagnation => "no improvement",
            TerminationReason::IterationLimit => "iteration limit",
            TerminationReason::TimeLimit => "time limit",
        };
        f.write_str(text)
    }
}

/// The main structure that drives scout and forage rounds.
pub struct BeeAlgorithm {
    pub graph: Graph,
    pub config: Config,
    pub best: Candidate,
    pub state: SearchState,
    pub termination: Option<TerminationReason>,
    pub run_time: Duration,
    pub iterations: u32,
    pub iterations_without_improvement: u32,
    /// Iteration and distance of every strict improvement
    pub improvements: Vec<(u32, Distance)>,
    /// Seed of the random source; `config.seed` overrides it on each run
    pub seed: u64,
    pub scout: Scout,
    pub forager: Forager,
    pub start_time: Instant,
    rng: ChaCha8Rng,
}

impl BeeAlgorithm {
    /// Create a new search over `graph` with the given configuration.
    pub fn new(graph: Graph, config: Config) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);

        BeeAlgorithm {
            graph,
            forager: Forager::new(config.forage_intensity),
            config,
            best: Candidate::not_found(),
            state: SearchState::Running,
            termination: None,
            run_time: Duration::from_secs(0),
            iterations: 0,
            iterations_without_improvement: 0,
            improvements: Vec::new(),
            seed,
            scout: Scout,
            start_time: Instant::now(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Search for a short route from `start` to `end`.
    ///
    /// Returns [`Candidate::not_found`] when no scout ever reached `end`.
    pub fn run(&mut self, start: usize, end: usize) -> Result<&Candidate> {
        for node in [start, end] {
            if !self.graph.contains(node) {
                return Err(BeeError::NodeOutOfRange {
                    node,
                    node_count: self.graph.node_count(),
                });
            }
        }

        self.reset();
        info!(
            "Starting bee search {} -> {} on {} nodes (seed {})",
            start,
            end,
            self.graph.node_count(),
            self.seed
        );

        while self.state == SearchState::Running {
            if let Some(reason) = self.should_terminate() {
                self.terminate(reason);
                break;
            }
            self.step(start, end);
        }

        self.run_time = self.start_time.elapsed();
        Ok(&self.best)
    }

    /// One scout and forage round followed by the best-so-far update.
    fn step(&mut self, start: usize, end: usize) {
        let scouts = self.scout.generate(
            &self.graph,
            start,
            end,
            self.config.colony_size,
            &mut self.rng,
        );

        let mut iteration_best: Option<Candidate> = None;
        for scout in &scouts {
            let refined = self.forager.exploit(scout, &self.graph, &mut self.rng);
            if iteration_best
                .as_ref()
                .map_or(true, |best| refined.distance < best.distance)
            {
                iteration_best = Some(refined);
            }
        }

        self.iterations += 1;

        match iteration_best {
            Some(candidate) if candidate.distance < self.best.distance => {
                debug!(
                    "Iteration {}: distance improved to {} ({} nodes)",
                    self.iterations,
                    candidate.distance,
                    candidate.len()
                );
                self.improvements.push((self.iterations, candidate.distance));
                self.best = candidate;
                self.iterations_without_improvement = 0;
            }
            _ => self.iterations_without_improvement += 1,
        }
    }

    /// Check whether any stop condition holds.
    fn should_terminate(&self) -> Option<TerminationReason> {
        if self.iterations_without_improvement >= self.config.stagnation_threshold {
            return Some(TerminationReason::Stagnation);
        }

        if let Some(max) = self.config.max_iterations {
            if self.iterations >= max {
                return Some(TerminationReason::IterationLimit);
            }
        }

        if let Some(time_limit) = self.config.time_limit {
            if self.start_time.elapsed() >= time_limit {
                return Some(TerminationReason::TimeLimit);
            }
        }

        None
    }

    fn terminate(&mut self, reason: TerminationReason) {
        self.state = SearchState::Terminated;
        self.termination = Some(reason);
        info!(
            "Search stopped after {} iterations ({})",
            self.iterations, reason
        );
    }

    fn reset(&mut self) {
        self.best = Candidate::not_found();
        self.state = SearchState::Running;
        self.termination = None;
        self.iterations = 0;
        self.iterations_without_improvement = 0;
        self.improvements.clear();
        self.forager = Forager::new(self.config.forage_intensity);
        if let Some(seed) = self.config.seed {
            self.seed = seed;
        }
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.start_time = Instant::now();
    }
}
