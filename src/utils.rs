//! Formatting and reporting helpers for search results.

use crate::route::{Candidate, Distance};
use crate::{BeeAlgorithm, TerminationReason};
use itertools::Itertools;
use serde::Serialize;
use std::time::Duration;

/// Format a duration as hours, minutes, seconds and milliseconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!(
        "{}h {:02}m {:02}.{:03}s",
        hours,
        minutes,
        seconds,
        duration.subsec_millis()
    )
}

/// Render a route as `a -> b -> c`.
pub fn format_route(route: &[usize]) -> String {
    route.iter().join(" -> ")
}

/// Summary of a finished search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchStatistics {
    pub iterations: u32,
    pub runtime: Duration,
    pub seed: u64,
    pub improvements: usize,
    pub best_distance: Option<Distance>,
    pub best_route_len: usize,
    pub termination: Option<TerminationReason>,
}

impl SearchStatistics {
    /// Collect statistics from a search that has been run.
    pub fn from_algorithm(algorithm: &BeeAlgorithm) -> Self {
        SearchStatistics {
            iterations: algorithm.iterations,
            runtime: algorithm.run_time,
            seed: algorithm.seed,
            improvements: algorithm.improvements.len(),
            best_distance: algorithm
                .best
                .is_found()
                .then_some(algorithm.best.distance),
            best_route_len: algorithm.best.len(),
            termination: algorithm.termination,
        }
    }

    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        let distance = match self.best_distance {
            Some(d) => d.to_string(),
            None => "none".to_string(),
        };
        let termination = match self.termination {
            Some(reason) => reason.to_string(),
            None => "not run".to_string(),
        };

        format!(
            "Search Statistics:
- Iterations: {}
- Runtime: {}
- Seed: {}
- Improvements: {}
- Best Distance: {}
- Best Route Nodes: {}
- Stopped By: {}",
            self.iterations,
            format_duration(self.runtime),
            self.seed,
            self.improvements,
            distance,
            self.best_route_len,
            termination
        )
    }
}

/// Serializable result of a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub start: usize,
    pub end: usize,
    pub found: bool,
    pub best: Candidate,
    pub statistics: SearchStatistics,
}

impl RunReport {
    pub fn new(algorithm: &BeeAlgorithm, start: usize, end: usize) -> Self {
        RunReport {
            start,
            end,
            found: algorithm.best.is_found(),
            best: algorithm.best.clone(),
            statistics: SearchStatistics::from_algorithm(algorithm),
        }
    }
}

/// Print the best route found to the console.
pub fn print_result(candidate: &Candidate) {
    if candidate.is_found() {
        println!("Shortest route found:");
        println!("{}", format_route(&candidate.route));
        println!("Route length: {}", candidate.distance);
    } else {
        println!("No route found between the requested nodes.");
    }
    println!();
}
