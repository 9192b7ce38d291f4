//! Configuration parameters for the bee search.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration settings for the bee search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Scout routes generated per iteration (colony size)
    pub colony_size: usize,
    /// Mutation attempts per scout route (forage intensity)
    pub forage_intensity: usize,
    /// Consecutive non-improving iterations before stopping
    pub stagnation_threshold: u32,
    /// Optional hard cap on iterations
    pub max_iterations: Option<u32>,
    /// Optional time limit for the search
    pub time_limit: Option<Duration>,
    /// Seed for the search's random source; drawn fresh when absent
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            colony_size: 10,
            forage_intensity: 45,
            stagnation_threshold: 100,
            max_iterations: None,
            time_limit: None,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the colony size.
    pub fn with_colony_size(mut self, size: usize) -> Self {
        self.colony_size = size;
        self
    }

    /// Set the forage intensity.
    pub fn with_forage_intensity(mut self, attempts: usize) -> Self {
        self.forage_intensity = attempts;
        self
    }

    /// Set the stagnation threshold.
    pub fn with_stagnation_threshold(mut self, iterations: u32) -> Self {
        self.stagnation_threshold = iterations;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    /// Set the time limit.
    pub fn with_time_limit(mut self, duration: Duration) -> Self {
        self.time_limit = Some(duration);
        self
    }

    /// Fix the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
