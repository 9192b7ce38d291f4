//! Error type shared by graph construction and the search entry point.

use crate::route::Distance;
use std::fmt;

/// Errors reported by the bee path search.
#[derive(Debug, Clone, PartialEq)]
pub enum BeeError {
    /// A node index is outside `[0, node_count)`.
    NodeOutOfRange { node: usize, node_count: usize },
    /// A weight matrix row does not have the expected length.
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// `weight(from, to) != weight(to, from)`.
    AsymmetricWeight { from: usize, to: usize },
    /// An edge carries a negative weight.
    NegativeWeight {
        from: usize,
        to: usize,
        weight: Distance,
    },
    /// An edge joins a node to itself.
    SelfLoop { node: usize },
    /// Random weight range is empty or allows negative weights.
    InvalidWeightRange { min: Distance, max: Distance },
    /// Edge probability outside `[0, 1]`.
    InvalidEdgeProbability(f64),
}

impl fmt::Display for BeeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeeError::NodeOutOfRange { node, node_count } => write!(
                f,
                "node {} is out of range for a graph with {} nodes",
                node, node_count
            ),
            BeeError::NonSquareMatrix { row, len, expected } => write!(
                f,
                "weight matrix row {} has {} entries, expected {}",
                row, len, expected
            ),
            BeeError::AsymmetricWeight { from, to } => {
                write!(f, "weight ({}, {}) differs from ({}, {})", from, to, to, from)
            }
            BeeError::NegativeWeight { from, to, weight } => {
                write!(f, "edge ({}, {}) has negative weight {}", from, to, weight)
            }
            BeeError::SelfLoop { node } => write!(f, "self loop on node {}", node),
            BeeError::InvalidWeightRange { min, max } => write!(
                f,
                "weight range [{}, {}] must be non-empty and non-negative",
                min, max
            ),
            BeeError::InvalidEdgeProbability(p) => {
                write!(f, "edge probability {} is outside [0, 1]", p)
            }
        }
    }
}

impl std::error::Error for BeeError {}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, BeeError>;
