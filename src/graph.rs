//! Weighted undirected graph consumed by the search.

use crate::error::{BeeError, Result};
use crate::route::{Distance, NO_EDGE};
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A dense, symmetric weight matrix with precomputed adjacency lists.
///
/// Absent edges hold [`NO_EDGE`]. The diagonal is ignored and stored as
/// [`NO_EDGE`], so a node is never its own neighbor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    weights: Vec<Vec<Distance>>,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Build a graph from a full weight matrix.
    pub fn from_matrix(mut weights: Vec<Vec<Distance>>) -> Result<Self> {
        let n = weights.len();

        for (row, entries) in weights.iter().enumerate() {
            if entries.len() != n {
                return Err(BeeError::NonSquareMatrix {
                    row,
                    len: entries.len(),
                    expected: n,
                });
            }
        }

        for i in 0..n {
            weights[i][i] = NO_EDGE;
            for j in (i + 1)..n {
                let w = weights[i][j];
                if w != weights[j][i] {
                    return Err(BeeError::AsymmetricWeight { from: i, to: j });
                }
                if w < 0 {
                    return Err(BeeError::NegativeWeight {
                        from: i,
                        to: j,
                        weight: w,
                    });
                }
            }
        }

        Ok(Self::with_weights(weights))
    }

    /// Build a graph with `n` nodes from an edge list.
    ///
    /// Parallel edges keep the lighter weight.
    pub fn from_edges(n: usize, edges: &[(usize, usize, Distance)]) -> Result<Self> {
        let mut weights = vec![vec![NO_EDGE; n]; n];

        for &(a, b, w) in edges {
            Self::check_edge(n, a, b, w)?;
            if w < weights[a][b] {
                weights[a][b] = w;
                weights[b][a] = w;
            }
        }

        Ok(Self::with_weights(weights))
    }

    /// Build a graph from a petgraph undirected graph, keeping node indices.
    pub fn from_petgraph<N>(graph: &UnGraph<N, Distance>) -> Result<Self> {
        let edges: Vec<(usize, usize, Distance)> = graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), *e.weight()))
            .collect();

        Self::from_edges(graph.node_count(), &edges)
    }

    /// Generate a sparse random graph.
    ///
    /// Every node gets at least one edge as long as `n >= 2`; connectivity
    /// between any two given nodes is not guaranteed.
    pub fn random<R: Rng + ?Sized>(
        n: usize,
        params: &RandomGraphParams,
        rng: &mut R,
    ) -> Result<Self> {
        params.validate()?;
        let mut weights = vec![vec![NO_EDGE; n]; n];
        let mut degree = vec![0usize; n];

        for i in 0..n {
            let mut forward = 0;
            for j in (i + 1)..n {
                if forward >= params.max_forward_edges {
                    break;
                }
                if rng.gen::<f64>() < params.edge_probability {
                    let w = rng.gen_range(params.min_weight..=params.max_weight);
                    weights[i][j] = w;
                    weights[j][i] = w;
                    degree[i] += 1;
                    degree[j] += 1;
                    forward += 1;
                }
            }

            if degree[i] == 0 && n > 1 {
                // Isolated so far: attach to any other node
                let mut other = rng.gen_range(0..n - 1);
                if other >= i {
                    other += 1;
                }
                let w = rng.gen_range(params.min_weight..=params.max_weight);
                weights[i][other] = w;
                weights[other][i] = w;
                degree[i] += 1;
                degree[other] += 1;
            }
        }

        Ok(Self::with_weights(weights))
    }

    fn with_weights(weights: Vec<Vec<Distance>>) -> Self {
        let adjacency = weights
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(j, &w)| j != i && w != NO_EDGE)
                    .map(|(j, _)| j)
                    .collect()
            })
            .collect();

        Graph { weights, adjacency }
    }

    fn check_edge(n: usize, a: usize, b: usize, w: Distance) -> Result<()> {
        for node in [a, b] {
            if node >= n {
                return Err(BeeError::NodeOutOfRange {
                    node,
                    node_count: n,
                });
            }
        }
        if a == b {
            return Err(BeeError::SelfLoop { node: a });
        }
        if w < 0 {
            return Err(BeeError::NegativeWeight {
                from: a,
                to: b,
                weight: w,
            });
        }
        Ok(())
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.weights.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether `node` is a valid index.
    pub fn contains(&self, node: usize) -> bool {
        node < self.node_count()
    }

    /// Nodes joined to `node` by an edge, in ascending order.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Edge weight between `a` and `b`, or [`NO_EDGE`].
    pub fn weight(&self, a: usize, b: usize) -> Distance {
        self.weights[a][b]
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.weights[a][b] != NO_EDGE
    }
}

/// Parameters for [`Graph::random`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomGraphParams {
    /// Probability that a node links to any later node
    pub edge_probability: f64,
    /// Cap on the edges a node opens to later nodes
    pub max_forward_edges: usize,
    /// Smallest edge weight (inclusive)
    pub min_weight: Distance,
    /// Largest edge weight (inclusive)
    pub max_weight: Distance,
}

impl Default for RandomGraphParams {
    fn default() -> Self {
        RandomGraphParams {
            edge_probability: 0.3,
            max_forward_edges: 10,
            min_weight: 5,
            max_weight: 150,
        }
    }
}

impl RandomGraphParams {
    pub fn new() -> Self {
        RandomGraphParams::default()
    }

    /// Check that the weight range is non-empty and non-negative and the
    /// edge probability lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.min_weight < 0 || self.min_weight > self.max_weight {
            return Err(BeeError::InvalidWeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(BeeError::InvalidEdgeProbability(self.edge_probability));
        }
        Ok(())
    }

    /// Set the edge probability.
    pub fn with_edge_probability(mut self, p: f64) -> Self {
        self.edge_probability = p;
        self
    }

    /// Set the forward edge cap.
    pub fn with_max_forward_edges(mut self, max: usize) -> Self {
        self.max_forward_edges = max;
        self
    }

    /// Set the inclusive weight range.
    pub fn with_weight_range(mut self, min: Distance, max: Distance) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }
}
