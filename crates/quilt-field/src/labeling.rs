//! Node labeling policies.
//!
//! A labeling assigns every node a scalar rank; downstream selection
//! orders nodes by descending rank with ties broken by ascending
//! original index. Policies are a closed enum so an invalid choice
//! cannot survive past configuration.

use quilt_core::ConfigError;
use quilt_graph::AdjacencyMatrix;
use std::str::FromStr;

/// Ranking policy over graph nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeLabeling {
    /// Scanline priority: node 0 ranks highest, so rank-descending
    /// selection preserves the original index order. The baseline that
    /// leaves the graph unreordered.
    #[default]
    Identity,
    /// Weighted degree: nodes with heavier incident edges rank higher.
    Degree,
}

impl NodeLabeling {
    /// The policy's configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Degree => "degree",
        }
    }

    /// Compute one rank per node.
    pub fn ranks(self, adjacency: &AdjacencyMatrix) -> Vec<f64> {
        let n = adjacency.node_count();
        match self {
            Self::Identity => (0..n).map(|i| (n - 1 - i) as f64).collect(),
            Self::Degree => (0..n).map(|i| adjacency.degree(i)).collect(),
        }
    }
}

impl FromStr for NodeLabeling {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "identity" => Ok(Self::Identity),
            "degree" => Ok(Self::Degree),
            other => Err(ConfigError::UnknownLabeling {
                name: other.to_string(),
            }),
        }
    }
}
