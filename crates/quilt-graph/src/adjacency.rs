//! Adjacency weighting policies.
//!
//! Two interchangeable policies build the weighted graph over a
//! superpixel collection: [`AdjacencyPolicy::Unweighted`] marks every
//! adjacent pair with weight 1, [`AdjacencyPolicy::EuclideanDistance`]
//! weights adjacent pairs by the distance between the superpixels'
//! centroids. Both restrict weights to spatially adjacent pairs; a
//! non-adjacent pair is always 0.

use indexmap::IndexMap;
use quilt_core::{ConfigError, GraphError};
use quilt_segment::Superpixel;
use std::str::FromStr;

use crate::matrix::AdjacencyMatrix;

/// Weighting policy for adjacency construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdjacencyPolicy {
    /// Weight 1 for every adjacent pair.
    #[default]
    Unweighted,
    /// Euclidean distance between the superpixels' absolute centroids
    /// for adjacent pairs.
    EuclideanDistance,
}

impl AdjacencyPolicy {
    /// The policy's configuration name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unweighted => "unweighted",
            Self::EuclideanDistance => "euclidean_distance",
        }
    }
}

impl FromStr for AdjacencyPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unweighted" => Ok(Self::Unweighted),
            "euclidean_distance" => Ok(Self::EuclideanDistance),
            other => Err(ConfigError::UnknownAdjacency {
                name: other.to_string(),
            }),
        }
    }
}

/// Build the 0/1 adjacency matrix from the superpixels' neighbor sets.
///
/// Node `i` is the superpixel at position `i` of the map (ascending
/// label order, as produced by extraction).
pub fn adjacency_unweighted(superpixels: &IndexMap<u32, Superpixel>) -> AdjacencyMatrix {
    let mut adj = AdjacencyMatrix::new(superpixels.len());
    for (i, sp) in superpixels.values().enumerate() {
        for nb in sp.neighbors() {
            if let Some(j) = superpixels.get_index_of(nb) {
                adj.set(i, j, 1.0);
            }
        }
    }
    adj
}

/// Re-weight a neighbor relation by Euclidean distance between
/// per-node feature vectors.
///
/// `relation` supplies which pairs are adjacent (any positive entry);
/// the output carries `‖features[i] − features[j]‖` there and 0
/// elsewhere.
///
/// # Errors
///
/// [`GraphError::DimensionMismatch`] if the feature vectors do not all
/// have the same length.
pub fn euclidean_weights(
    features: &[Vec<f64>],
    relation: &AdjacencyMatrix,
) -> Result<AdjacencyMatrix, GraphError> {
    let expected = features.first().map_or(0, Vec::len);
    for (node, f) in features.iter().enumerate() {
        if f.len() != expected {
            return Err(GraphError::DimensionMismatch {
                expected,
                actual: f.len(),
                node,
            });
        }
    }

    let n = relation.node_count();
    let mut adj = AdjacencyMatrix::new(n);
    for i in 0..n {
        for j in 0..n {
            if relation.get(i, j) > 0.0 {
                let dist: f64 = features[i]
                    .iter()
                    .zip(&features[j])
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum::<f64>()
                    .sqrt();
                adj.set(i, j, dist);
            }
        }
    }
    Ok(adj)
}

/// Build the centroid-distance adjacency matrix: adjacent pairs are
/// weighted by the Euclidean distance between absolute centers.
pub fn adjacency_euclidean_distance(
    superpixels: &IndexMap<u32, Superpixel>,
) -> Result<AdjacencyMatrix, GraphError> {
    let centroids: Vec<Vec<f64>> = superpixels
        .values()
        .map(|sp| {
            let (x, y) = sp.absolute_center();
            vec![x, y]
        })
        .collect();
    euclidean_weights(&centroids, &adjacency_unweighted(superpixels))
}

/// Build the adjacency matrix for `policy`.
pub fn build_adjacency(
    superpixels: &IndexMap<u32, Superpixel>,
    policy: AdjacencyPolicy,
) -> Result<AdjacencyMatrix, GraphError> {
    match policy {
        AdjacencyPolicy::Unweighted => Ok(adjacency_unweighted(superpixels)),
        AdjacencyPolicy::EuclideanDistance => adjacency_euclidean_distance(superpixels),
    }
}
