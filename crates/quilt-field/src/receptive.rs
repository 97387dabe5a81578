//! Receptive field materialization.
//!
//! The final stage: a pure gather that turns neighborhood index rows
//! into a fixed-shape tensor of node feature vectors, substituting the
//! zero vector for padding slots. No normalization happens here.

use quilt_core::{FeatureVec, GraphError, Slot};

/// A `[num_nodes, neighborhood_size, channels]` feature tensor.
///
/// Flat row-major storage: the vector for neighborhood entry `(k, j)`
/// starts at `(k * neighborhood_size + j) * channels`. Padding entries
/// are all-zero.
#[derive(Clone, Debug, PartialEq)]
pub struct ReceptiveField {
    num_nodes: usize,
    neighborhood_size: usize,
    channels: usize,
    data: Vec<f32>,
}

impl ReceptiveField {
    /// Tensor shape as `[num_nodes, neighborhood_size, channels]`.
    pub fn shape(&self) -> [usize; 3] {
        [self.num_nodes, self.neighborhood_size, self.channels]
    }

    /// The flat sample buffer.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// The feature vector at neighborhood entry `(k, j)`.
    pub fn entry(&self, k: usize, j: usize) -> &[f32] {
        let start = (k * self.neighborhood_size + j) * self.channels;
        &self.data[start..start + self.channels]
    }

    /// The full `neighborhood_size × channels` slice for root `k`.
    pub fn node_slice(&self, k: usize) -> &[f32] {
        let len = self.neighborhood_size * self.channels;
        &self.data[k * len..(k + 1) * len]
    }
}

/// Materialize neighborhood rows into a [`ReceptiveField`].
///
/// Every [`Slot::Node`] entry must index into `nodes`; every
/// [`Slot::Padding`] entry becomes the zero vector of length
/// `channels`.
///
/// # Errors
///
/// [`GraphError::DimensionMismatch`] if any node's feature vector
/// length differs from `channels`.
pub fn receptive_fields(
    nodes: &[FeatureVec],
    neighborhoods: &[Vec<Slot>],
    channels: usize,
) -> Result<ReceptiveField, GraphError> {
    for (node, f) in nodes.iter().enumerate() {
        if f.len() != channels {
            return Err(GraphError::DimensionMismatch {
                expected: channels,
                actual: f.len(),
                node,
            });
        }
    }

    let num_nodes = neighborhoods.len();
    let neighborhood_size = neighborhoods.first().map_or(0, Vec::len);
    let mut data = vec![0.0f32; num_nodes * neighborhood_size * channels];

    for (k, row) in neighborhoods.iter().enumerate() {
        for (j, slot) in row.iter().enumerate() {
            if let Some(i) = slot.node() {
                let start = (k * neighborhood_size + j) * channels;
                data[start..start + channels].copy_from_slice(&nodes[i]);
            }
        }
    }

    Ok(ReceptiveField {
        num_nodes,
        neighborhood_size,
        channels,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn nodes() -> Vec<FeatureVec> {
        vec![
            smallvec![1.0, 10.0],
            smallvec![2.0, 20.0],
            smallvec![3.0, 30.0],
        ]
    }

    #[test]
    fn gather_copies_node_vectors_verbatim() {
        let neighborhoods = vec![
            vec![Slot::Node(0), Slot::Node(2)],
            vec![Slot::Node(1), Slot::Node(0)],
        ];
        let field = receptive_fields(&nodes(), &neighborhoods, 2).unwrap();
        assert_eq!(field.shape(), [2, 2, 2]);
        assert_eq!(field.entry(0, 0), &[1.0, 10.0]);
        assert_eq!(field.entry(0, 1), &[3.0, 30.0]);
        assert_eq!(field.entry(1, 0), &[2.0, 20.0]);
        assert_eq!(field.entry(1, 1), &[1.0, 10.0]);
    }

    #[test]
    fn padding_slots_are_zero_vectors() {
        let neighborhoods = vec![vec![Slot::Node(1), Slot::Padding, Slot::Padding]];
        let field = receptive_fields(&nodes(), &neighborhoods, 2).unwrap();
        assert_eq!(field.entry(0, 0), &[2.0, 20.0]);
        assert_eq!(field.entry(0, 1), &[0.0, 0.0]);
        assert_eq!(field.entry(0, 2), &[0.0, 0.0]);
    }

    #[test]
    fn all_padding_row_is_an_all_zero_slice() {
        let neighborhoods = vec![
            vec![Slot::Node(0), Slot::Node(1)],
            vec![Slot::Padding, Slot::Padding],
        ];
        let field = receptive_fields(&nodes(), &neighborhoods, 2).unwrap();
        assert!(field.node_slice(1).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn shape_is_independent_of_graph_size() {
        // One real node but a 4×3 neighborhood layout.
        let single: Vec<FeatureVec> = vec![smallvec![5.0]];
        let neighborhoods = vec![
            vec![Slot::Node(0), Slot::Padding, Slot::Padding],
            vec![Slot::Padding; 3],
            vec![Slot::Padding; 3],
            vec![Slot::Padding; 3],
        ];
        let field = receptive_fields(&single, &neighborhoods, 1).unwrap();
        assert_eq!(field.shape(), [4, 3, 1]);
        assert_eq!(field.data().len(), 12);
    }

    #[test]
    fn channel_mismatch_is_rejected() {
        let bad: Vec<FeatureVec> = vec![smallvec![1.0, 2.0], smallvec![1.0]];
        let err = receptive_fields(&bad, &[vec![Slot::Node(0)]], 2).unwrap_err();
        assert_eq!(
            err,
            GraphError::DimensionMismatch {
                expected: 2,
                actual: 1,
                node: 1,
            }
        );
    }
}
