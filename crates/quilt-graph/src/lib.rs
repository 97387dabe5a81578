//! Weighted adjacency construction for superpixel graphs.
//!
//! Builds the [`AdjacencyMatrix`] over a superpixel collection using a
//! configurable [`AdjacencyPolicy`], plus independent normalization
//! passes (scale-invariant, self-loop, symmetric) applicable to any
//! adjacency matrix.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod matrix;
pub mod normalize;

pub use adjacency::{
    adjacency_euclidean_distance, adjacency_unweighted, build_adjacency, euclidean_weights,
    AdjacencyPolicy,
};
pub use matrix::AdjacencyMatrix;
pub use normalize::{scale_invariant, symmetric_normalized, with_self_loops};
