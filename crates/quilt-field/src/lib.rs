//! Canonical node ordering and receptive-field assembly.
//!
//! The graph-side back end of the pipeline, independent of pixels:
//! given a weighted adjacency matrix it ranks nodes
//! ([`NodeLabeling`]), selects a fixed-length strided sequence
//! ([`node_sequence`]), assembles fixed-size neighborhoods per root
//! ([`NeighborhoodAssembly`]), and gathers node features into the
//! final fixed-shape tensor ([`receptive_fields`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assembly;
pub mod labeling;
pub mod receptive;
pub mod sequence;

pub use assembly::NeighborhoodAssembly;
pub use labeling::NodeLabeling;
pub use receptive::{receptive_fields, ReceptiveField};
pub use sequence::node_sequence;
