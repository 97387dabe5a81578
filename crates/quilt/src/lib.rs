//! Quilt: superpixel graph extraction from images to fixed-shape
//! receptive fields.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Quilt sub-crates. For most users, adding `quilt` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use quilt::prelude::*;
//!
//! // Segment an 8×8 image into ~4 tiles and extract its graph.
//! let config = PipelineConfig {
//!     num_nodes: 4,
//!     neighborhood_size: 3,
//!     segmentation: SegmentationParams { target_segments: 4, ..Default::default() },
//!     ..Default::default()
//! };
//! let pipeline = GraphPipeline::new(GridSegmentation, config).unwrap();
//!
//! let image = Image::filled(8, 8, 0.5);
//! let sample = pipeline.assemble_graph(&image).unwrap();
//!
//! // Fixed output shapes, whatever the segment count turned out to be.
//! assert_eq!(sample.sequence().len(), 4);
//! assert!(sample.neighborhoods().iter().all(|row| row.len() == 3));
//! assert_eq!(sample.receptive_field().shape(), [4, 3, 8]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `quilt-core` | Image/mask containers, `Slot`, errors |
//! | [`segment`] | `quilt-segment` | Superpixel extraction, segmentation backends |
//! | [`graph`] | `quilt-graph` | Adjacency policies and normalization |
//! | [`field`] | `quilt-field` | Labeling, sequences, neighborhoods, receptive fields |
//! | [`pipeline`] | `quilt-pipeline` | Configuration, composed pipeline, batching |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core containers and error types (`quilt-core`).
pub use quilt_core as types;

/// Superpixel extraction and segmentation backends (`quilt-segment`).
///
/// The [`segment::Segmentation`] trait is the plug-in point for SLIC
/// or any other external segmentation primitive.
pub use quilt_segment as segment;

/// Adjacency construction and normalization (`quilt-graph`).
pub use quilt_graph as graph;

/// Node ordering and receptive-field assembly (`quilt-field`).
pub use quilt_field as field;

/// Composed pipeline, configuration, and batch execution
/// (`quilt-pipeline`).
pub use quilt_pipeline as pipeline;

/// Common imports for typical Quilt usage.
///
/// ```rust
/// use quilt::prelude::*;
/// ```
pub mod prelude {
    // Containers and errors
    pub use quilt_core::{
        ConfigError, FeatureVec, GraphError, Image, LabelMask, PipelineError, SegmentError, Slot,
    };

    // Segmentation
    pub use quilt_segment::{
        extract_superpixels, Connectivity, GridSegmentation, Segmentation, SegmentationParams,
        Superpixel, NODE_CHANNELS,
    };

    // Graph construction
    pub use quilt_graph::{build_adjacency, AdjacencyMatrix, AdjacencyPolicy};

    // Canonicalization
    pub use quilt_field::{
        node_sequence, receptive_fields, NeighborhoodAssembly, NodeLabeling, ReceptiveField,
    };

    // Pipeline
    pub use quilt_pipeline::{assemble_batch, GraphPipeline, GraphSample, PipelineConfig};
}
