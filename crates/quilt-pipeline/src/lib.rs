//! Composed image-to-graph pipeline for Quilt.
//!
//! Wires segmentation, superpixel extraction, adjacency construction,
//! and the canonicalization stages into a single [`GraphPipeline`]
//! driven by a validated [`PipelineConfig`], plus a worker-pool
//! [`assemble_batch`] for data-parallel extraction across images.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod config;
pub mod pipeline;

pub use batch::assemble_batch;
pub use config::PipelineConfig;
pub use pipeline::{GraphPipeline, GraphSample};
