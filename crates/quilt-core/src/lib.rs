//! Core types for the Quilt graph-extraction pipeline.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the image and label-mask containers passed into the pipeline, the
//! [`Slot`] optional-index type used by sequences and neighborhoods,
//! and the error taxonomy shared by all downstream crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod image;
pub mod slot;

pub use error::{ConfigError, GraphError, PipelineError, SegmentError, ShapeError};
pub use image::{Image, LabelMask};
pub use slot::Slot;

use smallvec::SmallVec;

/// A per-node feature vector.
///
/// Uses `SmallVec<[f32; 8]>` to keep the standard 8-channel superpixel
/// feature layout inline; wider layouts spill to the heap transparently.
pub type FeatureVec = SmallVec<[f32; 8]>;
