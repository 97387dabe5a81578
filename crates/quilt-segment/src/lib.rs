//! Superpixel extraction and segmentation backends for Quilt.
//!
//! This crate is the pixel-facing front of the pipeline: an external
//! [`Segmentation`] backend produces a label mask, and
//! [`extract_superpixels`] turns the mask plus its source image into a
//! label-ordered map of [`Superpixel`] regions carrying the geometry,
//! neighbor relations, and feature vectors the graph stages consume.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod backend;
pub mod extract;
pub mod superpixel;

pub use backend::{GridSegmentation, Segmentation, SegmentationParams};
pub use extract::{extract_superpixels, Connectivity};
pub use superpixel::{Superpixel, NODE_CHANNELS};
