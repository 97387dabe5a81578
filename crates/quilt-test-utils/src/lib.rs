//! Test utilities and fixtures for Quilt development.
//!
//! Provides deterministic images and label masks plus a
//! [`MockSegmentation`] backend that returns a preset mask, so
//! pipeline tests can bypass real segmentation.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{block_mask, gradient_image, stripe_mask, uniform_image};

use quilt_core::{Image, LabelMask, SegmentError};
use quilt_segment::{Segmentation, SegmentationParams};

/// Segmentation backend that returns a preconfigured label mask,
/// ignoring the image content and parameters.
pub struct MockSegmentation {
    mask: LabelMask,
}

impl MockSegmentation {
    pub fn new(mask: LabelMask) -> Self {
        Self { mask }
    }
}

impl Segmentation for MockSegmentation {
    fn segment(
        &self,
        _image: &Image,
        _params: &SegmentationParams,
    ) -> Result<LabelMask, SegmentError> {
        Ok(self.mask.clone())
    }
}
