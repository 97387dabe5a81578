//! Segmentation backends.
//!
//! The pipeline consumes segmentation through the [`Segmentation`]
//! trait: given an image and tuning parameters, produce a label mask
//! assigning every pixel exactly one label. SLIC-style backends plug in
//! here; [`GridSegmentation`] is the deterministic reference backend
//! used as a baseline and in tests.

use quilt_core::{Image, LabelMask, SegmentError};

/// Tuning parameters passed to a segmentation backend.
///
/// Matches the conventional SLIC call surface. Backends are free to
/// ignore parameters that do not apply to them.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentationParams {
    /// Approximate number of segments to produce.
    pub target_segments: usize,
    /// Balance between color proximity and spatial proximity.
    pub compactness: f64,
    /// Maximum number of refinement iterations.
    pub max_iterations: usize,
    /// Width of the Gaussian pre-smoothing kernel, 0 to disable.
    pub sigma: f64,
}

impl Default for SegmentationParams {
    fn default() -> Self {
        Self {
            target_segments: 100,
            compactness: 1.0,
            max_iterations: 10,
            sigma: 0.0,
        }
    }
}

/// A segmentation backend.
///
/// The invariant every backend must uphold: the returned mask has the
/// same shape as the input image and assigns every pixel exactly one
/// non-negative label.
pub trait Segmentation {
    /// Segment `image` into labeled regions.
    fn segment(&self, image: &Image, params: &SegmentationParams)
        -> Result<LabelMask, SegmentError>;
}

/// Deterministic tiling backend: partitions the image into a grid of
/// near-square tiles, one label per tile, row-major.
///
/// Only [`SegmentationParams::target_segments`] is honored; the grid
/// ignores the color-space parameters. The produced tile count is the
/// nearest grid covering at least `target_segments` when the image is
/// large enough.
///
/// # Examples
///
/// ```
/// use quilt_core::Image;
/// use quilt_segment::{GridSegmentation, Segmentation, SegmentationParams};
///
/// let image = Image::filled(8, 8, 0.0);
/// let params = SegmentationParams { target_segments: 4, ..Default::default() };
/// let mask = GridSegmentation.segment(&image, &params).unwrap();
/// assert_eq!(mask.label(0, 0), 0);
/// assert_eq!(mask.label(7, 7), 3);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct GridSegmentation;

impl Segmentation for GridSegmentation {
    fn segment(
        &self,
        image: &Image,
        params: &SegmentationParams,
    ) -> Result<LabelMask, SegmentError> {
        let h = image.height();
        let w = image.width();
        if h == 0 || w == 0 {
            return Err(SegmentError::EmptySegmentation);
        }

        let target = params.target_segments.max(1);
        // Pick a column count keeping tiles roughly square, then as
        // many rows as needed to reach the target.
        let cols = ((target as f64 * w as f64 / h as f64).sqrt().round() as usize).clamp(1, w);
        let rows = (target.div_ceil(cols)).clamp(1, h);

        let mut labels = Vec::with_capacity(h * w);
        for y in 0..h {
            let tile_row = y * rows / h;
            for x in 0..w {
                let tile_col = x * cols / w;
                labels.push((tile_row * cols + tile_col) as u32);
            }
        }
        Ok(LabelMask::new(h, w, labels).expect("grid mask has h*w labels"))
    }
}
