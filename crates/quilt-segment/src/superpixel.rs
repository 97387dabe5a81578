//! The [`Superpixel`] region type.
//!
//! A superpixel is one connected (or near-connected) image region,
//! carrying its bounding box, cropped image and mask sub-arrays, pixel
//! count, spatial neighbor set, and the derived color/geometry features
//! that become the region's node feature vector.

use indexmap::IndexSet;
use quilt_core::FeatureVec;

/// Channel width of the per-superpixel feature vector produced by
/// [`Superpixel::features`].
pub const NODE_CHANNELS: usize = 8;

/// One segmented image region.
///
/// Immutable after construction. The bounding box is inclusive on all
/// four edges; `mask` and `image` are cropped to it, with
/// `mask[y * width + x] == 1` marking pixels inside the region.
#[derive(Clone, Debug, PartialEq)]
pub struct Superpixel {
    id: u32,
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
    count: usize,
    image: Vec<f32>,
    mask: Vec<u8>,
    neighbors: IndexSet<u32>,
}

impl Superpixel {
    pub(crate) fn new(
        id: u32,
        left: usize,
        top: usize,
        right: usize,
        bottom: usize,
        count: usize,
        image: Vec<f32>,
        mask: Vec<u8>,
        neighbors: IndexSet<u32>,
    ) -> Self {
        Self {
            id,
            left,
            top,
            right,
            bottom,
            count,
            image,
            mask,
            neighbors,
        }
    }

    /// The label value this superpixel was assigned by the mask.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Leftmost column of the bounding box.
    pub fn left(&self) -> usize {
        self.left
    }

    /// Topmost row of the bounding box.
    pub fn top(&self) -> usize {
        self.top
    }

    /// Rightmost column of the bounding box (inclusive).
    pub fn right(&self) -> usize {
        self.right
    }

    /// Bottommost row of the bounding box (inclusive).
    pub fn bottom(&self) -> usize {
        self.bottom
    }

    /// Bounding box width in pixels.
    pub fn width(&self) -> usize {
        1 + self.right - self.left
    }

    /// Bounding box height in pixels.
    pub fn height(&self) -> usize {
        1 + self.bottom - self.top
    }

    /// Number of pixels inside the superpixel.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Cropped image samples within the bounding box
    /// (`height × width × 3`, row-major interleaved).
    pub fn image(&self) -> &[f32] {
        &self.image
    }

    /// Binary membership mask within the bounding box
    /// (`height × width`, 1 = inside).
    pub fn mask(&self) -> &[u8] {
        &self.mask
    }

    /// Labels of the spatially adjacent superpixels. Never contains
    /// this superpixel's own id.
    pub fn neighbors(&self) -> &IndexSet<u32> {
        &self.neighbors
    }

    /// Mean color over the pixels inside the superpixel, one value per
    /// channel. Zero for an empty region.
    pub fn mean(&self) -> [f64; 3] {
        if self.count == 0 {
            return [0.0; 3];
        }
        let mut sums = [0.0f64; 3];
        for (i, &m) in self.mask.iter().enumerate() {
            if m == 1 {
                let base = i * 3;
                sums[0] += self.image[base] as f64;
                sums[1] += self.image[base + 1] as f64;
                sums[2] += self.image[base + 2] as f64;
            }
        }
        let c = self.count as f64;
        [sums[0] / c, sums[1] / c, sums[2] / c]
    }

    /// Center of mass of the mask as `(x, y)`, relative to the
    /// bounding box. `(0, 0)` for an empty region.
    pub fn relative_center(&self) -> (f64, f64) {
        if self.count == 0 {
            return (0.0, 0.0);
        }
        let w = self.width();
        let mut sum_x = 0.0f64;
        let mut sum_y = 0.0f64;
        for (i, &m) in self.mask.iter().enumerate() {
            if m == 1 {
                sum_x += (i % w) as f64;
                sum_y += (i / w) as f64;
            }
        }
        let c = self.count as f64;
        (sum_x / c, sum_y / c)
    }

    /// Center of mass normalized by the bounding box extent, as
    /// `(x / width, y / height)`.
    pub fn center_in_box(&self) -> (f64, f64) {
        if self.width() == 0 || self.height() == 0 {
            return (0.0, 0.0);
        }
        let (x, y) = self.relative_center();
        (x / self.width() as f64, y / self.height() as f64)
    }

    /// Center of mass in absolute image coordinates, as `(x, y)`.
    pub fn absolute_center(&self) -> (f64, f64) {
        let (x, y) = self.relative_center();
        (self.left as f64 + x, self.top as f64 + y)
    }

    /// The node feature vector: mean color (3 channels), pixel count,
    /// normalized center (y then x), and bounding box height and width.
    /// Always [`NODE_CHANNELS`] entries.
    pub fn features(&self) -> FeatureVec {
        let color = self.mean();
        let (cx, cy) = self.center_in_box();
        let mut v = FeatureVec::new();
        v.push(color[0] as f32);
        v.push(color[1] as f32);
        v.push(color[2] as f32);
        v.push(self.count as f32);
        v.push(cy as f32);
        v.push(cx as f32);
        v.push(self.height() as f32);
        v.push(self.width() as f32);
        v
    }
}
