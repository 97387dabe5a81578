//! Superpixel extraction from a label mask.
//!
//! [`extract_superpixels`] turns an image plus a per-pixel label mask
//! into one [`Superpixel`] per distinct label. The hot path is a single
//! flat scan over the mask: per-pixel work is a dense-index lookup,
//! bounding-box/count accumulation, and a small stencil for neighbor
//! discovery. Cropping happens in a second pass once the bounding
//! boxes are known.

use indexmap::{IndexMap, IndexSet};
use quilt_core::{Image, LabelMask, SegmentError};

use crate::superpixel::Superpixel;

/// Pixel connectivity used for neighbor discovery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Connectivity {
    /// Cardinal neighbors only.
    Four,
    /// Cardinal + diagonal neighbors (the 3×3 window).
    #[default]
    Eight,
}

/// Offsets: N, S, W, E.
const OFFSETS_4: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

impl Connectivity {
    fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Four => &OFFSETS_4,
            Self::Eight => &OFFSETS_8,
        }
    }
}

/// Running bounding-box and count accumulator for one label.
struct Acc {
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
    count: usize,
    neighbors: IndexSet<u32>,
}

impl Acc {
    fn new() -> Self {
        Self {
            left: usize::MAX,
            top: usize::MAX,
            right: 0,
            bottom: 0,
            count: 0,
            neighbors: IndexSet::new(),
        }
    }
}

/// Extract one [`Superpixel`] per distinct label in `mask`.
///
/// The returned map is keyed by label value in ascending label order;
/// a node's index in downstream stages is its position in this map.
///
/// Two labels are neighbors when any pixel of one has a pixel of the
/// other inside its connectivity window, clipped at image borders.
///
/// # Errors
///
/// - [`SegmentError::InvalidMask`] if the mask shape differs from the
///   image shape.
/// - [`SegmentError::EmptySegmentation`] if the mask covers no pixels.
pub fn extract_superpixels(
    image: &Image,
    mask: &LabelMask,
    connectivity: Connectivity,
) -> Result<IndexMap<u32, Superpixel>, SegmentError> {
    if mask.height() != image.height() || mask.width() != image.width() {
        return Err(SegmentError::InvalidMask {
            image: (image.height(), image.width()),
            mask: (mask.height(), mask.width()),
        });
    }
    if mask.is_empty() {
        return Err(SegmentError::EmptySegmentation);
    }

    let h = mask.height();
    let w = mask.width();
    let labels = mask.labels();

    // Distinct labels in ascending order; a label's rank here is its
    // dense index for the rest of the pass.
    let mut sorted: Vec<u32> = labels.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    let n = sorted.len();

    // Remap the mask to dense indices. Masks with labels already
    // 0..n (the usual segmentation output) skip the binary search.
    let already_dense = sorted[0] == 0 && sorted[n - 1] as usize == n - 1;
    let dense: Vec<u32> = if already_dense {
        labels.to_vec()
    } else {
        labels
            .iter()
            .map(|l| {
                sorted.binary_search(l).expect("every mask label is in the sorted set") as u32
            })
            .collect()
    };

    let mut accs: Vec<Acc> = (0..n).map(|_| Acc::new()).collect();
    let offsets = connectivity.offsets();

    for y in 0..h {
        for x in 0..w {
            let d = dense[y * w + x] as usize;
            let acc = &mut accs[d];
            acc.left = acc.left.min(x);
            acc.top = acc.top.min(y);
            acc.right = acc.right.max(x);
            acc.bottom = acc.bottom.max(y);
            acc.count += 1;

            for &(dy, dx) in offsets {
                let ny = y as i32 + dy;
                let nx = x as i32 + dx;
                if ny < 0 || ny >= h as i32 || nx < 0 || nx >= w as i32 {
                    continue;
                }
                let nd = dense[ny as usize * w + nx as usize];
                if nd as usize != d {
                    acc.neighbors.insert(nd);
                }
            }
        }
    }

    let mut result = IndexMap::with_capacity(n);
    for (d, acc) in accs.into_iter().enumerate() {
        let id = sorted[d];
        let bw = 1 + acc.right - acc.left;
        let bh = 1 + acc.bottom - acc.top;

        let mut crop_image = Vec::with_capacity(bh * bw * 3);
        let mut crop_mask = Vec::with_capacity(bh * bw);
        for y in acc.top..=acc.bottom {
            for x in acc.left..=acc.right {
                let px = image.pixel(y, x);
                crop_image.extend_from_slice(&px);
                crop_mask.push(u8::from(dense[y * w + x] as usize == d));
            }
        }

        // Dense neighbor indices back to label values, ascending.
        let mut neighbor_ids: Vec<u32> = acc.neighbors.iter().map(|&nd| sorted[nd as usize]).collect();
        neighbor_ids.sort_unstable();
        let neighbors: IndexSet<u32> = neighbor_ids.into_iter().collect();

        result.insert(
            id,
            Superpixel::new(
                id, acc.left, acc.top, acc.right, acc.bottom, acc.count, crop_image, crop_mask,
                neighbors,
            ),
        );
    }

    Ok(result)
}
