//! Deterministic image and mask fixtures.

use quilt_core::{Image, LabelMask};

/// An `h×w` image with every sample set to `value`.
pub fn uniform_image(h: usize, w: usize, value: f32) -> Image {
    Image::filled(h, w, value)
}

/// An `h×w` image whose channel samples ramp with pixel position:
/// pixel `(y, x)` holds `[i, i + 1, i + 2]` for `i = y * w + x`.
pub fn gradient_image(h: usize, w: usize) -> Image {
    let mut data = Vec::with_capacity(h * w * 3);
    for i in 0..h * w {
        data.push(i as f32);
        data.push(i as f32 + 1.0);
        data.push(i as f32 + 2.0);
    }
    Image::new(h, w, data).expect("gradient buffer sized to h*w*3")
}

/// An `h×w` mask tiled with `block×block` squares, labeled row-major:
/// block `(r, c)` gets label `r * blocks_per_row + c`.
///
/// `h` and `w` need not be multiples of `block`; edge blocks are
/// simply smaller.
pub fn block_mask(h: usize, w: usize, block: usize) -> LabelMask {
    assert!(block > 0, "block size must be positive");
    let blocks_per_row = w.div_ceil(block);
    let mut labels = Vec::with_capacity(h * w);
    for y in 0..h {
        for x in 0..w {
            labels.push(((y / block) * blocks_per_row + x / block) as u32);
        }
    }
    LabelMask::new(h, w, labels).expect("block buffer sized to h*w")
}

/// An `h×w` mask of full-width horizontal stripes, one label per row
/// group of `stripe` rows.
pub fn stripe_mask(h: usize, w: usize, stripe: usize) -> LabelMask {
    assert!(stripe > 0, "stripe height must be positive");
    let mut labels = Vec::with_capacity(h * w);
    for y in 0..h {
        for _ in 0..w {
            labels.push((y / stripe) as u32);
        }
    }
    LabelMask::new(h, w, labels).expect("stripe buffer sized to h*w")
}
