//! Shared fixture generators for the Quilt benchmarks.
//!
//! Seeded ChaCha generators keep benchmark inputs reproducible run to
//! run without baking large fixture files into the repository.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use quilt_core::{Image, LabelMask};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A reproducible image with uniformly random samples in `[0, 1)`.
pub fn random_image(h: usize, w: usize, seed: u64) -> Image {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data: Vec<f32> = (0..h * w * 3)
        .map(|_| (rng.next_u32() >> 8) as f32 / (1 << 24) as f32)
        .collect();
    Image::new(h, w, data).expect("buffer sized to h*w*3")
}

/// A block mask with randomly jittered tile boundaries, approximating
/// `segments` irregular regions.
pub fn jittered_mask(h: usize, w: usize, segments: usize, seed: u64) -> LabelMask {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let side = (segments as f64).sqrt().ceil() as usize;
    let mut labels = Vec::with_capacity(h * w);
    for y in 0..h {
        for x in 0..w {
            // Jitter each pixel's tile assignment by up to one pixel.
            let jy = (y + (rng.next_u32() % 3) as usize).min(h.saturating_sub(1));
            let jx = (x + (rng.next_u32() % 3) as usize).min(w.saturating_sub(1));
            labels.push((jy * side / h * side + jx * side / w) as u32);
        }
    }
    LabelMask::new(h, w, labels).expect("buffer sized to h*w")
}
