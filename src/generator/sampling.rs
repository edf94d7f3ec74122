//! Dominant-color extraction from raster images.
//!
//! Pixels are subsampled at a stride chosen so at most [`MAX_SAMPLES`]
//! are inspected, near-transparent pixels are discarded, and the
//! survivors are clustered with k-means in CIELAB. Initialization is
//! deterministic (lightness quantiles of the sample set), so the same
//! image always produces the same palette, in the same order.

use image::RgbaImage;

use super::{GeneratedSet, PALETTE_SIZE};
use crate::error::PaletteError;
use crate::models::{Lab, RgbColor};

/// Upper bound on pixels inspected per image.
pub const MAX_SAMPLES: usize = 2000;

/// Pixels with alpha at or below this are ignored.
pub const ALPHA_CUTOFF: u8 = 50;

/// k-means refinement rounds; clustering cost stays bounded regardless of
/// image size because the sample cap fixes the input size.
const MAX_ITERATIONS: usize = 16;

/// Convergence threshold for center movement (squared LAB distance).
const CONVERGENCE_EPSILON: f64 = 0.01;

/// Extracts up to [`PALETTE_SIZE`] representative colors from an image.
///
/// # Errors
///
/// Returns [`PaletteError::NoColorsExtracted`] when no sufficiently
/// opaque pixels survive sampling.
pub fn extract_colors(image: &RgbaImage) -> Result<Vec<RgbColor>, PaletteError> {
    let total = (image.width() as usize) * (image.height() as usize);
    let stride = (total / MAX_SAMPLES).max(1);

    let samples: Vec<Lab> = image
        .pixels()
        .step_by(stride)
        .filter(|p| p.0[3] > ALPHA_CUTOFF)
        .map(|p| Lab::from_rgb(RgbColor::new(p.0[0], p.0[1], p.0[2])))
        .collect();

    if samples.is_empty() {
        return Err(PaletteError::NoColorsExtracted);
    }

    let k = PALETTE_SIZE.min(samples.len());
    let centers = cluster(&samples, k);

    Ok(centers.into_iter().map(Lab::to_rgb).collect())
}

/// Builds a generation result from a decoded image and its source name.
///
/// The default palette name is derived from the source's base name, the
/// way mode-based generation derives it from the mode label.
pub fn generate_from_image(
    image: &RgbaImage,
    source_name: &str,
) -> Result<GeneratedSet, PaletteError> {
    let colors = extract_colors(image)?;
    let stem = source_name.split('.').next().unwrap_or(source_name);
    Ok(GeneratedSet {
        name: format!("{stem} Palette"),
        colors,
    })
}

/// Plain k-means over LAB samples with quantile initialization.
///
/// Returned centers keep their initialization order: ascending lightness
/// over the sample distribution. Empty clusters keep their previous
/// center rather than being reseeded.
fn cluster(samples: &[Lab], k: usize) -> Vec<Lab> {
    let mut by_lightness: Vec<Lab> = samples.to_vec();
    by_lightness.sort_by(|a, b| a.l.total_cmp(&b.l));

    let mut centers: Vec<Lab> = (0..k)
        .map(|i| {
            let index = if k == 1 {
                by_lightness.len() / 2
            } else {
                i * (by_lightness.len() - 1) / (k - 1)
            };
            by_lightness[index]
        })
        .collect();

    let mut assignments = vec![0usize; samples.len()];

    for _ in 0..MAX_ITERATIONS {
        for (slot, sample) in assignments.iter_mut().zip(samples) {
            *slot = nearest_center(&centers, *sample);
        }

        let mut sums = vec![(Lab { l: 0.0, a: 0.0, b: 0.0 }, 0usize); k];
        for (&cluster_index, sample) in assignments.iter().zip(samples) {
            let (sum, count) = &mut sums[cluster_index];
            sum.l += sample.l;
            sum.a += sample.a;
            sum.b += sample.b;
            *count += 1;
        }

        let mut shift = 0.0;
        for (center, (sum, count)) in centers.iter_mut().zip(sums) {
            if count == 0 {
                continue;
            }
            let n = count as f64;
            let next = Lab {
                l: sum.l / n,
                a: sum.a / n,
                b: sum.b / n,
            };
            shift += center.distance_squared(next);
            *center = next;
        }

        if shift < CONVERGENCE_EPSILON {
            break;
        }
    }

    centers
}

fn nearest_center(centers: &[Lab], sample: Lab) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, center) in centers.iter().enumerate() {
        let distance = center.distance_squared(sample);
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}
