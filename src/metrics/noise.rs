//! Noise estimation from high-frequency residual outside edges.
//!
//! The estimator compares each interior pixel with a 3x3 box-smoothed copy.
//! Pixels whose Laplacian magnitude exceeds the calibrated edge threshold
//! are real structure, not noise, and are excluded; the remaining mean
//! absolute residual is inverted so cleaner images score higher.
//!
//! A half-LSB quantization floor is added to the residual: any 8-bit capture
//! carries at least that much rounding noise, so the score never reaches
//! exactly 100 even for a mathematically flat image.

use crate::calibration::Calibration;
use crate::metrics::sharpness::laplacian_response;

/// 3x3 box blur of the luma plane for the interior region.
///
/// Border pixels keep their original value.
pub(crate) fn box_blur3(luma: &[f64], width: usize, height: usize) -> Vec<f64> {
    let mut out = luma.to_vec();
    if width < 3 || height < 3 {
        return out;
    }
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let idx = y * width + x;
            let mut sum = 0.0;
            for dy in 0..3 {
                for dx in 0..3 {
                    sum += luma[(y + dy - 1) * width + (x + dx - 1)];
                }
            }
            out[idx] = sum / 9.0;
        }
    }
    out
}

/// Noise score in [0,100] for a luma plane in 0-255 units. Higher means
/// cleaner.
#[must_use]
pub fn score(luma: &[f64], width: usize, height: usize, calibration: &Calibration) -> f64 {
    let residual = if width < 3 || height < 3 {
        // No interior to smooth; only the quantization floor remains.
        0.0
    } else {
        let smoothed = box_blur3(luma, width, height);
        let edges = laplacian_response(luma, width, height);

        let interior = (1..height - 1).flat_map(|y| (1..width - 1).map(move |x| y * width + x));

        let mut sum = 0.0;
        let mut count = 0usize;
        let mut sum_all = 0.0;
        let mut count_all = 0usize;
        for idx in interior {
            let r = (luma[idx] - smoothed[idx]).abs();
            sum_all += r;
            count_all += 1;
            if edges[idx].abs() <= calibration.edge_threshold {
                sum += r;
                count += 1;
            }
        }

        if count > 0 {
            sum / count as f64
        } else if count_all > 0 {
            // Every interior pixel is an edge; fall back to the full plane so
            // a maximally busy image still gets a defined estimate.
            sum_all / count_all as f64
        } else {
            0.0
        }
    };

    let effective = residual + calibration.quantization_floor;
    (100.0 * (1.0 - effective / calibration.noise_scale)).clamp(0.0, 100.0)
}
