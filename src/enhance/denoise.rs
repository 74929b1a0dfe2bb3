//! Edge-aware spatial smoothing.
//!
//! Each pixel is blended toward its 3x3 box-smoothed value. The blend
//! weight is the product of the denoise strength and a continuous edge
//! factor `exp(-|luma - smoothed_luma| / denoise_edge_sigma)`: small
//! residuals (likely noise) are smoothed fully, large residuals (likely
//! real structure) are mostly preserved. There is no threshold jump, so the
//! result varies continuously with strength.

use crate::calibration::Calibration;
use crate::enhance::blur3_rgb;
use crate::metrics::luma_plane;

/// Smooth interleaved RGB8 data. Strength 0 returns the input unchanged.
#[must_use]
pub fn apply(
    rgb: Vec<u8>,
    width: usize,
    height: usize,
    strength: f64,
    calibration: &Calibration,
) -> Vec<u8> {
    if strength <= 0.0 {
        return rgb;
    }

    let blurred = blur3_rgb(&rgb, width, height);
    let luma = luma_plane(&rgb);

    let mut out = Vec::with_capacity(rgb.len());
    for (idx, &l) in luma.iter().enumerate() {
        let base = idx * 3;
        let blurred_luma = 0.299 * blurred[base] + 0.587 * blurred[base + 1] + 0.114 * blurred[base + 2];
        let edge_factor = (-(l - blurred_luma).abs() / calibration.denoise_edge_sigma).exp();
        let weight = strength * edge_factor;

        for c in 0..3 {
            let v = f64::from(rgb[base + c]);
            out.push((v + weight * (blurred[base + c] - v)).round().clamp(0.0, 255.0) as u8);
        }
    }
    out
}
