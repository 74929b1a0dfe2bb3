//! Contrast stretching around the global luminance mean.
//!
//! Each channel is pushed away from the image's mean luma by a gain of
//! `1 + strength * contrast_gain`, widening the histogram without shifting
//! the overall exposure. Strength 0 is an exact identity.

use crate::calibration::Calibration;
use crate::metrics::luma_plane;

/// Stretch contrast of interleaved RGB8 data. Strength 0 returns the input
/// unchanged. Dimensions are part of the shared transform signature; the
/// stretch itself is pointwise.
#[must_use]
pub fn apply(
    rgb: Vec<u8>,
    _width: usize,
    _height: usize,
    strength: f64,
    calibration: &Calibration,
) -> Vec<u8> {
    if strength <= 0.0 {
        return rgb;
    }

    let luma = luma_plane(&rgb);
    let mean = luma.iter().sum::<f64>() / luma.len().max(1) as f64;
    let gain = 1.0 + strength * calibration.contrast_gain;

    rgb.iter()
        .map(|&v| {
            (mean + (f64::from(v) - mean) * gain)
                .round()
                .clamp(0.0, 255.0) as u8
        })
        .collect()
}
