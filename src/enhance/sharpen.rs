//! Unsharp-mask sharpening.
//!
//! Classic unsharp mask: amplify the difference between each pixel and a
//! 3x3 blurred copy. The amplification is `strength * sharpen_gain`, so
//! strength 0 is an exact identity.

use crate::calibration::Calibration;
use crate::enhance::blur3_rgb;

/// Sharpen interleaved RGB8 data. Strength 0 returns the input unchanged.
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

    let amount = strength * calibration.sharpen_gain;
    let blurred = blur3_rgb(&rgb, width, height);

    rgb.iter()
        .zip(blurred.iter())
        .map(|(&v, &b)| {
            let v = f64::from(v);
            (v + amount * (v - b)).round().clamp(0.0, 255.0) as u8
        })
        .collect()
}
