//! Color correction: gray-world white balance plus saturation.
//!
//! White balance scales each channel toward the gray-world assumption (all
//! channel means equal), blended by strength. Saturation then pushes each
//! pixel away from its Rec.601 luma by `1 + strength * saturation_gain`.
//! Strength 0 is an exact identity.

use crate::calibration::Calibration;

/// Color-correct interleaved RGB8 data. Strength 0 returns the input
/// unchanged. Dimensions are part of the shared transform signature; the
/// correction itself is pointwise over global statistics.
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

    let pixel_count = (rgb.len() / 3).max(1) as f64;
    let mut channel_mean = [0.0f64; 3];
    for pixel in rgb.chunks_exact(3) {
        for c in 0..3 {
            channel_mean[c] += f64::from(pixel[c]);
        }
    }
    for mean in &mut channel_mean {
        *mean /= pixel_count;
    }
    let gray = (channel_mean[0] + channel_mean[1] + channel_mean[2]) / 3.0;

    let mut balance = [1.0f64; 3];
    for c in 0..3 {
        if channel_mean[c] > 0.0 {
            let full = gray / channel_mean[c];
            balance[c] = 1.0 + strength * calibration.white_balance_gain * (full - 1.0);
        }
    }

    let saturation = 1.0 + strength * calibration.saturation_gain;

    let mut out = Vec::with_capacity(rgb.len());
    for pixel in rgb.chunks_exact(3) {
        let r = f64::from(pixel[0]) * balance[0];
        let g = f64::from(pixel[1]) * balance[1];
        let b = f64::from(pixel[2]) * balance[2];
        let luma = 0.299 * r + 0.587 * g + 0.114 * b;
        for v in [r, g, b] {
            out.push((luma + (v - luma) * saturation).round().clamp(0.0, 255.0) as u8);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_strength_returns_input_unchanged() {
        let rgb = vec![30u8, 90, 150, 10, 200, 40];
        let out = apply(rgb.clone(), 2, 1, 0.0, &Calibration::default());
        assert_eq!(out, rgb);
    }

    #[test]
    fn test_neutral_gray_is_unaffected() {
        let rgb = vec![128u8; 8 * 8 * 3];
        let out = apply(rgb.clone(), 8, 8, 1.0, &Calibration::default());
        assert_eq!(out, rgb);
    }

    #[test]
    fn test_saturation_widens_channel_separation() {
        let cal = Calibration::default();
        // Balanced means (every pixel cycles through R/G/B casts) so white
        // balance is neutral and only saturation acts.
        let rgb: Vec<u8> = (0..30)
            .flat_map(|i| match i % 3 {
                0 => [140u8, 120, 120],
                1 => [120, 140, 120],
                _ => [120, 120, 140],
            })
            .collect();
        let out = apply(rgb.clone(), 10, 3, 1.0, &cal);

        let spread = |data: &[u8]| {
            data.chunks_exact(3)
                .map(|p| {
                    let max = *p.iter().max().unwrap() as i32;
                    let min = *p.iter().min().unwrap() as i32;
                    max - min
                })
                .sum::<i32>()
        };
        assert!(spread(&out) > spread(&rgb));
    }

    #[test]
    fn test_white_balance_reduces_color_cast() {
        let cal = Calibration::default();
        // Uniform warm cast: red mean well above blue mean
        let rgb: Vec<u8> = (0..64).flat_map(|_| [180u8, 130, 90]).collect();
        let out = apply(rgb.clone(), 8, 8, 1.0, &cal);

        let mean = |data: &[u8], c: usize| {
            data.chunks_exact(3).map(|p| f64::from(p[c])).sum::<f64>() / 64.0
        };
        let cast_before = mean(&rgb, 0) - mean(&rgb, 2);
        let cast_after = mean(&out, 0) - mean(&out, 2);
        assert!(cast_after < cast_before, "gray-world balance should narrow the cast");
    }

    #[test]
    fn test_output_length_matches_input() {
        let rgb = vec![10u8; 5 * 7 * 3];
        let out = apply(rgb, 5, 7, 0.6, &Calibration::default());
        assert_eq!(out.len(), 5 * 7 * 3);
    }
}
