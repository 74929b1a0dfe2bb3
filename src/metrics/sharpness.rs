//! Sharpness measurement via Laplacian edge energy.
//!
//! The variance of a 3x3 Laplacian response tracks how much high-frequency
//! detail the image contains: crisp, well-focused images respond strongly,
//! flat or blurred images trend toward zero. The raw variance is mapped to
//! [0,100] through a tanh curve whose knee is the calibrated
//! `sharpness_scale`, tuned so typical photographs land around 50-80.

use crate::calibration::Calibration;
use crate::metrics::mean_std;

/// 3x3 Laplacian response of the luma plane.
///
/// Border pixels are left at zero; the response is only defined for the
/// interior. Also used by the noise estimator as its edge detector.
pub(crate) fn laplacian_response(luma: &[f64], width: usize, height: usize) -> Vec<f64> {
    let mut response = vec![0.0; luma.len()];
    if width < 3 || height < 3 {
        return response;
    }
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let idx = y * width + x;
            response[idx] = luma[idx - width] + luma[idx + width] + luma[idx - 1] + luma[idx + 1]
                - 4.0 * luma[idx];
        }
    }
    response
}

/// Sharpness score in [0,100] for a luma plane.
///
/// # Arguments
///
/// * `luma` - Row-major luminance samples in 0-255 units.
/// * `width` / `height` - Plane dimensions.
/// * `calibration` - Supplies `sharpness_scale`.
#[must_use]
pub fn score(luma: &[f64], width: usize, height: usize, calibration: &Calibration) -> f64 {
    if width < 3 || height < 3 {
        // No interior to convolve; treat as having no measurable detail.
        return 0.0;
    }

    let response = laplacian_response(luma, width, height);
    let interior: Vec<f64> = (1..height - 1)
        .flat_map(|y| (1..width - 1).map(move |x| y * width + x))
        .map(|idx| response[idx])
        .collect();

    let (_, std) = mean_std(&interior);
    let variance = std * std;

    (100.0 * (variance / calibration.sharpness_scale).tanh()).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::luma_plane;

    fn checkerboard(width: usize, height: usize) -> Vec<f64> {
        let mut rgb = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                let v = if (x + y) % 2 == 0 { 255 } else { 0 };
                rgb.extend_from_slice(&[v, v, v]);
            }
        }
        luma_plane(&rgb)
    }

    #[test]
    fn test_flat_image_scores_zero() {
        let cal = Calibration::default();
        let luma = vec![128.0; 32 * 32];
        assert_eq!(score(&luma, 32, 32, &cal), 0.0);
    }

    #[test]
    fn test_checkerboard_saturates() {
        let cal = Calibration::default();
        let luma = checkerboard(32, 32);
        let s = score(&luma, 32, 32, &cal);
        assert!(s > 99.0, "maximum-frequency pattern should saturate, got {s}");
    }

    #[test]
    fn test_tiny_image_has_no_interior() {
        let cal = Calibration::default();
        assert_eq!(score(&[128.0], 1, 1, &cal), 0.0);
        assert_eq!(score(&[0.0, 255.0, 0.0, 255.0], 2, 2, &cal), 0.0);
    }

    #[test]
    fn test_laplacian_of_flat_plane_is_zero() {
        let response = laplacian_response(&vec![77.0; 25], 5, 5);
        assert!(response.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_sharper_pattern_scores_higher() {
        let cal = Calibration::default();
        // Soft gradient vs hard vertical stripes
        let soft: Vec<f64> = (0..32 * 32).map(|i| (i % 32) as f64 * 4.0).collect();
        let hard: Vec<f64> = (0..32usize * 32)
            .map(|i| if (i % 32) / 4 % 2 == 0 { 0.0 } else { 255.0 })
            .collect();
        assert!(score(&hard, 32, 32, &cal) > score(&soft, 32, 32, &cal));
    }
}
