//! Naturalness measurement from color-channel statistics.
//!
//! Natural photographs cluster around well-known per-channel mean and
//! spread statistics. The score measures the average absolute deviation of
//! the image's channel means and standard deviations from the calibrated
//! reference distribution, mapped through an exponential so a perfect match
//! scores 100 and large deviations decay toward 0.

use crate::calibration::Calibration;
use crate::metrics::mean_std;

/// Naturalness score in [0,100] for interleaved RGB8 data.
#[must_use]
pub fn score(rgb: &[u8], calibration: &Calibration) -> f64 {
    let mut deviation = 0.0;
    for channel in 0..3 {
        let samples: Vec<f64> = rgb
            .iter()
            .skip(channel)
            .step_by(3)
            .map(|&v| f64::from(v) / 255.0)
            .collect();
        let (mean, std) = mean_std(&samples);
        deviation += (mean - calibration.reference_mean[channel]).abs()
            + (std - calibration.reference_std[channel]).abs();
    }
    deviation /= 3.0;

    (100.0 * (-deviation / calibration.natural_scale).exp()).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// RGB plane matching the default reference statistics: each channel a
    /// symmetric two-level split producing the reference mean and std.
    fn reference_like(cal: &Calibration, count: usize) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(count * 3);
        for i in 0..count {
            for c in 0..3 {
                let mean = cal.reference_mean[c];
                let std = cal.reference_std[c];
                let v = if i % 2 == 0 { mean + std } else { mean - std };
                rgb.push((v * 255.0).round().clamp(0.0, 255.0) as u8);
            }
        }
        rgb
    }

    #[test]
    fn test_reference_match_scores_high() {
        let cal = Calibration::default();
        let s = score(&reference_like(&cal, 1000), &cal);
        assert!(s > 90.0, "reference-matching statistics should score high, got {s}");
    }

    #[test]
    fn test_solid_extreme_scores_lower_than_reference() {
        let cal = Calibration::default();
        let matched = score(&reference_like(&cal, 1000), &cal);
        let white = score(&vec![255u8; 3000], &cal);
        let black = score(&vec![0u8; 3000], &cal);
        assert!(white < matched);
        assert!(black < matched);
    }

    #[test]
    fn test_score_stays_in_range() {
        let cal = Calibration::default();
        for data in [vec![0u8; 3], vec![255u8; 3], vec![128u8; 300]] {
            let s = score(&data, &cal);
            assert!((0.0..=100.0).contains(&s));
        }
    }

    #[test]
    fn test_heavy_color_cast_scores_lower() {
        let cal = Calibration::default();
        let balanced = reference_like(&cal, 500);
        // Same luminance structure but strongly magenta
        let cast: Vec<u8> = balanced
            .chunks_exact(3)
            .flat_map(|p| [p[0].saturating_add(80), p[1].saturating_sub(80), p[2]])
            .collect();
        assert!(score(&cast, &cal) < score(&balanced, &cal));
    }
}
