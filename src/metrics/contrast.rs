//! Contrast measurement from the luminance distribution.
//!
//! Contrast is the standard deviation of the luma plane scaled so that the
//! widest possible 8-bit spread (half black, half white, std 127.5) scores
//! 100. Solid images score 0.

use crate::metrics::mean_std;

/// Maximum possible luma standard deviation for 8-bit data.
const MAX_LUMA_STD: f64 = 127.5;

/// Contrast score in [0,100] for a luma plane in 0-255 units.
#[must_use]
pub fn score(luma: &[f64]) -> f64 {
    let (_, std) = mean_std(luma);
    (100.0 * std / MAX_LUMA_STD).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_image_scores_zero() {
        assert_eq!(score(&vec![90.0; 64]), 0.0);
    }

    #[test]
    fn test_half_black_half_white_scores_full() {
        let mut luma = vec![0.0; 32];
        luma.extend(vec![255.0; 32]);
        let s = score(&luma);
        assert!((s - 100.0).abs() < 0.1, "expected ~100, got {s}");
    }

    #[test]
    fn test_narrow_spread_scores_low() {
        let luma: Vec<f64> = (0..64).map(|i| 120.0 + f64::from(i % 8)).collect();
        let s = score(&luma);
        assert!(s > 0.0);
        assert!(s < 10.0);
    }

    #[test]
    fn test_single_pixel_scores_zero() {
        assert_eq!(score(&[200.0]), 0.0);
    }
}
