//! This file provides the numeric constants used by the beer color model and the color space
//! conversion that follows it: the rating scale factors, the shape of the averaged beer absorbance
//! spectrum, the XYZ to sRGB matrix, and the normalization factor that scales the integrated
//! luminance of the illuminant to 1. Keeping them in one place means every stage of the pipeline
//! agrees on the same values.

use na::Matrix3;
use spectral::CIE_D65_TABLE;

/// The default transmission path in centimeters. This is the typical sample glass width used by
/// the [BJCP color guide](https://www.bjcp.org/education-training/education-resources/color-guide).
pub const DEFAULT_PATH: f64 = 5.0;

/// An SRM rating divided by this gives the absorbance coefficient at 430 nm.
pub const SRM_SCALE: f64 = 12.7;

/// An EBC rating divided by this gives the absorbance coefficient at 430 nm.
pub const EBC_SCALE: f64 = 25.0;

/// The conventional ratio between the EBC and SRM scales, as used by brewers to convert ratings.
/// This is not the ratio of the two scale factors above (25 / 12.7 ≈ 1.9685), so converting a
/// rating across units and rendering it gives a very slightly different color.
pub const EBC_PER_SRM: f64 = 1.97;

/// The wavelength, in nanometers, the absorbance coefficient of a rating refers to.
pub const ANCHOR_WAVELENGTH: f64 = 430.0;

// The absorbance spectrum of beer, averaged over an ensemble of 99 beers, is approximated by the sum
// of two exponentials in wavelength. Each tuple is (weight, decay length in nm); the weights sum to
// 1 so that the shape is exactly 1 at the anchor wavelength.
pub const SHORT_DECAY: (f64, f64) = (0.02465, 17.591);
pub const LONG_DECAY: (f64, f64) = (0.97535, 82.122);

/// The linear transform from CIE XYZ (D65, Y normalized to 1) to linear sRGB.
#[allow(non_snake_case)]
pub fn STANDARD_RGB_TRANSFORM_MAT() -> Matrix3<f64> {
    Matrix3::new(
        03.240479,
        -1.537150,
        -0.498535,
        -0.969256,
        01.875992,
        00.041556,
        00.055648,
        -0.204043,
        01.057311,
    )
}

/// Computes the factor that normalizes tristimulus values integrated against D65, such that a
/// perfectly transparent sample has a luminance Y of exactly 1. This is the reciprocal of the sum
/// of D65 weighted by ȳ over the whole table, and is always positive and finite.
pub fn normalization_factor() -> f64 {
    let total: f64 = CIE_D65_TABLE.iter().map(|s| s.d65 * s.ybar).sum();
    1.0 / total
}

lazy_static! {
    /// The normalization factor, computed once on first use and shared from then on.
    pub static ref NORMALIZATION: f64 = normalization_factor();
}

/// The precision used for floating-point comparisons in tests.
#[cfg(test)]
pub const TEST_PRECISION: f64 = 1e-9;

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use na::Vector3;

    #[test]
    fn test_normalization_factor() {
        // independently computed in double precision
        assert!((normalization_factor() - 0.0004731588897773325).abs() <= 1e-15);
        assert_eq!(*NORMALIZATION, normalization_factor());
    }

    #[test]
    fn test_shape_weights_sum_to_one() {
        assert!((SHORT_DECAY.0 + LONG_DECAY.0 - 1.0).abs() <= TEST_PRECISION);
    }

    #[test]
    fn test_scale_ratio_consistency() {
        // the rating scales are fixed separately, but should agree with the conventional ratio
        let ratio = EBC_SCALE / SRM_SCALE;
        assert!((ratio - EBC_PER_SRM).abs() < 0.002);
    }

    #[test]
    fn test_matrix_maps_white_to_white() {
        // D65 white (Y = 1) should land close to (1, 1, 1) in linear sRGB
        let white = STANDARD_RGB_TRANSFORM_MAT() * Vector3::new(0.95047, 1.0, 1.08883);
        for i in 0..3 {
            assert!((white[i] - 1.0).abs() <= 1e-3);
        }
    }
}
