//! This module holds the spectral data every conversion is integrated against: the CIE 1931 2°
//! standard observer color matching functions and the relative spectral power of CIE standard
//! illuminant D65, both sampled from 380 nm to 780 nm in 5 nm steps. The values are the CIE's own
//! tabulations ([observer](https://cie.co.at/datatable/cie-1931-colour-matching-functions-2-degree-observer-5nm),
//! [D65](https://cie.co.at/datatable/cie-standard-illuminant-d65)), to the precision printed there.
//! Changing any of them changes every color this crate produces.

/// The first wavelength in the table, in nanometers.
pub const START_WAVELENGTH: f64 = 380.0;

/// The distance between two neighboring rows of the table, in nanometers.
pub const WAVELENGTH_STEP: f64 = 5.0;

/// The number of rows in the table: 380 to 780 nm inclusive.
pub const SAMPLE_COUNT: usize = 81;

/// One row of the spectral table: the three color matching function weights of the 2° observer and
/// the relative power of D65 at a single wavelength. The wavelength itself is implied by the row's
/// position; see [`SpectralSample::wavelength`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpectralSample {
    /// The x̄ color matching function.
    pub xbar: f64,
    /// The ȳ color matching function. This is also the photopic luminosity function.
    pub ybar: f64,
    /// The z̄ color matching function.
    pub zbar: f64,
    /// The relative spectral power of D65, normalized so that 560 nm is 100.
    pub d65: f64,
}

impl SpectralSample {
    /// Gets the wavelength, in nanometers, of the row at the given index of [`CIE_D65_TABLE`].
    pub fn wavelength(index: usize) -> f64 {
        START_WAVELENGTH + WAVELENGTH_STEP * index as f64
    }
}

const fn sample(xbar: f64, ybar: f64, zbar: f64, d65: f64) -> SpectralSample {
    SpectralSample {
        xbar,
        ybar,
        zbar,
        d65,
    }
}

/// The spectral table, in ascending order of wavelength.
pub static CIE_D65_TABLE: [SpectralSample; SAMPLE_COUNT] = [
    sample(0.001368, 0.000039, 0.006450, 49.9755),
    sample(0.002236, 0.000064, 0.010550, 52.3118),
    sample(0.004243, 0.000120, 0.020050, 54.6482),
    sample(0.007650, 0.000217, 0.036210, 68.7015),
    sample(0.014310, 0.000396, 0.067850, 82.7549),
    sample(0.023190, 0.000640, 0.110200, 87.1204),
    sample(0.043510, 0.001210, 0.207400, 91.486),
    sample(0.077630, 0.002180, 0.371300, 92.4589),
    sample(0.134380, 0.004000, 0.645600, 93.4318),
    sample(0.214770, 0.007300, 1.039050, 90.057),
    sample(0.283900, 0.011600, 1.385600, 86.6823),
    sample(0.328500, 0.016840, 1.622960, 95.7736),
    sample(0.348280, 0.023000, 1.747060, 104.865),
    sample(0.348060, 0.029800, 1.782600, 110.936),
    sample(0.336200, 0.038000, 1.772110, 117.008),
    sample(0.318700, 0.048000, 1.744100, 117.41),
    sample(0.290800, 0.060000, 1.669200, 117.812),
    sample(0.251100, 0.073900, 1.528100, 116.336),
    sample(0.195360, 0.090980, 1.287640, 114.861),
    sample(0.142100, 0.112600, 1.041900, 115.392),
    sample(0.095640, 0.139020, 0.812950, 115.923),
    sample(0.057950, 0.169300, 0.616200, 112.367),
    sample(0.032010, 0.208020, 0.465180, 108.811),
    sample(0.014700, 0.258600, 0.353300, 109.082),
    sample(0.004900, 0.323000, 0.272000, 109.354),
    sample(0.002400, 0.407300, 0.212300, 108.578),
    sample(0.009300, 0.503000, 0.158200, 107.802),
    sample(0.029100, 0.608200, 0.111700, 106.296),
    sample(0.063270, 0.710000, 0.078250, 104.79),
    sample(0.109600, 0.793200, 0.057250, 106.239),
    sample(0.165500, 0.862000, 0.042160, 107.689),
    sample(0.225750, 0.914850, 0.029840, 106.047),
    sample(0.290400, 0.954000, 0.020300, 104.405),
    sample(0.359700, 0.980300, 0.013400, 104.225),
    sample(0.433450, 0.994950, 0.008750, 104.046),
    sample(0.512050, 1.000000, 0.005750, 102.023),
    sample(0.594500, 0.995000, 0.003900, 100.0),
    sample(0.678400, 0.978600, 0.002750, 98.1671),
    sample(0.762100, 0.952000, 0.002100, 96.3342),
    sample(0.842500, 0.915400, 0.001800, 96.0611),
    sample(0.916300, 0.870000, 0.001650, 95.788),
    sample(0.978600, 0.816300, 0.001400, 92.2368),
    sample(1.026300, 0.757000, 0.001100, 88.6856),
    sample(1.056700, 0.694900, 0.001000, 89.3459),
    sample(1.062200, 0.631000, 0.000800, 90.0062),
    sample(1.045600, 0.566800, 0.000600, 89.8026),
    sample(1.002600, 0.503000, 0.000340, 89.5991),
    sample(0.938400, 0.441200, 0.000240, 88.6489),
    sample(0.854450, 0.381000, 0.000190, 87.69871),
    sample(0.751400, 0.321000, 0.000100, 85.4936),
    sample(0.642400, 0.265000, 0.000050, 83.2886),
    sample(0.541900, 0.217000, 0.000030, 83.4939),
    sample(0.447900, 0.175000, 0.000020, 83.6992),
    sample(0.360800, 0.138200, 0.000010, 81.863),
    sample(0.283500, 0.107000, 0.000000, 80.0268),
    sample(0.218700, 0.081600, 0.000000, 80.1207),
    sample(0.164900, 0.061000, 0.000000, 80.2146),
    sample(0.121200, 0.044580, 0.000000, 81.2462),
    sample(0.087400, 0.032000, 0.000000, 82.2778),
    sample(0.063600, 0.023200, 0.000000, 80.281),
    sample(0.046770, 0.017000, 0.000000, 78.2842),
    sample(0.032900, 0.011920, 0.000000, 74.0027),
    sample(0.022700, 0.008210, 0.000000, 69.7213),
    sample(0.015840, 0.005723, 0.000000, 70.6652),
    sample(0.011359, 0.004102, 0.000000, 71.6091),
    sample(0.008111, 0.002929, 0.000000, 72.979),
    sample(0.005790, 0.002091, 0.000000, 74.349),
    sample(0.004109, 0.001484, 0.000000, 67.9765),
    sample(0.002899, 0.001047, 0.000000, 61.604),
    sample(0.002049, 0.000740, 0.000000, 65.7448),
    sample(0.001440, 0.000520, 0.000000, 69.8856),
    sample(0.001000, 0.000361, 0.000000, 72.4863),
    sample(0.000690, 0.000249, 0.000000, 75.087),
    sample(0.000476, 0.000172, 0.000000, 69.3398),
    sample(0.000332, 0.000120, 0.000000, 63.5927),
    sample(0.000235, 0.000085, 0.000000, 55.0054),
    sample(0.000166, 0.000060, 0.000000, 46.4182),
    sample(0.000117, 0.000042, 0.000000, 56.6118),
    sample(0.000083, 0.000030, 0.000000, 66.8054),
    sample(0.000059, 0.000021, 0.000000, 65.0941),
    sample(0.000042, 0.000015, 0.000000, 63.3828),
];

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_table_bounds() {
        assert_eq!(CIE_D65_TABLE.len(), 81);
        assert_eq!(SpectralSample::wavelength(0), 380.0);
        assert_eq!(SpectralSample::wavelength(10), 430.0);
        assert_eq!(SpectralSample::wavelength(SAMPLE_COUNT - 1), 780.0);
    }

    #[test]
    fn test_table_landmarks() {
        // ȳ peaks at exactly 1 at 555 nm, and D65 is normalized to 100 at 560 nm
        let y_peak = &CIE_D65_TABLE[35];
        assert_eq!(y_peak.ybar, 1.0);
        assert!(CIE_D65_TABLE.iter().all(|s| s.ybar <= 1.0));
        assert_eq!(CIE_D65_TABLE[36].d65, 100.0);
        // z̄ vanishes from 650 nm onwards
        assert!(CIE_D65_TABLE[54..].iter().all(|s| s.zbar == 0.0));
    }

    #[test]
    fn test_table_is_physical() {
        for s in CIE_D65_TABLE.iter() {
            assert!(s.xbar > 0.0);
            assert!(s.ybar > 0.0);
            assert!(s.zbar >= 0.0);
            assert!(s.d65 > 0.0);
        }
    }
}
