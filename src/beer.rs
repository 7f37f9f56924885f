//! This module implements the beer color model itself. Beer is treated as an absorber obeying the
//! Beer–Lambert law at every wavelength, with an absorbance spectrum shaped like the average of a
//! large ensemble of beers and scaled by the beer's color rating. The light transmitted through a
//! glass of a given width is integrated against D65 and the 2° observer to get a CIE XYZ color,
//! which is then converted to sRGB.
//!
//! The approach is the one described by A. J. deLange, "Color," in *Brewing Materials and
//! Processes* (Elsevier, 2016), pp. 199–249.

use color::{RGBColor, XYZColor};
use consts::{
    ANCHOR_WAVELENGTH, EBC_PER_SRM, EBC_SCALE, LONG_DECAY, NORMALIZATION, SHORT_DECAY, SRM_SCALE,
};
use spectral::{SpectralSample, CIE_D65_TABLE};

/// The relative absorbance of beer at a given wavelength, normalized to 1 at 430 nm.
fn absorbance_shape(wavelength: f64) -> f64 {
    let offset = wavelength - ANCHOR_WAVELENGTH;
    SHORT_DECAY.0 * (-offset / SHORT_DECAY.1).exp() + LONG_DECAY.0 * (-offset / LONG_DECAY.1).exp()
}

/// Gets the fraction of light at the given wavelength that makes it through `path_cm` centimeters of
/// beer with absorbance coefficient `a430` at 430 nm. Anything but a positive absorbance times path
/// gives full transmittance or more; a large one underflows to 0.
pub fn transmittance(a430: f64, path_cm: f64, wavelength: f64) -> f64 {
    10f64.powf(-(a430 * path_cm * absorbance_shape(wavelength)))
}

/// Integrates the transmission spectrum of the beer, lit by D65, against the color matching
/// functions over 5 nm rectangles, and normalizes the result.
pub(crate) fn beer_to_xyz(a430: f64, path_cm: f64) -> XYZColor {
    let mut xyz = XYZColor {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    for (i, sample) in CIE_D65_TABLE.iter().enumerate() {
        let t = transmittance(a430, path_cm, SpectralSample::wavelength(i));
        let power = sample.d65 * t;
        xyz.x += power * sample.xbar;
        xyz.y += power * sample.ybar;
        xyz.z += power * sample.zbar;
    }
    let k = *NORMALIZATION;
    XYZColor {
        x: xyz.x * k,
        y: xyz.y * k,
        z: xyz.z * k,
    }
}

fn beer_to_srgb(a430: f64, path_cm: f64) -> RGBColor {
    let xyz = beer_to_xyz(a430, path_cm);
    let rgb = xyz.to_srgb();
    trace!(
        "a430 {} over {} cm: XYZ ({}, {}, {}) -> {}",
        a430,
        path_cm,
        xyz.x,
        xyz.y,
        xyz.z,
        rgb
    );
    rgb
}

/// Determines the sRGB color of a beer with the given SRM rating, seen through `path_cm`
/// centimeters of it (for example, the width of the glass). Use `DEFAULT_PATH` for the standard
/// BJCP glass. This never fails: ratings and paths outside of any physical range still give a color,
/// saturated to white or black as needed.
///
/// # Example
///
/// ```
/// # use srmcolor::prelude::*;
/// assert_eq!(srm_to_srgb(0.0, DEFAULT_PATH).to_string(), "#ffffff");
/// assert_eq!(srm_to_srgb(10.0, DEFAULT_PATH).to_string(), "#ba5b00");
/// // a narrower glass looks lighter
/// assert!(srm_to_srgb(10.0, 2.0).g > srm_to_srgb(10.0, DEFAULT_PATH).g);
/// ```
pub fn srm_to_srgb(srm: f64, path_cm: f64) -> RGBColor {
    beer_to_srgb(srm / SRM_SCALE, path_cm)
}

/// Determines the sRGB color of a beer with the given EBC rating, seen through `path_cm`
/// centimeters of it. Works exactly like [`srm_to_srgb`], apart from the scale of the rating.
pub fn ebc_to_srgb(ebc: f64, path_cm: f64) -> RGBColor {
    beer_to_srgb(ebc / EBC_SCALE, path_cm)
}

/// Converts an SRM rating to EBC, using the conventional factor of 1.97.
pub fn srm_to_ebc(srm: f64) -> f64 {
    srm * EBC_PER_SRM
}

/// Converts an EBC rating to SRM, using the conventional factor of 1.97.
pub fn ebc_to_srm(ebc: f64) -> f64 {
    ebc / EBC_PER_SRM
}

/// A beer color rating on one of the two common scales.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum BeerColor {
    /// A rating in the Standard Reference Method scale, used mostly in the Americas.
    SRM(f64),
    /// A rating in the European Brewery Convention scale.
    EBC(f64),
}

impl BeerColor {
    /// Gets the absorbance coefficient at 430 nm that the rating stands for.
    pub fn a430(&self) -> f64 {
        match *self {
            BeerColor::SRM(srm) => srm / SRM_SCALE,
            BeerColor::EBC(ebc) => ebc / EBC_SCALE,
        }
    }
    /// Gets the rating in SRM, converting from EBC if needed.
    pub fn to_srm(&self) -> f64 {
        match *self {
            BeerColor::SRM(srm) => srm,
            BeerColor::EBC(ebc) => ebc_to_srm(ebc),
        }
    }
    /// Gets the rating in EBC, converting from SRM if needed.
    pub fn to_ebc(&self) -> f64 {
        match *self {
            BeerColor::SRM(srm) => srm_to_ebc(srm),
            BeerColor::EBC(ebc) => ebc,
        }
    }
    /// Gets the number of the rating, in whichever scale it is in.
    pub fn value(&self) -> f64 {
        match *self {
            BeerColor::SRM(v) | BeerColor::EBC(v) => v,
        }
    }
    /// Determines the sRGB color of this beer through `path_cm` centimeters of it. This is the same
    /// as calling [`srm_to_srgb`] or [`ebc_to_srgb`] on the rating.
    pub fn to_srgb(&self, path_cm: f64) -> RGBColor {
        beer_to_srgb(self.a430(), path_cm)
    }
}
