//! This file defines [`RGBColor`], the color every conversion in this crate ends in, along with its
//! hex code serialization and parsing, and the intermediate CIE XYZ tristimulus type the spectral
//! integration produces.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use consts::STANDARD_RGB_TRANSFORM_MAT as SRGB;
use na::Vector3;
use num;
use regex::Regex;

/// A point in the CIE 1931 XYZ color space, relative to D65 and normalized so that a perfect
/// transmitter has `y = 1`. This only ever lives for the duration of a single conversion.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct XYZColor {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// The sRGB transfer function: converts a linear intensity to its gamma-encoded value. Anything that
/// lands outside of [0, 1] is saturated, and NaN, which can only come out of a non-finite input, is
/// treated as black.
pub(crate) fn gamma_encode(t: f64) -> f64 {
    let encoded = if t <= 0.0031308 {
        12.92 * t
    } else {
        1.055 * t.powf(1.0 / 2.4) - 0.055
    };
    if encoded.is_nan() || encoded < 0.0 {
        0.0
    } else if encoded > 1.0 {
        1.0
    } else {
        encoded
    }
}

impl XYZColor {
    /// Converts to sRGB: a linear transform to the sRGB primaries, then gamma encoding and
    /// clamping of every channel.
    pub(crate) fn to_srgb(&self) -> RGBColor {
        let linear = SRGB() * Vector3::new(self.x, self.y, self.z);
        RGBColor {
            r: gamma_encode(linear[0]),
            g: gamma_encode(linear[1]),
            b: gamma_encode(linear[2]),
        }
    }
}

/// A color in the sRGB color space, with every channel a gamma-encoded relative intensity between 0
/// and 1. This is what the beer color conversions return. Its `Display` implementation gives the
/// lowercase hex code, the same as [`rgb_to_hex`].
///
/// # Example
///
/// ```
/// # use srmcolor::prelude::*;
/// let pale = srm_to_srgb(2.0, DEFAULT_PATH);
/// assert_eq!(pale.to_string(), "#f4d180");
/// assert!(pale.r > pale.g && pale.g > pale.b);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel, between 0 and 1.
    pub r: f64,
    /// The green channel, between 0 and 1.
    pub g: f64,
    /// The blue channel, between 0 and 1.
    pub b: f64,
}

/// Quantizes a channel to 8 bits, rounding half away from zero and saturating.
fn quantize(channel: f64) -> u8 {
    num::clamp((channel * 255.0).round(), 0.0, 255.0) as u8
}

impl RGBColor {
    /// Gets the 8-bit `(r, g, b)` triple of this color, each channel scaled by 255 and rounded to the
    /// nearest integer.
    pub fn int_rgb_tup(&self) -> (u8, u8, u8) {
        (quantize(self.r), quantize(self.g), quantize(self.b))
    }

    /// Gets the hex code of this color, as `#rrggbb` in lowercase.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.int_rgb_tup();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Parses a hex code, either `#rrggbb` or the shorthand `#rgb`, into a color. Letters may be
    /// upper or lower case, but the leading `#` is required.
    /// # Errors
    /// Returns `RGBParseError::InvalidHexSyntax` if the string is not a hex code of either form.
    /// # Example
    ///
    /// ```
    /// # use srmcolor::prelude::*;
    /// let amber = RGBColor::from_hex_code("#BA5B00").unwrap();
    /// assert_eq!(amber.int_rgb_tup(), (186, 91, 0));
    /// assert!(RGBColor::from_hex_code("ba5b00").is_err());
    /// ```
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, RGBParseError> {
        lazy_static! {
            static ref HEX_CODE: Regex = Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$")
                .expect("hex code pattern is valid");
        }
        let digits = match HEX_CODE.captures(hex).and_then(|caps| caps.get(1)) {
            Some(m) => m.as_str(),
            None => return Err(RGBParseError::InvalidHexSyntax),
        };
        // expand the shorthand form so both forms take the same path
        let full: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| vec![c, c]).collect()
        } else {
            digits.to_string()
        };
        let channel = |i: usize| -> Result<f64, RGBParseError> {
            u8::from_str_radix(&full[i..i + 2], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| RGBParseError::InvalidHexSyntax)
        };
        Ok(RGBColor {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RGBColor {
    type Err = RGBParseError;

    fn from_str(s: &str) -> Result<RGBColor, RGBParseError> {
        RGBColor::from_hex_code(s)
    }
}

/// Serializes a color as its hex code `#rrggbb`: each channel is scaled by 255, rounded to the
/// nearest integer (halves away from zero), clamped to [0, 255], and written as two lowercase hex
/// digits.
///
/// # Example
///
/// ```
/// # use srmcolor::prelude::*;
/// assert_eq!(rgb_to_hex(&RGBColor { r: 0.5, g: 0.5, b: 0.5 }), "#808080");
/// ```
pub fn rgb_to_hex(rgb: &RGBColor) -> String {
    rgb.to_hex()
}

/// An error that can occur when parsing a hex code into an [`RGBColor`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RGBParseError {
    /// The string was not of the form `#rgb` or `#rrggbb` with hexadecimal digits.
    InvalidHexSyntax,
}

impl fmt::Display for RGBParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RGBParseError::InvalidHexSyntax => write!(f, "Invalid hex code syntax"),
        }
    }
}

impl Error for RGBParseError {}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use consts::TEST_PRECISION;

    #[test]
    fn test_hex_endpoints() {
        assert_eq!(rgb_to_hex(&RGBColor { r: 0.0, g: 0.0, b: 0.0 }), "#000000");
        assert_eq!(rgb_to_hex(&RGBColor { r: 1.0, g: 1.0, b: 1.0 }), "#ffffff");
    }

    #[test]
    fn test_hex_rounds_half_up() {
        // 0.5 * 255 = 127.5, which rounds to 128
        assert_eq!(rgb_to_hex(&RGBColor { r: 0.5, g: 0.5, b: 0.5 }), "#808080");
        let just_below = RGBColor { r: 0.499, g: 0.0, b: 0.0 };
        assert_eq!(just_below.to_hex(), "#7f0000");
    }

    #[test]
    fn test_hex_saturates() {
        let wild = RGBColor { r: -0.3, g: 1.7, b: 0.0627 };
        assert_eq!(wild.to_hex(), "#00ff10");
        assert_eq!(wild.int_rgb_tup(), (0, 255, 16));
    }

    #[test]
    fn test_display_matches_hex() {
        let c = RGBColor { r: 0.7309, g: 0.3566, b: 0.0 };
        assert_eq!(c.to_string(), rgb_to_hex(&c));
        assert_eq!(format!("{}", c), "#ba5b00");
    }

    #[test]
    fn test_hex_parsing() {
        let c = RGBColor::from_hex_code("#f4d180").unwrap();
        assert_eq!(c.int_rgb_tup(), (244, 209, 128));
        assert_eq!(c.to_hex(), "#f4d180");
        let short: RGBColor = "#FA0".parse().unwrap();
        assert_eq!(short.to_hex(), "#ffaa00");
        assert!((short.g - 170.0 / 255.0).abs() <= TEST_PRECISION);
    }

    #[test]
    fn test_hex_parsing_errors() {
        for bad in &["", "#", "f4d180", "#f4d18", "#f4d1800", "#g4d180", "# f4d180", "#f4d180 "] {
            assert_eq!(
                RGBColor::from_hex_code(bad),
                Err(RGBParseError::InvalidHexSyntax),
                "{} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_gamma_encode() {
        assert_eq!(gamma_encode(0.0), 0.0);
        assert!((gamma_encode(0.0031308) - 12.92 * 0.0031308).abs() <= TEST_PRECISION);
        assert!((gamma_encode(1.0) - 1.0).abs() <= TEST_PRECISION);
        assert!((gamma_encode(0.214) - 0.5).abs() <= 1e-3);
        assert_eq!(gamma_encode(-0.5), 0.0);
        assert_eq!(gamma_encode(4.0), 1.0);
        assert_eq!(gamma_encode(::std::f64::NAN), 0.0);
    }

    #[test]
    fn test_xyz_to_srgb() {
        let black = XYZColor { x: 0.0, y: 0.0, z: 0.0 }.to_srgb();
        assert_eq!(black.to_hex(), "#000000");
        let white = XYZColor { x: 0.950429664439426, y: 1.0, z: 1.0888005660887536 }.to_srgb();
        assert_eq!(white.to_hex(), "#ffffff");
    }
}
