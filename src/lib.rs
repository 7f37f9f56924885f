//! srmcolor renders the color of beer. Given a color rating in SRM or EBC and the width of the
//! glass, it finds the sRGB color a viewer would actually see, by modeling the beer as a light
//! absorber instead of looking the rating up in a hand-made chart. The transmission spectrum of the
//! beer is computed with the Beer–Lambert law, integrated against daylight (CIE D65) and the CIE
//! 1931 standard observer, and converted to sRGB.
//!
//! Every conversion is a pure function: there is no error to handle and nothing to set up. Ratings
//! and paths outside of any physical range still give a color, with each channel saturated to
//! [0, 1].
//!
//! ```
//! # use srmcolor::prelude::*;
//! let pilsner = srm_to_srgb(3.0, DEFAULT_PATH);
//! let stout = ebc_to_srgb(80.0, DEFAULT_PATH);
//! assert!(pilsner.g > stout.g);
//! println!("{} {}", rgb_to_hex(&pilsner), stout);
//! ```

#![doc(html_root_url = "https://docs.rs/srmcolor/1.0.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.969256 with -0.969_256
#![allow(clippy::unreadable_literal)]

extern crate csv;
extern crate nalgebra as na;
extern crate num;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate float_cmp;

pub mod beer;
pub mod color;
mod consts;
pub mod prelude;
pub mod scale;
pub mod spectral;
pub mod viewing;

pub use beer::{ebc_to_srgb, srm_to_srgb};
pub use color::rgb_to_hex;
pub use consts::{normalization_factor, DEFAULT_PATH, EBC_PER_SRM, EBC_SCALE, SRM_SCALE};
