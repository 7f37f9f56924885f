//! This module brings the most common srmcolor functionality under a single namespace, to prevent
//! excessive imports: the conversion functions, [`RGBColor`] and its parse error, the
//! [`BeerColor`] rating type, [`ViewingConditions`], and color scales. The spectral table is not
//! included.

pub use beer::{ebc_to_srgb, ebc_to_srm, srm_to_ebc, srm_to_srgb, BeerColor};
pub use color::{rgb_to_hex, RGBColor, RGBParseError};
pub use consts::DEFAULT_PATH;
pub use scale::{ColorScale, ScaleEntry, ScaleError};
pub use viewing::ViewingConditions;
