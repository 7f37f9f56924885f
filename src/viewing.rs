//! This module describes the conditions a beer is viewed under. The only one that matters to the
//! color model is the length of the light path through the beer: the same beer looks darker in a
//! wide glass than in a narrow one. Everything else, the light source and the observer, is fixed to
//! D65 and the CIE 1931 2° observer.

use beer::BeerColor;
use color::RGBColor;
use consts::DEFAULT_PATH;

/// The conditions a beer is viewed under. This can be deserialized from any serde format, and
/// missing fields take their default value.
///
/// # Example
///
/// ```
/// # use srmcolor::prelude::*;
/// let bjcp = ViewingConditions::default();
/// assert_eq!(bjcp.path_cm, DEFAULT_PATH);
/// let tasting_glass = ViewingConditions::new(2.5);
/// let stout = BeerColor::SRM(40.0);
/// assert!(tasting_glass.render(stout).r > bjcp.render(stout).r);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewingConditions {
    /// The length of the light path through the beer, in centimeters.
    pub path_cm: f64,
}

impl Default for ViewingConditions {
    fn default() -> ViewingConditions {
        ViewingConditions {
            path_cm: DEFAULT_PATH,
        }
    }
}

impl ViewingConditions {
    /// Constructs new viewing conditions with the given path length in centimeters.
    pub fn new(path_cm: f64) -> ViewingConditions {
        ViewingConditions { path_cm }
    }
    /// Determines the sRGB color of the given beer under these conditions.
    pub fn render(&self, beer: BeerColor) -> RGBColor {
        beer.to_srgb(self.path_cm)
    }
    /// Determines the sRGB color of a beer with the given SRM rating under these conditions.
    pub fn render_srm(&self, srm: f64) -> RGBColor {
        self.render(BeerColor::SRM(srm))
    }
    /// Determines the sRGB color of a beer with the given EBC rating under these conditions.
    pub fn render_ebc(&self, ebc: f64) -> RGBColor {
        self.render(BeerColor::EBC(ebc))
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use beer::{ebc_to_srgb, srm_to_srgb};
    use csv;

    #[test]
    fn test_default_is_bjcp_glass() {
        let conditions = ViewingConditions::default();
        assert_eq!(conditions.path_cm, 5.0);
        assert_eq!(conditions.render_srm(7.0), srm_to_srgb(7.0, 5.0));
        assert_eq!(conditions.render_ebc(7.0), ebc_to_srgb(7.0, 5.0));
    }

    #[test]
    fn test_render_uses_path() {
        let narrow = ViewingConditions::new(1.0);
        assert_eq!(narrow.render(BeerColor::SRM(9.0)), srm_to_srgb(9.0, 1.0));
        assert_eq!(narrow.render_srm(2.0).to_hex(), "#fdf6df");
    }

    #[test]
    fn test_deserialize() {
        let mut reader = csv::Reader::from_reader("path_cm\n2.5\n".as_bytes());
        let parsed: Vec<ViewingConditions> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(parsed, vec![ViewingConditions::new(2.5)]);
    }
}
