//! This module generates color scales: the colors of a run of whole-number ratings, all seen under
//! the same conditions, as brewers use to compare a beer against a printed chart. A scale can be
//! iterated directly or written out as a two-column CSV table of rating and hex code.

use std::error::Error;
use std::fmt;
use std::io;

use beer::BeerColor;
use color::RGBColor;
use csv;
use viewing::ViewingConditions;

/// One row of a [`ColorScale`]: a rating and the color it renders as.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleEntry {
    /// The rating of this row.
    pub rating: BeerColor,
    /// The color of the rating under the scale's viewing conditions.
    pub color: RGBColor,
}

/// A run of ratings from `start` to `end` inclusive, in steps of 1, on either the SRM or the EBC
/// scale, rendered under some viewing conditions. If `end` is less than `start`, the scale is
/// empty.
///
/// # Example
///
/// ```
/// # use srmcolor::prelude::*;
/// let chart = ColorScale::srm(1.0, 40.0, ViewingConditions::default());
/// let entries: Vec<ScaleEntry> = chart.entries().collect();
/// assert_eq!(entries.len(), 40);
/// assert_eq!(entries[1].color.to_string(), "#f4d180");
/// ```
#[derive(Debug, Copy, Clone)]
pub struct ColorScale {
    /// The first rating.
    pub start: f64,
    /// The last rating. This is included if it is a whole number of steps from `start`.
    pub end: f64,
    /// The conditions every rating is rendered under.
    pub conditions: ViewingConditions,
    rating: fn(f64) -> BeerColor,
}

impl ColorScale {
    /// Constructs a scale of SRM ratings.
    pub fn srm(start: f64, end: f64, conditions: ViewingConditions) -> ColorScale {
        ColorScale {
            start,
            end,
            conditions,
            rating: BeerColor::SRM,
        }
    }
    /// Constructs a scale of EBC ratings.
    pub fn ebc(start: f64, end: f64, conditions: ViewingConditions) -> ColorScale {
        ColorScale {
            start,
            end,
            conditions,
            rating: BeerColor::EBC,
        }
    }

    /// The number of ratings in the scale.
    pub fn len(&self) -> usize {
        // written so that NaN bounds also give an empty scale
        if self.end >= self.start {
            ((self.end - self.start).floor() as usize).saturating_add(1)
        } else {
            0
        }
    }

    /// Whether the scale has no ratings at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The name of the unit of this scale's ratings, as used in the CSV header.
    pub fn unit(&self) -> &'static str {
        match (self.rating)(0.0) {
            BeerColor::SRM(_) => "SRM",
            BeerColor::EBC(_) => "EBC",
        }
    }

    /// Iterates over every rating in the scale, in increasing order, along with its color.
    pub fn entries<'a>(&'a self) -> impl Iterator<Item = ScaleEntry> + 'a {
        (0..self.len()).map(move |i| {
            let rating = (self.rating)(self.start + i as f64);
            ScaleEntry {
                rating,
                color: self.conditions.render(rating),
            }
        })
    }

    /// Writes the scale as CSV: a header of the unit and `sRGB`, followed by one row per rating
    /// with the rating and its hex code.
    /// # Errors
    /// Returns a `ScaleError` if the underlying writer fails.
    /// # Example
    ///
    /// ```
    /// # use srmcolor::prelude::*;
    /// let mut out = vec![];
    /// ColorScale::srm(1.0, 2.0, ViewingConditions::default()).write_csv(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "SRM,sRGB\n1,#fae8b6\n2,#f4d180\n");
    /// ```
    pub fn write_csv<W: io::Write>(&self, wtr: W) -> Result<(), ScaleError> {
        debug!(
            "writing {} {} ratings from {} at {} cm",
            self.len(),
            self.unit(),
            self.start,
            self.conditions.path_cm
        );
        let mut writer = csv::Writer::from_writer(wtr);
        writer.write_record(&[self.unit(), "sRGB"])?;
        for entry in self.entries() {
            writer.write_record(&[entry.rating.value().to_string(), entry.color.to_hex()])?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// An error that occurred while writing out a [`ColorScale`].
#[derive(Debug)]
pub enum ScaleError {
    /// The CSV encoder failed.
    Csv(csv::Error),
    /// The underlying writer failed.
    Io(io::Error),
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ScaleError::Csv(ref e) => write!(f, "Could not write color scale: {}", e),
            ScaleError::Io(ref e) => write!(f, "Could not write color scale: {}", e),
        }
    }
}

impl Error for ScaleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            ScaleError::Csv(ref e) => Some(e),
            ScaleError::Io(ref e) => Some(e),
        }
    }
}

impl From<csv::Error> for ScaleError {
    fn from(e: csv::Error) -> ScaleError {
        ScaleError::Csv(e)
    }
}

impl From<io::Error> for ScaleError {
    fn from(e: io::Error) -> ScaleError {
        ScaleError::Io(e)
    }
}
