//! Stop coordinates.

use crate::error::{Result, RouteError};

/// A stop as a planar `(x, y)` coordinate pair, typically `(lat, lng)`.
///
/// Locations are identified only by their index in the input sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    x: f64,
    y: f64,
}

impl Location {
    /// Creates a location from its two coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Parses a raw coordinate slice.
    ///
    /// Fails with [`RouteError::InvalidInput`] unless the slice holds exactly
    /// two finite numbers.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_evroute::distance::Location;
    ///
    /// let loc = Location::from_slice(&[12.97, 77.59]).unwrap();
    /// assert_eq!(loc.x(), 12.97);
    /// assert!(Location::from_slice(&[1.0, 2.0, 3.0]).is_err());
    /// ```
    pub fn from_slice(coords: &[f64]) -> Result<Self> {
        match *coords {
            [x, y] => {
                let loc = Self::new(x, y);
                loc.validate()?;
                Ok(loc)
            }
            _ => Err(RouteError::InvalidInput(format!(
                "coordinate must have exactly 2 components, got {}",
                coords.len()
            ))),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Rejects NaN and infinite coordinates.
    pub fn validate(&self) -> Result<()> {
        if self.x.is_finite() && self.y.is_finite() {
            Ok(())
        } else {
            Err(RouteError::InvalidInput(format!(
                "coordinate ({}, {}) is not finite",
                self.x, self.y
            )))
        }
    }
}

impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Location {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}
