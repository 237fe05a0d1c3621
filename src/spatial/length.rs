//! Exact lengths along the strip
//!
//! Every length in a wall is a multiple of half an inch, so lengths are stored
//! as integer half-inch counts. Seam positions then compare exactly, with no
//! floating point tolerance.

use crate::io::configuration::{LONG_BLOCK_HALF_UNITS, SHORT_BLOCK_HALF_UNITS};
use crate::io::error::{Result, invalid_parameter};
use std::fmt;
use std::ops::{Add, Sub};

/// A length measured in half-inch units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length(u32);

impl Length {
    /// The zero length (left edge of the strip)
    pub const ZERO: Self = Self(0);

    /// Create a length from a raw half-unit count
    pub const fn from_half_units(half_units: u32) -> Self {
        Self(half_units)
    }

    /// Convert a length in inches to an exact half-unit length
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not finite, not positive, too large
    /// or not a multiple of 0.5
    pub fn from_inches(inches: f64) -> Result<Self> {
        if !inches.is_finite() || inches <= 0.0 {
            return Err(invalid_parameter(
                "width",
                &inches,
                &"must be a positive number",
            ));
        }

        let doubled = inches * 2.0;
        if doubled.fract() > 0.0 {
            return Err(invalid_parameter(
                "width",
                &inches,
                &"must be a multiple of 0.5",
            ));
        }
        if doubled > f64::from(u32::MAX) {
            return Err(invalid_parameter("width", &inches, &"is too large"));
        }

        Ok(Self(doubled as u32))
    }

    /// Raw half-unit count
    pub const fn half_units(self) -> u32 {
        self.0
    }

    /// Value in inches
    pub fn inches(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// Subtraction that returns `None` instead of underflowing
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl Add for Length {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.inches())
    }
}

/// The two block lengths a layer may be built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// 3.0 inch block
    Short,
    /// 4.5 inch block
    Long,
}

impl Tile {
    /// Both tiles, in the order the enumerator tries them
    pub const ALL: [Self; 2] = [Self::Short, Self::Long];

    /// Length of this tile
    pub const fn length(self) -> Length {
        match self {
            Self::Short => Length(SHORT_BLOCK_HALF_UNITS),
            Self::Long => Length(LONG_BLOCK_HALF_UNITS),
        }
    }

    /// Tile whose length matches exactly, if any
    pub fn from_length(length: Length) -> Option<Self> {
        Self::ALL.into_iter().find(|tile| tile.length() == length)
    }

    /// The shortest tile length
    pub const fn shortest() -> Length {
        Self::Short.length()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.length())
    }
}
