//! Block dimensions, query limits and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::length::Length;
use std::num::NonZeroUsize;

// Block dimensions, in half-inch units
/// Length of the short block (3.0 inches)
pub const SHORT_BLOCK_HALF_UNITS: u32 = 6;
/// Length of the long block (4.5 inches)
pub const LONG_BLOCK_HALF_UNITS: u32 = 9;

// Reference panel computed before every user query
/// Width of the reference panel in inches
pub const REFERENCE_WIDTH_INCHES: f64 = 48.0;
/// Height of the reference panel in layers
pub const REFERENCE_HEIGHT: usize = 10;

// Bounds the base count and the O(N²) combo storage
/// Default maximum panel width in inches
pub const DEFAULT_MAX_WIDTH_INCHES: f64 = 48.0;
/// Default maximum panel height in layers
pub const DEFAULT_MAX_HEIGHT: usize = 10;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Number of base rows resolved between progress bar refreshes
pub const PROGRESS_ROW_BATCH: usize = 64;

/// Default log directive when `RUST_LOG` is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "warn";

/// Upper bounds the driver enforces before running a query
///
/// The lower width bound is always the short block length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryLimits {
    /// Largest accepted width in inches
    pub max_width: f64,
    /// Largest accepted height in layers
    pub max_height: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH_INCHES,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl QueryLimits {
    /// Largest accepted width as an exact length
    ///
    /// # Errors
    ///
    /// Returns an error if `max_width` is not a finite multiple of 0.5 of at
    /// least the short block length
    pub fn width_ceiling(&self) -> Result<Length> {
        let minimum = Length::from_half_units(SHORT_BLOCK_HALF_UNITS);
        match Length::from_inches(self.max_width) {
            Ok(maximum) if maximum >= minimum => Ok(maximum),
            _ => Err(invalid_parameter(
                "max-width",
                &self.max_width,
                &format!("must be a multiple of 0.5 no smaller than {minimum}"),
            )),
        }
    }

    /// Validate a raw width in inches against these limits
    ///
    /// # Errors
    ///
    /// Returns an error if the limit itself is malformed, or the width is not
    /// a positive multiple of 0.5 or lies outside `[3.0, max_width]`
    pub fn validate_width(&self, width: f64) -> Result<Length> {
        let maximum = self.width_ceiling()?;
        let minimum = Length::from_half_units(SHORT_BLOCK_HALF_UNITS);
        let length = Length::from_inches(width)?;

        if length < minimum || length > maximum {
            return Err(invalid_parameter(
                "width",
                &width,
                &format!("must be between {minimum} and {maximum} inclusive"),
            ));
        }

        Ok(length)
    }

    /// Validate a raw height in layers against these limits
    ///
    /// # Errors
    ///
    /// Returns an error if the height is zero or exceeds `max_height`
    pub fn validate_height(&self, height: usize) -> Result<NonZeroUsize> {
        NonZeroUsize::new(height)
            .filter(|h| h.get() <= self.max_height)
            .ok_or_else(|| {
                invalid_parameter(
                    "height",
                    &height,
                    &format!("must be an integer between 1 and {}", self.max_height),
                )
            })
    }
}
