//! Query pipeline: enumeration, compatibility resolution and height recurrence
//!
//! A [`WallCounter`] owns nothing between queries. Each call builds the base
//! set, runs the later stages only when they are needed and drops every base
//! once the total is known.

use crate::algorithm::compatibility::resolve_compatibility_with;
use crate::algorithm::enumeration::enumerate_bases;
use crate::algorithm::recurrence::count_walls_of_height_with;
use crate::io::configuration::PROGRESS_ROW_BATCH;
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::spatial::base::BaseSet;
use crate::spatial::length::Length;
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;
use std::num::NonZeroUsize;
use tracing::info;

/// One (width, height) panel to count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallQuery {
    /// Strip width
    pub width: Length,
    /// Number of layers
    pub height: NonZeroUsize,
}

impl WallQuery {
    /// Create a query from an exact width and a non-zero height
    pub const fn new(width: Length, height: NonZeroUsize) -> Self {
        Self { width, height }
    }

    /// Create a query from raw driver input, without range limits
    ///
    /// # Errors
    ///
    /// Returns an error if the width is not a positive multiple of 0.5 or the
    /// height is zero
    pub fn from_raw(width_inches: f64, height: usize) -> Result<Self> {
        let width = Length::from_inches(width_inches)?;
        let height = NonZeroUsize::new(height)
            .ok_or_else(|| invalid_parameter("height", &height, &"must be at least 1"))?;
        Ok(Self::new(width, height))
    }
}

impl fmt::Display for WallQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Outcome of a wall query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WallCount {
    /// The width has at least one tiling
    Counted {
        /// Number of complete walls
        total: BigUint,
        /// Number of distinct single-layer tilings
        bases: usize,
    },
    /// No combination of blocks fills the width, so there are no walls
    Unsatisfiable {
        /// The untileable width
        width: Length,
    },
}

impl WallCount {
    /// Number of walls, zero when the width is untileable
    pub fn total(&self) -> BigUint {
        match self {
            Self::Counted { total, .. } => total.clone(),
            Self::Unsatisfiable { .. } => BigUint::zero(),
        }
    }

    /// Number of bases found for the width
    pub const fn bases(&self) -> usize {
        match self {
            Self::Counted { bases, .. } => *bases,
            Self::Unsatisfiable { .. } => 0,
        }
    }

    /// True when the width admits no tiling
    pub const fn is_unsatisfiable(&self) -> bool {
        matches!(self, Self::Unsatisfiable { .. })
    }
}

/// Runs wall queries, optionally reporting stage progress
#[derive(Default)]
pub struct WallCounter {
    progress: Option<ProgressManager>,
}

impl WallCounter {
    /// Create a counter without progress output
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter that reports progress through the given manager
    pub const fn with_progress(progress: ProgressManager) -> Self {
        Self {
            progress: Some(progress),
        }
    }

    /// Count every wall for the query
    ///
    /// # Errors
    ///
    /// Returns an error if the resolved compatibility relation is not
    /// symmetric, which would make the recurrence meaningless
    pub fn run(&mut self, query: WallQuery) -> Result<WallCount> {
        let mut bases = enumerate_bases(query.width);
        if bases.is_empty() {
            info!(query = %query, "width admits no tiling");
            return Ok(WallCount::Unsatisfiable { width: query.width });
        }

        let base_count = bases.len();
        let height = query.height.get();
        if height == 1 {
            info!(query = %query, bases = base_count, "single layer panel");
            return Ok(WallCount::Counted {
                total: BigUint::from(base_count),
                bases: base_count,
            });
        }

        self.resolve(&mut bases)?;
        let total = self.recur(&bases, height);

        info!(
            query = %query,
            bases = base_count,
            compatible_pairs = bases.compatible_pairs(),
            total = %total,
            "counted walls"
        );
        Ok(WallCount::Counted {
            total,
            bases: base_count,
        })
    }

    fn resolve(&mut self, bases: &mut BaseSet) -> Result<()> {
        if let Some(ref mut pm) = self.progress {
            pm.start_stage("pairs", bases.len());
        }

        let progress = self.progress.as_ref();
        resolve_compatibility_with(bases, |row| {
            if row % PROGRESS_ROW_BATCH == 0
                && let Some(pm) = progress
            {
                pm.set_position(row);
            }
        });

        if let Some(ref mut pm) = self.progress {
            pm.finish_stage();
        }

        if !bases.is_symmetric() {
            return Err(computation_error(
                "compatibility resolution",
                &"combo lists are not symmetric",
            ));
        }
        Ok(())
    }

    fn recur(&mut self, bases: &BaseSet, height: usize) -> BigUint {
        if let Some(ref mut pm) = self.progress {
            pm.start_stage("layers", height);
            pm.set_position(1);
        }

        let progress = self.progress.as_ref();
        let total = count_walls_of_height_with(bases, height, |layer| {
            if let Some(pm) = progress {
                pm.set_position(layer);
            }
        });

        if let Some(ref mut pm) = self.progress {
            pm.finish_stage();
        }
        total
    }
}

/// Count the walls of a panel from raw driver input
///
/// # Errors
///
/// Returns an error if the width is not a positive multiple of 0.5 or the
/// height is zero
pub fn count_walls(width_inches: f64, height: usize) -> Result<WallCount> {
    WallCounter::new().run(WallQuery::from_raw(width_inches, height)?)
}
