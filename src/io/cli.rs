//! Command-line interface for counting running-bond walls

use crate::algorithm::executor::{WallCounter, WallQuery};
use crate::io::configuration::{
    DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH_INCHES, QueryLimits, REFERENCE_HEIGHT,
    REFERENCE_WIDTH_INCHES,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::report::WallReport;
use clap::{ArgAction, Parser};
use std::io::Write;

#[derive(Parser)]
#[command(name = "bondwall")]
#[command(
    author,
    version,
    about = "Count the walls that can be built from 3.0 and 4.5 inch blocks without aligned seams"
)]
/// Command-line arguments for the wall counter
pub struct Cli {
    /// Panel width in inches, a multiple of 0.5
    #[arg(value_name = "WIDTH", allow_negative_numbers = true)]
    pub width: f64,

    /// Panel height in layers
    #[arg(value_name = "HEIGHT")]
    pub height: usize,

    /// Skip the 48.0x10 reference panel computed before the query
    #[arg(short, long)]
    pub no_reference: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Largest accepted width in inches, a multiple of 0.5
    #[arg(long, default_value_t = DEFAULT_MAX_WIDTH_INCHES, allow_negative_numbers = true)]
    pub max_width: f64,

    /// Largest accepted height in layers
    #[arg(long, default_value_t = DEFAULT_MAX_HEIGHT)]
    pub max_height: usize,
}

impl Cli {
    /// Check if the reference panel should be computed
    pub const fn include_reference(&self) -> bool {
        !self.no_reference
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Limits configured for this run
    pub const fn limits(&self) -> QueryLimits {
        QueryLimits {
            max_width: self.max_width,
            max_height: self.max_height,
        }
    }

    /// Validate the positional arguments into a query
    ///
    /// # Errors
    ///
    /// Returns an error if the width or height falls outside the limits
    pub fn query(&self) -> Result<WallQuery> {
        let limits = self.limits();
        let width = limits.validate_width(self.width)?;
        let height = limits.validate_height(self.height)?;
        Ok(WallQuery::new(width, height))
    }

    /// Fixed reference panel
    ///
    /// # Errors
    ///
    /// Returns an error only if the reference constants are malformed
    pub fn reference_query() -> Result<WallQuery> {
        WallQuery::from_raw(REFERENCE_WIDTH_INCHES, REFERENCE_HEIGHT)
    }
}

/// Runs the reference panel and the requested query, printing one line each
pub struct QueryRunner {
    cli: Cli,
    counter: WallCounter,
}

impl QueryRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            counter: WallCounter::with_progress(progress),
        }
    }

    /// Validate the query first, then run every panel and write one line each
    ///
    /// # Errors
    ///
    /// Returns an error if validation or a query fails
    pub fn run_to(&mut self, out: &mut impl Write) -> Result<()> {
        let query = self.cli.query()?;

        let mut queries = Vec::with_capacity(2);
        if self.cli.include_reference() {
            queries.push(Cli::reference_query()?);
        }
        queries.push(query);

        for query in queries {
            let count = self.counter.run(query)?;
            writeln!(out, "{}", WallReport::new(query, &count))?;
        }
        Ok(())
    }

    /// Run every panel, printing to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if validation, a query or writing fails
    pub fn run(&mut self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.run_to(&mut handle)
    }
}
