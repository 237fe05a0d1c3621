//! Result lines printed by the driver

use crate::algorithm::executor::{WallCount, WallQuery};
use std::fmt;

/// One printable result line for a completed query
pub struct WallReport<'a> {
    query: WallQuery,
    count: &'a WallCount,
}

impl<'a> WallReport<'a> {
    /// Pair a query with its outcome
    pub const fn new(query: WallQuery, count: &'a WallCount) -> Self {
        Self { query, count }
    }
}

impl fmt::Display for WallReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} walls built for a {} inch panel",
            self.count.total(),
            self.query
        )?;
        if self.count.is_unsatisfiable() {
            write!(f, ", try a different width")?;
        }
        Ok(())
    }
}
