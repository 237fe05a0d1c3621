/// Command-line driver
pub mod cli;
/// Constants, limits and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Log subscriber setup
pub mod logging;
/// Stage progress bars
pub mod progress;
/// Printable result lines
pub mod report;
