//! Strip geometry and layer tilings
//!
//! This module contains:
//! - Exact half-unit lengths and the two block sizes
//! - Bases (single-layer tilings) and the arena that owns them

/// Bases and the base arena
pub mod base;
/// Half-unit lengths and block sizes
pub mod length;

pub use base::{Base, BaseId, BaseSet};
pub use length::{Length, Tile};
