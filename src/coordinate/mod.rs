//! Coordinate handling for geospatial data
//!
//! This module provides the minimal point abstraction consumed by the
//! envelope algebra.

mod point;

// Re-export key types
pub use self::point::{Coordinate, Point};
