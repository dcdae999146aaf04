//! Point structure for representing coordinates

use std::fmt;

/// Anything exposing an X and a Y ordinate
///
/// Envelope operations only ever read the two ordinates, so any position
/// type from a surrounding geometry model can be used directly.
pub trait Coordinate {
    /// X ordinate (longitude in geographic systems)
    fn x(&self) -> f64;
    /// Y ordinate (latitude in geographic systems)
    fn y(&self) -> f64;
}

/// A point in a 2D coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate (longitude in geographic systems)
    pub x: f64,
    /// Y coordinate (latitude in geographic systems)
    pub y: f64,
}

impl Point {
    /// Create a new 2D point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Parse a point from a string (format: "x,y")
    pub fn from_string(point_str: &str) -> Result<Self, String> {
        let parts: Vec<&str> = point_str.split(',').collect();
        if parts.len() != 2 {
            return Err(format!("Point must have 2 comma-separated values, got '{}'", point_str));
        }

        let x = parts[0].trim().parse::<f64>()
            .map_err(|_| format!("Invalid x value: '{}'", parts[0].trim()))?;
        let y = parts[1].trim().parse::<f64>()
            .map_err(|_| format!("Invalid y value: '{}'", parts[1].trim()))?;

        Ok(Point::new(x, y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Coordinate for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

/// `(x, y)` tuples
impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

/// GeoJSON positions (`[x, y]`)
impl Coordinate for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}

impl<C: Coordinate + ?Sized> Coordinate for &C {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}
