//! Envelope structure for describing rectangular regions
//!
//! An envelope is the axis-aligned bounding box of a 2D geometry. It is
//! either null (no spatial extent at all) or bounded by a closed interval
//! on each axis. A single point gives a bounded envelope of zero area,
//! which is not the same thing as the null envelope.

use super::errors::{EnvelopeError, EnvelopeResult, Ordinate};
use crate::coordinate::{Coordinate, Point};

/// Closed extent of a bounded envelope
///
/// `min_x <= max_x` and `min_y <= max_y` unless an ordinate is NaN.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Extent {
    pub(crate) min_x: f64,
    pub(crate) max_x: f64,
    pub(crate) min_y: f64,
    pub(crate) max_y: f64,
}

/// Sort two bounds, keeping their order (and bits) when already ordered
///
/// A NaN on either side makes both bounds NaN.
fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a.is_nan() || b.is_nan() {
        (f64::NAN, f64::NAN)
    } else if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl Extent {
    /// Build an extent from two unordered ranges
    fn normalized(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        let (min_x, max_x) = ordered(x1, x2);
        let (min_y, max_y) = ordered(y1, y2);
        Extent { min_x, max_x, min_y, max_y }
    }

    fn at(x: f64, y: f64) -> Self {
        Extent { min_x: x, max_x: x, min_y: y, max_y: y }
    }
}

/// Axis-aligned bounding box over two Cartesian axes
///
/// The null state is explicit rather than encoded as inverted bounds. The
/// numeric accessors still report the conventional sentinel extents
/// (`0, -1, 0, -1`) for a null envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct Envelope {
    extent: Option<Extent>,
}

impl Envelope {
    /// Sentinel values reported by the accessors of a null envelope,
    /// in `min_x, max_x, min_y, max_y` order
    pub const NULL_EXTENTS: [f64; 4] = [0.0, -1.0, 0.0, -1.0];

    /// Create a null envelope
    pub const fn empty() -> Self {
        Envelope { extent: None }
    }

    /// Create an envelope from two ranges, in any order
    ///
    /// Bounds that are already ordered are kept bit for bit, so `-0.0, 0.0`
    /// stays as given. A NaN bound makes both bounds of its axis NaN.
    ///
    /// # Arguments
    /// * `x1`, `x2` - The two X bounds
    /// * `y1`, `y2` - The two Y bounds
    pub fn new(x1: f64, x2: f64, y1: f64, y2: f64) -> Self {
        Envelope { extent: Some(Extent::normalized(x1, x2, y1, y2)) }
    }

    /// Create the envelope spanned by two points
    pub fn from_points<P: Coordinate, Q: Coordinate>(p1: &P, p2: &Q) -> Self {
        Envelope::new(p1.x(), p2.x(), p1.y(), p2.y())
    }

    /// Create a zero-area envelope at a single point
    pub fn from_point<P: Coordinate>(p: &P) -> Self {
        Envelope { extent: Some(Extent::at(p.x(), p.y())) }
    }

    /// Create an independent copy of another envelope
    pub fn copy_of(other: &Envelope) -> Self {
        *other
    }

    /// Bounding box of a sequence of coordinates
    ///
    /// An empty sequence gives the null envelope.
    pub fn bounds_of<I>(coordinates: I) -> Self
    where
        I: IntoIterator,
        I::Item: Coordinate,
    {
        let mut envelope = Envelope::empty();
        envelope.extend(coordinates);
        envelope
    }

    /// Parse a bounding box from a string (format: "minx,miny,maxx,maxy")
    pub fn from_bbox_str(bbox_str: &str) -> EnvelopeResult<Self> {
        let values = bbox_str.split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|e| EnvelopeError::InvalidStructure {
                input: bbox_str.to_string(),
                reason: format!("bounding box values must be numbers ({})", e),
            })?;

        Self::from_bbox_array(&values)
    }

    /// Create an envelope from a GeoJSON `bbox` member (`[minx, miny, maxx, maxy]`)
    ///
    /// The values are normalized like [`Envelope::new`], so swapped bounds are
    /// accepted.
    pub fn from_bbox_array(values: &[f64]) -> EnvelopeResult<Self> {
        if values.len() != 4 {
            return Err(EnvelopeError::InvalidStructure {
                input: format!("{:?}", values),
                reason: format!("a 2D bounding box needs 4 values, got {}", values.len()),
            });
        }

        let ordinates = [Ordinate::MinX, Ordinate::MinY, Ordinate::MaxX, Ordinate::MaxY];
        for (value, ordinate) in values.iter().zip(ordinates) {
            if !value.is_finite() {
                return Err(EnvelopeError::InvalidOrdinate {
                    ordinate,
                    value: value.to_string(),
                    reason: "value is not finite".to_string(),
                });
            }
        }

        Ok(Envelope::new(values[0], values[2], values[1], values[3]))
    }

    /// GeoJSON `bbox` member for this envelope, `None` if null
    pub fn to_bbox_array(&self) -> Option<[f64; 4]> {
        self.extent.map(|e| [e.min_x, e.min_y, e.max_x, e.max_y])
    }

    /// Make this envelope null
    pub fn reset(&mut self) {
        self.extent = None;
    }

    /// Re-initialize from two ranges, in any order
    pub fn init(&mut self, x1: f64, x2: f64, y1: f64, y2: f64) {
        self.extent = Some(Extent::normalized(x1, x2, y1, y2));
    }

    /// Re-initialize to the envelope spanned by two points
    pub fn init_from_points<P: Coordinate, Q: Coordinate>(&mut self, p1: &P, p2: &Q) {
        self.init(p1.x(), p2.x(), p1.y(), p2.y());
    }

    /// Re-initialize to a zero-area envelope at a point
    pub fn init_from_point<P: Coordinate>(&mut self, p: &P) {
        self.extent = Some(Extent::at(p.x(), p.y()));
    }

    /// Re-initialize as a copy of another envelope
    pub fn init_from_envelope(&mut self, other: &Envelope) {
        self.extent = other.extent;
    }

    /// True if this envelope has no spatial extent
    pub fn is_null(&self) -> bool {
        self.extent.is_none()
    }

    pub(crate) fn extent(&self) -> Option<&Extent> {
        self.extent.as_ref()
    }

    pub fn min_x(&self) -> f64 {
        self.extent.map_or(Self::NULL_EXTENTS[0], |e| e.min_x)
    }

    pub fn max_x(&self) -> f64 {
        self.extent.map_or(Self::NULL_EXTENTS[1], |e| e.max_x)
    }

    pub fn min_y(&self) -> f64 {
        self.extent.map_or(Self::NULL_EXTENTS[2], |e| e.min_y)
    }

    pub fn max_y(&self) -> f64 {
        self.extent.map_or(Self::NULL_EXTENTS[3], |e| e.max_y)
    }

    /// Difference between the X bounds, 0 if null
    pub fn width(&self) -> f64 {
        self.extent.map_or(0.0, |e| e.max_x - e.min_x)
    }

    /// Difference between the Y bounds, 0 if null
    pub fn height(&self) -> f64 {
        self.extent.map_or(0.0, |e| e.max_y - e.min_y)
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// The smaller of width and height
    pub fn min_extent(&self) -> f64 {
        self.width().min(self.height())
    }

    /// The larger of width and height
    pub fn max_extent(&self) -> f64 {
        self.width().max(self.height())
    }

    /// Midpoint of both axes, `None` if null
    pub fn centre(&self) -> Option<Point> {
        self.extent.map(|e| Point::new((e.min_x + e.max_x) / 2.0, (e.min_y + e.max_y) / 2.0))
    }

    /// Grow (or shrink, for a negative delta) by the same amount on both axes
    pub fn expand_by(&mut self, delta: f64) {
        self.expand_by_xy(delta, delta);
    }

    /// Grow each axis symmetrically by its own delta
    ///
    /// A negative delta shrinks the envelope. If that leaves either axis with
    /// inverted bounds the envelope becomes null. Null stays null.
    pub fn expand_by_xy(&mut self, dx: f64, dy: f64) {
        if let Some(e) = self.extent.as_mut() {
            e.min_x -= dx;
            e.max_x += dx;
            e.min_y -= dy;
            e.max_y += dy;

            if e.min_x > e.max_x || e.min_y > e.max_y {
                self.extent = None;
            }
        }
    }

    /// Grow just enough to include the given ordinates
    pub fn expand_to_include_xy(&mut self, x: f64, y: f64) {
        match self.extent.as_mut() {
            None => self.extent = Some(Extent::at(x, y)),
            Some(e) => {
                if x < e.min_x {
                    e.min_x = x;
                }
                if x > e.max_x {
                    e.max_x = x;
                }
                if y < e.min_y {
                    e.min_y = y;
                }
                if y > e.max_y {
                    e.max_y = y;
                }
            },
        }
    }

    /// Grow just enough to include a point
    pub fn expand_to_include<P: Coordinate>(&mut self, p: &P) {
        self.expand_to_include_xy(p.x(), p.y());
    }

    /// Grow to the union with another envelope
    pub fn expand_to_include_envelope(&mut self, other: &Envelope) {
        let Some(o) = other.extent else {
            return;
        };

        match self.extent.as_mut() {
            None => self.extent = Some(o),
            Some(e) => {
                if o.min_x < e.min_x {
                    e.min_x = o.min_x;
                }
                if o.max_x > e.max_x {
                    e.max_x = o.max_x;
                }
                if o.min_y < e.min_y {
                    e.min_y = o.min_y;
                }
                if o.max_y > e.max_y {
                    e.max_y = o.max_y;
                }
            },
        }
    }

    /// Union with another envelope, without mutating either operand
    ///
    /// A null operand is the unit of the union: when `other` is null `self`
    /// is handed back as is, and when `self` is null `other` is handed back.
    /// Only a union of two bounded envelopes builds a new value.
    pub fn expanded_by(self, other: Envelope) -> Envelope {
        match (self.extent, other.extent) {
            (_, None) => self,
            (None, _) => other,
            (Some(a), Some(b)) => Envelope::new(
                a.min_x.min(b.min_x),
                a.max_x.max(b.max_x),
                a.min_y.min(b.min_y),
                a.max_y.max(b.max_y),
            ),
        }
    }

    /// Shift the envelope. Null stays null.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        if let Some(e) = self.extent {
            self.init(e.min_x + dx, e.max_x + dx, e.min_y + dy, e.max_y + dy);
        }
    }
}

impl<P: Coordinate> Extend<P> for Envelope {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for p in iter {
            self.expand_to_include(&p);
        }
    }
}

impl<P: Coordinate> FromIterator<P> for Envelope {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Envelope::bounds_of(iter)
    }
}

impl From<Point> for Envelope {
    fn from(point: Point) -> Self {
        Envelope::from_point(&point)
    }
}
