//! Spatial predicates between envelopes and points
//!
//! All bounds are closed. A null envelope never intersects, covers or
//! contains anything.

use super::envelope::Envelope;
use crate::coordinate::Coordinate;

impl Envelope {
    /// True if the two envelopes share at least one point
    pub fn intersects(&self, other: &Envelope) -> bool {
        match (self.extent(), other.extent()) {
            (Some(e), Some(o)) => {
                !(o.min_x > e.max_x || o.max_x < e.min_x || o.min_y > e.max_y || o.max_y < e.min_y)
            },
            _ => false,
        }
    }

    /// True if the point lies inside or on the boundary
    pub fn intersects_point<P: Coordinate>(&self, p: &P) -> bool {
        self.intersects_xy(p.x(), p.y())
    }

    /// True if `(x, y)` lies inside or on the boundary
    pub fn intersects_xy(&self, x: f64, y: f64) -> bool {
        match self.extent() {
            Some(e) => !(x > e.max_x || x < e.min_x || y > e.max_y || y < e.min_y),
            None => false,
        }
    }

    /// True if the envelopes have no point in common, or either is null
    pub fn disjoint(&self, other: &Envelope) -> bool {
        !self.intersects(other)
    }

    /// Test whether `q` lies in the box spanned by `p1` and `p2`
    ///
    /// Equivalent to `Envelope::from_points(p1, p2).intersects_point(q)`
    /// without building the envelope.
    pub fn point_in_span<P1, P2, Q>(p1: &P1, p2: &P2, q: &Q) -> bool
    where
        P1: Coordinate,
        P2: Coordinate,
        Q: Coordinate,
    {
        let (qx, qy) = (q.x(), q.y());
        qx >= p1.x().min(p2.x())
            && qx <= p1.x().max(p2.x())
            && qy >= p1.y().min(p2.y())
            && qy <= p1.y().max(p2.y())
    }

    /// Test whether the box spanned by `q1`, `q2` overlaps the box spanned
    /// by `p1`, `p2`
    ///
    /// Same answer as building both envelopes and calling
    /// [`Envelope::intersects`], for use when pruning segments.
    pub fn spans_intersect<P1, P2, Q1, Q2>(p1: &P1, p2: &P2, q1: &Q1, q2: &Q2) -> bool
    where
        P1: Coordinate,
        P2: Coordinate,
        Q1: Coordinate,
        Q2: Coordinate,
    {
        let min_q = q1.x().min(q2.x());
        let max_q = q1.x().max(q2.x());
        let min_p = p1.x().min(p2.x());
        let max_p = p1.x().max(p2.x());

        if min_p > max_q || max_p < min_q {
            return false;
        }

        let min_q = q1.y().min(q2.y());
        let max_q = q1.y().max(q2.y());
        let min_p = p1.y().min(p2.y());
        let max_p = p1.y().max(p2.y());

        !(min_p > max_q || max_p < min_q)
    }

    /// True if `(x, y)` lies inside or on the boundary
    pub fn covers_xy(&self, x: f64, y: f64) -> bool {
        match self.extent() {
            Some(e) => x >= e.min_x && x <= e.max_x && y >= e.min_y && y <= e.max_y,
            None => false,
        }
    }

    pub fn covers_point<P: Coordinate>(&self, p: &P) -> bool {
        self.covers_xy(p.x(), p.y())
    }

    /// True if `other` lies wholly within this envelope, boundary included
    pub fn covers(&self, other: &Envelope) -> bool {
        match (self.extent(), other.extent()) {
            (Some(e), Some(o)) => {
                o.min_x >= e.min_x && o.max_x <= e.max_x && o.min_y >= e.min_y && o.max_y <= e.max_y
            },
            _ => false,
        }
    }

    /// Same as [`Envelope::covers_xy`]; the boundary counts as inside
    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        self.covers_xy(x, y)
    }

    /// Same as [`Envelope::covers_point`]; the boundary counts as inside
    pub fn contains_point<P: Coordinate>(&self, p: &P) -> bool {
        self.covers_point(p)
    }

    /// Same as [`Envelope::covers`]; the boundary counts as inside
    pub fn contains(&self, other: &Envelope) -> bool {
        self.covers(other)
    }

    /// Overlap of two envelopes, null if they do not intersect
    pub fn intersection(&self, other: &Envelope) -> Envelope {
        match (self.extent(), other.extent()) {
            (Some(e), Some(o)) if self.intersects(other) => Envelope::new(
                e.min_x.max(o.min_x),
                e.max_x.min(o.max_x),
                e.min_y.max(o.min_y),
                e.max_y.min(o.max_y),
            ),
            _ => Envelope::empty(),
        }
    }

    /// Shortest Euclidean distance between the two envelopes
    ///
    /// 0 when they intersect. Infinite when either is null.
    pub fn distance(&self, other: &Envelope) -> f64 {
        if self.intersects(other) {
            return 0.0;
        }

        let (Some(e), Some(o)) = (self.extent(), other.extent()) else {
            return f64::INFINITY;
        };

        let dx = if e.max_x < o.min_x {
            o.min_x - e.max_x
        } else if e.min_x > o.max_x {
            e.min_x - o.max_x
        } else {
            0.0
        };

        let dy = if e.max_y < o.min_y {
            o.min_y - e.max_y
        } else if e.min_y > o.max_y {
            e.min_y - o.max_y
        } else {
            0.0
        };

        // Overlapping on one axis means the gap is edge to edge
        if dx == 0.0 {
            return dy;
        }
        if dy == 0.0 {
            return dx;
        }
        (dx * dx + dy * dy).sqrt()
    }
}
