//! Equality, hashing and ordering of envelopes

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::envelope::Envelope;

/// Integer hash of a double, derived from its bit pattern
fn ordinate_hash(value: f64) -> i32 {
    let bits = value.to_bits();
    (bits ^ (bits >> 32)) as i32
}

impl Envelope {
    /// Exact equality of the four extents
    ///
    /// Extents are compared bit for bit with no tolerance. Every null
    /// envelope equals every other null envelope and nothing else.
    pub fn equals(&self, other: &Envelope) -> bool {
        match (self.extent(), other.extent()) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.min_x.to_bits() == b.min_x.to_bits()
                    && a.max_x.to_bits() == b.max_x.to_bits()
                    && a.min_y.to_bits() == b.min_y.to_bits()
                    && a.max_y.to_bits() == b.max_y.to_bits()
            },
            _ => false,
        }
    }

    /// Stable 32-bit hash over `min_x, max_x, min_y, max_y`
    ///
    /// Null envelopes hash their sentinel extents, so all of them share one
    /// value.
    pub fn hash_code(&self) -> i32 {
        [self.min_x(), self.max_x(), self.min_y(), self.max_y()]
            .iter()
            .fold(17i32, |acc, value| acc.wrapping_mul(37).wrapping_add(ordinate_hash(*value)))
    }

    /// Rank envelopes by area
    ///
    /// Null ranks below everything else and two nulls are equal. Two bounded
    /// envelopes of the same area compare `Equal` even when their extents
    /// differ. That disagrees with `==`, so there is no `Ord` impl; use
    /// `sort_by(Envelope::compare_to)`.
    pub fn compare_to(&self, other: &Envelope) -> Ordering {
        match (self.is_null(), other.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => {
                let (area, other_area) = (self.area(), other.area());
                if area > other_area {
                    Ordering::Greater
                } else if area < other_area {
                    Ordering::Less
                } else {
                    Ordering::Equal
                }
            },
        }
    }
}

impl PartialEq for Envelope {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

// Bitwise comparison makes equality reflexive even for NaN extents
impl Eq for Envelope {}

impl Hash for Envelope {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}
