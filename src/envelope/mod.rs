//! Envelope (bounding box) algebra
//!
//! This module provides the [`Envelope`] value type together with its
//! spatial predicates, ordering and canonical text form.

pub mod errors;
mod envelope;
mod predicates;
mod ordering;
mod format;
#[cfg(test)]
mod tests;

pub use errors::{EnvelopeError, EnvelopeResult, Ordinate};
pub use self::envelope::Envelope;
