pub mod coordinate;
pub mod envelope;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::GeoKit;

pub use coordinate::{Coordinate, Point};
pub use envelope::{Envelope, EnvelopeError, EnvelopeResult, Ordinate};
