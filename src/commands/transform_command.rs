//! Envelope mutation command
//!
//! Applies expansion, translation and point inclusion to an envelope,
//! in that order, and prints the result.

use clap::ArgMatches;
use log::debug;

use crate::commands::command_traits::Command;
use crate::commands::parse_envelope_arg;
use crate::coordinate::Point;
use crate::envelope::{Envelope, EnvelopeError, EnvelopeResult};
use crate::utils::logger::Logger;

/// Command for transforming a single envelope
pub struct TransformCommand<'a> {
    envelope: Envelope,
    /// Per-axis expansion distance
    expand_by: Option<(f64, f64)>,
    /// Per-axis shift
    translate: Option<(f64, f64)>,
    /// Points the result must include
    include: Vec<Point>,
    /// Logger for recording operations
    logger: &'a Logger,
}

/// Parse a pair of numbers written as 'a,b'
fn parse_pair(name: &str, value: &str) -> EnvelopeResult<(f64, f64)> {
    Point::from_string(value)
        .map(|p| (p.x, p.y))
        .map_err(|e| EnvelopeError::GenericError(format!("Invalid --{} value: {}", name, e)))
}

/// Parse an expansion distance, 'D' for both axes or 'DX,DY'
fn parse_delta(value: &str) -> EnvelopeResult<(f64, f64)> {
    if value.contains(',') {
        return parse_pair("expand-by", value);
    }
    value.trim().parse::<f64>()
        .map(|d| (d, d))
        .map_err(|_| EnvelopeError::GenericError(format!("Invalid --expand-by value: {}", value)))
}

impl<'a> TransformCommand<'a> {
    /// Create a new transform command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new TransformCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> EnvelopeResult<Self> {
        let envelope = parse_envelope_arg(args, "envelope")?;

        let expand_by = args.get_one::<String>("expand-by")
            .map(|v| parse_delta(v))
            .transpose()?;

        let translate = args.get_one::<String>("translate")
            .map(|v| parse_pair("translate", v))
            .transpose()?;

        let include = args.get_many::<String>("include")
            .map(|values| {
                values.map(|v| {
                    Point::from_string(v)
                        .map_err(|e| EnvelopeError::GenericError(format!("Invalid --include value: {}", e)))
                })
                .collect::<EnvelopeResult<Vec<Point>>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(TransformCommand {
            envelope,
            expand_by,
            translate,
            include,
            logger,
        })
    }

    /// Apply the requested mutations to a copy of the input
    pub fn transformed(&self) -> Envelope {
        let mut result = self.envelope;

        if let Some((dx, dy)) = self.expand_by {
            result.expand_by_xy(dx, dy);
            debug!("Expanded by ({}, {}): {}", dx, dy, result);
        }
        if let Some((dx, dy)) = self.translate {
            result.translate(dx, dy);
            debug!("Translated by ({}, {}): {}", dx, dy, result);
        }
        result.extend(self.include.iter());

        result
    }
}

impl<'a> Command for TransformCommand<'a> {
    fn report(&self) -> EnvelopeResult<String> {
        let result = self.transformed();
        self.logger.log_envelope("Input", &self.envelope)?;
        self.logger.log_envelope("Result", &result)?;
        Ok(result.to_string())
    }
}
