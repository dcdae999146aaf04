//! Envelope description command
//!
//! This module implements the default command, which prints the
//! canonical form of an envelope together with its derived measures.

use clap::ArgMatches;
use log::debug;

use crate::commands::command_traits::Command;
use crate::commands::parse_envelope_arg;
use crate::envelope::{Envelope, EnvelopeResult};
use crate::utils::logger::Logger;

/// Command for describing a single envelope
pub struct DescribeCommand<'a> {
    /// Envelope to describe
    envelope: Envelope,
    /// Whether to include the derived measures in the output
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DescribeCommand<'a> {
    /// Create a new describe command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new DescribeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> EnvelopeResult<Self> {
        let envelope = parse_envelope_arg(args, "envelope")?;
        let verbose = args.get_flag("verbose");

        Ok(DescribeCommand {
            envelope,
            verbose,
            logger,
        })
    }
}

/// Multi-line summary of an envelope, shared by the CLI and [`crate::GeoKit`]
///
/// # Arguments
/// * `envelope` - The envelope to describe
/// * `verbose` - Whether to add the min/max extent lines
pub fn describe_envelope(envelope: &Envelope, verbose: bool) -> String {
    let mut lines = vec![
        format!("Envelope: {}", envelope),
        format!("  Null: {}", envelope.is_null()),
    ];

    if envelope.is_null() {
        return lines.join("\n");
    }

    lines.push(format!("  X range: {} .. {}", envelope.min_x(), envelope.max_x()));
    lines.push(format!("  Y range: {} .. {}", envelope.min_y(), envelope.max_y()));
    lines.push(format!("  Width: {}", envelope.width()));
    lines.push(format!("  Height: {}", envelope.height()));
    lines.push(format!("  Area: {}", envelope.area()));

    if verbose {
        lines.push(format!("  Min extent: {}", envelope.min_extent()));
        lines.push(format!("  Max extent: {}", envelope.max_extent()));
    }

    if let Some(centre) = envelope.centre() {
        lines.push(format!("  Centre: {}", centre));
    }
    if let Some(bbox) = envelope.to_bbox_array() {
        lines.push(format!("  GeoJSON bbox: [{}, {}, {}, {}]", bbox[0], bbox[1], bbox[2], bbox[3]));
    }

    lines.join("\n")
}

impl<'a> Command for DescribeCommand<'a> {
    fn report(&self) -> EnvelopeResult<String> {
        debug!("Describing {}", self.envelope);
        self.logger.log_envelope("Described", &self.envelope)?;

        Ok(describe_envelope(&self.envelope, self.verbose))
    }
}
