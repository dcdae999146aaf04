//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod cli;
pub mod describe_command;
pub mod combine_command;
pub mod transform_command;

pub use command_traits::{Command, CommandFactory};
pub use describe_command::DescribeCommand;
pub use combine_command::{CombineCommand, CombineOperation};
pub use transform_command::TransformCommand;

use clap::ArgMatches;
use crate::envelope::{Envelope, EnvelopeError, EnvelopeResult};
use crate::utils::logger::Logger;

/// Read an envelope given on the command line
///
/// Accepts the canonical `Env[...]` form as well as a plain
/// `minx,miny,maxx,maxy` list.
pub fn parse_envelope_text(text: &str) -> EnvelopeResult<Envelope> {
    let text = text.trim();
    if text.starts_with("Env[") {
        Envelope::parse(text)
    } else {
        Envelope::from_bbox_str(text)
    }
}

/// Read the envelope stored under `id` in the CLI arguments
pub(crate) fn parse_envelope_arg(args: &ArgMatches, id: &str) -> EnvelopeResult<Envelope> {
    let text = args.get_one::<String>(id)
        .ok_or_else(|| EnvelopeError::GenericError(format!("Missing {} argument", id)))?;
    parse_envelope_text(text)
}

/// Options that select the transform command
const TRANSFORM_OPTIONS: [&str; 3] = ["expand-by", "translate", "include"];

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct GeoKitCommandFactory;

impl GeoKitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeoKitCommandFactory
    }
}

impl Default for GeoKitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GeoKitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> EnvelopeResult<Box<dyn Command + 'a>> {
        let combining = !CombineOperation::selected(args).is_empty();
        let transforming = TRANSFORM_OPTIONS.iter().any(|id| args.contains_id(id));

        if combining && transforming {
            return Err(EnvelopeError::GenericError(
                "Combine flags (--union, --intersection, --distance, --compare, --relate) \
                 cannot be mixed with --expand-by, --translate or --include".to_string(),
            ));
        }
        if !combining && args.contains_id("other") {
            return Err(EnvelopeError::GenericError(
                "A second envelope needs a combine flag \
                 (--union, --intersection, --distance, --compare or --relate)".to_string(),
            ));
        }

        if combining {
            Ok(Box::new(CombineCommand::new(args, logger)?))
        } else if transforming {
            Ok(Box::new(TransformCommand::new(args, logger)?))
        } else {
            // Default to describe command
            Ok(Box::new(DescribeCommand::new(args, logger)?))
        }
    }
}
