//! Binary envelope operations command
//!
//! Union, intersection, distance, area comparison and the spatial
//! predicates between two envelopes.

use std::cmp::Ordering;

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::parse_envelope_arg;
use crate::envelope::{Envelope, EnvelopeError, EnvelopeResult};
use crate::utils::logger::Logger;

/// Operations supported on a pair of envelopes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineOperation {
    Union,
    Intersection,
    Distance,
    Compare,
    Relate,
}

impl CombineOperation {
    /// All operations with the CLI flag that selects them
    pub const FLAGS: [(&'static str, CombineOperation); 5] = [
        ("union", CombineOperation::Union),
        ("intersection", CombineOperation::Intersection),
        ("distance", CombineOperation::Distance),
        ("compare", CombineOperation::Compare),
        ("relate", CombineOperation::Relate),
    ];

    /// Operations selected on the command line, in flag order
    pub fn selected(args: &ArgMatches) -> Vec<CombineOperation> {
        Self::FLAGS.iter()
            .filter(|(flag, _)| args.get_flag(flag))
            .map(|(_, op)| *op)
            .collect()
    }
}

/// Command for combining two envelopes
pub struct CombineCommand<'a> {
    first: Envelope,
    second: Envelope,
    operations: Vec<CombineOperation>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> CombineCommand<'a> {
    /// Create a new combine command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new CombineCommand instance or an error if the second envelope is missing
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> EnvelopeResult<Self> {
        let first = parse_envelope_arg(args, "envelope")?;
        if args.get_one::<String>("other").is_none() {
            return Err(EnvelopeError::GenericError(
                "A second envelope is required for this operation".to_string(),
            ));
        }
        let second = parse_envelope_arg(args, "other")?;
        let operations = CombineOperation::selected(args);

        Ok(CombineCommand {
            first,
            second,
            operations,
            logger,
        })
    }

    fn apply(&self, operation: CombineOperation) -> String {
        let (a, b) = (&self.first, &self.second);
        match operation {
            CombineOperation::Union => format!("Union: {}", a.expanded_by(*b)),
            CombineOperation::Intersection => format!("Intersection: {}", a.intersection(b)),
            CombineOperation::Distance => format!("Distance: {}", a.distance(b)),
            CombineOperation::Compare => {
                let relation = match a.compare_to(b) {
                    Ordering::Less => "smaller than",
                    Ordering::Equal => "same size as",
                    Ordering::Greater => "larger than",
                };
                format!("Compare: first is {} second (area {} vs {})", relation, a.area(), b.area())
            },
            CombineOperation::Relate => [
                "Relate:".to_string(),
                format!("  equals: {}", a == b),
                format!("  intersects: {}", a.intersects(b)),
                format!("  disjoint: {}", a.disjoint(b)),
                format!("  first covers second: {}", a.covers(b)),
                format!("  second covers first: {}", b.covers(a)),
                format!("  first contains second: {}", a.contains(b)),
                format!("  second contains first: {}", b.contains(a)),
            ].join("\n"),
        }
    }
}

impl<'a> Command for CombineCommand<'a> {
    fn report(&self) -> EnvelopeResult<String> {
        info!("Combining {} with {}", self.first, self.second);
        self.logger.log_envelope("First", &self.first)?;
        self.logger.log_envelope("Second", &self.second)?;

        let mut lines = Vec::with_capacity(self.operations.len());
        for operation in &self.operations {
            debug!("Applying {:?}", operation);
            let line = self.apply(*operation);
            self.logger.log(&line)?;
            lines.push(line);
        }

        Ok(lines.join("\n"))
    }
}
