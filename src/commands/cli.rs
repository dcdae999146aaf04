//! Command line definition
//!
//! Kept in the library so the argument layout can be exercised by tests.

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the `geokit` argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("geokit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Inspect and combine 2D envelopes (bounding boxes)")
        .arg(
            Arg::new("envelope")
                .help("Envelope as 'Env[minx : maxx, miny : maxy]', 'Env[Null]' or 'minx,miny,maxx,maxy'")
                .required(true)
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("other")
                .help("Second envelope for binary operations")
                .required(false)
                .allow_hyphen_values(true)
                .index(2),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("union")
                .long("union")
                .help("Print the union of both envelopes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("intersection")
                .long("intersection")
                .help("Print the overlap of both envelopes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("distance")
                .long("distance")
                .help("Print the distance between both envelopes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("compare")
                .long("compare")
                .help("Compare both envelopes by area")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("relate")
                .long("relate")
                .help("Print the spatial predicates between both envelopes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("expand-by")
                .long("expand-by")
                .help("Grow (or shrink) the envelope by a distance, 'D' or 'DX,DY'")
                .value_name("DELTA")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("translate")
                .long("translate")
                .help("Shift the envelope by 'DX,DY'")
                .value_name("DX,DY")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("include")
                .long("include")
                .help("Expand the envelope to include the point 'X,Y' (repeatable)")
                .value_name("X,Y")
                .allow_hyphen_values(true)
                .action(ArgAction::Append)
                .required(false),
        )
}
