use log::info;

use crate::commands::describe_command::describe_envelope;
use crate::commands::parse_envelope_text;
use crate::coordinate::Coordinate;
use crate::envelope::{Envelope, EnvelopeResult};
use crate::utils::config::{GeoKitConfig, DEFAULT_LOG_FILE};
use crate::utils::logger::Logger;

/// Main interface to the GeoKit library
pub struct GeoKit {
    logger: Logger,
}

impl GeoKit {
    /// Create a new GeoKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "geokit.log"
    ///
    /// # Returns
    /// A GeoKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> EnvelopeResult<Self> {
        let log_path = log_file.unwrap_or(DEFAULT_LOG_FILE);
        let logger = Logger::new(log_path)?;
        Ok(GeoKit { logger })
    }

    /// Create a GeoKit instance from loaded configuration
    pub fn from_config(config: &GeoKitConfig) -> EnvelopeResult<Self> {
        let logger = Logger::with_level(&config.log_file, config.log_level)?;
        Ok(GeoKit { logger })
    }

    /// Describe an envelope given in canonical or `minx,miny,maxx,maxy` form
    ///
    /// Produces the same report as the CLI's default command.
    ///
    /// # Returns
    /// Multi-line summary of the envelope, or a format error
    pub fn describe(&self, text: &str) -> EnvelopeResult<String> {
        let envelope = parse_envelope_text(text)?;
        self.logger.log_envelope("Described", &envelope)?;
        Ok(describe_envelope(&envelope, false))
    }

    /// Union of a list of envelopes given as text
    ///
    /// An empty list gives the null envelope. The first text that fails
    /// to parse aborts the whole operation.
    pub fn union_all<S: AsRef<str>>(&self, texts: &[S]) -> EnvelopeResult<Envelope> {
        let mut union = Envelope::empty();
        for text in texts {
            union.expand_to_include_envelope(&parse_envelope_text(text.as_ref())?);
        }

        info!("Union of {} envelopes: {}", texts.len(), union);
        self.logger.log_envelope("Union", &union)?;
        Ok(union)
    }

    /// Bounding box of a sequence of coordinates
    pub fn bounds_of<I>(&self, coordinates: I) -> EnvelopeResult<Envelope>
    where
        I: IntoIterator,
        I::Item: Coordinate,
    {
        let envelope = Envelope::bounds_of(coordinates);
        self.logger.log_envelope("Bounds", &envelope)?;
        Ok(envelope)
    }
}
