//! Canonical text form of an envelope
//!
//! Bounded envelopes are written as `Env[minX : maxX, minY : maxY]` and the
//! null envelope as `Env[Null]`. Numbers use the shortest decimal that reads
//! back to the same `f64`, with `.` as decimal point and no grouping, so
//! `parse(&e.to_string())` gives back `e` for every finite envelope.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::envelope::Envelope;
use super::errors::{EnvelopeError, EnvelopeResult, Ordinate};

const PREFIX: &str = "Env[";
const SUFFIX: char = ']';
const NULL_BODY: &str = "Null";

lazy_static! {
    // Plain decimal with optional sign and exponent; no grouping, no
    // locale-specific separators and no named values like "inf" or "NaN".
    static ref DECIMAL: Regex = Regex::new(r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$")
        .expect("decimal pattern is valid");
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "{}{}{}", PREFIX, NULL_BODY, SUFFIX);
        }
        write!(
            f,
            "{}{} : {}, {} : {}{}",
            PREFIX,
            self.min_x(),
            self.max_x(),
            self.min_y(),
            self.max_y(),
            SUFFIX
        )
    }
}

impl FromStr for Envelope {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Envelope::parse(s)
    }
}

impl Envelope {
    /// Read an envelope from its canonical text form
    ///
    /// # Arguments
    /// * `text` - `Env[minX : maxX, minY : maxY]` or `Env[Null]`
    ///
    /// # Returns
    /// The envelope, normalized like [`Envelope::new`], or a format error
    /// naming the input or the ordinate that could not be read
    pub fn parse(text: &str) -> EnvelopeResult<Envelope> {
        let result = Self::parse_canonical(text);
        if let Err(e) = &result {
            debug!("Rejected envelope text '{}': {}", text, e);
        }
        result
    }

    fn parse_canonical(text: &str) -> EnvelopeResult<Envelope> {
        let body = text.strip_prefix(PREFIX)
            .and_then(|rest| rest.strip_suffix(SUFFIX))
            .ok_or_else(|| EnvelopeError::InvalidWrapper(text.to_string()))?;

        if body == NULL_BODY {
            return Ok(Envelope::empty());
        }

        let ranges: Vec<&str> = body.split(',').collect();
        if ranges.len() != 2 {
            return Err(EnvelopeError::InvalidStructure {
                input: text.to_string(),
                reason: format!("expected 2 comma-separated ranges, found {}", ranges.len()),
            });
        }

        let mut values = [0.0f64; 4];
        for (axis, range) in ranges.iter().enumerate() {
            let bounds: Vec<&str> = range.split(':').collect();
            if bounds.len() != 2 {
                return Err(EnvelopeError::InvalidStructure {
                    input: text.to_string(),
                    reason: format!(
                        "range '{}' must have 2 colon-separated values, found {}",
                        range.trim(),
                        bounds.len()
                    ),
                });
            }

            for (side, bound) in bounds.iter().enumerate() {
                let index = axis * 2 + side;
                values[index] = parse_ordinate(Ordinate::ALL[index], bound)?;
            }
        }

        Ok(Envelope::new(values[0], values[1], values[2], values[3]))
    }
}

/// Parse one numeric field, surrounding whitespace allowed
fn parse_ordinate(ordinate: Ordinate, raw: &str) -> EnvelopeResult<f64> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| EnvelopeError::InvalidOrdinate {
        ordinate,
        value: trimmed.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("value is missing"));
    }
    if !DECIMAL.is_match(trimmed) {
        return Err(invalid("not a decimal number"));
    }

    let value = trimmed.parse::<f64>().map_err(|e| invalid(&e.to_string()))?;
    if !value.is_finite() {
        return Err(invalid("value is not finite"));
    }
    Ok(value)
}
