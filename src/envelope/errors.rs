//! Custom error types for envelope processing

use std::fmt;
use std::io;

/// The four ordinates of an envelope, in canonical text order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordinate {
    MinX,
    MaxX,
    MinY,
    MaxY,
}

impl Ordinate {
    /// All ordinates in the order they appear in `Env[minX : maxX, minY : maxY]`
    pub const ALL: [Ordinate; 4] = [Ordinate::MinX, Ordinate::MaxX, Ordinate::MinY, Ordinate::MaxY];

    /// Human readable label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Ordinate::MinX => "x-min",
            Ordinate::MaxX => "x-max",
            Ordinate::MinY => "y-min",
            Ordinate::MaxY => "y-max",
        }
    }
}

impl fmt::Display for Ordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Envelope-specific error types
#[derive(Debug)]
pub enum EnvelopeError {
    /// I/O error
    IoError(io::Error),
    /// Text is not wrapped in `Env[` ... `]`
    InvalidWrapper(String),
    /// Wrapped text does not have the `a : b, c : d` layout
    InvalidStructure {
        input: String,
        reason: String,
    },
    /// One of the four numeric fields could not be read
    InvalidOrdinate {
        ordinate: Ordinate,
        value: String,
        reason: String,
    },
    /// Configuration file could not be understood
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvelopeError::IoError(e) => write!(f, "I/O error: {}", e),
            EnvelopeError::InvalidWrapper(input) => write!(f, "Not a valid envelope string: '{}'", input),
            EnvelopeError::InvalidStructure { input, reason } => {
                write!(f, "Malformed envelope string '{}': {}", input, reason)
            },
            EnvelopeError::InvalidOrdinate { ordinate, value, reason } => {
                write!(f, "Could not parse {} value '{}': {}", ordinate, value, reason)
            },
            EnvelopeError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            EnvelopeError::GenericError(msg) => write!(f, "Envelope error: {}", msg),
        }
    }
}

impl std::error::Error for EnvelopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EnvelopeError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for EnvelopeError {
    fn from(error: io::Error) -> Self {
        EnvelopeError::IoError(error)
    }
}

impl From<String> for EnvelopeError {
    fn from(msg: String) -> Self {
        EnvelopeError::GenericError(msg)
    }
}

/// Result type for envelope operations
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;

impl EnvelopeError {
    /// True for the errors produced while reading envelope text
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            EnvelopeError::InvalidWrapper(_)
                | EnvelopeError::InvalidStructure { .. }
                | EnvelopeError::InvalidOrdinate { .. }
        )
    }
}
