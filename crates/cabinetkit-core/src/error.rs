//! Error handling for CabinetKit
//!
//! Provides the error taxonomy shared by every layer of the layout pipeline:
//! - Configuration errors (invalid or missing numeric parameters)
//! - Layout errors (rows that cannot be fitted, subsystems that never appeared)
//! - Generation warnings (non-fatal events recorded during a run)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::subsystem::Subsystem;
use thiserror::Error;

/// Configuration error type
///
/// Configuration problems are never fatal to a generation run. Each one is
/// resolved with a documented default and reported back to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A value could not be parsed or was not a usable length
    #[error("Invalid value for '{field}': {value:?}, using default {fallback}")]
    InvalidValue {
        /// Dotted path of the offending field.
        field: String,
        /// The raw value as supplied.
        value: String,
        /// The default that replaced it.
        fallback: String,
    },

    /// A value was outside its valid range and has been clamped
    #[error("Parameter '{field}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        /// Dotted path of the offending field.
        field: String,
        /// The supplied value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// The configuration file format is not supported
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Layout error type
///
/// Raised by the run allocator and the verification supervisor. A layout
/// error aborts one subsystem only; the remaining rows are still generated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Critical modules do not fit even after every explicit box was evicted
    #[error(
        "Insufficient space on {subsystem} row: {required:.1} mm required, {available:.1} mm available"
    )]
    InsufficientSpace {
        /// The row that failed.
        subsystem: Subsystem,
        /// Width of the modules that could not be removed.
        required: f64,
        /// Length of the wall run.
        available: f64,
    },

    /// An expected subsystem produced no cabinets
    #[error("{subsystem} subsystem produced no cabinets after {attempts} attempt(s)")]
    MissingSubsystem {
        /// The subsystem that is absent from the output.
        subsystem: Subsystem,
        /// How many generation attempts were made.
        attempts: u32,
        /// Error raised by the last attempt, if it raised one.
        #[source]
        cause: Option<Box<LayoutError>>,
    },

    /// A cabinet configuration cannot be built
    #[error("Invalid cabinet: {0}")]
    InvalidCabinet(String),
}

impl LayoutError {
    /// Subsystem the error is about, when it names one
    pub fn subsystem(&self) -> Option<Subsystem> {
        match self {
            LayoutError::InsufficientSpace { subsystem, .. }
            | LayoutError::MissingSubsystem { subsystem, .. } => Some(*subsystem),
            LayoutError::InvalidCabinet(_) => None,
        }
    }
}

/// Non-fatal events recorded while generating a project
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationWarning {
    /// A single explicit module was wider than the space left on its row
    #[error("Skipped {role} module on {subsystem} row: {width:.1} mm requested, {remaining:.1} mm remaining")]
    SkippedModule {
        /// Row the module was requested on.
        subsystem: Subsystem,
        /// Kind of module (box, rack, drawer unit, ...).
        role: String,
        /// Requested width.
        width: f64,
        /// Space left when the module was considered.
        remaining: f64,
    },

    /// An explicit box was removed by the over-capacity policy
    #[error("Evicted {width:.1} mm box from {subsystem} row to make the run fit")]
    ModuleEvicted {
        /// Row the box was requested on.
        subsystem: Subsystem,
        /// Width of the evicted box.
        width: f64,
    },

    /// Space left uncovered at the end of a row
    #[error("{subsystem} row ends with an uncovered gap of {gap:.1} mm")]
    FinalGap {
        /// Row with the gap.
        subsystem: Subsystem,
        /// Width of the gap.
        gap: f64,
    },

    /// A configuration value was replaced by its default
    #[error(transparent)]
    ConfigDefaulted(#[from] ConfigError),
}

/// Main error type for CabinetKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }

    /// Check if a row ran out of space
    pub fn is_insufficient_space(&self) -> bool {
        matches!(self, Error::Layout(LayoutError::InsufficientSpace { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for layout operations.
pub type LayoutResult<T> = std::result::Result<T, LayoutError>;
