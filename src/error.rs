//! ═══════════════════════════════════════════════════════════════════════════════
//! ERROR — Unified Error Type for the Stability Engine
//! ═══════════════════════════════════════════════════════════════════════════════
//! Centralized error handling. No scattered .unwrap() or .expect() calls.
//! ═══════════════════════════════════════════════════════════════════════════════

use std::fmt;

/// The unified error type for the stability engine
#[derive(Debug, Clone, PartialEq)]
pub enum StabilityError {
    /// Input series failed validation (fatal, no partial results)
    MalformedInput(MalformedInput),
    /// Configuration error
    Config(ConfigError),
    /// No random source was injected; the perturbation analyzer cannot run.
    /// The recurrence and coupling analyzers are unaffected.
    RandomSourceUnavailable,
}

impl fmt::Display for StabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StabilityError::MalformedInput(e) => write!(f, "Malformed input: {}", e),
            StabilityError::Config(e) => write!(f, "Configuration error: {}", e),
            StabilityError::RandomSourceUnavailable => {
                write!(f, "No noise source available for perturbation analysis")
            }
        }
    }
}

impl std::error::Error for StabilityError {}

/// Input-series validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum MalformedInput {
    /// Time and value columns have different lengths
    LengthMismatch { times: usize, values: usize },
    /// The series contains no samples
    EmptySeries,
    /// The series has fewer samples than one analysis window
    ShorterThanWindow { len: usize, window_size: usize },
    /// Time column is not strictly increasing at this index
    NonMonotonicTime { index: usize },
    /// A sample parsed to NaN or infinity (non-numeric rows are rejected,
    /// never silently coerced)
    NonFiniteSample { index: usize },
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedInput::LengthMismatch { times, values } => {
                write!(f, "{} times but {} values", times, values)
            }
            MalformedInput::EmptySeries => write!(f, "series is empty"),
            MalformedInput::ShorterThanWindow { len, window_size } => {
                write!(
                    f,
                    "{} samples, need at least {} (one window)",
                    len, window_size
                )
            }
            MalformedInput::NonMonotonicTime { index } => {
                write!(f, "time column not strictly increasing at index {}", index)
            }
            MalformedInput::NonFiniteSample { index } => {
                write!(f, "non-finite sample at index {}", index)
            }
        }
    }
}

impl std::error::Error for MalformedInput {}

impl From<MalformedInput> for StabilityError {
    fn from(err: MalformedInput) -> Self {
        StabilityError::MalformedInput(err)
    }
}

/// Configuration-specific errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Invalid value for a configuration field
    InvalidValue { field: &'static str, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for StabilityError {
    fn from(err: ConfigError) -> Self {
        StabilityError::Config(err)
    }
}

/// Type alias for Result with StabilityError
pub type StabilityResult<T> = Result<T, StabilityError>;
