//! Error types for the workout_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for workout_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Workout type code not in the dispatch table
    #[error("Invalid workout type: {0:?} (expected one of SWM, RUN, WLK)")]
    InvalidWorkoutType(String),

    /// Wrong number of positional values for the selected workout type
    #[error("{workout_type} expects {expected} values, got {actual}")]
    Arity {
        workout_type: String,
        expected: usize,
        actual: usize,
    },

    /// A positional value that cannot be used for its field
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },

    /// Duration must be strictly positive
    #[error("Invalid duration: {0} (must be greater than zero)")]
    InvalidDuration(f64),

    /// Input file type not recognized by the loader
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
