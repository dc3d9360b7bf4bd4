//! Error types for validation and optimization.

/// Structural problems found while validating a clip or track.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ValidationError {
    /// Clip duration is zero, negative or not finite
    #[error("Invalid duration: {duration} (must be positive and finite)")]
    InvalidDuration { duration: f32 },

    /// Clip holds more joint tracks than supported
    #[error("Too many joint tracks: {count} (limit: {max})")]
    TooManyTracks { count: usize, max: usize },

    /// Key position is NaN or infinite
    #[error("Non-finite position at key {index} of {channel}")]
    NonFinitePosition { channel: String, index: usize },

    /// Key value has a NaN or infinite component
    #[error("Non-finite value at key {index} of {channel}")]
    NonFiniteValue { channel: String, index: usize },

    /// Key position outside the channel's domain
    #[error("Key {index} of {channel} at {position} is out of range [0, {end}]")]
    OutOfRange {
        channel: String,
        index: usize,
        position: f32,
        end: f32,
    },

    /// Key positions are not strictly increasing
    #[error("Key {index} of {channel} at {position} does not follow previous key at {previous}")]
    NotIncreasing {
        channel: String,
        index: usize,
        position: f32,
        previous: f32,
    },
}

/// Failure of an optimizer call.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum OptimizeError {
    /// No output destination was provided
    #[error("No output provided")]
    NullOutput,

    /// Input failed structural validation; output was reset to its default
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

/// Problems loading or checking an optimizer configuration.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Tolerances must be finite and non-negative
    #[error("Invalid tolerance '{name}': {value}")]
    InvalidTolerance { name: &'static str, value: f32 },
}
