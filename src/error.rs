use thiserror::Error;

/// Invalid construction input, reported synchronously before any generation
/// starts. Never silently corrected.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("maze dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },

    #[error("loop fraction must be within [0, 1], got {0}")]
    InvalidLoopFraction(f64),

    #[error("portal set size must be at least 1")]
    InvalidPortalSetSize,

    #[error("malformed grid: {reason}")]
    MalformedGrid { reason: String },
}

/// Failure while saving or loading a grid file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("grid file I/O failed")]
    Io(#[from] std::io::Error),

    #[error("grid file is not valid JSON")]
    Format(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
