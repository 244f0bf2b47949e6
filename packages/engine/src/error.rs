//! Engine error type
//!
//! Out-of-bounds coordinates are never errors: reads treat them as occupied
//! and writes ignore them. Errors are reserved for structural problems
//! (lattice shape, configuration) that make a simulation unusable.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid lattice dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("buffer size mismatch: expected {expected} cells, current has {current}, scratch has {scratch}")]
    DimensionMismatch {
        expected: usize,
        current: usize,
        scratch: usize,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("unknown element kind id: {0}")]
    UnknownKind(u8),
}

pub type Result<T> = std::result::Result<T, EngineError>;
