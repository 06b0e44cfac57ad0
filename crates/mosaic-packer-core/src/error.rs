use thiserror::Error;

#[derive(Debug, Error)]
pub enum MosaicError {
    #[error("Invalid mosaic dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Nothing to pack")]
    Empty,
    #[error("No feasible packing: {trials} trial width(s) tried for {parts} part(s)")]
    NoFeasiblePacking { trials: usize, parts: usize },
    #[error("Encoding error: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, MosaicError>;
