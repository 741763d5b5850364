use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum NoiseError {
    #[error("seed must be a finite number, got {0}")]
    NonFiniteSeed(f64),
    #[error("global seed is already fixed at {current}")]
    SeedAlreadySet { current: f64 },
    #[error("grid dimensions must be non-zero")]
    EmptyGrid,
}
