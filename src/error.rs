use thiserror::Error;

/// Errors produced when validating configuration.
///
/// Rasterization and curve evaluation never fail; only the parameters they are built from can be rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("normalization scale must be finite and non-zero, got {0}")]
    InvalidScale(f32),
    #[error("curve sample count must be at least 1")]
    NoSamples,
    #[error("animation period must be finite and positive, got {0}")]
    InvalidPeriod(f32),
    #[error("viewport must have a non-zero size, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
}
