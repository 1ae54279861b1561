use thiserror::Error;

/// Construction-time configuration faults. These are programmer errors and
/// fail fast; everything recoverable during a layout call is reported
/// through [`crate::layout::LayoutResult`] instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("canvas dimensions must be positive, got {width}x{height}")]
    NonPositiveCanvas { width: f32, height: f32 },
    #[error("base node size must be positive, got {width}x{height}")]
    NonPositiveNodeSize { width: f32, height: f32 },
    #[error("minimum separation must be positive, got {0}")]
    NonPositiveSeparation(f32),
    #[error("character width must be positive, got {0}")]
    NonPositiveCharWidth(f32),
    #[error("resolver round budget must be at least 1")]
    ZeroRounds,
}
