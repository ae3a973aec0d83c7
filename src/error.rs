//! Error types for canvas construction

use thiserror::Error;

/// Errors raised while creating a canvas
///
/// Drawing never fails; only construction can.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    /// Width is zero, height is zero, or width is not a multiple of 8
    #[error("invalid canvas dimensions {width}x{height}: width must be a positive multiple of 8 and height positive")]
    InvalidDimensions { width: usize, height: usize },

    /// Backing storage could not be obtained
    #[error("unable to allocate {bytes} bytes for canvas")]
    AllocationFailure { bytes: usize },
}

/// Result type for canvas operations
pub type Result<T> = std::result::Result<T, CanvasError>;
