//! Error types for gridmatch.

use thiserror::Error;

/// Result alias for gridmatch operations.
pub type GridMatchResult<T> = std::result::Result<T, GridMatchError>;

/// Errors that can occur when decoding, slicing or comparing grids.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GridMatchError {
    /// Width or height is zero, or their product overflows.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Bytes per pixel disagree with the declared channel order.
    #[error("invalid format: {bytes_per_pixel} bytes per pixel for {channel_order} channel order")]
    InvalidFormat {
        bytes_per_pixel: usize,
        channel_order: &'static str,
    },
    /// Stride is shorter than one tightly packed scanline.
    #[error("invalid stride: {stride} bytes, at least {min_stride} required")]
    InvalidStride { min_stride: usize, stride: usize },
    /// Buffer is shorter than `stride * height`.
    #[error("buffer out of bounds: need {needed} bytes, got {got}")]
    OutOfBounds { needed: usize, got: usize },
    /// Tolerance comparison between rows of different lengths.
    #[error("row length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    /// Slice request exceeds the row bounds.
    #[error("slice out of range: start {start} len {len} on row of {row_len}")]
    OutOfRange {
        start: usize,
        len: usize,
        row_len: usize,
    },
    /// Requested region does not fit inside the grid.
    #[error("region out of bounds: ({x}, {y}) {width}x{height} in {grid_width}x{grid_height} grid")]
    RegionOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        grid_width: usize,
        grid_height: usize,
    },
    /// Pixels handed to a row or grid break its layout invariants.
    #[error("invalid row: {0}")]
    InvalidRow(&'static str),
    /// Tolerance is not a finite value in `[0, 1]`.
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(String),
    /// The operation exists but has no implementation.
    #[error("not supported: {0}")]
    NotSupported(&'static str),
    /// Image loading failed.
    #[error("image io error: {reason}")]
    ImageIo { reason: String },
}
