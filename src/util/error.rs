//! Error types for regionbox.

use thiserror::Error;

/// Result alias for regionbox operations.
pub type RegionBoxResult<T> = std::result::Result<T, RegionBoxError>;

/// Errors that can occur when decoding network output.
///
/// All errors are detected before any partial output is produced; a failed
/// call never returns a partially decoded batch.
#[derive(Debug, Error, PartialEq)]
pub enum RegionBoxError {
    /// The output array is neither rank 3 nor rank 4.
    #[error("unsupported tensor rank {rank}, expected 3 or 4")]
    UnsupportedRank {
        /// Rank of the rejected array.
        rank: usize,
    },
    /// The channel count does not match `num_anchors * (5 + num_classes)`.
    #[error("channel count mismatch: expected {expected}, got {got}")]
    ChannelMismatch {
        /// Channel count implied by the anchor and class configuration.
        expected: usize,
        /// Channel count of the rejected array.
        got: usize,
    },
    /// The output grid has a zero dimension.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidGrid {
        /// Grid width in cells.
        width: usize,
        /// Grid height in cells.
        height: usize,
    },
    /// The backing buffer is shorter than the declared shape requires.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall {
        /// Minimum element count implied by the shape.
        needed: usize,
        /// Actual element count of the buffer.
        got: usize,
    },
    /// The flat anchor list has an odd number of values.
    #[error("anchor list of length {len} is not a sequence of (w, h) pairs")]
    OddAnchorList {
        /// Length of the rejected list.
        len: usize,
    },
    /// The anchor count does not match the declared `num_anchors`.
    #[error("anchor count mismatch: expected {expected}, got {got}")]
    AnchorCountMismatch {
        /// Declared `num_anchors`.
        expected: usize,
        /// Anchors actually supplied.
        got: usize,
    },
    /// A threshold lies outside `[0, 1]`.
    #[error("threshold `{name}` = {value} is outside [0, 1]")]
    ThresholdOutOfRange {
        /// Name of the offending threshold.
        name: &'static str,
        /// Rejected value.
        value: f32,
    },
}
