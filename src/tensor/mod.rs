//! Borrowed views over raw network output.
//!
//! `TensorView` is a read-only 4D view into a flat `f32` buffer with logical
//! shape `(batch, channels, height, width)` in row-major order. A rank-3
//! buffer is treated as a batch of size 1, mirroring how detection networks
//! emit a single image. The view never mutates the buffer; decoding is a pure
//! transform into a separate candidate collection.

use crate::util::{RegionBoxError, RegionBoxResult};

/// Borrowed 4D view of raw network output.
#[derive(Copy, Clone)]
pub struct TensorView<'a> {
    data: &'a [f32],
    batch: usize,
    channels: usize,
    height: usize,
    width: usize,
}

impl<'a> TensorView<'a> {
    /// Creates a rank-4 `(batch, channels, height, width)` view.
    pub fn from_slice(
        data: &'a [f32],
        batch: usize,
        channels: usize,
        height: usize,
        width: usize,
    ) -> RegionBoxResult<Self> {
        if width == 0 || height == 0 {
            return Err(RegionBoxError::InvalidGrid { width, height });
        }
        let needed = batch
            .checked_mul(channels)
            .and_then(|v| v.checked_mul(height))
            .and_then(|v| v.checked_mul(width))
            .ok_or(RegionBoxError::InvalidGrid { width, height })?;
        if data.len() < needed {
            return Err(RegionBoxError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            batch,
            channels,
            height,
            width,
        })
    }

    /// Creates a view from a dynamic shape.
    ///
    /// A rank-3 shape `[channels, height, width]` becomes a batch of one;
    /// rank-4 is `[batch, channels, height, width]`. Any other rank is
    /// rejected.
    pub fn from_shape(data: &'a [f32], shape: &[usize]) -> RegionBoxResult<Self> {
        match *shape {
            [channels, height, width] => Self::from_slice(data, 1, channels, height, width),
            [batch, channels, height, width] => {
                Self::from_slice(data, batch, channels, height, width)
            }
            _ => Err(RegionBoxError::UnsupportedRank { rank: shape.len() }),
        }
    }

    /// Creates a rank-3 `(channels, height, width)` view as a batch of one.
    pub fn from_slice_rank3(
        data: &'a [f32],
        channels: usize,
        height: usize,
        width: usize,
    ) -> RegionBoxResult<Self> {
        Self::from_slice(data, 1, channels, height, width)
    }

    /// Returns the batch size.
    pub fn batch(&self) -> usize {
        self.batch
    }

    /// Returns the channel count.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the element at `(b, ch, row, col)`.
    ///
    /// Indices are expected to be in range; construction already bounds the
    /// buffer, so this is a plain row-major load.
    #[inline]
    pub(crate) fn at(&self, b: usize, ch: usize, row: usize, col: usize) -> f32 {
        debug_assert!(b < self.batch && ch < self.channels);
        debug_assert!(row < self.height && col < self.width);
        let idx = ((b * self.channels + ch) * self.height + row) * self.width + col;
        self.data[idx]
    }
}
