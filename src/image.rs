use std::num::NonZeroU32;

use crate::errors::{AllocationError, ImageBufferError};
use crate::pixels::PixelType;

/// Pixel container with a one-pixel ring of zero padding around the
/// interior region.
///
/// The physical buffer holds `(height + 2)` rows of `(width + 2)` pixels,
/// so pixels on the image boundary can be convolved without special-casing
/// edge conditions. Interior coordinates are 1-based: rows `1..=height`,
/// columns `1..=width`. The padding ring is zero-filled at allocation and
/// is never written by any method of this type or by the convolution
/// engine.
#[derive(Debug)]
pub struct PaddedImage {
    width: NonZeroU32,
    height: NonZeroU32,
    pixel_type: PixelType,
    buffer: Vec<u8>,
}

impl PaddedImage {
    /// Create zero-filled image with given interior dimensions and
    /// pixel type.
    pub fn new(
        width: NonZeroU32,
        height: NonZeroU32,
        pixel_type: PixelType,
    ) -> Result<Self, AllocationError> {
        let rows = height.get() as usize + 2;
        let row_stride = (width.get() as usize + 2) * pixel_type.channels();
        let size = rows * row_stride;
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(size).map_err(|_| AllocationError)?;
        buffer.resize(size, 0);
        Ok(Self {
            width,
            height,
            pixel_type,
            buffer,
        })
    }

    #[inline(always)]
    pub fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    #[inline(always)]
    pub fn width(&self) -> NonZeroU32 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> NonZeroU32 {
        self.height
    }

    /// Count of bytes per padded row: `(width + 2) * channels`.
    #[inline(always)]
    pub fn row_stride(&self) -> usize {
        (self.width.get() as usize + 2) * self.pixel_type.channels()
    }

    /// Flat index of the first byte of an interior pixel.
    ///
    /// Arguments are 1-based interior coordinates. Calling with a row or
    /// column outside the interior region is a programming error.
    #[inline(always)]
    pub fn offset(&self, row: u32, col: u32) -> usize {
        debug_assert!(row >= 1 && row <= self.height.get());
        debug_assert!(col >= 1 && col <= self.width.get());
        row as usize * self.row_stride() + col as usize * self.pixel_type.channels()
    }

    /// Buffer with image pixels, padding included.
    #[inline(always)]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    #[inline(always)]
    pub(crate) fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// One full padded row, padding bytes included.
    #[inline(always)]
    pub(crate) fn padded_row(&self, row: u32) -> &[u8] {
        let row_stride = self.row_stride();
        let start = row as usize * row_stride;
        &self.buffer[start..start + row_stride]
    }

    /// Iterator over the interior part of every interior row.
    pub fn interior_rows(&self) -> impl Iterator<Item = &[u8]> {
        let channels = self.pixel_type.channels();
        let row_size = self.width.get() as usize * channels;
        self.buffer
            .chunks_exact(self.row_stride())
            .skip(1)
            .take(self.height.get() as usize)
            .map(move |row| &row[channels..channels + row_size])
    }

    /// Mutable variant of [interior_rows](Self::interior_rows).
    pub fn interior_rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        let channels = self.pixel_type.channels();
        let row_size = self.width.get() as usize * channels;
        let row_stride = self.row_stride();
        self.buffer
            .chunks_exact_mut(row_stride)
            .skip(1)
            .take(self.height.get() as usize)
            .map(move |row| &mut row[channels..channels + row_size])
    }

    /// Fill the interior region from raw pixel bytes in row-major,
    /// channel-interleaved order.
    ///
    /// `data` must hold exactly `width * height * channels` bytes.
    pub fn copy_interior_from(&mut self, data: &[u8]) -> Result<(), ImageBufferError> {
        let row_size = self.width.get() as usize * self.pixel_type.channels();
        let size = row_size * self.height.get() as usize;
        if data.len() != size {
            return Err(ImageBufferError::InvalidBufferSize);
        }
        for (dst_row, src_row) in self.interior_rows_mut().zip(data.chunks_exact(row_size)) {
            dst_row.copy_from_slice(src_row);
        }
        Ok(())
    }

    /// Extract the interior region as raw pixel bytes in row-major,
    /// channel-interleaved order.
    pub fn interior_to_vec(&self) -> Vec<u8> {
        let row_size = self.width.get() as usize * self.pixel_type.channels();
        let mut res = Vec::with_capacity(row_size * self.height.get() as usize);
        for row in self.interior_rows() {
            res.extend_from_slice(row);
        }
        res
    }
}
