pub use kernels::*;

use std::ops::RangeInclusive;

use num_traits::clamp;

use crate::blurrer::Narrowing;
use crate::image::PaddedImage;
use crate::pixels::PixelType;

mod kernels;
mod u8x1;
mod u8x3;

/// Apply `kernel` to every interior pixel of `src` within the inclusive
/// row and column ranges and store the results into `dst`.
///
/// Every output pixel is a function of the source buffer only, so the
/// iteration order over destination rows is not significant.
pub(crate) fn convolve(
    src: &PaddedImage,
    dst: &mut PaddedImage,
    rows: RangeInclusive<u32>,
    cols: RangeInclusive<u32>,
    kernel: Kernel,
    narrowing: Narrowing,
) {
    let row_stride = src.row_stride();
    let (row_from, row_to) = rows.into_inner();
    let start = row_from as usize * row_stride;
    let count = (row_to - row_from + 1) as usize;
    let dst_rows = dst.buffer_mut()[start..]
        .chunks_exact_mut(row_stride)
        .take(count);
    for (i, dst_row) in dst_rows.enumerate() {
        convolve_row(
            src,
            row_from + i as u32,
            dst_row,
            cols.clone(),
            kernel,
            narrowing,
        );
    }
}

/// One destination row of the sweep. `dst_row` is the full padded row
/// with the given 1-based interior row index.
#[inline(always)]
pub(crate) fn convolve_row(
    src: &PaddedImage,
    row: u32,
    dst_row: &mut [u8],
    cols: RangeInclusive<u32>,
    kernel: Kernel,
    narrowing: Narrowing,
) {
    // The row above and the row below may be padding. They are read as
    // zero-extension neighbors, never written.
    let neighbors = [
        src.padded_row(row - 1),
        src.padded_row(row),
        src.padded_row(row + 1),
    ];
    match src.pixel_type() {
        PixelType::U8 => u8x1::convolve_row(&neighbors, dst_row, cols, kernel, narrowing),
        PixelType::U8x3 => u8x3::convolve_row(&neighbors, dst_row, cols, kernel, narrowing),
    }
}

/// Narrow the accumulated value of one channel to a byte.
#[inline(always)]
fn narrow(sum: f32, narrowing: Narrowing) -> u8 {
    match narrowing {
        Narrowing::Truncate => sum as i32 as u8,
        Narrowing::Clamp => clamp(sum, 0.0, 255.0) as u8,
    }
}
