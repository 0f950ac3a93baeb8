use rayon::prelude::*;

use crate::blurrer::Narrowing;
use crate::convolution::{self, Kernel};
use crate::image::PaddedImage;

/// Full-frame sweep with destination rows distributed over the `rayon`
/// thread pool.
///
/// Each worker writes its own destination rows and only ever reads the
/// already-populated source image, so the output is bit-identical to the
/// serial sweep.
pub(crate) fn convolve_par(
    src: &PaddedImage,
    dst: &mut PaddedImage,
    kernel: Kernel,
    narrowing: Narrowing,
) {
    let row_stride = src.row_stride();
    let width = src.width().get();
    let height = src.height().get() as usize;
    dst.buffer_mut()[row_stride..]
        .par_chunks_exact_mut(row_stride)
        .take(height)
        .enumerate()
        .for_each(|(i, dst_row)| {
            convolution::convolve_row(src, i as u32 + 1, dst_row, 1..=width, kernel, narrowing);
        });
}
