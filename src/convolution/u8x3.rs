use std::ops::RangeInclusive;

use crate::blurrer::Narrowing;
use crate::convolution::{narrow, Kernel};

/// One destination row of the RGB sweep.
///
/// Column indices are in pixels; every pixel is three consecutive bytes.
/// The three channels accumulate independently, each multiplied only
/// against same-channel neighbor bytes.
#[inline(always)]
pub(crate) fn convolve_row(
    neighbors: &[&[u8]; 3],
    dst_row: &mut [u8],
    cols: RangeInclusive<u32>,
    kernel: Kernel,
    narrowing: Narrowing,
) {
    for col in cols {
        let x = col as usize * 3;
        let ss = weighted_sums(neighbors, x, kernel);
        for (d, s) in dst_row[x..x + 3].iter_mut().zip(ss) {
            *d = narrow(s, narrowing);
        }
    }
}

#[inline(always)]
fn weighted_sums(neighbors: &[&[u8]; 3], x: usize, kernel: Kernel) -> [f32; 3] {
    let mut ss = [0f32; 3];
    for (kr, src_row) in neighbors.iter().enumerate() {
        let taps = &src_row[x - 3..x + 6];
        for (kc, pixel) in taps.chunks_exact(3).enumerate() {
            let k = kernel.at(kr, kc);
            for (s, &component) in ss.iter_mut().zip(pixel) {
                *s += component as f32 * k;
            }
        }
    }
    ss
}
