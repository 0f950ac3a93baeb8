use std::mem;
use std::ops::RangeInclusive;

use crate::convolution::{self, Kernel, GAUSSIAN_BLUR_3X3};
use crate::errors::{AllocationError, ShapeMismatchError};
use crate::image::PaddedImage;

/// How the accumulated value of a channel is narrowed to a byte on store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Narrowing {
    /// Truncate toward zero and wrap modulo 256.
    ///
    /// For a normalized kernel over in-range input the accumulated value
    /// stays within `[0, 255]` and this mode is exact. A kernel whose
    /// weights sum above 1 will wrap silently.
    #[default]
    Truncate,
    /// Clamp the accumulated value into `[0, 255]` before the store.
    Clamp,
}

/// Methods of this structure used to blur images.
#[derive(Debug, Clone, Copy)]
pub struct Blurrer {
    kernel: Kernel,
    narrowing: Narrowing,
}

impl Default for Blurrer {
    fn default() -> Self {
        Self::new(GAUSSIAN_BLUR_3X3)
    }
}

impl Blurrer {
    /// Creates instance of `Blurrer` with the given kernel and the default
    /// [Narrowing::Truncate] mode.
    pub fn new(kernel: Kernel) -> Self {
        Self {
            kernel,
            narrowing: Narrowing::default(),
        }
    }

    pub fn with_narrowing(kernel: Kernel, narrowing: Narrowing) -> Self {
        Self { kernel, narrowing }
    }

    #[inline(always)]
    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    #[inline(always)]
    pub fn narrowing(&self) -> Narrowing {
        self.narrowing
    }

    /// Convolve every interior pixel of `src` and store the result into
    /// the corresponding pixel of `dst`.
    ///
    /// The padding rings of both images are left untouched, so `dst` can
    /// be reused as the source of a following pass.
    pub fn blur(&self, src: &PaddedImage, dst: &mut PaddedImage) -> Result<(), ShapeMismatchError> {
        check_same_shape(src, dst)?;
        #[cfg(feature = "rayon")]
        crate::threading::convolve_par(src, dst, self.kernel, self.narrowing);
        #[cfg(not(feature = "rayon"))]
        convolution::convolve(
            src,
            dst,
            1..=src.height().get(),
            1..=src.width().get(),
            self.kernel,
            self.narrowing,
        );
        Ok(())
    }

    /// Convolve the interior pixels within the given inclusive row and
    /// column ranges only.
    ///
    /// Both ranges must be non-empty and lie within the interior region.
    /// Violating this is a programming error and panics.
    pub fn blur_region(
        &self,
        src: &PaddedImage,
        dst: &mut PaddedImage,
        rows: RangeInclusive<u32>,
        cols: RangeInclusive<u32>,
    ) -> Result<(), ShapeMismatchError> {
        check_same_shape(src, dst)?;
        assert!(
            *rows.start() >= 1 && rows.start() <= rows.end() && *rows.end() <= src.height().get(),
            "row range is out of the interior region"
        );
        assert!(
            *cols.start() >= 1 && cols.start() <= cols.end() && *cols.end() <= src.width().get(),
            "column range is out of the interior region"
        );
        convolution::convolve(src, dst, rows, cols, self.kernel, self.narrowing);
        Ok(())
    }

    /// Blur `image` `loops` times, each pass reading the output of the
    /// previous one.
    ///
    /// One scratch image is allocated regardless of `loops`. After every
    /// pass the two buffers swap the source and destination roles, so
    /// exactly two buffers exist for the lifetime of the run. With
    /// `loops = 0` the image is returned unchanged.
    pub fn blur_loops(
        &self,
        image: PaddedImage,
        loops: u32,
    ) -> Result<PaddedImage, AllocationError> {
        if loops == 0 {
            return Ok(image);
        }
        let mut src = image;
        let mut dst = PaddedImage::new(src.width(), src.height(), src.pixel_type())?;
        for _ in 0..loops {
            // Shapes are equal by construction.
            self.blur(&src, &mut dst).unwrap();
            mem::swap(&mut src, &mut dst);
        }
        Ok(src)
    }
}

fn check_same_shape(src: &PaddedImage, dst: &PaddedImage) -> Result<(), ShapeMismatchError> {
    if src.width() != dst.width()
        || src.height() != dst.height()
        || src.pixel_type() != dst.pixel_type()
    {
        return Err(ShapeMismatchError);
    }
    Ok(())
}
