#![doc = include_str!("../README.md")]
//!
//! ## Feature flags
#![doc = document_features::document_features!()]

pub use blurrer::{Blurrer, Narrowing};
pub use convolution::{Kernel, GAUSSIAN_BLUR_3X3, IDENTITY_3X3};
pub use errors::*;
pub use pixels::PixelType;

pub use crate::image::PaddedImage;

mod blurrer;
mod convolution;
mod errors;
mod image;
mod pixels;
cfg_if::cfg_if! {
    if #[cfg(feature = "rayon")] {
        mod threading;
    }
}
