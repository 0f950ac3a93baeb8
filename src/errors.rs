use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Not enough memory to allocate pixel buffer of requested size")]
pub struct AllocationError;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageBufferError {
    #[error("Size of buffer don't match to dimensions of image")]
    InvalidBufferSize,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error(
    "The dimensions or pixel type of the source image are not equal to ones of the destination image"
)]
pub struct ShapeMismatchError;
