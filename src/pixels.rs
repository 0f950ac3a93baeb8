/// Closed set of pixel layouts supported by the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelType {
    /// Greyscale, one byte per pixel.
    U8,
    /// RGB, three interleaved bytes (R, G, B) per pixel.
    U8x3,
}

impl PixelType {
    /// Count of bytes per pixel.
    #[inline(always)]
    pub fn channels(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U8x3 => 3,
        }
    }
}
