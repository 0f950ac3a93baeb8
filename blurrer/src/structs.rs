use fast_image_blur as fb;

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum ColorModel {
    /// One byte per pixel.
    Grey,
    /// Three interleaved bytes (R, G, B) per pixel.
    Rgb,
}

impl ColorModel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grey => "Greyscale",
            Self::Rgb => "RGB",
        }
    }
}

impl From<ColorModel> for fb::PixelType {
    fn from(color_model: ColorModel) -> Self {
        match color_model {
            ColorModel::Grey => fb::PixelType::U8,
            ColorModel::Rgb => fb::PixelType::U8x3,
        }
    }
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum NarrowingMode {
    /// Truncate the accumulated value of a channel toward zero and wrap
    /// it to a byte.
    Truncate,
    /// Clamp the accumulated value of a channel into [0, 255] before the
    /// store.
    Clamp,
}

impl From<NarrowingMode> for fb::Narrowing {
    fn from(mode: NarrowingMode) -> Self {
        match mode {
            NarrowingMode::Truncate => fb::Narrowing::Truncate,
            NarrowingMode::Clamp => fb::Narrowing::Clamp,
        }
    }
}
