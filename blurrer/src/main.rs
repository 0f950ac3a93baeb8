use std::ffi::{OsStr, OsString};
use std::fs;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use fast_image_blur as fb;
use log::debug;

mod structs;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
#[clap(disable_help_flag = true)]
struct Cli {
    #[clap(long, action = clap::ArgAction::HelpLong)]
    help: Option<bool>,

    /// Path to source image file with raw pixel bytes (no header)
    #[clap(value_parser)]
    source_path: PathBuf,

    /// Path to result image file; the source file name prefixed with
    /// "blur_" by default
    #[clap(value_parser)]
    destination_path: Option<PathBuf>,

    /// Width of source image in pixels
    #[clap(short, long, value_parser)]
    width: NonZeroU32,

    /// Height of source image in pixels
    #[clap(short, long, value_parser)]
    height: NonZeroU32,

    /// Count of blur passes applied to the image
    #[clap(short, long, value_parser, default_value_t = 1)]
    loops: u32,

    /// Color model of source image
    #[clap(short, long, value_enum)]
    color_model: structs::ColorModel,

    /// How accumulated channel values are narrowed to bytes
    #[clap(long, value_enum, default_value_t = structs::NarrowingMode::Truncate)]
    narrowing: structs::NarrowingMode,

    /// Overwrite destination file
    #[clap(short, long, action)]
    overwrite: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    blur(&cli)
}

fn blur(cli: &Cli) -> Result<()> {
    let total_start = Instant::now();
    let src_image = open_source_image(cli)?;
    let blurrer = fb::Blurrer::with_narrowing(fb::GAUSSIAN_BLUR_3X3, cli.narrowing.into());

    debug!(
        "Blur the {}x{} source image {} times",
        cli.width, cli.height, cli.loops
    );
    let conv_start = Instant::now();
    let result = blurrer
        .blur_loops(src_image, cli.loops)
        .with_context(|| "Failed to blur image")?;
    let conv_time = conv_start.elapsed();

    save_result(cli, &result)?;

    println!("\nPerformance Metrics:");
    println!(
        "Total execution time: {:.3} seconds",
        total_start.elapsed().as_secs_f64()
    );
    println!(
        "Convolution time only: {:.3} seconds",
        conv_time.as_secs_f64()
    );
    println!("Image type: {}", cli.color_model.name());
    println!("Image dimensions: {}x{}", cli.width, cli.height);
    println!("Number of iterations: {}", cli.loops);
    Ok(())
}

fn open_source_image(cli: &Cli) -> Result<fb::PaddedImage> {
    let source_path = &cli.source_path;
    debug!("Opening the source image {:?}", source_path);
    let data = fs::read(source_path)
        .with_context(|| format!("Failed to read source file from {:?}", source_path))?;

    let pixel_type: fb::PixelType = cli.color_model.into();
    let expected = cli.width.get() as usize * cli.height.get() as usize * pixel_type.channels();
    if data.len() != expected {
        return Err(anyhow!(
            "Source file holds {} bytes but a {}x{} {} image needs {}",
            data.len(),
            cli.width,
            cli.height,
            cli.color_model.name(),
            expected,
        ));
    }

    let mut image = fb::PaddedImage::new(cli.width, cli.height, pixel_type)
        .with_context(|| "Failed to allocate pixel buffer")?;
    image
        .copy_interior_from(&data)
        .with_context(|| "Failed to load pixel data into the padded buffer")?;
    Ok(image)
}

fn save_result(cli: &Cli, image: &fb::PaddedImage) -> Result<()> {
    let result_path = if let Some(path) = cli.destination_path.clone() {
        path
    } else {
        let file_name = cli
            .source_path
            .file_name()
            .unwrap_or_else(|| OsStr::new("out.raw"));
        let mut name = OsString::from("blur_");
        name.push(file_name);
        cli.source_path.with_file_name(name)
    };
    if result_path.exists() && !cli.overwrite {
        return Err(anyhow!(
            "Destination path {:?} already exists.",
            result_path
        ));
    }

    debug!("Save the result image into the file {:?}", result_path);
    fs::write(&result_path, image.interior_to_vec())
        .with_context(|| "Failed to save the result image")?;
    Ok(())
}
