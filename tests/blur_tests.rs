use std::num::NonZeroU32;

use fast_image_blur::{
    Blurrer, Kernel, Narrowing, PaddedImage, PixelType, ShapeMismatchError, GAUSSIAN_BLUR_3X3,
    IDENTITY_3X3,
};

fn nonzero(v: u32) -> NonZeroU32 {
    NonZeroU32::new(v).unwrap()
}

fn image_from_fn(
    width: u32,
    height: u32,
    pixel_type: PixelType,
    f: impl Fn(usize) -> u8,
) -> PaddedImage {
    let size = (width * height) as usize * pixel_type.channels();
    let data: Vec<u8> = (0..size).map(f).collect();
    let mut image = PaddedImage::new(nonzero(width), nonzero(height), pixel_type).unwrap();
    image.copy_interior_from(&data).unwrap();
    image
}

fn uniform_image(width: u32, height: u32, pixel_type: PixelType, pixel: &[u8]) -> PaddedImage {
    image_from_fn(width, height, pixel_type, |i| pixel[i % pixel.len()])
}

fn empty_like(image: &PaddedImage) -> PaddedImage {
    PaddedImage::new(image.width(), image.height(), image.pixel_type()).unwrap()
}

fn assert_padding_is_zero(image: &PaddedImage) {
    let row_stride = image.row_stride();
    let channels = image.pixel_type().channels();
    let rows: Vec<&[u8]> = image.buffer().chunks_exact(row_stride).collect();
    assert!(rows.first().unwrap().iter().all(|&b| b == 0));
    assert!(rows.last().unwrap().iter().all(|&b| b == 0));
    for row in rows {
        assert!(row[..channels].iter().all(|&b| b == 0));
        assert!(row[row_stride - channels..].iter().all(|&b| b == 0));
    }
}

#[test]
fn sweep_preserves_the_interior_shape() {
    let src = uniform_image(7, 5, PixelType::U8x3, &[10, 20, 30]);
    let mut dst = empty_like(&src);
    Blurrer::default().blur(&src, &mut dst).unwrap();
    assert_eq!(dst.width(), src.width());
    assert_eq!(dst.height(), src.height());
    assert_eq!(dst.buffer().len(), src.buffer().len());
}

#[test]
fn zero_loops_returns_the_image_unchanged() {
    let image = image_from_fn(6, 4, PixelType::U8, |i| (i * 31 + 7) as u8);
    let expected = image.interior_to_vec();
    let result = Blurrer::default().blur_loops(image, 0).unwrap();
    assert_eq!(result.interior_to_vec(), expected);
}

#[test]
fn sweep_never_writes_the_padding_ring() {
    for pixel_type in [PixelType::U8, PixelType::U8x3] {
        let src = image_from_fn(5, 4, pixel_type, |_| 255);
        let mut dst = empty_like(&src);
        Blurrer::default().blur(&src, &mut dst).unwrap();
        assert_padding_is_zero(&src);
        assert_padding_is_zero(&dst);
    }
}

#[test]
fn identity_kernel_copies_the_image_through_any_count_of_loops() {
    let image = image_from_fn(6, 5, PixelType::U8x3, |i| (i * 11 + 3) as u8);
    let expected = image.interior_to_vec();
    let result = Blurrer::new(IDENTITY_3X3).blur_loops(image, 4).unwrap();
    assert_eq!(result.interior_to_vec(), expected);
}

#[test]
fn gaussian_pass_keeps_the_inner_interior_and_darkens_the_border() {
    let src = uniform_image(6, 5, PixelType::U8, &[255]);
    let mut dst = empty_like(&src);
    Blurrer::new(GAUSSIAN_BLUR_3X3).blur(&src, &mut dst).unwrap();
    for (row, row_bytes) in dst.interior_rows().enumerate() {
        let row = row as u32 + 1;
        for (col, &byte) in row_bytes.iter().enumerate() {
            let col = col as u32 + 1;
            let on_border = row == 1 || row == 5 || col == 1 || col == 6;
            if on_border {
                assert!(byte < 255, "pixel ({row}, {col}) must be darkened");
            } else {
                assert_eq!(byte, 255, "pixel ({row}, {col}) must stay white");
            }
        }
    }
}

#[test]
fn gaussian_pass_known_values_on_a_uniform_image() {
    // 160 divides by 16 exactly, so corners get 160 * 9/16 = 90 and
    // edges get 160 * 12/16 = 120 without float noise.
    let src = uniform_image(3, 3, PixelType::U8, &[160]);
    let mut dst = empty_like(&src);
    Blurrer::new(GAUSSIAN_BLUR_3X3).blur(&src, &mut dst).unwrap();
    assert_eq!(
        dst.interior_to_vec(),
        vec![90, 120, 90, 120, 160, 120, 90, 120, 90]
    );
}

#[test]
fn loops_apply_passes_sequentially() {
    let make = || image_from_fn(6, 4, PixelType::U8, |i| (i * 13 + 5) as u8);
    let blurrer = Blurrer::default();

    let two_pass = blurrer.blur_loops(make(), 2).unwrap();

    let src = make();
    let mut mid = empty_like(&src);
    blurrer.blur(&src, &mut mid).unwrap();
    let mut out = empty_like(&src);
    blurrer.blur(&mid, &mut out).unwrap();

    assert_eq!(two_pass.buffer(), out.buffer());
    // The second pass really changed the first pass's output.
    assert_ne!(two_pass.buffer(), mid.buffer());
}

#[test]
fn rgb_channels_never_bleed() {
    let image = uniform_image(5, 5, PixelType::U8x3, &[255, 0, 0]);
    let result = Blurrer::default().blur_loops(image, 3).unwrap();
    for (i, pixel) in result.interior_to_vec().chunks_exact(3).enumerate() {
        assert_eq!(pixel[1], 0, "green bled into pixel {i}");
        assert_eq!(pixel[2], 0, "blue bled into pixel {i}");
    }
}

#[test]
fn full_frame_sweep_matches_the_region_sweep_of_the_whole_interior() {
    // With the "rayon" feature on this also checks that the parallel
    // sweep is bit-identical to the serial one.
    let src = image_from_fn(16, 9, PixelType::U8x3, |i| (i * 11 + 3) as u8);
    let mut full = empty_like(&src);
    let mut region = empty_like(&src);
    let blurrer = Blurrer::default();
    blurrer.blur(&src, &mut full).unwrap();
    blurrer.blur_region(&src, &mut region, 1..=9, 1..=16).unwrap();
    assert_eq!(full.buffer(), region.buffer());
}

#[test]
fn region_sweep_touches_only_the_requested_rectangle() {
    let src = uniform_image(5, 5, PixelType::U8, &[255]);
    let mut dst = empty_like(&src);
    Blurrer::default()
        .blur_region(&src, &mut dst, 2..=3, 2..=4)
        .unwrap();
    for (row, row_bytes) in dst.interior_rows().enumerate() {
        let row = row as u32 + 1;
        for (col, &byte) in row_bytes.iter().enumerate() {
            let col = col as u32 + 1;
            let inside = (2..=3).contains(&row) && (2..=4).contains(&col);
            if inside {
                assert_eq!(byte, 255, "pixel ({row}, {col}) must be convolved");
            } else {
                assert_eq!(byte, 0, "pixel ({row}, {col}) must stay untouched");
            }
        }
    }
}

#[test]
fn mismatched_buffers_are_rejected() {
    let blurrer = Blurrer::default();
    let src = uniform_image(4, 4, PixelType::U8, &[1]);

    let mut wrong_width = PaddedImage::new(nonzero(5), nonzero(4), PixelType::U8).unwrap();
    assert_eq!(blurrer.blur(&src, &mut wrong_width), Err(ShapeMismatchError));

    let mut wrong_pixel_type = PaddedImage::new(nonzero(4), nonzero(4), PixelType::U8x3).unwrap();
    assert_eq!(
        blurrer.blur(&src, &mut wrong_pixel_type),
        Err(ShapeMismatchError)
    );
}

#[test]
fn truncate_narrowing_wraps_out_of_range_sums() {
    let doubling = Kernel::new([[0.0; 3], [0.0, 2.0, 0.0], [0.0; 3]]);
    let src = uniform_image(3, 3, PixelType::U8, &[200]);
    let mut dst = empty_like(&src);

    // 200 * 2 = 400 wraps to 144.
    Blurrer::new(doubling).blur(&src, &mut dst).unwrap();
    assert_eq!(dst.interior_to_vec(), vec![144; 9]);

    Blurrer::with_narrowing(doubling, Narrowing::Clamp)
        .blur(&src, &mut dst)
        .unwrap();
    assert_eq!(dst.interior_to_vec(), vec![255; 9]);
}

#[test]
fn clamp_narrowing_floors_negative_sums() {
    let negating = Kernel::new([[0.0; 3], [0.0, -1.0, 0.0], [0.0; 3]]);
    let src = uniform_image(3, 3, PixelType::U8, &[10]);
    let mut dst = empty_like(&src);

    Blurrer::new(negating).blur(&src, &mut dst).unwrap();
    assert_eq!(dst.interior_to_vec(), vec![246; 9]);

    Blurrer::with_narrowing(negating, Narrowing::Clamp)
        .blur(&src, &mut dst)
        .unwrap();
    assert_eq!(dst.interior_to_vec(), vec![0; 9]);
}
