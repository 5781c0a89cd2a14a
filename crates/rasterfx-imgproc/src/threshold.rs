use rasterfx_image::{ImageError, PixelBuffer, Rgb8};

use crate::rows;

/// Channel mean at or above which a pixel turns white.
pub const BLACK_WHITE_THRESHOLD: u8 = 128;

/// Binarize a single pixel on the floor mean of its channels.
pub fn black_white_pixel(p: Rgb8, threshold: u8) -> Rgb8 {
    if p.average() >= threshold {
        Rgb8::WHITE
    } else {
        Rgb8::BLACK
    }
}

/// Convert an RGB8 image to pure black and white.
///
/// # Arguments
///
/// * `src` - The input RGB8 image.
/// * `dst` - The output RGB8 image.
/// * `threshold` - Pixels whose channel mean is greater or equal become white, the rest black.
///
/// # Returns
///
/// An image holding only the values 0 and 255, equal across channels.
///
/// # Examples
///
/// ```
/// use rasterfx_image::{PixelBuffer, Rgb8};
/// use rasterfx_imgproc::threshold::{black_white, BLACK_WHITE_THRESHOLD};
///
/// let image = PixelBuffer::from_pixels(
///     [2, 1].into(),
///     &[Rgb8::new(128, 128, 128), Rgb8::new(127, 128, 128)],
/// )
/// .unwrap();
///
/// let mut bw = PixelBuffer::empty(image.size()).unwrap();
///
/// black_white(&image, &mut bw, BLACK_WHITE_THRESHOLD).unwrap();
/// assert_eq!(bw.get(0, 0).unwrap(), Rgb8::WHITE);
/// assert_eq!(bw.get(1, 0).unwrap(), Rgb8::BLACK);
/// ```
pub fn black_white(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    threshold: u8,
) -> Result<(), ImageError> {
    rows::check_same_size(src, dst)?;

    rows::iter_rows(src, dst, |src_pixel, dst_pixel| {
        let p = Rgb8::new(src_pixel[0], src_pixel[1], src_pixel[2]);
        dst_pixel.copy_from_slice(&black_white_pixel(p, threshold).to_array());
    });

    Ok(())
}
