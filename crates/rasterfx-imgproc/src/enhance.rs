use rasterfx_image::{Channel, ImageError, PixelBuffer, Rgb8};

use crate::rows;

/// Invert a single pixel, each channel becoming `255 - channel`.
pub fn invert_pixel(p: Rgb8) -> Rgb8 {
    Rgb8::new(255 - p.r, 255 - p.g, 255 - p.b)
}

/// Zero one channel of a pixel and keep the other two.
pub fn remove_channel_pixel(p: Rgb8, channel: Channel) -> Rgb8 {
    p.with_channel(channel, 0)
}

/// Invert the colors of an image.
///
/// # Arguments
///
/// * `src` - The input RGB8 image.
/// * `dst` - The output RGB8 image.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use rasterfx_image::{PixelBuffer, Rgb8};
/// use rasterfx_imgproc::enhance::invert;
///
/// let image = PixelBuffer::filled([2, 2].into(), Rgb8::new(0, 100, 255)).unwrap();
/// let mut inverted = PixelBuffer::empty(image.size()).unwrap();
///
/// invert(&image, &mut inverted).unwrap();
/// assert_eq!(inverted.get(0, 0).unwrap(), Rgb8::new(255, 155, 0));
/// ```
pub fn invert(src: &PixelBuffer, dst: &mut PixelBuffer) -> Result<(), ImageError> {
    rows::check_same_size(src, dst)?;

    rows::iter_rows_val(src, dst, |src_val, dst_val| {
        *dst_val = 255 - *src_val;
    });

    Ok(())
}

/// Remove one color channel from an image by setting it to zero.
///
/// # Arguments
///
/// * `src` - The input RGB8 image.
/// * `dst` - The output RGB8 image.
/// * `channel` - The channel to zero out.
///
/// Precondition: the input and output images must have the same size.
pub fn remove_channel(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    channel: Channel,
) -> Result<(), ImageError> {
    rows::check_same_size(src, dst)?;

    let idx = channel.index();
    rows::iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel.copy_from_slice(src_pixel);
        dst_pixel[idx] = 0;
    });

    Ok(())
}
