use rasterfx_image::{ImageError, PixelBuffer, Rgb8};

use crate::rows;

/// Replace a pixel by the floor mean of its three channels.
pub fn greyscale_pixel(p: Rgb8) -> Rgb8 {
    Rgb8::splat(p.average())
}

/// Convert an RGB8 image to grey using the unweighted channel mean:
///
/// Y = floor((R + G + B) / 3)
///
/// The result keeps three channels, all equal to Y.
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
/// use rasterfx_imgproc::color::greyscale_average;
///
/// let image = PixelBuffer::filled([4, 5].into(), Rgb8::new(10, 20, 31)).unwrap();
/// let mut grey = PixelBuffer::empty(image.size()).unwrap();
///
/// greyscale_average(&image, &mut grey).unwrap();
/// assert_eq!(grey.get(3, 4).unwrap(), Rgb8::splat(20));
/// ```
pub fn greyscale_average(src: &PixelBuffer, dst: &mut PixelBuffer) -> Result<(), ImageError> {
    rows::check_same_size(src, dst)?;

    rows::iter_rows(src, dst, |src_pixel, dst_pixel| {
        let avg = greyscale_pixel(Rgb8::new(src_pixel[0], src_pixel[1], src_pixel[2]));
        dst_pixel.copy_from_slice(&avg.to_array());
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greyscale_channels_match() -> Result<(), ImageError> {
        let pixels = (0..16u8)
            .map(|i| Rgb8::new(i * 13, 255 - i * 7, i * i))
            .collect::<Vec<_>>();
        let image = PixelBuffer::from_pixels([4, 4].into(), &pixels)?;
        let mut grey = PixelBuffer::empty(image.size())?;
        greyscale_average(&image, &mut grey)?;

        for (src_p, dst_p) in image.pixels().zip(grey.pixels()) {
            assert_eq!(dst_p.r, dst_p.g);
            assert_eq!(dst_p.g, dst_p.b);
            assert_eq!(dst_p.r as u32, src_p.intensity() / 3);
        }
        Ok(())
    }

    #[test]
    fn greyscale_floors() {
        // 255 + 255 + 254 = 764, 764 / 3 = 254.67
        assert_eq!(greyscale_pixel(Rgb8::new(255, 255, 254)), Rgb8::splat(254));
        assert_eq!(greyscale_pixel(Rgb8::new(100, 150, 200)), Rgb8::splat(150));
    }
}
