use rasterfx_image::{ImageError, PixelBuffer, Rgb8};

use super::kernels;
use crate::{neighborhood::Neighborhood, rows};

/// Smooth an image with the floor mean of each pixel's 3x3 neighborhood.
///
/// The center takes part in its own mean. Border pixels average over the 4 or 6 pixels that
/// exist instead of padding, so their response differs from a padded convolution.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, 3).
/// * `dst` - The destination image with shape (H, W, 3).
///
/// Only `src` is read, never the partially written `dst`.
///
/// # Example
///
/// ```
/// use rasterfx_image::{PixelBuffer, Rgb8};
/// use rasterfx_imgproc::filter::neighbor_average;
///
/// let image = PixelBuffer::filled([4, 4].into(), Rgb8::new(10, 20, 30)).unwrap();
/// let mut smoothed = PixelBuffer::empty(image.size()).unwrap();
///
/// neighbor_average(&image, &mut smoothed).unwrap();
/// assert_eq!(smoothed, image);
/// ```
pub fn neighbor_average(src: &PixelBuffer, dst: &mut PixelBuffer) -> Result<(), ImageError> {
    rows::check_same_size(src, dst)?;

    rows::iter_pixels_in_place(dst, |x, y, dst_pixel| {
        if let Some(p) = Neighborhood::sample(src, x, y).mean() {
            dst_pixel.copy_from_slice(&p.to_array());
        }
    });

    Ok(())
}

/// Denoise an image with the per-channel median of each pixel's 3x3 neighborhood.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, 3).
/// * `dst` - The destination image with shape (H, W, 3).
///
/// Only `src` is read, never the partially written `dst`.
pub fn neighbor_median(src: &PixelBuffer, dst: &mut PixelBuffer) -> Result<(), ImageError> {
    rows::check_same_size(src, dst)?;

    rows::iter_pixels_in_place(dst, |x, y, dst_pixel| {
        if let Some(p) = Neighborhood::sample(src, x, y).median() {
            dst_pixel.copy_from_slice(&p.to_array());
        }
    });

    Ok(())
}

/// Compute the Sobel gradient magnitude as a greyscale edge map.
///
/// Each neighbor is reduced to its summed `r + g + b` intensity, both 3x3 Sobel tables are
/// applied and the Euclidean length is scaled from `[0, SOBEL_MAX_MAGNITUDE]` to `[0, 255]`.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, 3).
/// * `dst` - The destination image with shape (H, W, 3).
///
/// Only interior pixels (`1 <= x <= W - 2`, `1 <= y <= H - 2`) are written. The border of `dst`
/// keeps whatever it held, so pass an empty buffer to get a black border.
pub fn sobel_edges(src: &PixelBuffer, dst: &mut PixelBuffer) -> Result<(), ImageError> {
    rows::check_same_size(src, dst)?;

    let x_end = src.width().saturating_sub(1);
    let y_end = src.height().saturating_sub(1);

    for y in 1..y_end {
        for x in 1..x_end {
            let mut block = [[0i32; 3]; 3];
            for (row, values) in block.iter_mut().enumerate() {
                for (col, v) in values.iter_mut().enumerate() {
                    *v = src.get(x + col - 1, y + row - 1)?.intensity() as i32;
                }
            }

            let (kx, ky) = kernels::sobel_response(&block);
            dst.set(x, y, Rgb8::splat(kernels::normalized_magnitude(kx, ky)))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: usize, height: usize) -> Result<PixelBuffer, ImageError> {
        let pixels = (0..width * height)
            .map(|i| {
                let (x, y) = (i % width, i / width);
                if (x + y) % 2 == 0 {
                    Rgb8::WHITE
                } else {
                    Rgb8::BLACK
                }
            })
            .collect::<Vec<_>>();
        PixelBuffer::from_pixels([width, height].into(), &pixels)
    }

    #[test]
    fn average_uniform_is_identity() -> Result<(), ImageError> {
        let image = PixelBuffer::filled([5, 4].into(), Rgb8::new(7, 99, 201))?;
        let mut dst = image.clone();
        neighbor_average(&image, &mut dst)?;
        assert_eq!(dst, image);
        Ok(())
    }

    #[test]
    fn average_ramp() -> Result<(), ImageError> {
        // 0 1 2
        // 3 4 5
        // 6 7 8
        let pixels = (0..9).map(Rgb8::splat).collect::<Vec<_>>();
        let image = PixelBuffer::from_pixels([3, 3].into(), &pixels)?;
        let mut dst = image.clone();
        neighbor_average(&image, &mut dst)?;

        let expected = [2, 2, 3, 3, 4, 4, 5, 5, 6];
        let got = dst.pixels().map(|p| p.r).collect::<Vec<_>>();
        assert_eq!(got, expected);
        Ok(())
    }

    #[test]
    fn average_reads_only_source() -> Result<(), ImageError> {
        let image = checkerboard(4, 4)?;
        let mut from_clone = image.clone();
        let mut from_empty = PixelBuffer::empty(image.size())?;
        neighbor_average(&image, &mut from_clone)?;
        neighbor_average(&image, &mut from_empty)?;
        assert_eq!(from_clone, from_empty);
        Ok(())
    }

    #[test]
    fn median_uniform_is_identity() -> Result<(), ImageError> {
        let image = PixelBuffer::filled([3, 6].into(), Rgb8::new(1, 2, 3))?;
        let mut dst = image.clone();
        neighbor_median(&image, &mut dst)?;
        assert_eq!(dst, image);
        Ok(())
    }

    #[test]
    fn median_removes_salt_noise() -> Result<(), ImageError> {
        let mut image = PixelBuffer::filled([3, 3].into(), Rgb8::splat(50))?;
        image.set(1, 1, Rgb8::WHITE)?;
        let mut dst = image.clone();
        neighbor_median(&image, &mut dst)?;
        assert_eq!(dst.get(1, 1)?, Rgb8::splat(50));
        Ok(())
    }

    #[test]
    fn median_checkerboard_center() -> Result<(), ImageError> {
        // corners and center are white: 5 of 9 cells
        let image = checkerboard(3, 3)?;
        let mut dst = image.clone();
        neighbor_median(&image, &mut dst)?;
        assert_eq!(dst.get(1, 1)?, Rgb8::WHITE);
        // corner (0, 0): [W, B, B, W] sorted [0, 0, 255, 255] -> (0 + 255) / 2
        assert_eq!(dst.get(0, 0)?, Rgb8::splat(127));
        Ok(())
    }

    #[test]
    fn neighborhood_filters_size_mismatch() -> Result<(), ImageError> {
        let image = PixelBuffer::empty([3, 3].into())?;
        let mut dst = PixelBuffer::empty([2, 3].into())?;
        assert_eq!(
            neighbor_average(&image, &mut dst),
            Err(ImageError::InvalidImageSize(3, 3, 2, 3))
        );
        assert!(neighbor_median(&image, &mut dst).is_err());
        assert!(sobel_edges(&image, &mut dst).is_err());
        Ok(())
    }

    #[test]
    fn sobel_uniform_is_black() -> Result<(), ImageError> {
        let image = PixelBuffer::filled([6, 5].into(), Rgb8::new(200, 10, 90))?;
        let mut dst = PixelBuffer::empty(image.size())?;
        sobel_edges(&image, &mut dst)?;
        assert!(dst.pixels().all(|p| p == Rgb8::BLACK));
        Ok(())
    }

    #[test]
    fn sobel_vertical_edge() -> Result<(), ImageError> {
        // left half black, right half white
        let (width, height) = (4, 3);
        let pixels = (0..width * height)
            .map(|i| if i % width < 2 { Rgb8::BLACK } else { Rgb8::WHITE })
            .collect::<Vec<_>>();
        let image = PixelBuffer::from_pixels([width, height].into(), &pixels)?;
        let mut dst = PixelBuffer::empty(image.size())?;
        sobel_edges(&image, &mut dst)?;

        // kx = 4 * 765 = 3060 at both interior pixels
        assert_eq!(dst.get(1, 1)?, Rgb8::splat(180));
        assert_eq!(dst.get(2, 1)?, Rgb8::splat(180));

        // border untouched
        for x in 0..width {
            assert_eq!(dst.get(x, 0)?, Rgb8::BLACK);
            assert_eq!(dst.get(x, height - 1)?, Rgb8::BLACK);
        }
        assert_eq!(dst.get(0, 1)?, Rgb8::BLACK);
        assert_eq!(dst.get(3, 1)?, Rgb8::BLACK);
        Ok(())
    }

    #[test]
    fn sobel_leaves_border_of_destination() -> Result<(), ImageError> {
        let image = checkerboard(3, 3)?;
        let mut dst = PixelBuffer::filled(image.size(), Rgb8::splat(9))?;
        sobel_edges(&image, &mut dst)?;
        assert_eq!(dst.get(0, 0)?, Rgb8::splat(9));
        // checkerboard center: every term cancels
        assert_eq!(dst.get(1, 1)?, Rgb8::BLACK);
        Ok(())
    }

    #[test]
    fn sobel_thin_images_have_no_interior() -> Result<(), ImageError> {
        for size in [[1, 1], [2, 5], [5, 2]] {
            let image = checkerboard(size[0], size[1])?;
            let mut dst = PixelBuffer::empty(image.size())?;
            sobel_edges(&image, &mut dst)?;
            assert!(dst.pixels().all(|p| p == Rgb8::BLACK));
        }
        Ok(())
    }
}
