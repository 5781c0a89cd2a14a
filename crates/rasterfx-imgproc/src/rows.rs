use rasterfx_image::{Image, ImageError, PixelBuffer, Rgb8};

/// Check that two images have the same size.
pub fn check_same_size<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &Image<T2, C2>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }
    Ok(())
}

/// Apply a function to each pixel of the image, row by row.
///
/// Each call sees one source pixel and the destination pixel at the same coordinate, so no call
/// can observe a value written by another.
///
/// PRECONDITION: `src` and `dst` must have the same size.
pub fn iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    mut f: impl FnMut(&[T1], &mut [T2]),
) {
    let cols = src.cols();
    src.as_slice()
        .chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each channel value of the image, row by row.
///
/// PRECONDITION: `src` and `dst` must have the same size.
pub fn iter_rows_val<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    mut f: impl FnMut(&T1, &mut T2),
) {
    src.as_slice()
        .iter()
        .zip(dst.as_slice_mut().iter_mut())
        .for_each(|(src_val, dst_val)| f(src_val, dst_val));
}

/// Rewrite every pixel of the image in place with its coordinate.
pub fn iter_pixels_in_place<T, const C: usize>(
    image: &mut Image<T, C>,
    mut f: impl FnMut(usize, usize, &mut [T]),
) {
    let cols = image.cols();
    image
        .as_slice_mut()
        .chunks_exact_mut(C * cols)
        .enumerate()
        .for_each(|(y, row)| {
            row.chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, pixel)| f(x, y, pixel));
        });
}

/// Rewrite every RGB8 pixel in place with `f(x, y, pixel)`.
///
/// A pixel for which `f` fails keeps its current value and the sweep carries on.
///
/// # Returns
///
/// The number of pixels left unchanged because `f` failed.
pub fn map_rgb8_in_place(
    image: &mut PixelBuffer,
    mut f: impl FnMut(usize, usize, Rgb8) -> Result<Rgb8, ImageError>,
) -> usize {
    let mut faults = 0;
    iter_pixels_in_place(image, |x, y, pixel| {
        match f(x, y, Rgb8::new(pixel[0], pixel[1], pixel[2])) {
            Ok(p) => pixel.copy_from_slice(&p.to_array()),
            Err(_) => faults += 1,
        }
    });
    faults
}
