use rasterfx_image::{Image, ImageError};

/// Double the size of an image with nearest neighbor replication.
///
/// Every source pixel `(x, y)` is copied to the 2x2 block starting at `(2x, 2y)` of `dst`.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
/// * `dst` - The output image with shape (2H, 2W, C).
///
/// # Example
///
/// ```
/// use rasterfx_image::{Image, ImageSize};
/// use rasterfx_imgproc::resize::double_size;
///
/// let image = Image::<u8, 1>::new(ImageSize { width: 2, height: 1 }, vec![1, 2]).unwrap();
/// let mut doubled = Image::<u8, 1>::from_size_val(image.size().doubled().unwrap(), 0).unwrap();
///
/// double_size(&image, &mut doubled).unwrap();
/// assert_eq!(doubled.as_slice(), &[1, 1, 2, 2, 1, 1, 2, 2]);
/// ```
pub fn double_size<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError>
where
    T: Copy,
{
    let expected = src.size().doubled()?;
    if dst.size() != expected {
        return Err(ImageError::InvalidImageSize(
            expected.width,
            expected.height,
            dst.cols(),
            dst.rows(),
        ));
    }

    let src_row_len = src.cols() * C;
    let dst_row_len = dst.cols() * C;

    for (src_row, dst_rows) in src
        .as_slice()
        .chunks_exact(src_row_len)
        .zip(dst.as_slice_mut().chunks_exact_mut(2 * dst_row_len))
    {
        let (top, bottom) = dst_rows.split_at_mut(dst_row_len);
        for (src_pixel, dst_pair) in src_row.chunks_exact(C).zip(top.chunks_exact_mut(2 * C)) {
            dst_pair[..C].copy_from_slice(src_pixel);
            dst_pair[C..].copy_from_slice(src_pixel);
        }
        bottom.copy_from_slice(top);
    }

    Ok(())
}
