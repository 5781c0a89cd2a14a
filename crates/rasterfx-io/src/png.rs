use std::{fs, fs::File, path::Path};

use png::{BitDepth, ColorType, Decoder, Encoder};
use rasterfx_image::PixelBuffer;

use crate::error::IoError;

/// Read a PNG image with three channels (rgb8).
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// A pixel buffer with three channels (rgb8).
///
/// # Errors
///
/// Any PNG that does not decode to 8-bit RGB, e.g. grayscale, RGBA or palette images, is
/// rejected with [`IoError::PngDecodeError`]. Use [`crate::functional::read_image_any_rgb8`] to
/// convert those.
pub fn read_image_png_rgb8(file_path: impl AsRef<Path>) -> Result<PixelBuffer, IoError> {
    // verify the file exists
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // verify the file extension
    if !has_png_extension(file_path) {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let file = fs::File::open(file_path)?;
    let mut reader = Decoder::new(file)
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    if info.color_type != ColorType::Rgb || info.bit_depth != BitDepth::Eight {
        return Err(IoError::PngDecodeError(format!(
            "expected an 8-bit rgb image, found {:?} with {:?}",
            info.color_type, info.bit_depth
        )));
    }

    buf.truncate(info.buffer_size());

    Ok(PixelBuffer::new(
        [info.width as usize, info.height as usize].into(),
        buf,
    )?)
}

/// Writes the given PNG _(rgb8)_ data to the given file path.
///
/// # Arguments
///
/// - `file_path` - The path to the PNG image.
/// - `image` - The pixel buffer to encode.
pub fn write_image_png_rgb8(
    file_path: impl AsRef<Path>,
    image: &PixelBuffer,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    if !has_png_extension(file_path) {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let file = File::create(file_path)?;
    let mut encoder = Encoder::new(file, image.width() as u32, image.height() as u32);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

    writer
        .write_image_data(image.as_slice())
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

    Ok(())
}

fn has_png_extension(file_path: &Path) -> bool {
    file_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterfx_image::Rgb8;

    #[test]
    fn read_write_png_rgb8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("cy.png");

        let pixels = (0..6u8)
            .map(|i| Rgb8::new(i, 40 * i, 255 - i))
            .collect::<Vec<_>>();
        let image = PixelBuffer::from_pixels([3, 2].into(), &pixels)?;

        write_image_png_rgb8(&file_path, &image)?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        let image_back = read_image_png_rgb8(&file_path)?;
        assert_eq!(image_back.width(), 3);
        assert_eq!(image_back.height(), 2);
        assert_eq!(image_back, image);

        Ok(())
    }

    #[test]
    fn read_png_rejects_rgba() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("rgba.png");

        let file = File::create(&file_path)?;
        let mut encoder = Encoder::new(file, 2, 1);
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
        writer
            .write_image_data(&[1, 2, 3, 255, 4, 5, 6, 255])
            .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

        let result = read_image_png_rgb8(&file_path);
        assert!(matches!(result, Err(IoError::PngDecodeError(_))));

        // the generic reader converts it
        let image = crate::functional::read_image_any_rgb8(&file_path)?;
        assert_eq!(image.get(1, 0)?, Rgb8::new(4, 5, 6));

        Ok(())
    }

    #[test]
    fn png_extension_is_checked() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let image = PixelBuffer::empty([1, 1].into())?;

        let result = write_image_png_rgb8(tmp_dir.path().join("image.jpg"), &image);
        assert!(matches!(result, Err(IoError::InvalidFileExtension(_))));

        write_image_png_rgb8(tmp_dir.path().join("upper.PNG"), &image)?;
        let image_back = read_image_png_rgb8(tmp_dir.path().join("upper.PNG"))?;
        assert_eq!(image_back, image);

        Ok(())
    }
}
