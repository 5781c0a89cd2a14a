use std::path::Path;

use rasterfx_image::{ImageSize, PixelBuffer};

use crate::error::IoError;

/// Reads an RGB8 image from the given file path.
///
/// The method tries to read from any image format supported by the image crate. Grayscale and
/// alpha images are converted to RGB8, dropping the alpha channel.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// A pixel buffer with three channels (rgb8).
///
/// # Errors
///
/// [`IoError::FileDoesNotExist`] if nothing exists at the path and
/// [`IoError::ImageDecodeError`] if the content cannot be decoded.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<PixelBuffer, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let image = PixelBuffer::new(size, img.into_rgb8().into_raw())?;

    log::debug!("decoded {} with {}", file_path.display(), image.size());

    Ok(image)
}

/// Writes an RGB8 image to the given file path.
///
/// The format is picked from the file extension.
///
/// # Arguments
///
/// * `file_path` - The path to the output image.
/// * `image` - The pixel buffer to encode.
///
/// # Errors
///
/// [`IoError::InvalidFileExtension`] if the extension names no known format,
/// [`IoError::FileError`] if the file cannot be written and [`IoError::ImageEncodeError`] if the
/// encoder fails.
pub fn write_image_any_rgb8(file_path: impl AsRef<Path>, image: &PixelBuffer) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let format = image::ImageFormat::from_path(file_path)
        .map_err(|_| IoError::InvalidFileExtension(file_path.to_path_buf()))?;

    image::save_buffer_with_format(
        file_path,
        image.as_slice(),
        image.width() as u32,
        image.height() as u32,
        image::ColorType::Rgb8,
        format,
    )
    .map_err(|e| match e {
        image::ImageError::IoError(e) => IoError::FileError(e),
        e => IoError::ImageEncodeError(e),
    })?;

    log::debug!("encoded {} as {format:?}", file_path.display());

    Ok(())
}
