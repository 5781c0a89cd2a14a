use crate::{error::ImageError, image::Image, image::ImageSize, pixel::Rgb8};

/// An 8-bit RGB image, the buffer every filter reads from and writes into.
pub type PixelBuffer = Image<u8, 3>;

impl Image<u8, 3> {
    /// Allocate a black buffer of the given size.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterfx_image::{PixelBuffer, Rgb8};
    ///
    /// let buffer = PixelBuffer::empty([3, 2].into()).unwrap();
    /// assert_eq!(buffer.get(2, 1).unwrap(), Rgb8::BLACK);
    /// ```
    pub fn empty(size: ImageSize) -> Result<Self, ImageError> {
        Self::from_size_val(size, 0)
    }

    /// Create a buffer from a row-major list of pixels.
    pub fn from_pixels(size: ImageSize, pixels: &[Rgb8]) -> Result<Self, ImageError> {
        let data = pixels.iter().flat_map(|p| p.to_array()).collect();
        Self::new(size, data)
    }

    /// Create a buffer with every pixel set to `pixel`.
    pub fn filled(size: ImageSize, pixel: Rgb8) -> Result<Self, ImageError> {
        let mut buffer = Self::empty(size)?;
        buffer
            .as_slice_mut()
            .chunks_exact_mut(3)
            .for_each(|dst| dst.copy_from_slice(&pixel.to_array()));
        Ok(buffer)
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] outside `[0, W) x [0, H)`.
    pub fn get(&self, x: usize, y: usize) -> Result<Rgb8, ImageError> {
        let p = self.pixel_slice(x, y)?;
        Ok(Rgb8::new(p[0], p[1], p[2]))
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] outside `[0, W) x [0, H)`.
    pub fn set(&mut self, x: usize, y: usize, pixel: Rgb8) -> Result<(), ImageError> {
        self.pixel_slice_mut(x, y)?.copy_from_slice(&pixel.to_array());
        Ok(())
    }

    /// Iterate the pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb8> + '_ {
        self.as_slice()
            .chunks_exact(3)
            .map(|p| Rgb8::new(p[0], p[1], p[2]))
    }
}
