use rasterfx_image::{ImageError, PixelBuffer, Rgb8};

use crate::rows;

/// Sepia tone weights, one row per output channel, one column per input channel.
pub const SEPIA_WEIGHTS: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Tone a single pixel with the sepia weights.
///
/// Every output channel is computed from the same snapshot of the input `r, g, b`, then
/// truncated toward zero and clamped to `[0, 255]`.
///
/// # Errors
///
/// [`ImageError::ComputationFault`] if a weighted sum is not finite; `x` and `y` only label it.
pub fn sepia_pixel(p: Rgb8, x: usize, y: usize) -> Result<Rgb8, ImageError> {
    let input = [p.r as f64, p.g as f64, p.b as f64];
    let mut out = [0u8; 3];

    for (o, weights) in out.iter_mut().zip(SEPIA_WEIGHTS.iter()) {
        let v: f64 = weights.iter().zip(input.iter()).map(|(w, c)| w * c).sum();
        if !v.is_finite() {
            return Err(ImageError::ComputationFault(x, y));
        }
        *o = v.trunc().clamp(0.0, 255.0) as u8;
    }

    Ok(Rgb8::from(out))
}

/// Apply a sepia tone to an RGB8 image.
///
/// A pixel whose computation faults is skipped: it keeps its source value and the remaining
/// pixels are still processed.
///
/// # Arguments
///
/// * `src` - The input RGB8 image.
/// * `dst` - The output RGB8 image.
///
/// # Returns
///
/// The number of skipped pixels.
///
/// Precondition: the input and output images must have the same size.
pub fn sepia(src: &PixelBuffer, dst: &mut PixelBuffer) -> Result<usize, ImageError> {
    rows::check_same_size(src, dst)?;

    dst.as_slice_mut().copy_from_slice(src.as_slice());
    let faults = rows::map_rgb8_in_place(dst, |x, y, p| sepia_pixel(p, x, y));

    if faults > 0 {
        log::warn!("sepia left {faults} pixels unchanged after computation faults");
    }

    Ok(faults)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The historical variant where the updated red feeds the green formula and the updated
    /// red and green feed the blue one.
    fn sepia_compounding(p: Rgb8) -> Rgb8 {
        let (r, g, b) = (p.r as f64, p.g as f64, p.b as f64);
        let r = (r * 0.393 + g * 0.769 + b * 0.189).trunc();
        let g = (r * 0.349 + g * 0.686 + b * 0.168).trunc();
        let b = (r * 0.272 + g * 0.534 + b * 0.131).trunc();
        Rgb8::new(
            r.clamp(0.0, 255.0) as u8,
            g.clamp(0.0, 255.0) as u8,
            b.clamp(0.0, 255.0) as u8,
        )
    }

    #[test]
    fn sepia_reference_pixel() -> Result<(), ImageError> {
        // r = 39.3 + 115.35 + 37.8 = 192.45
        // g = 34.9 + 102.9 + 33.6 = 171.4
        // b = 27.2 + 80.1 + 26.2 = 133.5
        let p = sepia_pixel(Rgb8::new(100, 150, 200), 0, 0)?;
        assert_eq!(p, Rgb8::new(192, 171, 133));
        Ok(())
    }

    #[test]
    fn sepia_differs_from_compounding_variant() -> Result<(), ImageError> {
        let input = Rgb8::new(100, 150, 200);
        // g = 192 * 0.349 + 102.9 + 33.6 = 203.5
        // b = 192 * 0.272 + 203 * 0.534 + 26.2 = 186.8
        assert_eq!(sepia_compounding(input), Rgb8::new(192, 203, 186));

        let corrected = sepia_pixel(input, 0, 0)?;
        assert_eq!(corrected.r, sepia_compounding(input).r);
        assert_ne!(corrected.g, sepia_compounding(input).g);
        assert_ne!(corrected.b, sepia_compounding(input).b);
        Ok(())
    }

    #[test]
    fn sepia_clamps_white() -> Result<(), ImageError> {
        // 344.5, 306.8 and 238.9 before clamping
        assert_eq!(sepia_pixel(Rgb8::WHITE, 0, 0)?, Rgb8::new(255, 255, 238));
        assert_eq!(sepia_pixel(Rgb8::BLACK, 0, 0)?, Rgb8::BLACK);
        Ok(())
    }

    #[test]
    fn sepia_image() -> Result<(), ImageError> {
        let image = PixelBuffer::from_pixels(
            [2, 1].into(),
            &[Rgb8::new(100, 150, 200), Rgb8::new(10, 20, 30)],
        )?;
        let mut dst = PixelBuffer::empty(image.size())?;

        let faults = sepia(&image, &mut dst)?;

        assert_eq!(faults, 0);
        assert_eq!(dst.get(0, 0)?, Rgb8::new(192, 171, 133));
        assert_eq!(dst.get(1, 0)?, Rgb8::new(24, 22, 17));
        Ok(())
    }
}
