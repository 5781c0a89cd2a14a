use rasterfx_image::{Channel, ImageError, Rgb8};

use crate::{color, enhance, threshold};

/// A transform whose output pixel depends only on the input pixel at the same coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOp {
    /// `255 - channel` on every channel.
    Invert,
    /// Floor mean of the channels on every channel.
    Greyscale,
    /// White when the channel mean reaches the threshold, black otherwise.
    BlackWhite(u8),
    /// Zero the given channel.
    RemoveChannel(Channel),
    /// Sepia tone, may fault.
    Sepia,
}

impl PointOp {
    /// Transform the pixel found at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Only [`PointOp::Sepia`] can fail, with [`ImageError::ComputationFault`].
    pub fn apply(&self, x: usize, y: usize, p: Rgb8) -> Result<Rgb8, ImageError> {
        Ok(match *self {
            PointOp::Invert => enhance::invert_pixel(p),
            PointOp::Greyscale => color::greyscale_pixel(p),
            PointOp::BlackWhite(cutoff) => threshold::black_white_pixel(p, cutoff),
            PointOp::RemoveChannel(channel) => enhance::remove_channel_pixel(p, channel),
            PointOp::Sepia => color::sepia_pixel(p, x, y)?,
        })
    }
}
