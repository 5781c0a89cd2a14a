#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image representation for filtering purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// RGB pixel and channel types.
pub mod pixel;

/// The RGB8 pixel buffer filters operate on.
pub mod pixel_buffer;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::pixel::{Channel, Rgb8};
pub use crate::pixel_buffer::PixelBuffer;
