mod gray;
mod sepia;

pub use gray::{greyscale_average, greyscale_pixel};
pub use sepia::{sepia, sepia_pixel, SEPIA_WEIGHTS};
