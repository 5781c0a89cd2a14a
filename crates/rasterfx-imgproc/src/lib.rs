#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image enhancement module.
pub mod enhance;

/// filter catalog and the engine that runs it.
pub mod engine;

/// image filtering module.
pub mod filter;

/// 3x3 neighborhood sampling.
pub mod neighborhood;

/// per-pixel transforms.
pub mod point;

/// utility functions for resizing images.
pub mod resize;

/// row and pixel iteration utilities.
pub mod rows;

/// operations to threshold images.
pub mod threshold;

pub use crate::engine::{FilterKind, FilterOutput, ImageFilterEngine, ImageSink};
