use std::str::FromStr;
use std::time::Instant;

use rasterfx_image::{Channel, ImageError, ImageSize, PixelBuffer};

use crate::{filter, point::PointOp, resize, rows, threshold};

/// Errors that can occur when parsing a filter name.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FilterParseError {
    /// The name does not match any filter.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// The channel selector of `removecolor:<channel>` is invalid.
    #[error("Invalid filter option. {0}")]
    InvalidOption(#[from] ImageError),
}

/// How the destination buffer of a filter starts out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationInit {
    /// A deep copy of the source.
    CloneSource,
    /// A black buffer of the output size.
    Empty,
}

/// Which buffer a filter reads its input pixels from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadSource {
    /// The read-only source buffer.
    Source,
    /// The destination buffer itself, one pixel rewritten in place at a time.
    Destination,
}

/// The buffer configuration a filter runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterPlan {
    /// How the destination is initialized.
    pub destination: DestinationInit,
    /// Where input pixels are read from.
    pub read_from: ReadSource,
}

/// The operation a filter runs, one per implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Rewrite each pixel from its own value.
    Point(PointOp),
    /// Nearest neighbor upscaling by two.
    Double,
    /// 3x3 neighborhood mean.
    NeighborAverage,
    /// 3x3 neighborhood per-channel median.
    NeighborMedian,
    /// Sobel gradient magnitude.
    Sobel,
}

/// The catalog of filters the engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Invert every channel.
    Invert,
    /// Unweighted channel mean.
    Greyscale,
    /// Binarize on the channel mean.
    BlackWhite,
    /// Zero one channel.
    RemoveChannel(Channel),
    /// Sepia tone.
    Sepia,
    /// Nearest neighbor upscaling by two.
    Double,
    /// 3x3 neighborhood mean.
    NeighborAverage,
    /// 3x3 neighborhood per-channel median.
    NeighborMedian,
    /// Sobel gradient magnitude.
    Sobel,
}

impl FilterKind {
    /// Every filter, with the red channel for [`FilterKind::RemoveChannel`].
    pub const ALL: [FilterKind; 9] = [
        FilterKind::Invert,
        FilterKind::Greyscale,
        FilterKind::BlackWhite,
        FilterKind::RemoveChannel(Channel::Red),
        FilterKind::Sepia,
        FilterKind::Double,
        FilterKind::NeighborAverage,
        FilterKind::NeighborMedian,
        FilterKind::Sobel,
    ];

    /// The canonical name, accepted back by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::Invert => "invert",
            FilterKind::Greyscale => "greyscale",
            FilterKind::BlackWhite => "blackwhite",
            FilterKind::RemoveChannel(_) => "removecolor",
            FilterKind::Sepia => "sepia",
            FilterKind::Double => "double",
            FilterKind::NeighborAverage => "average",
            FilterKind::NeighborMedian => "median",
            FilterKind::Sobel => "sobel",
        }
    }

    /// The tag a caller splices into the output file name.
    pub fn suffix(&self) -> &'static str {
        match self {
            FilterKind::Invert => "_inv",
            FilterKind::Greyscale => "_grey",
            FilterKind::BlackWhite => "_bw",
            FilterKind::RemoveChannel(_) => "_rc",
            FilterKind::Sepia => "_sepia",
            FilterKind::Double => "_double",
            FilterKind::NeighborAverage => "_avg",
            FilterKind::NeighborMedian => "_median",
            FilterKind::Sobel => "_sobel",
        }
    }

    /// The operation behind the filter.
    pub fn op(&self) -> FilterOp {
        match *self {
            FilterKind::Invert => FilterOp::Point(PointOp::Invert),
            FilterKind::Greyscale => FilterOp::Point(PointOp::Greyscale),
            FilterKind::BlackWhite => {
                FilterOp::Point(PointOp::BlackWhite(threshold::BLACK_WHITE_THRESHOLD))
            }
            FilterKind::RemoveChannel(channel) => FilterOp::Point(PointOp::RemoveChannel(channel)),
            FilterKind::Sepia => FilterOp::Point(PointOp::Sepia),
            FilterKind::Double => FilterOp::Double,
            FilterKind::NeighborAverage => FilterOp::NeighborAverage,
            FilterKind::NeighborMedian => FilterOp::NeighborMedian,
            FilterKind::Sobel => FilterOp::Sobel,
        }
    }

    /// The buffer configuration of the filter.
    ///
    /// Per-pixel filters rewrite a copy of the source in place. Neighborhood filters also start
    /// from a copy but only ever read the source. Double and Sobel start from a black buffer so
    /// that no source pixel leaks into pixels they do not write.
    pub fn plan(&self) -> FilterPlan {
        match self.op() {
            FilterOp::Point(_) => FilterPlan {
                destination: DestinationInit::CloneSource,
                read_from: ReadSource::Destination,
            },
            FilterOp::NeighborAverage | FilterOp::NeighborMedian => FilterPlan {
                destination: DestinationInit::CloneSource,
                read_from: ReadSource::Source,
            },
            FilterOp::Double | FilterOp::Sobel => FilterPlan {
                destination: DestinationInit::Empty,
                read_from: ReadSource::Source,
            },
        }
    }

    /// The size of the filter output for a source of the given size.
    ///
    /// # Errors
    ///
    /// [`ImageError::InvalidDimensions`] if the doubled size of [`FilterKind::Double`] overflows.
    pub fn output_size(&self, src: ImageSize) -> Result<ImageSize, ImageError> {
        match self {
            FilterKind::Double => src.doubled(),
            _ => Ok(src),
        }
    }
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FilterKind::RemoveChannel(channel) => write!(f, "{}:{channel}", self.name()),
            _ => write!(f, "{}", self.name()),
        }
    }
}

impl FromStr for FilterKind {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let (name, option) = match lower.split_once(':') {
            Some((name, option)) => (name, Some(option)),
            None => (lower.as_str(), None),
        };

        let kind = match name {
            "invert" | "inv" => FilterKind::Invert,
            "greyscale" | "grayscale" | "grey" | "gray" => FilterKind::Greyscale,
            "blackwhite" | "bw" => FilterKind::BlackWhite,
            "removecolor" | "rc" => {
                let channel = option.map(Channel::from_str).transpose()?;
                return Ok(FilterKind::RemoveChannel(channel.unwrap_or_default()));
            }
            "sepia" => FilterKind::Sepia,
            "double" => FilterKind::Double,
            "average" | "avg" => FilterKind::NeighborAverage,
            "median" => FilterKind::NeighborMedian,
            "sobel" => FilterKind::Sobel,
            _ => return Err(FilterParseError::UnknownFilter(s.to_string())),
        };

        // only removecolor takes an option
        if option.is_some() {
            return Err(FilterParseError::UnknownFilter(s.to_string()));
        }

        Ok(kind)
    }
}

/// A processed buffer together with the filter that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutput {
    /// The filter that ran.
    pub kind: FilterKind,
    /// The output file name tag of the filter.
    pub suffix: &'static str,
    /// The destination buffer.
    pub image: PixelBuffer,
}

/// Receives the output of a filter run, taking ownership of the buffer.
pub trait ImageSink {
    /// The error the sink reports.
    type Error: From<ImageError>;

    /// Consume one filter output.
    fn consume(&mut self, output: FilterOutput) -> Result<(), Self::Error>;
}

/// Collect outputs in memory, e.g. to present them.
impl ImageSink for Vec<FilterOutput> {
    type Error = ImageError;

    fn consume(&mut self, output: FilterOutput) -> Result<(), Self::Error> {
        self.push(output);
        Ok(())
    }
}

/// Runs filters from the catalog against one source image.
///
/// The source is never modified. Every call builds its own destination buffer, so no state
/// carries over from one filter to the next.
///
/// # Example
///
/// ```
/// use rasterfx_image::{ImageSize, PixelBuffer, Rgb8};
/// use rasterfx_imgproc::engine::{FilterKind, ImageFilterEngine};
///
/// let image = PixelBuffer::filled([4, 3].into(), Rgb8::new(10, 20, 30)).unwrap();
/// let engine = ImageFilterEngine::new(image);
///
/// let output = engine.apply(FilterKind::Double).unwrap();
/// assert_eq!(output.suffix, "_double");
/// assert_eq!(output.image.size(), ImageSize::from([8, 6]));
/// ```
#[derive(Debug, Clone)]
pub struct ImageFilterEngine {
    source: PixelBuffer,
}

impl ImageFilterEngine {
    /// Create an engine over a decoded source image.
    pub fn new(source: PixelBuffer) -> Self {
        Self { source }
    }

    /// The source image.
    pub fn source(&self) -> &PixelBuffer {
        &self.source
    }

    /// Give the source image back.
    pub fn into_source(self) -> PixelBuffer {
        self.source
    }

    /// Run a filter and return its output.
    ///
    /// # Errors
    ///
    /// Fails before any output exists; a partially written buffer is never returned.
    pub fn apply(&self, kind: FilterKind) -> Result<FilterOutput, ImageError> {
        log::debug!("applying {kind} to {}", self.source.size());
        let start = Instant::now();

        let image = self.render(kind)?;

        log::trace!("{kind} took {:?}", start.elapsed());

        Ok(FilterOutput {
            kind,
            suffix: kind.suffix(),
            image,
        })
    }

    /// Run a filter and hand its output to `sink`.
    pub fn run<S: ImageSink>(&self, kind: FilterKind, sink: &mut S) -> Result<(), S::Error> {
        let output = self.apply(kind)?;
        sink.consume(output)
    }

    /// Run several filters in order, each from the untouched source.
    pub fn run_all<S: ImageSink>(&self, kinds: &[FilterKind], sink: &mut S) -> Result<(), S::Error> {
        for kind in kinds {
            self.run(*kind, sink)?;
        }
        Ok(())
    }

    fn render(&self, kind: FilterKind) -> Result<PixelBuffer, ImageError> {
        let src = &self.source;

        let mut dst = match kind.plan().destination {
            DestinationInit::CloneSource => src.clone(),
            DestinationInit::Empty => PixelBuffer::empty(kind.output_size(src.size())?)?,
        };

        match kind.op() {
            FilterOp::Point(op) => {
                let faults = rows::map_rgb8_in_place(&mut dst, |x, y, p| op.apply(x, y, p));
                if faults > 0 {
                    log::warn!("{kind} left {faults} pixels unchanged after computation faults");
                }
            }
            FilterOp::Double => resize::double_size(src, &mut dst)?,
            FilterOp::NeighborAverage => filter::neighbor_average(src, &mut dst)?,
            FilterOp::NeighborMedian => filter::neighbor_median(src, &mut dst)?,
            FilterOp::Sobel => filter::sobel_edges(src, &mut dst)?,
        }

        Ok(dst)
    }
}
