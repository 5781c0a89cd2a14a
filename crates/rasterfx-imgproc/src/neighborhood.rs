use rasterfx_image::{Channel, PixelBuffer, Rgb8};

/// Maximum number of pixels in a 3x3 neighborhood.
pub const MAX_NEIGHBORS: usize = 9;

/// Offsets of the 3x3 block around a center, `dx` outer and `dy` inner.
pub const NEIGHBORHOOD_OFFSETS: [(isize, isize); MAX_NEIGHBORS] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The in-bounds pixels of the 3x3 block around a center coordinate, center included.
///
/// Candidates falling outside the image are dropped, never clamped or padded, so the set holds
/// 4 pixels at a corner, 6 along an edge and 9 in the interior of an image of at least 3x3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    pixels: [Rgb8; MAX_NEIGHBORS],
    len: usize,
}

impl Neighborhood {
    /// Collect the neighborhood of `(x, y)` from `src`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterfx_image::PixelBuffer;
    /// use rasterfx_imgproc::neighborhood::Neighborhood;
    ///
    /// let image = PixelBuffer::empty([3, 3].into()).unwrap();
    ///
    /// assert_eq!(Neighborhood::sample(&image, 0, 0).len(), 4);
    /// assert_eq!(Neighborhood::sample(&image, 1, 0).len(), 6);
    /// assert_eq!(Neighborhood::sample(&image, 1, 1).len(), 9);
    /// ```
    pub fn sample(src: &PixelBuffer, x: usize, y: usize) -> Self {
        let mut pixels = [Rgb8::BLACK; MAX_NEIGHBORS];
        let mut len = 0;

        for (dx, dy) in NEIGHBORHOOD_OFFSETS {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                continue;
            };
            // out of range candidates are skipped
            if let Ok(p) = src.get(nx, ny) {
                pixels[len] = p;
                len += 1;
            }
        }

        Self { pixels, len }
    }

    /// Number of sampled pixels.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no pixel was sampled.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The sampled pixels in sampling order.
    pub fn as_slice(&self) -> &[Rgb8] {
        &self.pixels[..self.len]
    }

    /// Iterate the sampled pixels in sampling order.
    pub fn iter(&self) -> impl Iterator<Item = &Rgb8> {
        self.as_slice().iter()
    }

    /// The values of one channel across the neighborhood, sorted ascending.
    ///
    /// Only the first [`Neighborhood::len`] entries are meaningful.
    pub fn sorted_channel(&self, channel: Channel) -> [u8; MAX_NEIGHBORS] {
        let mut values = [0u8; MAX_NEIGHBORS];
        for (v, p) in values.iter_mut().zip(self.iter()) {
            *v = p.channel(channel);
        }
        values[..self.len].sort_unstable();
        values
    }

    /// Per-channel floor mean over the sampled pixels.
    pub fn mean(&self) -> Option<Rgb8> {
        if self.is_empty() {
            return None;
        }

        let n = self.len as u32;
        let mut sum = [0u32; 3];
        for p in self.iter() {
            sum[0] += p.r as u32;
            sum[1] += p.g as u32;
            sum[2] += p.b as u32;
        }

        Some(Rgb8::new(
            (sum[0] / n) as u8,
            (sum[1] / n) as u8,
            (sum[2] / n) as u8,
        ))
    }

    /// Per-channel median over the sampled pixels.
    ///
    /// Each channel is sorted on its own, so the result need not equal any sampled pixel. An even
    /// count takes the floor mean of the two middle values.
    pub fn median(&self) -> Option<Rgb8> {
        if self.is_empty() {
            return None;
        }

        let n = self.len;
        let median_of = |channel| {
            let v = self.sorted_channel(channel);
            if n % 2 == 1 {
                v[n / 2]
            } else {
                ((v[n / 2] as u16 + v[n / 2 - 1] as u16) / 2) as u8
            }
        };

        Some(Rgb8::new(
            median_of(Channel::Red),
            median_of(Channel::Green),
            median_of(Channel::Blue),
        ))
    }
}
