use std::str::FromStr;

use crate::error::ImageError;

/// One of the three color channels of an RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Channel {
    /// The red channel.
    #[default]
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
}

impl Channel {
    /// All channels in memory order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// The interleaved offset of the channel inside a pixel.
    pub fn index(&self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Channel {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Channel::Red),
            "g" | "green" => Ok(Channel::Green),
            "b" | "blue" => Ok(Channel::Blue),
            _ => Err(ImageError::UnknownChannel(s.to_string())),
        }
    }
}

/// An 8-bit RGB pixel without alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb8 {
    /// Red intensity.
    pub r: u8,
    /// Green intensity.
    pub g: u8,
    /// Blue intensity.
    pub b: u8,
}

impl Rgb8 {
    /// All channels at zero.
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);

    /// All channels at full intensity.
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

    /// Create a pixel from its channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a pixel with the same value in every channel.
    pub const fn splat(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Get the value of a single channel.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Return a copy of the pixel with one channel replaced.
    pub fn with_channel(mut self, channel: Channel, val: u8) -> Self {
        match channel {
            Channel::Red => self.r = val,
            Channel::Green => self.g = val,
            Channel::Blue => self.b = val,
        }
        self
    }

    /// Sum of the three channels, in `[0, 765]`.
    pub fn intensity(&self) -> u32 {
        self.r as u32 + self.g as u32 + self.b as u32
    }

    /// Floor of the mean of the three channels.
    pub fn average(&self) -> u8 {
        (self.intensity() / 3) as u8
    }

    /// The channels as an array in memory order.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(v: [u8; 3]) -> Self {
        Rgb8::new(v[0], v[1], v[2])
    }
}

impl From<Rgb8> for [u8; 3] {
    fn from(p: Rgb8) -> Self {
        p.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_from_str() -> Result<(), ImageError> {
        assert_eq!("r".parse::<Channel>()?, Channel::Red);
        assert_eq!("Green".parse::<Channel>()?, Channel::Green);
        assert_eq!("BLUE".parse::<Channel>()?, Channel::Blue);
        assert_eq!(
            "alpha".parse::<Channel>(),
            Err(ImageError::UnknownChannel("alpha".to_string()))
        );
        Ok(())
    }

    #[test]
    fn pixel_channels() {
        let p = Rgb8::new(10, 20, 30);
        assert_eq!(p.channel(Channel::Green), 20);
        assert_eq!(p.with_channel(Channel::Blue, 0), Rgb8::new(10, 20, 0));
        assert_eq!(p.to_array(), [10, 20, 30]);
        assert_eq!(Rgb8::from([1, 2, 3]), Rgb8::new(1, 2, 3));
    }

    #[test]
    fn pixel_intensity_and_average() {
        assert_eq!(Rgb8::WHITE.intensity(), 765);
        assert_eq!(Rgb8::WHITE.average(), 255);
        // 1 + 1 + 0 = 2, floor(2 / 3) = 0
        assert_eq!(Rgb8::new(1, 1, 0).average(), 0);
        assert_eq!(Rgb8::new(100, 150, 200).average(), 150);
    }
}
