//! Small value types shared by the encoder and the writers: the `Fill` color
//! of a pixel and the unit `SvgRect` emitted for it.
use std::fmt;

use image::Rgba;

/// RGB part of a pixel, rendered as a lowercase `#rrggbb` string.
/// Alpha is intentionally absent: it only decides whether a rect exists.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Fill {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Rgba<u8>> for Fill {
    fn from(pixel: Rgba<u8>) -> Self {
        let [r, g, b, _] = pixel.0;
        Self { r, g, b }
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A 1×1 rectangle covering the pixel at (`x`, `y`).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SvgRect {
    pub x: u32,
    pub y: u32,
    pub fill: Fill,
}

impl fmt::Display for SvgRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<rect x='{}' y='{}' width='1' height='1' fill='{}'/>",
            self.x, self.y, self.fill
        )
    }
}
