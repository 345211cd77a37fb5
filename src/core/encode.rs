//! Pixel-to-SVG encoder. Every pixel with a non-zero alpha becomes one 1×1
//! `<rect>`; fully transparent pixels are skipped. Nothing is merged.
use image::RgbaImage;

use crate::error::{Error, Result};
use crate::types::{Fill, SvgRect};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A finished, whitespace-normalized SVG document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    rect_count: usize,
    text: String,
}

impl SvgDocument {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of `<rect>` elements, i.e. visible pixels
    pub fn rect_count(&self) -> usize {
        self.rect_count
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SvgEncoder {
    scale: u32,
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self { scale: 1 }
    }
}

impl SvgEncoder {
    /// Encoder whose `width`/`height` attributes are multiplied by `scale`.
    pub fn with_scale(scale: u32) -> Result<Self> {
        if scale == 0 {
            return Err(Error::InvalidArgument {
                arg: "scale",
                value: scale.to_string(),
            });
        }
        Ok(Self { scale })
    }

    pub fn encode(&self, image: &RgbaImage) -> SvgDocument {
        let (width, height) = image.dimensions();
        let scale = u64::from(self.scale);

        // One element per line; collapsed to single spaces below.
        let mut lines = vec![format!(
            "<svg xmlns='{SVG_NAMESPACE}' viewBox='0 0 {width} {height}' width='{}' height='{}'>",
            u64::from(width) * scale,
            u64::from(height) * scale,
        )];

        let mut rect_count = 0;
        for (x, y, pixel) in image.enumerate_pixels() {
            if pixel[3] == 0 {
                continue;
            }
            let rect = SvgRect {
                x,
                y,
                fill: Fill::from(*pixel),
            };
            lines.push(format!("  {rect}"));
            rect_count += 1;
        }
        lines.push("</svg>".to_string());

        SvgDocument {
            width,
            height,
            rect_count,
            text: collapse_whitespace(&lines.join("\n")),
        }
    }
}

/// Encode with the default (unscaled) encoder.
pub fn encode_svg(image: &RgbaImage) -> SvgDocument {
    SvgEncoder::default().encode(image)
}

/// Replace every whitespace run by a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
