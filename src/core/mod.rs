//! Core building blocks: the pixel-to-SVG encoder and the conversion
//! parameters. These are consumed by the high-level `api` module.
pub mod encode;
pub mod params;
