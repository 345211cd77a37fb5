//! I/O layer: PNG discovery and decoding (`reader`) and the SVG file
//! writer (`writers`).
pub mod reader;
pub use reader::{DirectoryListing, decode_png, has_png_extension, list_png_files};

pub mod writers;
