use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, ImageReader, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};

/// Entries of a directory, split into the full listing count and the PNG candidates.
#[derive(Debug, Clone, Default)]
pub struct DirectoryListing {
    /// Every entry returned by the listing, PNG or not
    pub entries: usize,
    /// Entries with a case-insensitive `.png` extension, in listing order
    pub png_files: Vec<PathBuf>,
}

/// True when `path` ends in `.png`, ignoring ASCII case.
pub fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// List `dir` (non-recursive) and keep the PNG candidates in listing order.
pub fn list_png_files(dir: &Path) -> Result<DirectoryListing> {
    let unreadable = |source: std::io::Error| Error::DirectoryUnreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut listing = DirectoryListing::default();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        listing.entries += 1;
        if has_png_extension(&path) {
            listing.png_files.push(path);
        } else {
            debug!("Skipping non-PNG entry: {:?}", path);
        }
    }
    Ok(listing)
}

/// Decode a PNG file into an RGBA pixel grid.
pub fn decode_png(path: &Path) -> Result<RgbaImage> {
    let decode_error = |source: image::ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ImageReader::open(path).map_err(|e| decode_error(e.into()))?;
    reader.set_format(ImageFormat::Png);
    let image = reader.decode().map_err(decode_error)?;
    Ok(image.to_rgba8())
}
