//! High-level library API: convert one PNG to an SVG file, or a whole
//! directory of PNGs into a subdirectory of it. Prefer these entrypoints over
//! the lower-level `core` and `io` modules when embedding png2svg.
use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::encode::{SvgDocument, SvgEncoder};
use crate::core::params::ConversionParams;
use crate::error::Result;
use crate::io::reader::{decode_png, list_png_files};
use crate::io::writers::svg::write_svg;

/// Summary of a directory run
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Absolute path of the scanned directory
    pub scanned_dir: PathBuf,
    /// Every entry found in the directory, including non-PNG files and subdirectories.
    /// This is the number the CLI summary line reports.
    pub entries: usize,
    /// Entries with a `.png` extension
    pub candidates: usize,
    /// SVG files actually written
    pub converted: usize,
    /// Files that failed while `continue_on_error` was set
    pub errors: usize,
    /// Written SVG paths, in processing order
    pub outputs: Vec<PathBuf>,
}

impl BatchReport {
    /// True when the directory held no `.png` candidates at all.
    pub fn found_no_png(&self) -> bool {
        self.candidates == 0
    }
}

/// `input_dir/output_subdir/<stem of input>.svg`
///
/// A root or drive prefix on `output_subdir` is ignored, so the result
/// always lies below `input_dir`.
pub fn output_path_for(input_dir: &Path, output_subdir: &str, input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let mut file_name = stem.to_os_string();
    file_name.push(".svg");

    let mut path = input_dir.to_path_buf();
    for component in Path::new(output_subdir).components() {
        if !matches!(component, Component::RootDir | Component::Prefix(_)) {
            path.push(component);
        }
    }
    path.push(file_name);
    path
}

/// Decode `input`, encode it and write the SVG text to `output`.
pub fn convert_png_to_svg(
    input: &Path,
    output: &Path,
    params: &ConversionParams,
) -> Result<SvgDocument> {
    let encoder = SvgEncoder::with_scale(params.scale)?;
    let image = decode_png(input)?;
    let document = encoder.encode(&image);
    debug!(
        "{}x{} pixels -> {} rectangles",
        document.width(),
        document.height(),
        document.rect_count()
    );
    write_svg(output, &document)?;
    Ok(document)
}

/// Convert every PNG directly inside `input_dir`.
/// See [`process_directory_with_progress`] for the failure policy.
pub fn process_directory_to_path(
    input_dir: &Path,
    params: &ConversionParams,
) -> Result<BatchReport> {
    process_directory_with_progress(input_dir, params, |_, _| {})
}

/// Convert every PNG directly inside `input_dir`, calling `on_converted` after
/// each SVG has been written.
///
/// Files are handled one at a time in directory listing order. If
/// `params.continue_on_error` is false, the first listing, decode or write
/// error is returned and the remaining files are left untouched; otherwise
/// the failure is logged, counted in the report, and processing continues.
pub fn process_directory_with_progress<F>(
    input_dir: &Path,
    params: &ConversionParams,
    mut on_converted: F,
) -> Result<BatchReport>
where
    F: FnMut(&Path, &Path),
{
    params.validate()?;

    let listing = list_png_files(input_dir)?;
    let mut report = BatchReport {
        scanned_dir: std::path::absolute(input_dir).unwrap_or_else(|_| input_dir.to_path_buf()),
        entries: listing.entries,
        candidates: listing.png_files.len(),
        ..Default::default()
    };

    if listing.png_files.is_empty() {
        info!("No .png files found in {:?}", report.scanned_dir);
        return Ok(report);
    }

    info!(
        "Converting {} of {} entries in {:?}",
        listing.png_files.len(),
        listing.entries,
        report.scanned_dir
    );

    for input in &listing.png_files {
        let output = output_path_for(input_dir, &params.output_subdir, input);
        debug!("Processing: {:?} -> {:?}", input, output);

        match convert_png_to_svg(input, &output, params) {
            Ok(_) => {
                on_converted(input, &output);
                report.converted += 1;
                report.outputs.push(output);
            }
            Err(e) if params.continue_on_error => {
                warn!("Error processing {:?}: {}", input, e);
                report.errors += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Batch complete: converted={} errors={}",
        report.converted, report.errors
    );
    Ok(report)
}
