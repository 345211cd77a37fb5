use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::encode::SvgDocument;
use crate::error::{Error, Result};

/// Write `document` verbatim to `output`, creating missing parent directories.
pub fn write_svg(output: &Path, document: &SvgDocument) -> Result<()> {
    let write_error = |source: std::io::Error| Error::Write {
        path: output.to_path_buf(),
        source,
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let file = File::create(output).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(document.as_str().as_bytes())
        .map_err(write_error)?;
    writer.flush().map_err(write_error)?;
    Ok(())
}
