use clap::Parser;
use std::path::PathBuf;

use png2svg::ConversionParams;

use super::errors::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "png2svg",
    version,
    about = "Convert every PNG in a directory into a pixel-exact SVG"
)]
pub struct CliArgs {
    /// Directory scanned (non-recursively) for .png files
    #[arg(default_value = ".")]
    pub input_dir: PathBuf,

    /// Subdirectory of INPUT_DIR receiving the .svg files [default: png2svg]
    pub output_subdir: Option<String>,

    /// Multiply the SVG width/height attributes (the viewBox stays in pixels)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub scale: Option<u32>,

    /// Keep converting the remaining files when one of them fails
    #[arg(long, default_value_t = false)]
    pub keep_going: bool,

    /// JSON parameter file; explicit command line values take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the batch report as JSON after the summary
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable logging (level from RUST_LOG, default debug)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// Merge the optional parameter file with the command line.
    pub fn conversion_params(&self) -> Result<ConversionParams, AppError> {
        let mut params = match &self.config {
            Some(path) => ConversionParams::from_json_file(path)?,
            None => ConversionParams::default(),
        };
        if let Some(subdir) = &self.output_subdir {
            params.output_subdir = subdir.clone();
        }
        if let Some(scale) = self.scale {
            params.scale = scale;
        }
        params.continue_on_error |= self.keep_going;
        params.validate()?;
        Ok(params)
    }
}
