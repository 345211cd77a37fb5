use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of the subdirectory created under the input directory when none is given.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "png2svg";

/// Conversion parameters suitable for parameter files and the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionParams {
    /// Subdirectory of the input directory receiving the `.svg` files
    pub output_subdir: String,
    /// Multiplier for the `width`/`height` attributes; the viewBox is unaffected
    pub scale: u32,
    /// If true, a failing file is logged and counted instead of aborting the batch
    pub continue_on_error: bool,
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            output_subdir: DEFAULT_OUTPUT_SUBDIR.to_string(),
            scale: 1,
            continue_on_error: false,
        }
    }
}

impl ConversionParams {
    /// Load parameters from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let params: Self = serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.scale == 0 {
            return Err(Error::InvalidArgument {
                arg: "scale",
                value: self.scale.to_string(),
            });
        }
        // The subdirectory must stay below the input directory.
        let anchored = Path::new(&self.output_subdir)
            .components()
            .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)));
        if self.output_subdir.trim().is_empty() || anchored {
            return Err(Error::InvalidArgument {
                arg: "output_subdir",
                value: self.output_subdir.clone(),
            });
        }
        Ok(())
    }
}
