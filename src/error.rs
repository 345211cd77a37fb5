//! Crate-level error type and `Result` alias.
//! Listing, decoding and writing failures carry the offending path; all of
//! them are fatal to a batch run unless `continue_on_error` is set.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to read directory {path:?}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to decode PNG {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unable to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Invalid parameter file {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unable to read parameter file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Flat classification of [`Error`], for callers that only care about the
/// failure category.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    DirectoryNotFound,
    DirectoryUnreadable,
    DecodeFailure,
    WriteFailure,
    InvalidArgument,
    Config,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DirectoryUnreadable { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                ErrorKind::DirectoryNotFound
            }
            Error::DirectoryUnreadable { .. } => ErrorKind::DirectoryUnreadable,
            Error::Decode { .. } => ErrorKind::DecodeFailure,
            Error::Write { .. } => ErrorKind::WriteFailure,
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::Config { .. } | Error::ConfigRead { .. } => ErrorKind::Config,
        }
    }
}
