//! Error types for bolyai-fetch.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Why a single task was abandoned. None of these stop a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("download of {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("downloading {url} failed with status code {status}")]
    BadStatus { url: String, status: u16 },

    #[error("cannot check {}: {source}", path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: bolyai_fs::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: bolyai_fs::Error,
    },
}
