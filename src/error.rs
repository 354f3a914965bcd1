//! Error types for the song picker.

use thiserror::Error;

/// Library error type.
///
/// Empty search/sample results are not errors; they are reported as `None`
/// or an empty-result variant so the menu loop can keep running.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "unknown instrument '{0}'; expected one of guitar, bass, rhythm, guitar_coop, \
         ghl_guitar, ghl_bass, drums, keys, band, pro_drums"
    )]
    UnknownInstrument(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
