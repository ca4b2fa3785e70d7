//! Error type for the fallible edges of the crate (config loading, emission).
//!
//! Decomposition and key mapping are total and never produce an `Error`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("emitter error: {0}")]
    Emit(String),

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("configuration serialize error: {0}")]
    ConfigSer(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
