//! Crate-level error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::document::WriteError;
use crate::pipeline::ConvertError;

/// Any error that ends a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

pub type Result<T> = std::result::Result<T, Error>;
