//! Errors at the I/O edges.
//!
//! Normalization and filtering cannot fail; only reading a host payload can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid widget payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
