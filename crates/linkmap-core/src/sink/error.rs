//! Save failure type.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serialize template: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Any other transport failure, carrying the transport's message.
    #[error("save failed: {0}")]
    Transport(String),
}
