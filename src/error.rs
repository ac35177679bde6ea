use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrollDispatchError {
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] toml::de::Error),
}
