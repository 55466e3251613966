use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("a showcase needs at least one item")]
    NoItems,
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("no image files found in directory {0:?}")]
    NoImages(PathBuf),
    #[error("failed to load texture for {path:?}: {message}")]
    Texture { path: PathBuf, message: String },
}

impl ShowcaseError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
