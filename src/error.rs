//! Error types for configuration, asset loading and sound playback.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to read sprite {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Sprite {0} is empty")]
    Empty(String),

    #[error("Asset loader stopped before finishing")]
    LoaderPanicked,
}

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Sound output failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sound is muted")]
    Muted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::Invalid("frame period must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid config: frame period must be positive"
        );
        assert_eq!(AssetError::Empty("ground".to_string()).to_string(), "Sprite ground is empty");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
