//! JSON helpers for files under ~/.flapper/.

use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.flapper/ directory path, creating it if needed.
pub fn flapper_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".flapper");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.flapper/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(flapper_dir()?.join(filename))
}

/// Read and parse a JSON file. Missing files are an error; callers decide the fallback.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, crate::error::ConfigError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Save a value as pretty-printed JSON.
pub fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("flapper_persistence_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_data_path_format() {
        let path = data_path("config.json").expect("data_path should succeed");
        assert!(path.to_string_lossy().ends_with(".flapper/config.json"));
    }

    #[test]
    fn test_load_missing_is_io_error() {
        let result: Result<Vec<String>, _> = load_json(&temp_file("missing_12345.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_garbage_is_json_error() {
        let path = temp_file("garbage.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();
        let result: Result<Vec<String>, _> = load_json(&path);
        assert!(matches!(result, Err(ConfigError::Json(_))));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_file("roundtrip.json");
        let data = vec!["hello".to_string(), "world".to_string()];
        save_json(&path, &data).expect("save should succeed");

        let loaded: Vec<String> = load_json(&path).expect("load should succeed");
        assert_eq!(loaded, data);

        fs::remove_file(path).ok();
    }
}
