//! Shared YAML parsing infrastructure.
//!
//! Every table file is deserialized through these functions so that file
//! errors and parse errors are reported the same way, with the path that
//! caused them.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{PackError, PackResult};

/// Read a file, mapping `NotFound` to [`PackError::FileNotFound`].
fn read_file(path: &Path) -> PackResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PackError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PackError::Io(e)
        }
    })
}

/// Load a YAML file into a strongly-typed struct.
pub fn load_yaml_typed<T: DeserializeOwned>(path: &Path) -> PackResult<T> {
    let content = read_file(path)?;
    serde_yaml::from_str(&content).map_err(|e| PackError::YamlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse YAML text that did not come from a file (bundled data, request
/// bodies, tests).
pub fn parse_yaml_str<T: DeserializeOwned>(content: &str) -> PackResult<T> {
    Ok(serde_yaml::from_str(content)?)
}
