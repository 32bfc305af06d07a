// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! JSON and YAML file helpers.
//!
//! Label files are JSON; the optional settings file is YAML. Writes replace
//! the whole file in one call.

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// Write a value as JSON indented with four spaces.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    std::fs::write(path, buf)?;
    Ok(())
}

/// Read a JSON value from a file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = std::fs::read_to_string(path)?;
    let data = serde_json::from_str(&json)?;
    Ok(data)
}

/// Read a YAML value from a file.
pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let yaml = std::fs::read_to_string(path)?;
    let data = serde_yaml::from_str(&yaml)?;
    Ok(data)
}

/// True when the error chain bottoms out in a "file not found" I/O error.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_json_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let mut map = BTreeMap::new();
        map.insert("a.mp4", vec!["x"]);

        write_json(&map, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n    \"a.mp4\": ["));
        let back: BTreeMap<String, Vec<String>> = read_json(&path).unwrap();
        assert_eq!(back["a.mp4"], vec!["x".to_string()]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_json::<Vec<String>>(&dir.path().join("absent.json")).unwrap_err();
        assert!(is_not_found(&err));
    }

    #[test]
    fn test_parse_error_is_not_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ nope").unwrap();
        let err = read_json::<Vec<String>>(&path).unwrap_err();
        assert!(!is_not_found(&err));
    }
}
