// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Label vocabulary and per-clip label assignments.
//!
//! Assignments map a clip identifier to the set of labels currently applied
//! to it. The whole map is rewritten to disk after every mutation. Keys are
//! never pruned automatically, so entries for clips that are filtered out or
//! deleted stay in the file until cleared explicitly.

use crate::error::StoreError;
use crate::io::serialization::{is_not_found, read_json, write_json};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Labels seeded into a fresh vocabulary file.
pub const DEFAULT_VOCABULARY: [&str; 5] = ["Label 1", "Label 2", "Label 3", "Label 4", "Label 5"];

/// Set of labels applied to one clip.
pub type LabelSet = BTreeSet<String>;

/// Label sets keyed by clip identifier.
pub type LabelAssignments = BTreeMap<String, LabelSet>;

/// On-disk value for one clip. Older files stored a single label string.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredLabels {
    Many(Vec<String>),
    One(String),
}

impl From<StoredLabels> for LabelSet {
    fn from(stored: StoredLabels) -> Self {
        match stored {
            StoredLabels::Many(labels) => labels.into_iter().collect(),
            StoredLabels::One(label) => LabelSet::from([label]),
        }
    }
}

/// Load the ordered label vocabulary, creating the default file on first run.
///
/// Only a missing file triggers the default; any other read or parse error
/// is returned.
pub fn load_vocabulary(path: &Path) -> Result<Vec<String>, StoreError> {
    match read_json::<Vec<String>>(path) {
        Ok(labels) => Ok(labels),
        Err(e) if is_not_found(&e) => {
            let labels: Vec<String> = DEFAULT_VOCABULARY.iter().map(|s| s.to_string()).collect();
            write_json(&labels, path).map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            log::info!("Created default label vocabulary at {}", path.display());
            Ok(labels)
        }
        Err(source) => Err(StoreError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Persistent clip label assignments.
#[derive(Debug)]
pub struct LabelStore {
    path: PathBuf,
    assignments: LabelAssignments,
}

impl LabelStore {
    /// Load assignments from `path`. A missing file yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let assignments = match read_json::<BTreeMap<String, StoredLabels>>(&path) {
            Ok(stored) => stored
                .into_iter()
                .map(|(clip, labels)| (clip, LabelSet::from(labels)))
                .collect(),
            Err(e) if is_not_found(&e) => LabelAssignments::new(),
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        log::info!(
            "Loaded labels for {} clip(s) from {}",
            assignments.len(),
            path.display()
        );
        Ok(Self { path, assignments })
    }

    /// Labels applied to `clip_id`, or an empty set.
    pub fn get(&self, clip_id: &str) -> LabelSet {
        self.assignments.get(clip_id).cloned().unwrap_or_default()
    }

    /// Whether `label` is applied to `clip_id`.
    #[cfg(test)]
    pub fn contains(&self, clip_id: &str, label: &str) -> bool {
        self.assignments
            .get(clip_id)
            .is_some_and(|labels| labels.contains(label))
    }

    /// Add `label` to `clip_id` if absent, remove it if present, then save.
    ///
    /// Removing the last label leaves an empty entry behind; only
    /// [`clear`](Self::clear) deletes a key. The in-memory change is kept
    /// even when the save fails.
    pub fn toggle(&mut self, clip_id: &str, label: &str) -> Result<(), StoreError> {
        let labels = self.assignments.entry(clip_id.to_string()).or_default();
        if !labels.remove(label) {
            labels.insert(label.to_string());
        }
        log::info!("Toggled {:?} on {}", label, clip_id);
        self.save()
    }

    /// Delete every label for `clip_id`, then save. No-op for unknown clips.
    pub fn clear(&mut self, clip_id: &str) -> Result<(), StoreError> {
        if self.assignments.remove(clip_id).is_none() {
            return Ok(());
        }
        log::info!("Cleared labels on {}", clip_id);
        self.save()
    }

    fn save(&self) -> Result<(), StoreError> {
        write_json(&self.assignments, &self.path).map_err(|source| {
            log::warn!("Failed to save labels to {}: {}", self.path.display(), source);
            StoreError::Write {
                path: self.path.clone(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_raw(path: &Path) -> serde_json::Value {
        read_json(path).unwrap()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LabelStore::load(dir.path().join("labels.json")).unwrap();
        assert!(store.get("a.mp4").is_empty());
    }

    #[test]
    fn test_legacy_scalar_becomes_singleton() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.json");
        std::fs::write(&path, r#"{"a.mp4": "x", "b.mp4": ["y", "z"]}"#).unwrap();

        let store = LabelStore::load(&path).unwrap();

        assert_eq!(store.get("a.mp4"), LabelSet::from(["x".to_string()]));
        assert_eq!(store.get("b.mp4").len(), 2);
    }

    #[test]
    fn test_toggle_twice_restores_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.json");
        std::fs::write(&path, r#"{"a.mp4": ["Label 1"]}"#).unwrap();
        let mut store = LabelStore::load(&path).unwrap();
        let before = store.get("a.mp4");

        store.toggle("a.mp4", "Label 3").unwrap();
        assert!(store.contains("a.mp4", "Label 3"));
        store.toggle("a.mp4", "Label 3").unwrap();

        assert_eq!(store.get("a.mp4"), before);
    }

    #[test]
    fn test_toggle_persists_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.json");
        let mut store = LabelStore::load(&path).unwrap();

        store.toggle("a.mp4", "Label 2").unwrap();

        assert_eq!(read_raw(&path), serde_json::json!({"a.mp4": ["Label 2"]}));
        let reloaded = LabelStore::load(&path).unwrap();
        assert!(reloaded.contains("a.mp4", "Label 2"));
    }

    #[test]
    fn test_toggle_off_keeps_empty_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.json");
        let mut store = LabelStore::load(&path).unwrap();

        store.toggle("a.mp4", "Label 1").unwrap();
        store.toggle("a.mp4", "Label 1").unwrap();

        assert_eq!(read_raw(&path), serde_json::json!({"a.mp4": []}));
    }

    #[test]
    fn test_clear_removes_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.json");
        let mut store = LabelStore::load(&path).unwrap();
        store.toggle("a.mp4", "Label 1").unwrap();
        store.toggle("b.mp4", "Label 2").unwrap();

        store.clear("a.mp4").unwrap();

        assert!(store.get("a.mp4").is_empty());
        assert_eq!(read_raw(&path), serde_json::json!({"b.mp4": ["Label 2"]}));
    }

    #[test]
    fn test_clear_unknown_clip_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.json");
        let mut store = LabelStore::load(&path).unwrap();

        store.clear("nothing.mp4").unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn test_failed_write_keeps_memory_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("labels.json");
        let mut store = LabelStore::load(&path).unwrap();

        assert!(store.toggle("a.mp4", "Label 1").is_err());
        assert!(store.contains("a.mp4", "Label 1"));
    }

    #[test]
    fn test_vocabulary_bootstrap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("label_definitions.json");

        let labels = load_vocabulary(&path).unwrap();

        assert_eq!(labels, DEFAULT_VOCABULARY.to_vec());
        let stored: Vec<String> = read_json(&path).unwrap();
        assert_eq!(stored, DEFAULT_VOCABULARY.to_vec());
    }

    #[test]
    fn test_vocabulary_keeps_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("label_definitions.json");
        std::fs::write(&path, r#"["walk", "run", "jump"]"#).unwrap();

        assert_eq!(load_vocabulary(&path).unwrap(), vec!["walk", "run", "jump"]);
    }

    #[test]
    fn test_vocabulary_parse_error_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("label_definitions.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(load_vocabulary(&path), Err(StoreError::Read { .. })));
    }
}
