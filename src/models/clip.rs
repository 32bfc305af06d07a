// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Resolved video clip entries.

use std::path::{Path, PathBuf};

/// One video file found in the selected folder.
///
/// The identifier is the file name relative to that folder and is what label
/// assignments are keyed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    id: String,
    path: PathBuf,
}

impl Clip {
    /// Create a clip for `file_name` inside `folder`.
    pub fn new(folder: &Path, file_name: impl Into<String>) -> Self {
        let id = file_name.into();
        let path = folder.join(&id);
        Self { id, path }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
