// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.
//!
//! Settings come from an optional `clipmark.yaml` in the working directory.
//! Every field has a default, so a missing file or a partial file is fine.

use crate::io::serialization::{is_not_found, read_yaml};
use crate::playback::PlaybackConfig;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default settings file name.
pub const SETTINGS_FILE: &str = "clipmark.yaml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Label assignments file.
    pub labels_file: PathBuf,
    /// Label vocabulary file.
    pub vocabulary_file: PathBuf,
    pub target_fps: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    /// Folder to open at startup.
    pub folder: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            labels_file: PathBuf::from("labels.json"),
            vocabulary_file: PathBuf::from("label_definitions.json"),
            target_fps: 30,
            frame_width: 854,
            frame_height: 480,
            folder: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if it is missing.
    pub fn load(path: &Path) -> Result<Self> {
        let settings = match read_yaml::<Settings>(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) if is_not_found(&e) => Self::default(),
            Err(e) => return Err(e).with_context(|| format!("invalid {}", path.display())),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn playback(&self) -> PlaybackConfig {
        PlaybackConfig::new(self.target_fps, self.frame_width, self.frame_height)
    }

    fn validate(&self) -> Result<()> {
        if self.target_fps == 0 {
            bail!("target_fps must be greater than zero");
        }
        if self.frame_width == 0 || self.frame_height == 0 {
            bail!(
                "frame size must be non-zero, got {}x{}",
                self.frame_width,
                self.frame_height
            );
        }
        Ok(())
    }
}
