// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for clip resolution, playback and label persistence.
//!
//! None of these are fatal to the running application: the controller turns
//! each of them into a status message. Only a broken vocabulary file at
//! startup is allowed to stop the program.

use std::path::PathBuf;
use thiserror::Error;

/// The clip folder could not be listed.
#[derive(Debug, Error)]
#[error("cannot read folder {}: {source}", path.display())]
pub struct ResolveError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// A decode resource could not be acquired for a clip.
#[derive(Debug, Error)]
#[error("cannot open {}: {reason}", path.display())]
pub struct OpenError {
    pub path: PathBuf,
    pub reason: String,
}

impl OpenError {
    pub fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Playback failed after the decode resource was opened.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("decode failed: {0}")]
    Decode(#[source] anyhow::Error),

    #[error("stream has no frames")]
    EmptyStream,

    #[error("invalid frame: {0}")]
    Frame(String),
}

/// Reading or writing one of the label files failed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}
