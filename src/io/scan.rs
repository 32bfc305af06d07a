// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Folder scanning for video clips.
//!
//! A folder is resolved into a sorted list of [`Clip`]s. Only regular,
//! non-empty files with a known video extension are kept; macOS resource
//! fork files (`._name`) are skipped.

use crate::error::ResolveError;
use crate::models::clip::Clip;
use std::path::Path;

/// Video extensions accepted by the scanner, compared case-insensitively.
pub const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "avi", "mov"];

/// Prefix of AppleDouble resource fork files.
const RESOURCE_FORK_PREFIX: &str = "._";

/// Scan `folder` and return the matching clips sorted by file name.
///
/// An empty `prefix` keeps every clip; otherwise only names starting with it
/// (case-sensitive) are kept. Finding nothing is not an error.
pub fn resolve(folder: &Path, prefix: &str) -> Result<Vec<Clip>, ResolveError> {
    let entries = std::fs::read_dir(folder).map_err(|source| ResolveError {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", folder.display(), e);
                continue;
            }
        };

        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            log::warn!("Skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };

        if !has_video_extension(&name) || name.starts_with(RESOURCE_FORK_PREFIX) {
            continue;
        }
        if !prefix.is_empty() && !name.starts_with(prefix) {
            continue;
        }

        match std::fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() && meta.len() > 0 => names.push(name),
            Ok(_) => {}
            Err(e) => log::warn!("Skipping {}: {}", name, e),
        }
    }

    names.sort();
    log::info!(
        "Resolved {} clip(s) in {} (prefix {:?})",
        names.len(),
        folder.display(),
        prefix
    );

    Ok(names.into_iter().map(|name| Clip::new(folder, name)).collect())
}

fn has_video_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}
