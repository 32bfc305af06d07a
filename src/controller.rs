// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Clip navigation and labeling.
//!
//! [`AnnotationController`] is the only thing the UI talks to. It owns the
//! resolved clip list, the current index, the playback engine and the label
//! store, and exposes what the UI needs to draw through [`AnnotationView`].
//! Recoverable failures become status messages; nothing here panics or
//! returns a fatal error.

use crate::error::StoreError;
use crate::io::scan;
use crate::models::clip::Clip;
use crate::models::labels::{LabelSet, LabelStore};
use crate::playback::{FrameSink, PlaybackEngine, Tick};
use std::path::{Path, PathBuf};
use std::time::Instant;

const NO_FOLDER: &str = "No folder selected";
const NO_CLIPS: &str = "No videos found";

/// Snapshot of controller state for rendering.
#[derive(Debug)]
pub struct AnnotationView<'a> {
    /// Identifier of the current clip, if the list is non-empty.
    pub current_clip: Option<&'a str>,
    /// Zero-based index of the current clip and the clip count.
    pub position: Option<(usize, usize)>,
    pub clip_ids: Vec<&'a str>,
    /// Label vocabulary in display order.
    pub vocabulary: &'a [String],
    pub active_labels: LabelSet,
    pub status: &'a str,
    pub playing: bool,
}

impl AnnotationView<'_> {
    /// One-line summary of the current clip's labels.
    pub fn label_summary(&self) -> String {
        if self.active_labels.is_empty() {
            return "No Label".to_string();
        }
        // Vocabulary order first, then anything no longer in the vocabulary.
        let mut ordered: Vec<&str> = self
            .vocabulary
            .iter()
            .filter(|label| self.active_labels.contains(label.as_str()))
            .map(String::as_str)
            .collect();
        ordered.extend(
            self.active_labels
                .iter()
                .filter(|label| !self.vocabulary.contains(label))
                .map(String::as_str),
        );
        format!("Current Labels: {}", ordered.join(", "))
    }
}

/// Drives navigation, playback and labeling for one review session.
pub struct AnnotationController {
    store: LabelStore,
    vocabulary: Vec<String>,
    engine: PlaybackEngine,
    folder: Option<PathBuf>,
    prefix: String,
    clips: Vec<Clip>,
    /// `Some` exactly when `clips` is non-empty, and always in range.
    index: Option<usize>,
    status: String,
    /// Last failed label write, shown until a write succeeds.
    save_error: Option<String>,
}

impl AnnotationController {
    pub fn new(store: LabelStore, vocabulary: Vec<String>, engine: PlaybackEngine) -> Self {
        Self {
            store,
            vocabulary,
            engine,
            folder: None,
            prefix: String::new(),
            clips: Vec::new(),
            index: None,
            status: NO_FOLDER.to_string(),
            save_error: None,
        }
    }

    /// Resolve `folder` with `prefix`, replacing the clip list, and start
    /// playing the first clip.
    pub fn apply_filter(&mut self, folder: &Path, prefix: &str) {
        self.folder = Some(folder.to_path_buf());
        self.prefix = prefix.to_string();

        let clips = match scan::resolve(folder, prefix) {
            Ok(clips) => clips,
            Err(e) => {
                log::warn!("{}", e);
                self.engine.close();
                self.clips.clear();
                self.index = None;
                self.status = format!("Error: {}", e);
                return;
            }
        };

        self.clips = clips;
        if self.clips.is_empty() {
            self.engine.close();
            self.index = None;
            self.status = NO_CLIPS.to_string();
        } else {
            self.index = Some(0);
            self.play_current();
        }
    }

    /// Re-resolve the current folder with a new prefix. Ignored until a
    /// folder has been chosen.
    pub fn set_prefix(&mut self, prefix: &str) {
        if let Some(folder) = self.folder.clone() {
            self.apply_filter(&folder, prefix);
        }
    }

    /// Move to the next clip, wrapping to the first.
    pub fn next(&mut self) {
        if let Some(i) = self.index {
            self.index = Some((i + 1) % self.clips.len());
            self.play_current();
        }
    }

    /// Move to the previous clip, wrapping to the last.
    pub fn prev(&mut self) {
        if let Some(i) = self.index {
            let n = self.clips.len();
            self.index = Some((i + n - 1) % n);
            self.play_current();
        }
    }

    /// Jump to the clip named `id`. Returns false if it is not in the list.
    pub fn select_by_identifier(&mut self, id: &str) -> bool {
        match self.clips.iter().position(|clip| clip.id() == id) {
            Some(i) => {
                self.index = Some(i);
                self.play_current();
                true
            }
            None => false,
        }
    }

    /// Toggle `label` on the current clip and save immediately.
    pub fn toggle_label(&mut self, label: &str) {
        let Some(clip) = self.current() else {
            return;
        };
        let id = clip.id().to_string();
        let saved = self.store.toggle(&id, label);
        self.record_save(saved);
    }

    /// Remove every label from the current clip and save immediately.
    pub fn clear_current(&mut self) {
        let Some(clip) = self.current() else {
            return;
        };
        let id = clip.id().to_string();
        let saved = self.store.clear(&id);
        self.record_save(saved);
    }

    /// Advance playback. Decode failures stop playback of the current clip
    /// but leave navigation working.
    pub fn tick(&mut self, now: Instant, sink: &mut dyn FrameSink) -> Tick {
        match self.engine.tick(now, sink) {
            Ok(tick) => tick,
            Err(e) => {
                log::error!("Playback stopped: {}", e);
                self.engine.close();
                self.status = format!("Playback stopped: {}", e);
                Tick::Idle
            }
        }
    }

    /// Release the decoder. Call before the application exits.
    pub fn shutdown(&mut self) {
        self.engine.close();
    }

    pub fn view(&self) -> AnnotationView<'_> {
        let current = self.current();
        AnnotationView {
            current_clip: current.map(Clip::id),
            position: self.index.map(|i| (i, self.clips.len())),
            clip_ids: self.clips.iter().map(Clip::id).collect(),
            vocabulary: &self.vocabulary,
            active_labels: current
                .map(|clip| self.store.get(clip.id()))
                .unwrap_or_default(),
            status: self.save_error.as_deref().unwrap_or(&self.status),
            playing: self.engine.is_active(),
        }
    }

    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn record_save(&mut self, result: Result<(), StoreError>) {
        self.save_error = result
            .err()
            .map(|e| format!("Failed to save labels: {}", e));
    }

    fn current(&self) -> Option<&Clip> {
        self.index.and_then(|i| self.clips.get(i))
    }

    /// Close the running session and open the clip at the current index.
    fn play_current(&mut self) {
        let Some(i) = self.index else {
            return;
        };
        let total = self.clips.len();
        let clip = &self.clips[i];

        match self.engine.open(clip.path(), Instant::now()) {
            Ok(()) => {
                self.status = format!("Video {} of {}: {}", i + 1, total, clip.id());
            }
            Err(e) => {
                log::warn!("{}", e);
                self.status = format!("Error opening video: {}", clip.id());
            }
        }
    }
}
