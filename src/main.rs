// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! clipmark - step through a folder of video clips and tag each one.
//!
//! Clips loop on screen while the reviewer toggles labels from a fixed
//! vocabulary. Every change is written to the labels file immediately.
//!
//! Usage: `clipmark [FOLDER]`

mod app;
mod config;
mod controller;
mod error;
mod io;
mod models;
mod playback;
mod ui;
mod util;

use anyhow::{Context, Result};
use app::ClipmarkApp;
use config::Settings;
use controller::AnnotationController;
use models::labels::{load_vocabulary, LabelStore};
use playback::PlaybackEngine;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let mut settings = Settings::load(Path::new(config::SETTINGS_FILE))?;
    if let Some(folder) = std::env::args_os().nth(1) {
        settings.folder = Some(PathBuf::from(folder));
    }

    let vocabulary = load_vocabulary(&settings.vocabulary_file)
        .context("Failed to load label vocabulary")?;
    let store = LabelStore::load(&settings.labels_file).context("Failed to load labels")?;
    let engine = PlaybackEngine::new(io::media::default_backend(), settings.playback());

    let mut controller = AnnotationController::new(store, vocabulary, engine);
    if let Some(folder) = &settings.folder {
        controller.apply_filter(folder, "");
    }

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 820.0])
            .with_min_inner_size([640.0, 560.0])
            .with_title("clipmark - Video Clip Labeling"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "clipmark",
        options,
        Box::new(move |cc| Ok(Box::new(ClipmarkApp::new(cc, controller)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
