// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! The app owns the [`AnnotationController`] and a frame texture. Each
//! repaint it draws the panels from the controller's view, forwards the
//! resulting action and keyboard shortcuts to the controller, then runs one
//! playback tick and schedules the next repaint from its result.

use crate::controller::AnnotationController;
use crate::playback::Tick;
use crate::ui::{labels, player, toolbar, UiAction};
use std::time::Instant;

/// Main application state.
pub struct ClipmarkApp {
    controller: AnnotationController,

    /// Texture receiving decoded frames
    frame: player::FrameTexture,

    /// Prefix typed in the filter box, applied on demand
    prefix_input: String,
}

impl ClipmarkApp {
    /// Create a new application instance around a ready controller.
    pub fn new(cc: &eframe::CreationContext<'_>, controller: AnnotationController) -> Self {
        let prefix_input = controller.prefix().to_string();
        Self {
            controller,
            frame: player::FrameTexture::new(cc.egui_ctx.clone()),
            prefix_input,
        }
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::PickFolder => {
                if let Some(folder) = rfd::FileDialog::new().pick_folder() {
                    log::info!("Selected folder {}", folder.display());
                    self.controller
                        .apply_filter(&folder, self.prefix_input.trim());
                }
            }
            UiAction::ApplyFilter => {
                self.controller.set_prefix(self.prefix_input.trim());
            }
            UiAction::ClearFilter => {
                self.prefix_input.clear();
                self.controller.set_prefix("");
            }
            UiAction::Previous => self.controller.prev(),
            UiAction::Next => self.controller.next(),
            UiAction::Select(id) => {
                self.controller.select_by_identifier(&id);
            }
            UiAction::ToggleLabel(label) => self.controller.toggle_label(&label),
            UiAction::ClearLabels => self.controller.clear_current(),
            UiAction::None => {}
        }
    }

    /// Arrow keys and Enter navigate unless a text field has focus.
    fn keyboard_action(ctx: &egui::Context) -> UiAction {
        if ctx.wants_keyboard_input() {
            return UiAction::None;
        }
        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) {
                UiAction::Previous
            } else if i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::Enter) {
                UiAction::Next
            } else {
                UiAction::None
            }
        })
    }
}

impl eframe::App for ClipmarkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let key_action = Self::keyboard_action(ctx);

        // Playback first so the central panel shows the newest frame
        match self.controller.tick(Instant::now(), &mut self.frame) {
            Tick::Wait(delay) => ctx.request_repaint_after(delay),
            Tick::Rendered => ctx.request_repaint(),
            Tick::Idle => {}
        }

        let action = {
            let view = self.controller.view();

            let toolbar_action = egui::TopBottomPanel::top("toolbar")
                .show(ctx, |ui| {
                    toolbar::show(ui, &mut self.prefix_input, self.controller.folder())
                })
                .inner;

            let label_action = egui::TopBottomPanel::bottom("labels")
                .show(ctx, |ui| {
                    ui.add_space(4.0);
                    let nav = toolbar::navigation(ui, &view);
                    ui.separator();
                    nav.or(labels::show(ui, &view))
                })
                .inner;

            egui::CentralPanel::default().show(ctx, |ui| {
                player::show(ui, &view, &self.frame);
            });

            toolbar_action.or(label_action).or(key_action)
        };

        // A newly opened clip needs a tick even if the engine was idle
        if action != UiAction::None {
            self.handle_action(action);
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.controller.shutdown();
    }
}
