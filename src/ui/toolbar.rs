// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Folder, filter and navigation bars.

use super::UiAction;
use crate::controller::AnnotationView;

/// Display the folder and filter bar.
pub fn show(ui: &mut egui::Ui, prefix_input: &mut String, folder: Option<&std::path::Path>) -> UiAction {
    let mut action = UiAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.button("📁 Select Folder").clicked() {
            action = UiAction::PickFolder;
        }

        match folder {
            Some(path) => ui.label(egui::RichText::new(path.display().to_string()).weak()),
            None => ui.label(egui::RichText::new("No folder").italics().weak()),
        };

        ui.separator();

        ui.label("Filter:");
        let response = ui.add(
            egui::TextEdit::singleline(prefix_input)
                .hint_text("file name prefix")
                .desired_width(160.0),
        );
        // Enter in the filter box applies it
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            action = UiAction::ApplyFilter;
        }

        let has_folder = folder.is_some();
        if ui.add_enabled(has_folder, egui::Button::new("Apply")).clicked() {
            action = UiAction::ApplyFilter;
        }
        if ui.add_enabled(has_folder, egui::Button::new("Clear")).clicked() {
            action = UiAction::ClearFilter;
        }
    });

    action
}

/// Display the previous/next buttons and the clip picker.
pub fn navigation(ui: &mut egui::Ui, view: &AnnotationView) -> UiAction {
    let mut action = UiAction::None;
    let has_clips = view.current_clip.is_some();

    ui.horizontal(|ui| {
        if ui.add_enabled(has_clips, egui::Button::new("◀ Previous")).clicked() {
            action = UiAction::Previous;
        }
        if ui.add_enabled(has_clips, egui::Button::new("Next ▶")).clicked() {
            action = UiAction::Next;
        }

        if let Some((index, total)) = view.position {
            ui.label(format!("{} / {}", index + 1, total));
        }

        ui.separator();

        ui.label("Go to video:");
        egui::ComboBox::from_id_source("clip_select")
            .selected_text(view.current_clip.unwrap_or(""))
            .width(ui.available_width().max(120.0))
            .show_ui(ui, |ui| {
                for id in &view.clip_ids {
                    let selected = view.current_clip == Some(*id);
                    if ui.selectable_label(selected, *id).clicked() {
                        action = UiAction::Select(id.to_string());
                    }
                }
            });
    });

    action
}
