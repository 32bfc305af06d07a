// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Label panel.
//!
//! Shows the current clip's labels and status line, and one toggle button per
//! vocabulary entry. Active labels are drawn selected.

use super::UiAction;
use crate::controller::AnnotationView;

/// Label buttons per row.
const COLUMNS: usize = 5;

/// Display the label panel.
pub fn show(ui: &mut egui::Ui, view: &AnnotationView) -> UiAction {
    let mut action = UiAction::None;
    let has_clip = view.current_clip.is_some();

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(view.label_summary()).size(14.0).strong());
        ui.label(view.status);
    });

    ui.separator();

    ui.add_enabled_ui(has_clip, |ui| {
        egui::Grid::new("label_buttons")
            .num_columns(COLUMNS)
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                for (i, label) in view.vocabulary.iter().enumerate() {
                    let active = view.active_labels.contains(label);
                    if ui.selectable_label(active, label.as_str()).clicked() {
                        action = UiAction::ToggleLabel(label.clone());
                    }
                    if (i + 1) % COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });

        ui.add_space(4.0);
        if ui.button("🗑 Clean Labels").clicked() {
            action = UiAction::ClearLabels;
        }
    });

    action
}
