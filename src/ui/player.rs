// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video display area.
//!
//! [`FrameTexture`] receives frames from playback and uploads them to a
//! single egui texture; [`show`] draws that texture letterboxed in the
//! central panel.

use crate::controller::AnnotationView;
use crate::io::media::Frame;
use crate::playback::FrameSink;
use crate::util::geometry::{center_offset, fit_size};

/// GPU texture holding the most recent frame.
pub struct FrameTexture {
    ctx: egui::Context,
    texture: Option<egui::TextureHandle>,
    size: (u32, u32),
}

impl FrameTexture {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            texture: None,
            size: (0, 0),
        }
    }
}

impl FrameSink for FrameTexture {
    fn show_frame(&mut self, frame: Frame) {
        let size = [frame.width as usize, frame.height as usize];
        let image = egui::ColorImage::from_rgb(size, &frame.rgb);
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::LINEAR),
            None => {
                self.texture = Some(self.ctx.load_texture(
                    "clip_frame",
                    image,
                    egui::TextureOptions::LINEAR,
                ));
            }
        }
        self.size = (frame.width, frame.height);
    }
}

/// Display the current frame, or a placeholder when nothing is playing.
pub fn show(ui: &mut egui::Ui, view: &AnnotationView, frame: &FrameTexture) {
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);
    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        match (&frame.texture, view.playing) {
            (Some(texture), true) => {
                let available = ui.available_size();
                let (width, height) = fit_size(frame.size, (available.x, available.y));
                let (x_offset, y_offset) = center_offset((width, height), (available.x, available.y));

                let image_rect = egui::Rect::from_min_size(
                    ui.min_rect().min + egui::vec2(x_offset, y_offset),
                    egui::vec2(width, height),
                );

                ui.painter().image(
                    texture.id(),
                    image_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
            _ => {
                let message = match view.current_clip {
                    Some(_) => view.status,
                    None => "Select a folder of video clips to begin labeling",
                };
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new(message)
                            .size(16.0)
                            .color(egui::Color32::from_gray(180)),
                    );
                });
            }
        }
    });
}
