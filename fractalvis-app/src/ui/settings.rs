use eframe::egui;
use tracing::info;

use crate::app::FractalVisApp;

impl FractalVisApp {
    pub(crate) fn show_settings_window(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let mut open = true;
        egui::Window::new("Settings")
            .open(&mut open)
            .resizable(true)
            .default_width(320.0)
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(egui::Color32::from_rgba_unmultiplied(10, 10, 10, 210)),
            )
            .show(ctx, |ui| {
                if ui
                    .checkbox(
                        &mut self.preferences.restore_last_view,
                        "Restore last view on startup",
                    )
                    .changed()
                {
                    self.preferences.save();
                }
                if ui
                    .checkbox(&mut self.preferences.show_gui_on_start, "Show GUI on startup")
                    .changed()
                {
                    self.preferences.save();
                }

                ui.add_space(6.0);
                ui.label("Screenshots folder:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.screenshots_dir_buf)
                        .hint_text("images/ next to the app")
                        .desired_width(ui.available_width()),
                );
                ui.horizontal(|ui| {
                    if ui.small_button("Browse...").clicked() {
                        if let Some(folder) = pick_folder(&self.screenshots_dir_buf) {
                            self.screenshots_dir_buf = folder;
                        }
                    }
                    if ui.small_button("Apply").clicked() {
                        self.preferences.screenshots_dir = self.screenshots_dir_buf.trim().to_string();
                        self.preferences.save();
                        info!(
                            "Screenshots will be saved to {}",
                            self.preferences.screenshot_directory().display()
                        );
                    }
                    if ui.small_button("Reset").clicked() {
                        self.preferences.screenshots_dir = String::new();
                        self.screenshots_dir_buf.clear();
                        self.preferences.save();
                    }
                });
                ui.weak(format!(
                    "Current: {}",
                    self.preferences.screenshot_directory().display()
                ));

                ui.add_space(6.0);
                ui.label("Shader folder (applies on restart):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.shaders_dir_buf)
                        .hint_text("built-in shaders")
                        .desired_width(ui.available_width()),
                );
                ui.horizontal(|ui| {
                    if ui.small_button("Browse...").clicked() {
                        if let Some(folder) = pick_folder(&self.shaders_dir_buf) {
                            self.shaders_dir_buf = folder;
                        }
                    }
                    if ui.small_button("Apply").clicked() {
                        self.preferences.shaders_dir = self.shaders_dir_buf.trim().to_string();
                        self.preferences.save();
                    }
                    if ui.small_button("Reset").clicked() {
                        self.preferences.shaders_dir = String::new();
                        self.shaders_dir_buf.clear();
                        self.preferences.save();
                    }
                });
            });

        if !open {
            self.show_settings = false;
        }
    }
}

fn pick_folder(start: &str) -> Option<String> {
    let start = std::path::Path::new(start);
    let mut dialog = rfd::FileDialog::new();
    if start.is_dir() {
        dialog = dialog.set_directory(start);
    }
    dialog
        .pick_folder()
        .map(|folder| folder.to_string_lossy().to_string())
}
