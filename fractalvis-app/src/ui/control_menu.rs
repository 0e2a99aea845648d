use eframe::egui;
use tracing::warn;

use fractalvis_core::{color_presets, FractalVariant, JuliaOrbit, MAX_ITERATIONS, PALETTE_SLOTS};

use crate::app::{FractalVisApp, HUD_MARGIN};

impl FractalVisApp {
    /// Main overlay window: variant, iterations, Julia, colors and actions.
    pub(crate) fn show_control_menu(&mut self, ctx: &egui::Context) {
        use egui_material_icons::icons::*;

        let icon_color = egui::Color32::from_rgb(200, 200, 200);
        let mi = |icon: &str| egui::RichText::new(icon).size(18.0).color(icon_color);

        egui::Window::new("Control Menu")
            .resizable(false)
            .default_pos([HUD_MARGIN, HUD_MARGIN])
            .default_width(300.0)
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(egui::Color32::from_rgba_unmultiplied(10, 10, 10, 210)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .add(egui::Button::new(mi(ICON_RESTART_ALT)).frame(false))
                        .on_hover_text("Reset view (R)")
                        .clicked()
                    {
                        self.controller.reset_view();
                    }
                    if ui
                        .add(egui::Button::new(mi(ICON_PHOTO_CAMERA)).frame(false))
                        .on_hover_text("Screenshot (P)")
                        .clicked()
                    {
                        self.request_screenshot();
                    }
                    if ui
                        .add(egui::Button::new(mi(ICON_SETTINGS)).frame(false))
                        .on_hover_text("Settings")
                        .clicked()
                    {
                        self.show_settings = !self.show_settings;
                    }
                    if ui
                        .add(egui::Button::new(mi(ICON_VISIBILITY_OFF)).frame(false))
                        .on_hover_text("Hide GUI (H)")
                        .clicked()
                    {
                        self.show_gui = false;
                    }
                });
                ui.separator();

                self.variant_controls(ui);
                ui.add_space(4.0);
                self.julia_controls(ui);
                ui.add_space(4.0);
                self.color_controls(ui);

                ui.add_space(6.0);
                egui::CollapsingHeader::new("Controls")
                    .default_open(false)
                    .show(ui, Self::controls_help);
            });
    }

    fn variant_controls(&mut self, ui: &mut egui::Ui) {
        let mut variant = self.controller.variant();
        egui::ComboBox::from_label("Fractals")
            .selected_text(variant.label())
            .show_ui(ui, |ui| {
                for v in FractalVariant::ALL {
                    ui.selectable_value(&mut variant, v, v.label());
                }
            });
        self.controller.select_variant(variant);

        let mut iterations = self.controller.view().iterations();
        if ui
            .add(egui::Slider::new(&mut iterations, 0..=MAX_ITERATIONS).text("Iterations"))
            .changed()
        {
            if let Err(e) = self.controller.set_iterations(iterations) {
                warn!("Rejected iteration count: {e}");
            }
        }
    }

    fn julia_controls(&mut self, ui: &mut egui::Ui) {
        let mut enabled = self.controller.julia().enabled;
        if ui.checkbox(&mut enabled, "Julia Set Mode").changed() {
            self.controller.set_julia_enabled(enabled);
        }
        if !enabled {
            return;
        }

        let mut paused = self.controller.julia().paused;
        if ui.checkbox(&mut paused, "Freeze seed (F)").changed() {
            self.controller.set_julia_paused(paused);
        }

        let orbit = self.controller.orbit_mut();
        ui.checkbox(&mut orbit.enabled, "Orbit seed");
        if orbit.enabled {
            let mut radius = orbit.radius();
            if ui
                .add(
                    egui::Slider::new(&mut radius, JuliaOrbit::RADIUS_RANGE)
                        .text("Radius")
                        .logarithmic(true),
                )
                .changed()
            {
                orbit.set_radius(radius);
            }
            let mut speed = orbit.speed();
            if ui
                .add(egui::Slider::new(&mut speed, JuliaOrbit::SPEED_RANGE).text("Speed"))
                .changed()
            {
                orbit.set_speed(speed);
            }
        }
    }

    fn color_controls(&mut self, ui: &mut egui::Ui) {
        for slot in 0..PALETTE_SLOTS {
            let mut rgb = self.controller.palette().get(slot);
            ui.horizontal(|ui| {
                if ui.color_edit_button_rgb(&mut rgb).changed() {
                    self.controller.set_color(slot, rgb);
                }
                ui.label(format!("Color {}", slot + 1));
            });
        }

        let presets = color_presets();
        let current = self
            .controller
            .preset()
            .and_then(|i| presets.get(i))
            .map_or("Custom", |p| p.name);
        let mut picked = None;
        egui::ComboBox::from_label("Color Presets")
            .selected_text(current)
            .show_ui(ui, |ui| {
                for (i, preset) in presets.iter().enumerate() {
                    if ui
                        .selectable_label(self.controller.preset() == Some(i), preset.name)
                        .clicked()
                    {
                        picked = Some(i);
                    }
                }
            });
        if let Some(index) = picked {
            if let Err(e) = self.controller.apply_preset(index) {
                warn!("Failed to apply preset: {e}");
            }
        }
    }
}
