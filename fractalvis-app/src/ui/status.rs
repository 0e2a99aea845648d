use eframe::egui;

use crate::app::{FractalVisApp, HUD_CORNER_RADIUS, HUD_MARGIN};

impl FractalVisApp {
    /// Bottom-left readout of the current view.
    pub(crate) fn show_status(&mut self, ctx: &egui::Context) {
        let view = self.controller.view();
        let center = view.center();
        let julia = self.controller.julia();

        egui::Area::new(egui::Id::new("status_line"))
            .anchor(egui::Align2::LEFT_BOTTOM, [HUD_MARGIN, -HUD_MARGIN])
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_black_alpha(160))
                    .inner_margin(egui::Margin::same(8))
                    .corner_radius(HUD_CORNER_RADIUS)
                    .show(ui, |ui| {
                        ui.style_mut().visuals.override_text_color =
                            Some(egui::Color32::from_rgb(220, 220, 220));
                        ui.style_mut().spacing.item_spacing.y = 2.0;

                        ui.label(format!("Fractal: {}", self.controller.variant()));
                        ui.label(format!("Center: {:.6} {:+.6}i", center.re, center.im));
                        ui.label(format!("Zoom: {:.3e}", view.zoom()));
                        ui.label(format!("Iterations: {}", view.iterations()));
                        if julia.enabled {
                            let seed = self.controller.seed();
                            let state = if julia.paused { " (frozen)" } else { "" };
                            ui.label(format!("Julia c: {:.6} {:+.6}i{state}", seed.re, seed.im));
                        }
                        if let Some(path) = &self.last_screenshot {
                            ui.weak(format!("Saved {}", path.display()));
                        }
                    });
            });
    }
}
