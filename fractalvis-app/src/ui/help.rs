use eframe::egui;

use crate::app::FractalVisApp;

const KEYBOARD: &[(&str, &str)] = &[
    ("Arrow keys", "Pan (hold)"),
    ("+ / =", "Zoom in (hold)"),
    ("-", "Zoom out (hold)"),
    ("J", "Toggle Julia set mode"),
    ("F", "Freeze / unfreeze Julia seed"),
    ("R", "Reset view"),
    ("H", "Show / hide GUI"),
    ("P", "Save screenshot"),
    ("Esc", "Quit"),
];

const MOUSE: &[(&str, &str)] = &[
    ("Scroll", "Zoom"),
    ("Move", "Pick Julia seed"),
];

impl FractalVisApp {
    pub(crate) fn controls_help(ui: &mut egui::Ui) {
        ui.style_mut().visuals.override_text_color = Some(egui::Color32::from_rgb(220, 220, 220));
        for (id, rows) in [("help_kb", KEYBOARD), ("help_mouse", MOUSE)] {
            egui::Grid::new(id)
                .num_columns(2)
                .spacing([12.0, 2.0])
                .show(ui, |ui| {
                    for &(k, d) in rows {
                        ui.label(egui::RichText::new(k).strong().color(egui::Color32::WHITE));
                        ui.label(d);
                        ui.end_row();
                    }
                });
            ui.add_space(4.0);
        }
    }
}
