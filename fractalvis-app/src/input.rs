use eframe::egui;
use tracing::debug;

use fractalvis_core::{PanDirection, ViewportController};

use crate::app::FractalVisApp;

/// Level-triggered keys: applied every frame while held.
const HELD_KEYS: &[(egui::Key, HeldAction)] = &[
    (egui::Key::ArrowLeft, HeldAction::Pan(PanDirection::Left)),
    (egui::Key::ArrowRight, HeldAction::Pan(PanDirection::Right)),
    (egui::Key::ArrowUp, HeldAction::Pan(PanDirection::Up)),
    (egui::Key::ArrowDown, HeldAction::Pan(PanDirection::Down)),
    (egui::Key::Plus, HeldAction::ZoomIn),
    (egui::Key::Equals, HeldAction::ZoomIn),
    (egui::Key::Minus, HeldAction::ZoomOut),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeldAction {
    Pan(PanDirection),
    ZoomIn,
    ZoomOut,
}

/// Edge-triggered keys: applied once per press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyAction {
    ToggleJulia,
    ToggleJuliaPause,
    ResetView,
    ToggleGui,
    Screenshot,
    Quit,
}

impl KeyAction {
    pub(crate) fn for_key(key: egui::Key) -> Option<Self> {
        match key {
            egui::Key::J => Some(Self::ToggleJulia),
            egui::Key::F => Some(Self::ToggleJuliaPause),
            egui::Key::R => Some(Self::ResetView),
            egui::Key::H => Some(Self::ToggleGui),
            egui::Key::P => Some(Self::Screenshot),
            egui::Key::Escape => Some(Self::Quit),
            _ => None,
        }
    }
}

const PRESS_KEYS: &[egui::Key] = &[
    egui::Key::J,
    egui::Key::F,
    egui::Key::R,
    egui::Key::H,
    egui::Key::P,
    egui::Key::Escape,
];

/// Whether any pan/zoom key is currently held.
pub(crate) fn navigation_key_held(ctx: &egui::Context) -> bool {
    ctx.input(|i| HELD_KEYS.iter().any(|(key, _)| i.key_down(*key)))
}

/// Vertical wheel movement this frame, in wheel lines.
pub(crate) fn wheel_lines(ctx: &egui::Context) -> f32 {
    let points_per_line = ctx.options(|o| o.input_options.line_scroll_speed);
    if points_per_line <= 0.0 {
        return 0.0;
    }
    ctx.input(|i| i.raw_scroll_delta.y) / points_per_line
}

/// One frame of held-key navigation.
fn apply_held(controller: &mut ViewportController, held: &[HeldAction]) {
    // `+` and `=` share a physical key on most layouts; count it once.
    let mut zoomed_in = false;
    for action in held {
        match action {
            HeldAction::Pan(direction) => controller.pan(*direction),
            HeldAction::ZoomIn if !zoomed_in => {
                controller.zoom_in();
                zoomed_in = true;
            }
            HeldAction::ZoomIn => {}
            HeldAction::ZoomOut => controller.zoom_out(),
        }
    }
}

impl FractalVisApp {
    pub(crate) fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // Leave keys alone while a text field has focus.
        if ctx.memory(|m| m.focused().is_some()) {
            return;
        }

        let held: Vec<HeldAction> = ctx.input(|i| {
            HELD_KEYS
                .iter()
                .filter(|(key, _)| i.key_down(*key))
                .map(|(_, action)| *action)
                .collect()
        });
        apply_held(&mut self.controller, &held);

        let pressed: Vec<KeyAction> = ctx.input(|i| {
            PRESS_KEYS
                .iter()
                .filter(|key| i.key_pressed(**key))
                .filter_map(|key| KeyAction::for_key(*key))
                .collect()
        });
        for action in pressed {
            self.apply_key_action(ctx, action);
        }
    }

    pub(crate) fn apply_key_action(&mut self, ctx: &egui::Context, action: KeyAction) {
        debug!("Key action {action:?}");
        match action {
            KeyAction::ToggleJulia => self.controller.toggle_julia(),
            KeyAction::ToggleJuliaPause => self.controller.toggle_julia_pause(),
            KeyAction::ResetView => self.controller.reset_view(),
            KeyAction::ToggleGui => self.show_gui = !self.show_gui,
            KeyAction::Screenshot => self.request_screenshot(),
            KeyAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_press_key_has_an_action() {
        for key in PRESS_KEYS {
            assert!(KeyAction::for_key(*key).is_some(), "{key:?}");
        }
        assert_eq!(KeyAction::for_key(egui::Key::A), None);
    }

    #[test]
    fn held_keys_cover_arrows_and_zoom() {
        let actions: Vec<HeldAction> = HELD_KEYS.iter().map(|(_, a)| *a).collect();
        for dir in [
            PanDirection::Left,
            PanDirection::Right,
            PanDirection::Up,
            PanDirection::Down,
        ] {
            assert!(actions.contains(&HeldAction::Pan(dir)));
        }
        assert_eq!(
            actions.iter().filter(|a| **a == HeldAction::ZoomIn).count(),
            2
        );
        assert!(actions.contains(&HeldAction::ZoomOut));
    }

    #[test]
    fn plus_and_equals_together_zoom_once() {
        let mut controller = ViewportController::new();
        apply_held(&mut controller, &[HeldAction::ZoomIn, HeldAction::ZoomIn]);
        assert!((controller.view().zoom() - 2.0 * 0.99).abs() < 1e-12);

        apply_held(
            &mut controller,
            &[HeldAction::ZoomIn, HeldAction::Pan(PanDirection::Right)],
        );
        assert!((controller.view().zoom() - 2.0 * 0.99 * 0.99).abs() < 1e-12);
        assert!(controller.view().center().re > 0.0);
    }

    #[test]
    fn one_wheel_notch_zooms_ten_percent() {
        let ctx = egui::Context::default();
        let mut input = egui::RawInput::default();
        input.events.push(egui::Event::MouseWheel {
            unit: egui::MouseWheelUnit::Line,
            delta: egui::vec2(0.0, 1.0),
            modifiers: egui::Modifiers::NONE,
        });
        let mut lines = 0.0;
        let _ = ctx.run(input, |ctx| lines = wheel_lines(ctx));
        assert!((lines - 1.0).abs() < 1e-6, "lines = {lines}");

        let mut controller = ViewportController::new();
        controller.scroll(f64::from(lines));
        assert!((controller.view().zoom() - 1.8).abs() < 1e-9);
    }
}
