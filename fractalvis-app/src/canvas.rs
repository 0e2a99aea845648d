use std::sync::Arc;

use eframe::egui;
use eframe::egui_glow;
use tracing::{debug, warn};

use fractalvis_render::{ExportMetadata, PixelRect};

use crate::app::FractalVisApp;
use crate::input::wheel_lines;

impl FractalVisApp {
    /// Full-window fractal: sync viewport and Julia seed, hand the dirty
    /// uniforms to the renderer, then schedule the GL draw.
    pub(crate) fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let ctx = ui.ctx().clone();
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());

        let ppp = ctx.pixels_per_point();
        let width = (rect.width() * ppp).round().max(1.0) as u32;
        let height = (rect.height() * ppp).round().max(1.0) as u32;
        if self.controller.set_resolution(width, height) {
            debug!("Viewport resized to {width}x{height}");
        }

        let lines = wheel_lines(&ctx);
        if lines != 0.0 && response.hovered() {
            self.controller.scroll(f64::from(lines));
        }

        // The shader works in physical pixels with the origin at the top left.
        let cursor_px = ctx.input(|i| i.pointer.latest_pos()).map(|pos| {
            (
                f64::from((pos.x - rect.min.x) * ppp),
                f64::from((pos.y - rect.min.y) * ppp),
            )
        });
        let time = ctx.input(|i| i.time);
        self.controller.update_julia_seed(cursor_px, time);

        let updates = self.controller.take_updates();
        match self.renderer.lock() {
            Ok(mut renderer) => {
                renderer.queue(updates);
                if self.screenshot_requested {
                    renderer.request_capture();
                    self.screenshot_meta = Some(ExportMetadata::from_controller(&self.controller));
                    self.screenshot_requested = false;
                }
            }
            Err(_) => {
                warn!("Renderer lock poisoned; skipping frame");
                self.controller.invalidate_uniforms();
                return;
            }
        }

        let variant = self.controller.variant();
        let renderer = Arc::clone(&self.renderer);
        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(egui_glow::CallbackFn::new(move |info, painter| {
                let viewport = info.viewport_in_pixels();
                let target = PixelRect {
                    x: viewport.left_px,
                    y: viewport.from_bottom_px,
                    width: viewport.width_px.max(0) as u32,
                    height: viewport.height_px.max(0) as u32,
                };
                if let Ok(mut renderer) = renderer.lock() {
                    // SAFETY: egui_glow invokes the callback with its context current.
                    unsafe { renderer.paint(painter.gl(), variant, target) };
                }
            })),
        };
        ui.painter().add(callback);
    }
}
