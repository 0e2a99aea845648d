use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use eframe::egui;
use tracing::{error, info, warn};

use fractalvis_core::ViewportController;
use fractalvis_render::{ExportMetadata, FractalRenderer, RenderError};

use crate::preferences::{AppPreferences, LastView};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub(crate) const HUD_MARGIN: f32 = 8.0;
pub(crate) const HUD_CORNER_RADIUS: f32 = 6.0;

// ---------------------------------------------------------------------------
// Application
// ---------------------------------------------------------------------------

pub(crate) struct FractalVisApp {
    pub(crate) controller: ViewportController,
    /// GL state. Shared with the paint callback, which must be `Send + Sync`.
    pub(crate) renderer: Arc<Mutex<FractalRenderer>>,
    pub(crate) preferences: AppPreferences,

    pub(crate) show_gui: bool,
    pub(crate) show_settings: bool,

    /// Set by the screenshot key/button, consumed by the next canvas paint.
    pub(crate) screenshot_requested: bool,
    /// View metadata for the frame whose pixels are being read back.
    pub(crate) screenshot_meta: Option<ExportMetadata>,
    pub(crate) last_screenshot: Option<PathBuf>,

    // Settings text buffers
    pub(crate) screenshots_dir_buf: String,
    pub(crate) shaders_dir_buf: String,
}

impl FractalVisApp {
    pub(crate) fn new(
        cc: &eframe::CreationContext<'_>,
        preferences: AppPreferences,
    ) -> Result<Self, RenderError> {
        let Some(gl) = cc.gl.as_ref() else {
            error!("No OpenGL context; the glow renderer is required");
            return Err(RenderError::GlCreate {
                what: "context",
                message: "eframe was started without the glow renderer".into(),
            });
        };

        let shader_dir = preferences.shader_directory();
        // SAFETY: the context is current during app creation.
        let renderer = unsafe { FractalRenderer::new(gl, shader_dir.as_deref()) }.map_err(|e| {
            error!("Failed to build fractal programs: {e}");
            e
        })?;

        let controller = preferences.initial_controller();

        info!(
            "Viewer ready: {} with {} iterations",
            controller.variant(),
            controller.view().iterations()
        );

        Ok(Self {
            controller,
            renderer: Arc::new(Mutex::new(renderer)),
            show_gui: preferences.show_gui_on_start,
            show_settings: false,
            screenshot_requested: false,
            screenshot_meta: None,
            last_screenshot: None,
            screenshots_dir_buf: preferences.screenshots_dir.clone(),
            shaders_dir_buf: preferences.shaders_dir.clone(),
            preferences,
        })
    }

    /// Keep repainting while something changes without input events.
    fn needs_continuous_repaint(&self, ctx: &egui::Context) -> bool {
        let julia = self.controller.julia();
        let animating = julia.enabled && (!julia.paused || julia.orbit.enabled);
        animating || crate::input::navigation_key_held(ctx)
    }
}

// ---------------------------------------------------------------------------
// eframe::App
// ---------------------------------------------------------------------------

impl eframe::App for FractalVisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());
        self.poll_screenshot();

        self.handle_keyboard(ctx);

        if self.show_gui {
            self.show_control_menu(ctx);
            self.show_status(ctx);
            self.show_settings_window(ctx);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_canvas(ui));

        if self.needs_continuous_repaint(ctx) || self.screenshot_meta.is_some() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.preferences.last_view = Some(LastView::capture(&self.controller));
        self.preferences.save();

        match (gl, self.renderer.lock()) {
            // SAFETY: eframe calls on_exit with the context still current.
            (Some(gl), Ok(mut renderer)) => unsafe { renderer.destroy(gl) },
            (None, _) => warn!("No GL context at exit; programs left to the driver"),
            (_, Err(_)) => warn!("Renderer lock poisoned at exit"),
        }
        info!("Saved preferences on exit");
    }
}
