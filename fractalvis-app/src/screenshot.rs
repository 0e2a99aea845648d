use tracing::{info, warn};

use fractalvis_render::export_png;

use crate::app::FractalVisApp;

impl FractalVisApp {
    pub(crate) fn request_screenshot(&mut self) {
        self.screenshot_requested = true;
    }

    /// Write out pixels read back during the previous frame's paint.
    /// Failures are logged and otherwise ignored.
    pub(crate) fn poll_screenshot(&mut self) {
        let captured = match self.renderer.lock() {
            Ok(mut renderer) => renderer.take_capture(),
            Err(_) => None,
        };
        let Some(captured) = captured else {
            return;
        };
        let Some(meta) = self.screenshot_meta.take() else {
            warn!("Captured frame without view metadata; discarding");
            return;
        };

        let dir = self.preferences.screenshot_directory();
        match captured.and_then(|frame| export_png(frame, &dir, &meta)) {
            Ok(path) => {
                info!("Saved screenshot to {}", path.display());
                self.last_screenshot = Some(path);
            }
            Err(e) => warn!("Screenshot failed: {e}"),
        }
    }
}
