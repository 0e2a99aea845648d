use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use fractalvis_core::{
    find_preset, FractalVariant, JuliaState, Palette, ViewState, ViewportController,
};

// ---------------------------------------------------------------------------
// Last-view snapshot
// ---------------------------------------------------------------------------

/// Everything needed to put the controller back where the user left it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastView {
    pub variant: FractalVariant,
    pub view: ViewState,
    pub julia: JuliaState,
    pub palette: Palette,
}

impl LastView {
    pub fn capture(controller: &ViewportController) -> Self {
        Self {
            variant: controller.variant(),
            view: *controller.view(),
            julia: *controller.julia(),
            palette: *controller.palette(),
        }
    }

    pub fn into_controller(self) -> ViewportController {
        ViewportController::from_parts(self.view, self.variant, self.julia, self.palette)
    }
}

// ---------------------------------------------------------------------------
// Application preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppPreferences {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    #[serde(default = "default_iterations")]
    pub default_iterations: u32,
    /// Fractal shown on a fresh start, by name (`"burningship"`, `"Tricorn"`...).
    #[serde(default = "default_variant")]
    pub default_variant: String,
    /// Name of a built-in color preset.
    #[serde(default = "default_preset")]
    pub default_preset: String,
    #[serde(default = "default_true")]
    pub show_gui_on_start: bool,
    /// Folder holding `<variant>.shader` overrides. Empty means the embedded assets.
    #[serde(default)]
    pub shaders_dir: String,
    /// Screenshot folder. Empty means `images/` next to the executable.
    #[serde(default)]
    pub screenshots_dir: String,
    #[serde(default = "default_true")]
    pub restore_last_view: bool,
    #[serde(default)]
    pub last_view: Option<LastView>,
}

fn default_window_width() -> f32 {
    1280.0
}
fn default_window_height() -> f32 {
    720.0
}
fn default_iterations() -> u32 {
    ViewState::DEFAULT_ITERATIONS
}
fn default_variant() -> String {
    FractalVariant::default().slug().to_string()
}
fn default_preset() -> String {
    "Classic".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            default_iterations: default_iterations(),
            default_variant: default_variant(),
            default_preset: default_preset(),
            show_gui_on_start: true,
            shaders_dir: String::new(),
            screenshots_dir: String::new(),
            restore_last_view: true,
            last_view: None,
        }
    }
}

impl AppPreferences {
    /// Load preferences from next to the executable, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&crate::app_dir::preferences_file())
    }

    /// Persist preferences to disk.
    pub fn save(&self) {
        self.save_to(&crate::app_dir::preferences_file());
    }

    fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No preferences file at {}", path.display());
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<AppPreferences>(&json) {
                Ok(prefs) => {
                    info!("Loaded preferences from {}", path.display());
                    return prefs;
                }
                Err(e) => error!("Failed to parse preferences: {e}"),
            },
            Err(e) => error!("Failed to read preferences file: {e}"),
        }
        Self::default()
    }

    fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, &json) {
                    error!("Failed to write preferences: {e}");
                } else {
                    debug!("Saved preferences");
                }
            }
            Err(e) => error!("Failed to serialize preferences: {e}"),
        }
    }

    /// Where screenshots go.
    pub fn screenshot_directory(&self) -> PathBuf {
        let dir = self.screenshots_dir.trim();
        if dir.is_empty() {
            crate::app_dir::default_screenshot_dir()
        } else {
            PathBuf::from(dir)
        }
    }

    /// Shader override folder, if one is configured.
    pub fn shader_directory(&self) -> Option<PathBuf> {
        let dir = self.shaders_dir.trim();
        (!dir.is_empty()).then(|| PathBuf::from(dir))
    }

    /// Controller for start-up: the saved view if enabled, otherwise
    /// defaults adjusted by the iteration and preset preferences.
    pub fn initial_controller(&self) -> ViewportController {
        if self.restore_last_view {
            if let Some(last) = self.last_view.clone() {
                info!(
                    "Restoring last view: {} at zoom {:.3e}",
                    last.variant,
                    last.view.zoom()
                );
                return last.into_controller();
            }
        }
        let mut controller = ViewportController::new();
        if let Err(e) = controller.set_iterations(self.default_iterations) {
            warn!("Ignoring default iterations preference: {e}");
        }
        match self.default_variant.parse::<FractalVariant>() {
            Ok(variant) => {
                controller.select_variant(variant);
            }
            Err(e) => warn!("Ignoring default fractal preference: {e}"),
        }
        match find_preset(&self.default_preset) {
            Ok((index, _)) => {
                if let Err(e) = controller.apply_preset(index) {
                    warn!("Ignoring default preset preference: {e}");
                }
            }
            Err(e) => warn!("Ignoring default preset preference: {e}"),
        }
        controller
    }
}
