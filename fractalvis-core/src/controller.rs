use tracing::debug;

use crate::complex::Complex;
use crate::error::CoreError;
use crate::julia::{JuliaOrbit, JuliaState};
use crate::mapper::PlaneWindow;
use crate::palette::{color_presets, Palette, Rgb, PALETTE_SLOTS};
use crate::uniforms::{DirtyUniforms, Uniform, UniformUpdate, UniformValue};
use crate::variant::FractalVariant;
use crate::view::{PanDirection, ViewState};

/// Owns everything the shaders are parameterised by and turns mutations into
/// uniform uploads.
///
/// Call order per frame: input handlers mutate state, then
/// [`update_julia_seed`](Self::update_julia_seed), then
/// [`take_updates`](Self::take_updates) right before the draw is issued.
#[derive(Debug, Clone)]
pub struct ViewportController {
    view: ViewState,
    variant: FractalVariant,
    julia: JuliaState,
    palette: Palette,
    preset: Option<usize>,
    resolution: [u32; 2],
    seed: Complex,
    dirty: DirtyUniforms,
}

impl ViewportController {
    pub fn new() -> Self {
        Self::from_parts(
            ViewState::default(),
            FractalVariant::default(),
            JuliaState::default(),
            Palette::default(),
        )
    }

    /// Rebuild a controller from saved state. Every uniform starts dirty.
    pub fn from_parts(
        view: ViewState,
        variant: FractalVariant,
        mut julia: JuliaState,
        palette: Palette,
    ) -> Self {
        // Saved orbit values bypass the setters on load.
        let (radius, speed) = (julia.orbit.radius(), julia.orbit.speed());
        julia.orbit.set_radius(radius);
        julia.orbit.set_speed(speed);
        let preset = color_presets()
            .iter()
            .position(|p| p.colors == *palette.colors());
        Self {
            view,
            variant,
            julia,
            palette,
            preset,
            resolution: [0, 0],
            seed: julia.base_seed,
            dirty: DirtyUniforms::all(),
        }
    }

    // -- Accessors --

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn variant(&self) -> FractalVariant {
        self.variant
    }

    pub fn julia(&self) -> &JuliaState {
        &self.julia
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Index of the preset the palette currently matches, if any.
    pub fn preset(&self) -> Option<usize> {
        self.preset
    }

    pub fn resolution(&self) -> [u32; 2] {
        self.resolution
    }

    /// The seed most recently pushed to `mousePos`.
    pub fn seed(&self) -> Complex {
        self.seed
    }

    /// Plane region visible at the current resolution.
    pub fn plane_window(&self) -> crate::Result<PlaneWindow> {
        PlaneWindow::new(&self.view, self.resolution[0], self.resolution[1])
    }

    // -- Viewport --

    /// Record the drawable size in pixels. Returns `true` if it changed.
    pub fn set_resolution(&mut self, width: u32, height: u32) -> bool {
        if self.resolution == [width, height] {
            return false;
        }
        self.resolution = [width, height];
        self.dirty.mark(Uniform::Resolution);
        true
    }

    // -- Navigation --

    pub fn pan(&mut self, direction: PanDirection) {
        self.view.pan(direction);
        self.dirty.mark(Uniform::Location);
    }

    pub fn zoom_in(&mut self) {
        self.view.zoom_in();
        self.dirty.mark(Uniform::Zoom);
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_out();
        self.dirty.mark(Uniform::Zoom);
    }

    /// Apply a scroll-wheel event measured in lines.
    pub fn scroll(&mut self, lines: f64) {
        if self.view.scroll(lines) {
            self.dirty.mark(Uniform::Zoom);
        } else {
            debug!("Ignored scroll of {lines} lines at zoom {}", self.view.zoom());
        }
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
        self.dirty.mark(Uniform::Location);
        self.dirty.mark(Uniform::Zoom);
    }

    pub fn set_iterations(&mut self, iterations: u32) -> crate::Result<()> {
        if iterations != self.view.iterations() {
            self.view.set_iterations(iterations)?;
            self.dirty.mark(Uniform::Iterations);
        }
        Ok(())
    }

    // -- Fractal variant --

    /// Switch the active shader. The new program has never seen this state,
    /// so the whole uniform set is queued again. Returns `true` on change.
    pub fn select_variant(&mut self, variant: FractalVariant) -> bool {
        if variant == self.variant {
            return false;
        }
        debug!("Switching fractal {} -> {}", self.variant, variant);
        self.variant = variant;
        self.dirty.mark_all();
        true
    }

    // -- Julia mode --

    pub fn set_julia_enabled(&mut self, enabled: bool) {
        if self.julia.enabled != enabled {
            self.julia.enabled = enabled;
            self.dirty.mark(Uniform::JuliaMode);
        }
    }

    pub fn toggle_julia(&mut self) {
        self.set_julia_enabled(!self.julia.enabled);
    }

    pub fn set_julia_paused(&mut self, paused: bool) {
        self.julia.paused = paused;
    }

    pub fn toggle_julia_pause(&mut self) {
        self.julia.paused = !self.julia.paused;
    }

    /// Orbit settings only shape the seed computation; no uniform depends
    /// on them directly.
    pub fn orbit_mut(&mut self) -> &mut JuliaOrbit {
        &mut self.julia.orbit
    }

    /// Recompute the Julia seed for this frame.
    ///
    /// `cursor_px` is the cursor in pixels relative to the top-left of the
    /// drawable area; it is truncated to whole pixels before mapping. `time`
    /// is wall-clock seconds since start.
    pub fn update_julia_seed(&mut self, cursor_px: Option<(f64, f64)>, time: f64) {
        let cursor = match (cursor_px, self.plane_window()) {
            (Some((x, y)), Ok(window)) => Some(window.pixel_to_plane(x.trunc(), y.trunc())),
            _ => None,
        };
        if let Some(seed) = self.julia.frame_seed(cursor, time) {
            self.seed = seed;
            self.dirty.mark(Uniform::MousePos);
        }
    }

    // -- Palette --

    pub fn set_color(&mut self, slot: usize, rgb: Rgb) {
        if slot >= PALETTE_SLOTS {
            return;
        }
        self.palette.set(slot, rgb);
        self.dirty.mark(Uniform::color(slot));
        self.preset = color_presets()
            .iter()
            .position(|p| p.colors == *self.palette.colors());
    }

    /// Load all four stops from the preset table.
    pub fn apply_preset(&mut self, index: usize) -> crate::Result<()> {
        let preset = color_presets()
            .get(index)
            .ok_or_else(|| CoreError::UnknownPreset(format!("#{index}")))?;
        self.palette.apply_preset(preset);
        self.preset = Some(index);
        for slot in 0..PALETTE_SLOTS {
            self.dirty.mark(Uniform::color(slot));
        }
        Ok(())
    }

    // -- Uniform synchronization --

    /// Current value of `uniform` as it should appear in the shader.
    pub fn uniform_value(&self, uniform: Uniform) -> UniformValue {
        match uniform {
            Uniform::Resolution => UniformValue::IVec2([
                self.resolution[0].min(i32::MAX as u32) as i32,
                self.resolution[1].min(i32::MAX as u32) as i32,
            ]),
            Uniform::Location => UniformValue::Vec2(self.view.center().to_f32()),
            Uniform::MousePos => UniformValue::Vec2(self.seed.to_f32()),
            Uniform::JuliaMode => UniformValue::Bool(self.julia.enabled),
            Uniform::Zoom => UniformValue::Float(self.view.zoom() as f32),
            Uniform::Iterations => UniformValue::Int(self.view.iterations() as i32),
            Uniform::Color1 => UniformValue::Vec3(self.palette.get(0)),
            Uniform::Color2 => UniformValue::Vec3(self.palette.get(1)),
            Uniform::Color3 => UniformValue::Vec3(self.palette.get(2)),
            Uniform::Color4 => UniformValue::Vec3(self.palette.get(3)),
        }
    }

    /// Queue a full upload on the next [`take_updates`](Self::take_updates).
    pub fn invalidate_uniforms(&mut self) {
        self.dirty.mark_all();
    }

    /// Drain everything that changed since the last call.
    pub fn take_updates(&mut self) -> Vec<UniformUpdate> {
        if self.dirty.is_empty() {
            return Vec::new();
        }
        let updates: Vec<_> = self
            .dirty
            .drain()
            .map(|uniform| UniformUpdate {
                uniform,
                value: self.uniform_value(uniform),
            })
            .collect();
        debug!("{} uniform update(s) for {}", updates.len(), self.variant);
        updates
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> ViewportController {
        let mut c = ViewportController::new();
        c.set_resolution(1280, 720);
        c.take_updates();
        c
    }

    fn touched(updates: &[UniformUpdate]) -> Vec<Uniform> {
        updates.iter().map(|u| u.uniform).collect()
    }

    #[test]
    fn first_frame_pushes_everything() {
        let mut c = ViewportController::new();
        c.set_resolution(800, 600);
        let updates = c.take_updates();
        assert_eq!(touched(&updates), Uniform::ALL);
        assert!(c.take_updates().is_empty());
    }

    #[test]
    fn pan_marks_location_only() {
        let mut c = ready();
        c.pan(PanDirection::Left);
        let updates = c.take_updates();
        assert_eq!(touched(&updates), [Uniform::Location]);
        assert_eq!(updates[0].value, UniformValue::Vec2([-0.02, 0.0]));
    }

    #[test]
    fn zoom_and_scroll_mark_zoom() {
        let mut c = ready();
        c.zoom_in();
        assert_eq!(touched(&c.take_updates()), [Uniform::Zoom]);
        c.scroll(-1.0);
        assert_eq!(touched(&c.take_updates()), [Uniform::Zoom]);
        c.scroll(50.0);
        assert!(c.take_updates().is_empty());
    }

    #[test]
    fn resolution_change_is_tracked() {
        let mut c = ready();
        assert!(!c.set_resolution(1280, 720));
        assert!(c.take_updates().is_empty());
        assert!(c.set_resolution(1920, 1080));
        let updates = c.take_updates();
        assert_eq!(updates[0].value, UniformValue::IVec2([1920, 1080]));
    }

    #[test]
    fn reset_from_any_state() {
        let mut c = ready();
        for _ in 0..40 {
            c.pan(PanDirection::Up);
            c.pan(PanDirection::Right);
            c.zoom_in();
        }
        c.reset_view();
        assert_eq!(c.view().center(), Complex::ZERO);
        assert!((c.view().zoom() - 2.0).abs() < 1e-12);
        assert_eq!(touched(&c.take_updates()), [Uniform::Location, Uniform::Zoom]);
    }

    #[test]
    fn switching_variant_preserves_state_and_pushes_all() {
        let mut c = ready();
        c.pan(PanDirection::Down);
        c.zoom_in();
        c.set_iterations(1234).unwrap();
        c.set_julia_enabled(true);
        c.apply_preset(2).unwrap();
        c.take_updates();

        let view = *c.view();
        let julia = *c.julia();
        let palette = *c.palette();

        assert!(c.select_variant(FractalVariant::Tricorn));
        assert_eq!(c.variant(), FractalVariant::Tricorn);
        assert_eq!(*c.view(), view);
        assert_eq!(*c.julia(), julia);
        assert_eq!(*c.palette(), palette);

        let updates = c.take_updates();
        assert_eq!(touched(&updates), Uniform::ALL);
        assert!(updates.contains(&UniformUpdate {
            uniform: Uniform::Iterations,
            value: UniformValue::Int(1234),
        }));
    }

    #[test]
    fn selecting_same_variant_is_noop() {
        let mut c = ready();
        assert!(!c.select_variant(FractalVariant::Mandelbrot));
        assert!(c.take_updates().is_empty());
    }

    #[test]
    fn preset_marks_all_colors_and_is_idempotent() {
        let mut c = ready();
        c.apply_preset(1).unwrap();
        let first = c.take_updates();
        assert_eq!(
            touched(&first),
            [Uniform::Color1, Uniform::Color2, Uniform::Color3, Uniform::Color4]
        );
        let palette = *c.palette();
        c.apply_preset(1).unwrap();
        assert_eq!(*c.palette(), palette);
        assert_eq!(c.take_updates(), first);
        assert_eq!(c.preset(), Some(1));
    }

    #[test]
    fn unknown_preset_leaves_palette() {
        let mut c = ready();
        let before = *c.palette();
        assert!(c.apply_preset(999).is_err());
        assert_eq!(*c.palette(), before);
        assert!(c.take_updates().is_empty());
    }

    #[test]
    fn editing_a_color_detaches_preset() {
        let mut c = ready();
        assert_eq!(c.preset(), Some(0));
        c.set_color(2, [0.1, 0.2, 0.3]);
        assert_eq!(c.preset(), None);
        assert_eq!(touched(&c.take_updates()), [Uniform::Color3]);
        c.set_color(7, [1.0, 1.0, 1.0]);
        assert!(c.take_updates().is_empty());
    }

    #[test]
    fn julia_toggle_marks_mode() {
        let mut c = ready();
        c.toggle_julia();
        let updates = c.take_updates();
        assert_eq!(updates[0].value, UniformValue::Bool(true));
        c.set_julia_enabled(true);
        assert!(c.take_updates().is_empty());
    }

    #[test]
    fn julia_seed_follows_cursor() {
        let mut c = ready();
        c.update_julia_seed(Some((640.0, 360.0)), 0.0);
        assert!(c.take_updates().is_empty(), "julia off pushes nothing");

        c.set_julia_enabled(true);
        c.take_updates();
        c.update_julia_seed(Some((640.7, 360.2)), 0.0);
        let updates = c.take_updates();
        assert_eq!(touched(&updates), [Uniform::MousePos]);
        // Centre of a default view maps to the origin.
        assert!(c.seed().re.abs() < 1e-12);
        assert!(c.seed().im.abs() < 1e-12);

        c.update_julia_seed(Some((0.0, 0.0)), 0.0);
        let window = c.plane_window().unwrap();
        assert!((c.seed().re - window.min_re).abs() < 1e-12);
        assert!((c.seed().im - window.min_im).abs() < 1e-12);
    }

    #[test]
    fn paused_julia_holds_seed() {
        let mut c = ready();
        c.set_julia_enabled(true);
        c.update_julia_seed(Some((100.0, 100.0)), 0.0);
        let held = c.seed();
        c.take_updates();

        c.toggle_julia_pause();
        c.update_julia_seed(Some((900.0, 500.0)), 1.0);
        assert_eq!(c.seed(), held);
        assert!(c.take_updates().is_empty());

        c.orbit_mut().enabled = true;
        c.update_julia_seed(Some((900.0, 500.0)), 1.0);
        assert_ne!(c.seed(), held);
        assert_eq!(c.julia().base_seed, held);
    }

    #[test]
    fn no_seed_without_resolution() {
        let mut c = ViewportController::new();
        c.set_julia_enabled(true);
        c.update_julia_seed(Some((10.0, 10.0)), 0.0);
        assert_eq!(c.seed(), Complex::ZERO);
    }

    #[test]
    fn from_parts_recognises_preset() {
        let mut palette = Palette::default();
        palette.apply_preset(&color_presets()[4]);
        let mut c = ViewportController::from_parts(
            ViewState::default(),
            FractalVariant::Mandelbulb,
            JuliaState::default(),
            palette,
        );
        assert_eq!(c.preset(), Some(4));
        assert_eq!(c.variant(), FractalVariant::Mandelbulb);
        assert_eq!(c.take_updates().len(), Uniform::COUNT);
    }
}
