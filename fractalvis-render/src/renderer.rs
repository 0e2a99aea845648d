use std::path::Path;

use fractalvis_core::{FractalVariant, UniformSink, UniformUpdate};
use glow::HasContext;
use tracing::{debug, error, warn};

use crate::capture::CapturedFrame;
use crate::error::RenderError;
use crate::program::FractalProgram;
use crate::shader_source::load_source;

/// A region of the framebuffer in GL window coordinates (origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Owns one program per fractal variant plus the empty vertex array the
/// full-screen quad is drawn from.
///
/// Uniform batches are queued from the UI side and applied to whichever
/// program is drawn next, so an update is never lost when a frame is
/// skipped.
pub struct FractalRenderer {
    programs: Vec<FractalProgram>,
    vertex_array: glow::VertexArray,
    pending: Vec<UniformUpdate>,
    capture_requested: bool,
    captured: Option<crate::Result<CapturedFrame>>,
}

impl FractalRenderer {
    /// Compile every variant's program. `shader_dir` overrides the embedded
    /// assets.
    ///
    /// # Safety
    /// `gl` must be the current context on this thread.
    pub unsafe fn new(gl: &glow::Context, shader_dir: Option<&Path>) -> crate::Result<Self> {
        let mut programs = Vec::with_capacity(FractalVariant::ALL.len());
        for variant in FractalVariant::ALL {
            let built = load_source(variant, shader_dir)
                .and_then(|sources| FractalProgram::new(gl, variant, &sources));
            match built {
                Ok(program) => programs.push(program),
                Err(e) => {
                    error!("Failed to build {} shader: {e}", variant);
                    for program in &programs {
                        program.destroy(gl);
                    }
                    return Err(e);
                }
            }
        }

        let vertex_array = match gl.create_vertex_array() {
            Ok(vao) => vao,
            Err(message) => {
                for program in &programs {
                    program.destroy(gl);
                }
                return Err(RenderError::GlCreate {
                    what: "vertex array",
                    message,
                });
            }
        };

        Ok(Self {
            programs,
            vertex_array,
            pending: Vec::new(),
            capture_requested: false,
            captured: None,
        })
    }

    /// Queue uniform writes for the next draw.
    pub fn queue(&mut self, updates: Vec<UniformUpdate>) {
        self.pending.extend(updates);
    }

    /// Read the framebuffer back right after the next draw.
    pub fn request_capture(&mut self) {
        self.capture_requested = true;
    }

    /// The frame read back by the last requested capture, if it has happened.
    pub fn take_capture(&mut self) -> Option<crate::Result<CapturedFrame>> {
        self.captured.take()
    }

    /// Draw `variant` into the currently set GL viewport.
    ///
    /// # Safety
    /// `gl` must be the current context and the one passed to [`Self::new`].
    pub unsafe fn paint(&mut self, gl: &glow::Context, variant: FractalVariant, rect: PixelRect) {
        let Some(program) = self.programs.iter().find(|p| p.variant() == variant) else {
            warn!("No program for {}", variant);
            return;
        };

        let mut bound = program.bind(gl);
        if !self.pending.is_empty() {
            debug!("Applying {} uniform update(s) to {}", self.pending.len(), variant);
            bound.apply(&self.pending);
            self.pending.clear();
        }

        gl.bind_vertex_array(Some(self.vertex_array));
        gl.draw_arrays(glow::TRIANGLE_STRIP, 0, 4);

        if self.capture_requested {
            self.capture_requested = false;
            self.captured = Some(CapturedFrame::read(gl, rect));
        }

        gl.bind_vertex_array(None);
        gl.use_program(None);
    }

    /// Release every GL object.
    ///
    /// # Safety
    /// `gl` must be the context passed to [`Self::new`].
    pub unsafe fn destroy(&mut self, gl: &glow::Context) {
        for program in self.programs.drain(..) {
            program.destroy(gl);
        }
        gl.delete_vertex_array(self.vertex_array);
    }
}
