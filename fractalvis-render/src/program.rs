use fractalvis_core::{FractalVariant, Uniform, UniformSink, UniformValue};
use glow::HasContext;
use tracing::{info, warn};

use crate::error::RenderError;
use crate::shader_source::ShaderSources;

/// A linked GL program for one fractal variant, with its own uniform
/// location table.
///
/// Locations are looked up once after linking. A uniform the driver
/// optimised away (or the asset never declared) keeps a `None` slot and
/// writes to it are skipped.
pub struct FractalProgram {
    variant: FractalVariant,
    program: glow::Program,
    locations: [Option<glow::UniformLocation>; Uniform::COUNT],
}

impl FractalProgram {
    /// Compile and link both stages.
    ///
    /// # Safety
    /// `gl` must be the current context on this thread.
    pub unsafe fn new(
        gl: &glow::Context,
        variant: FractalVariant,
        sources: &ShaderSources,
    ) -> crate::Result<Self> {
        let program = gl.create_program().map_err(|message| RenderError::GlCreate {
            what: "program",
            message,
        })?;

        let stages = [
            (glow::VERTEX_SHADER, "vertex", sources.vertex.as_str()),
            (glow::FRAGMENT_SHADER, "fragment", sources.fragment.as_str()),
        ];
        let mut shaders = Vec::with_capacity(stages.len());
        for (kind, stage, source) in stages {
            match compile_stage(gl, kind, stage, source, variant) {
                Ok(shader) => {
                    gl.attach_shader(program, shader);
                    shaders.push(shader);
                }
                Err(e) => {
                    for shader in shaders {
                        gl.delete_shader(shader);
                    }
                    gl.delete_program(program);
                    return Err(e);
                }
            }
        }

        gl.link_program(program);
        let linked = gl.get_program_link_status(program);
        for shader in shaders {
            gl.detach_shader(program, shader);
            gl.delete_shader(shader);
        }
        if !linked {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            return Err(RenderError::Link {
                name: variant.label().to_string(),
                log,
            });
        }

        let locations = Uniform::ALL.map(|u| gl.get_uniform_location(program, u.name()));
        for uniform in Uniform::ALL {
            if locations[uniform.index()].is_none() {
                warn!("{} shader has no active `{}` uniform", variant, uniform.name());
            }
        }

        info!("Compiled {} shader program", variant);
        Ok(Self {
            variant,
            program,
            locations,
        })
    }

    pub fn variant(&self) -> FractalVariant {
        self.variant
    }

    /// Make this the active program and return a sink for its uniforms.
    ///
    /// # Safety
    /// `gl` must be the current context and must have created this program.
    pub unsafe fn bind<'a>(&'a self, gl: &'a glow::Context) -> BoundProgram<'a> {
        gl.use_program(Some(self.program));
        BoundProgram { gl, program: self }
    }

    /// # Safety
    /// `gl` must be the context that created this program.
    pub unsafe fn destroy(&self, gl: &glow::Context) {
        gl.delete_program(self.program);
    }
}

unsafe fn compile_stage(
    gl: &glow::Context,
    kind: u32,
    stage: &'static str,
    source: &str,
    variant: FractalVariant,
) -> crate::Result<glow::Shader> {
    let shader = gl.create_shader(kind).map_err(|message| RenderError::GlCreate {
        what: "shader",
        message,
    })?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);
    if !gl.get_shader_compile_status(shader) {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(RenderError::Compile {
            name: variant.label().to_string(),
            stage,
            log,
        });
    }
    Ok(shader)
}

/// A [`FractalProgram`] that is currently in use; uniform writes go to it.
pub struct BoundProgram<'a> {
    gl: &'a glow::Context,
    program: &'a FractalProgram,
}

impl UniformSink for BoundProgram<'_> {
    fn set_uniform(&mut self, uniform: Uniform, value: UniformValue) {
        let Some(location) = self.program.locations[uniform.index()].as_ref() else {
            return;
        };
        let gl = self.gl;
        // SAFETY: `bind` made this program current on this context.
        unsafe {
            match value {
                UniformValue::IVec2([x, y]) => gl.uniform_2_i32(Some(location), x, y),
                UniformValue::Vec2([x, y]) => gl.uniform_2_f32(Some(location), x, y),
                UniformValue::Bool(b) => gl.uniform_1_i32(Some(location), b as i32),
                UniformValue::Float(f) => gl.uniform_1_f32(Some(location), f),
                UniformValue::Int(i) => gl.uniform_1_i32(Some(location), i),
                UniformValue::Vec3([r, g, b]) => gl.uniform_3_f32(Some(location), r, g, b),
            }
        }
    }
}
