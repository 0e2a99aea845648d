//! Shader assets: one text file per fractal variant holding both stages.
//!
//! ```text
//! #shader vertex
//! ...GLSL...
//! #shader fragment
//! ...GLSL...
//! ```
//!
//! Lines before the first `#shader` directive, and lines under a directive
//! naming neither stage, are dropped.

use std::fs;
use std::path::Path;

use fractalvis_core::FractalVariant;
use tracing::{debug, info};

use crate::error::RenderError;

/// Vertex and fragment GLSL split out of a single asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

#[derive(Clone, Copy)]
enum Section {
    Skip,
    Vertex,
    Fragment,
}

impl ShaderSources {
    /// Split `text` into its two stages. `name` is only used in errors.
    pub fn parse(name: &str, text: &str) -> crate::Result<Self> {
        let mut vertex = String::new();
        let mut fragment = String::new();
        let mut section = Section::Skip;

        for line in text.lines() {
            if line.contains("#shader") {
                section = if line.contains("vertex") {
                    Section::Vertex
                } else if line.contains("fragment") {
                    Section::Fragment
                } else {
                    Section::Skip
                };
                continue;
            }
            let target = match section {
                Section::Skip => continue,
                Section::Vertex => &mut vertex,
                Section::Fragment => &mut fragment,
            };
            target.push_str(line);
            target.push('\n');
        }

        if vertex.trim().is_empty() {
            return Err(RenderError::MissingStage {
                name: name.to_string(),
                stage: "vertex",
            });
        }
        if fragment.trim().is_empty() {
            return Err(RenderError::MissingStage {
                name: name.to_string(),
                stage: "fragment",
            });
        }
        Ok(Self { vertex, fragment })
    }
}

/// The asset compiled into the binary for `variant`.
pub fn embedded_source(variant: FractalVariant) -> &'static str {
    match variant {
        FractalVariant::Mandelbrot => include_str!("../shaders/mandelbrot.shader"),
        FractalVariant::BurningShip => include_str!("../shaders/burningship.shader"),
        FractalVariant::Tricorn => include_str!("../shaders/tricorn.shader"),
        FractalVariant::Mandelbulb => include_str!("../shaders/mandelbulb.shader"),
    }
}

/// Load and split the asset for `variant`.
///
/// With `dir` set, `<dir>/<slug>.shader` is read from disk and a missing file
/// is an error; otherwise the embedded copy is used.
pub fn load_source(variant: FractalVariant, dir: Option<&Path>) -> crate::Result<ShaderSources> {
    match dir {
        Some(dir) => {
            let path = dir.join(format!("{}.shader", variant.slug()));
            let text = fs::read_to_string(&path).map_err(|source| RenderError::ShaderAsset {
                path: path.display().to_string(),
                source,
            })?;
            info!("Loaded {} shader from {}", variant, path.display());
            ShaderSources::parse(&path.display().to_string(), &text)
        }
        None => {
            debug!("Using embedded {} shader", variant);
            ShaderSources::parse(variant.slug(), embedded_source(variant))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_both_stages() {
        let src = "#shader vertex\nvoid main() { v(); }\n#shader fragment\nvoid main() { f(); }\n";
        let s = ShaderSources::parse("t", src).unwrap();
        assert_eq!(s.vertex, "void main() { v(); }\n");
        assert_eq!(s.fragment, "void main() { f(); }\n");
    }

    #[test]
    fn ignores_preamble_and_unknown_sections() {
        let src = "// header comment\n#shader vertex\nA\n#shader geometry\nIGNORED\n#shader fragment\nB\n";
        let s = ShaderSources::parse("t", src).unwrap();
        assert_eq!(s.vertex, "A\n");
        assert_eq!(s.fragment, "B\n");
    }

    #[test]
    fn repeated_section_appends() {
        let src = "#shader fragment\nB1\n#shader vertex\nA\n#shader fragment\nB2\n";
        let s = ShaderSources::parse("t", src).unwrap();
        assert_eq!(s.fragment, "B1\nB2\n");
    }

    #[test]
    fn missing_stage_is_an_error() {
        let err = ShaderSources::parse("only_vertex", "#shader vertex\nA\n").unwrap_err();
        assert!(matches!(err, RenderError::MissingStage { stage: "fragment", .. }));
        let err = ShaderSources::parse("empty", "").unwrap_err();
        assert!(matches!(err, RenderError::MissingStage { stage: "vertex", .. }));
    }

    #[test]
    fn embedded_assets_parse_and_declare_contract() {
        for variant in FractalVariant::ALL {
            let s = load_source(variant, None).unwrap();
            assert!(s.vertex.contains("#version"), "{variant} vertex");
            for uniform in fractalvis_core::Uniform::ALL {
                assert!(
                    s.fragment.contains(uniform.name()),
                    "{variant} fragment lacks {}",
                    uniform.name()
                );
            }
        }
    }

    #[test]
    fn missing_override_file_is_reported() {
        let dir = std::env::temp_dir().join("fractalvis_no_shaders_here");
        let err = load_source(FractalVariant::Tricorn, Some(&dir)).unwrap_err();
        assert!(matches!(err, RenderError::ShaderAsset { .. }));
    }

    #[test]
    fn override_directory_is_read() {
        let dir = std::env::temp_dir().join("fractalvis_test_shader_override");
        let _ = fs::create_dir_all(&dir);
        fs::write(
            dir.join("burningship.shader"),
            "#shader vertex\nVERT\n#shader fragment\nFRAG\n",
        )
        .unwrap();
        let s = load_source(FractalVariant::BurningShip, Some(&dir)).unwrap();
        assert_eq!(s.vertex, "VERT\n");
        assert_eq!(s.fragment, "FRAG\n");
        let _ = fs::remove_dir_all(&dir);
    }
}
