//! Screenshot export: 8-bit RGB PNG with the view parameters embedded as
//! tEXt chunks.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use fractalvis_core::{Complex, FractalVariant, ViewportController};
use tracing::debug;

use crate::capture::CapturedFrame;

/// View parameters recorded alongside the pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportMetadata {
    pub variant: FractalVariant,
    pub center: Complex,
    pub zoom: f64,
    pub iterations: u32,
    /// Seed at capture time; `None` outside Julia mode.
    pub julia_seed: Option<Complex>,
}

impl ExportMetadata {
    pub fn from_controller(controller: &ViewportController) -> Self {
        let view = controller.view();
        Self {
            variant: controller.variant(),
            center: view.center(),
            zoom: view.zoom(),
            iterations: view.iterations(),
            julia_seed: controller.julia().enabled.then(|| controller.seed()),
        }
    }

    /// File name derived from the variant, Julia flag and center.
    pub fn file_name(&self) -> String {
        screenshot_file_name(self.variant, self.julia_seed.is_some(), self.center)
    }
}

/// `{variant}[_julia]_{re}_{im}.png`, coordinates with six decimals.
pub fn screenshot_file_name(variant: FractalVariant, julia: bool, center: Complex) -> String {
    format!(
        "{}{}_{:.6}_{:.6}.png",
        variant.slug(),
        if julia { "_julia" } else { "" },
        center.re,
        center.im,
    )
}

/// Flip `frame` into image order and write it to `dir`, creating the
/// directory if needed. Returns the path written.
pub fn export_png(
    frame: CapturedFrame,
    dir: &Path,
    metadata: &ExportMetadata,
) -> crate::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(metadata.file_name());
    let img = frame.into_image()?;

    let writer = BufWriter::new(File::create(&path)?);
    let mut encoder = png::Encoder::new(writer, img.width(), img.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder.add_text_chunk("Software".to_string(), "Fractal Visualiser".to_string())?;
    encoder.add_text_chunk("Description".to_string(), build_description(metadata))?;
    for (key, value) in build_metadata_pairs(metadata) {
        encoder.add_text_chunk(key, value)?;
    }

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(img.as_raw())?;
    png_writer.finish()?;

    debug!("Exported PNG {}x{} to {}", img.width(), img.height(), path.display());
    Ok(path)
}

fn build_description(meta: &ExportMetadata) -> String {
    let mut desc = format!(
        "{} - Center: {} {}i, Zoom: {}, Iterations: {}",
        meta.variant, meta.center.re, meta.center.im, meta.zoom, meta.iterations,
    );
    if let Some(seed) = meta.julia_seed {
        desc.push_str(&format!(", Julia seed: {} {}i", seed.re, seed.im));
    }
    desc
}

fn build_metadata_pairs(meta: &ExportMetadata) -> Vec<(String, String)> {
    let mut pairs = vec![
        ("FractalVisualiser.Variant".into(), meta.variant.label().to_string()),
        ("FractalVisualiser.CenterRe".into(), meta.center.re.to_string()),
        ("FractalVisualiser.CenterIm".into(), meta.center.im.to_string()),
        ("FractalVisualiser.Zoom".into(), meta.zoom.to_string()),
        ("FractalVisualiser.Iterations".into(), meta.iterations.to_string()),
    ];
    if let Some(seed) = meta.julia_seed {
        pairs.push(("FractalVisualiser.JuliaSeedRe".into(), seed.re.to_string()));
        pairs.push(("FractalVisualiser.JuliaSeedIm".into(), seed.im.to_string()));
    }
    pairs
}
