use glow::HasContext;
use image::RgbImage;

use crate::error::RenderError;
use crate::renderer::PixelRect;

/// Raw RGB pixels read back from the framebuffer.
///
/// Rows are in GL order: the first row is the bottom of the image.
#[derive(Debug, Clone)]
pub struct CapturedFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl CapturedFrame {
    /// Wrap an existing bottom-up RGB buffer.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> crate::Result<Self> {
        if width == 0 || height == 0 || pixels.len() != width as usize * height as usize * 3 {
            return Err(RenderError::InvalidDimensions {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Read `rect` of the current framebuffer.
    ///
    /// # Safety
    /// `gl` must be the current context on this thread.
    pub unsafe fn read(gl: &glow::Context, rect: PixelRect) -> crate::Result<Self> {
        let mut pixels = vec![0u8; rect.width as usize * rect.height as usize * 3];
        gl.pixel_store_i32(glow::PACK_ALIGNMENT, 1);
        gl.read_pixels(
            rect.x,
            rect.y,
            rect.width as i32,
            rect.height as i32,
            glow::RGB,
            glow::UNSIGNED_BYTE,
            glow::PixelPackData::Slice(Some(&mut pixels)),
        );
        Self::new(rect.width, rect.height, pixels)
    }

    /// Convert to a top-down image.
    pub fn into_image(self) -> crate::Result<RgbImage> {
        let (width, height, len) = (self.width, self.height, self.pixels.len());
        let mut img = RgbImage::from_raw(width, height, self.pixels)
            .ok_or(RenderError::InvalidDimensions { width, height, len })?;
        image::imageops::flip_vertical_in_place(&mut img);
        Ok(img)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffer() {
        assert!(CapturedFrame::new(2, 2, vec![0; 11]).is_err());
        assert!(CapturedFrame::new(0, 2, vec![]).is_err());
        assert!(CapturedFrame::new(2, 2, vec![0; 12]).is_ok());
    }

    #[test]
    fn into_image_flips_rows() {
        // Bottom row red, top row blue in GL order.
        let mut pixels = Vec::new();
        pixels.extend_from_slice(&[255, 0, 0, 255, 0, 0]);
        pixels.extend_from_slice(&[0, 0, 255, 0, 0, 255]);
        let img = CapturedFrame::new(2, 2, pixels).unwrap().into_image().unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 0, 255]);
        assert_eq!(img.get_pixel(0, 1).0, [255, 0, 0]);
    }

    #[test]
    fn odd_row_width_has_no_padding() {
        // 3 px * 3 bytes = 9 bytes per row, not a multiple of 4.
        let pixels: Vec<u8> = (0..27).collect();
        let img = CapturedFrame::new(3, 3, pixels).unwrap().into_image().unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [18, 19, 20]);
        assert_eq!(img.get_pixel(2, 2).0, [6, 7, 8]);
    }
}
