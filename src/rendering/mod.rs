//! Decode-and-rasterize pipeline

pub mod input;
pub mod layout;
pub mod options;
pub mod raster;
pub mod transform;

use base64::Engine as Base64Engine;

/// A decoded raster image.
///
/// `data` holds `width * height * 4` bytes of premultiplied RGBA8888, rows
/// top to bottom. Pixels the document does not paint are `0x00` in all four
/// channels. The image owns its buffer; moving it out of the decoder is the
/// ownership handoff and dropping it releases the buffer exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl DecodedImage {
    /// Split into `(width, height, data)` without copying the pixels
    pub fn into_raw_parts(self) -> (u32, u32, Vec<u8>) {
        (self.width, self.height, self.data)
    }

    /// RGBA bytes of the pixel at `(x, y)`, if in bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * raster::BYTES_PER_PIXEL;
        let px = self.data.get(i..i + raster::BYTES_PER_PIXEL)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// `{ "width": .., "height": .., "data": "<base64>" }`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "width": self.width,
            "height": self.height,
            "data": base64::engine::general_purpose::STANDARD.encode(&self.data),
        })
    }

    /// Encode as PNG. The pixel data is demultiplied on the way out.
    pub fn encode_png(&self) -> crate::Result<Vec<u8>> {
        let pixmap = resvg::tiny_skia::PixmapRef::from_bytes(&self.data, self.width, self.height)
            .ok_or_else(|| {
                crate::Error::Render(format!(
                    "invalid pixmap size {}x{}",
                    self.width, self.height
                ))
            })?;
        pixmap
            .encode_png()
            .map_err(|e| crate::Error::Render(format!("PNG encoding failed: {}", e)))
    }
}
