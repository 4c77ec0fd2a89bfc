//! Rasterizer adapter: drives an [`SvgEngine`] through parse, size
//! resolution, fitting and rendering into an owned RGBA buffer.

use crate::error::{Error, Result};
use crate::rendering::input::SvgInput;
use crate::rendering::layout::{self, TargetSize};
use crate::rendering::options::RenderOptions;
use crate::rendering::transform;
use crate::rendering::DecodedImage;
use crate::SvgEngine;

/// Bytes per RGBA pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Zero-initialized RGBA8888 destination buffer of `width * height * 4` bytes
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a fully transparent buffer.
    ///
    /// Fails with [`Error::OutOfMemory`] if the byte size overflows or the
    /// allocator refuses the request.
    pub fn allocate(width: u32, height: u32) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(Error::OutOfMemory)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| Error::OutOfMemory)?;
        data.resize(len, 0);

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Hand the buffer over as a finished image
    pub fn into_image(self) -> DecodedImage {
        DecodedImage {
            width: self.width,
            height: self.height,
            data: self.data,
        }
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Parse `input` and render it into a buffer sized from `target`.
///
/// `input` is released as soon as parsing finishes. The parsed tree lives
/// only inside this call and is dropped on every exit path. The buffer is
/// returned only on success.
pub fn rasterize<E: SvgEngine + ?Sized>(
    engine: &E,
    input: SvgInput,
    options: RenderOptions<'_, E::Base>,
    target: TargetSize,
) -> Result<DecodedImage> {
    let parsed = engine.parse(&input, options);
    drop(input);
    let tree = parsed.map_err(|kind| {
        log::debug!("engine rejected SVG: {}", kind);
        Error::Parse(kind)
    })?;
    log::trace!("parsed SVG tree");

    let intrinsic = engine.intrinsic_size(&tree).or_default_axes();
    let output = layout::resolve(intrinsic, target);
    log::debug!(
        "intrinsic {}x{} -> output {}x{}",
        intrinsic.width,
        intrinsic.height,
        output.width,
        output.height
    );

    let mut pixels = PixelBuffer::allocate(output.width, output.height)?;
    let transform = transform::fit(intrinsic, output.exact);
    engine.render(&tree, transform, &mut pixels)?;

    drop(tree);
    log::trace!("released SVG tree");

    Ok(pixels.into_image())
}
