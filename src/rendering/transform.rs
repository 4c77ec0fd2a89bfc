//! Fit-within-box transform from intrinsic SVG space into the output raster

use super::layout::Size;

/// 2x3 affine map `[a c e; b d f]`.
///
/// Transforms built by [`fit`] never rotate or skew: `b == c == 0` and
/// `a == d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn scale_translate(scale: f32, tx: f32, ty: f32) -> Self {
        Self {
            a: scale,
            d: scale,
            e: tx,
            f: ty,
            ..Self::IDENTITY
        }
    }

    pub fn scale(&self) -> f32 {
        self.a
    }

    pub fn offset(&self) -> (f32, f32) {
        (self.e, self.f)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Uniformly scale `intrinsic` to fit entirely inside `output` and center it.
///
/// Leftover space on the shorter axis is split evenly on both sides. When the
/// output box was stretched anisotropically the content is still scaled
/// uniformly, so it letterboxes rather than distorts.
pub fn fit(intrinsic: Size, output: Size) -> Transform {
    let scale = (output.width / intrinsic.width).min(output.height / intrinsic.height);
    let offset_x = (output.width - intrinsic.width * scale) / 2.0;
    let offset_y = (output.height - intrinsic.height * scale) / 2.0;
    log::debug!(
        "fit {}x{} into {}x{}: scale={} offset=({}, {})",
        intrinsic.width,
        intrinsic.height,
        output.width,
        output.height,
        scale,
        offset_x,
        offset_y
    );
    Transform::scale_translate(scale, offset_x, offset_y)
}
