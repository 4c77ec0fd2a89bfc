//! Output size resolution: requested target box + intrinsic SVG size -> raster size

/// Fallback width for documents without a usable intrinsic width
pub const DEFAULT_WIDTH: f32 = 512.0;
/// Fallback height for documents without a usable intrinsic height
pub const DEFAULT_HEIGHT: f32 = 512.0;

/// A width/height pair in user units or pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Replace non-positive (or NaN/infinite) axes with the 512 default
    pub fn or_default_axes(self) -> Self {
        Self {
            width: usable(self.width).unwrap_or(DEFAULT_WIDTH),
            height: usable(self.height).unwrap_or(DEFAULT_HEIGHT),
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

/// Requested output box. An axis of 0 means "unset".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetSize {
    pub requested_width: f32,
    pub requested_height: f32,
}

impl TargetSize {
    /// Build a target from optional axes; absent, non-positive or non-finite
    /// values are stored as unset.
    pub fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self {
            requested_width: width.and_then(usable).unwrap_or(0.0),
            requested_height: height.and_then(usable).unwrap_or(0.0),
        }
    }

    fn width(&self) -> Option<f32> {
        usable(self.requested_width)
    }

    fn height(&self) -> Option<f32> {
        usable(self.requested_height)
    }
}

/// Resolved raster size.
///
/// `exact` keeps the unrounded size the transform is fitted into; `width`
/// and `height` are the pixel dimensions of the buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputSize {
    pub width: u32,
    pub height: u32,
    pub exact: Size,
}

/// Resolve the output raster size.
///
/// - both axes requested: used as-is, aspect ratio is not preserved
/// - one axis requested: the other follows the intrinsic aspect ratio
/// - nothing requested: the intrinsic size
///
/// Pixel dimensions round half away from zero and are clamped to at least 1.
pub fn resolve(intrinsic: Size, requested: TargetSize) -> OutputSize {
    let intrinsic = intrinsic.or_default_axes();
    let aspect = intrinsic.aspect_ratio();

    let exact = match (requested.width(), requested.height()) {
        (Some(w), Some(h)) => Size::new(w, h),
        (Some(w), None) => Size::new(w, w / aspect),
        (None, Some(h)) => Size::new(h * aspect, h),
        (None, None) => intrinsic,
    };

    OutputSize {
        width: to_pixels(exact.width),
        height: to_pixels(exact.height),
        exact,
    }
}

fn usable(v: f32) -> Option<f32> {
    (v.is_finite() && v > 0.0).then_some(v)
}

fn to_pixels(v: f32) -> u32 {
    // `as` saturates at u32::MAX; oversized buffers fail at allocation.
    (v.round() as u32).max(1)
}
