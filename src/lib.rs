//! SVG Decoder
//!
//! Decodes an SVG document (text or raw bytes) into a fixed-size RGBA pixel
//! buffer that a host application can display, composite or export.
//!
//! # Features
//!
//! - **Fit-to-box sizing**: request a width, a height, both or neither; the
//!   document is scaled uniformly and centered in the output raster
//! - **Pluggable backend**: parsing and rendering sit behind the
//!   [`SvgEngine`] trait; [`ResvgEngine`] is the default
//! - **Font cache**: system font discovery runs at most once per process
//!
//! # Example
//!
//! ```no_run
//! use svg_decode::DecodeOptions;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"/>"#;
//! let options = DecodeOptions {
//!     width: Some(200.0),
//!     load_fonts: false,
//!     ..Default::default()
//! };
//!
//! let image = svg_decode::decode(svg, &options)?;
//! assert_eq!((image.width, image.height), (200, 200));
//! assert_eq!(image.data.len(), 200 * 200 * 4);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, ParseErrorKind, Result};

pub mod rendering;
pub use rendering::input::SvgSource;
pub use rendering::layout::{Size, TargetSize};
pub use rendering::transform::Transform;
pub use rendering::DecodedImage;

// Dynamically-typed boundary (JSON values in, JSON values out)
pub mod host;

pub mod resvg_engine;
pub use resvg_engine::ResvgEngine;

use rendering::input::{self, SvgInput};
use rendering::options::{OptionsCache, RenderOptions, DEFAULT_DPI};
use rendering::raster::{self, PixelBuffer};

/// Per-call decode configuration.
///
/// Deserializes from the host option names `width`, `height`, `dpi` and
/// `loadFonts`; every field is independently optional.
///
/// # Examples
///
/// ```
/// let opts: svg_decode::DecodeOptions =
///     serde_json::from_str(r#"{ "height": 64, "loadFonts": false }"#).unwrap();
/// assert_eq!(opts.height, Some(64.0));
/// assert_eq!(opts.dpi, 96.0);
/// assert!(!opts.load_fonts);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecodeOptions {
    /// Requested output width in pixels; absent or non-positive means unset
    pub width: Option<f32>,
    /// Requested output height in pixels; absent or non-positive means unset
    pub height: Option<f32>,
    /// Resolution used to convert absolute units (mm, pt, ...) to pixels
    pub dpi: f32,
    /// Whether text may use system fonts
    pub load_fonts: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            dpi: DEFAULT_DPI,
            load_fonts: true,
        }
    }
}

impl DecodeOptions {
    pub fn target(&self) -> TargetSize {
        TargetSize::new(self.width, self.height)
    }

    /// DPI to hand to the engine; unusable values fall back to 96
    pub fn effective_dpi(&self) -> f32 {
        if self.dpi.is_finite() && self.dpi > 0.0 {
            self.dpi
        } else {
            log::warn!("ignoring dpi {}; using {}", self.dpi, DEFAULT_DPI);
            DEFAULT_DPI
        }
    }
}

/// Capability interface of a vector-graphics engine.
///
/// A parsed tree is released by dropping it.
pub trait SvgEngine {
    /// Immutable base configuration shared by all calls of one font mode
    type Base: Send + Sync;
    /// Parsed document
    type Tree;

    /// The cache holding this engine's bases
    fn options_cache(&self) -> &OptionsCache<Self::Base>;

    /// Build a base configuration. With `load_fonts` this performs system
    /// font discovery and may be slow.
    fn create_base(&self, load_fonts: bool) -> Self::Base;

    fn parse(
        &self,
        input: &SvgInput,
        options: RenderOptions<'_, Self::Base>,
    ) -> std::result::Result<Self::Tree, ParseErrorKind>;

    /// Natural size of the document in its own coordinate system
    fn intrinsic_size(&self, tree: &Self::Tree) -> Size;

    /// Draw `tree` through `transform` into `pixels`
    fn render(&self, tree: &Self::Tree, transform: Transform, pixels: &mut PixelBuffer) -> Result<()>;

    /// Cached base for `load_fonts` paired with this call's `dpi`
    fn options(&self, dpi: f32, load_fonts: bool) -> RenderOptions<'_, Self::Base> {
        self.options_cache()
            .get(dpi, load_fonts, |fonts| self.create_base(fonts))
    }
}

/// Runs the decode pipeline on top of an engine
#[derive(Debug, Clone, Default)]
pub struct Decoder<E = ResvgEngine> {
    engine: E,
}

impl Decoder<ResvgEngine> {
    pub fn new() -> Self {
        Self::with_engine(ResvgEngine::new())
    }
}

impl<E: SvgEngine> Decoder<E> {
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Decode `svg` into an RGBA image
    pub fn decode<'a>(&self, svg: impl Into<SvgSource<'a>>, options: &DecodeOptions) -> Result<DecodedImage> {
        let input = input::normalize(svg.into());
        let render_options = self.engine.options(options.effective_dpi(), options.load_fonts);
        raster::rasterize(&self.engine, input, render_options, options.target())
    }
}

/// Decode `svg` with the default engine
pub fn decode<'a>(svg: impl Into<SvgSource<'a>>, options: &DecodeOptions) -> Result<DecodedImage> {
    Decoder::new().decode(svg, options)
}

/// Encoding raster images back to SVG is not provided
pub fn encode(_image: &DecodedImage) -> Result<Vec<u8>> {
    Err(Error::Unsupported("SVG encoding not supported".to_string()))
}

/// Animated SVG output is not provided
pub fn encode_animated(_frames: &[DecodedImage]) -> Result<Vec<u8>> {
    Err(Error::Unsupported("Animated SVG not supported".to_string()))
}
