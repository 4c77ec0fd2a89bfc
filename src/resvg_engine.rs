//! resvg-backed engine.
//!
//! Parsing goes through `usvg`, rendering through `resvg` onto a
//! `tiny_skia` pixmap view over the caller's buffer. The cached base is a
//! font database: empty for the without-fonts slot, populated by system font
//! discovery for the with-fonts slot.

use std::sync::Arc;

use resvg::tiny_skia;
use resvg::usvg::{self, fontdb};

use crate::error::{Error, ParseErrorKind, Result};
use crate::rendering::input::SvgInput;
use crate::rendering::layout::Size;
use crate::rendering::options::{OptionsCache, RenderOptions};
use crate::rendering::raster::PixelBuffer;
use crate::rendering::transform::Transform;
use crate::SvgEngine;

static OPTIONS: OptionsCache<Arc<fontdb::Database>> = OptionsCache::new();

/// The default engine. Stateless; all instances share the process-wide
/// options cache.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResvgEngine;

impl ResvgEngine {
    pub fn new() -> Self {
        ResvgEngine
    }
}

impl SvgEngine for ResvgEngine {
    type Base = Arc<fontdb::Database>;
    type Tree = usvg::Tree;

    fn options_cache(&self) -> &OptionsCache<Self::Base> {
        &OPTIONS
    }

    fn create_base(&self, load_fonts: bool) -> Self::Base {
        let mut db = fontdb::Database::new();
        if load_fonts {
            db.load_system_fonts();
            log::info!("loaded {} system font faces", db.len());
        }
        Arc::new(db)
    }

    fn parse(
        &self,
        input: &SvgInput,
        options: RenderOptions<'_, Self::Base>,
    ) -> std::result::Result<Self::Tree, ParseErrorKind> {
        let opt = usvg::Options {
            dpi: options.dpi,
            fontdb: Arc::clone(options.base),
            ..usvg::Options::default()
        };
        usvg::Tree::from_data(input.as_bytes(), &opt).map_err(convert_error)
    }

    fn intrinsic_size(&self, tree: &Self::Tree) -> Size {
        let size = tree.size();
        Size::new(size.width(), size.height())
    }

    fn render(&self, tree: &Self::Tree, transform: Transform, pixels: &mut PixelBuffer) -> Result<()> {
        let (width, height) = (pixels.width(), pixels.height());
        let mut pixmap = tiny_skia::PixmapMut::from_bytes(pixels.as_bytes_mut(), width, height)
            .ok_or_else(|| {
                Error::Render(format!("pixmap size {}x{} is not supported", width, height))
            })?;
        resvg::render(tree, to_tiny_skia(transform), &mut pixmap);
        Ok(())
    }
}

fn to_tiny_skia(t: Transform) -> tiny_skia::Transform {
    tiny_skia::Transform::from_row(t.a, t.b, t.c, t.d, t.e, t.f)
}

fn convert_error(e: usvg::Error) -> ParseErrorKind {
    match e {
        usvg::Error::NotAnUtf8Str => ParseErrorKind::NotUtf8,
        usvg::Error::MalformedGZip => ParseErrorKind::MalformedGzip,
        usvg::Error::ElementsLimitReached => ParseErrorKind::ElementsLimitReached,
        usvg::Error::InvalidSize => ParseErrorKind::InvalidSize,
        usvg::Error::ParsingFailed(_) => ParseErrorKind::ParseFailed,
    }
}
