//! Scriptable engine used by the contract tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use svg_decode::rendering::input::SvgInput;
use svg_decode::rendering::options::{OptionsCache, RenderOptions};
use svg_decode::rendering::raster::PixelBuffer;
use svg_decode::{Error, ParseErrorKind, Result, Size, SvgEngine, Transform};

type CreateHook = Box<dyn Fn(bool) + Send + Sync>;

/// Tree handle that tracks how many trees are alive
pub struct MockTree {
    live: Arc<AtomicUsize>,
}

impl Drop for MockTree {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCall {
    pub transform: Transform,
    pub width: u32,
    pub height: u32,
    pub dpi: f32,
    /// Whether every byte of the buffer was zero when render started
    pub buffer_was_clear: bool,
}

pub struct MockEngine {
    cache: OptionsCache<bool>,
    pub intrinsic: Size,
    pub parse_error: Option<ParseErrorKind>,
    pub render_error: bool,
    pub creates: AtomicUsize,
    pub parses: AtomicUsize,
    pub live_trees: Arc<AtomicUsize>,
    pub last_input: Mutex<Vec<u8>>,
    pub last_render: Mutex<Option<RenderCall>>,
    last_dpi: Mutex<f32>,
    on_create: Option<CreateHook>,
}

impl MockEngine {
    pub fn new(intrinsic: Size) -> Self {
        Self {
            cache: OptionsCache::new(),
            intrinsic,
            parse_error: None,
            render_error: false,
            creates: AtomicUsize::new(0),
            parses: AtomicUsize::new(0),
            live_trees: Arc::new(AtomicUsize::new(0)),
            last_input: Mutex::new(Vec::new()),
            last_render: Mutex::new(None),
            last_dpi: Mutex::new(0.0),
            on_create: None,
        }
    }

    pub fn failing_parse(kind: ParseErrorKind) -> Self {
        Self {
            parse_error: Some(kind),
            ..Self::new(Size::new(10.0, 10.0))
        }
    }

    pub fn on_create(mut self, hook: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_create = Some(Box::new(hook));
        self
    }

    pub fn last_render(&self) -> RenderCall {
        self.last_render.lock().unwrap().expect("render was not called")
    }

    pub fn live(&self) -> usize {
        self.live_trees.load(Ordering::SeqCst)
    }
}

impl SvgEngine for MockEngine {
    type Base = bool;
    type Tree = MockTree;

    fn options_cache(&self) -> &OptionsCache<bool> {
        &self.cache
    }

    fn create_base(&self, load_fonts: bool) -> bool {
        self.creates.fetch_add(1, Ordering::SeqCst);
        if let Some(hook) = &self.on_create {
            hook(load_fonts);
        }
        load_fonts
    }

    fn parse(
        &self,
        input: &SvgInput,
        options: RenderOptions<'_, bool>,
    ) -> std::result::Result<MockTree, ParseErrorKind> {
        self.parses.fetch_add(1, Ordering::SeqCst);
        *self.last_input.lock().unwrap() = input.as_bytes_with_nul().to_vec();
        *self.last_dpi.lock().unwrap() = options.dpi;
        if let Some(kind) = self.parse_error {
            return Err(kind);
        }
        self.live_trees.fetch_add(1, Ordering::SeqCst);
        Ok(MockTree {
            live: Arc::clone(&self.live_trees),
        })
    }

    fn intrinsic_size(&self, _tree: &MockTree) -> Size {
        self.intrinsic
    }

    fn render(&self, _tree: &MockTree, transform: Transform, pixels: &mut PixelBuffer) -> Result<()> {
        *self.last_render.lock().unwrap() = Some(RenderCall {
            transform,
            width: pixels.width(),
            height: pixels.height(),
            dpi: *self.last_dpi.lock().unwrap(),
            buffer_was_clear: pixels.as_bytes().iter().all(|&b| b == 0),
        });
        if self.render_error {
            return Err(Error::Render("mock render failure".to_string()));
        }
        Ok(())
    }
}
