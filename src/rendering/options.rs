//! Process-wide cache of base rendering configuration.
//!
//! Two slots exist, one per font mode. Each slot is created lazily at most
//! once (even under concurrent first use) and then shared read-only for the
//! life of the process. DPI is never stored here: it is attached per call in
//! [`RenderOptions`].

use std::sync::OnceLock;

/// DPI used when the caller does not request one
pub const DEFAULT_DPI: f32 = 96.0;

pub struct OptionsCache<T> {
    with_fonts: OnceLock<T>,
    without_fonts: OnceLock<T>,
}

impl<T> OptionsCache<T> {
    pub const fn new() -> Self {
        Self {
            with_fonts: OnceLock::new(),
            without_fonts: OnceLock::new(),
        }
    }

    /// Select the base for `load_fonts`, creating it with `create` on first
    /// use, and pair it with this call's `dpi`.
    ///
    /// Only the slot for `load_fonts` is touched, so a caller waiting on the
    /// with-fonts slot never blocks a caller of the without-fonts slot.
    pub fn get<F>(&self, dpi: f32, load_fonts: bool, create: F) -> RenderOptions<'_, T>
    where
        F: FnOnce(bool) -> T,
    {
        let slot = self.slot(load_fonts);
        let base = slot.get_or_init(|| {
            log::debug!("creating base render options (load_fonts={})", load_fonts);
            create(load_fonts)
        });
        RenderOptions {
            base,
            dpi,
            load_fonts,
        }
    }

    /// Whether the slot for `load_fonts` has been created yet
    pub fn is_initialized(&self, load_fonts: bool) -> bool {
        self.slot(load_fonts).get().is_some()
    }

    fn slot(&self, load_fonts: bool) -> &OnceLock<T> {
        if load_fonts {
            &self.with_fonts
        } else {
            &self.without_fonts
        }
    }
}

impl<T> Default for OptionsCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-call view of a cached base plus the call's DPI
#[derive(Debug)]
pub struct RenderOptions<'a, T> {
    pub base: &'a T,
    pub dpi: f32,
    pub load_fonts: bool,
}

impl<T> Clone for RenderOptions<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RenderOptions<'_, T> {}
