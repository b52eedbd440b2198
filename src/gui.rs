//! GUI context and the per-frame bracket.
//!
//! [`Gui`] owns every resource the drawing helpers need: both screen
//! surfaces, the text scratch buffer, the sprite atlas and the platform.
//! Drawing happens inside a [`Frame`], obtained from [`Gui::begin_frame`]:
//!
//! ```ignore
//! let mut frame = gui.begin_frame();
//! frame.clear_all(BLACK);
//! let mut top = frame.target(Target::Top);
//! top.draw_text_centered(0.0, 100.0, 0.6, WHITE, "Hello", 400.0);
//! drop(frame); // presents both screens
//! ```
//!
//! # Frame Lifecycle
//!
//! 1. `begin_frame` clears the text buffer and refills the object budget
//! 2. screens draw through [`Canvas`] handles from [`Frame::target`]
//! 3. dropping the `Frame` presents both surfaces exactly once
//!
//! A `Canvas` borrows the frame, so no drawing can happen outside the
//! bracket, and a frame cannot be left open past the scope that began it.

use embedded_graphics::pixelcolor::Rgb888;
use log::{debug, info, trace, warn};

use crate::atlas::{SpriteAtlas, sprites};
use crate::canvas::Canvas;
use crate::colors::Rgba;
use crate::config::GuiConfig;
use crate::error::GuiError;
use crate::input::InputSnapshot;
use crate::platform::Platform;
use crate::surface::{Surface, Target};
use crate::text::TextBuffer;

/// Draw objects still available in the current frame.
#[derive(Debug)]
pub(crate) struct ObjectBudget {
    remaining: usize,
    limit: usize,
    warned: bool,
}

impl ObjectBudget {
    pub(crate) const fn new(limit: usize) -> Self {
        Self {
            remaining: limit,
            limit,
            warned: false,
        }
    }

    /// Reserve `count` objects. Fails without reserving anything if fewer remain.
    pub(crate) fn try_take(&mut self, count: usize) -> bool {
        if count <= self.remaining {
            self.remaining -= count;
            return true;
        }
        if !self.warned {
            warn!("frame object budget of {} exhausted, dropping draws", self.limit);
            self.warned = true;
        }
        false
    }

    pub(crate) const fn used(&self) -> usize { self.limit - self.remaining }
}

/// Rendering context shared by every screen.
///
/// Startup acquires the surfaces, then the text buffer, then the atlas.
/// Fields drop in declaration order, which releases them in reverse before
/// the platform goes.
pub struct Gui {
    atlas: SpriteAtlas,
    text: TextBuffer,
    bottom: Surface,
    top: Surface,
    platform: Box<dyn Platform>,
    max_objects: usize,
    frames: u64,
}

impl Gui {
    /// Bring up both surfaces and the text buffer, then load the sprite atlas
    /// from `config.atlas_path`.
    pub fn init(config: &GuiConfig, platform: Box<dyn Platform>) -> Result<Self, GuiError> {
        let top = Surface::for_target(Target::Top);
        let bottom = Surface::for_target(Target::Bottom);
        let text = TextBuffer::new();
        let atlas = SpriteAtlas::load(&config.atlas_path, &sprites::SHEET_LAYOUT)?;
        Ok(Self::assemble(config, top, bottom, text, atlas, platform))
    }

    /// Build a context around an already loaded atlas.
    pub fn with_atlas(config: &GuiConfig, atlas: SpriteAtlas, platform: Box<dyn Platform>) -> Self {
        let top = Surface::for_target(Target::Top);
        let bottom = Surface::for_target(Target::Bottom);
        Self::assemble(config, top, bottom, TextBuffer::new(), atlas, platform)
    }

    fn assemble(
        config: &GuiConfig,
        top: Surface,
        bottom: Surface,
        text: TextBuffer,
        atlas: SpriteAtlas,
        platform: Box<dyn Platform>,
    ) -> Self {
        let gui = Self {
            atlas,
            text,
            bottom,
            top,
            platform,
            max_objects: config.max_objects,
            frames: 0,
        };
        info!(
            "gui ready: {} sprites, text buffer {} glyphs, {} objects per frame",
            gui.atlas.len(),
            gui.text.capacity(),
            gui.max_objects
        );
        gui
    }

    /// Open the frame bracket.
    pub fn begin_frame(&mut self) -> Frame<'_> {
        self.text.clear();
        trace!("frame {} begin", self.frames);
        Frame {
            budget: ObjectBudget::new(self.max_objects),
            gui: self,
        }
    }

    /// Block until the next display refresh.
    pub fn wait_for_vblank(&mut self) { self.platform.wait_for_vblank(); }

    /// Input for the current refresh.
    pub fn scan_input(&mut self) -> InputSnapshot { self.platform.scan_input() }

    /// True once the platform asked the application to close.
    pub fn quit_requested(&self) -> bool { self.platform.quit_requested() }

    /// Empty the text scratch buffer outside of a frame.
    pub fn clear_text_buffer(&mut self) { self.text.clear(); }

    /// Natural width of `text` at `size`.
    pub fn measure_width(&mut self, size: f32, text: &str) -> f32 { self.text.measure(size, text).0 }

    /// Natural height of `text` at `size`.
    pub fn measure_height(&mut self, size: f32, text: &str) -> f32 { self.text.measure(size, text).1 }

    /// Natural `(width, height)` of `text` at `size`.
    pub fn measure_size(&mut self, size: f32, text: &str) -> (f32, f32) { self.text.measure(size, text) }

    /// Blocking yes/no question, see [`prompt_yes_no`](crate::widgets::prompt_yes_no).
    pub fn prompt_yes_no(&mut self, message: &str, yes: &str, no: &str) -> bool {
        crate::widgets::prompt_yes_no(self, message, yes, no)
    }

    /// Last drawn contents of `target`.
    pub fn surface(&self, target: Target) -> &Surface {
        match target {
            Target::Top => &self.top,
            Target::Bottom => &self.bottom,
        }
    }

    /// Number of frames presented so far.
    pub const fn frame_count(&self) -> u64 { self.frames }

    pub const fn atlas(&self) -> &SpriteAtlas { &self.atlas }

    #[cfg(test)]
    pub(crate) fn text_len(&self) -> usize { self.text.len() }
}

impl Drop for Gui {
    fn drop(&mut self) { debug!("shutting down gui after {} frames", self.frames); }
}

/// One open frame. Presents both screens when dropped.
pub struct Frame<'g> {
    gui: &'g mut Gui,
    budget: ObjectBudget,
}

impl Frame<'_> {
    /// Select `target` for the following draw calls.
    pub fn target(&mut self, target: Target) -> Canvas<'_> {
        let Gui {
            atlas,
            text,
            top,
            bottom,
            ..
        } = &mut *self.gui;
        let surface = match target {
            Target::Top => top,
            Target::Bottom => bottom,
        };
        Canvas::new(target, surface, text, atlas, &mut self.budget)
    }

    /// Fill `target` with `color`, ignoring alpha.
    pub fn clear(&mut self, target: Target, color: Rgba) {
        let color = Rgb888::new(color.r, color.g, color.b);
        match target {
            Target::Top => self.gui.top.fill(color),
            Target::Bottom => self.gui.bottom.fill(color),
        }
    }

    /// Fill both targets with `color`.
    pub fn clear_all(&mut self, color: Rgba) {
        for target in Target::ALL {
            self.clear(target, color);
        }
    }

    /// Index of this frame, counting from zero.
    pub fn number(&self) -> u64 { self.gui.frames }

    /// Draw objects consumed so far.
    pub fn objects_used(&self) -> usize { self.budget.used() }
}

impl Drop for Frame<'_> {
    fn drop(&mut self) {
        let gui = &mut *self.gui;
        gui.platform.present(&gui.top, &gui.bottom);
        trace!("frame {} end ({} objects)", gui.frames, self.budget.used());
        gui.frames += 1;
    }
}
