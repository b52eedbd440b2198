//! Drawing helpers bound to one render target.
//!
//! A [`Canvas`] is the selected-target context: every call draws on the
//! target it was created for, and centered text uses that target's centre.
//! Obtain one from [`Frame::target`](crate::Frame::target).

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::warn;

use crate::atlas::SpriteAtlas;
use crate::colors::Rgba;
use crate::gui::ObjectBudget;
use crate::surface::{Surface, Target};
use crate::text::{ShapedText, TextBuffer, fit_scale};

#[inline]
fn to_point(x: f32, y: f32) -> Point { Point::new(x.round() as i32, y.round() as i32) }

/// Draw context for the selected target of an open frame.
pub struct Canvas<'f> {
    target: Target,
    surface: &'f mut Surface,
    text: &'f mut TextBuffer,
    atlas: &'f SpriteAtlas,
    budget: &'f mut ObjectBudget,
}

impl<'f> Canvas<'f> {
    pub(crate) fn new(
        target: Target,
        surface: &'f mut Surface,
        text: &'f mut TextBuffer,
        atlas: &'f SpriteAtlas,
        budget: &'f mut ObjectBudget,
    ) -> Self {
        Self {
            target,
            surface,
            text,
            atlas,
            budget,
        }
    }

    /// Target this canvas draws on.
    #[inline]
    pub const fn target(&self) -> Target { self.target }

    /// Fill an axis-aligned rectangle, blending by `color`'s alpha.
    ///
    /// Returns `false` if the rectangle was rejected: non-finite or negative
    /// geometry, or no draw objects left this frame. Callers are free to
    /// ignore the result.
    pub fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) -> bool {
        let finite = x.is_finite() && y.is_finite() && w.is_finite() && h.is_finite();
        if !finite || w < 0.0 || h < 0.0 {
            return false;
        }
        if !self.budget.try_take(1) {
            return false;
        }
        // Clip in float space so huge finite geometry never reaches integer math
        let size = self.surface.size();
        let (left, top) = (x.round(), y.round());
        let x0 = left.clamp(0.0, size.width as f32);
        let y0 = top.clamp(0.0, size.height as f32);
        let x1 = (left + w.round()).clamp(x0, size.width as f32);
        let y1 = (top + h.round()).clamp(y0, size.height as f32);
        let area = Rectangle::new(Point::new(x0 as i32, y0 as i32), Size::new((x1 - x0) as u32, (y1 - y0) as u32));
        self.surface.blend_rect(&area, color);
        true
    }

    /// Blit sprite `key` with its top-left at `(x, y)`.
    ///
    /// Negative scales mirror the sprite. Unknown keys are skipped.
    pub fn draw_sprite(&mut self, key: usize, x: f32, y: f32, scale_x: f32, scale_y: f32) {
        if !self.budget.try_take(1) {
            return;
        }
        if self.atlas.draw(key, self.surface, to_point(x, y), scale_x, scale_y).is_none() {
            warn!("sprite key {key} out of range on {} ({} sprites)", self.target.name(), self.atlas.len());
        }
    }

    /// Draw `text` with its top-left at `(x, y)`, shrunk horizontally to fit
    /// `max_width`.
    ///
    /// Returns the area covered on the surface.
    pub fn draw_text(&mut self, x: f32, y: f32, size: f32, color: Rgba, text: &str, max_width: f32) -> Rectangle {
        let shaped = self.text.parse(text);
        self.draw_shaped(shaped, x, y, size, color, max_width)
    }

    /// Draw `text` centred on the target, offset by `x`.
    ///
    /// The span used for centring is the natural width, or `max_width` when
    /// the text is wider than that.
    pub fn draw_text_centered(
        &mut self,
        x: f32,
        y: f32,
        size: f32,
        color: Rgba,
        text: &str,
        max_width: f32,
    ) -> Rectangle {
        let shaped = self.text.parse(text);
        let (natural, _) = self.text.dimensions(shaped, size);
        let left = self.target.half_width() + x - max_width.min(natural) / 2.0;
        self.draw_shaped(shaped, left, y, size, color, max_width)
    }

    fn draw_shaped(
        &mut self,
        shaped: ShapedText,
        x: f32,
        y: f32,
        size: f32,
        color: Rgba,
        max_width: f32,
    ) -> Rectangle {
        let origin = to_point(x, y);
        let glyphs = self.text.glyphs(shaped).iter().filter(|c| **c != '\n').count();
        if glyphs == 0 || !self.budget.try_take(glyphs) {
            return Rectangle::new(origin, Size::zero());
        }
        let (natural, _) = self.text.dimensions(shaped, size);
        let scale_x = fit_scale(size, max_width, natural);
        self.text.render(shaped, self.surface, origin, scale_x, size, color)
    }

    /// Natural width of `text` at `size`.
    pub fn measure_width(&mut self, size: f32, text: &str) -> f32 { self.text.measure(size, text).0 }

    /// Natural height of `text` at `size`.
    pub fn measure_height(&mut self, size: f32, text: &str) -> f32 { self.text.measure(size, text).1 }

    /// Natural `(width, height)` of `text` at `size`.
    pub fn measure_size(&mut self, size: f32, text: &str) -> (f32, f32) { self.text.measure(size, text) }
}
