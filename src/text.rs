//! Text shaping, measurement and scaled rasterization.
//!
//! Strings are parsed into a fixed-capacity glyph scratch buffer
//! ([`TextBuffer`]) that is cleared once per frame. Measurement works on the
//! parsed glyphs; drawing rasterizes each line at the base font size into a
//! reusable coverage mask and resamples it (nearest neighbour) to the
//! requested horizontal and vertical scale.
//!
//! # Sizes
//!
//! A font size is a scale factor relative to [`BASE_FONT`]: size `1.0` draws
//! glyphs at their native pixel size, `0.5` at half. Widths and heights
//! reported by the measuring functions are in screen pixels at that size.
//!
//! # Overflow
//!
//! Once the scratch buffer is full, further text is truncated (what fits is
//! kept). The first overflow of a frame is logged at `warn`.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;
use log::warn;

use crate::colors::Rgba;
use crate::config::TEXT_BUFFER_CAPACITY;
use crate::styles::{BASE_FONT, GLYPH_STYLE, TEXT_BASELINE, glyph_advance, line_height};
use crate::surface::Surface;

/// Horizontal scale that keeps text within `max_width`.
///
/// `min(size, size * max_width / natural_width)`, clamped at zero. Text is
/// only ever shrunk, never stretched. Zero-width text keeps `size`, and text
/// that already fits keeps exactly `size`.
pub fn fit_scale(size: f32, max_width: f32, natural_width: f32) -> f32 {
    let fitted = if natural_width > max_width && natural_width > 0.0 {
        (size * max_width / natural_width).min(size)
    } else {
        size
    };
    fitted.max(0.0)
}

/// Handle to text parsed into a [`TextBuffer`]. Valid until the next clear.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ShapedText {
    start: usize,
    len: usize,
}

impl ShapedText {
    /// Number of glyphs, newlines included.
    #[inline]
    pub const fn len(&self) -> usize { self.len }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.len == 0 }
}

/// Width in base-font pixels of a line of `glyphs` glyphs.
#[inline]
fn line_units(glyphs: usize) -> u32 { (glyphs as u32 * glyph_advance()).saturating_sub(BASE_FONT.character_spacing) }

/// Per-frame scratch storage for shaped text.
pub struct TextBuffer {
    glyphs: heapless::Vec<char, TEXT_BUFFER_CAPACITY>,
    mask: GlyphMask,
    overflowed: bool,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            glyphs: heapless::Vec::new(),
            mask: GlyphMask::default(),
            overflowed: false,
        }
    }

    /// Drop every parsed glyph. Must run before each frame's text calls.
    pub fn clear(&mut self) {
        self.glyphs.clear();
        self.overflowed = false;
    }

    /// Glyphs currently parsed.
    #[inline]
    pub fn len(&self) -> usize { self.glyphs.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.glyphs.is_empty() }

    #[inline]
    pub const fn capacity(&self) -> usize { TEXT_BUFFER_CAPACITY }

    /// True if some text this frame did not fit.
    #[inline]
    pub const fn overflowed(&self) -> bool { self.overflowed }

    /// Parse `text` into the buffer. Carriage returns are dropped.
    pub fn parse(&mut self, text: &str) -> ShapedText {
        let start = self.glyphs.len();
        for c in text.chars().filter(|&c| c != '\r') {
            if self.glyphs.push(c).is_err() {
                if !self.overflowed {
                    warn!(
                        "text buffer full ({} glyphs), truncating {:?}",
                        TEXT_BUFFER_CAPACITY,
                        text
                    );
                }
                self.overflowed = true;
                break;
            }
        }
        ShapedText {
            start,
            len: self.glyphs.len() - start,
        }
    }

    /// Parsed glyphs of `shaped`.
    pub fn glyphs(&self, shaped: ShapedText) -> &[char] { &self.glyphs[shaped.start..shaped.start + shaped.len] }

    /// Natural `(width, height)` of `shaped` at `size`. Empty text is `(0, 0)`.
    pub fn dimensions(&self, shaped: ShapedText, size: f32) -> (f32, f32) {
        let glyphs = self.glyphs(shaped);
        if glyphs.is_empty() {
            return (0.0, 0.0);
        }
        let mut lines = 0u32;
        let mut widest = 0u32;
        for line in glyphs.split(|&c| c == '\n') {
            lines += 1;
            widest = widest.max(line_units(line.len()));
        }
        (widest as f32 * size, (lines * line_height()) as f32 * size)
    }

    /// Parse and measure in one step.
    pub fn measure(&mut self, size: f32, text: &str) -> (f32, f32) {
        let shaped = self.parse(text);
        self.dimensions(shaped, size)
    }

    /// Rasterize `shaped` onto `surface` with its top-left at `origin`.
    ///
    /// Each line is drawn `line_height * scale_y` below the previous one.
    /// Returns the area covered (zero-sized when nothing was drawn).
    pub fn render(
        &mut self,
        shaped: ShapedText,
        surface: &mut Surface,
        origin: Point,
        scale_x: f32,
        scale_y: f32,
        color: Rgba,
    ) -> Rectangle {
        let Self { glyphs, mask, .. } = self;
        let glyphs = &glyphs[shaped.start..shaped.start + shaped.len];
        if glyphs.is_empty() || scale_x <= 0.0 || scale_y <= 0.0 {
            return Rectangle::new(origin, Size::zero());
        }

        let lh = line_height();
        let dest_h = (lh as f32 * scale_y).round() as i32;
        let mut covered_w = 0i32;
        let mut lines = 0i32;

        for (li, line) in glyphs.split(|&c| c == '\n').enumerate() {
            lines += 1;
            let units = line_units(line.len());
            if units == 0 {
                continue;
            }
            mask.rasterize(line, Size::new(units, lh));

            let dest_w = (units as f32 * scale_x).floor() as i32;
            covered_w = covered_w.max(dest_w);
            let line_y = origin.y.saturating_add((li as f32 * lh as f32 * scale_y).round() as i32);

            for dy in surface.visible_rows(line_y, dest_h) {
                let sy = (((dy as f32 + 0.5) / scale_y) as u32).min(lh - 1);
                for dx in surface.visible_columns(origin.x, dest_w) {
                    let sx = (((dx as f32 + 0.5) / scale_x) as u32).min(units - 1);
                    if mask.covered(sx, sy) {
                        surface.blend_pixel(Point::new(origin.x + dx, line_y + dy), color);
                    }
                }
            }
        }

        let total_h = (lines as f32 * lh as f32 * scale_y).round() as u32;
        Rectangle::new(origin, Size::new(covered_w as u32, total_h))
    }
}

impl Default for TextBuffer {
    fn default() -> Self { Self::new() }
}

/// One-bit coverage mask a line of glyphs is rasterized into.
#[derive(Default)]
struct GlyphMask {
    size: Size,
    bits: Vec<bool>,
}

impl GlyphMask {
    /// Resize, clear and draw `line` at the base font size.
    fn rasterize(&mut self, line: &[char], size: Size) {
        self.size = size;
        self.bits.clear();
        self.bits.resize((size.width * size.height) as usize, false);

        let advance = glyph_advance() as i32;
        let mut utf8 = [0u8; 4];
        for (i, c) in line.iter().enumerate() {
            let glyph: &str = c.encode_utf8(&mut utf8);
            Text::with_baseline(glyph, Point::new(i as i32 * advance, 0), GLYPH_STYLE, TEXT_BASELINE)
                .draw(self)
                .ok();
        }
    }

    #[inline]
    fn covered(&self, x: u32, y: u32) -> bool { self.bits[(y * self.size.width + x) as usize] }
}

impl OriginDimensions for GlyphMask {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for GlyphMask {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0
                && point.y >= 0
                && (point.x as u32) < self.size.width
                && (point.y as u32) < self.size.height
            {
                let i = (point.y as u32 * self.size.width + point.x as u32) as usize;
                self.bits[i] = color.is_on();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

    use super::*;
    use crate::colors::WHITE;

    fn lit_pixels(surface: &Surface) -> usize { surface.pixels().iter().filter(|p| **p != Rgb888::BLACK).count() }

    #[test]
    fn test_fit_scale_never_grows() {
        assert_eq!(fit_scale(0.6, 400.0, 100.0), 0.6);
        assert!((fit_scale(0.6, 50.0, 100.0) - 0.3).abs() < 1e-6);
        assert_eq!(fit_scale(0.6, 0.0, 100.0), 0.0);
    }

    #[test]
    fn test_fit_scale_bounds() {
        for max_width in [1.0f32, 10.0, 37.5, 200.0, 400.0, 10_000.0] {
            for natural in [0.0f32, 0.5, 12.0, 99.0, 380.0, 5_000.0] {
                for size in [0.1f32, 0.5, 0.6, 1.0, 2.0] {
                    let scale = fit_scale(size, max_width, natural);
                    assert!(scale >= 0.0, "negative scale for {size}/{max_width}/{natural}");
                    assert!(scale <= size, "grown scale for {size}/{max_width}/{natural}");
                }
            }
        }
    }

    #[test]
    fn test_fit_scale_exact_fit_keeps_size() {
        let mut buf = TextBuffer::new();
        let (w, _) = buf.measure(0.6, "A");
        assert_eq!(fit_scale(0.6, w, w), 0.6);
    }

    #[test]
    fn test_fit_scale_zero_width_text_keeps_size() {
        assert_eq!(fit_scale(0.6, 100.0, 0.0), 0.6);
    }

    #[test]
    fn test_fit_scale_negative_width_clamped() {
        assert_eq!(fit_scale(0.6, -10.0, 100.0), 0.0);
    }

    #[test]
    fn test_empty_text_measures_zero() {
        let mut buf = TextBuffer::new();
        assert_eq!(buf.measure(0.6, ""), (0.0, 0.0));
    }

    #[test]
    fn test_single_glyph_width() {
        let mut buf = TextBuffer::new();
        let (w, h) = buf.measure(0.6, "A");
        assert!(w > 0.0);
        assert_eq!(w, BASE_FONT.character_size.width as f32 * 0.6);
        assert_eq!(h, line_height() as f32 * 0.6);
    }

    #[test]
    fn test_width_scales_linearly_with_size() {
        let mut buf = TextBuffer::new();
        let (w1, _) = buf.measure(1.0, "Hello");
        let (w2, _) = buf.measure(0.5, "Hello");
        assert_eq!(w1 * 0.5, w2);
    }

    #[test]
    fn test_multiline_uses_widest_line() {
        let mut buf = TextBuffer::new();
        let (w_multi, h_multi) = buf.measure(1.0, "ab\nabcd");
        let (w_single, h_single) = buf.measure(1.0, "abcd");
        assert_eq!(w_multi, w_single);
        assert_eq!(h_multi, h_single * 2.0);
    }

    #[test]
    fn test_carriage_returns_dropped() {
        let mut buf = TextBuffer::new();
        let shaped = buf.parse("a\r\nb");
        assert_eq!(buf.glyphs(shaped), &['a', '\n', 'b']);
    }

    #[test]
    fn test_clear_empties_buffer() {
        let mut buf = TextBuffer::new();
        buf.parse("some text");
        assert_eq!(buf.len(), 9);
        buf.clear();
        assert!(buf.is_empty());
        assert!(!buf.overflowed());
    }

    #[test]
    fn test_overflow_truncates() {
        let mut buf = TextBuffer::new();
        let filler = "x".repeat(TEXT_BUFFER_CAPACITY - 2);
        buf.parse(&filler);
        let shaped = buf.parse("hello");
        assert_eq!(shaped.len(), 2);
        assert_eq!(buf.glyphs(shaped), &['h', 'e']);
        assert!(buf.overflowed());
        assert_eq!(buf.len(), buf.capacity());

        buf.clear();
        let shaped = buf.parse("hello");
        assert_eq!(shaped.len(), 5);
    }

    #[test]
    fn test_render_draws_within_measured_box() {
        let mut buf = TextBuffer::new();
        let mut surface = Surface::new(Size::new(200, 60));
        let shaped = buf.parse("Hi");
        let (w, h) = buf.dimensions(shaped, 1.0);

        let area = buf.render(shaped, &mut surface, Point::new(10, 5), 1.0, 1.0, WHITE);
        assert_eq!(area.top_left, Point::new(10, 5));
        assert_eq!(area.size, Size::new(w as u32, h as u32));
        assert!(lit_pixels(&surface) > 0);

        // Nothing outside the covered area
        for (i, p) in surface.pixels().iter().enumerate() {
            if *p != Rgb888::BLACK {
                let point = Point::new((i % 200) as i32, (i / 200) as i32);
                assert!(area.contains(point), "pixel {point:?} outside {area:?}");
            }
        }
    }

    #[test]
    fn test_render_zero_scale_draws_nothing() {
        let mut buf = TextBuffer::new();
        let mut surface = Surface::new(Size::new(100, 40));
        let shaped = buf.parse("Hi");
        let area = buf.render(shaped, &mut surface, Point::zero(), 0.0, 1.0, WHITE);
        assert_eq!(area.size, Size::zero());
        assert_eq!(lit_pixels(&surface), 0);
    }

    #[test]
    fn test_render_shrunk_is_narrower() {
        let mut buf = TextBuffer::new();
        let mut surface = Surface::new(Size::new(300, 60));
        let shaped = buf.parse("Shrink me");
        let full = buf.render(shaped, &mut surface, Point::zero(), 1.0, 1.0, WHITE);
        let half = buf.render(shaped, &mut surface, Point::zero(), 0.5, 1.0, WHITE);
        assert!(half.size.width <= full.size.width / 2);
        assert_eq!(half.size.height, full.size.height);
    }
}
