//! Render targets: the two screens and their framebuffers.
//!
//! Each [`Surface`] is an owned RGB888 framebuffer implementing
//! [`DrawTarget`], so any `embedded-graphics` drawable can render into it.
//! Pixels outside the surface are clipped silently.

use core::convert::Infallible;
use core::ops::Range;

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::Rgba;
use crate::config::{BOTTOM_CENTER_X, BOTTOM_WIDTH, SCREEN_HEIGHT, TOP_CENTER_X, TOP_WIDTH};

/// One of the two physical screens.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Target {
    /// Upper 400x240 screen.
    Top,
    /// Lower 320x240 touch screen.
    Bottom,
}

impl Target {
    /// Both targets in presentation order.
    pub const ALL: [Self; 2] = [Self::Top, Self::Bottom];

    #[inline]
    pub const fn size(self) -> Size {
        match self {
            Self::Top => Size::new(TOP_WIDTH, SCREEN_HEIGHT),
            Self::Bottom => Size::new(BOTTOM_WIDTH, SCREEN_HEIGHT),
        }
    }

    #[inline]
    pub const fn width(self) -> u32 { self.size().width }

    /// Horizontal centre used by centered text (200 on Top, 160 on Bottom).
    #[inline]
    pub const fn half_width(self) -> f32 {
        match self {
            Self::Top => TOP_CENTER_X,
            Self::Bottom => BOTTOM_CENTER_X,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Offsets `d` in `0..len` for which `start + d` lands in `0..limit`.
fn visible_offsets(start: i32, len: i32, limit: u32) -> Range<i32> {
    let (start, len) = (i64::from(start), i64::from(len.max(0)));
    let lo = (-start).clamp(0, len);
    let hi = (i64::from(limit) - start).clamp(lo, len);
    lo as i32..hi as i32
}

/// In-memory framebuffer for one target.
pub struct Surface {
    size: Size,
    pixels: Vec<Rgb888>,
}

impl Surface {
    /// Black surface of the given size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![Rgb888::BLACK; (size.width * size.height) as usize],
        }
    }

    /// Black surface sized for `target`.
    pub fn for_target(target: Target) -> Self { Self::new(target.size()) }

    #[inline]
    fn index(&self, point: Point) -> Option<usize> {
        let (x, y) = (point.x, point.y);
        if x < 0 || y < 0 || x as u32 >= self.size.width || y as u32 >= self.size.height {
            return None;
        }
        Some(y as usize * self.size.width as usize + x as usize)
    }

    /// Pixel at `point`, `None` if outside the surface.
    pub fn pixel(&self, point: Point) -> Option<Rgb888> { self.index(point).map(|i| self.pixels[i]) }

    /// Row-major pixel data.
    pub fn pixels(&self) -> &[Rgb888] { &self.pixels }

    /// Fill the whole surface with an opaque colour.
    pub fn fill(&mut self, color: Rgb888) { self.pixels.fill(color); }

    /// Blend `color` over one pixel. Out-of-bounds points are ignored.
    #[inline]
    pub fn blend_pixel(&mut self, point: Point, color: Rgba) {
        if let Some(i) = self.index(point) {
            self.pixels[i] = color.blend_over(self.pixels[i]);
        }
    }

    /// Column offsets of a `width`-wide span starting at `x` that land on the surface.
    pub(crate) fn visible_columns(&self, x: i32, width: i32) -> Range<i32> { visible_offsets(x, width, self.size.width) }

    /// Row offsets of a `height`-tall span starting at `y` that land on the surface.
    pub(crate) fn visible_rows(&self, y: i32, height: i32) -> Range<i32> { visible_offsets(y, height, self.size.height) }

    /// Blend `color` over every pixel of `area` that lies on the surface.
    pub fn blend_rect(&mut self, area: &Rectangle, color: Rgba) {
        let clipped = area.intersection(&self.bounding_box());
        let Some(bottom_right) = clipped.bottom_right() else {
            return;
        };
        let width = self.size.width as usize;
        for y in clipped.top_left.y..=bottom_right.y {
            let row = y as usize * width;
            for x in clipped.top_left.x..=bottom_right.x {
                let i = row + x as usize;
                self.pixels[i] = color.blend_over(self.pixels[i]);
            }
        }
    }
}

impl OriginDimensions for Surface {
    fn size(&self) -> Size { self.size }
}

impl DrawTarget for Surface {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}
