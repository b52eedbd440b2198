//! Sprite atlas: one RGBA sheet split into keyed regions.
//!
//! The sheet is loaded once at startup from [`ATLAS_PATH`](crate::config::ATLAS_PATH)
//! and stays read-only for the life of the [`Gui`](crate::Gui). Sprites are
//! addressed by index into the region table in [`sprites`].
//!
//! Blits are nearest-neighbour with independent X/Y scale. A negative scale
//! mirrors the sprite on that axis; the mirrored image extends left (or up)
//! from the draw position.

use std::path::Path;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, info};

use crate::colors::Rgba;
use crate::error::GuiError;
use crate::surface::Surface;

/// Region table of the bundled sprite sheet.
pub mod sprites {
    use embedded_graphics::prelude::{Point, Size};
    use embedded_graphics::primitives::Rectangle;

    /// Highlight strip over the top screen banner.
    pub const TOP_SCREEN_TOP: usize = 0;
    /// Shadow strip over the top screen footer.
    pub const TOP_SCREEN_BOT: usize = 1;
    /// Highlight strip over the bottom screen banner.
    pub const BOTTOM_SCREEN_TOP: usize = 2;
    /// Shadow strip over the bottom screen footer.
    pub const BOTTOM_SCREEN_BOT: usize = 3;
    /// 32x32 tally counter icon.
    pub const COUNTER_ICON: usize = 4;
    /// 16x16 left-pointing arrow (draw with negative X scale for right).
    pub const ARROW: usize = 5;

    const fn region(x: i32, y: i32, w: u32, h: u32) -> Rectangle { Rectangle::new(Point::new(x, y), Size::new(w, h)) }

    /// Regions of `romfs/gfx/sprites.png` (400x100).
    pub const SHEET_LAYOUT: [Rectangle; 6] = [
        region(0, 0, 400, 25),
        region(0, 25, 400, 25),
        region(0, 50, 320, 25),
        region(0, 75, 320, 25),
        region(320, 50, 32, 32),
        region(352, 50, 16, 16),
    ];
}

/// Loaded sprite sheet.
pub struct SpriteAtlas {
    size: Size,
    pixels: Vec<Rgba>,
    regions: Vec<Rectangle>,
}

impl SpriteAtlas {
    /// Load a PNG sheet and attach `regions`.
    pub fn load(path: impl AsRef<Path>, regions: &[Rectangle]) -> Result<Self, GuiError> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|source| GuiError::AtlasLoad {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();
        let (width, height) = image.dimensions();
        let atlas = Self::from_rgba(width, height, image.into_raw(), regions)?;
        info!(
            "loaded sprite atlas {} ({}x{}, {} sprites)",
            path.display(),
            width,
            height,
            atlas.len()
        );
        Ok(atlas)
    }

    /// Build an atlas from raw RGBA8 bytes (row-major, 4 bytes per pixel).
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>, regions: &[Rectangle]) -> Result<Self, GuiError> {
        let expected = (width * height * 4) as usize;
        if data.len() != expected {
            return Err(GuiError::AtlasPixels {
                expected,
                actual: data.len(),
            });
        }
        if regions.is_empty() {
            return Err(GuiError::EmptyAtlas);
        }

        let sheet = Rectangle::new(Point::zero(), Size::new(width, height));
        for (key, region) in regions.iter().enumerate() {
            let inside = region.size.width > 0
                && region.size.height > 0
                && region.bottom_right().is_some_and(|br| sheet.contains(region.top_left) && sheet.contains(br));
            if !inside {
                return Err(GuiError::AtlasRegion {
                    key,
                    region: *region,
                    width,
                    height,
                });
            }
        }

        let pixels = data
            .chunks_exact(4)
            .map(|p| Rgba::new(p[0], p[1], p[2], p[3]))
            .collect();

        Ok(Self {
            size: Size::new(width, height),
            pixels,
            regions: regions.to_vec(),
        })
    }

    /// Number of sprites.
    #[inline]
    pub fn len(&self) -> usize { self.regions.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.regions.is_empty() }

    /// Sheet dimensions.
    #[inline]
    pub const fn sheet_size(&self) -> Size { self.size }

    /// Region of sprite `key`, `None` if out of range.
    #[inline]
    pub fn region(&self, key: usize) -> Option<Rectangle> { self.regions.get(key).copied() }

    #[inline]
    fn texel(&self, x: i32, y: i32) -> Rgba { self.pixels[y as usize * self.size.width as usize + x as usize] }

    /// Blit sprite `key` at `(x, y)` with the given scale.
    ///
    /// Returns the destination area, or `None` if `key` is out of range.
    pub fn draw(
        &self,
        key: usize,
        surface: &mut Surface,
        position: Point,
        scale_x: f32,
        scale_y: f32,
    ) -> Option<Rectangle> {
        let region = self.region(key)?;
        let (sx, sy) = (scale_x.abs(), scale_y.abs());
        let dest_w = (region.size.width as f32 * sx).round() as i32;
        let dest_h = (region.size.height as f32 * sy).round() as i32;
        if dest_w == 0 || dest_h == 0 {
            return Some(Rectangle::new(position, Size::zero()));
        }

        let origin_x = if scale_x < 0.0 { position.x.saturating_sub(dest_w) } else { position.x };
        let origin_y = if scale_y < 0.0 { position.y.saturating_sub(dest_h) } else { position.y };
        let (rw, rh) = (region.size.width as i32, region.size.height as i32);

        for dy in surface.visible_rows(origin_y, dest_h) {
            let mut src_y = (((dy as f32 + 0.5) / sy) as i32).min(rh - 1);
            if scale_y < 0.0 {
                src_y = rh - 1 - src_y;
            }
            for dx in surface.visible_columns(origin_x, dest_w) {
                let mut src_x = (((dx as f32 + 0.5) / sx) as i32).min(rw - 1);
                if scale_x < 0.0 {
                    src_x = rw - 1 - src_x;
                }
                let texel = self.texel(region.top_left.x + src_x, region.top_left.y + src_y);
                if !texel.is_transparent() {
                    surface.blend_pixel(Point::new(origin_x + dx, origin_y + dy), texel);
                }
            }
        }

        Some(Rectangle::new(
            Point::new(origin_x, origin_y),
            Size::new(dest_w as u32, dest_h as u32),
        ))
    }
}

impl Drop for SpriteAtlas {
    fn drop(&mut self) { debug!("released sprite atlas ({} sprites)", self.regions.len()); }
}
