//! Colour type and palette for the two screens.
//!
//! Draw calls take an 8-bit [`Rgba`] colour. Surfaces store opaque
//! [`Rgb888`] pixels, so alpha is resolved at draw time by blending the source
//! over whatever the surface already holds.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// 8-bit RGBA colour.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// Fully opaque colour.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self { Self::new(r, g, b, 255) }

    #[inline]
    pub const fn is_opaque(self) -> bool { self.a == 255 }

    #[inline]
    pub const fn is_transparent(self) -> bool { self.a == 0 }

    /// Source-over blend of `self` onto `dst`.
    ///
    /// Integer math with rounding: `(src * a + dst * (255 - a) + 127) / 255`.
    pub fn blend_over(self, dst: Rgb888) -> Rgb888 {
        if self.is_opaque() {
            return Rgb888::new(self.r, self.g, self.b);
        }
        if self.is_transparent() {
            return dst;
        }
        let a = u16::from(self.a);
        let inv = 255 - a;
        let mix = |src: u8, dst: u8| ((u16::from(src) * a + u16::from(dst) * inv + 127) / 255) as u8;
        Rgb888::new(mix(self.r, dst.r()), mix(self.g, dst.g()), mix(self.b, dst.b()))
    }
}

impl From<Rgb888> for Rgba {
    fn from(c: Rgb888) -> Self { Self::opaque(c.r(), c.g(), c.b()) }
}

// =============================================================================
// Palette
// =============================================================================

pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

/// Banner and footer bars.
pub const BAR_BLUE: Rgba = Rgba::opaque(0, 120, 255);

/// Body panel between banner and footer.
pub const BODY_GRAY: Rgba = Rgba::opaque(120, 120, 120);

/// Full-screen veil behind the info overlay.
pub const OVERLAY_VEIL: Rgba = Rgba::new(0, 0, 0, 190);

/// Translucent panel holding the info overlay message.
pub const OVERLAY_PANEL: Rgba = Rgba::new(150, 150, 150, 220);

/// Highlight for the selected entry in list-style screens.
pub const SELECTED: Rgba = Rgba::opaque(255, 200, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_replaces() {
        assert_eq!(WHITE.blend_over(Rgb888::BLACK), Rgb888::WHITE);
        assert_eq!(BAR_BLUE.blend_over(Rgb888::WHITE), Rgb888::new(0, 120, 255));
    }

    #[test]
    fn test_transparent_keeps_destination() {
        let dst = Rgb888::new(10, 20, 30);
        assert_eq!(Rgba::new(255, 255, 255, 0).blend_over(dst), dst);
    }

    #[test]
    fn test_half_alpha_mixes() {
        let out = Rgba::new(255, 0, 0, 128).blend_over(Rgb888::new(0, 0, 255));
        // 255 * 128 / 255 ~= 128, 255 * 127 / 255 ~= 127
        assert_eq!(out, Rgb888::new(128, 0, 127));
    }

    #[test]
    fn test_veil_darkens_white() {
        let out = OVERLAY_VEIL.blend_over(Rgb888::WHITE);
        assert_eq!(out, Rgb888::new(65, 65, 65));
    }

    #[test]
    fn test_from_rgb888() {
        assert_eq!(Rgba::from(Rgb888::new(1, 2, 3)), Rgba::opaque(1, 2, 3));
    }
}
