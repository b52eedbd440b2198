//! Font and text style constants.
//!
//! All text is rasterized from one base font at scale 1.0 and then resampled
//! to the requested size, so the whole UI shares a single glyph source.
//! `ProFont` 24pt is close to the line height of a handheld system font,
//! which keeps the familiar `0.5`-`0.8` size range readable.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    text::Baseline,
};
use profont::PROFONT_24_POINT;

/// Base font every size is derived from.
pub const BASE_FONT: &MonoFont<'static> = &PROFONT_24_POINT;

/// Glyph coverage style used to rasterize into the glyph mask.
pub const GLYPH_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_24_POINT, BinaryColor::On);

/// Text positions name the top-left corner of the first line.
pub const TEXT_BASELINE: Baseline = Baseline::Top;

/// Unscaled advance of one glyph including spacing.
#[inline]
pub const fn glyph_advance() -> u32 { BASE_FONT.character_size.width + BASE_FONT.character_spacing }

/// Unscaled line height.
#[inline]
pub const fn line_height() -> u32 { BASE_FONT.character_size.height }
