//! Display and input backends.
//!
//! A [`Platform`] shows finished frames, paces the loop to the display
//! refresh and reports input once per refresh. [`Gui`](crate::Gui) owns one
//! as a trait object.
//!
//! - [`HeadlessPlatform`]: scripted input, records presented frames (tests,
//!   headless runs)
//! - `SimulatorPlatform` (feature `simulator`): SDL window via
//!   `embedded-graphics-simulator`
//!
//! # Window Layout
//!
//! Both backends arrange the two screens the way the handheld does: the top
//! screen at the origin and the narrower bottom screen centred beneath it.
//!
//! ```text
//! ┌────────────────────────┐
//! │        TOP 400x240     │
//! ├──┬──────────────────┬──┤
//! │  │  BOTTOM 320x240  │  │
//! └──┴──────────────────┴──┘
//! ```

mod headless;
#[cfg(feature = "simulator")]
mod simulator;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
pub use headless::{HeadlessPlatform, HeadlessProbe};
#[cfg(feature = "simulator")]
pub use simulator::SimulatorPlatform;

use crate::config::{BOTTOM_WIDTH, SCREEN_HEIGHT, TOP_WIDTH};
use crate::input::InputSnapshot;
use crate::surface::Surface;

/// Size of the combined two-screen layout.
pub const LAYOUT_SIZE: Size = Size::new(TOP_WIDTH, SCREEN_HEIGHT * 2);

/// Top-left of the bottom screen inside the layout.
pub const BOTTOM_OFFSET: Point = Point::new(((TOP_WIDTH - BOTTOM_WIDTH) / 2) as i32, SCREEN_HEIGHT as i32);

/// Presentation, refresh pacing and input for one device.
pub trait Platform {
    /// Show a finished frame.
    fn present(&mut self, top: &Surface, bottom: &Surface);

    /// Block until the next display refresh.
    fn wait_for_vblank(&mut self);

    /// Input state for the current refresh.
    fn scan_input(&mut self) -> InputSnapshot;

    /// True once the user asked the application to close.
    fn quit_requested(&self) -> bool { false }
}

/// Copy both screens into `display` using the standard layout.
pub fn compose_into<D>(display: &mut D, top: &Surface, bottom: &Surface)
where
    D: DrawTarget<Color = Rgb888>,
{
    let top_area = Rectangle::new(Point::zero(), top.size());
    display.fill_contiguous(&top_area, top.pixels().iter().copied()).ok();

    let bottom_area = Rectangle::new(BOTTOM_OFFSET, bottom.size());
    display.fill_contiguous(&bottom_area, bottom.pixels().iter().copied()).ok();
}

/// Map a point in layout coordinates onto the bottom screen, if it lies there.
pub fn layout_to_touch(point: Point) -> Option<crate::input::TouchPosition> {
    let local = point - BOTTOM_OFFSET;
    if local.x < 0 || local.y < 0 || local.x >= BOTTOM_WIDTH as i32 || local.y >= SCREEN_HEIGHT as i32 {
        return None;
    }
    Some(crate::input::TouchPosition::new(local.x as u16, local.y as u16))
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;

    use super::*;
    use crate::input::TouchPosition;
    use crate::surface::Target;

    #[test]
    fn test_layout_geometry() {
        assert_eq!(LAYOUT_SIZE, Size::new(400, 480));
        assert_eq!(BOTTOM_OFFSET, Point::new(40, 240));
    }

    #[test]
    fn test_compose_places_bottom_screen() {
        let mut top = Surface::for_target(Target::Top);
        let mut bottom = Surface::for_target(Target::Bottom);
        top.fill(Rgb888::RED);
        bottom.fill(Rgb888::GREEN);

        let mut layout = Surface::new(LAYOUT_SIZE);
        compose_into(&mut layout, &top, &bottom);

        assert_eq!(layout.pixel(Point::new(399, 239)), Some(Rgb888::RED));
        assert_eq!(layout.pixel(Point::new(40, 240)), Some(Rgb888::GREEN));
        assert_eq!(layout.pixel(Point::new(359, 479)), Some(Rgb888::GREEN));
        // Side margins next to the bottom screen stay untouched
        assert_eq!(layout.pixel(Point::new(39, 300)), Some(Rgb888::BLACK));
        assert_eq!(layout.pixel(Point::new(360, 300)), Some(Rgb888::BLACK));
    }

    #[test]
    fn test_layout_to_touch() {
        assert_eq!(layout_to_touch(Point::new(40, 240)), Some(TouchPosition::new(0, 0)));
        assert_eq!(layout_to_touch(Point::new(359, 479)), Some(TouchPosition::new(319, 239)));
        assert_eq!(layout_to_touch(Point::new(10, 300)), None);
        assert_eq!(layout_to_touch(Point::new(100, 100)), None);
    }
}
