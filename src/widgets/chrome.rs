//! Standard screen background.
//!
//! Blue banner and footer bars around a grey body, with the target's
//! highlight strips from the sprite sheet laid over the bars.
//!
//! ```text
//! y=0   ┌──────────────────────┐  banner   (BAR_BLUE, 30px)
//! y=25  ├──────────────────────┤  body     (BODY_GRAY, 190px, overlaps banner)
//!       │                      │
//! y=215 ├──────────────────────┤  footer   (BAR_BLUE, 25px)
//! y=240 └──────────────────────┘
//! ```

use crate::atlas::sprites;
use crate::canvas::Canvas;
use crate::colors::{BAR_BLUE, BODY_GRAY};
use crate::config::{BANNER_HEIGHT, BODY_HEIGHT, BODY_Y, FOOTER_HEIGHT, FOOTER_Y};
use crate::surface::Target;

/// Sprite keys of the banner and footer strips for `target`.
const fn strip_sprites(target: Target) -> (usize, usize) {
    match target {
        Target::Top => (sprites::TOP_SCREEN_TOP, sprites::TOP_SCREEN_BOT),
        Target::Bottom => (sprites::BOTTOM_SCREEN_TOP, sprites::BOTTOM_SCREEN_BOT),
    }
}

/// Draw the banner, body and footer on the canvas' target.
pub fn draw_standard_chrome(canvas: &mut Canvas<'_>) {
    let width = canvas.target().width() as f32;

    canvas.draw_rect(0.0, 0.0, width, BANNER_HEIGHT, BAR_BLUE);
    canvas.draw_rect(0.0, BODY_Y, width, BODY_HEIGHT, BODY_GRAY);
    canvas.draw_rect(0.0, FOOTER_Y, width, FOOTER_HEIGHT, BAR_BLUE);

    let (banner, footer) = strip_sprites(canvas.target());
    canvas.draw_sprite(banner, 0.0, 0.0, 1.0, 1.0);
    canvas.draw_sprite(footer, 0.0, FOOTER_Y, 1.0, 1.0);
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
    use embedded_graphics::prelude::Point;

    use super::*;
    use crate::gui::tests::headless_gui;
    use crate::platform::HeadlessPlatform;

    const BLUE: Rgb888 = Rgb888::new(0, 120, 255);
    const GRAY: Rgb888 = Rgb888::new(120, 120, 120);

    #[test]
    fn test_chrome_bands() {
        let (mut gui, probe) = headless_gui(HeadlessPlatform::new());
        {
            let mut frame = gui.begin_frame();
            for target in Target::ALL {
                draw_standard_chrome(&mut frame.target(target));
            }
        }

        for target in Target::ALL {
            let right = target.width() as i32 - 1;
            assert_eq!(probe.pixel(target, Point::new(right, 10)), Some(BLUE), "{target:?} banner");
            // Body overlaps the last banner rows
            assert_eq!(probe.pixel(target, Point::new(right, 27)), Some(GRAY), "{target:?} body");
            assert_eq!(probe.pixel(target, Point::new(right, 214)), Some(GRAY), "{target:?} body end");
            assert_eq!(probe.pixel(target, Point::new(right, 239)), Some(BLUE), "{target:?} footer");
        }
    }

    #[test]
    fn test_chrome_draws_top_strip_sprite() {
        // The test atlas only has sprites 0 and 1, which are the top screen strips
        let (mut gui, probe) = headless_gui(HeadlessPlatform::new());
        {
            let mut frame = gui.begin_frame();
            draw_standard_chrome(&mut frame.target(Target::Top));
        }
        assert_eq!(probe.pixel(Target::Top, Point::new(0, 0)), Some(Rgb888::RED));
        assert_eq!(probe.pixel(Target::Top, Point::new(0, 215)), Some(Rgb888::WHITE));
    }

    #[test]
    fn test_strip_sprites_per_target() {
        assert_eq!(strip_sprites(Target::Top), (0, 1));
        assert_eq!(strip_sprites(Target::Bottom), (2, 3));
    }
}
