//! Tally counter.
//!
//! # Controls
//!
//! - A / Up / right arrow tap: +1
//! - Down / left arrow tap: -1 (stops at zero)
//! - X: reset, after confirmation
//! - SELECT: toggle the help overlay
//! - B: back to the menu

use core::fmt::Write;

use heapless::String;
use log::{debug, info};
use crate::colors::WHITE;
use crate::input::{InputSnapshot, Keys};
use crate::sprites;
use crate::widgets::{draw_info_overlay, draw_standard_chrome};
use crate::{Frame, Gui, Screen, Target, Transition};

use super::{HINT_SIZE, HINT_Y, TITLE_SIZE, TITLE_Y};

// =============================================================================
// Layout Constants
// =============================================================================

/// Font scale of the count.
const COUNT_SIZE: f32 = 2.0;

/// Y of the count on the top screen.
const COUNT_Y: f32 = 80.0;

/// Arrow sprites are 16x16, drawn at 3x.
const ARROW_SCALE: f32 = 3.0;
const ARROW_SIDE: u16 = 48;
const ARROW_Y: u16 = 96;
/// Left arrow's left edge.
const LEFT_ARROW_X: u16 = 40;
/// Right arrow's right edge (mirrored sprite extends left of it).
const RIGHT_ARROW_X: u16 = 280;

const HELP_TEXT: &str = "A / Up: add one\n\
Down: remove one\n\
Tap the arrows on the bottom screen\n\
X: reset   B: back\n\
SELECT: close this help";

/// Counter with reset prompt and help overlay.
pub struct CounterScreen {
    count: u32,
    show_help: bool,
}

impl CounterScreen {
    pub const fn new() -> Self {
        Self {
            count: 0,
            show_help: false,
        }
    }
}

impl Screen for CounterScreen {
    fn draw(&mut self, frame: &mut Frame<'_>) {
        let mut count_str: String<16> = String::new();
        let _ = write!(count_str, "{}", self.count);

        let mut top = frame.target(Target::Top);
        draw_standard_chrome(&mut top);
        top.draw_text_centered(0.0, TITLE_Y, TITLE_SIZE, WHITE, "Counter", 390.0);
        top.draw_sprite(sprites::COUNTER_ICON, 10.0, 40.0, 1.0, 1.0);
        top.draw_text_centered(0.0, COUNT_Y, COUNT_SIZE, WHITE, &count_str, 380.0);
        top.draw_text_centered(0.0, HINT_Y, HINT_SIZE, WHITE, "X: reset   SELECT: help   B: back", 390.0);

        let mut bottom = frame.target(Target::Bottom);
        draw_standard_chrome(&mut bottom);
        let y = f32::from(ARROW_Y);
        bottom.draw_sprite(sprites::ARROW, f32::from(LEFT_ARROW_X), y, ARROW_SCALE, ARROW_SCALE);
        bottom.draw_sprite(sprites::ARROW, f32::from(RIGHT_ARROW_X), y, -ARROW_SCALE, ARROW_SCALE);

        if self.show_help {
            draw_info_overlay(frame, HELP_TEXT);
        }
    }

    fn logic(&mut self, gui: &mut Gui, input: &InputSnapshot) -> Transition {
        if input.down(Keys::SELECT) {
            self.show_help = !self.show_help;
        }
        if input.down(Keys::B) {
            return Transition::Pop;
        }

        if input.down(Keys::A | Keys::DUP) {
            self.count = self.count.saturating_add(1);
        } else if input.down(Keys::DDOWN) {
            self.count = self.count.saturating_sub(1);
        }

        if input.down(Keys::TOUCH) {
            let touch = input.touch;
            if touch.within(LEFT_ARROW_X, ARROW_Y, ARROW_SIDE, ARROW_SIDE) {
                self.count = self.count.saturating_sub(1);
            } else if touch.within(RIGHT_ARROW_X - ARROW_SIDE, ARROW_Y, ARROW_SIDE, ARROW_SIDE) {
                self.count = self.count.saturating_add(1);
            }
        }

        if input.down(Keys::X) && self.count > 0 {
            if gui.prompt_yes_no("Reset the counter to zero?", "Reset", "Keep") {
                info!("counter reset from {}", self.count);
                self.count = 0;
            } else {
                debug!("counter reset declined");
            }
        }
        Transition::None
    }

    fn name(&self) -> &'static str { "counter" }
}

#[cfg(test)]
mod tests {
    use crate::platform::HeadlessPlatform;
    use crate::{GuiConfig, SpriteAtlas, TouchPosition};

    use super::*;

    fn gui(script: Vec<InputSnapshot>) -> Gui {
        let atlas = SpriteAtlas::from_rgba(400, 100, vec![0; 400 * 100 * 4], &sprites::SHEET_LAYOUT).unwrap();
        Gui::with_atlas(&GuiConfig::default(), atlas, Box::new(HeadlessPlatform::scripted(script)))
    }

    #[test]
    fn test_count_up_and_down() {
        let mut gui = gui(Vec::new());
        let mut screen = CounterScreen::new();
        screen.logic(&mut gui, &InputSnapshot::pressed(Keys::A));
        screen.logic(&mut gui, &InputSnapshot::pressed(Keys::DUP));
        screen.logic(&mut gui, &InputSnapshot::pressed(Keys::DDOWN));
        assert_eq!(screen.count, 1);

        screen.logic(&mut gui, &InputSnapshot::pressed(Keys::DDOWN));
        screen.logic(&mut gui, &InputSnapshot::pressed(Keys::DDOWN));
        assert_eq!(screen.count, 0);
    }

    #[test]
    fn test_arrow_taps() {
        let mut gui = gui(Vec::new());
        let mut screen = CounterScreen::new();
        screen.logic(&mut gui, &InputSnapshot::tapped(TouchPosition::new(250, 110)));
        screen.logic(&mut gui, &InputSnapshot::tapped(TouchPosition::new(250, 110)));
        screen.logic(&mut gui, &InputSnapshot::tapped(TouchPosition::new(50, 110)));
        assert_eq!(screen.count, 1);
    }

    #[test]
    fn test_reset_needs_confirmation() {
        let mut gui = gui(vec![InputSnapshot::pressed(Keys::B), InputSnapshot::pressed(Keys::A)]);
        let mut screen = CounterScreen::new();
        screen.count = 5;

        screen.logic(&mut gui, &InputSnapshot::pressed(Keys::X));
        assert_eq!(screen.count, 5);
        screen.logic(&mut gui, &InputSnapshot::pressed(Keys::X));
        assert_eq!(screen.count, 0);
    }

    #[test]
    fn test_back_pops() {
        let mut gui = gui(Vec::new());
        let mut screen = CounterScreen::new();
        assert!(matches!(screen.logic(&mut gui, &InputSnapshot::pressed(Keys::B)), Transition::Pop));
    }
}
