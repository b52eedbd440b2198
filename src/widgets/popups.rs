//! Modal yes/no prompt and the info overlay.
//!
//! # Prompt
//!
//! [`prompt_yes_no`] draws a single frame and then blocks the calling
//! screen, polling input once per display refresh until A or B is pressed.
//! Nothing else runs while it waits; there is no timeout.
//!
//! # Info Overlay
//!
//! [`draw_info_overlay`] darkens both screens and shows a message panel on
//! the top one. It keeps no state: a screen that wants the overlay visible
//! draws it again every frame.

use log::{debug, info};

use crate::colors::{BLACK, OVERLAY_PANEL, OVERLAY_VEIL, WHITE};
use crate::config::{
    BODY_HEIGHT,
    BODY_Y,
    OVERLAY_TEXT_SIZE,
    OVERLAY_TEXT_WIDTH,
    PROMPT_MESSAGE_Y,
    PROMPT_OPTIONS_Y,
    PROMPT_TEXT_SIZE,
    SCREEN_HEIGHT,
    TOP_WIDTH,
};
use crate::gui::{Frame, Gui};
use crate::input::Keys;
use crate::surface::Target;
use crate::widgets::draw_standard_chrome;

// =============================================================================
// Overlay Layout
// =============================================================================

/// Left inset of the overlay message.
const OVERLAY_TEXT_X: f32 = 5.0;

/// Overlay message starts at the top of the panel.
const OVERLAY_TEXT_Y: f32 = BODY_Y;

/// Width used for both prompt lines.
const PROMPT_TEXT_WIDTH: f32 = TOP_WIDTH as f32;

// =============================================================================
// Drawing Functions
// =============================================================================

/// Ask a yes/no question and wait for the answer.
///
/// Shows `message` and an `<A>: {yes}   <B>: {no}` line on the top screen,
/// then blocks until A (returns `true`) or B (returns `false`) is newly
/// pressed. A wins when both arrive on the same refresh. If the platform
/// starts closing while waiting, the prompt returns `false`.
pub fn prompt_yes_no(gui: &mut Gui, message: &str, yes: &str, no: &str) -> bool {
    let options = format!("<A>: {yes}   <B>: {no}");
    {
        let mut frame = gui.begin_frame();
        frame.clear_all(BLACK);

        let mut top = frame.target(Target::Top);
        draw_standard_chrome(&mut top);
        top.draw_text_centered(0.0, PROMPT_MESSAGE_Y, PROMPT_TEXT_SIZE, WHITE, message, PROMPT_TEXT_WIDTH);
        top.draw_text_centered(0.0, PROMPT_OPTIONS_Y, PROMPT_TEXT_SIZE, WHITE, &options, PROMPT_TEXT_WIDTH);

        draw_standard_chrome(&mut frame.target(Target::Bottom));
    }
    debug!("prompt shown: {message:?}");

    loop {
        gui.wait_for_vblank();
        let input = gui.scan_input();
        if input.down(Keys::A) {
            debug!("prompt answered: {yes}");
            return true;
        }
        if input.down(Keys::B) {
            debug!("prompt answered: {no}");
            return false;
        }
        if gui.quit_requested() {
            info!("closing while prompt {message:?} was open");
            return false;
        }
    }
}

/// Darken both screens and show `message` in a panel on the top screen.
pub fn draw_info_overlay(frame: &mut Frame<'_>, message: &str) {
    let mut top = frame.target(Target::Top);
    top.draw_rect(0.0, 0.0, TOP_WIDTH as f32, SCREEN_HEIGHT as f32, OVERLAY_VEIL);
    top.draw_rect(0.0, BODY_Y, TOP_WIDTH as f32, BODY_HEIGHT, OVERLAY_PANEL);
    top.draw_text(OVERLAY_TEXT_X, OVERLAY_TEXT_Y, OVERLAY_TEXT_SIZE, WHITE, message, OVERLAY_TEXT_WIDTH);

    let mut bottom = frame.target(Target::Bottom);
    let width = bottom.target().width() as f32;
    bottom.draw_rect(0.0, 0.0, width, SCREEN_HEIGHT as f32, OVERLAY_VEIL);
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
    use embedded_graphics::prelude::Point;

    use super::*;
    use crate::gui::tests::headless_gui;
    use crate::input::InputSnapshot;
    use crate::platform::HeadlessPlatform;

    fn answer(script: &[InputSnapshot]) -> bool {
        let (mut gui, _probe) = headless_gui(HeadlessPlatform::scripted(script.iter().copied()));
        prompt_yes_no(&mut gui, "Reset the counter?", "Yes", "No")
    }

    fn any_white_in_rows(probe: &crate::platform::HeadlessProbe, target: Target, rows: core::ops::Range<i32>) -> bool {
        rows.flat_map(|y| (0..target.width() as i32).map(move |x| Point::new(x, y)))
            .any(|p| probe.pixel(target, p) == Some(Rgb888::WHITE))
    }

    #[test]
    fn test_prompt_affirm() {
        assert!(answer(&[InputSnapshot::pressed(Keys::A)]));
    }

    #[test]
    fn test_prompt_decline() {
        assert!(!answer(&[InputSnapshot::pressed(Keys::B)]));
    }

    #[test]
    fn test_prompt_both_pressed_affirms() {
        assert!(answer(&[InputSnapshot::pressed(Keys::A | Keys::B)]));
    }

    #[test]
    fn test_prompt_first_answer_wins() {
        // Every script over {nothing, A, B, A+B, X} up to three refreshes long
        let alphabet = [Keys::empty(), Keys::A, Keys::B, Keys::A | Keys::B, Keys::X];
        let mut scripts: Vec<Vec<InputSnapshot>> = vec![Vec::new()];
        let mut frontier = scripts.clone();
        for _ in 0..3 {
            frontier = frontier
                .iter()
                .flat_map(|s| {
                    alphabet.iter().map(move |k| {
                        let mut next = s.clone();
                        next.push(InputSnapshot::pressed(*k));
                        next
                    })
                })
                .collect();
            scripts.extend(frontier.iter().cloned());
        }

        for script in &scripts {
            let first = script.iter().find(|i| i.down(Keys::A | Keys::B));
            let expected = first.is_some_and(|i| i.down(Keys::A));
            assert_eq!(answer(script), expected, "{script:?}");
        }
    }

    #[test]
    fn test_prompt_ignores_held_buttons() {
        let held = InputSnapshot {
            keys_held: Keys::A,
            ..InputSnapshot::default()
        };
        assert!(!answer(&[held, InputSnapshot::pressed(Keys::B)]));
    }

    #[test]
    fn test_prompt_returns_false_on_quit() {
        assert!(!answer(&[]));
        assert!(!answer(&[InputSnapshot::default(), InputSnapshot::pressed(Keys::X)]));
    }

    #[test]
    fn test_prompt_draws_one_frame_then_polls() {
        let script = [InputSnapshot::default(), InputSnapshot::default(), InputSnapshot::pressed(Keys::A)];
        let (mut gui, probe) = headless_gui(HeadlessPlatform::scripted(script));
        assert!(prompt_yes_no(&mut gui, "Continue?", "Sure", "Nope"));

        assert_eq!(probe.frames_presented(), 1);
        assert_eq!(probe.vblanks(), 3);
        assert_eq!(probe.scans(), 3);

        assert_eq!(probe.pixel(Target::Top, Point::new(399, 10)), Some(Rgb888::new(0, 120, 255)));
        assert_eq!(probe.pixel(Target::Bottom, Point::new(319, 100)), Some(Rgb888::new(120, 120, 120)));
        assert!(any_white_in_rows(&probe, Target::Top, 100..116));
        assert!(any_white_in_rows(&probe, Target::Top, 180..196));
        assert!(!any_white_in_rows(&probe, Target::Bottom, 0..240));
    }

    #[test]
    fn test_info_overlay() {
        let (mut gui, probe) = headless_gui(HeadlessPlatform::new());
        {
            let mut frame = gui.begin_frame();
            frame.clear_all(WHITE);
            draw_info_overlay(&mut frame, "Press START to leave");
        }

        // Veil over white, then the panel over the veil
        assert_eq!(probe.pixel(Target::Top, Point::new(399, 5)), Some(Rgb888::new(65, 65, 65)));
        assert_eq!(probe.pixel(Target::Top, Point::new(399, 200)), Some(Rgb888::new(138, 138, 138)));
        assert_eq!(probe.pixel(Target::Bottom, Point::new(5, 5)), Some(Rgb888::new(65, 65, 65)));
        assert!(any_white_in_rows(&probe, Target::Top, 25..40));
    }
}
