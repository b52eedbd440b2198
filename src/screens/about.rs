//! Static about page.

use crate::colors::WHITE;
use crate::input::{InputSnapshot, Keys};
use crate::sprites;
use crate::widgets::draw_standard_chrome;
use crate::{Frame, Gui, Screen, Target, Transition};

use super::{BODY_SIZE, HINT_SIZE, HINT_Y, TITLE_SIZE, TITLE_Y};

const ABOUT_TEXT: &str = "A small counter built on twinscreen-gui.\n\
Screens stack on top of each other;\n\
B always returns to the previous one.";

pub struct AboutScreen;

impl Screen for AboutScreen {
    fn draw(&mut self, frame: &mut Frame<'_>) {
        let mut top = frame.target(Target::Top);
        draw_standard_chrome(&mut top);
        top.draw_text_centered(0.0, TITLE_Y, TITLE_SIZE, WHITE, "About", 390.0);
        top.draw_text(10.0, 60.0, BODY_SIZE, WHITE, ABOUT_TEXT, 380.0);
        top.draw_sprite(sprites::COUNTER_ICON, 184.0, 160.0, 1.0, 1.0);

        let mut bottom = frame.target(Target::Bottom);
        draw_standard_chrome(&mut bottom);
        bottom.draw_text_centered(0.0, HINT_Y, HINT_SIZE, WHITE, "B: back", 300.0);
    }

    fn logic(&mut self, _gui: &mut Gui, input: &InputSnapshot) -> Transition {
        if input.down(Keys::B) {
            return Transition::Pop;
        }
        Transition::None
    }

    fn name(&self) -> &'static str { "about" }
}
