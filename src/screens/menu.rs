//! Root menu.
//!
//! Top screen shows the title, bottom screen the entries. Entries are picked
//! with the D-pad and A, or by tapping them.

use log::info;
use crate::colors::{BLACK, SELECTED, WHITE};
use crate::input::{InputSnapshot, Keys};
use crate::widgets::draw_standard_chrome;
use crate::{Frame, Gui, Screen, Target, Transition};

use super::{AboutScreen, BODY_SIZE, CounterScreen, HINT_SIZE, HINT_Y, TITLE_SIZE, TITLE_Y};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Entry {
    Counter,
    About,
    Exit,
}

impl Entry {
    const ALL: [Self; 3] = [Self::Counter, Self::About, Self::Exit];

    const fn label(self) -> &'static str {
        match self {
            Self::Counter => "Counter",
            Self::About => "About",
            Self::Exit => "Exit",
        }
    }
}

// =============================================================================
// Layout Constants
// =============================================================================

/// Y of the first entry button on the bottom screen.
const ENTRY_Y: u16 = 50;
/// Height of one entry button.
const ENTRY_HEIGHT: u16 = 40;
/// Vertical distance between entries.
const ENTRY_STRIDE: u16 = 55;
/// X of the entry buttons.
const ENTRY_X: u16 = 60;
/// Width of the entry buttons.
const ENTRY_WIDTH: u16 = 200;

const fn entry_top(index: usize) -> u16 { ENTRY_Y + index as u16 * ENTRY_STRIDE }

/// Main menu, the root of the demo.
pub struct MainMenu {
    selected: usize,
}

impl MainMenu {
    pub const fn new() -> Self { Self { selected: 0 } }

    fn activate(&self, gui: &mut Gui) -> Transition {
        match Entry::ALL[self.selected] {
            Entry::Counter => Transition::Push(Box::new(CounterScreen::new())),
            Entry::About => Transition::Push(Box::new(AboutScreen)),
            Entry::Exit => {
                if gui.prompt_yes_no("Leave the demo?", "Exit", "Stay") {
                    info!("exit confirmed");
                    Transition::Quit
                } else {
                    Transition::None
                }
            }
        }
    }
}

impl Screen for MainMenu {
    fn draw(&mut self, frame: &mut Frame<'_>) {
        let mut top = frame.target(Target::Top);
        draw_standard_chrome(&mut top);
        top.draw_text_centered(0.0, TITLE_Y, TITLE_SIZE, WHITE, "Twinscreen Demo", 390.0);
        top.draw_text_centered(0.0, 100.0, BODY_SIZE, WHITE, "Pick an entry on the bottom screen", 390.0);
        top.draw_text_centered(0.0, HINT_Y, HINT_SIZE, WHITE, "Up/Down: move   A: open", 390.0);

        let mut bottom = frame.target(Target::Bottom);
        draw_standard_chrome(&mut bottom);
        for (i, entry) in Entry::ALL.iter().enumerate() {
            let y = f32::from(entry_top(i));
            let fill = if i == self.selected { SELECTED } else { WHITE };
            bottom.draw_rect(f32::from(ENTRY_X), y, f32::from(ENTRY_WIDTH), f32::from(ENTRY_HEIGHT), fill);
            bottom.draw_text_centered(0.0, y + 8.0, BODY_SIZE, BLACK, entry.label(), f32::from(ENTRY_WIDTH));
        }
    }

    fn logic(&mut self, gui: &mut Gui, input: &InputSnapshot) -> Transition {
        let count = Entry::ALL.len();
        if input.down(Keys::DDOWN) {
            self.selected = (self.selected + 1) % count;
        } else if input.down(Keys::DUP) {
            self.selected = (self.selected + count - 1) % count;
        }

        if input.down(Keys::TOUCH) {
            let tapped = (0..count)
                .find(|&i| input.touch.within(ENTRY_X, entry_top(i), ENTRY_WIDTH, ENTRY_HEIGHT));
            if let Some(index) = tapped {
                self.selected = index;
                return self.activate(gui);
            }
        }

        if input.down(Keys::A) {
            return self.activate(gui);
        }
        if input.down(Keys::START) {
            return Transition::Quit;
        }
        Transition::None
    }

    fn name(&self) -> &'static str { "main-menu" }
}
