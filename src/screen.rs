//! Screen stack navigation.
//!
//! The UI is a stack of full-view [`Screen`]s. Only the top one is active:
//! each step it draws a complete frame and then handles that frame's input.
//! Screens never touch the stack directly; `logic` returns a [`Transition`]
//! which the stack applies after the call returns.
//!
//! # Step Order
//!
//! ```text
//! begin frame ─► clear both targets ─► top.draw ─► end frame (present)
//!                                                      │
//!                          apply Transition ◄─ top.logic(input)
//! ```
//!
//! The root screen passed to [`ScreenStack::new`] is never popped, so the
//! stack is never empty while the main loop runs.

use core::fmt;

use log::{debug, info, warn};

use crate::colors::BLACK;
use crate::gui::{Frame, Gui};
use crate::input::InputSnapshot;

/// Navigation request returned from [`Screen::logic`].
pub enum Transition {
    /// Stay on this screen.
    None,
    /// Suspend this screen and activate a new one.
    Push(Box<dyn Screen>),
    /// Drop this screen and return to the one below.
    Pop,
    /// Leave the main loop.
    Quit,
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Push(screen) => write!(f, "Push({})", screen.name()),
            Self::Pop => f.write_str("Pop"),
            Self::Quit => f.write_str("Quit"),
        }
    }
}

/// Whether the main loop should keep running after a step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    Continue,
    Quit,
}

/// One full-view UI state.
pub trait Screen {
    /// Draw both targets. The frame arrives cleared to black.
    fn draw(&mut self, frame: &mut Frame<'_>);

    /// Handle this frame's input.
    ///
    /// Runs after the frame has been presented, so blocking helpers such as
    /// [`Gui::prompt_yes_no`] may open frames of their own.
    fn logic(&mut self, gui: &mut Gui, input: &InputSnapshot) -> Transition;

    /// Name used in logs.
    fn name(&self) -> &'static str { "screen" }
}

/// LIFO stack of screens with a permanent root.
pub struct ScreenStack {
    screens: Vec<Box<dyn Screen>>,
}

impl ScreenStack {
    /// Stack holding only `root`.
    pub fn new(root: Box<dyn Screen>) -> Self {
        debug!("screen stack root: {}", root.name());
        Self { screens: vec![root] }
    }

    /// Make `screen` the active screen.
    pub fn push(&mut self, screen: Box<dyn Screen>) {
        debug!("push screen {} (depth {})", screen.name(), self.screens.len() + 1);
        self.screens.push(screen);
    }

    /// Drop the active screen. Refuses to remove the root.
    pub fn pop(&mut self) -> bool {
        if self.screens.len() <= 1 {
            warn!("refusing to pop the root screen");
            return false;
        }
        if let Some(screen) = self.screens.pop() {
            debug!("pop screen {} (depth {})", screen.name(), self.screens.len());
        }
        true
    }

    /// Number of screens, root included.
    #[inline]
    pub fn len(&self) -> usize { self.screens.len() }

    /// Always false; the root cannot be removed.
    #[inline]
    pub fn is_empty(&self) -> bool { self.screens.is_empty() }

    /// Name of the active screen.
    pub fn active_name(&self) -> &'static str { self.screens.last().map_or("", |s| s.name()) }

    /// Run one frame: draw the active screen, then its logic.
    pub fn step(&mut self, gui: &mut Gui, input: &InputSnapshot) -> Flow {
        let Some(screen) = self.screens.last_mut() else {
            return Flow::Quit;
        };
        let name = screen.name();

        {
            let mut frame = gui.begin_frame();
            frame.clear_all(BLACK);
            screen.draw(&mut frame);
        }

        match screen.logic(gui, input) {
            Transition::None => Flow::Continue,
            Transition::Push(next) => {
                self.push(next);
                Flow::Continue
            }
            Transition::Pop => {
                self.pop();
                Flow::Continue
            }
            Transition::Quit => {
                info!("{name} requested quit");
                Flow::Quit
            }
        }
    }
}

/// Drive `stack` until a screen quits or the platform closes.
///
/// Each iteration waits for the display refresh, scans input and steps the
/// stack once.
pub fn run_main_loop(gui: &mut Gui, stack: &mut ScreenStack) {
    info!("entering main loop on {}", stack.active_name());
    loop {
        gui.wait_for_vblank();
        let input = gui.scan_input();
        if gui.quit_requested() {
            info!("platform closed, leaving main loop");
            break;
        }
        if stack.step(gui, &input) == Flow::Quit {
            break;
        }
    }
    info!("main loop finished after {} frames", gui.frame_count());
}
