//! Desktop demo for `twinscreen-gui`.
//!
//! Opens the two-screen simulator window and runs a small counter
//! application on the screen stack. Needs the `simulator` feature (SDL2).
//!
//! # Controls
//!
//! | Key           | Button  |
//! |---------------|---------|
//! | A / B / X / Y | A/B/X/Y |
//! | Return        | START   |
//! | Backspace     | SELECT  |
//! | Arrows        | D-pad   |
//! | Mouse (lower) | touch   |
//!
//! # Environment
//!
//! - `TWINSCREEN_ATLAS`: sprite sheet path (default `romfs/gfx/sprites.png`)
//! - `TWINSCREEN_SCALE`: window scale factor
//! - `TWINSCREEN_MAX_OBJECTS`: draw objects per frame
//! - `TWINSCREEN_LOG` / `RUST_LOG`: log filter

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

use anyhow::Context;
use log::info;
use twinscreen_gui::logging::{LoggingConfig, init_logging};
use twinscreen_gui::platform::SimulatorPlatform;
use twinscreen_gui::screens::MainMenu;
use twinscreen_gui::{Gui, GuiConfig, ScreenStack, run_main_loop};

fn main() -> anyhow::Result<()> {
    let config = GuiConfig::from_env();
    init_logging(LoggingConfig::for_app(env!("CARGO_CRATE_NAME"), &config));
    info!("starting twinscreen demo");

    let platform = SimulatorPlatform::new("Twinscreen Demo", config.window_scale);
    let mut gui = Gui::init(&config, Box::new(platform))
        .with_context(|| format!("initializing gui (atlas {})", config.atlas_path.display()))?;

    let mut stack = ScreenStack::new(Box::new(MainMenu::new()));
    run_main_loop(&mut gui, &mut stack);

    // Screens go first, then the gui releases its resources
    drop(stack);
    drop(gui);
    info!("bye");
    Ok(())
}
