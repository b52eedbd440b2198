//! UI layer for a two-screen handheld.
//!
//! The crate draws into two in-memory framebuffers (a 400x240 top screen and
//! a 320x240 bottom touch screen) and hands finished frames to a
//! [`Platform`](platform::Platform) for display:
//!
//! - [`gui`]: the [`Gui`] context and the RAII [`Frame`] bracket
//! - [`canvas`]: rectangle, sprite and text helpers for one target
//! - [`screen`]: the [`Screen`] trait, [`ScreenStack`] and the main loop
//! - [`widgets`]: standard chrome, blocking yes/no prompt, info overlay
//! - [`text`]: glyph scratch buffer, measurement and scaled rasterization
//! - [`atlas`]: sprite sheet loading and blitting
//! - [`surface`]: render targets and their framebuffers
//! - [`platform`]: headless and SDL simulator backends
//! - [`input`]: per-frame button/touch snapshot
//! - [`screens`]: demo application screens (menu, counter, about)
//! - [`colors`], [`styles`], [`config`]: palette, font and layout constants
//! - [`logging`]: `env_logger` setup
//!
//! # Frame Flow
//!
//! ```text
//! wait_for_vblank ─► scan_input ─► ScreenStack::step
//!                                   ├─ Frame begins (text buffer cleared)
//!                                   ├─ top screen draws on both targets
//!                                   ├─ Frame drops (both targets presented)
//!                                   └─ top screen logic ─► Transition
//! ```

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_arguments)]

pub mod atlas;
pub mod canvas;
pub mod colors;
pub mod config;
pub mod error;
pub mod gui;
pub mod input;
pub mod logging;
pub mod platform;
pub mod screen;
pub mod screens;
pub mod styles;
pub mod surface;
pub mod text;
pub mod widgets;

// Re-export commonly used items
pub use atlas::{SpriteAtlas, sprites};
pub use canvas::Canvas;
pub use colors::Rgba;
pub use config::GuiConfig;
pub use error::GuiError;
pub use gui::{Frame, Gui};
pub use input::{InputSnapshot, Keys, TouchPosition};
pub use screen::{Flow, Screen, ScreenStack, Transition, run_main_loop};
pub use surface::{Surface, Target};
