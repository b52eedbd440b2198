//! Screens of the counter demo.
//!
//! # Navigation
//!
//! ```text
//! MainMenu (root)
//!   ├─ A on "Counter" ─► CounterScreen ── B ─► back
//!   ├─ A on "About"   ─► AboutScreen   ── B ─► back
//!   └─ A on "Exit"    ─► yes/no prompt ─► quit
//! ```
//!
//! Every screen starts its frame from the standard chrome and lays text out
//! with the centered helpers, so the same code renders on both targets.

mod about;
mod counter;
mod menu;

pub use about::AboutScreen;
pub use counter::CounterScreen;
pub use menu::MainMenu;

// =============================================================================
// Shared Layout
// =============================================================================

/// Y of the title line inside the banner.
const TITLE_Y: f32 = 2.0;

/// Font scale of screen titles.
const TITLE_SIZE: f32 = 0.7;

/// Font scale of body text.
const BODY_SIZE: f32 = 0.6;

/// Font scale of the footer hint line.
const HINT_SIZE: f32 = 0.5;

/// Y of the footer hint line.
const HINT_Y: f32 = 218.0;
