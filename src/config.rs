//! Layout constants and runtime configuration.
//!
//! Fixed geometry (screen sizes, chrome bars, prompt lines) is `const` so the
//! drawing code never recomputes it per frame. Values that a deployment may
//! want to change live in [`GuiConfig`], which reads overrides from the
//! environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use log::warn;

// =============================================================================
// Display Configuration
// =============================================================================

/// Top screen width in pixels.
pub const TOP_WIDTH: u32 = 400;

/// Bottom (touch) screen width in pixels.
pub const BOTTOM_WIDTH: u32 = 320;

/// Height shared by both screens.
pub const SCREEN_HEIGHT: u32 = 240;

/// Horizontal centre of the top screen, used by centered text.
pub const TOP_CENTER_X: f32 = (TOP_WIDTH / 2) as f32;

/// Horizontal centre of the bottom screen, used by centered text.
pub const BOTTOM_CENTER_X: f32 = (BOTTOM_WIDTH / 2) as f32;

// =============================================================================
// Standard Chrome Geometry
// =============================================================================

/// Banner bar height at the top of each screen.
pub const BANNER_HEIGHT: f32 = 30.0;

/// Y of the grey body panel (overlaps the banner by 5px).
pub const BODY_Y: f32 = 25.0;

/// Height of the grey body panel.
pub const BODY_HEIGHT: f32 = 190.0;

/// Y of the footer bar.
pub const FOOTER_Y: f32 = 215.0;

/// Footer bar height.
pub const FOOTER_HEIGHT: f32 = 25.0;

// =============================================================================
// Prompt / Overlay Layout
// =============================================================================

/// Font scale used by the modal prompt.
pub const PROMPT_TEXT_SIZE: f32 = 0.6;

/// Y of the prompt message line.
pub const PROMPT_MESSAGE_Y: f32 = 100.0;

/// Y of the `<A>/<B>` options line.
pub const PROMPT_OPTIONS_Y: f32 = 180.0;

/// Font scale used by the info overlay.
pub const OVERLAY_TEXT_SIZE: f32 = 0.55;

/// Maximum message width inside the info overlay panel.
pub const OVERLAY_TEXT_WIDTH: f32 = 380.0;

// =============================================================================
// Resources
// =============================================================================

/// Glyph capacity of the per-frame text scratch buffer.
pub const TEXT_BUFFER_CAPACITY: usize = 4096;

/// Default number of draw objects accepted per frame.
pub const DEFAULT_MAX_OBJECTS: usize = 4096;

/// Fixed resource path of the sprite sheet.
pub const ATLAS_PATH: &str = "romfs/gfx/sprites.png";

/// Display refresh period (~60 Hz).
pub const FRAME_TIME: Duration = Duration::from_micros(16_667);

/// Default simulator window scale factor.
pub const DEFAULT_WINDOW_SCALE: u32 = 2;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Environment variable overriding [`GuiConfig::atlas_path`].
pub const ENV_ATLAS: &str = "TWINSCREEN_ATLAS";
/// Environment variable overriding [`GuiConfig::max_objects`].
pub const ENV_MAX_OBJECTS: &str = "TWINSCREEN_MAX_OBJECTS";
/// Environment variable overriding [`GuiConfig::window_scale`].
pub const ENV_SCALE: &str = "TWINSCREEN_SCALE";
/// Environment variable overriding [`GuiConfig::log_filter`].
pub const ENV_LOG: &str = "TWINSCREEN_LOG";

/// Startup configuration for [`Gui::init`](crate::Gui::init).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuiConfig {
    /// Sprite sheet location.
    pub atlas_path: PathBuf,
    /// Draw objects accepted per frame before `draw_rect` starts failing.
    pub max_objects: usize,
    /// Integer pixel scale of the simulator window.
    pub window_scale: u32,
    /// `env_logger` filter string, `None` falls back to `RUST_LOG`.
    pub log_filter: Option<String>,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            atlas_path: PathBuf::from(ATLAS_PATH),
            max_objects: DEFAULT_MAX_OBJECTS,
            window_scale: DEFAULT_WINDOW_SCALE,
            log_filter: None,
        }
    }
}

impl GuiConfig {
    /// Defaults with `TWINSCREEN_*` environment overrides applied.
    ///
    /// Unparsable numeric overrides are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_ATLAS) {
            config.atlas_path = PathBuf::from(path);
        }
        if let Some(value) = lookup(ENV_MAX_OBJECTS) {
            match value.parse() {
                Ok(max) => config.max_objects = max,
                Err(_) => warn!("ignoring {ENV_MAX_OBJECTS}={value:?}: not a count"),
            }
        }
        if let Some(value) = lookup(ENV_SCALE) {
            match value.parse::<u32>() {
                Ok(scale) if scale > 0 => config.window_scale = scale,
                _ => warn!("ignoring {ENV_SCALE}={value:?}: expected a positive integer"),
            }
        }
        config.log_filter = lookup(ENV_LOG);

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centers_are_half_widths() {
        assert_eq!(TOP_CENTER_X, 200.0);
        assert_eq!(BOTTOM_CENTER_X, 160.0);
    }

    #[test]
    fn test_chrome_covers_screen_height() {
        assert_eq!(FOOTER_Y + FOOTER_HEIGHT, SCREEN_HEIGHT as f32);
        assert_eq!(BODY_Y + BODY_HEIGHT, FOOTER_Y);
    }

    #[test]
    fn test_default_config() {
        let config = GuiConfig::default();
        assert_eq!(config.atlas_path, PathBuf::from(ATLAS_PATH));
        assert_eq!(config.max_objects, DEFAULT_MAX_OBJECTS);
        assert_eq!(config.window_scale, DEFAULT_WINDOW_SCALE);
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_overrides_applied() {
        let config = GuiConfig::from_lookup(|key| match key {
            ENV_ATLAS => Some("assets/other.png".into()),
            ENV_MAX_OBJECTS => Some("128".into()),
            ENV_SCALE => Some("3".into()),
            ENV_LOG => Some("debug".into()),
            _ => None,
        });
        assert_eq!(config.atlas_path, PathBuf::from("assets/other.png"));
        assert_eq!(config.max_objects, 128);
        assert_eq!(config.window_scale, 3);
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_bad_overrides_ignored() {
        let config = GuiConfig::from_lookup(|key| match key {
            ENV_MAX_OBJECTS => Some("lots".into()),
            ENV_SCALE => Some("0".into()),
            _ => None,
        });
        assert_eq!(config.max_objects, DEFAULT_MAX_OBJECTS);
        assert_eq!(config.window_scale, DEFAULT_WINDOW_SCALE);
    }
}
