//! Startup errors.
//!
//! Only resource acquisition can fail. Once [`Gui::init`](crate::Gui::init)
//! has returned, drawing never produces an error value: rejected rectangles
//! report `false` and everything else is skipped and logged.

use std::path::PathBuf;

use embedded_graphics::primitives::Rectangle;
use thiserror::Error;

/// Fatal initialization failure.
#[derive(Debug, Error)]
pub enum GuiError {
    #[error("failed to load sprite atlas {path}: {source}")]
    AtlasLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("sprite {key} region {region:?} lies outside the {width}x{height} atlas")]
    AtlasRegion {
        key: usize,
        region: Rectangle,
        width: u32,
        height: u32,
    },

    #[error("sprite atlas has no regions")]
    EmptyAtlas,

    #[error("atlas pixel buffer holds {actual} bytes, expected {expected}")]
    AtlasPixels { expected: usize, actual: usize },
}
