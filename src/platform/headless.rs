//! Window-less platform driven by a scripted input queue.
//!
//! Every presented frame is counted and the latest one is kept so tests (or
//! tooling) can inspect pixels or save a screenshot. When the script runs
//! dry the platform reports a quit request, which ends the main loop and
//! releases a blocking prompt instead of spinning forever.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::*;
use log::trace;

use super::{LAYOUT_SIZE, Platform, compose_into};
use crate::input::InputSnapshot;
use crate::surface::{Surface, Target};

#[derive(Default)]
struct Record {
    frames_presented: u64,
    vblanks: u64,
    scans: u64,
    last_top: Option<Vec<Rgb888>>,
    last_bottom: Option<Vec<Rgb888>>,
}

/// Read-only view of what a [`HeadlessPlatform`] has seen.
#[derive(Clone)]
pub struct HeadlessProbe {
    record: Rc<RefCell<Record>>,
}

impl HeadlessProbe {
    pub fn frames_presented(&self) -> u64 { self.record.borrow().frames_presented }

    pub fn vblanks(&self) -> u64 { self.record.borrow().vblanks }

    pub fn scans(&self) -> u64 { self.record.borrow().scans }

    /// Pixel of the last presented frame on `target`.
    pub fn pixel(&self, target: Target, point: Point) -> Option<Rgb888> {
        let record = self.record.borrow();
        let pixels = match target {
            Target::Top => record.last_top.as_ref()?,
            Target::Bottom => record.last_bottom.as_ref()?,
        };
        let size = target.size();
        if point.x < 0 || point.y < 0 || point.x as u32 >= size.width || point.y as u32 >= size.height {
            return None;
        }
        pixels.get(point.y as usize * size.width as usize + point.x as usize).copied()
    }

    /// Save the last presented frame as a PNG in the two-screen layout.
    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        let record = self.record.borrow();
        let mut top = Surface::for_target(Target::Top);
        let mut bottom = Surface::for_target(Target::Bottom);
        if let Some(pixels) = &record.last_top {
            top.fill_contiguous(&top.bounding_box(), pixels.iter().copied()).ok();
        }
        if let Some(pixels) = &record.last_bottom {
            bottom.fill_contiguous(&bottom.bounding_box(), pixels.iter().copied()).ok();
        }

        let mut layout = Surface::new(LAYOUT_SIZE);
        compose_into(&mut layout, &top, &bottom);

        let bytes = layout.pixels().iter().flat_map(|p| [p.r(), p.g(), p.b()]).collect();
        let image = image::RgbImage::from_raw(LAYOUT_SIZE.width, LAYOUT_SIZE.height, bytes)
            .ok_or_else(|| image::ImageError::Parameter(image::error::ParameterError::from_kind(
                image::error::ParameterErrorKind::DimensionMismatch,
            )))?;
        image.save(path)
    }
}

/// Platform with no window: input comes from a queue, frames are recorded.
pub struct HeadlessPlatform {
    script: VecDeque<InputSnapshot>,
    record: Rc<RefCell<Record>>,
    exhausted: bool,
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            record: Rc::new(RefCell::new(Record::default())),
            exhausted: false,
        }
    }

    /// Platform that replays `inputs`, one per scan.
    pub fn scripted(inputs: impl IntoIterator<Item = InputSnapshot>) -> Self {
        let mut platform = Self::new();
        platform.script.extend(inputs);
        platform
    }

    /// Handle for inspecting the platform after it moves into a `Gui`.
    pub fn probe(&self) -> HeadlessProbe {
        HeadlessProbe {
            record: Rc::clone(&self.record),
        }
    }
}

impl Default for HeadlessPlatform {
    fn default() -> Self { Self::new() }
}

impl Platform for HeadlessPlatform {
    fn present(&mut self, top: &Surface, bottom: &Surface) {
        let mut record = self.record.borrow_mut();
        record.frames_presented += 1;
        record.last_top = Some(top.pixels().to_vec());
        record.last_bottom = Some(bottom.pixels().to_vec());
        trace!("headless: presented frame {}", record.frames_presented);
    }

    fn wait_for_vblank(&mut self) { self.record.borrow_mut().vblanks += 1; }

    fn scan_input(&mut self) -> InputSnapshot {
        self.record.borrow_mut().scans += 1;
        match self.script.pop_front() {
            Some(input) => input,
            None => {
                self.exhausted = true;
                InputSnapshot::default()
            }
        }
    }

    fn quit_requested(&self) -> bool { self.exhausted }
}
