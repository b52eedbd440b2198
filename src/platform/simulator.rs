//! Desktop platform on top of `embedded-graphics-simulator`.
//!
//! One SDL window shows both screens in the standard layout. Keyboard keys
//! stand in for the handheld buttons and left clicks on the bottom screen
//! act as touches.
//!
//! | Key           | Button  |
//! |---------------|---------|
//! | A / B / X / Y | A/B/X/Y |
//! | Q / W         | L / R   |
//! | Return        | START   |
//! | Backspace     | SELECT  |
//! | Arrows        | D-pad   |

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, info};

use super::{LAYOUT_SIZE, Platform, compose_into, layout_to_touch};
use crate::config::FRAME_TIME;
use crate::input::{InputSnapshot, InputTracker, Keys};
use crate::surface::Surface;

fn map_key(keycode: Keycode) -> Option<Keys> {
    let keys = match keycode {
        Keycode::A => Keys::A,
        Keycode::B => Keys::B,
        Keycode::X => Keys::X,
        Keycode::Y => Keys::Y,
        Keycode::Q => Keys::L,
        Keycode::W => Keys::R,
        Keycode::Return => Keys::START,
        Keycode::Backspace => Keys::SELECT,
        Keycode::Up => Keys::DUP,
        Keycode::Down => Keys::DDOWN,
        Keycode::Left => Keys::DLEFT,
        Keycode::Right => Keys::DRIGHT,
        _ => return None,
    };
    Some(keys)
}

/// SDL window showing both screens.
pub struct SimulatorPlatform {
    display: SimulatorDisplay<Rgb888>,
    window: Window,
    tracker: InputTracker,
    previous_held: Keys,
    last_vblank: Instant,
    quit: bool,
}

impl SimulatorPlatform {
    /// Open the window at `scale` window pixels per screen pixel.
    pub fn new(title: &str, scale: u32) -> Self {
        let mut display = SimulatorDisplay::new(LAYOUT_SIZE);
        let output_settings = OutputSettingsBuilder::new().scale(scale.max(1)).build();
        let mut window = Window::new(title, &output_settings);

        display.clear(Rgb888::BLACK).ok();
        // The window must be shown once before events can be polled
        window.update(&display);
        info!("simulator window open ({}x{} @ {}x)", LAYOUT_SIZE.width, LAYOUT_SIZE.height, scale);

        Self {
            display,
            window,
            tracker: InputTracker::new(),
            previous_held: Keys::empty(),
            last_vblank: Instant::now(),
            quit: false,
        }
    }

    fn pump_events(&mut self) {
        for event in self.window.events() {
            match event {
                SimulatorEvent::Quit => {
                    debug!("simulator: quit requested");
                    self.quit = true;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    if let Some(keys) = map_key(keycode) {
                        self.tracker.press(keys);
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => {
                    if let Some(keys) = map_key(keycode) {
                        self.tracker.release(keys);
                    }
                }
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    point,
                } => {
                    if let Some(touch) = layout_to_touch(point) {
                        self.tracker.touch_at(touch);
                    }
                }
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => self.tracker.untouch(),
                SimulatorEvent::MouseMove { point } => {
                    // Dragging keeps the touch position current
                    if self.tracker.held().intersects(Keys::TOUCH) {
                        match layout_to_touch(point) {
                            Some(touch) => self.tracker.touch_at(touch),
                            None => self.tracker.untouch(),
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

impl Platform for SimulatorPlatform {
    fn present(&mut self, top: &Surface, bottom: &Surface) {
        compose_into(&mut self.display, top, bottom);
        self.window.update(&self.display);
    }

    fn wait_for_vblank(&mut self) {
        let elapsed = self.last_vblank.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
        self.last_vblank = Instant::now();
    }

    fn scan_input(&mut self) -> InputSnapshot {
        self.pump_events();
        let snapshot = self.tracker.snapshot(self.previous_held);
        self.previous_held = snapshot.keys_held;
        snapshot
    }

    fn quit_requested(&self) -> bool { self.quit }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_map() {
        assert_eq!(map_key(Keycode::A), Some(Keys::A));
        assert_eq!(map_key(Keycode::Q), Some(Keys::L));
        assert_eq!(map_key(Keycode::Return), Some(Keys::START));
        assert_eq!(map_key(Keycode::Left), Some(Keys::DLEFT));
        assert_eq!(map_key(Keycode::Z), None);
    }
}
