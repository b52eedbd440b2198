//! Per-frame input snapshot.
//!
//! Buttons are a bitmask. A snapshot carries the buttons pressed this frame
//! (`keys_down`), every button currently held (`keys_held`) and the last
//! touch position on the bottom screen.

use bitflags::bitflags;

bitflags! {
    /// Button bitmask.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Keys: u32 {
        const A      = 1 << 0;
        const B      = 1 << 1;
        const SELECT = 1 << 2;
        const START  = 1 << 3;
        const DRIGHT = 1 << 4;
        const DLEFT  = 1 << 5;
        const DUP    = 1 << 6;
        const DDOWN  = 1 << 7;
        const R      = 1 << 8;
        const L      = 1 << 9;
        const X      = 1 << 10;
        const Y      = 1 << 11;
        /// Bottom screen is being touched
        const TOUCH  = 1 << 20;
    }
}

/// Touch coordinate on the bottom screen.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct TouchPosition {
    pub px: u16,
    pub py: u16,
}

impl TouchPosition {
    #[inline]
    pub const fn new(px: u16, py: u16) -> Self { Self { px, py } }

    /// True if the touch lies inside the given box (inclusive origin, exclusive extent).
    pub fn within(self, x: u16, y: u16, w: u16, h: u16) -> bool {
        self.px >= x && self.px < x.saturating_add(w) && self.py >= y && self.py < y.saturating_add(h)
    }
}

/// Input state handed to the active screen once per frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct InputSnapshot {
    pub keys_down: Keys,
    pub keys_held: Keys,
    pub touch: TouchPosition,
}

impl InputSnapshot {
    /// Snapshot with `keys` newly pressed (and therefore held).
    pub fn pressed(keys: Keys) -> Self {
        Self {
            keys_down: keys,
            keys_held: keys,
            touch: TouchPosition::default(),
        }
    }

    /// Snapshot of a fresh tap at `touch`.
    pub fn tapped(touch: TouchPosition) -> Self {
        Self {
            keys_down: Keys::TOUCH,
            keys_held: Keys::TOUCH,
            touch,
        }
    }

    #[inline]
    pub const fn down(&self, keys: Keys) -> bool { self.keys_down.intersects(keys) }

    #[inline]
    pub const fn held(&self, keys: Keys) -> bool { self.keys_held.intersects(keys) }
}

/// Derives `keys_down` from consecutive held masks.
///
/// A button counts as down only on the scan where it goes from released to
/// held, so holding a button does not retrigger actions.
#[derive(Debug, Default)]
pub struct InputTracker {
    held: Keys,
    touch: TouchPosition,
}

impl InputTracker {
    pub const fn new() -> Self {
        Self {
            held: Keys::empty(),
            touch: TouchPosition::new(0, 0),
        }
    }

    pub fn press(&mut self, keys: Keys) { self.held.insert(keys); }

    pub fn release(&mut self, keys: Keys) { self.held.remove(keys); }

    pub fn touch_at(&mut self, touch: TouchPosition) {
        self.touch = touch;
        self.held.insert(Keys::TOUCH);
    }

    pub fn untouch(&mut self) { self.held.remove(Keys::TOUCH); }

    /// Produce this scan's snapshot given the held mask of the previous scan.
    pub fn snapshot(&self, previous_held: Keys) -> InputSnapshot {
        InputSnapshot {
            keys_down: self.held & !previous_held,
            keys_held: self.held,
            touch: self.touch,
        }
    }

    pub const fn held(&self) -> Keys { self.held }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_combine() {
        let keys = Keys::A | Keys::B;
        assert!(keys.contains(Keys::A));
        assert!(keys.contains(Keys::A | Keys::B));
        assert!(!keys.contains(Keys::X));
        assert!(keys.intersects(Keys::B | Keys::X));
        assert!(Keys::empty().contains(Keys::empty()));
        assert!(!Keys::empty().intersects(Keys::empty()));
    }

    #[test]
    fn test_keys_insert_remove() {
        let mut keys = Keys::empty();
        keys.insert(Keys::START);
        assert!(keys.contains(Keys::START));
        keys.remove(Keys::START);
        assert!(keys.is_empty());
    }

    #[test]
    fn test_keys_unknown_bits_dropped() {
        let keys = Keys::from_bits_truncate((1 << 31) | Keys::Y.bits());
        assert_eq!(keys, Keys::Y);
        assert_eq!(Keys::from_bits(1 << 31), None);
    }

    #[test]
    fn test_touch_within() {
        let touch = TouchPosition::new(50, 60);
        assert!(touch.within(40, 50, 20, 20));
        assert!(!touch.within(51, 50, 20, 20));
        assert!(!touch.within(40, 50, 10, 20));
    }

    #[test]
    fn test_tracker_edge_detection() {
        let mut tracker = InputTracker::new();
        tracker.press(Keys::A);

        let first = tracker.snapshot(Keys::empty());
        assert!(first.down(Keys::A));
        assert!(first.held(Keys::A));

        // Still held on the next scan: not down anymore
        let second = tracker.snapshot(first.keys_held);
        assert!(!second.down(Keys::A));
        assert!(second.held(Keys::A));

        tracker.release(Keys::A);
        let third = tracker.snapshot(second.keys_held);
        assert!(!third.held(Keys::A));
    }

    #[test]
    fn test_tracker_touch() {
        let mut tracker = InputTracker::new();
        tracker.touch_at(TouchPosition::new(10, 20));
        let snap = tracker.snapshot(Keys::empty());
        assert!(snap.down(Keys::TOUCH));
        assert_eq!(snap.touch, TouchPosition::new(10, 20));

        tracker.untouch();
        assert!(!tracker.held().intersects(Keys::TOUCH));
    }
}
