// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable per-frame input snapshots and the device contract behind them.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use canopy_tree::{Key, MouseButton};

/// Lifecycle phase of a touch point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Contact began this frame.
    Press,
    /// Contact moved.
    Motion,
    /// Contact ended this frame.
    Release,
}

/// One active touch point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Touch {
    /// Stable identifier for the duration of the contact.
    pub id: u64,
    /// Position in the same coordinate space as layout.
    pub position: Point,
    /// Movement since the previous frame.
    pub delta: Vec2,
    /// Contact radius reported by the platform.
    pub radius: f64,
    /// Lifecycle phase.
    pub phase: TouchPhase,
}

/// Per-frame queries against the platform input device.
///
/// Implementations are polled exactly once per frame by
/// [`InputSnapshot::capture`]. Key and character queues are drained through
/// `poll_key`/`poll_char`; the snapshot keeps at most one key per frame
/// (simultaneous presses within a frame are only partially observed, and
/// widgets depend on that cadence) but drains characters to exhaustion.
pub trait InputSource {
    /// Cursor position in the same coordinate space as layout.
    fn mouse_position(&self) -> Point;
    /// Whether `button` is currently held.
    fn button_down(&self, button: MouseButton) -> bool;
    /// Wheel movement since the previous frame.
    fn wheel_delta(&self) -> f64;
    /// Active touch points.
    fn touches(&self) -> SmallVec<[Touch; 4]>;
    /// Take one pending key press, if any.
    fn poll_key(&mut self) -> Option<Key>;
    /// Take one pending typed character, if any.
    fn poll_char(&mut self) -> Option<char>;
}

/// Down/edge state of one mouse button for one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Held right now.
    pub down: bool,
    /// Went down this frame.
    pub pressed: bool,
    /// Came up this frame.
    pub released: bool,
}

impl ButtonState {
    fn diff(down: bool, was_down: bool) -> Self {
        Self {
            down,
            pressed: down && !was_down,
            released: !down && was_down,
        }
    }
}

/// Everything the dispatcher needs to know about one frame of raw input.
///
/// Constructed fresh every tick and never mutated afterwards; the dispatcher
/// retains only the previous snapshot for diffing.
#[derive(Clone, Debug)]
pub struct InputSnapshot {
    /// Cursor position.
    pub mouse_pos: Point,
    /// Cursor movement relative to the previous snapshot (zero on the first).
    pub mouse_delta: Vec2,
    /// Left button state.
    pub left: ButtonState,
    /// Right button state.
    pub right: ButtonState,
    /// Wheel movement this frame.
    pub wheel_delta: f64,
    /// Active touch points.
    pub touches: SmallVec<[Touch; 4]>,
    /// The single key observed this frame, if any.
    pub key: Option<Key>,
    /// Queued text input in emission order. Backspace and enter are
    /// synthesized as control characters (`'\u{8}'`, `'\n'`) ahead of literal
    /// typed characters.
    pub text: SmallVec<[char; 8]>,
}

impl InputSnapshot {
    /// Sample `source` into a fresh snapshot, diffing against `prev`.
    pub fn capture(source: &mut dyn InputSource, prev: Option<&Self>) -> Self {
        let mouse_pos = source.mouse_position();
        let mouse_delta = match prev {
            Some(p) => mouse_pos - p.mouse_pos,
            None => Vec2::ZERO,
        };
        let left = ButtonState::diff(
            source.button_down(MouseButton::Left),
            prev.is_some_and(|p| p.left.down),
        );
        let right = ButtonState::diff(
            source.button_down(MouseButton::Right),
            prev.is_some_and(|p| p.right.down),
        );

        let key = source.poll_key();
        let mut text: SmallVec<[char; 8]> = SmallVec::new();
        match key {
            Some(Key::Backspace) => text.push('\u{8}'),
            Some(Key::Enter) => text.push('\n'),
            _ => {}
        }
        while let Some(ch) = source.poll_char() {
            text.push(ch);
        }

        Self {
            mouse_pos,
            mouse_delta,
            left,
            right,
            wheel_delta: source.wheel_delta(),
            touches: source.touches(),
            key,
            text,
        }
    }

    /// The state of one button.
    pub fn button(&self, button: MouseButton) -> ButtonState {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Script {
        pos: Point,
        left: bool,
        right: bool,
        wheel: f64,
        keys: Vec<Key>,
        chars: Vec<char>,
    }

    impl InputSource for Script {
        fn mouse_position(&self) -> Point {
            self.pos
        }
        fn button_down(&self, button: MouseButton) -> bool {
            match button {
                MouseButton::Left => self.left,
                MouseButton::Right => self.right,
            }
        }
        fn wheel_delta(&self) -> f64 {
            self.wheel
        }
        fn touches(&self) -> SmallVec<[Touch; 4]> {
            SmallVec::new()
        }
        fn poll_key(&mut self) -> Option<Key> {
            if self.keys.is_empty() {
                None
            } else {
                Some(self.keys.remove(0))
            }
        }
        fn poll_char(&mut self) -> Option<char> {
            if self.chars.is_empty() {
                None
            } else {
                Some(self.chars.remove(0))
            }
        }
    }

    #[test]
    fn delta_is_diffed_against_previous() {
        let mut source = Script {
            pos: Point::new(10.0, 10.0),
            ..Script::default()
        };
        let first = InputSnapshot::capture(&mut source, None);
        assert_eq!(first.mouse_delta, Vec2::ZERO);

        source.pos = Point::new(15.0, 8.0);
        let second = InputSnapshot::capture(&mut source, Some(&first));
        assert_eq!(second.mouse_delta, Vec2::new(5.0, -2.0));
    }

    #[test]
    fn button_edges_come_from_the_diff() {
        let mut source = Script {
            left: true,
            ..Script::default()
        };
        let down = InputSnapshot::capture(&mut source, None);
        assert!(down.left.down && down.left.pressed && !down.left.released);

        let held = InputSnapshot::capture(&mut source, Some(&down));
        assert!(held.left.down && !held.left.pressed);

        source.left = false;
        let up = InputSnapshot::capture(&mut source, Some(&held));
        assert!(!up.left.down && up.left.released);
    }

    #[test]
    fn at_most_one_key_per_frame() {
        let mut source = Script {
            keys: [Key::Escape, Key::Tab].into(),
            ..Script::default()
        };
        let snap = InputSnapshot::capture(&mut source, None);
        assert_eq!(snap.key, Some(Key::Escape), "first match wins");
    }

    #[test]
    fn control_characters_precede_typed_text() {
        let mut source = Script {
            keys: [Key::Backspace].into(),
            chars: ['a', 'b'].into(),
            ..Script::default()
        };
        let snap = InputSnapshot::capture(&mut source, None);
        let text: Vec<char> = snap.text.into_iter().collect();
        assert_eq!(text, ['\u{8}', 'a', 'b']);
    }
}
