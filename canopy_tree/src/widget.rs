// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget capability trait: the handler surface every control inherits.

use canopy_layout::Frame;
use canopy_surface::Renderer;
use kurbo::{Point, Vec2};

/// Mouse buttons the dispatch state machine tracks independently.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// The primary button.
    Left,
    /// The secondary button.
    Right,
}

/// A non-character key delivered to the focused control.
///
/// Character input arrives separately through [`Widget::on_text`]; this enum
/// covers editing and navigation keys, with `Other` for anything the host
/// wants to pass through by platform scan code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Backspace; also synthesized into the text queue as `'\u{8}'`.
    Backspace,
    /// Enter/Return; also synthesized into the text queue as `'\n'`.
    Enter,
    /// Tab.
    Tab,
    /// Escape.
    Escape,
    /// Delete.
    Delete,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home.
    Home,
    /// End.
    End,
    /// Any other key, by platform scan code.
    Other(u32),
}

/// Per-widget behavior hooks with default no-op implementations.
///
/// The dispatch state machine calls these on the controls it resolves each
/// frame; a concrete widget overrides only the handlers it cares about.
/// Handlers run to completion on the single UI thread. A handler may mutate
/// the tree it lives in (through deferred host machinery); such mutations are
/// observed starting with the next frame's pick, not retroactively.
pub trait Widget {
    /// The cursor moved onto this control.
    fn on_mouse_enter(&mut self) {}

    /// The cursor moved off this control.
    fn on_mouse_leave(&mut self) {}

    /// The cursor moved while staying on this control.
    fn on_mouse_move(&mut self, _pos: Point, _delta: Vec2) {}

    /// A button was pressed with the cursor on this control.
    fn on_mouse_press(&mut self, _button: MouseButton, _pos: Point) {}

    /// A button was released with the cursor on this control. The press may
    /// have happened elsewhere.
    fn on_mouse_release(&mut self, _button: MouseButton, _pos: Point) {}

    /// Press and release both landed on this control.
    fn on_click(&mut self, _button: MouseButton, _pos: Point) {}

    /// A second click landed within the double-click time and distance
    /// thresholds. Fires after the accompanying [`Widget::on_click`].
    fn on_double_click(&mut self, _button: MouseButton, _pos: Point) {}

    /// The cursor moved while the left button is held and this control was
    /// the press target. Delivered here regardless of what is currently under
    /// the cursor (capture semantics).
    fn on_drag(&mut self, _start: Point, _end: Point) {}

    /// Wheel input over this control. Return `true` to consume; `false` lets
    /// the dispatcher bubble the wheel up the parent chain.
    fn on_wheel(&mut self, _delta: f64) -> bool {
        false
    }

    /// A key went down while this control holds focus. At most one key is
    /// delivered per frame.
    fn on_key(&mut self, _key: Key) {}

    /// One character of queued text input, in emission order. Control
    /// characters for backspace and enter arrive ahead of literal characters.
    fn on_text(&mut self, _ch: char) {}

    /// This control received keyboard focus.
    fn on_focus(&mut self) {}

    /// This control lost keyboard focus.
    fn on_blur(&mut self) {}

    /// Whether `child` may receive a hit at `point`. Clipping and scrolling
    /// containers override this to exclude children outside their visible
    /// viewport even though the child's raw geometry contains the point.
    fn permits_child_hit(&self, _own: &Frame, _child: &Frame, _point: Point) -> bool {
        true
    }

    /// Draw this control into its resolved frame. Concrete visuals live in
    /// widget implementations; the base contract draws nothing.
    fn draw(&self, _renderer: &mut dyn Renderer, _frame: &Frame) {}
}

/// The inert widget: every handler is a no-op.
impl Widget for () {}
