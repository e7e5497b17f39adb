// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame dispatch state machine.
//!
//! [`Dispatcher`] owns the small set of "currently relevant control"
//! references that persist across frames (the hovered control, each button's
//! press target, the focused control, and the previous input snapshot) and
//! turns one frame of raw input into handler invocations on the tree.
//!
//! The step order within [`Dispatcher::tick`] is fixed: drag, move, hover
//! transition, press, release (click/double-click), wheel, keyboard, text,
//! transient-flag refresh. For a given button, press → release → click are
//! always evaluated in that order within a frame.

use kurbo::{Point, Vec2};

use canopy_surface::{EventArg, EventSink};
use canopy_tree::{ControlId, ControlTree, MouseButton};

use crate::snapshot::{InputSnapshot, InputSource};

const LEFT: usize = 0;
const RIGHT: usize = 1;
const BUTTONS: [MouseButton; 2] = [MouseButton::Left, MouseButton::Right];

const fn slot(button: MouseButton) -> usize {
    match button {
        MouseButton::Left => LEFT,
        MouseButton::Right => RIGHT,
    }
}

fn button_args(button: MouseButton, pos: Point) -> [EventArg; 2] {
    [EventArg::Point(pos), EventArg::Int(slot(button) as i64)]
}

/// Time and distance limits for recognizing a double click.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClickThresholds {
    /// Maximum time between two clicks on the same control, in milliseconds.
    pub double_click_ms: u64,
    /// Maximum cursor displacement between the two clicks.
    pub double_click_distance: f64,
}

impl Default for ClickThresholds {
    fn default() -> Self {
        Self {
            double_click_ms: 400,
            double_click_distance: 4.0,
        }
    }
}

/// Record of the click that may become the first half of a double click.
#[derive(Copy, Clone, Debug)]
struct LastClick {
    control: ControlId,
    time: u64,
    position: Point,
}

/// The input dispatch state machine.
///
/// Construct once, then call [`Dispatcher::tick`] every frame with the tree,
/// the input source, the event sink, and the current time in milliseconds.
/// All collaborators are passed in; the dispatcher holds no references to
/// them between frames.
#[derive(Debug, Default)]
pub struct Dispatcher {
    /// Double-click recognition limits.
    pub thresholds: ClickThresholds,
    hovered: Option<ControlId>,
    clicked: [Option<ControlId>; 2],
    last_click: [Option<LastClick>; 2],
    focused: Option<ControlId>,
    prev: Option<InputSnapshot>,
}

impl Dispatcher {
    /// A dispatcher with default thresholds and no per-frame state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The control currently under the cursor, as of the last tick.
    pub fn hovered(&self) -> Option<ControlId> {
        self.hovered
    }

    /// The control that took `button`'s most recent press, until release.
    pub fn press_target(&self, button: MouseButton) -> Option<ControlId> {
        self.clicked[slot(button)]
    }

    /// The control holding keyboard focus.
    pub fn focused(&self) -> Option<ControlId> {
        self.focused
    }

    /// Run one frame of dispatch.
    ///
    /// Samples `source` into a fresh [`InputSnapshot`], diffs it against the
    /// previous frame, and invokes handlers on the affected controls. The
    /// tree is not re-snapshotted mid-frame: a handler that mutates the tree
    /// sees its changes take effect starting with the next frame's pick.
    pub fn tick(
        &mut self,
        tree: &mut ControlTree,
        source: &mut dyn InputSource,
        sink: &mut dyn EventSink<ControlId>,
        now_ms: u64,
    ) {
        let snapshot = InputSnapshot::capture(source, self.prev.as_ref());
        let moved = snapshot.mouse_delta != Vec2::ZERO;
        let under_mouse = tree.pick(snapshot.mouse_pos);

        // Drag goes to the control that took the press, wherever the cursor
        // is now (capture semantics).
        if let Some(target) = self.clicked[LEFT]
            && snapshot.left.down
            && moved
        {
            let start = match self.prev.as_ref() {
                Some(p) => p.mouse_pos,
                None => snapshot.mouse_pos,
            };
            if let Some(w) = tree.widget_mut(target) {
                w.on_drag(start, snapshot.mouse_pos);
                sink.broadcast(
                    target,
                    "drag",
                    &[
                        EventArg::Point(start),
                        EventArg::Point(snapshot.mouse_pos),
                    ],
                );
            }
        }

        // Move only while the hovered control is unchanged.
        if under_mouse == self.hovered
            && moved
            && let Some(target) = under_mouse
            && let Some(w) = tree.widget_mut(target)
        {
            w.on_mouse_move(snapshot.mouse_pos, snapshot.mouse_delta);
            sink.broadcast(target, "mouse_move", &[EventArg::Point(snapshot.mouse_pos)]);
        }

        // Hover transition, by identity, at most once per frame per control.
        if under_mouse != self.hovered {
            if let Some(old) = self.hovered
                && let Some(w) = tree.widget_mut(old)
            {
                w.on_mouse_leave();
                sink.mouse_left(old);
                sink.broadcast(old, "mouse_leave", &[]);
            }
            if let Some(new) = under_mouse
                && let Some(w) = tree.widget_mut(new)
            {
                w.on_mouse_enter();
                sink.mouse_entered(new);
                sink.broadcast(new, "mouse_enter", &[]);
            }
            self.hovered = under_mouse;
        }

        // Press, per button. The press target is recorded unconditionally,
        // even over an already hovered control, and takes focus.
        for button in BUTTONS {
            if snapshot.button(button).pressed
                && let Some(target) = under_mouse
            {
                if let Some(w) = tree.widget_mut(target) {
                    w.on_mouse_press(button, snapshot.mouse_pos);
                }
                sink.broadcast(target, "mouse_press", &button_args(button, snapshot.mouse_pos));
                self.clicked[slot(button)] = Some(target);
                self.focus(tree, sink, Some(target));
            }
        }

        // Release, per button. Release goes to whatever is under the cursor;
        // the click additionally requires it to be the press target. The
        // press record is cleared either way, so releasing over a different
        // control cancels the click silently.
        for button in BUTTONS {
            if snapshot.button(button).released {
                if let Some(target) = under_mouse {
                    if let Some(w) = tree.widget_mut(target) {
                        w.on_mouse_release(button, snapshot.mouse_pos);
                    }
                    sink.broadcast(
                        target,
                        "mouse_release",
                        &button_args(button, snapshot.mouse_pos),
                    );
                    if self.clicked[slot(button)] == Some(target) {
                        self.emit_click(tree, sink, target, button, snapshot.mouse_pos, now_ms);
                    }
                }
                self.clicked[slot(button)] = None;
            }
        }

        // Wheel bubbles up the parent chain until an ancestor consumes it.
        if snapshot.wheel_delta != 0.0
            && let Some(target) = under_mouse
        {
            sink.broadcast(target, "mouse_wheel", &[EventArg::Float(snapshot.wheel_delta)]);
            let mut cursor = Some(target);
            while let Some(id) = cursor {
                let consumed = tree
                    .widget_mut(id)
                    .map(|w| w.on_wheel(snapshot.wheel_delta))
                    .unwrap_or(false);
                if consumed {
                    break;
                }
                cursor = tree.parent_of(id);
            }
        }

        // At most one key per frame, to the focused control.
        if let Some(key) = snapshot.key
            && let Some(target) = self.focused
            && let Some(w) = tree.widget_mut(target)
        {
            w.on_key(key);
            sink.broadcast(target, "key_press", &[]);
        }

        // Queued text drains one handler call per character.
        if let Some(target) = self.focused
            && tree.is_alive(target)
        {
            for ch in &snapshot.text {
                if let Some(w) = tree.widget_mut(target) {
                    w.on_text(*ch);
                }
                sink.broadcast(target, "text_input", &[EventArg::Int(i64::from(*ch as u32))]);
            }
        }

        // Transient per-control flags mirror the authoritative state, so
        // hover/pressed styling never disagrees with the state machine.
        tree.refresh_pointer_flags(self.hovered, self.clicked[LEFT]);

        self.prev = Some(snapshot);
    }

    /// Transfer keyboard focus.
    ///
    /// The outgoing control receives `on_blur` when the target differs; the
    /// incoming control always receives `on_focus`, even when focus is
    /// reasserted on the control that already holds it.
    pub fn focus(
        &mut self,
        tree: &mut ControlTree,
        sink: &mut dyn EventSink<ControlId>,
        target: Option<ControlId>,
    ) {
        if self.focused != target
            && let Some(old) = self.focused
            && let Some(w) = tree.widget_mut(old)
        {
            w.on_blur();
            sink.broadcast(old, "blur", &[]);
        }
        self.focused = target;
        if let Some(new) = target
            && let Some(w) = tree.widget_mut(new)
        {
            w.on_focus();
            sink.broadcast(new, "focus", &[]);
        }
    }

    fn emit_click(
        &mut self,
        tree: &mut ControlTree,
        sink: &mut dyn EventSink<ControlId>,
        target: ControlId,
        button: MouseButton,
        pos: Point,
        now_ms: u64,
    ) {
        if let Some(w) = tree.widget_mut(target) {
            w.on_click(button, pos);
        }
        sink.clicked(target, pos);
        sink.broadcast(target, "click", &button_args(button, pos));

        let idx = slot(button);
        let is_double = self.last_click[idx].is_some_and(|last| {
            last.control == target
                && now_ms.saturating_sub(last.time) <= self.thresholds.double_click_ms
                && last.position.distance(pos) <= self.thresholds.double_click_distance
        });
        if is_double {
            if let Some(w) = tree.widget_mut(target) {
                w.on_double_click(button, pos);
            }
            sink.double_clicked(target, pos);
            sink.broadcast(target, "double_click", &button_args(button, pos));
            // The pair is spent; a third click starts a fresh cycle instead
            // of chaining doubles.
            self.last_click[idx] = None;
        } else {
            self.last_click[idx] = Some(LastClick {
                control: target,
                time: now_ms,
                position: pos,
            });
        }
    }
}
