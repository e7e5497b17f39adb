// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tour: build a small control tree, script a few frames of
//! input, and watch the dispatcher route hover/click/drag events.
//!
//! This example shows how to combine:
//! - `canopy_layout` for declarative geometry (relative placement, anchors),
//! - `canopy_tree` for the control tree and picking,
//! - `canopy_input` for the per-frame dispatch state machine,
//! - `canopy_surface` for the injected event sink.
//!
//! Run:
//! - `cargo run -p canopy_demos --example picking_and_input`

use kurbo::{Point, Size, Vec2};
use smallvec::SmallVec;

use canopy_input::{Dispatcher, InputSource, Touch};
use canopy_layout::{Edges, Layout};
use canopy_surface::{EventArg, EventSink};
use canopy_tree::{Control, ControlFlags, ControlId, ControlTree, Key, MouseButton};

/// An input source driven by a pre-scripted cursor path.
#[derive(Default)]
struct Scripted {
    pos: Point,
    left_down: bool,
}

impl InputSource for Scripted {
    fn mouse_position(&self) -> Point {
        self.pos
    }
    fn button_down(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left_down,
            MouseButton::Right => false,
        }
    }
    fn wheel_delta(&self) -> f64 {
        0.0
    }
    fn touches(&self) -> SmallVec<[Touch; 4]> {
        SmallVec::new()
    }
    fn poll_key(&mut self) -> Option<Key> {
        None
    }
    fn poll_char(&mut self) -> Option<char> {
        None
    }
}

/// Prints every broadcast event with its control id.
struct Stdout;

impl EventSink<ControlId> for Stdout {
    fn broadcast(&mut self, control: ControlId, event: &str, args: &[EventArg]) {
        println!("  {control:?} {event} {args:?}");
    }
}

fn main() {
    let mut tree = ControlTree::new();

    // A 400x300 window panel with two buttons; the second is anchored to the
    // right edge so it follows the panel when it widens.
    let panel = tree.insert(
        None,
        Control::new(Layout {
            size: Size::new(400.0, 300.0),
            ..Layout::default()
        })
        .with_id("panel"),
    );
    let ok = tree.insert(
        Some(panel),
        Control::new(
            Layout {
                size: Size::new(100.0, 30.0),
                ..Layout::default()
            }
            .relative(Vec2::new(20.0, 250.0)),
        )
        .with_id("ok")
        .with_flags(ControlFlags::VISIBLE | ControlFlags::FOCUSABLE),
    );
    let cancel = tree.insert(
        Some(panel),
        Control::new(
            Layout {
                size: Size::new(100.0, 30.0),
                anchor: Edges::TOP | Edges::RIGHT,
                ..Layout::default()
            }
            .relative(Vec2::new(280.0, 250.0)),
        )
        .with_id("cancel")
        .with_flags(ControlFlags::VISIBLE | ControlFlags::FOCUSABLE),
    );

    println!("initial frames:");
    for (name, id) in [("panel", panel), ("ok", ok), ("cancel", cancel)] {
        println!("  {name}: {:?}", tree.frame(id).unwrap());
    }

    // Widen the panel: the cancel button's right anchor moves it along.
    tree.control_mut(panel).unwrap().layout.size = Size::new(500.0, 300.0);
    println!("after widening the panel to 500:");
    println!("  cancel: {:?}", tree.frame(cancel).unwrap());

    // Script a few frames: hover over the ok button, click it, then drag
    // across to the cancel button and release (which cancels the click).
    let mut dispatcher = Dispatcher::new();
    let mut source = Scripted::default();
    let mut sink = Stdout;
    let frames: [(Point, bool); 6] = [
        (Point::new(5.0, 5.0), false),
        (Point::new(60.0, 265.0), false),
        (Point::new(60.0, 265.0), true),
        (Point::new(200.0, 265.0), true),
        (Point::new(420.0, 265.0), true),
        (Point::new(420.0, 265.0), false),
    ];
    for (frame, (pos, left_down)) in frames.into_iter().enumerate() {
        source.pos = pos;
        source.left_down = left_down;
        println!("frame {frame} (cursor {pos:?}, left={left_down}):");
        dispatcher.tick(&mut tree, &mut source, &mut sink, frame as u64 * 16);
    }

    println!(
        "picked at (60, 265): {:?} (expected {:?})",
        tree.pick(Point::new(60.0, 265.0)),
        tree.lookup("ok")
    );
}
