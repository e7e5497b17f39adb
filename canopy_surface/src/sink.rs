// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The outward event contract: one broadcast hook plus typed callbacks.

use kurbo::Point;

/// A loosely typed event argument for the broadcast hook.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EventArg {
    /// A floating-point value (deltas, distances).
    Float(f64),
    /// An integer value (buttons, key codes).
    Int(i64),
    /// A boolean value.
    Bool(bool),
    /// A position in absolute coordinates.
    Point(Point),
}

/// Receiver for events the dispatcher emits on behalf of controls.
///
/// Every notification goes through [`EventSink::broadcast`] with a stable
/// event name; the typed callbacks fire alongside the broadcast for the
/// events hosts most commonly script against. All methods default to no-ops
/// so a sink only implements what it cares about.
///
/// `K` is the control key type (`canopy_tree::ControlId` in the full stack).
pub trait EventSink<K> {
    /// Coarse-grained hook receiving every emitted event.
    fn broadcast(&mut self, _control: K, _event: &str, _args: &[EventArg]) {}

    /// A press and release completed on the same control.
    fn clicked(&mut self, _control: K, _position: Point) {}

    /// A second click landed within the double-click thresholds.
    fn double_clicked(&mut self, _control: K, _position: Point) {}

    /// The cursor entered a control.
    fn mouse_entered(&mut self, _control: K) {}

    /// The cursor left a control.
    fn mouse_left(&mut self, _control: K) {}
}

/// A sink that drops every event.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSink;

impl<K> EventSink<K> for NullSink {}
