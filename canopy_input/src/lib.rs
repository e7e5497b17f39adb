// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Input: per-frame input snapshots and the dispatch state machine.
//!
//! Each frame, the host samples its platform input into an immutable
//! [`InputSnapshot`], and [`Dispatcher::tick`] diffs it against the previous
//! frame to emit hover, press/release/click/double-click, drag, wheel,
//! keyboard, and focus transitions to the controls of a
//! [`canopy_tree::ControlTree`].
//!
//! Everything is injected: the [`InputSource`] the snapshot samples, the
//! [`canopy_surface::EventSink`] notifications go to, and the tree itself are
//! parameters of `tick`, so tests substitute fakes without touching any
//! process-wide state.
//!
//! ## Guarantees
//!
//! - One `tick` per frame, single-threaded, run to completion; handler
//!   invocations finish before the next is considered.
//! - Fixed step order within a frame: drag, then hover transitions, then
//!   press, then release (with click/double-click), then wheel, then
//!   keyboard and text, then the per-control pointer-flag refresh.
//! - Drag is delivered to the control that took the press (capture
//!   semantics), not to whatever is currently under the cursor.
//! - A click requires press and release on the same control; releasing
//!   elsewhere cancels silently.
//! - Hover transitions are identity-based and fire at most once per frame
//!   per control.
//! - At most one key event is delivered per frame; queued text is drained
//!   one character at a time with control characters first.
//! - An absent target (cursor over empty space, no focused control) is a
//!   normal state, never an error. A panicking handler is not caught; it
//!   propagates to the host's frame loop.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dispatcher;
mod focus;
mod snapshot;

pub use dispatcher::{ClickThresholds, Dispatcher};
pub use snapshot::{ButtonState, InputSnapshot, InputSource, Touch, TouchPhase};
