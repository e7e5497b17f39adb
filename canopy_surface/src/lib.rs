// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Surface: the collaborator contracts the layout/input core consumes.
//!
//! The core never talks to a concrete rasterizer, event consumer, or file
//! system. Everything crosses one of the traits in this crate, so hosts and
//! tests can substitute implementations without touching process-wide state:
//!
//! - [`Renderer`]: rectangles, lines, circles, images (including 9-slice
//!   n-patches and atlas sub-regions), text with measurement, and a
//!   nesting-safe scissor stack. [`ScissorStack`] is a reusable helper that
//!   backends can embed to get the push-intersects/pop-restores contract
//!   right.
//! - [`EventSink`]: a coarse broadcast hook `(control, event name, args)` plus
//!   typed callbacks for click, double-click, and hover transitions. All
//!   methods default to no-ops; [`NullSink`] is the do-nothing implementation.
//! - [`FileSystem`]: exists/read/write/join-path, so persisted layout and
//!   theme files can be loaded without any direct I/O in the core.
//!
//! The traits are generic over the control key `K`, matching the rest of the
//! Canopy crates; hosts typically instantiate them with
//! `canopy_tree::ControlId`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod fs;
mod render;
mod scissor;
mod sink;

pub use fs::FileSystem;
pub use render::{NinePatch, Renderer, Rgba8, TextureRegion};
pub use scissor::ScissorStack;
pub use sink::{EventArg, EventSink, NullSink};
