// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Tree: the control tree of a retained-mode widget toolkit.
//!
//! A [`ControlTree`] owns a forest of [`Control`] nodes. Each control carries
//! declarative geometry from [`canopy_layout`], ordering and state flags, and
//! a boxed [`Widget`]: the capability trait every concrete widget implements,
//! with a default no-op body for every handler so widgets override only what
//! they need.
//!
//! - **Ownership**: a control lives in exactly one parent's child list (or in
//!   the tree's root list). The parent link on a node is a non-owning
//!   back-reference; dropping a subtree is just dropping the child list.
//!   [`ControlId`]s are generational, so stale handles answer `None` instead
//!   of aliasing a reused slot.
//! - **Geometry**: absolute frames are derived on every query through the
//!   ancestor chain, never cached, so an edit anywhere in the chain is
//!   visible immediately. Attaching a child freezes its anchor basis to the
//!   parent's size at that moment; later resizes produce anchor deltas.
//! - **Ordering**: within one peer group, controls draw in ascending
//!   `z_depth`, with `ALWAYS_ON_TOP` controls in a separate bucket above all
//!   others. Picking walks the same order reversed, topmost first, deepest
//!   match wins, with a per-parent veto hook so clipping/scrolling containers
//!   can exclude children outside their viewport.
//! - **Drawing**: [`ControlTree::draw`] traverses in draw order and brackets
//!   clipping containers' children with the renderer's scissor stack.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use canopy_layout::Layout;
//! use canopy_tree::{Control, ControlTree};
//!
//! let mut tree = ControlTree::new();
//! let panel = tree.insert(
//!     None,
//!     Control::new(Layout {
//!         size: Size::new(200.0, 200.0),
//!         ..Layout::default()
//!     }),
//! );
//! let button = tree.insert(
//!     Some(panel),
//!     Control::new(Layout {
//!         size: Size::new(100.0, 30.0),
//!         ..Layout::default()
//!     }
//!     .relative(Vec2::new(20.0, 20.0))),
//! );
//!
//! assert_eq!(tree.frame(button).unwrap().origin, Point::new(20.0, 20.0));
//! assert_eq!(tree.pick(Point::new(25.0, 25.0)), Some(button));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod draw;
mod pick;
mod tree;
mod types;
mod widget;

pub use tree::ControlTree;
pub use types::{Control, ControlFlags, ControlId};
pub use widget::{Key, MouseButton, Widget};
