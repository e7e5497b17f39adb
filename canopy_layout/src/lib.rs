// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Layout: geometry value types and the pure layout resolver.
//!
//! This crate turns a control's declarative geometry (placement mode, logical
//! size, margins, dock offsets, and anchor flags) into absolute screen
//! coordinates, given the resolved frame of its parent and a global UI scale.
//!
//! - [`Layout`] bundles the per-control inputs.
//! - [`resolve_origin`] and [`resolve_size`] are pure functions: same inputs,
//!   same outputs, no caching and no hidden state. Callers re-resolve on every
//!   query, so edits anywhere in an ancestor chain are reflected immediately.
//! - [`Frame`] is the resolved result; [`ParentFrame`] is the slice of parent
//!   state the resolver consumes.
//!
//! ## Placement modes
//!
//! - [`PlaceMode::Absolute`]: offset from the screen origin, parent ignored.
//! - [`PlaceMode::Relative`]: offset from the parent's padded content origin.
//! - [`PlaceMode::Docked`]: relative, but each docked edge is pinned to the
//!   corresponding parent edge; docking `RIGHT`/`BOTTOM` derives size from the
//!   remaining space instead of the nominal size.
//!
//! ## Anchors
//!
//! Anchors describe which parent edges a control tracks when the parent is
//! resized *after* the control was attached. The delta is measured against the
//! parent size recorded at attach time ([`AnchorBasis`]): anchoring a single
//! edge translates the control, anchoring both opposite edges stretches it.
//! An [`AnchorBasis::Unset`] basis disables anchor math entirely, which keeps
//! freshly deserialized controls stable until their first attach pass.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use canopy_layout::{Frame, Layout, ParentFrame, PlaceMode, resolve_origin};
//!
//! let parent = ParentFrame {
//!     frame: Frame::new(Point::new(50.0, 50.0), Size::new(200.0, 200.0)),
//!     ..ParentFrame::default()
//! };
//! let layout = Layout {
//!     size: Size::new(100.0, 30.0),
//!     ..Layout::default()
//! }
//! .relative(Vec2::new(20.0, 20.0));
//!
//! assert_eq!(layout.placement.mode, PlaceMode::Relative);
//! assert_eq!(resolve_origin(&layout, Some(&parent), 1.0), Point::new(70.0, 70.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod resolve;
mod types;

pub use resolve::{resolve_origin, resolve_size};
pub use types::{AnchorBasis, Edges, Frame, Layout, Margin, ParentFrame, PlaceMode, Placement};
