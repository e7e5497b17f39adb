// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering backend contract.

use kurbo::{Insets, Point, Rect, Size};

/// An 8-bit RGBA color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 255 is opaque.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    /// A color from channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A sub-rectangle of a backend texture, addressed by an opaque handle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextureRegion {
    /// Backend texture handle.
    pub texture: u32,
    /// Source rectangle within the texture, in texel coordinates.
    pub source: Rect,
}

/// A 9-slice stretchable image: fixed corners, stretchable edges and center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NinePatch {
    /// The full source region.
    pub region: TextureRegion,
    /// Distance from each source edge to the stretchable center.
    pub insets: Insets,
}

/// Drawing operations the tree's draw pass issues.
///
/// Coordinates are absolute and already scaled; the backend is free to batch,
/// rasterize, or record them however it likes. The scissor stack must nest:
/// [`Renderer::push_scissor`] clips to the intersection of the given rectangle
/// with the current clip, and [`Renderer::pop_scissor`] restores the clip that
/// was in effect before the matching push. [`crate::ScissorStack`] implements
/// that bookkeeping for backends that want it.
pub trait Renderer {
    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Rgba8);
    /// Outline a rectangle.
    fn stroke_rect(&mut self, rect: Rect, width: f64, color: Rgba8);
    /// Draw a line segment.
    fn line(&mut self, from: Point, to: Point, width: f64, color: Rgba8);
    /// Fill a circle.
    fn circle(&mut self, center: Point, radius: f64, color: Rgba8);
    /// Draw a texture region into a destination rectangle.
    fn image(&mut self, region: &TextureRegion, dest: Rect, tint: Rgba8);
    /// Draw a 9-slice image into a destination rectangle.
    fn nine_patch(&mut self, patch: &NinePatch, dest: Rect, tint: Rgba8);
    /// Draw text at a baseline origin.
    fn text(&mut self, text: &str, origin: Point, size: f64, color: Rgba8);
    /// Measure text without drawing it.
    fn measure_text(&mut self, text: &str, size: f64) -> Size;
    /// Intersect the given rectangle with the current clip and make the
    /// result the new clip.
    fn push_scissor(&mut self, rect: Rect);
    /// Restore the clip that was in effect before the matching push.
    fn pop_scissor(&mut self);
}
