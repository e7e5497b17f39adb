// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for layout resolution: margins, edge flags, placement, frames.

use kurbo::{Point, Rect, Size, Vec2};

/// Per-edge spacing in logical (unscaled) units.
///
/// Used three ways: as a control's outer margin, as a container's inner
/// padding (space reserved for children), and as per-edge dock offsets.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Margin {
    /// Spacing on the left edge.
    pub left: f64,
    /// Spacing on the top edge.
    pub top: f64,
    /// Spacing on the right edge.
    pub right: f64,
    /// Spacing on the bottom edge.
    pub bottom: f64,
}

impl Margin {
    /// No spacing on any edge.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Spacing given per edge.
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same spacing on all four edges.
    pub const fn all(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    /// The left/top corner as a vector, for origin arithmetic.
    pub fn top_left(self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }
}

bitflags::bitflags! {
    /// Edge flags naming which parent edges a control tracks or docks to.
    ///
    /// As an anchor set, single edges translate the control when the parent
    /// resizes and opposite-edge pairs stretch it. As a dock set, `LEFT`/`TOP`
    /// pin the control's position and `RIGHT`/`BOTTOM` derive its size from the
    /// remaining space.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        /// The parent's left edge.
        const LEFT   = 0b0000_0001;
        /// The parent's top edge.
        const TOP    = 0b0000_0010;
        /// The parent's right edge.
        const RIGHT  = 0b0000_0100;
        /// The parent's bottom edge.
        const BOTTOM = 0b0000_1000;
        /// The default anchor: track the left and top edges (no movement).
        const TOP_LEFT = Self::LEFT.bits() | Self::TOP.bits();
    }
}

impl Default for Edges {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}

/// How a control's position is interpreted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlaceMode {
    /// Offset from the screen origin; the parent is ignored.
    #[default]
    Absolute,
    /// Offset from the parent's padded content origin.
    Relative,
    /// Like `Relative`, but docked edges are pinned to the parent's edges.
    Docked,
}

impl PlaceMode {
    /// Parse a case-insensitive mode name.
    ///
    /// Unrecognized names fall back to [`PlaceMode::Absolute`]; malformed
    /// layout data degrades to plain screen-space placement rather than
    /// failing.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("relative") {
            Self::Relative
        } else if name.eq_ignore_ascii_case("docked") {
            Self::Docked
        } else {
            Self::Absolute
        }
    }
}

/// A control's declared position: mode, nominal offset, and dock data.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// How `offset` is interpreted.
    pub mode: PlaceMode,
    /// Nominal X/Y coordinates in logical units.
    pub offset: Vec2,
    /// Which edges are docked. Only consulted when `mode` is [`PlaceMode::Docked`].
    pub dock: Edges,
    /// Per-edge inset from the docked parent edge, in logical units.
    pub dock_offsets: Margin,
}

impl Default for Placement {
    fn default() -> Self {
        Self::absolute(Vec2::ZERO)
    }
}

impl Placement {
    /// Absolute placement at the given screen offset.
    pub fn absolute(offset: Vec2) -> Self {
        Self {
            mode: PlaceMode::Absolute,
            offset,
            dock: Edges::empty(),
            dock_offsets: Margin::ZERO,
        }
    }

    /// Relative placement at the given offset from the parent content origin.
    pub fn relative(offset: Vec2) -> Self {
        Self {
            mode: PlaceMode::Relative,
            ..Self::absolute(offset)
        }
    }

    /// Docked placement pinning the given edges.
    pub fn docked(dock: Edges, dock_offsets: Margin) -> Self {
        Self {
            mode: PlaceMode::Docked,
            offset: Vec2::ZERO,
            dock,
            dock_offsets,
        }
    }
}

/// The parent size recorded when anchoring was established.
///
/// Anchor math is expressed as deltas against this basis, so it must be frozen
/// at the moment a child is attached (or restored verbatim on
/// deserialization). The explicit `Unset` variant distinguishes "anchoring not
/// yet active" from a parent that legitimately measured zero at attach time;
/// the two need different behavior and a zero-vector sentinel cannot tell
/// them apart.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum AnchorBasis {
    /// No basis recorded yet; all anchor math is skipped.
    #[default]
    Unset,
    /// The parent's resolved size at attach time.
    Established(Size),
}

impl AnchorBasis {
    /// The recorded basis size, or `None` when unset.
    pub fn established(self) -> Option<Size> {
        match self {
            Self::Unset => None,
            Self::Established(size) => Some(size),
        }
    }
}

/// The full per-control geometry input bundle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Layout {
    /// Declared position.
    pub placement: Placement,
    /// Logical (unscaled) size.
    pub size: Size,
    /// Outer spacing between this control and its siblings/parent.
    pub margin: Margin,
    /// Inner spacing this control reserves around its own children.
    pub padding: Margin,
    /// Which parent edges this control tracks on parent resize.
    pub anchor: Edges,
    /// Parent size recorded when anchoring was established.
    pub anchor_basis: AnchorBasis,
}

impl Layout {
    /// Replace the placement with a relative offset, builder style.
    pub fn relative(mut self, offset: Vec2) -> Self {
        self.placement = Placement::relative(offset);
        self
    }

    /// Replace the placement with an absolute offset, builder style.
    pub fn absolute(mut self, offset: Vec2) -> Self {
        self.placement = Placement::absolute(offset);
        self
    }
}

/// A resolved absolute position and size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Absolute top-left corner.
    pub origin: Point,
    /// Absolute (scaled) size.
    pub size: Size,
}

impl Frame {
    /// A frame from an origin and size.
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Whether `point` lies inside this frame, inclusive on all four edges.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.size.height
    }

    /// This frame as a [`Rect`], for clip arithmetic.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// The slice of resolved parent state the layout resolver consumes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ParentFrame {
    /// The parent's resolved frame.
    pub frame: Frame,
    /// The parent's inner padding (logical units).
    pub padding: Margin,
    /// Content shift applied to all children, already in absolute units.
    ///
    /// Scrolling containers use this to move content without touching the
    /// children's declared coordinates.
    pub child_offset: Vec2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_anchor_is_top_left() {
        assert_eq!(Edges::default(), Edges::TOP_LEFT);
        assert_eq!(Layout::default().anchor, Edges::TOP_LEFT);
    }

    #[test]
    fn mode_parse_falls_back_to_absolute() {
        assert_eq!(PlaceMode::from_name("Relative"), PlaceMode::Relative);
        assert_eq!(PlaceMode::from_name("DOCKED"), PlaceMode::Docked);
        assert_eq!(PlaceMode::from_name("absolute"), PlaceMode::Absolute);
        assert_eq!(PlaceMode::from_name("floating"), PlaceMode::Absolute);
        assert_eq!(PlaceMode::from_name(""), PlaceMode::Absolute);
    }

    #[test]
    fn frame_contains_is_inclusive() {
        let f = Frame::new(Point::new(10.0, 10.0), Size::new(20.0, 20.0));
        assert!(f.contains(Point::new(10.0, 10.0)), "top-left corner");
        assert!(f.contains(Point::new(30.0, 30.0)), "bottom-right corner");
        assert!(f.contains(Point::new(20.0, 10.0)), "top edge");
        assert!(!f.contains(Point::new(30.1, 20.0)), "past right edge");
        assert!(!f.contains(Point::new(9.9, 20.0)), "before left edge");
    }

    #[test]
    fn anchor_basis_distinguishes_unset_from_zero() {
        assert_eq!(AnchorBasis::Unset.established(), None);
        assert_eq!(
            AnchorBasis::Established(Size::ZERO).established(),
            Some(Size::ZERO)
        );
    }
}
