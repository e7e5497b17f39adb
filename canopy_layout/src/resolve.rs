// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout resolver: absolute origin and size from declarative inputs.
//!
//! Both entry points are pure functions of a [`Layout`], the parent's resolved
//! [`ParentFrame`] (if any), and the global UI scale. Nothing is cached; the
//! tree re-resolves on every query so ancestor edits are reflected
//! immediately.

use kurbo::{Point, Size, Vec2};

use crate::types::{Edges, Layout, ParentFrame, PlaceMode};

/// Anchor delta against the recorded basis, in scaled units.
///
/// `None` when no basis has been established; anchor math is skipped entirely
/// in that case and the control behaves as if anchored top-left.
fn anchor_delta(layout: &Layout, parent: &ParentFrame, scale: f64) -> Option<Vec2> {
    let basis = layout.anchor_basis.established()?;
    let current = parent.frame.size;
    Some(Vec2::new(
        scale * current.width - scale * basis.width,
        scale * current.height - scale * basis.height,
    ))
}

/// Resolve a control's absolute top-left corner.
///
/// The placement mode selects the base arithmetic; anchor translation and the
/// parent's child offset are applied on top. A control without a parent always
/// resolves with the `Absolute` arithmetic regardless of its declared mode.
pub fn resolve_origin(layout: &Layout, parent: Option<&ParentFrame>, scale: f64) -> Point {
    let margin = layout.margin;
    let offset = layout.placement.offset;

    let mut origin = match (layout.placement.mode, parent) {
        (PlaceMode::Absolute, _) | (_, None) => Point::new(
            scale * offset.x + scale * margin.left,
            scale * offset.y + scale * margin.top,
        ),
        (PlaceMode::Relative | PlaceMode::Docked, Some(p)) => Point::new(
            p.frame.origin.x + scale * p.padding.left + scale * offset.x + scale * margin.left,
            p.frame.origin.y + scale * p.padding.top + scale * offset.y + scale * margin.top,
        ),
    };

    // Docked edges pin their axis to the parent edge, independent of the
    // nominal offset.
    if layout.placement.mode == PlaceMode::Docked
        && let Some(p) = parent
    {
        let dock = layout.placement.dock;
        let insets = layout.placement.dock_offsets;
        if dock.contains(Edges::LEFT) {
            origin.x = p.frame.origin.x
                + scale * p.padding.left
                + scale * insets.left
                + scale * margin.left;
        }
        if dock.contains(Edges::TOP) {
            origin.y =
                p.frame.origin.y + scale * p.padding.top + scale * insets.top + scale * margin.top;
        }
    }

    if let Some(p) = parent {
        if layout.anchor != Edges::TOP_LEFT
            && let Some(delta) = anchor_delta(layout, p, scale)
        {
            // A single anchored edge translates; opposite pairs stretch in
            // resolve_size instead.
            if layout.anchor.contains(Edges::RIGHT) && !layout.anchor.contains(Edges::LEFT) {
                origin.x += delta.x;
            }
            if layout.anchor.contains(Edges::BOTTOM) && !layout.anchor.contains(Edges::TOP) {
                origin.y += delta.y;
            }
        }
        origin += p.child_offset;
    }

    origin
}

/// Resolve a control's absolute size.
///
/// Starts from the scaled nominal size; docking `RIGHT`/`BOTTOM` replaces the
/// corresponding axis with the remaining parent space, then anchoring both
/// opposite edges stretches by the anchor delta. Dock-derived size is computed
/// first so anchor stretch reads an already scaled base; scale is applied
/// exactly once per term.
pub fn resolve_size(layout: &Layout, parent: Option<&ParentFrame>, scale: f64) -> Size {
    let mut width = scale * layout.size.width;
    let mut height = scale * layout.size.height;

    if layout.placement.mode == PlaceMode::Docked
        && let Some(p) = parent
    {
        let dock = layout.placement.dock;
        let insets = layout.placement.dock_offsets;
        let origin = resolve_origin(layout, parent, scale);
        if dock.contains(Edges::RIGHT) {
            width = (p.frame.size.width - (origin.x - p.frame.origin.x))
                - scale * insets.right
                - scale * p.padding.right
                - scale * layout.margin.right;
        }
        if dock.contains(Edges::BOTTOM) {
            height = (p.frame.size.height - (origin.y - p.frame.origin.y))
                - scale * insets.bottom
                - scale * p.padding.bottom
                - scale * layout.margin.bottom;
        }
    }

    if let Some(p) = parent
        && let Some(delta) = anchor_delta(layout, p, scale)
    {
        if layout.anchor.contains(Edges::LEFT) && layout.anchor.contains(Edges::RIGHT) {
            width += delta.x;
        }
        if layout.anchor.contains(Edges::TOP) && layout.anchor.contains(Edges::BOTTOM) {
            height += delta.y;
        }
    }

    Size::new(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnchorBasis, Frame, Margin, Placement};

    fn parent_at(x: f64, y: f64, w: f64, h: f64) -> ParentFrame {
        ParentFrame {
            frame: Frame::new(Point::new(x, y), Size::new(w, h)),
            padding: Margin::ZERO,
            child_offset: Vec2::ZERO,
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let layout = Layout {
            size: Size::new(100.0, 30.0),
            margin: Margin::all(2.0),
            ..Layout::default()
        }
        .relative(Vec2::new(20.0, 20.0));
        let parent = parent_at(50.0, 50.0, 200.0, 200.0);

        let first = (
            resolve_origin(&layout, Some(&parent), 1.0),
            resolve_size(&layout, Some(&parent), 1.0),
        );
        let second = (
            resolve_origin(&layout, Some(&parent), 1.0),
            resolve_size(&layout, Some(&parent), 1.0),
        );
        assert_eq!(first, second, "resolver must be pure");
    }

    #[test]
    fn relative_child_follows_parent() {
        // Panel at (0,0) 200x200, button child at relative (20,20) 100x30.
        let layout = Layout {
            size: Size::new(100.0, 30.0),
            ..Layout::default()
        }
        .relative(Vec2::new(20.0, 20.0));

        let at_origin = parent_at(0.0, 0.0, 200.0, 200.0);
        assert_eq!(
            resolve_origin(&layout, Some(&at_origin), 1.0),
            Point::new(20.0, 20.0)
        );

        // Moving the panel moves the button by exactly the same amount.
        let moved = parent_at(50.0, 50.0, 200.0, 200.0);
        assert_eq!(
            resolve_origin(&layout, Some(&moved), 1.0),
            Point::new(70.0, 70.0)
        );
        assert_eq!(
            resolve_size(&layout, Some(&moved), 1.0),
            Size::new(100.0, 30.0)
        );
    }

    #[test]
    fn absolute_ignores_parent() {
        let layout = Layout {
            size: Size::new(10.0, 10.0),
            ..Layout::default()
        }
        .absolute(Vec2::new(5.0, 6.0));
        let parent = parent_at(100.0, 100.0, 50.0, 50.0);
        assert_eq!(
            resolve_origin(&layout, Some(&parent), 1.0),
            Point::new(5.0, 6.0)
        );
    }

    #[test]
    fn missing_parent_falls_back_to_absolute_arithmetic() {
        let layout = Layout::default().relative(Vec2::new(30.0, 40.0));
        assert_eq!(resolve_origin(&layout, None, 1.0), Point::new(30.0, 40.0));
    }

    #[test]
    fn right_anchor_translates_by_parent_growth() {
        // Anchored top-right at x=250 under a 300-wide parent; growing the
        // parent to 400 must shift x by exactly the delta, leaving y alone.
        let layout = Layout {
            anchor: Edges::TOP | Edges::RIGHT,
            anchor_basis: AnchorBasis::Established(Size::new(300.0, 200.0)),
            ..Layout::default()
        }
        .relative(Vec2::new(250.0, 80.0));

        let before = parent_at(0.0, 0.0, 300.0, 200.0);
        assert_eq!(
            resolve_origin(&layout, Some(&before), 1.0),
            Point::new(250.0, 80.0)
        );

        let after = parent_at(0.0, 0.0, 400.0, 200.0);
        assert_eq!(
            resolve_origin(&layout, Some(&after), 1.0),
            Point::new(350.0, 80.0)
        );
    }

    #[test]
    fn full_anchor_stretches_without_moving() {
        let layout = Layout {
            size: Size::new(100.0, 50.0),
            anchor: Edges::all(),
            anchor_basis: AnchorBasis::Established(Size::new(300.0, 200.0)),
            ..Layout::default()
        }
        .relative(Vec2::new(10.0, 10.0));

        let grown = parent_at(0.0, 0.0, 340.0, 260.0);
        assert_eq!(
            resolve_origin(&layout, Some(&grown), 1.0),
            Point::new(10.0, 10.0),
            "stretching must not translate"
        );
        assert_eq!(
            resolve_size(&layout, Some(&grown), 1.0),
            Size::new(140.0, 110.0)
        );
    }

    #[test]
    fn unset_basis_skips_anchor_math() {
        let layout = Layout {
            anchor: Edges::TOP | Edges::RIGHT,
            anchor_basis: AnchorBasis::Unset,
            ..Layout::default()
        }
        .relative(Vec2::new(250.0, 80.0));
        let parent = parent_at(0.0, 0.0, 400.0, 200.0);
        assert_eq!(
            resolve_origin(&layout, Some(&parent), 1.0),
            Point::new(250.0, 80.0),
            "no basis, no translation"
        );
    }

    #[test]
    fn zero_basis_is_a_real_basis() {
        // A parent that measured zero at attach time participates in anchor
        // math; only Unset disables it.
        let layout = Layout {
            anchor: Edges::TOP | Edges::RIGHT,
            anchor_basis: AnchorBasis::Established(Size::ZERO),
            ..Layout::default()
        }
        .relative(Vec2::new(0.0, 0.0));
        let parent = parent_at(0.0, 0.0, 120.0, 40.0);
        assert_eq!(
            resolve_origin(&layout, Some(&parent), 1.0),
            Point::new(120.0, 0.0)
        );
    }

    #[test]
    fn dock_right_touches_parent_right_edge() {
        // Zero offsets/margin/padding: resolvedX + resolvedWidth must equal
        // parentX + parentWidth.
        let layout = Layout {
            size: Size::new(100.0, 30.0),
            placement: Placement::docked(Edges::RIGHT, Margin::ZERO),
            ..Layout::default()
        };
        let parent = parent_at(40.0, 10.0, 300.0, 200.0);
        let origin = resolve_origin(&layout, Some(&parent), 1.0);
        let size = resolve_size(&layout, Some(&parent), 1.0);
        assert_eq!(origin.x + size.width, 40.0 + 300.0);
    }

    #[test]
    fn dock_left_pins_x_independent_of_offset() {
        let layout = Layout {
            placement: Placement {
                mode: PlaceMode::Docked,
                offset: Vec2::new(999.0, 5.0),
                dock: Edges::LEFT,
                dock_offsets: Margin::new(4.0, 0.0, 0.0, 0.0),
            },
            ..Layout::default()
        };
        let parent = ParentFrame {
            padding: Margin::all(3.0),
            ..parent_at(10.0, 10.0, 100.0, 100.0)
        };
        let origin = resolve_origin(&layout, Some(&parent), 1.0);
        // X comes from the dock: parent + padding + dock inset; the nominal
        // 999 offset only affects the undocked Y axis.
        assert_eq!(origin.x, 10.0 + 3.0 + 4.0);
        assert_eq!(origin.y, 10.0 + 3.0 + 5.0);
    }

    #[test]
    fn dock_bottom_accounts_for_margin_and_padding() {
        let layout = Layout {
            size: Size::new(50.0, 20.0),
            margin: Margin::new(0.0, 2.0, 0.0, 6.0),
            placement: Placement::docked(
                Edges::TOP | Edges::BOTTOM,
                Margin::new(0.0, 1.0, 0.0, 3.0),
            ),
            ..Layout::default()
        };
        let parent = ParentFrame {
            padding: Margin::all(5.0),
            ..parent_at(0.0, 0.0, 100.0, 100.0)
        };
        let origin = resolve_origin(&layout, Some(&parent), 1.0);
        let size = resolve_size(&layout, Some(&parent), 1.0);
        // Top edge: padding 5 + dock inset 1 + margin 2.
        assert_eq!(origin.y, 8.0);
        // Remaining height minus bottom inset, padding, and margin.
        assert_eq!(size.height, (100.0 - 8.0) - 3.0 - 5.0 - 6.0);
    }

    #[test]
    fn scale_applies_once_per_term() {
        let layout = Layout {
            size: Size::new(100.0, 30.0),
            margin: Margin::new(2.0, 3.0, 0.0, 0.0),
            ..Layout::default()
        }
        .relative(Vec2::new(20.0, 20.0));
        let parent = ParentFrame {
            padding: Margin::all(10.0),
            ..parent_at(50.0, 50.0, 200.0, 200.0)
        };
        let origin = resolve_origin(&layout, Some(&parent), 2.0);
        // Parent origin is already absolute; padding, offset, and margin each
        // scale exactly once.
        assert_eq!(origin, Point::new(50.0 + 20.0 + 40.0 + 4.0, 50.0 + 20.0 + 40.0 + 6.0));
        assert_eq!(
            resolve_size(&layout, Some(&parent), 2.0),
            Size::new(200.0, 60.0)
        );
    }

    #[test]
    fn dock_then_stretch_compose() {
        // Docked RIGHT derives the width first; a LEFT|RIGHT anchor then
        // stretches the derived width by the parent growth delta.
        let layout = Layout {
            size: Size::new(10.0, 10.0),
            placement: Placement::docked(Edges::RIGHT, Margin::ZERO),
            anchor: Edges::LEFT | Edges::RIGHT,
            anchor_basis: AnchorBasis::Established(Size::new(300.0, 200.0)),
            ..Layout::default()
        };
        let parent = parent_at(0.0, 0.0, 320.0, 200.0);
        let size = resolve_size(&layout, Some(&parent), 1.0);
        assert_eq!(size.width, 320.0 + 20.0);
    }

    #[test]
    fn child_offset_applies_last() {
        let layout = Layout::default().relative(Vec2::new(10.0, 10.0));
        let parent = ParentFrame {
            child_offset: Vec2::new(0.0, -35.0),
            ..parent_at(0.0, 0.0, 100.0, 100.0)
        };
        assert_eq!(
            resolve_origin(&layout, Some(&parent), 1.0),
            Point::new(10.0, -25.0)
        );
    }
}
