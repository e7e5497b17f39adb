// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picking: which control is under a screen point.

use kurbo::Point;

use crate::tree::ControlTree;
use crate::types::ControlId;

impl ControlTree {
    /// Find the deepest, topmost visible control containing `point`.
    ///
    /// Roots are tested in draw order reversed (last drawn first). The first
    /// control whose bounds contain the point recurses into its children with
    /// the same rule; a matching descendant wins over its ancestor. Invisible
    /// controls are skipped entirely, children included. Before descending
    /// into a child, the parent widget's
    /// [`crate::Widget::permits_child_hit`] hook may veto the child; this is
    /// how clipping and scrolling containers exclude children whose raw
    /// geometry would otherwise match. `None` means the point is over empty
    /// space, a normal state rather than an error.
    pub fn pick(&self, point: Point) -> Option<ControlId> {
        let roots = self.ordered_roots();
        for root in roots.iter().rev() {
            if let Some(hit) = self.pick_in(*root, point) {
                return Some(hit);
            }
        }
        None
    }

    fn pick_in(&self, id: ControlId, point: Point) -> Option<ControlId> {
        let control = self.control(id)?;
        if !control.visible() {
            return None;
        }
        let frame = self.frame(id)?;
        if !frame.contains(point) {
            return None;
        }
        let children = self.ordered_children(id);
        for child in children.iter().rev() {
            let Some(child_frame) = self.frame(*child) else {
                continue;
            };
            if !control.widget.permits_child_hit(&frame, &child_frame, point) {
                continue;
            }
            if let Some(hit) = self.pick_in(*child, point) {
                return Some(hit);
            }
        }
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Control, ControlFlags};
    use crate::widget::Widget;
    use alloc::boxed::Box;
    use canopy_layout::{Frame, Layout};
    use kurbo::{Size, Vec2};

    fn control_at(x: f64, y: f64, w: f64, h: f64) -> Control {
        Control::new(
            Layout {
                size: Size::new(w, h),
                ..Layout::default()
            }
            .relative(Vec2::new(x, y)),
        )
    }

    #[test]
    fn deepest_visible_child_wins() {
        let mut tree = ControlTree::new();
        let panel = tree.insert(None, control_at(0.0, 0.0, 200.0, 200.0));
        let child = tree.insert(Some(panel), control_at(40.0, 40.0, 120.0, 120.0));
        let grandchild = tree.insert(Some(child), control_at(40.0, 40.0, 40.0, 40.0));

        // Point inside all three: the deepest match wins, never the ancestor.
        assert_eq!(tree.pick(Point::new(100.0, 100.0)), Some(grandchild));
        // Inside panel and child only.
        assert_eq!(tree.pick(Point::new(60.0, 60.0)), Some(child));
        // Inside panel only.
        assert_eq!(tree.pick(Point::new(10.0, 10.0)), Some(panel));
    }

    #[test]
    fn empty_space_is_none() {
        let mut tree = ControlTree::new();
        tree.insert(None, control_at(0.0, 0.0, 50.0, 50.0));
        assert_eq!(tree.pick(Point::new(200.0, 200.0)), None);
    }

    #[test]
    fn invisible_subtree_is_skipped() {
        let mut tree = ControlTree::new();
        let panel = tree.insert(None, control_at(0.0, 0.0, 200.0, 200.0));
        let hidden = tree.insert(Some(panel), control_at(0.0, 0.0, 200.0, 200.0));
        let inner = tree.insert(Some(hidden), control_at(0.0, 0.0, 200.0, 200.0));

        tree.control_mut(hidden)
            .unwrap()
            .flags
            .remove(ControlFlags::VISIBLE);

        // Neither the hidden control nor its (individually visible) child is
        // tested; the hit falls through to the panel.
        assert_eq!(tree.pick(Point::new(100.0, 100.0)), Some(panel));
        assert!(tree.control(inner).unwrap().visible());
    }

    #[test]
    fn higher_z_root_wins_overlap() {
        let mut tree = ControlTree::new();
        // Two overlapping roots; insertion order gives them z 0 and 1.
        let below = tree.insert(None, control_at(0.0, 0.0, 100.0, 100.0));
        let above = tree.insert(None, control_at(50.0, 0.0, 100.0, 100.0));

        assert_eq!(tree.control(below).unwrap().z_depth, 0);
        assert_eq!(tree.control(above).unwrap().z_depth, 1);
        assert_eq!(tree.pick(Point::new(75.0, 50.0)), Some(above));
        // Outside the overlap the lower control is still reachable.
        assert_eq!(tree.pick(Point::new(25.0, 50.0)), Some(below));
    }

    #[test]
    fn always_on_top_sibling_is_picked_first() {
        let mut tree = ControlTree::new();
        let panel = tree.insert(None, control_at(0.0, 0.0, 200.0, 200.0));
        let pinned = tree.insert(Some(panel), control_at(20.0, 20.0, 100.0, 100.0));
        let later = tree.insert(Some(panel), control_at(20.0, 20.0, 100.0, 100.0));

        // `later` has the higher z_depth, but the on-top bucket outranks it.
        tree.control_mut(pinned)
            .unwrap()
            .flags
            .insert(ControlFlags::ALWAYS_ON_TOP);
        assert!(tree.control(later).unwrap().z_depth > tree.control(pinned).unwrap().z_depth);
        assert_eq!(tree.pick(Point::new(50.0, 50.0)), Some(pinned));
    }

    #[test]
    fn bring_to_front_affects_picking() {
        let mut tree = ControlTree::new();
        let a = tree.insert(None, control_at(0.0, 0.0, 100.0, 100.0));
        let b = tree.insert(None, control_at(0.0, 0.0, 100.0, 100.0));

        assert_eq!(tree.pick(Point::new(50.0, 50.0)), Some(b));
        tree.bring_to_front(a);
        assert_eq!(tree.pick(Point::new(50.0, 50.0)), Some(a));
    }

    /// A container whose content viewport stops short of a 20px strip at the
    /// bottom (say, a scrollbar); children are not hittable inside the strip
    /// even when their raw geometry covers it.
    struct Viewport;

    impl Widget for Viewport {
        fn permits_child_hit(&self, own: &Frame, _child: &Frame, point: Point) -> bool {
            point.y <= own.origin.y + own.size.height - 20.0
        }
    }

    #[test]
    fn parent_veto_excludes_child_outside_the_viewport() {
        let mut tree = ControlTree::new();
        let viewport = tree.insert(
            None,
            Control::with_widget(
                Layout {
                    size: Size::new(100.0, 100.0),
                    ..Layout::default()
                },
                Box::new(Viewport),
            ),
        );
        // Child covers the whole container, strip included.
        let child = tree.insert(Some(viewport), control_at(0.0, 0.0, 100.0, 100.0));

        // Inside the content viewport the child is hit normally.
        assert_eq!(tree.pick(Point::new(50.0, 50.0)), Some(child));
        // In the strip the child's raw geometry contains the point, but the
        // veto excludes it and the hit falls back to the container.
        assert_eq!(tree.pick(Point::new(50.0, 90.0)), Some(viewport));
    }

    /// A parent that vetoes every child hit.
    struct OpaqueToChildren;

    impl Widget for OpaqueToChildren {
        fn permits_child_hit(&self, _own: &Frame, _child: &Frame, _point: Point) -> bool {
            false
        }
    }

    #[test]
    fn veto_falls_back_to_the_parent_itself() {
        let mut tree = ControlTree::new();
        let parent = tree.insert(
            None,
            Control::with_widget(
                Layout {
                    size: Size::new(100.0, 100.0),
                    ..Layout::default()
                },
                Box::new(OpaqueToChildren),
            ),
        );
        let _child = tree.insert(Some(parent), control_at(0.0, 0.0, 100.0, 100.0));
        assert_eq!(tree.pick(Point::new(50.0, 50.0)), Some(parent));
    }
}
