// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw traversal: children-first z order with scissor-clipped containers.

use canopy_surface::Renderer;

use crate::tree::ControlTree;
use crate::types::{ControlFlags, ControlId};

impl ControlTree {
    /// Draw the whole forest in draw order.
    ///
    /// Each control draws before its children; siblings follow the ordering
    /// rules of [`ControlTree::ordered_children`], so higher `z_depth` and
    /// `ALWAYS_ON_TOP` controls paint later (on top). A `CLIP_CHILDREN`
    /// control brackets its children with the renderer's scissor stack so
    /// they cannot paint outside its frame.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for root in self.ordered_roots() {
            self.draw_control(root, renderer);
        }
    }

    fn draw_control(&self, id: ControlId, renderer: &mut dyn Renderer) {
        let Some(control) = self.control(id) else {
            return;
        };
        if !control.visible() {
            return;
        }
        let Some(frame) = self.frame(id) else {
            return;
        };
        control.widget.draw(renderer, &frame);

        let clip = control.flags.contains(ControlFlags::CLIP_CHILDREN);
        if clip {
            renderer.push_scissor(frame.rect());
        }
        for child in self.ordered_children(id) {
            self.draw_control(child, renderer);
        }
        if clip {
            renderer.pop_scissor();
        }
    }
}
