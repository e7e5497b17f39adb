// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab-order focus traversal.

use alloc::vec::Vec;

use canopy_surface::EventSink;
use canopy_tree::{ControlFlags, ControlId, ControlTree};

use crate::dispatcher::Dispatcher;

impl Dispatcher {
    /// Move focus to the next control in tab order, wrapping at the end.
    ///
    /// Candidates are the live controls flagged `FOCUSABLE` and not
    /// `DISABLED`, ordered by `tab_index` (ties keep tree slot order). With
    /// no current focus, the first candidate is chosen. Does nothing when no
    /// control is focusable.
    pub fn focus_next(
        &mut self,
        tree: &mut ControlTree,
        sink: &mut dyn EventSink<ControlId>,
    ) {
        self.advance_focus(tree, sink, true);
    }

    /// Move focus to the previous control in tab order, wrapping at the
    /// start.
    pub fn focus_prev(
        &mut self,
        tree: &mut ControlTree,
        sink: &mut dyn EventSink<ControlId>,
    ) {
        self.advance_focus(tree, sink, false);
    }

    fn advance_focus(
        &mut self,
        tree: &mut ControlTree,
        sink: &mut dyn EventSink<ControlId>,
        forward: bool,
    ) {
        let mut order: Vec<(i32, ControlId)> = tree
            .ids()
            .filter_map(|id| {
                let control = tree.control(id)?;
                let eligible = control.flags.contains(ControlFlags::FOCUSABLE)
                    && !control.flags.contains(ControlFlags::DISABLED);
                eligible.then_some((control.tab_index, id))
            })
            .collect();
        if order.is_empty() {
            return;
        }
        order.sort_by_key(|(tab_index, _)| *tab_index);

        let current = self
            .focused()
            .and_then(|f| order.iter().position(|(_, id)| *id == f));
        let target = match (current, forward) {
            (Some(i), true) => order[(i + 1) % order.len()].1,
            (Some(i), false) => order[(i + order.len() - 1) % order.len()].1,
            (None, true) => order[0].1,
            (None, false) => order[order.len() - 1].1,
        };
        self.focus(tree, sink, Some(target));
    }
}
