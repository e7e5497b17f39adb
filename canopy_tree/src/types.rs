// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the control tree: identifiers, flags, and node data.

use alloc::boxed::Box;
use alloc::string::String;
use kurbo::Vec2;

use canopy_layout::Layout;

use crate::widget::Widget;

/// Identifier for a control in the tree (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ControlId(pub(crate) u32, pub(crate) u32);

impl ControlId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Persistent control state flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ControlFlags: u8 {
        /// Control is drawn and participates in picking. Invisible controls
        /// are skipped entirely, children included.
        const VISIBLE       = 0b0000_0001;
        /// Control is disabled. The tree still picks and hovers disabled
        /// controls; widgets consult this flag to suppress their reactions.
        const DISABLED      = 0b0000_0010;
        /// Control can receive keyboard focus via tab traversal.
        const FOCUSABLE     = 0b0000_0100;
        /// Control expects drag gestures (advisory; drag delivery is keyed to
        /// the pressed control, not this flag).
        const DRAGGABLE     = 0b0000_1000;
        /// Control orders above all non-`ALWAYS_ON_TOP` siblings regardless
        /// of `z_depth`.
        const ALWAYS_ON_TOP = 0b0001_0000;
        /// Children are clipped to this control's frame during drawing.
        const CLIP_CHILDREN = 0b0010_0000;
    }
}

impl Default for ControlFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// A node in the control tree: geometry inputs, state, and the widget.
pub struct Control {
    /// Optional string id, unique by convention (not enforced). Indexed by
    /// [`crate::ControlTree::lookup`]; the most recent insertion wins.
    pub id: Option<String>,
    /// Optional designer-facing name; not indexed.
    pub name: Option<String>,
    /// Declarative geometry inputs.
    pub layout: Layout,
    /// Persistent state flags.
    pub flags: ControlFlags,
    /// Keyboard traversal order among focusable controls.
    pub tab_index: i32,
    /// Ordering key among siblings; assigned on attach, mutable via
    /// bring-to-front/send-to-back.
    pub z_depth: i32,
    /// Content shift applied to all children (scrolling containers).
    pub child_offset: Vec2,
    /// Whether the cursor is over this control. Refreshed from the dispatch
    /// state machine every frame; not persisted.
    pub mouse_inside: bool,
    /// Whether this control is the left button's press target. Refreshed from
    /// the dispatch state machine every frame; not persisted.
    pub mouse_pressed: bool,
    /// The widget behavior attached to this node.
    pub widget: Box<dyn Widget>,
}

impl Control {
    /// A control with the given geometry and an inert widget.
    pub fn new(layout: Layout) -> Self {
        Self::with_widget(layout, Box::new(()))
    }

    /// A control with the given geometry and widget.
    pub fn with_widget(layout: Layout, widget: Box<dyn Widget>) -> Self {
        Self {
            id: None,
            name: None,
            layout,
            flags: ControlFlags::default(),
            tab_index: 0,
            z_depth: 0,
            child_offset: Vec2::ZERO,
            mouse_inside: false,
            mouse_pressed: false,
            widget,
        }
    }

    /// Set the string id, builder style.
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(String::from(id));
        self
    }

    /// Set flags, builder style.
    pub fn with_flags(mut self, flags: ControlFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Whether the control is visible.
    pub fn visible(&self) -> bool {
        self.flags.contains(ControlFlags::VISIBLE)
    }
}

impl Default for Control {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

impl core::fmt::Debug for Control {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Control")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("layout", &self.layout)
            .field("flags", &self.flags)
            .field("tab_index", &self.tab_index)
            .field("z_depth", &self.z_depth)
            .field("child_offset", &self.child_offset)
            .field("mouse_inside", &self.mouse_inside)
            .field("mouse_pressed", &self.mouse_pressed)
            .finish_non_exhaustive()
    }
}
