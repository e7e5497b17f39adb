// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: ownership, z-order, derived geometry.

use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use kurbo::{Point, Size};
use smallvec::SmallVec;

use canopy_layout::{AnchorBasis, Frame, ParentFrame, resolve_origin, resolve_size};

use crate::types::{Control, ControlFlags, ControlId};

/// Scratch capacity for ordered sibling lists; most containers are small.
type Ordered = SmallVec<[ControlId; 8]>;

#[derive(Debug)]
struct Node {
    generation: u32,
    parent: Option<ControlId>,
    children: Vec<ControlId>,
    control: Control,
}

impl Node {
    fn new(generation: u32, control: Control) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            control,
        }
    }
}

/// Owner of the control forest.
///
/// Controls are stored in generational slots; a [`ControlId`] stays valid
/// until its control is removed, after which every accessor answers `None`.
/// The tree also owns the root ordering, the string-id lookup table, and the
/// global UI scale used by geometry resolution.
///
/// Absolute geometry is **derived**: [`ControlTree::frame`] recomputes from
/// the declarative inputs and the ancestor chain on every call, so edits to
/// any ancestor are reflected immediately, with no commit step and no cache
/// to invalidate.
///
/// ## Example
///
/// ```rust
/// use kurbo::{Point, Size};
/// use canopy_layout::Layout;
/// use canopy_tree::{Control, ControlTree};
///
/// let mut tree = ControlTree::new();
/// let root = tree.insert(
///     None,
///     Control::new(Layout {
///         size: Size::new(100.0, 100.0),
///         ..Layout::default()
///     }),
/// );
/// let frame = tree.frame(root).unwrap();
/// assert_eq!(frame.size, Size::new(100.0, 100.0));
/// ```
pub struct ControlTree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    /// insertion-ordered root controls
    roots: Vec<ControlId>,
    /// string id -> control; convention-unique, most recent insertion wins
    by_string_id: HashMap<String, ControlId>,
    scale: f64,
}

impl core::fmt::Debug for ControlTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        f.debug_struct("ControlTree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("roots", &self.roots.len())
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl Default for ControlTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlTree {
    /// Create an empty tree with scale 1.0.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            roots: Vec::new(),
            by_string_id: HashMap::new(),
            scale: 1.0,
        }
    }

    /// The global UI scale factor applied to all logical coordinates.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Set the global UI scale factor. Takes effect on the next geometry
    /// query; nothing is cached.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Insert a new control as a child of `parent` (or as a root if `None`).
    ///
    /// Attaching freezes the control's anchor basis to the parent's currently
    /// resolved size if the basis is still unset, and assigns a `z_depth` one
    /// past its new peers so later additions render on top.
    pub fn insert(&mut self, parent: Option<ControlId>, control: Control) -> ControlId {
        let string_id = control.id.clone();
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, control));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ControlId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, control)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ControlId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = ControlId::new(idx, generation);
        match parent {
            Some(p) if self.is_alive(p) => self.link_parent(id, p),
            _ => self.link_root(id),
        }
        if let Some(s) = string_id {
            self.by_string_id.insert(s, id);
        }
        id
    }

    /// Remove a control and its whole subtree.
    ///
    /// The ids become stale immediately; the parent back-reference of the
    /// removed control is cleared as part of unlinking.
    pub fn remove(&mut self, id: ControlId) {
        if !self.is_alive(id) {
            return;
        }
        match self.node(id).parent {
            Some(parent) => self.unlink_parent(id, parent),
            None => self.roots.retain(|r| *r != id),
        }
        self.remove_subtree(id);
    }

    fn remove_subtree(&mut self, id: ControlId) {
        let children = self.node(id).children.clone();
        for child in children {
            self.remove_subtree(child);
        }
        let string_id = self.node(id).control.id.clone();
        if let Some(s) = string_id
            && self.by_string_id.get(s.as_str()) == Some(&id)
        {
            self.by_string_id.remove(&s);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Remove every child of `id`, in a snapshot of the current order.
    pub fn remove_children(&mut self, id: ControlId) {
        if !self.is_alive(id) {
            return;
        }
        let snapshot = self.node(id).children.clone();
        for child in snapshot {
            self.remove(child);
        }
    }

    /// Move `id` under `new_parent` (or to the roots if `None`).
    ///
    /// Unlink and relink happen in one step, so the control is never in two
    /// child lists. Re-attaching to the current parent is a no-op beyond the
    /// anchor bookkeeping: position in the sibling order and `z_depth` are
    /// kept. The anchor basis is never overwritten once established.
    pub fn reparent(&mut self, id: ControlId, new_parent: Option<ControlId>) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(p) = new_parent
            && !self.is_alive(p)
        {
            return;
        }
        let old_parent = self.node(id).parent;
        if old_parent == new_parent {
            if let Some(p) = new_parent {
                self.freeze_anchor_basis(id, p);
            }
            return;
        }
        match old_parent {
            Some(parent) => self.unlink_parent(id, parent),
            None => self.roots.retain(|r| *r != id),
        }
        match new_parent {
            Some(p) => self.link_parent(id, p),
            None => self.link_root(id),
        }
    }

    /// Returns true if `id` refers to a live control.
    pub fn is_alive(&self, id: ControlId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// The parent of a control, or `None` for roots and stale ids.
    pub fn parent_of(&self, id: ControlId) -> Option<ControlId> {
        if !self.is_alive(id) {
            return None;
        }
        self.node(id).parent
    }

    /// The children of a control in raw insertion order, or an empty slice
    /// for stale ids. This is the order serialization uses; it carries no
    /// z-order artifacts.
    pub fn children_of(&self, id: ControlId) -> &[ControlId] {
        if !self.is_alive(id) {
            return &[];
        }
        &self.node(id).children
    }

    /// The root controls in raw insertion order.
    pub fn roots(&self) -> &[ControlId] {
        &self.roots
    }

    /// Shared access to a control's data, or `None` for stale ids.
    pub fn control(&self, id: ControlId) -> Option<&Control> {
        if !self.is_alive(id) {
            return None;
        }
        Some(&self.node(id).control)
    }

    /// Mutable access to a control's data, or `None` for stale ids.
    pub fn control_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        if !self.is_alive(id) {
            return None;
        }
        Some(&mut self.node_mut(id).control)
    }

    /// Mutable access to a control's widget, or `None` for stale ids.
    pub fn widget_mut(&mut self, id: ControlId) -> Option<&mut (dyn crate::Widget + 'static)> {
        self.control_mut(id).map(|c| c.widget.as_mut())
    }

    /// Look up a control by string id. Ids are unique by convention only; on
    /// collision the most recently inserted control wins.
    pub fn lookup(&self, string_id: &str) -> Option<ControlId> {
        self.by_string_id.get(string_id).copied()
    }

    /// Iterate all live control ids, in slot order.
    pub fn ids(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, n)| {
            n.as_ref().map(|n| {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "ControlId uses 32-bit indices by design."
                )]
                ControlId::new(i as u32, n.generation)
            })
        })
    }

    // --- ordering ---

    /// Children of `id` in draw order: non-`ALWAYS_ON_TOP` ascending by
    /// `z_depth`, then `ALWAYS_ON_TOP` ascending by `z_depth`. The sort is
    /// stable, so equal keys keep insertion order. Picking walks this order
    /// reversed.
    pub fn ordered_children(&self, id: ControlId) -> SmallVec<[ControlId; 8]> {
        self.order(self.children_of(id))
    }

    /// Root controls in draw order; same rules as [`Self::ordered_children`].
    pub fn ordered_roots(&self) -> SmallVec<[ControlId; 8]> {
        self.order(&self.roots)
    }

    fn order(&self, peers: &[ControlId]) -> Ordered {
        let mut out: Ordered = peers.iter().copied().filter(|c| self.is_alive(*c)).collect();
        out.sort_by_key(|c| {
            let control = &self.node(*c).control;
            (
                control.flags.contains(ControlFlags::ALWAYS_ON_TOP),
                control.z_depth,
            )
        });
        out
    }

    /// Raise `id` above all of its current peers.
    ///
    /// Peers are the control's siblings, or all roots for a root control; the
    /// control itself is excluded from the scan. No peers, no change.
    pub fn bring_to_front(&mut self, id: ControlId) {
        let max = self.peer_depths(id).max();
        if let Some(max) = max {
            self.node_mut(id).control.z_depth = max + 1;
        }
    }

    /// Lower `id` below all of its current peers.
    pub fn send_to_back(&mut self, id: ControlId) {
        let min = self.peer_depths(id).min();
        if let Some(min) = min {
            self.node_mut(id).control.z_depth = min - 1;
        }
    }

    fn peer_depths(&self, id: ControlId) -> impl Iterator<Item = i32> + '_ {
        let peers: &[ControlId] = if self.is_alive(id) {
            match self.node(id).parent {
                Some(p) => &self.node(p).children,
                None => &self.roots,
            }
        } else {
            &[]
        };
        peers
            .iter()
            .filter(move |c| **c != id && self.is_alive(**c))
            .map(|c| self.node(*c).control.z_depth)
    }

    // --- derived geometry ---

    /// The absolute frame of a control, derived through the ancestor chain.
    pub fn frame(&self, id: ControlId) -> Option<Frame> {
        if !self.is_alive(id) {
            return None;
        }
        let layout = &self.node(id).control.layout;
        let parent = self
            .node(id)
            .parent
            .and_then(|p| self.content_frame(p));
        Some(Frame::new(
            resolve_origin(layout, parent.as_ref(), self.scale),
            resolve_size(layout, parent.as_ref(), self.scale),
        ))
    }

    /// The absolute top-left corner of a control.
    pub fn origin(&self, id: ControlId) -> Option<Point> {
        self.frame(id).map(|f| f.origin)
    }

    /// The absolute size of a control.
    pub fn size(&self, id: ControlId) -> Option<Size> {
        self.frame(id).map(|f| f.size)
    }

    /// The frame of `id` as seen by its children: resolved frame plus padding
    /// and the child content offset.
    fn content_frame(&self, id: ControlId) -> Option<ParentFrame> {
        let frame = self.frame(id)?;
        let control = &self.node(id).control;
        Some(ParentFrame {
            frame,
            padding: control.layout.padding,
            child_offset: control.child_offset,
        })
    }

    /// Overwrite every control's transient pointer flags from the dispatch
    /// state machine's authoritative state.
    pub fn refresh_pointer_flags(&mut self, hovered: Option<ControlId>, pressed: Option<ControlId>) {
        for (i, slot) in self.nodes.iter_mut().enumerate() {
            if let Some(node) = slot {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "ControlId uses 32-bit indices by design."
                )]
                let id = ControlId::new(i as u32, node.generation);
                node.control.mouse_inside = Some(id) == hovered;
                node.control.mouse_pressed = Some(id) == pressed;
            }
        }
    }

    // --- internals ---

    /// Access a node; panics if `id` is stale.
    fn node(&self, id: ControlId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling ControlId")
    }

    /// Access a node mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: ControlId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling ControlId")
    }

    fn link_parent(&mut self, id: ControlId, parent: ControlId) {
        self.freeze_anchor_basis(id, parent);
        let already_present = self.node(parent).children.contains(&id);
        if !already_present {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "sibling counts are far below i32::MAX"
            )]
            let depth = self.node(parent).children.len() as i32;
            self.node_mut(id).control.z_depth = depth;
            self.node_mut(parent).children.push(id);
        }
        self.node_mut(id).parent = Some(parent);
    }

    fn link_root(&mut self, id: ControlId) {
        if !self.roots.contains(&id) {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "root counts are far below i32::MAX"
            )]
            let depth = self.roots.len() as i32;
            self.node_mut(id).control.z_depth = depth;
            self.roots.push(id);
        }
        self.node_mut(id).parent = None;
    }

    fn unlink_parent(&mut self, id: ControlId, parent: ControlId) {
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }

    /// Record the parent's current resolved size as the child's anchor basis,
    /// once. An established basis is never overwritten.
    fn freeze_anchor_basis(&mut self, id: ControlId, parent: ControlId) {
        if self.node(id).control.layout.anchor_basis != AnchorBasis::Unset {
            return;
        }
        if let Some(parent_size) = self.size(parent) {
            self.node_mut(id).control.layout.anchor_basis = AnchorBasis::Established(parent_size);
        }
    }
}
