// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document implementation: node arena, listener table, and dispatch.
//!
//! ## Overview
//!
//! A [`Document`] owns a generational arena of nodes rooted at a permanent
//! body node, plus a table of document- and node-level event listeners.
//! [`Document::dispatch`] delivers one event synchronously through the
//! capture and bubble phases and runs every handler to completion before
//! returning.
//!
//! ## Interior mutability
//!
//! All methods take `&self`. Handlers run re-entrantly against the owning
//! document during dispatch and may mutate the tree or the listener table
//! mid-event; the document never holds an internal borrow across a handler
//! invocation. A handler must not redispatch an event that would re-enter
//! the same handler instance.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use kurbo::Rect;

use crate::event::{Event, EventKind, Phase};
use crate::types::{ListenerId, NodeId};

/// What a listener is registered against.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ListenTarget {
    /// The document itself. Document listeners see every dispatch of their
    /// event kind regardless of the target node.
    Document,
    /// A specific node. Node listeners run only when the node lies on the
    /// dispatch path and is still alive when its phase is reached.
    Node(NodeId),
}

type Handler = Rc<RefCell<dyn FnMut(&Document, &Rc<Event>)>>;

struct Listener {
    id: ListenerId,
    target: ListenTarget,
    kind: EventKind,
    phase: Phase,
    handler: Handler,
}

#[derive(Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    bounds: Option<Rect>,
}

impl Node {
    fn new(generation: u32) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            bounds: None,
        }
    }
}

/// A DOM-like document: node tree, listener table, dispatch state.
pub struct Document {
    nodes: RefCell<Vec<Option<Node>>>,
    generations: RefCell<Vec<u32>>, // last generation per slot (persists across frees)
    free_list: RefCell<Vec<usize>>,
    listeners: RefCell<Vec<Listener>>,
    next_listener: Cell<u64>,
    current_event: RefCell<Option<Rc<Event>>>,
    touch_capable: Cell<bool>,
    body: NodeId,
}

impl core::fmt::Debug for Document {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let nodes = self.nodes.borrow();
        let total = nodes.len();
        let alive = nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.borrow().len();
        let listeners = self.listeners.borrow().len();
        f.debug_struct("Document")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .field("listeners", &listeners)
            .field("touch_capable", &self.touch_capable.get())
            .finish_non_exhaustive()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document with a permanent body root.
    pub fn new() -> Self {
        let doc = Self {
            nodes: RefCell::new(Vec::new()),
            generations: RefCell::new(Vec::new()),
            free_list: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
            current_event: RefCell::new(None),
            touch_capable: Cell::new(false),
            body: NodeId::new(0, 1),
        };
        let body = doc.alloc_node();
        debug_assert_eq!(body, doc.body, "body must occupy the first slot");
        doc
    }

    /// The root node. Always alive; cannot be removed or reparented.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Append a new child under `parent`.
    ///
    /// Returns `None` if `parent` is stale.
    pub fn create_node(&self, parent: NodeId) -> Option<NodeId> {
        if !self.is_alive(parent) {
            return None;
        }
        let id = self.alloc_node();
        self.link_parent(id, parent);
        Some(id)
    }

    /// Remove a node and its subtree.
    ///
    /// Stale ids and the body are no-ops. Listeners registered on removed
    /// nodes are dropped. Removal during dispatch prevents any
    /// not-yet-delivered node-phase invocation for the removed subtree.
    pub fn remove_node(&self, id: NodeId) {
        if id == self.body || !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.parent_of(id) {
            self.unlink_parent(id, parent);
        }
        self.remove_subtree(id);
        self.listeners.borrow_mut().retain(|l| match l.target {
            ListenTarget::Node(n) => self.is_alive(n),
            ListenTarget::Document => true,
        });
    }

    /// Move a subtree under `new_parent`.
    ///
    /// Stale ids and the body are no-ops, as is reparenting a node under
    /// its own descendant.
    pub fn reparent(&self, id: NodeId, new_parent: NodeId) {
        if id == self.body || !self.is_alive(id) || !self.is_alive(new_parent) {
            return;
        }
        if self.contains(id, new_parent) {
            return;
        }
        if let Some(parent) = self.parent_of(id) {
            self.unlink_parent(id, parent);
        }
        self.link_parent(id, new_parent);
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is live if its slot exists and its generation matches the
    /// current generation stored in that slot. See [`NodeId`] docs for the
    /// generational semantics.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .borrow()
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// The parent of `id`, or `None` for the body or a stale id.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        if !self.is_alive(id) {
            return None;
        }
        self.nodes.borrow()[id.idx()].as_ref().and_then(|n| n.parent)
    }

    /// The children of `id`, in insertion order. Empty for stale ids.
    pub fn children_of(&self, id: NodeId) -> Vec<NodeId> {
        if !self.is_alive(id) {
            return Vec::new();
        }
        self.nodes.borrow()[id.idx()]
            .as_ref()
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// Ancestor containment: true if `node` is `ancestor` or a descendant of it.
    ///
    /// False whenever either id is stale.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        if !self.is_alive(ancestor) || !self.is_alive(node) {
            return false;
        }
        let mut cur = node;
        loop {
            if cur == ancestor {
                return true;
            }
            match self.parent_of(cur) {
                Some(p) => cur = p,
                None => return false,
            }
        }
    }

    /// Record world-space bounds for a node. Stale ids are no-ops.
    pub fn set_bounds(&self, id: NodeId, bounds: Rect) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(n) = self.nodes.borrow_mut()[id.idx()].as_mut() {
            n.bounds = Some(bounds);
        }
    }

    /// The recorded bounds of a node, if it is alive and has any.
    pub fn bounds(&self, id: NodeId) -> Option<Rect> {
        if !self.is_alive(id) {
            return None;
        }
        self.nodes.borrow()[id.idx()].as_ref().and_then(|n| n.bounds)
    }

    // --- listeners ---

    /// Register a listener for `kind` events during `phase`.
    pub fn add_listener(
        &self,
        target: ListenTarget,
        kind: EventKind,
        phase: Phase,
        handler: impl FnMut(&Document, &Rc<Event>) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().push(Listener {
            id,
            target,
            kind,
            phase,
            handler: Rc::new(RefCell::new(handler)),
        });
        id
    }

    /// Remove a listener. Idempotent; unknown ids are no-ops.
    ///
    /// Removing during dispatch prevents any not-yet-delivered invocation of
    /// that listener for the current event.
    pub fn remove_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|l| l.id != id);
    }

    /// Number of registered listeners. A diagnostic accessor.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    // --- dispatch ---

    /// Deliver an event synchronously through both phases.
    ///
    /// Order: document capture listeners in registration order, node capture
    /// listeners root→target, node bubble listeners target→root, document
    /// bubble listeners. Node listeners are skipped if their node died
    /// earlier in the same dispatch. If the target is stale at dispatch time
    /// only the document phases run.
    ///
    /// Returns the shared event object so callers can [`redispatch`] the same
    /// logical event.
    ///
    /// [`redispatch`]: Document::redispatch
    pub fn dispatch(&self, event: Event) -> Rc<Event> {
        let event = Rc::new(event);
        self.redispatch(&event);
        event
    }

    /// Deliver the same event object again.
    ///
    /// Listeners can distinguish a redispatch from a fresh event only by
    /// reference identity (`Rc::ptr_eq`).
    pub fn redispatch(&self, event: &Rc<Event>) {
        let prev = self.current_event.replace(Some(event.clone()));
        self.deliver(event);
        *self.current_event.borrow_mut() = prev;
    }

    /// The event currently being dispatched, if any.
    ///
    /// `Some` exactly for the duration of a dispatch; save/restored across
    /// re-entrant dispatches.
    pub fn current_event(&self) -> Option<Rc<Event>> {
        self.current_event.borrow().clone()
    }

    /// Set whether this document reports touch capability.
    pub fn set_touch_capable(&self, capable: bool) {
        self.touch_capable.set(capable);
    }

    /// Whether this document reports touch capability.
    pub fn touch_capable(&self) -> bool {
        self.touch_capable.get()
    }

    // --- internals ---

    fn deliver(&self, event: &Rc<Event>) {
        let kind = event.kind();
        let target = event.target();
        self.run_document_phase(kind, Phase::Capture, event);
        let path = self.path_from_root(target);
        for &node in &path {
            self.run_node_phase(node, kind, Phase::Capture, event);
        }
        for &node in path.iter().rev() {
            self.run_node_phase(node, kind, Phase::Bubble, event);
        }
        self.run_document_phase(kind, Phase::Bubble, event);
    }

    fn run_document_phase(&self, kind: EventKind, phase: Phase, event: &Rc<Event>) {
        let matching = self.snapshot(ListenTarget::Document, kind, phase);
        for (id, handler) in matching {
            if !self.has_listener(id) {
                continue;
            }
            (handler.borrow_mut())(self, event);
        }
    }

    fn run_node_phase(&self, node: NodeId, kind: EventKind, phase: Phase, event: &Rc<Event>) {
        if !self.is_alive(node) {
            return;
        }
        let matching = self.snapshot(ListenTarget::Node(node), kind, phase);
        for (id, handler) in matching {
            if !self.has_listener(id) || !self.is_alive(node) {
                continue;
            }
            (handler.borrow_mut())(self, event);
        }
    }

    /// Collect handler clones up front so no table borrow is held while a
    /// handler runs.
    fn snapshot(
        &self,
        target: ListenTarget,
        kind: EventKind,
        phase: Phase,
    ) -> Vec<(ListenerId, Handler)> {
        self.listeners
            .borrow()
            .iter()
            .filter(|l| l.target == target && l.kind == kind && l.phase == phase)
            .map(|l| (l.id, l.handler.clone()))
            .collect()
    }

    fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.borrow().iter().any(|l| l.id == id)
    }

    fn path_from_root(&self, target: NodeId) -> Vec<NodeId> {
        if !self.is_alive(target) {
            return Vec::new();
        }
        let mut out = Vec::new();
        let mut cur = target;
        loop {
            out.push(cur);
            match self.parent_of(cur) {
                Some(p) => cur = p,
                None => break,
            }
        }
        out.reverse();
        out
    }

    fn alloc_node(&self) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let mut generations = self.generations.borrow_mut();
        let (idx, generation) = if let Some(idx) = self.free_list.borrow_mut().pop() {
            let generation = generations[idx].saturating_add(1);
            generations[idx] = generation;
            nodes[idx] = Some(Node::new(generation));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            nodes.push(Some(Node::new(generation)));
            generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((nodes.len() - 1) as u32, generation)
        };
        NodeId::new(idx, generation)
    }

    fn remove_subtree(&self, id: NodeId) {
        let children = self.children_of(id);
        for child in children {
            self.remove_subtree(child);
        }
        self.nodes.borrow_mut()[id.idx()] = None;
        self.free_list.borrow_mut().push(id.idx());
    }

    fn link_parent(&self, id: NodeId, parent: NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[parent.idx()]
            .as_mut()
            .expect("dangling parent NodeId")
            .children
            .push(id);
        nodes[id.idx()].as_mut().expect("dangling NodeId").parent = Some(parent);
    }

    fn unlink_parent(&self, id: NodeId, parent: NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[parent.idx()]
            .as_mut()
            .expect("dangling parent NodeId")
            .children
            .retain(|c| *c != id);
        nodes[id.idx()].as_mut().expect("dangling NodeId").parent = None;
    }
}
