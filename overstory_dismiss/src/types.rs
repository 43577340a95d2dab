// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the dismissal controller: region handles, options, and teardown.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use overstory_dom::document::Document;
use overstory_dom::event::PointerKind;
use overstory_dom::types::{ListenerId, NodeId};

/// Late-bound handle to the node a dismissible widget treats as "inside".
///
/// The host widget owns the value and updates it as its content mounts,
/// remounts, or unmounts; the controller only reads it at event time. Clones
/// share the same cell.
///
/// An unset handle (`None`) means "not mounted yet"; interactions are then
/// treated as inside, so a widget that has not rendered cannot be dismissed
/// by a stray click. A handle holding a stale [`NodeId`] is the opposite:
/// containment answers "outside" for every interaction.
#[derive(Clone, Debug, Default)]
pub struct RegionRef(Rc<Cell<Option<NodeId>>>);

impl RegionRef {
    /// A handle with no node yet.
    pub fn unset() -> Self {
        Self::default()
    }

    /// A handle already pointing at `node`.
    pub fn new(node: NodeId) -> Self {
        let r = Self::default();
        r.set(node);
        r
    }

    /// Point the handle at `node`.
    pub fn set(&self, node: NodeId) {
        self.0.set(Some(node));
    }

    /// Clear the handle back to unset.
    pub fn clear(&self) {
        self.0.set(None);
    }

    /// The current node, if any. Read at event time, never cached.
    pub fn get(&self) -> Option<NodeId> {
        self.0.get()
    }
}

/// Configuration for [`attach`](crate::controller::attach).
#[derive(Copy, Clone, Debug)]
pub struct DismissOptions {
    /// When true, attach installs nothing and returns an inert handle.
    pub disabled: bool,
    /// Which pointer event counts as the dismiss trigger.
    ///
    /// Escape key dismissal is always installed regardless of this setting.
    pub trigger: PointerKind,
}

impl Default for DismissOptions {
    fn default() -> Self {
        Self {
            disabled: false,
            trigger: PointerKind::Click,
        }
    }
}

/// Owns the exact listener set one [`attach`](crate::controller::attach)
/// installed.
///
/// [`release`](Self::release) is idempotent, and dropping the handle also
/// releases. A handle that outlives its document releases nothing.
#[derive(Debug)]
pub struct DetachHandle {
    doc: Weak<Document>,
    listeners: RefCell<Vec<ListenerId>>,
}

impl DetachHandle {
    pub(crate) fn new(doc: Weak<Document>, listeners: Vec<ListenerId>) -> Self {
        Self {
            doc,
            listeners: RefCell::new(listeners),
        }
    }

    /// A handle that owns nothing. Returned when `disabled` is set.
    pub(crate) fn inert() -> Self {
        Self {
            doc: Weak::new(),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Remove every listener this handle installed.
    ///
    /// Calling again, or after the document is gone, is a no-op.
    pub fn release(&self) {
        let listeners = core::mem::take(&mut *self.listeners.borrow_mut());
        let Some(doc) = self.doc.upgrade() else {
            return;
        };
        for id in listeners {
            doc.remove_listener(id);
        }
    }
}

impl Drop for DetachHandle {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_ref_clones_share_the_cell() {
        let doc = Document::new();
        let node = doc.create_node(doc.body()).unwrap();

        let a = RegionRef::unset();
        let b = a.clone();
        assert_eq!(b.get(), None);
        a.set(node);
        assert_eq!(b.get(), Some(node));
        b.clear();
        assert_eq!(a.get(), None);
    }

    #[test]
    fn options_default_to_enabled_click() {
        let opts = DismissOptions::default();
        assert!(!opts.disabled);
        assert_eq!(opts.trigger, PointerKind::Click);
    }

    #[test]
    fn inert_handle_release_is_harmless() {
        let h = DetachHandle::inert();
        h.release();
        h.release();
    }
}
