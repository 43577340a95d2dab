// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch click-reliability shim.
//!
//! Some mobile browsers only dispatch click events reliably on elements that
//! have at least one move-class listener registered somewhere in the ancestor
//! chain. The shim's only job is presence: install a no-op `MouseMove`
//! listener on every immediate child of the body, and hand the ids back so the
//! caller releases them in the same teardown pass as the primary listeners.
//! A retained shim listener after teardown is a leak.

use alloc::vec::Vec;

use overstory_dom::document::{Document, ListenTarget};
use overstory_dom::event::{EventKind, Phase, PointerKind};
use overstory_dom::types::ListenerId;

/// Install the shim when `doc` reports touch capability.
///
/// Returns the installed listener ids; empty on non-touch documents.
pub fn install(doc: &Document) -> Vec<ListenerId> {
    if !doc.touch_capable() {
        return Vec::new();
    }
    doc.children_of(doc.body())
        .into_iter()
        .map(|child| {
            doc.add_listener(
                ListenTarget::Node(child),
                EventKind::Pointer(PointerKind::MouseMove),
                Phase::Bubble,
                |_, _| {},
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use overstory_dom::event::Event;

    #[test]
    fn installs_one_listener_per_body_child() {
        let doc = Document::new();
        let _a = doc.create_node(doc.body()).unwrap();
        let b = doc.create_node(doc.body()).unwrap();
        let _grandchild = doc.create_node(b).unwrap();
        doc.set_touch_capable(true);

        let ids = install(&doc);
        assert_eq!(ids.len(), 2, "immediate children only");
        assert_eq!(doc.listener_count(), 2);

        for id in ids {
            doc.remove_listener(id);
        }
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn non_touch_document_gets_nothing() {
        let doc = Document::new();
        let _a = doc.create_node(doc.body()).unwrap();
        assert!(install(&doc).is_empty());
        assert_eq!(doc.listener_count(), 0);
    }

    #[test]
    fn shim_listeners_do_nothing_on_delivery() {
        let doc = Document::new();
        let a = doc.create_node(doc.body()).unwrap();
        doc.set_touch_capable(true);
        let _ids = install(&doc);

        // Deliver a move through the shim; presence, not behavior.
        doc.dispatch(Event::Pointer(
            overstory_dom::event::PointerEvent::new(PointerKind::MouseMove, a),
        ));
    }
}
