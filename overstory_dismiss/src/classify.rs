// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure interaction predicates.
//!
//! Total functions with no side effects; the controller composes them into its
//! capture-phase pre-judgment. Each is independently testable.

use overstory_dom::document::Document;
use overstory_dom::event::{Modifiers, PointerButton, PointerEvent};
use overstory_dom::types::NodeId;

/// True only for the primary (typically left) button.
pub fn is_primary_button(event: &PointerEvent) -> bool {
    event.button == PointerButton::Primary
}

/// True if any of meta/alt/ctrl/shift is held.
pub fn has_modifier(event: &PointerEvent) -> bool {
    event.modifiers.intersects(Modifiers::all())
}

/// True if `target` is `region` or a descendant of it.
///
/// False when `region` is unset or stale.
pub fn is_inside(doc: &Document, region: Option<NodeId>, target: NodeId) -> bool {
    match region {
        Some(region) => doc.contains(region, target),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overstory_dom::event::PointerKind;

    #[test]
    fn primary_button_only() {
        let doc = Document::new();
        let n = doc.create_node(doc.body()).unwrap();
        let ev = PointerEvent::new(PointerKind::Click, n);
        assert!(is_primary_button(&ev));
        assert!(!is_primary_button(
            &ev.clone().with_button(PointerButton::Auxiliary)
        ));
        assert!(!is_primary_button(
            &ev.with_button(PointerButton::Secondary)
        ));
    }

    #[test]
    fn any_single_modifier_counts() {
        let doc = Document::new();
        let n = doc.create_node(doc.body()).unwrap();
        let base = PointerEvent::new(PointerKind::Click, n);
        assert!(!has_modifier(&base));
        for m in [
            Modifiers::SHIFT,
            Modifiers::CTRL,
            Modifiers::ALT,
            Modifiers::META,
        ] {
            assert!(has_modifier(&base.clone().with_modifiers(m)), "{m:?}");
        }
        assert!(has_modifier(
            &base.with_modifiers(Modifiers::CTRL | Modifiers::SHIFT)
        ));
    }

    #[test]
    fn inside_is_containment() {
        let doc = Document::new();
        let region = doc.create_node(doc.body()).unwrap();
        let child = doc.create_node(region).unwrap();
        let outside = doc.create_node(doc.body()).unwrap();

        assert!(is_inside(&doc, Some(region), region));
        assert!(is_inside(&doc, Some(region), child));
        assert!(!is_inside(&doc, Some(region), outside));
        assert!(!is_inside(&doc, None, child));

        doc.remove_node(region);
        assert!(!is_inside(&doc, Some(region), outside));
    }
}
