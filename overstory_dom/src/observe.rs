// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position observation: report where a node's bounds sit relative to a viewport.
//!
//! Scroll-triggered UI needs to know when an anchor leaves the visible area.
//! [`PositionWatcher`] compares a node's recorded world bounds against a
//! viewport rectangle and reports [`PositionState`] *changes* only, so callers
//! can poll it every frame without deduplicating.

use kurbo::Rect;

use crate::document::Document;
use crate::types::NodeId;

/// Where a node's bounds sit relative to the viewport.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PositionState {
    /// Bounds intersect the viewport.
    Inside,
    /// Entirely above the viewport.
    Above,
    /// Entirely below the viewport.
    Below,
    /// Entirely before (left of) the viewport.
    Before,
    /// Entirely after (right of) the viewport.
    After,
    /// The node is dead or has no recorded bounds.
    Detached,
}

/// Edge-triggered observer of one node's position against a viewport.
#[derive(Clone, Debug)]
pub struct PositionWatcher {
    node: NodeId,
    viewport: Rect,
    last: Option<PositionState>,
}

impl PositionWatcher {
    /// Watch `node` against `viewport`.
    pub fn new(node: NodeId, viewport: Rect) -> Self {
        Self {
            node,
            viewport,
            last: None,
        }
    }

    /// The node being watched.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Replace the viewport, typically in response to scrolling.
    ///
    /// The next [`poll`](Self::poll) reports against the new viewport.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Report the current state if it changed since the last poll.
    ///
    /// The first poll always reports. Vertical separation wins over
    /// horizontal when the bounds clear the viewport on both axes.
    pub fn poll(&mut self, doc: &Document) -> Option<PositionState> {
        let state = match doc.bounds(self.node) {
            None => PositionState::Detached,
            Some(b) => classify(b, self.viewport),
        };
        if self.last == Some(state) {
            return None;
        }
        self.last = Some(state);
        Some(state)
    }
}

fn classify(bounds: Rect, viewport: Rect) -> PositionState {
    if bounds.y1 <= viewport.y0 {
        PositionState::Above
    } else if bounds.y0 >= viewport.y1 {
        PositionState::Below
    } else if bounds.x1 <= viewport.x0 {
        PositionState::Before
    } else if bounds.x0 >= viewport.x1 {
        PositionState::After
    } else {
        PositionState::Inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_bounded_node(bounds: Rect) -> (Document, NodeId) {
        let doc = Document::new();
        let node = doc.create_node(doc.body()).unwrap();
        doc.set_bounds(node, bounds);
        (doc, node)
    }

    #[test]
    fn first_poll_reports_then_edge_triggers() {
        let (doc, node) = doc_with_bounded_node(Rect::new(10.0, 10.0, 20.0, 20.0));
        let mut w = PositionWatcher::new(node, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(w.poll(&doc), Some(PositionState::Inside));
        assert_eq!(w.poll(&doc), None, "unchanged state reports nothing");
        assert_eq!(w.poll(&doc), None);
    }

    #[test]
    fn scrolling_transitions_states() {
        let (doc, node) = doc_with_bounded_node(Rect::new(0.0, 100.0, 50.0, 150.0));
        let mut w = PositionWatcher::new(node, Rect::new(0.0, 0.0, 200.0, 200.0));
        assert_eq!(w.poll(&doc), Some(PositionState::Inside));

        // Scroll down far enough that the node is above the viewport.
        w.set_viewport(Rect::new(0.0, 300.0, 200.0, 500.0));
        assert_eq!(w.poll(&doc), Some(PositionState::Above));
        assert_eq!(w.poll(&doc), None);

        // Scroll back up past it.
        w.set_viewport(Rect::new(0.0, -300.0, 200.0, -100.0));
        assert_eq!(w.poll(&doc), Some(PositionState::Below));
    }

    #[test]
    fn horizontal_separation() {
        let (doc, node) = doc_with_bounded_node(Rect::new(500.0, 0.0, 550.0, 50.0));
        let mut w = PositionWatcher::new(node, Rect::new(0.0, 0.0, 200.0, 200.0));
        assert_eq!(w.poll(&doc), Some(PositionState::After));
        w.set_viewport(Rect::new(600.0, 0.0, 800.0, 200.0));
        assert_eq!(w.poll(&doc), Some(PositionState::Before));
    }

    #[test]
    fn dead_or_unbounded_node_is_detached() {
        let doc = Document::new();
        let node = doc.create_node(doc.body()).unwrap();
        let mut w = PositionWatcher::new(node, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(w.poll(&doc), Some(PositionState::Detached));

        doc.set_bounds(node, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(w.poll(&doc), Some(PositionState::Inside));

        doc.remove_node(node);
        assert_eq!(w.poll(&doc), Some(PositionState::Detached));
    }
}
