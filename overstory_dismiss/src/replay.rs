// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay suppression: ignore a second delivery of the same logical event.
//!
//! A host that captures an event and redispatches it synthetically in the same
//! tick would otherwise make a freshly attached controller dismiss on the very
//! interaction that opened it. The guard holds the event that was in flight at
//! attach time and skips exactly one reference-identical redelivery.

use alloc::rc::Rc;
use core::cell::RefCell;

use overstory_dom::event::Event;

/// Single-slot guard over the at-attach in-flight event.
#[derive(Debug, Default)]
pub struct ReplayGuard {
    marker: RefCell<Option<Rc<Event>>>,
}

impl ReplayGuard {
    /// Arm the guard with the event currently being dispatched, if any.
    ///
    /// Arming with `None` (attach happened outside any dispatch) leaves the
    /// guard inert: nothing is ever skipped.
    pub fn arm(marker: Option<Rc<Event>>) -> Self {
        Self {
            marker: RefCell::new(marker),
        }
    }

    /// True exactly once, for a redelivery of the armed event.
    ///
    /// A match clears the marker so subsequent genuine events are processed
    /// normally.
    pub fn should_skip(&self, event: &Rc<Event>) -> bool {
        let mut marker = self.marker.borrow_mut();
        match &*marker {
            Some(armed) if Rc::ptr_eq(armed, event) => {
                *marker = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overstory_dom::document::Document;
    use overstory_dom::event::Event;

    #[test]
    fn skips_the_armed_event_once() {
        let doc = Document::new();
        let x = Rc::new(Event::click(doc.body()));
        let guard = ReplayGuard::arm(Some(x.clone()));

        assert!(guard.should_skip(&x));
        assert!(!guard.should_skip(&x), "marker clears after one skip");

        let y = Rc::new(Event::click(doc.body()));
        assert!(!guard.should_skip(&y));
    }

    #[test]
    fn distinct_event_is_not_skipped() {
        let doc = Document::new();
        let x = Rc::new(Event::click(doc.body()));
        let y = Rc::new(Event::click(doc.body()));
        let guard = ReplayGuard::arm(Some(x));
        assert!(!guard.should_skip(&y), "identity is by reference, not value");
    }

    #[test]
    fn unarmed_guard_is_inert() {
        let doc = Document::new();
        let guard = ReplayGuard::arm(None);
        let x = Rc::new(Event::click(doc.body()));
        assert!(!guard.should_skip(&x));
    }
}
