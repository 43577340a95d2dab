// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dismissal controller implementation.
//!
//! ## Overview
//!
//! [`attach`] installs document-level listeners that decide, for each
//! interaction, whether the host's floating element should close. The decision
//! is split across the two delivery phases of the same event:
//!
//! 1. **Capture**: before any inner handler has run, record whether this event
//!    is suppressed — region unset, a modifier held, a non-primary button, or
//!    the target inside the tracked region.
//! 2. **Bubble**: after inner handlers ran, consume the recorded flag and
//!    invoke the dismissal callback if the event was not suppressed.
//!
//! A single bubble-phase listener could not tell inside from outside reliably:
//! an inner handler may unmount or reposition the tracked node in response to
//! the very same click. Pre-judging during capture makes the containment
//! decision deterministic regardless of what downstream handlers do to the
//! tree mid-event.
//!
//! Escape on `keyup` dismisses unconditionally, with no containment test. Both
//! dismissal paths consult a [`ReplayGuard`] armed with the event in flight at
//! attach time, so a synthetic redelivery of the interaction that opened the
//! element does not immediately close it again.
//!
//! ## Coexistence
//!
//! The document-level event stream is shared. Each attached controller owns an
//! independent listener set and an independent suppression flag; multiple
//! controllers legitimately coexist and fire independently for the same
//! physical click.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use overstory_dom::document::{Document, ListenTarget};
use overstory_dom::event::{Event, EventKind, Key, Phase};

use crate::classify::{has_modifier, is_inside, is_primary_button};
use crate::replay::ReplayGuard;
use crate::touch;
use crate::types::{DetachHandle, DismissOptions, RegionRef};

/// Install outside-interaction dismissal for one floating element.
///
/// `region` is read at event time, so content that mounts after attach is
/// picked up without re-attaching. `on_dismiss` is invoked at most once per
/// qualifying interaction, synchronously from within that interaction's
/// delivery, with the originating event as the cause.
///
/// With `options.disabled` set this installs nothing and returns an inert
/// handle. Rebuilding after a dependency change (region identity, callback,
/// trigger) is the host's job: release the old handle and attach again.
///
/// A region handle that is already stale at attach time is reported as a
/// usage warning; the controller still operates, treating every interaction
/// as outside.
pub fn attach(
    doc: &Rc<Document>,
    region: RegionRef,
    on_dismiss: impl FnMut(&Rc<Event>) + 'static,
    options: DismissOptions,
) -> DetachHandle {
    if options.disabled {
        return DetachHandle::inert();
    }
    if let Some(id) = region.get()
        && !doc.is_alive(id)
    {
        log::warn!(
            "dismiss controller attached with stale region {id:?}; every interaction dismisses"
        );
    }

    let suppressed = Rc::new(Cell::new(true));
    let warned_unset = Rc::new(Cell::new(false));
    let replay = Rc::new(ReplayGuard::arm(doc.current_event()));
    let on_dismiss: Rc<RefCell<dyn FnMut(&Rc<Event>)>> = Rc::new(RefCell::new(on_dismiss));

    let trigger = EventKind::Pointer(options.trigger);
    let mut listeners = Vec::with_capacity(3);

    // Capture: pre-judge the event before inner handlers can mutate the tree.
    {
        let region = region.clone();
        let suppressed = suppressed.clone();
        let warned_unset = warned_unset.clone();
        listeners.push(doc.add_listener(
            ListenTarget::Document,
            trigger,
            Phase::Capture,
            move |doc, event| {
                let Some(pointer) = event.as_pointer() else {
                    return;
                };
                let handle = region.get();
                if handle.is_none() && !warned_unset.replace(true) {
                    log::warn!("dismiss region is unset; treating interaction as inside");
                }
                suppressed.set(
                    handle.is_none()
                        || has_modifier(pointer)
                        || !is_primary_button(pointer)
                        || is_inside(doc, handle, pointer.target),
                );
            },
        ));
    }

    // Bubble: consume the flag recorded above for this same event.
    {
        let suppressed = suppressed.clone();
        let replay = replay.clone();
        let on_dismiss = on_dismiss.clone();
        listeners.push(doc.add_listener(
            ListenTarget::Document,
            trigger,
            Phase::Bubble,
            move |_, event| {
                if replay.should_skip(event) {
                    return;
                }
                if !suppressed.get() {
                    (on_dismiss.borrow_mut())(event);
                }
            },
        ));
    }

    // Escape dismisses regardless of the tracked region.
    {
        let replay = replay.clone();
        let on_dismiss = on_dismiss.clone();
        listeners.push(doc.add_listener(
            ListenTarget::Document,
            EventKind::KeyUp,
            Phase::Bubble,
            move |_, event| {
                let Some(key) = event.as_key() else {
                    return;
                };
                if key.key != Key::Escape {
                    return;
                }
                if replay.should_skip(event) {
                    return;
                }
                (on_dismiss.borrow_mut())(event);
            },
        ));
    }

    listeners.extend(touch::install(doc));
    DetachHandle::new(Rc::downgrade(doc), listeners)
}
