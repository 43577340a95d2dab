// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_dom --heading-base-level=0

//! Overstory DOM: a DOM-like document model with synchronous two-phase event dispatch.
//!
//! ## Overview
//!
//! This crate is the platform layer the Overstory floating-UI primitives attach
//! to: a hierarchy of nodes rooted at a permanent body, document- and
//! node-level event listeners with explicit capture/bubble phase registration,
//! and a "currently dispatching event" marker for recognizing synthetic
//! redelivery of the same logical event.
//!
//! - [`Document`](document::Document): node arena (generational ids), listener
//!   table, and dispatch.
//! - [`Event`](event::Event) / [`Phase`](event::Phase): what is delivered and
//!   when.
//! - [`ContainerResolver`](portal::ContainerResolver): resolve a mounting
//!   container for floating content, asynchronously if necessary.
//! - [`PositionWatcher`](observe::PositionWatcher): edge-triggered position
//!   state of a node's bounds against a viewport.
//!
//! ## Dispatch model
//!
//! Delivery is single-threaded and run-to-completion. One dispatch runs
//! document capture listeners, node capture listeners root→target, node bubble
//! listeners target→root, then document bubble listeners; no other event is
//! processed in between. Handlers may freely mutate the document mid-event:
//! removing a listener prevents its not-yet-delivered invocations for the
//! current event, and a node that dies during dispatch receives no further
//! node-phase deliveries.
//!
//! [`Document::dispatch`](document::Document::dispatch) returns the shared
//! event object; [`Document::redispatch`](document::Document::redispatch)
//! delivers the *same* object again, distinguishable by reference identity.
//! This mirrors host frameworks that capture an event and redispatch it
//! synthetically in the same tick.
//!
//! ## Not a layout engine
//!
//! This crate does not perform layout or positioning. Upstream code computes
//! world-space bounds with whatever placement system you choose and records
//! them via [`Document::set_bounds`](document::Document::set_bounds); the
//! position watcher only reads them back.
//!
//! ### Minimal usage
//!
//! ```
//! use overstory_dom::document::{Document, ListenTarget};
//! use overstory_dom::event::{Event, EventKind, Phase, PointerKind};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let doc = Document::new();
//! let panel = doc.create_node(doc.body()).unwrap();
//!
//! let clicks = Rc::new(Cell::new(0));
//! let seen = clicks.clone();
//! doc.add_listener(
//!     ListenTarget::Node(panel),
//!     EventKind::Pointer(PointerKind::Click),
//!     Phase::Bubble,
//!     move |_, _| seen.set(seen.get() + 1),
//! );
//!
//! doc.dispatch(Event::click(panel));
//! assert_eq!(clicks.get(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod document;
pub mod event;
pub mod observe;
pub mod portal;
pub mod types;
