// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_dismiss --heading-base-level=0

//! Overstory Dismiss: outside-interaction dismissal for floating UI.
//!
//! ## Overview
//!
//! Every dismissible overlay — a tooltip with click-to-dismiss, a popover, a
//! menu — needs the same decision made for every user interaction: should
//! this close the element? This crate is that decision, packaged as a
//! controller any host widget can attach to a document:
//!
//! - [`controller::attach`] installs the listener set and returns a
//!   [`DetachHandle`](types::DetachHandle) that releases exactly what was
//!   installed.
//! - [`classify`] holds the pure predicates the decision is made from.
//! - [`replay`] and [`touch`] are the platform workaround layer: synthetic
//!   redelivery suppression and the touch click-reliability shim.
//!
//! ## Decision rules
//!
//! A trigger-event interaction dismisses unless the tracked region is unset,
//! a modifier key is held, the button is not primary, or the target lies
//! inside the tracked region. The inside/outside judgment is made during the
//! event's capture phase — before inner handlers can unmount or move the
//! region — and consumed during its bubble phase. Escape on `keyup` dismisses
//! unconditionally.
//!
//! A region handle that never resolves to a live node is not an error: every
//! click then counts as outside and dismissal fires for each one. Hosts that
//! need to notice this misuse get a `log` warning at attach time.
//!
//! ### Minimal usage
//!
//! ```
//! use overstory_dismiss::controller::attach;
//! use overstory_dismiss::types::{DismissOptions, RegionRef};
//! use overstory_dom::document::Document;
//! use overstory_dom::event::Event;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let doc = Rc::new(Document::new());
//! let popover = doc.create_node(doc.body()).unwrap();
//! let elsewhere = doc.create_node(doc.body()).unwrap();
//!
//! let dismissed = Rc::new(Cell::new(false));
//! let seen = dismissed.clone();
//! let handle = attach(
//!     &doc,
//!     RegionRef::new(popover),
//!     move |_cause| seen.set(true),
//!     DismissOptions::default(),
//! );
//!
//! doc.dispatch(Event::click(popover));
//! assert!(!dismissed.get());
//!
//! doc.dispatch(Event::click(elsewhere));
//! assert!(dismissed.get());
//!
//! handle.release();
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod classify;
pub mod controller;
pub mod replay;
pub mod touch;
pub mod types;
