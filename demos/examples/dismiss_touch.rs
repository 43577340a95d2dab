// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch click-reliability shim.
//!
//! On a touch-capable document, attaching a controller also installs a no-op
//! move listener on every immediate child of the body; releasing the handle
//! removes the shim together with the primary listeners.
//!
//! Run:
//! - `cargo run -p overstory_examples --example dismiss_touch`

use std::rc::Rc;

use overstory_dismiss::controller::attach;
use overstory_dismiss::types::{DismissOptions, RegionRef};
use overstory_dom::document::Document;
use overstory_dom::event::Event;

fn main() {
    let doc = Rc::new(Document::new());
    doc.set_touch_capable(true);
    let popover = doc.create_node(doc.body()).unwrap();
    let header = doc.create_node(doc.body()).unwrap();
    let footer = doc.create_node(doc.body()).unwrap();
    let _ = (header, footer);

    println!("listeners before attach: {}", doc.listener_count());

    let handle = attach(
        &doc,
        RegionRef::new(popover),
        |cause| println!("  dismissed by {cause:?}"),
        DismissOptions::default(),
    );
    // 3 primary listeners + one shim listener per body child.
    println!("listeners after attach:  {}", doc.listener_count());

    println!("== Outside tap ==");
    doc.dispatch(Event::click(doc.body()));

    handle.release();
    println!("listeners after release: {}", doc.listener_count());
    assert_eq!(doc.listener_count(), 0);
}
