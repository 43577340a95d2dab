// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dismissal basics.
//!
//! A popover opens, clicks inside it are ignored, a click elsewhere closes
//! it, and Escape closes it even when the content never mounted.
//!
//! Run:
//! - `cargo run -p overstory_examples --example dismiss_basics`

use std::cell::Cell;
use std::rc::Rc;

use overstory_dismiss::controller::attach;
use overstory_dismiss::types::{DismissOptions, RegionRef};
use overstory_dom::document::Document;
use overstory_dom::event::{Event, Key};

fn main() {
    let doc = Rc::new(Document::new());
    let popover = doc.create_node(doc.body()).unwrap();
    let button_in_popover = doc.create_node(popover).unwrap();
    let page_content = doc.create_node(doc.body()).unwrap();

    let dismissals = Rc::new(Cell::new(0));
    let seen = dismissals.clone();
    let handle = attach(
        &doc,
        RegionRef::new(popover),
        move |cause| {
            seen.set(seen.get() + 1);
            println!("  dismissed by {cause:?}");
        },
        DismissOptions::default(),
    );

    println!("== Click inside the popover ==");
    doc.dispatch(Event::click(button_in_popover));
    println!("  dismissals: {}", dismissals.get());

    println!("== Click elsewhere on the page ==");
    doc.dispatch(Event::click(page_content));
    println!("  dismissals: {}", dismissals.get());

    println!("== Escape ==");
    doc.dispatch(Event::key_up(Key::Escape, page_content));
    println!("  dismissals: {}", dismissals.get());

    handle.release();
    println!("== After release: clicks are inert ==");
    doc.dispatch(Event::click(page_content));
    println!("  dismissals: {}", dismissals.get());

    assert_eq!(dismissals.get(), 2);
}
