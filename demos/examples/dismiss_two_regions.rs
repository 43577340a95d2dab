// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlapping dismissible overlays.
//!
//! Two controllers share one document's event stream. A click outside both
//! regions fires both callbacks; a click inside one region only dismisses
//! the other overlay.
//!
//! Run:
//! - `cargo run -p overstory_examples --example dismiss_two_regions`

use std::cell::Cell;
use std::rc::Rc;

use overstory_dismiss::controller::attach;
use overstory_dismiss::types::{DismissOptions, RegionRef};
use overstory_dom::document::Document;
use overstory_dom::event::Event;

fn main() {
    let doc = Rc::new(Document::new());
    let tooltip = doc.create_node(doc.body()).unwrap();
    let menu = doc.create_node(doc.body()).unwrap();
    let page = doc.create_node(doc.body()).unwrap();

    let tooltip_closed = Rc::new(Cell::new(0));
    let menu_closed = Rc::new(Cell::new(0));

    let seen = tooltip_closed.clone();
    let _h1 = attach(
        &doc,
        RegionRef::new(tooltip),
        move |_| seen.set(seen.get() + 1),
        DismissOptions::default(),
    );
    let seen = menu_closed.clone();
    let _h2 = attach(
        &doc,
        RegionRef::new(menu),
        move |_| seen.set(seen.get() + 1),
        DismissOptions::default(),
    );

    println!("== Click outside both ==");
    doc.dispatch(Event::click(page));
    println!(
        "  tooltip: {}, menu: {}",
        tooltip_closed.get(),
        menu_closed.get()
    );

    println!("== Click inside the menu ==");
    doc.dispatch(Event::click(menu));
    println!(
        "  tooltip: {}, menu: {}",
        tooltip_closed.get(),
        menu_closed.get()
    );

    assert_eq!((tooltip_closed.get(), menu_closed.get()), (2, 1));
}
