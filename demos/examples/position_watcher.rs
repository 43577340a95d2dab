// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position observation for scroll-triggered UI.
//!
//! A watcher reports where an anchor's bounds sit relative to a viewport,
//! but only on changes, so it can be polled every frame.
//!
//! Run:
//! - `cargo run -p overstory_examples --example position_watcher`

use kurbo::Rect;
use overstory_dom::document::Document;
use overstory_dom::observe::PositionWatcher;

fn main() {
    let doc = Document::new();
    let anchor = doc.create_node(doc.body()).unwrap();
    doc.set_bounds(anchor, Rect::new(0.0, 400.0, 100.0, 450.0));

    let mut watcher = PositionWatcher::new(anchor, Rect::new(0.0, 0.0, 800.0, 600.0));

    println!("== Scrolling down in steps of 300 ==");
    for step in 0..4 {
        let y = step as f64 * 300.0;
        watcher.set_viewport(Rect::new(0.0, y, 800.0, y + 600.0));
        match watcher.poll(&doc) {
            Some(state) => println!("  scroll y={y}: {state:?}"),
            None => println!("  scroll y={y}: (unchanged)"),
        }
    }

    doc.remove_node(anchor);
    println!("== Anchor removed ==");
    println!("  {:?}", watcher.poll(&doc));
}
