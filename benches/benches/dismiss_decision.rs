// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use overstory_dismiss::classify::is_inside;
use overstory_dismiss::controller::attach;
use overstory_dismiss::types::{DismissOptions, RegionRef};
use overstory_dom::document::Document;
use overstory_dom::event::Event;
use overstory_dom::types::NodeId;

/// A document with a chain of `depth` nodes under the region and a sibling
/// subtree of the same depth outside it.
fn build_doc(depth: usize) -> (Rc<Document>, NodeId, NodeId, NodeId) {
    let doc = Rc::new(Document::new());
    let region = doc.create_node(doc.body()).unwrap();
    let mut inner = region;
    for _ in 0..depth {
        inner = doc.create_node(inner).unwrap();
    }
    let mut outer = doc.create_node(doc.body()).unwrap();
    for _ in 0..depth {
        outer = doc.create_node(outer).unwrap();
    }
    (doc, region, inner, outer)
}

fn bench_containment(c: &mut Criterion) {
    let mut group = c.benchmark_group("containment");
    for depth in [4_usize, 16, 64] {
        let (doc, region, inner, outer) = build_doc(depth);
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("inside_depth_{depth}"), |b| {
            b.iter(|| black_box(is_inside(&doc, Some(black_box(region)), black_box(inner))));
        });
        group.bench_function(format!("outside_depth_{depth}"), |b| {
            b.iter(|| black_box(is_inside(&doc, Some(black_box(region)), black_box(outer))));
        });
    }
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    for depth in [4_usize, 16, 64] {
        let (doc, _region, _inner, outer) = build_doc(depth);
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("bare_click_depth_{depth}"), |b| {
            b.iter(|| {
                doc.dispatch(black_box(Event::click(outer)));
            });
        });
    }
    group.finish();
}

fn bench_controller_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");
    for depth in [4_usize, 16, 64] {
        let (doc, region, inner, outer) = build_doc(depth);
        let dismissals = Rc::new(Cell::new(0_u64));
        let seen = dismissals.clone();
        let _handle = attach(
            &doc,
            RegionRef::new(region),
            move |_| seen.set(seen.get() + 1),
            DismissOptions::default(),
        );

        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("outside_click_depth_{depth}"), |b| {
            b.iter(|| {
                doc.dispatch(black_box(Event::click(outer)));
            });
        });
        group.bench_function(format!("inside_click_depth_{depth}"), |b| {
            b.iter(|| {
                doc.dispatch(black_box(Event::click(inner)));
            });
        });
        black_box(dismissals.get());
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_containment,
    bench_dispatch,
    bench_controller_path
);
criterion_main!(benches);
