// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Portal container resolution.
//!
//! Floating content is mounted into a container node that may not exist yet
//! when the widget asks for it. [`ContainerResolver`] expresses that boundary:
//! an implementation invokes the `ready` callback once the container is known,
//! immediately or later. Callers must not assume synchronous resolution.

use crate::document::Document;
use crate::types::NodeId;

/// Resolve a mounting container for floating content.
pub trait ContainerResolver {
    /// Invoke `ready` with the container node once it is known.
    ///
    /// Implementations may call `ready` before returning, later, or never
    /// (when the container cannot be produced).
    fn resolve(&self, doc: &Document, ready: &mut dyn FnMut(NodeId));
}

/// Resolves to the document body immediately. The default container.
#[derive(Copy, Clone, Debug, Default)]
pub struct BodyContainer;

impl ContainerResolver for BodyContainer {
    fn resolve(&self, doc: &Document, ready: &mut dyn FnMut(NodeId)) {
        ready(doc.body());
    }
}

/// Resolves to a fixed node immediately, if it is alive.
///
/// A stale node is reported as a usage warning and `ready` is never invoked.
#[derive(Copy, Clone, Debug)]
pub struct NodeContainer(pub NodeId);

impl ContainerResolver for NodeContainer {
    fn resolve(&self, doc: &Document, ready: &mut dyn FnMut(NodeId)) {
        if doc.is_alive(self.0) {
            ready(self.0);
        } else {
            log::warn!("portal container {:?} is stale; content will not mount", self.0);
        }
    }
}
