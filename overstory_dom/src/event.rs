// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event model: pointer and key events, modifier flags, and delivery phases.
//!
//! ## Overview
//!
//! Events are plain data. Delivery order and listener bookkeeping live in
//! [`Document`](crate::document::Document); the types here describe what is
//! delivered and during which phase.

use crate::types::NodeId;

bitflags::bitflags! {
    /// Modifier keys held during a pointer event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Control key.
        const CTRL  = 0b0000_0010;
        /// Alt/Option key.
        const ALT   = 0b0000_0100;
        /// Meta/Command key.
        const META  = 0b0000_1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::empty()
    }
}

/// Pointer button associated with a pointer event.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerButton {
    /// Primary button (typically left).
    Primary,
    /// Auxiliary button (typically middle/wheel).
    Auxiliary,
    /// Secondary button (typically right).
    Secondary,
}

/// Kind of pointer event.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerKind {
    /// A completed press-and-release on one node.
    Click,
    /// Button pressed.
    PointerDown,
    /// Button released.
    PointerUp,
    /// Pointer moved.
    MouseMove,
}

/// A pointer event targeting a node.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// The node the event targets.
    pub target: NodeId,
    /// Button that produced the event.
    pub button: PointerButton,
    /// Modifier keys held at event time.
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// A pointer event of the given kind with the primary button and no modifiers.
    pub fn new(kind: PointerKind, target: NodeId) -> Self {
        Self {
            kind,
            target,
            button: PointerButton::Primary,
            modifiers: Modifiers::empty(),
        }
    }

    /// Replace the button.
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Replace the modifier set.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Key identity for key events.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// The Escape key.
    Escape,
    /// The Enter key.
    Enter,
    /// A printable character key.
    Character(char),
}

/// A key release event targeting a node.
#[derive(Clone, Debug)]
pub struct KeyEvent {
    /// Which key was released.
    pub key: Key,
    /// The node the event targets (typically the focused node or the body).
    pub target: NodeId,
}

/// An event delivered through a [`Document`](crate::document::Document).
#[derive(Clone, Debug)]
pub enum Event {
    /// A pointer event.
    Pointer(PointerEvent),
    /// A key release event.
    Key(KeyEvent),
}

impl Event {
    /// A primary-button click with no modifiers.
    pub fn click(target: NodeId) -> Self {
        Self::Pointer(PointerEvent::new(PointerKind::Click, target))
    }

    /// A key release.
    pub fn key_up(key: Key, target: NodeId) -> Self {
        Self::Key(KeyEvent { key, target })
    }

    /// The node this event targets.
    pub fn target(&self) -> NodeId {
        match self {
            Self::Pointer(p) => p.target,
            Self::Key(k) => k.target,
        }
    }

    /// The listener-matching kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Pointer(p) => EventKind::Pointer(p.kind),
            Self::Key(_) => EventKind::KeyUp,
        }
    }

    /// The pointer payload, if this is a pointer event.
    pub fn as_pointer(&self) -> Option<&PointerEvent> {
        match self {
            Self::Pointer(p) => Some(p),
            Self::Key(_) => None,
        }
    }

    /// The key payload, if this is a key event.
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Pointer(_) => None,
            Self::Key(k) => Some(k),
        }
    }
}

/// Listener registration key: which deliveries a listener receives.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventKind {
    /// Pointer events of one [`PointerKind`].
    Pointer(PointerKind),
    /// Key release events.
    KeyUp,
}

/// Phases of event delivery.
///
/// A dispatch runs document capture listeners, then node capture listeners
/// root→target, then node bubble listeners target→root, then document bubble
/// listeners. See [`Document::dispatch`](crate::document::Document::dispatch).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Root-to-target traversal; runs before any target handler.
    Capture,
    /// Target-to-root traversal; runs after target handlers.
    Bubble,
}
