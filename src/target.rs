// Copyright 2023 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! The interface the emulator needs from its host environment.
//!
//! A browser DOM implements these through `web-sys` (see the web backend), but
//! anything with listeners, dispatch and property bags can drive the emulator.

use std::fmt::Debug;

use crate::mouse::{MouseEvent, MouseEventKind};
use crate::touch::TouchEvent;
use crate::Error;

/// A callback invoked for every native mouse event of one kind.
pub type MouseHandler<T> = Box<dyn FnMut(&MouseEvent<T>)>;

/// A handle to an element that can receive listeners and dispatched events.
///
/// Handles are cheap references: cloning one must refer to the same element.
pub trait EventTarget: Clone + Debug + 'static {
    /// Returned when a listener is added; needed to remove it again.
    type Listener;

    /// Register `handler` for mouse events of `kind` on this element.
    fn add_mouse_listener(
        &self,
        kind: MouseEventKind,
        use_capture: bool,
        handler: MouseHandler<Self>,
    ) -> Result<Self::Listener, Error>;

    /// Remove a listener previously returned by [`add_mouse_listener`].
    ///
    /// [`add_mouse_listener`]: EventTarget::add_mouse_listener
    fn remove_mouse_listener(
        &self,
        kind: MouseEventKind,
        use_capture: bool,
        listener: Self::Listener,
    ) -> Result<(), Error>;

    /// Whether events dispatched at this element will still be delivered.
    fn can_dispatch(&self) -> bool;

    /// Dispatch `event` at this element.
    fn dispatch_touch_event(&self, event: &TouchEvent<Self>) -> Result<(), Error>;
}

/// A global-like object that feature detection inspects for touch support.
pub trait CapabilityHost {
    /// Returns `true` if `name` is present, whatever its value.
    fn has_property(&self, name: &str) -> bool;

    /// Define `name` with an inert placeholder value.
    fn define_placeholder(&self, name: &str) -> Result<(), Error>;
}
