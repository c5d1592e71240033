// Copyright 2023 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! The mouse-to-touch bridge.
//!
//! A [`TouchEmulator`] listens for mouse input on a root element and turns every
//! primary-button down, move and up into `touchstart`, `touchmove` and `touchend`.
//! The element a touch sequence starts on stays its target until the sequence
//! ends, matching how touch hardware reports contacts that wander off their
//! starting element.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::capability::fake_touch_support;
use crate::mouse::{MouseEvent, MouseEventKind};
use crate::target::{CapabilityHost, EventTarget};
use crate::touch::trigger_touch;
use crate::{Config, Error};

/// The state of one emulated touch sequence.
#[derive(Debug)]
pub struct Session<T> {
    target: Option<T>,
}

impl<T> Default for Session<T> {
    fn default() -> Self {
        Session { target: None }
    }
}

impl<T: EventTarget> Session<T> {
    pub fn new() -> Session<T> {
        Session::default()
    }

    /// The element the current sequence started on.
    pub fn target(&self) -> Option<&T> {
        self.target.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// The target `event` should be reported at, capturing a new one when the
    /// sequence starts or its previous target has gone away.
    fn resolve_target(&mut self, event: &MouseEvent<T>) -> Option<T> {
        let stale = match &self.target {
            Some(target) => !target.can_dispatch(),
            None => true,
        };
        if event.kind == MouseEventKind::Down || stale {
            if self.target.is_some() && event.kind != MouseEventKind::Down {
                debug!("session target can no longer receive events, recapturing");
            }
            self.target = Some(event.target.clone());
        }
        self.target.clone().filter(|target| target.can_dispatch())
    }

    fn end(&mut self) {
        self.target = None;
    }
}

/// Feed one mouse event through `session`. Returns `true` if a touch event was
/// dispatched.
fn handle_mouse_event<T: EventTarget>(
    session: &RefCell<Session<T>>,
    event: &MouseEvent<T>,
) -> bool {
    if !event.is_primary() {
        trace!("ignoring {} for {:?}", event.kind.as_str(), event.which());
        return false;
    }

    // The borrow is released before dispatch: touch listeners may feed the
    // emulator again.
    let target = session.borrow_mut().resolve_target(event);
    let kind = event.kind.touch_kind();
    let dispatched = match target {
        Some(target) => match trigger_touch(kind, event, &target) {
            Ok(()) => true,
            Err(e) => {
                warn!("failed to dispatch {}: {}", kind.as_str(), e);
                false
            }
        },
        None => {
            debug!("no target can receive {}, skipping", kind.as_str());
            false
        }
    };

    if event.kind == MouseEventKind::Up {
        session.borrow_mut().end();
    }
    dispatched
}

/// Emulates touch input on a root element using the mouse.
///
/// Each emulator owns its own session, so several roots can be emulated
/// independently.
///
/// Dropping the emulator removes its listeners. Call [`forget`] to keep
/// emulating for the rest of the program instead.
///
/// [`forget`]: TouchEmulator::forget
#[must_use = "dropping the emulator removes its listeners"]
pub struct TouchEmulator<T: EventTarget> {
    root: T,
    config: Config,
    session: Rc<RefCell<Session<T>>>,
    listeners: Vec<(MouseEventKind, T::Listener)>,
}

impl<T: EventTarget> TouchEmulator<T> {
    /// Fake touch support on `hosts` and start translating mouse input on `root`.
    ///
    /// If any listener can not be registered, the ones already added are removed
    /// before the error is returned.
    pub fn install(
        root: T,
        hosts: &[&dyn CapabilityHost],
        config: Config,
    ) -> Result<TouchEmulator<T>, Error> {
        fake_touch_support(hosts, &config.capability_flags);

        let mut emulator = TouchEmulator {
            root,
            config,
            session: Rc::new(RefCell::new(Session::new())),
            listeners: Vec::with_capacity(MouseEventKind::ALL.len()),
        };
        for kind in MouseEventKind::ALL {
            let session = emulator.session.clone();
            let added = emulator.root.add_mouse_listener(
                kind,
                emulator.config.use_capture,
                Box::new(move |event: &MouseEvent<T>| {
                    handle_mouse_event(&session, event);
                }),
            );
            match added {
                Ok(listener) => emulator.listeners.push((kind, listener)),
                Err(e) => {
                    warn!("failed to listen for {}: {}", kind.as_str(), e);
                    if let Err(cleanup) = emulator.remove_listeners() {
                        warn!("failed to roll back listeners: {}", cleanup);
                    }
                    return Err(e);
                }
            }
        }
        debug!("touch emulation installed on {:?}", emulator.root);
        Ok(emulator)
    }

    /// Stop translating mouse input. Capability flags stay defined.
    pub fn uninstall(mut self) -> Result<(), Error> {
        self.remove_listeners()?;
        debug!("touch emulation removed from {:?}", self.root);
        Ok(())
    }

    /// Keep translating mouse input for as long as the root exists, without
    /// holding on to the emulator.
    pub fn forget(self) {
        debug!("touch emulation on {:?} will outlive its handle", self.root);
        std::mem::forget(self);
    }

    fn remove_listeners(&mut self) -> Result<(), Error> {
        let mut result = Ok(());
        for (kind, listener) in self.listeners.drain(..) {
            if let Err(e) = self
                .root
                .remove_mouse_listener(kind, self.config.use_capture, listener)
            {
                result = Err(e);
            }
        }
        result
    }

    /// Translate `event` as if it had arrived through the installed listeners.
    ///
    /// Returns `true` if a touch event was dispatched.
    pub fn handle_mouse(&self, event: &MouseEvent<T>) -> bool {
        handle_mouse_event(&self.session, event)
    }

    /// The element the current touch sequence started on.
    pub fn session_target(&self) -> Option<T> {
        self.session.borrow().target().cloned()
    }

    /// Returns `true` while a touch sequence is in progress.
    pub fn is_touching(&self) -> bool {
        self.session.borrow().is_active()
    }

    pub fn root(&self) -> &T {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<T: EventTarget> Drop for TouchEmulator<T> {
    fn drop(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        if let Err(e) = self.remove_listeners() {
            warn!("failed to remove listeners from {:?}: {}", self.root, e);
        } else {
            debug!("touch emulation dropped from {:?}", self.root);
        }
    }
}
