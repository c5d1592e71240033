// Copyright 2023 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors raised at the boundary with the DOM-like environment.

use std::fmt;

#[cfg(target_arch = "wasm32")]
use crate::backend::web::error as backend;

/// Touch emulator errors.
///
/// [`TargetDetached`] and [`UnknownListener`] are also meant for custom
/// [`EventTarget`] implementations to report the matching conditions.
///
/// [`TargetDetached`]: Error::TargetDetached
/// [`UnknownListener`]: Error::UnknownListener
/// [`EventTarget`]: crate::EventTarget
#[derive(Debug, Clone)]
pub enum Error {
    /// The target is no longer part of a tree and can not receive events.
    ///
    /// The web backend returns this when asked to dispatch at a disconnected node.
    TargetDetached,
    /// Tried to remove a listener that is not registered on the target.
    UnknownListener,
    /// A capability host refused to store a placeholder for `flag`.
    HostRejected { flag: String },
    /// Platform specific error.
    #[cfg(target_arch = "wasm32")]
    Platform(backend::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::TargetDetached => write!(f, "The event target has been detached."),
            Error::UnknownListener => {
                write!(f, "The listener is not registered on this target.")
            }
            Error::HostRejected { flag } => {
                write!(f, "The capability host refused to define '{flag}'.")
            }
            #[cfg(target_arch = "wasm32")]
            Error::Platform(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(target_arch = "wasm32")]
impl From<backend::Error> for Error {
    fn from(src: backend::Error) -> Error {
        Error::Platform(src)
    }
}
