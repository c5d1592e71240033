// Copyright 2023 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Drive touch-only code paths with a mouse.
//!
//! Code that listens only for touch events, or that checks for touch support
//! before enabling gestures, does nothing on a desktop without a touchscreen.
//! [`TouchEmulator`] fixes that by translating primary-button mouse input on a
//! root element into `touchstart`, `touchmove` and `touchend` events, and by
//! defining the `ontouch*` properties that feature detection looks for.
//!
//! The emulator is generic over the host environment: anything implementing
//! [`EventTarget`] and [`CapabilityHost`] can drive it. On `wasm32` the `web`
//! module binds it to the browser DOM:
//!
//! ```ignore
//! let canvas = document.get_element_by_id("canvas").unwrap();
//! // emulate touch until the page goes away
//! touch_emulator::web::init(&canvas)?.forget();
//! ```
//!
//! Dropping a [`TouchEmulator`] removes its listeners again, so keep it around
//! or [`forget`](TouchEmulator::forget) it.
//!
//! Only one touch is emulated; coordinates and modifier keys are the only
//! attributes carried over from the mouse.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub use keyboard_types;
pub use kurbo;

mod backend;
mod capability;
mod config;
mod emulator;
mod error;
mod mouse;
mod target;
mod touch;

#[cfg(feature = "default-logger")]
pub mod logging;

#[cfg(test)]
mod tests;

pub use capability::{fake_touch_support, TOUCH_CAPABILITY_FLAGS};
pub use config::{Config, MULTI_TOUCH_OFFSET};
pub use emulator::{Session, TouchEmulator};
pub use error::Error;
pub use mouse::{MouseButton, MouseButtons, MouseEvent, MouseEventKind, Position};
pub use target::{CapabilityHost, EventTarget, MouseHandler};
pub use touch::{
    synthesize, trigger_touch, TouchEvent, TouchEventKind, TouchList, TouchPoint,
    EMULATED_TOUCH_ID,
};

#[cfg(target_arch = "wasm32")]
#[cfg_attr(docsrs, doc(cfg(target_arch = "wasm32")))]
pub use backend::web;
