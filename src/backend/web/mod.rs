// Copyright 2023 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Touch emulation for the browser DOM.

pub mod error;
mod host;
mod mouse;
mod target;

use js_sys::Object;

pub use error::Error;
pub use host::WebHost;
pub use target::{WebListener, WebTarget};

use crate::target::CapabilityHost;
use crate::{Config, TouchEmulator};

/// The objects touch feature detection looks at: the window and the document element.
pub fn capability_hosts() -> Result<Vec<WebHost>, Error> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoDocument)?;
    let mut hosts = vec![WebHost::new(Object::from(window))];
    if let Some(root) = document.document_element() {
        hosts.push(WebHost::new(Object::from(root)));
    }
    Ok(hosts)
}

/// Emulate touch input on `target` with the default [`Config`].
///
/// Emulation stops when the returned emulator is dropped. Call
/// [`TouchEmulator::forget`] on it to keep emulating for the life of the page.
pub fn init(target: &web_sys::EventTarget) -> Result<TouchEmulator<WebTarget>, crate::Error> {
    init_with_config(target, Config::default())
}

/// Emulate touch input on `target`, faking touch support on the window and the
/// document element.
pub fn init_with_config(
    target: &web_sys::EventTarget,
    config: Config,
) -> Result<TouchEmulator<WebTarget>, crate::Error> {
    let hosts = capability_hosts()?;
    let hosts: Vec<&dyn CapabilityHost> = hosts.iter().map(|h| h as &dyn CapabilityHost).collect();
    TouchEmulator::install(WebTarget::new(target.clone()), &hosts, config)
}
