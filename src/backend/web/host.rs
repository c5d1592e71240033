// Copyright 2023 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;

use super::error::Error as WebError;
use crate::target::CapabilityHost;
use crate::Error;

/// A JavaScript object whose `ontouch*` properties are checked by feature detection.
#[derive(Debug, Clone)]
pub struct WebHost(Object);

impl WebHost {
    pub fn new(object: Object) -> WebHost {
        WebHost(object)
    }
}

impl CapabilityHost for WebHost {
    fn has_property(&self, name: &str) -> bool {
        // a getter that throws is left alone
        Reflect::get(&self.0, &JsValue::from_str(name))
            .map_or(true, |value| !value.is_undefined())
    }

    fn define_placeholder(&self, name: &str) -> Result<(), Error> {
        let stored = Reflect::set(&self.0, &JsValue::from_str(name), &JsValue::NULL)
            .map_err(WebError::from)?;
        if !stored {
            return Err(Error::HostRejected {
                flag: name.to_string(),
            });
        }
        Ok(())
    }
}
