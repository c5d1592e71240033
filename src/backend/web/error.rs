// Copyright 2023 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Web backend errors.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone)]
pub enum Error {
    NoWindow,
    NoDocument,
    Js(JsValue),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::NoWindow => write!(f, "No global window found"),
            Error::NoDocument => write!(f, "No global document found"),
            Error::Js(err) => write!(f, "JavaScript error: {:?}", err.as_string()),
        }
    }
}

impl From<JsValue> for Error {
    fn from(js: JsValue) -> Error {
        Error::Js(js)
    }
}

impl std::error::Error for Error {}
