// Copyright 2023 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::error::Error as WebError;
use super::mouse::mouse_event_from_web;
use crate::mouse::MouseEventKind;
use crate::target::{EventTarget, MouseHandler};
use crate::touch::{TouchEvent, TouchList, TouchPoint};
use crate::Error;

/// A DOM `EventTarget`, usually an element.
#[derive(Debug, Clone, PartialEq)]
pub struct WebTarget(web_sys::EventTarget);

impl WebTarget {
    pub fn new(target: web_sys::EventTarget) -> WebTarget {
        WebTarget(target)
    }

    pub fn as_event_target(&self) -> &web_sys::EventTarget {
        &self.0
    }
}

impl From<web_sys::EventTarget> for WebTarget {
    fn from(target: web_sys::EventTarget) -> WebTarget {
        WebTarget(target)
    }
}

/// A registered mouse listener. Dropping it without removing it from its target
/// leaves a dangling callback, so pass it back to `remove_mouse_listener`.
/// [`TouchEmulator`](crate::TouchEmulator) does this when it is dropped.
pub struct WebListener(Closure<dyn FnMut(web_sys::MouseEvent)>);

impl EventTarget for WebTarget {
    type Listener = WebListener;

    fn add_mouse_listener(
        &self,
        kind: MouseEventKind,
        use_capture: bool,
        mut handler: MouseHandler<Self>,
    ) -> Result<WebListener, Error> {
        let closure = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
            if let Some(event) = mouse_event_from_web(kind, &event) {
                handler(&event);
            }
        }) as Box<dyn FnMut(_)>);
        self.0
            .add_event_listener_with_callback_and_bool(
                kind.as_str(),
                closure.as_ref().unchecked_ref(),
                use_capture,
            )
            .map_err(WebError::from)?;
        Ok(WebListener(closure))
    }

    fn remove_mouse_listener(
        &self,
        kind: MouseEventKind,
        use_capture: bool,
        listener: WebListener,
    ) -> Result<(), Error> {
        self.0
            .remove_event_listener_with_callback_and_bool(
                kind.as_str(),
                listener.0.as_ref().unchecked_ref(),
                use_capture,
            )
            .map_err(WebError::from)?;
        Ok(())
    }

    fn can_dispatch(&self) -> bool {
        match self.0.dyn_ref::<web_sys::Node>() {
            Some(node) => node.is_connected(),
            None => true,
        }
    }

    fn dispatch_touch_event(&self, event: &TouchEvent<Self>) -> Result<(), Error> {
        if !self.can_dispatch() {
            return Err(Error::TargetDetached);
        }
        let native = touch_event_to_web(event)?;
        self.0.dispatch_event(&native).map_err(WebError::from)?;
        Ok(())
    }
}

fn set(object: &Object, key: &str, value: &JsValue) -> Result<(), WebError> {
    Reflect::set(object, &JsValue::from_str(key), value)?;
    Ok(())
}

fn touch_to_web(point: &TouchPoint<WebTarget>) -> Result<web_sys::Touch, WebError> {
    let init = Object::new();
    set(&init, "identifier", &JsValue::from(point.identifier))?;
    set(&init, "target", &point.target.0)?;
    set(&init, "clientX", &JsValue::from_f64(point.client.x))?;
    set(&init, "clientY", &JsValue::from_f64(point.client.y))?;
    set(&init, "screenX", &JsValue::from_f64(point.screen.x))?;
    set(&init, "screenY", &JsValue::from_f64(point.screen.y))?;
    set(&init, "pageX", &JsValue::from_f64(point.page.x))?;
    set(&init, "pageY", &JsValue::from_f64(point.page.y))?;
    Ok(web_sys::Touch::new(init.unchecked_ref())?)
}

fn touch_list_to_web(list: &TouchList<WebTarget>) -> Result<Array, WebError> {
    let array = Array::new();
    for point in list {
        array.push(&touch_to_web(point)?);
    }
    Ok(array)
}

fn touch_event_to_web(event: &TouchEvent<WebTarget>) -> Result<web_sys::TouchEvent, WebError> {
    let init = Object::new();
    set(&init, "bubbles", &JsValue::from_bool(event.bubbles))?;
    set(&init, "cancelable", &JsValue::from_bool(event.cancelable))?;
    set(&init, "altKey", &JsValue::from_bool(event.alt_key()))?;
    set(&init, "ctrlKey", &JsValue::from_bool(event.ctrl_key()))?;
    set(&init, "metaKey", &JsValue::from_bool(event.meta_key()))?;
    set(&init, "shiftKey", &JsValue::from_bool(event.shift_key()))?;
    set(&init, "touches", &touch_list_to_web(&event.touches)?)?;
    set(&init, "targetTouches", &touch_list_to_web(&event.target_touches)?)?;
    set(&init, "changedTouches", &touch_list_to_web(&event.changed_touches)?)?;
    Ok(web_sys::TouchEvent::new_with_event_init_dict(
        event.kind.as_str(),
        init.unchecked_ref(),
    )?)
}
