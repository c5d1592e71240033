// Copyright 2023 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Conversion of DOM mouse events.

use keyboard_types::Modifiers;

use super::WebTarget;
use crate::kurbo::Point;
use crate::mouse::{MouseButton, MouseButtons, MouseEvent, MouseEventKind, Position};

fn mouse_button(button: i16) -> Option<MouseButton> {
    match button {
        0 => Some(MouseButton::Left),
        1 => Some(MouseButton::Middle),
        2 => Some(MouseButton::Right),
        3 => Some(MouseButton::X1),
        4 => Some(MouseButton::X2),
        _ => None,
    }
}

fn mouse_buttons(mask: u16) -> MouseButtons {
    let mut buttons = MouseButtons::new();
    if mask & 1 != 0 {
        buttons.insert(MouseButton::Left);
    }
    if mask & 1 << 1 != 0 {
        buttons.insert(MouseButton::Right);
    }
    if mask & 1 << 2 != 0 {
        buttons.insert(MouseButton::Middle);
    }
    if mask & 1 << 3 != 0 {
        buttons.insert(MouseButton::X1);
    }
    if mask & 1 << 4 != 0 {
        buttons.insert(MouseButton::X2);
    }
    buttons
}

fn modifiers(event: &web_sys::MouseEvent) -> Modifiers {
    let mut mods = Modifiers::empty();
    mods.set(Modifiers::SHIFT, event.shift_key());
    mods.set(Modifiers::ALT, event.alt_key());
    mods.set(Modifiers::CONTROL, event.ctrl_key());
    mods.set(Modifiers::META, event.meta_key());
    mods
}

/// Convert a DOM mouse event. Events without a target are dropped.
pub(crate) fn mouse_event_from_web(
    kind: MouseEventKind,
    event: &web_sys::MouseEvent,
) -> Option<MouseEvent<WebTarget>> {
    let target = WebTarget::new(event.target()?);
    let position = Position {
        client: Point::new(event.client_x() as f64, event.client_y() as f64),
        screen: Point::new(event.screen_x() as f64, event.screen_y() as f64),
        page: Point::new(event.page_x() as f64, event.page_y() as f64),
    };
    // `button` is 0 (the left button) on every move, whatever is held.
    let button = match kind {
        MouseEventKind::Move => MouseButton::None,
        MouseEventKind::Down | MouseEventKind::Up => {
            mouse_button(event.button()).unwrap_or(MouseButton::None)
        }
    };
    Some(MouseEvent {
        kind,
        target,
        position,
        button,
        buttons: mouse_buttons(event.buttons()),
        mods: modifiers(event),
    })
}
