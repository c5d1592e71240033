// Copyright 2023 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Synthetic touch points, touch lists and touch events.
//!
//! These follow the shape of the [W3C Touch Events] interfaces, so that a host
//! can hand them to code written against real touch hardware.
//!
//! [W3C Touch Events]: https://w3c.github.io/touch-events/

use std::slice;

use keyboard_types::Modifiers;

use crate::kurbo::{Point, Vec2};
use crate::mouse::{MouseEvent, Position};
use crate::target::EventTarget;
use crate::Error;

/// The identifier given to the single emulated touch.
pub const EMULATED_TOUCH_ID: u32 = 1;

/// The phases of a touch sequence.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum TouchEventKind {
    Start,
    Move,
    End,
}

impl TouchEventKind {
    /// The DOM event type for this phase.
    pub fn as_str(self) -> &'static str {
        match self {
            TouchEventKind::Start => "touchstart",
            TouchEventKind::Move => "touchmove",
            TouchEventKind::End => "touchend",
        }
    }

    /// Returns `true` if no finger remains on the surface after this phase.
    pub fn is_end(self) -> bool {
        self == TouchEventKind::End
    }
}

/// One finger on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchPoint<T> {
    /// Unique among the touches that are active at the same time.
    pub identifier: u32,
    /// The element the touch started on, even if it has since moved away from it.
    pub target: T,
    pub client: Point,
    pub screen: Point,
    pub page: Point,
}

impl<T> TouchPoint<T> {
    /// Create a touch point located exactly at `pos`.
    pub fn new(target: T, identifier: u32, pos: &Position) -> TouchPoint<T> {
        TouchPoint::with_offset(target, identifier, pos, Vec2::ZERO)
    }

    /// Create a touch point at `pos`, shifted by `offset` in every coordinate space.
    pub fn with_offset(
        target: T,
        identifier: u32,
        pos: &Position,
        offset: Vec2,
    ) -> TouchPoint<T> {
        let Position {
            client,
            screen,
            page,
        } = pos.translate(offset);
        TouchPoint {
            identifier,
            target,
            client,
            screen,
            page,
        }
    }

    /// The three coordinate pairs of this touch.
    pub fn position(&self) -> Position {
        Position {
            client: self.client,
            screen: self.screen,
            page: self.page,
        }
    }
}

/// An ordered list of touch points, in the order the touches started.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchList<T> {
    points: Vec<TouchPoint<T>>,
}

impl<T> Default for TouchList<T> {
    fn default() -> Self {
        TouchList::new()
    }
}

impl<T> TouchList<T> {
    /// Create an empty list.
    pub fn new() -> TouchList<T> {
        TouchList { points: Vec::new() }
    }

    pub fn push(&mut self, point: TouchPoint<T>) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, TouchPoint<T>> {
        self.points.iter()
    }

    /// The touch at position `index`, if there is one.
    pub fn item(&self, index: usize) -> Option<&TouchPoint<T>> {
        self.points.get(index)
    }

    /// The touch whose identifier is `id`, if there is one.
    ///
    /// This matches on [`TouchPoint::identifier`]. Older emulators addressed the
    /// list slot `id + 1` instead, which never finds anything in a one-touch list.
    pub fn identified_touch(&self, id: u32) -> Option<&TouchPoint<T>> {
        self.points.iter().find(|point| point.identifier == id)
    }
}

impl<T> FromIterator<TouchPoint<T>> for TouchList<T> {
    fn from_iter<I: IntoIterator<Item = TouchPoint<T>>>(iter: I) -> Self {
        TouchList {
            points: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for TouchList<T> {
    type Item = TouchPoint<T>;
    type IntoIter = std::vec::IntoIter<TouchPoint<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a TouchList<T> {
    type Item = &'a TouchPoint<T>;
    type IntoIter = slice::Iter<'a, TouchPoint<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// A synthetic touch event, ready to be dispatched at a target.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent<T> {
    pub kind: TouchEventKind,
    pub bubbles: bool,
    pub cancelable: bool,
    /// Keyboard modifiers copied from the mouse event.
    pub mods: Modifiers,
    /// Every touch currently on the surface.
    pub touches: TouchList<T>,
    /// The touches that started on the same element as this event's target.
    pub target_touches: TouchList<T>,
    /// The touches whose state changed with this event.
    pub changed_touches: TouchList<T>,
}

impl<T> TouchEvent<T> {
    pub fn alt_key(&self) -> bool {
        self.mods.contains(Modifiers::ALT)
    }

    pub fn ctrl_key(&self) -> bool {
        self.mods.contains(Modifiers::CONTROL)
    }

    pub fn meta_key(&self) -> bool {
        self.mods.contains(Modifiers::META)
    }

    pub fn shift_key(&self) -> bool {
        self.mods.contains(Modifiers::SHIFT)
    }
}

fn copy_touch_mods(mods: Modifiers) -> Modifiers {
    mods & (Modifiers::ALT | Modifiers::CONTROL | Modifiers::META | Modifiers::SHIFT)
}

/// A list holding the emulated touch at the mouse position.
fn create_touch_list<T: Clone>(mouse: &MouseEvent<T>, target: &T) -> TouchList<T> {
    let mut list = TouchList::new();
    list.push(TouchPoint::new(target.clone(), EMULATED_TOUCH_ID, &mouse.position));
    list
}

fn active_touches<T: Clone>(
    kind: TouchEventKind,
    mouse: &MouseEvent<T>,
    target: &T,
) -> TouchList<T> {
    if kind.is_end() {
        return TouchList::new();
    }
    create_touch_list(mouse, target)
}

/// Build the touch event that corresponds to `mouse`, anchored at `target`.
pub fn synthesize<T: Clone>(
    kind: TouchEventKind,
    mouse: &MouseEvent<T>,
    target: &T,
) -> TouchEvent<T> {
    TouchEvent {
        kind,
        bubbles: true,
        cancelable: true,
        mods: copy_touch_mods(mouse.mods),
        touches: active_touches(kind, mouse, target),
        target_touches: active_touches(kind, mouse, target),
        changed_touches: create_touch_list(mouse, target),
    }
}

/// Synthesize a touch event from `mouse` and dispatch it at `target`.
pub fn trigger_touch<T: EventTarget>(
    kind: TouchEventKind,
    mouse: &MouseEvent<T>,
    target: &T,
) -> Result<(), Error> {
    let event = synthesize(kind, mouse, target);
    target.dispatch_touch_event(&event)
}
