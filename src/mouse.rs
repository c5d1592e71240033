// Copyright 2023 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Native mouse input, as delivered by the host environment.

use keyboard_types::Modifiers;

use crate::kurbo::{Point, Vec2};
use crate::touch::TouchEventKind;

/// The phases of native mouse input the emulator listens to.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum MouseEventKind {
    Down,
    Move,
    Up,
}

impl MouseEventKind {
    /// All phases, in the order their listeners are installed.
    pub const ALL: [MouseEventKind; 3] =
        [MouseEventKind::Down, MouseEventKind::Move, MouseEventKind::Up];

    /// The DOM event type for this phase.
    pub fn as_str(self) -> &'static str {
        match self {
            MouseEventKind::Down => "mousedown",
            MouseEventKind::Move => "mousemove",
            MouseEventKind::Up => "mouseup",
        }
    }

    /// The touch phase synthesized for this mouse phase.
    pub fn touch_kind(self) -> TouchEventKind {
        match self {
            MouseEventKind::Down => TouchEventKind::Start,
            MouseEventKind::Move => TouchEventKind::Move,
            MouseEventKind::Up => TouchEventKind::End,
        }
    }
}

/// An indicator of which mouse button was pressed.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[repr(u8)]
pub enum MouseButton {
    /// No button.
    // MUST BE FIRST (== 0)
    None,
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
    /// First X button.
    X1,
    /// Second X button.
    X2,
}

impl MouseButton {
    /// Returns `true` if this is [`MouseButton::Left`].
    #[inline]
    pub fn is_left(self) -> bool {
        self == MouseButton::Left
    }
}

/// A set of [`MouseButton`]s.
#[derive(PartialEq, Eq, Clone, Copy, Default)]
pub struct MouseButtons(u8);

impl MouseButtons {
    /// Create a new empty set.
    #[inline]
    pub fn new() -> MouseButtons {
        MouseButtons(0)
    }

    /// Add the `button` to the set.
    #[inline]
    pub fn insert(&mut self, button: MouseButton) {
        self.0 |= 1.min(button as u8) << button as u8;
    }

    /// Remove the `button` from the set.
    #[inline]
    pub fn remove(&mut self, button: MouseButton) {
        self.0 &= !(1.min(button as u8) << button as u8);
    }

    /// Builder-style method for adding the `button` to the set.
    #[inline]
    pub fn with(mut self, button: MouseButton) -> MouseButtons {
        self.insert(button);
        self
    }

    /// Returns `true` if the `button` is in the set.
    #[inline]
    pub fn contains(self, button: MouseButton) -> bool {
        (self.0 & (1.min(button as u8) << button as u8)) != 0
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if [`MouseButton::Left`] is in the set.
    #[inline]
    pub fn has_left(self) -> bool {
        self.contains(MouseButton::Left)
    }
}

impl std::fmt::Debug for MouseButtons {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "MouseButtons({:05b})", self.0 >> 1)
    }
}

/// The location of a pointer in the three coordinate spaces of a document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// Relative to the viewport.
    pub client: Point,
    /// Relative to the screen.
    pub screen: Point,
    /// Relative to the document, including scroll.
    pub page: Point,
}

impl Position {
    /// A position where all three coordinate spaces coincide.
    pub fn uniform(point: impl Into<Point>) -> Position {
        let point = point.into();
        Position {
            client: point,
            screen: point,
            page: point,
        }
    }

    /// Shift every coordinate pair by `offset`.
    pub fn translate(&self, offset: Vec2) -> Position {
        Position {
            client: self.client + offset,
            screen: self.screen + offset,
            page: self.page + offset,
        }
    }
}

/// A native mouse event.
///
/// `T` is the host's handle to an element; it is cloned, never deep-copied.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent<T> {
    pub kind: MouseEventKind,
    /// The element the mouse was over when the event fired.
    pub target: T,
    pub position: Position,
    /// The button whose state change caused this event. This is
    /// [`MouseButton::None`] for move events.
    pub button: MouseButton,
    /// Buttons held down during this event.
    pub buttons: MouseButtons,
    /// Keyboard modifiers at the time of the event.
    pub mods: Modifiers,
}

impl<T> MouseEvent<T> {
    pub fn new(kind: MouseEventKind, target: T, position: Position) -> MouseEvent<T> {
        MouseEvent {
            kind,
            target,
            position,
            button: MouseButton::None,
            buttons: MouseButtons::new(),
            mods: Modifiers::empty(),
        }
    }

    /// Builder-style method for setting the changed button.
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// Builder-style method for setting the held buttons.
    pub fn with_buttons(mut self, buttons: MouseButtons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Builder-style method for setting the keyboard modifiers.
    pub fn with_mods(mut self, mods: Modifiers) -> Self {
        self.mods = mods;
        self
    }

    /// The button this event reports, in the sense of the legacy DOM `which` field.
    ///
    /// Down and up events report the button that changed. Move events report the
    /// lowest-numbered held button (left, then middle, then right).
    pub fn which(&self) -> MouseButton {
        match self.kind {
            MouseEventKind::Down | MouseEventKind::Up => self.button,
            MouseEventKind::Move => [
                MouseButton::Left,
                MouseButton::Middle,
                MouseButton::Right,
                MouseButton::X1,
                MouseButton::X2,
            ]
            .into_iter()
            .find(|b| self.buttons.contains(*b))
            .unwrap_or(MouseButton::None),
        }
    }

    /// Whether the primary button drives this event.
    pub fn is_primary(&self) -> bool {
        self.which().is_left()
    }
}
