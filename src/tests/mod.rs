// Copyright 2023 the Druid Authors
// SPDX-License-Identifier: Apache-2.0

//! Tests that drive a whole emulator through the in-memory DOM.


use std::rc::Rc;

use keyboard_types::Modifiers;
use test_log::test;

use crate::kurbo::Point;
use crate::mouse::{MouseButton, MouseButtons, MouseEvent, MouseEventKind, Position};
use crate::target::{CapabilityHost, EventTarget};
use crate::touch::{TouchEventKind, EMULATED_TOUCH_ID};
use crate::*;
use harness::*;

fn install(root: &Node) -> TouchEmulator<Node> {
    TouchEmulator::install(root.clone(), &[], Config::default()).unwrap()
}

#[test]
fn install_listens_in_capture_phase() {
    let root = Node::new("root");
    let window = PropertyBag::default();
    let document = PropertyBag::default();
    let _emulator =
        TouchEmulator::install(root.clone(), &[&window, &document], Config::default()).unwrap();

    assert_eq!(
        root.listeners(),
        [
            (MouseEventKind::Down, true),
            (MouseEventKind::Move, true),
            (MouseEventKind::Up, true),
        ]
    );
    for flag in ["ontouchstart", "ontouchmove", "ontouchcancel", "ontouchend"] {
        assert!(window.has_property(flag), "{flag} missing on window");
        assert!(document.has_property(flag), "{flag} missing on document");
    }
}

#[test]
fn bubble_phase_is_configurable() {
    let root = Node::new("root");
    let config = Config::default().with_capture(false);
    let emulator = TouchEmulator::install(root.clone(), &[], config).unwrap();
    assert!(root.listeners().iter().all(|(_, capture)| !capture));

    emulator.uninstall().unwrap();
    assert!(root.listeners().is_empty());
}

#[test]
fn press_starts_a_touch_at_the_event_target() {
    let root = Node::new("root");
    let _emulator = install(&root);

    root.fire(&press(&root, 20.0, 30.0));

    let received = root.received();
    assert_eq!(received.len(), 1);
    let start = &received[0];
    assert_eq!(start.kind, TouchEventKind::Start);
    assert!(start.bubbles && start.cancelable);
    for list in [&start.touches, &start.target_touches, &start.changed_touches] {
        assert_eq!(list.len(), 1);
        let point = list.item(0).unwrap();
        assert_eq!(point.identifier, EMULATED_TOUCH_ID);
        assert_eq!(point.target, root);
        assert_eq!(point.position(), Position::uniform(Point::new(20.0, 30.0)));
    }
}

#[test]
fn coordinates_keep_their_spaces() {
    let root = Node::new("root");
    let emulator = install(&root);
    let position = Position {
        client: Point::new(5.0, 6.0),
        screen: Point::new(805.0, 406.0),
        page: Point::new(5.0, 1006.0),
    };
    let down = MouseEvent::new(MouseEventKind::Down, root.clone(), position)
        .with_button(MouseButton::Left);

    assert!(emulator.handle_mouse(&down));
    let received = root.received();
    let point = received[0].changed_touches.item(0).unwrap();
    assert_eq!(point.client, position.client);
    assert_eq!(point.screen, position.screen);
    assert_eq!(point.page, position.page);
}

#[test]
fn moves_stay_on_the_starting_element() {
    let root = Node::new("root");
    let button = Node::new("button");
    let elsewhere = Node::new("elsewhere");
    let emulator = install(&root);

    root.fire(&press(&button, 1.0, 1.0));
    root.fire(&drag(&elsewhere, 50.0, 60.0));
    root.fire(&drag(&root, 70.0, 80.0));

    assert!(elsewhere.received().is_empty());
    assert!(root.received().is_empty());
    let received = button.received();
    let kinds: Vec<_> = received.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, [TouchEventKind::Start, TouchEventKind::Move, TouchEventKind::Move]);
    let last = received[2].touches.item(0).unwrap();
    assert_eq!(last.target, button);
    assert_eq!(last.client, Point::new(70.0, 80.0));
    assert_eq!(emulator.session_target(), Some(button));
}

#[test]
fn release_ends_the_sequence() {
    let root = Node::new("root");
    let emulator = install(&root);

    root.fire(&press(&root, 1.0, 2.0));
    assert!(emulator.is_touching());
    root.fire(&release(&root, 3.0, 4.0));

    let received = root.received();
    let end = &received[1];
    assert_eq!(end.kind, TouchEventKind::End);
    assert!(end.touches.is_empty());
    assert!(end.target_touches.is_empty());
    assert_eq!(end.changed_touches.len(), 1);
    assert_eq!(
        end.changed_touches.item(0).unwrap().client,
        Point::new(3.0, 4.0)
    );
    assert!(!emulator.is_touching());
    assert_eq!(emulator.session_target(), None);
}

#[test]
fn other_buttons_are_ignored() {
    let root = Node::new("root");
    let emulator = install(&root);

    let right_down = MouseEvent::new(MouseEventKind::Down, root.clone(), Position::default())
        .with_button(MouseButton::Right)
        .with_buttons(MouseButtons::new().with(MouseButton::Right));
    let hover = MouseEvent::new(MouseEventKind::Move, root.clone(), Position::default());
    let middle_drag = MouseEvent::new(MouseEventKind::Move, root.clone(), Position::default())
        .with_buttons(MouseButtons::new().with(MouseButton::Middle));
    let right_up = MouseEvent::new(MouseEventKind::Up, root.clone(), Position::default())
        .with_button(MouseButton::Right);

    for event in [&right_down, &hover, &middle_drag, &right_up] {
        root.fire(event);
        assert!(!emulator.is_touching());
    }
    assert!(root.received().is_empty());
}

#[test]
fn ignored_release_keeps_the_session() {
    let root = Node::new("root");
    let button = Node::new("button");
    let emulator = install(&root);

    root.fire(&press(&button, 0.0, 0.0));
    let right_up = MouseEvent::new(MouseEventKind::Up, root.clone(), Position::default())
        .with_button(MouseButton::Right);
    root.fire(&right_up);

    assert_eq!(emulator.session_target(), Some(button.clone()));
    assert_eq!(button.received().len(), 1);
}

#[test]
fn stray_move_uses_its_own_target() {
    let root = Node::new("root");
    let link = Node::new("link");
    let emulator = install(&root);

    root.fire(&drag(&link, 9.0, 9.0));

    let received = link.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].kind, TouchEventKind::Move);
    assert_eq!(emulator.session_target(), Some(link));
}

#[test]
fn modifiers_reach_the_touch_event() {
    let root = Node::new("root");
    let _emulator = install(&root);

    root.fire(&press(&root, 0.0, 0.0).with_mods(Modifiers::ALT | Modifiers::CONTROL));

    let received = root.received();
    assert!(received[0].alt_key());
    assert!(received[0].ctrl_key());
    assert!(!received[0].meta_key());
    assert!(!received[0].shift_key());
}

#[test]
fn sequences_do_not_leak_into_each_other() {
    let root = Node::new("root");
    let first = Node::new("first");
    let second = Node::new("second");
    let emulator = install(&root);

    root.fire(&press(&first, 1.0, 1.0));
    root.fire(&release(&first, 1.0, 1.0));
    root.fire(&press(&second, 2.0, 2.0));
    root.fire(&release(&root, 3.0, 3.0));

    assert_eq!(first.received().len(), 2);
    let received = second.received();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].kind, TouchEventKind::Start);
    assert_eq!(received[1].kind, TouchEventKind::End);
    for event in &received {
        let point = event.changed_touches.item(0).unwrap();
        assert_eq!(point.target, second);
    }
    assert!(root.received().is_empty());
    assert!(!emulator.is_touching());
}

#[test]
fn press_replaces_a_sequence_that_never_ended() {
    let root = Node::new("root");
    let first = Node::new("first");
    let second = Node::new("second");
    let emulator = install(&root);

    root.fire(&press(&first, 0.0, 0.0));
    root.fire(&press(&second, 0.0, 0.0));

    assert_eq!(emulator.session_target(), Some(second.clone()));
    assert_eq!(second.received()[0].kind, TouchEventKind::Start);
}

#[test]
fn emulators_have_separate_sessions() {
    let left = Node::new("left");
    let right = Node::new("right");
    let left_emulator = install(&left);
    let right_emulator = install(&right);

    left.fire(&press(&left, 0.0, 0.0));

    assert_eq!(left_emulator.session_target(), Some(left.clone()));
    assert_eq!(right_emulator.session_target(), None);
    assert!(right.received().is_empty());
}

#[test]
fn failed_install_rolls_back_listeners() {
    let root = Node::detaching_after("root", 2);
    let result = TouchEmulator::install(root.clone(), &[], Config::default());

    assert!(matches!(result, Err(Error::TargetDetached)));
    assert!(root.listeners().is_empty());
}

#[test]
fn uninstall_stops_translation() {
    let root = Node::new("root");
    let emulator = install(&root);
    emulator.uninstall().unwrap();

    root.fire(&press(&root, 0.0, 0.0));
    assert!(root.received().is_empty());
}

#[test]
fn removing_an_unknown_listener_fails() {
    let root = Node::new("root");
    let other = Node::new("other");
    let listener = other
        .add_mouse_listener(MouseEventKind::Down, true, Box::new(|_: &MouseEvent<Node>| {}))
        .unwrap();

    let result = root.remove_mouse_listener(MouseEventKind::Down, true, listener);
    assert!(matches!(result, Err(Error::UnknownListener)));
}

#[test]
fn dispatch_at_a_detached_target_fails() {
    let gone = Node::new("gone");
    gone.detach();

    let result = trigger_touch(TouchEventKind::Start, &press(&gone, 0.0, 0.0), &gone);
    assert!(matches!(result, Err(Error::TargetDetached)));
    assert!(gone.received().is_empty());
}

#[test]
fn dropping_the_emulator_removes_its_listeners() {
    let root = Node::new("root");
    {
        let _emulator = install(&root);
        assert_eq!(root.listeners().len(), 3);
    }

    assert!(root.listeners().is_empty());
    root.fire(&press(&root, 0.0, 0.0));
    assert!(root.received().is_empty());
}

#[test]
fn dropping_after_uninstall_is_harmless() {
    let root = Node::new("root");
    let emulator = install(&root);
    emulator.uninstall().unwrap();

    let _again = install(&root);
    assert_eq!(root.listeners().len(), 3);
}

#[test]
fn forgotten_emulator_keeps_translating() {
    let root = Node::new("root");
    install(&root).forget();

    assert_eq!(root.listeners().len(), 3);
    root.fire(&press(&root, 0.0, 0.0));
    root.fire(&release(&root, 0.0, 0.0));

    let kinds: Vec<_> = root.received().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, [TouchEventKind::Start, TouchEventKind::End]);
}

#[test]
fn touch_listeners_may_feed_the_emulator() {
    let root = Node::new("root");
    let button = Node::new("button");
    let emulator = Rc::new(install(&root));

    let inner = emulator.clone();
    let release_event = release(&button, 0.0, 0.0);
    button.on_touch(move |event| {
        if event.kind == TouchEventKind::Start {
            inner.handle_mouse(&release_event);
        }
    });
    root.fire(&press(&button, 0.0, 0.0));

    assert!(!emulator.is_touching());
    let kinds: Vec<_> = button.received().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, [TouchEventKind::Start, TouchEventKind::End]);
}
