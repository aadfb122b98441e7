use uuid::Uuid;

use super::*;

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_to_none_held() {
    let mods = Modifiers::default();
    assert!(!(mods.shift || mods.ctrl || mods.alt || mods.meta));
}

#[test]
fn modifiers_flags_are_independent() {
    let mods = Modifiers { shift: true, alt: true, ..Default::default() };
    assert!(mods.shift);
    assert!(mods.alt);
    assert!(!mods.ctrl);
    assert!(!mods.meta);
}

#[test]
fn modifiers_copy_preserves_flags() {
    let original = Modifiers { ctrl: true, ..Default::default() };
    let copy = original;
    assert_eq!(copy.ctrl, original.ctrl);
    assert_eq!(copy.shift, original.shift);
}

// =============================================================
// Button
// =============================================================

#[test]
fn buttons_are_distinct() {
    let buttons = [Button::Primary, Button::Middle, Button::Secondary];
    for (i, a) in buttons.iter().enumerate() {
        for (j, b) in buttons.iter().enumerate() {
            assert_eq!(i == j, a == b);
        }
    }
}

// =============================================================
// Key
// =============================================================

#[test]
fn key_compares_by_name() {
    assert_eq!(Key("z".into()), Key("z".into()));
    assert_ne!(Key("z".into()), Key("Z".into()));
}

#[test]
fn key_exposes_host_name() {
    let key = Key("Backspace".into());
    assert_eq!(key.0, "Backspace");
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_is_empty() {
    let ui = UiState::default();
    assert!(ui.selected_id.is_none());
    assert!(ui.raised_id.is_none());
    assert!(ui.editing_id.is_none());
}

#[test]
fn ui_state_fields_are_independent() {
    let selected = Uuid::new_v4();
    let raised = Uuid::new_v4();
    let ui = UiState { selected_id: Some(selected), raised_id: Some(raised), editing_id: None };
    assert_eq!(ui.selected_id, Some(selected));
    assert_eq!(ui.raised_id, Some(raised));
    assert!(ui.editing_id.is_none());
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let s = InputState::default();
    assert!(matches!(s, InputState::Idle));
}

#[test]
fn input_state_dragging_carries_gesture_context() {
    let id = Uuid::new_v4();
    let s = InputState::DraggingElement { id, grab: Point::new(4.0, 7.0) };
    match s {
        InputState::DraggingElement { id: got, grab } => {
            assert_eq!(got, id);
            assert_eq!(grab, Point::new(4.0, 7.0));
        }
        InputState::Idle => panic!("expected a drag gesture"),
    }
}
