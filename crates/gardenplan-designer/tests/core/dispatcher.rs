use gardenplan_core::{BedId, Color, EntityRef, Point};
use gardenplan_designer::{
    dispatch, Action, BedKind, DesignerState, InputEvent, Key, KeyChord, Modifiers, PointerTarget,
    TransformGesture,
};

fn key(chord: KeyChord) -> InputEvent {
    InputEvent::KeyDown { chord }
}

fn click(target: impl Into<EntityRef>) -> InputEvent {
    InputEvent::Click {
        target: target.into(),
    }
}

#[test]
fn test_background_pointer_down_deselects() {
    let mut state = DesignerState::new();
    let bed = state.add_bed(BedKind::Square, Color::GRASS);
    dispatch(&mut state, click(bed));

    let outcome = dispatch(
        &mut state,
        InputEvent::PointerDown {
            target: PointerTarget::Background,
        },
    );

    assert_eq!(outcome.action, Action::Deselected);
    assert_eq!(outcome.bind_handles, Some(None));
    assert_eq!(state.selection(), None);
}

#[test]
fn test_entity_pointer_down_keeps_selection() {
    let mut state = DesignerState::new();
    let a = state.add_bed(BedKind::Square, Color::GRASS);
    let b = state.add_plant("Kale", "");
    dispatch(&mut state, click(a));

    dispatch(
        &mut state,
        InputEvent::PointerDown {
            target: PointerTarget::Entity(b.into()),
        },
    );

    assert_eq!(state.selection(), Some(EntityRef::Bed(a)));
}

#[test]
fn test_click_selects_and_binds_handles() {
    let mut state = DesignerState::new();
    let plant = state.add_plant("Kale", "");
    let outcome = dispatch(&mut state, click(plant));
    assert_eq!(outcome.action, Action::Selected);
    assert_eq!(outcome.bind_handles, Some(Some(EntityRef::Plant(plant))));
    assert_eq!(state.selection(), Some(EntityRef::Plant(plant)));
}

#[test]
fn test_drag_end_moves_entity() {
    let mut state = DesignerState::new();
    let plant = state.add_plant("Kale", "");
    let outcome = dispatch(
        &mut state,
        InputEvent::DragEnd {
            target: plant.into(),
            position: Point::new(42.0, 24.0),
        },
    );
    assert_eq!(outcome.action, Action::Moved);
    assert_eq!(
        state.plants().find(plant).unwrap().position,
        Point::new(42.0, 24.0)
    );
}

#[test]
fn test_events_for_missing_entities_are_dropped() {
    let mut state = DesignerState::new();
    let ghost = EntityRef::Bed(BedId::new(404));

    let outcome = dispatch(
        &mut state,
        InputEvent::DragEnd {
            target: ghost,
            position: Point::new(1.0, 1.0),
        },
    );
    assert_eq!(outcome.action, Action::Ignored);

    let outcome = dispatch(&mut state, click(ghost));
    assert_eq!(outcome.action, Action::Ignored);
    assert_eq!(state.selection(), None);
}

#[test]
fn test_transform_end_resets_scale() {
    let mut state = DesignerState::new();
    let bed = state.add_bed(BedKind::Circle, Color::GRASS);
    let outcome = dispatch(
        &mut state,
        InputEvent::TransformEnd {
            target: bed.into(),
            gesture: TransformGesture::new(2.0, 1.0, Point::new(100.0, 100.0)),
        },
    );
    assert_eq!(outcome.action, Action::Resized);
    assert_eq!(outcome.reset_scale, Some(EntityRef::Bed(bed)));
}

#[test]
fn test_invalid_gesture_rejected_without_change() {
    let mut state = DesignerState::new();
    let bed = state.add_bed(BedKind::Circle, Color::GRASS);
    let before = state.beds().find(bed).cloned();

    let outcome = dispatch(
        &mut state,
        InputEvent::TransformEnd {
            target: bed.into(),
            gesture: TransformGesture::new(f64::NAN, 1.0, Point::new(5.0, 5.0)),
        },
    );

    assert_eq!(outcome.action, Action::Rejected);
    assert_eq!(outcome.reset_scale, Some(EntityRef::Bed(bed)));
    assert_eq!(state.beds().find(bed).cloned(), before);
}

#[test]
fn test_delete_key_requires_selection() {
    let mut state = DesignerState::new();
    state.add_label();

    let outcome = dispatch(&mut state, key(KeyChord::plain(Key::Delete)));
    assert_eq!(outcome.action, Action::None);
    assert!(!outcome.prevent_default);
    assert_eq!(state.entity_count(), 1);
}

#[test]
fn test_backspace_deletes_selection() {
    let mut state = DesignerState::new();
    let label = state.add_label();
    dispatch(&mut state, click(label));

    let outcome = dispatch(&mut state, key(KeyChord::plain(Key::Backspace)));
    assert_eq!(outcome.action, Action::Deleted);
    assert!(outcome.prevent_default);
    assert_eq!(state.entity_count(), 0);
}

#[test]
fn test_copy_paste_shortcuts_accept_either_case() {
    let mut state = DesignerState::new();
    let bed = state.add_bed(BedKind::Oval, Color::GRASS);
    dispatch(&mut state, click(bed));

    let copy = dispatch(&mut state, key(KeyChord::meta('C')));
    assert_eq!(copy.action, Action::Copied);
    assert!(copy.prevent_default);

    let paste = dispatch(&mut state, key(KeyChord::ctrl('V')));
    assert_eq!(paste.action, Action::Pasted);
    assert!(paste.prevent_default);
    assert_eq!(state.beds().len(), 2);
}

#[test]
fn test_copy_without_modifier_is_plain_key() {
    let mut state = DesignerState::new();
    let bed = state.add_bed(BedKind::Oval, Color::GRASS);
    dispatch(&mut state, click(bed));

    let outcome = dispatch(&mut state, key(KeyChord::plain(Key::Char('c'))));
    assert_eq!(outcome.action, Action::None);
    assert!(state.clipboard().is_empty());
}

#[test]
fn test_copy_shortcut_without_selection_not_consumed() {
    let mut state = DesignerState::new();
    let outcome = dispatch(&mut state, key(KeyChord::ctrl('c')));
    assert_eq!(outcome.action, Action::None);
    assert!(!outcome.prevent_default);
}

#[test]
fn test_paste_with_empty_clipboard_changes_nothing() {
    let mut state = DesignerState::new();
    state.add_plant("Kale", "");
    let outcome = dispatch(&mut state, key(KeyChord::ctrl('v')));
    assert_eq!(outcome.action, Action::None);
    assert_eq!(state.entity_count(), 1);
}

#[test]
fn test_alt_modifier_does_not_count_as_command() {
    let chord = KeyChord::new(
        Key::Char('c'),
        Modifiers {
            alt: true,
            ..Modifiers::NONE
        },
    );
    assert!(!chord.is_command('c'));
}
