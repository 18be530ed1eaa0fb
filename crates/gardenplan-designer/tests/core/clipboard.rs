use gardenplan_core::{Color, EntityKind, EntityRef, Point};
use gardenplan_designer::{BedKind, DesignerState, EntityView, PASTE_OFFSET};

#[test]
fn test_copy_without_selection_is_noop() {
    let mut state = DesignerState::new();
    state.add_plant("Carrot", "");
    assert!(!state.copy_selected());
    assert!(state.clipboard().is_empty());
}

#[test]
fn test_paste_with_empty_clipboard_is_noop() {
    let mut state = DesignerState::new();
    let plant = state.add_plant("Carrot", "");
    state.select(plant.into());

    assert_eq!(state.paste(), None);
    assert_eq!(state.entity_count(), 1);
    assert_eq!(state.selection(), Some(EntityRef::Plant(plant)));
}

#[test]
fn test_paste_offsets_and_selects_new_entity() {
    let mut state = DesignerState::new();
    let bed = state.add_bed(BedKind::RoundedRectangle, Color::GRASS);
    state.select(bed.into());
    assert!(state.copy_selected());

    let pasted = state.paste().unwrap();

    assert_ne!(pasted, EntityRef::Bed(bed));
    assert_eq!(state.selection(), Some(pasted));
    let Some(EntityView::Bed(copy)) = state.entity(pasted) else {
        panic!("pasted entity should be a bed");
    };
    let original = state.beds().find(bed).unwrap();
    assert_eq!(
        copy.position,
        original.position.offset(PASTE_OFFSET, PASTE_OFFSET)
    );
    assert_eq!(copy.shape, original.shape);
    assert_eq!(copy.fill, original.fill);
}

#[test]
fn test_repeated_pastes_do_not_accumulate() {
    let mut state = DesignerState::new();
    let label = state.add_label();
    state.select(label.into());
    state.copy_selected();

    let first = state.paste().unwrap();
    let second = state.paste().unwrap();

    assert_ne!(first, second);
    let pos = |r: EntityRef| state.entity(r).unwrap().position();
    assert_eq!(pos(first), Point::new(120.0, 120.0));
    assert_eq!(pos(second), Point::new(120.0, 120.0));
}

#[test]
fn test_copy_snapshots_current_attributes() {
    let mut state = DesignerState::new();
    let plant = state.add_plant("Carrot", "");
    state.move_entity(plant.into(), Point::new(10.0, 10.0));
    state.select(plant.into());
    state.copy_selected();

    // Moving the source after copying does not affect the paste
    state.move_entity(plant.into(), Point::new(500.0, 500.0));
    let pasted = state.paste().unwrap();
    assert_eq!(
        state.entity(pasted).unwrap().position(),
        Point::new(30.0, 30.0)
    );
}

#[test]
fn test_delete_clears_selection_but_not_clipboard() {
    let mut state = DesignerState::new();
    let plant = state.add_plant("Carrot", "");
    state.select(plant.into());
    state.copy_selected();

    assert_eq!(state.delete_selected(), Some(EntityRef::Plant(plant)));
    assert_eq!(state.selection(), None);
    assert!(!state.contains(plant.into()));
    assert_eq!(state.clipboard().kind(), Some(EntityKind::Plant));
}

#[test]
fn test_delete_without_selection_is_noop() {
    let mut state = DesignerState::new();
    state.add_label();
    assert_eq!(state.delete_selected(), None);
    assert_eq!(state.entity_count(), 1);
}
