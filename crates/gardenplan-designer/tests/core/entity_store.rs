use gardenplan_core::{BedId, Color, EntityRef, LabelId, PlantId, Point};
use gardenplan_designer::{Bed, BedKind, DesignerState, Entity, EntityView, Label, Plant};
use proptest::prelude::*;

#[test]
fn test_add_then_find_returns_entity() {
    let mut state = DesignerState::new();
    let bed = state.add_bed(BedKind::Rectangle, Color::GRASS);
    let plant = state.add_plant("Carrot", "carrot.png");
    let label = state.add_label();

    assert!(matches!(
        state.entity(bed.into()),
        Some(EntityView::Bed(b)) if b.kind() == BedKind::Rectangle
    ));
    assert!(matches!(
        state.entity(plant.into()),
        Some(EntityView::Plant(p)) if p.name == "Carrot"
    ));
    assert!(matches!(
        state.entity(label.into()),
        Some(EntityView::Label(_))
    ));
    assert_eq!(state.entity_count(), 3);
}

#[test]
fn test_ids_unique_across_kinds() {
    let mut state = DesignerState::new();
    let bed = state.add_bed(BedKind::Square, Color::GRASS);
    let plant = state.add_plant("Kale", "");
    assert_ne!(EntityRef::from(bed).raw(), EntityRef::from(plant).raw());
}

#[test]
fn test_move_keeps_other_entities() {
    let mut state = DesignerState::new();
    let a = state.add_bed(BedKind::Square, Color::GRASS);
    let b = state.add_bed(BedKind::Circle, Color::GRASS);
    let before = state.beds().snapshot();

    assert!(state.move_entity(a.into(), Point::new(10.0, 20.0)));

    assert!(state.beds().changed_since(&before));
    assert_eq!(
        state.beds().find(a).unwrap().position,
        Point::new(10.0, 20.0)
    );
    assert_eq!(state.beds().find(b), before.iter().find(|bed| bed.id == b));
}

#[test]
fn test_move_dangling_reference_is_noop() {
    let mut state = DesignerState::new();
    state.add_bed(BedKind::Square, Color::GRASS);
    let before = state.beds().snapshot();

    assert!(!state.move_entity(BedId::new(999).into(), Point::new(1.0, 1.0)));
    assert!(!state.beds().changed_since(&before));
}

#[test]
fn test_stores_are_independent() {
    let mut state = DesignerState::new();
    state.add_bed(BedKind::Square, Color::GRASS);
    let plants = state.plants().snapshot();
    let labels = state.labels().snapshot();

    state.add_bed(BedKind::Oval, Color::GRASS);

    assert!(!state.plants().changed_since(&plants));
    assert!(!state.labels().changed_since(&labels));
}

fn point() -> impl Strategy<Value = Point> {
    (-500.0..1500.0f64, -500.0..1500.0f64).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn prop_insert_then_find_returns_entity_with_fresh_id(
        kind in prop::sample::select(BedKind::ALL.to_vec()),
        (r, g, b) in (any::<u8>(), any::<u8>(), any::<u8>()),
        bed_at in point(),
        name in "[A-Za-z ]{1,16}",
        icon in "[a-z]{0,8}",
        plant_at in point(),
        size in 1.0..300.0f64,
        text in ".{0,40}",
        label_at in point(),
        font_size in 6.0..72.0f64,
    ) {
        let mut state = DesignerState::new();
        // Occupy a few ids so the inserted ones differ from the templates'
        state.add_label();
        state.add_label();

        let mut bed = Bed::new(BedId::new(999), kind, Color::rgb(r, g, b));
        bed.position = bed_at;
        bed.stroke_width = 5.0;
        let mut plant = Plant::new(PlantId::new(999), name, icon);
        plant.position = plant_at;
        plant.width = size;
        plant.height = size * 2.0;
        let mut label = Label::new(LabelId::new(999));
        label.text = text;
        label.position = label_at;
        label.font_size = font_size;

        let bed_id = state.insert_bed(&bed);
        let plant_id = state.insert_plant(&plant);
        let label_id = state.insert_label(&label);

        prop_assert_ne!(bed_id, bed.id);
        prop_assert_eq!(state.beds().find(bed_id), Some(&bed.with_id(bed_id)));
        prop_assert_eq!(state.plants().find(plant_id), Some(&plant.with_id(plant_id)));
        prop_assert_eq!(state.labels().find(label_id), Some(&label.with_id(label_id)));
        prop_assert_eq!(state.entity_count(), 5);
        prop_assert!(matches!(
            state.entity(EntityRef::Bed(bed_id)),
            Some(EntityView::Bed(found)) if *found == bed.with_id(bed_id)
        ));
    }
}
