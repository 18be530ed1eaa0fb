use gardenplan_core::{BedId, Color, LabelId, PlantId, Point};
use gardenplan_designer::model::{Bed, BedKind, BedShape, Label, Plant};
use gardenplan_designer::resolver::{
    MIN_BED_DIMENSION, MIN_LABEL_FONT_SIZE, MIN_LABEL_WIDTH, MIN_PLANT_DIMENSION,
};
use gardenplan_designer::{Resizable, TransformGesture};
use proptest::prelude::*;

fn positive_scale() -> impl Strategy<Value = f64> {
    prop_oneof![0.0001f64..1.0, 1.0f64..50.0]
}

fn bed_kind() -> impl Strategy<Value = BedKind> {
    prop::sample::select(BedKind::ALL.to_vec())
}

fn bed_dimensions(shape: &BedShape) -> Vec<f64> {
    match *shape {
        BedShape::Rectangle { width, height } | BedShape::Square { width, height } => {
            vec![width, height]
        }
        BedShape::RoundedRectangle { width, height, .. } => vec![width, height],
        BedShape::Circle { radius } => vec![radius],
        BedShape::Oval { radius_x, radius_y } => vec![radius_x, radius_y],
    }
}

proptest! {
    #[test]
    fn resized_beds_respect_minimum(kind in bed_kind(), sx in positive_scale(), sy in positive_scale()) {
        let bed = Bed::new(BedId::new(1), kind, Color::GRASS);
        let gesture = TransformGesture::new(sx, sy, Point::new(0.0, 0.0));
        let resized = bed.resized(&gesture).unwrap();
        prop_assert_eq!(resized.kind(), kind);
        for dimension in bed_dimensions(&resized.shape) {
            prop_assert!(dimension >= MIN_BED_DIMENSION);
        }
    }

    #[test]
    fn resized_plants_respect_minimum(sx in positive_scale(), sy in positive_scale()) {
        let plant = Plant::new(PlantId::new(1), "Leek", "");
        let resized = plant.resized(&TransformGesture::new(sx, sy, Point::default())).unwrap();
        prop_assert!(resized.width >= MIN_PLANT_DIMENSION);
        prop_assert!(resized.height >= MIN_PLANT_DIMENSION);
    }

    #[test]
    fn resized_labels_respect_minimum(sx in positive_scale(), sy in positive_scale()) {
        let label = Label::new(LabelId::new(1));
        let resized = label.resized(&TransformGesture::new(sx, sy, Point::default())).unwrap();
        prop_assert!(resized.width >= MIN_LABEL_WIDTH);
        prop_assert!(resized.font_size >= MIN_LABEL_FONT_SIZE);
    }

    #[test]
    fn non_positive_scale_always_rejected(sx in -50.0f64..=0.0, sy in positive_scale()) {
        let plant = Plant::new(PlantId::new(1), "Leek", "");
        prop_assert!(plant.resized(&TransformGesture::new(sx, sy, Point::default())).is_err());
        prop_assert!(plant.resized(&TransformGesture::new(sy, sx, Point::default())).is_err());
    }
}
