use gardenplan_core::{LabelId, Point};
use serde::{Deserialize, Serialize};

use super::Entity;

pub const DEFAULT_LABEL_POSITION: Point = Point { x: 100.0, y: 100.0 };
pub const DEFAULT_LABEL_TEXT: &str = "Double-click to edit";
pub const DEFAULT_LABEL_FONT_SIZE: f64 = 16.0;
pub const DEFAULT_LABEL_WIDTH: f64 = 200.0;

/// An editable text annotation. Text wraps at `width`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    pub position: Point,
    pub text: String,
    pub font_size: f64,
    pub width: f64,
}

impl Label {
    pub fn new(id: LabelId) -> Self {
        Self {
            id,
            position: DEFAULT_LABEL_POSITION,
            text: DEFAULT_LABEL_TEXT.to_string(),
            font_size: DEFAULT_LABEL_FONT_SIZE,
            width: DEFAULT_LABEL_WIDTH,
        }
    }
}

impl Entity for Label {
    type Id = LabelId;

    fn id(&self) -> LabelId {
        self.id
    }

    fn with_id(&self, id: LabelId) -> Self {
        Self { id, ..self.clone() }
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}
