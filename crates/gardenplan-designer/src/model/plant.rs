use gardenplan_core::{PlantId, Point};
use serde::{Deserialize, Serialize};

use super::Entity;

pub const DEFAULT_PLANT_POSITION: Point = Point { x: 150.0, y: 150.0 };
pub const DEFAULT_PLANT_SIZE: f64 = 40.0;

/// A placed plant icon.
///
/// `icon` is an opaque resource locator resolved by the drawing surface; it may
/// be empty, in which case the surface draws an empty placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    pub icon: String,
    pub position: Point,
    pub width: f64,
    pub height: f64,
}

impl Plant {
    pub fn new(id: PlantId, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            position: DEFAULT_PLANT_POSITION,
            width: DEFAULT_PLANT_SIZE,
            height: DEFAULT_PLANT_SIZE,
        }
    }

    pub fn has_icon(&self) -> bool {
        !self.icon.trim().is_empty()
    }
}

impl Entity for Plant {
    type Id = PlantId;

    fn id(&self) -> PlantId {
        self.id
    }

    fn with_id(&self, id: PlantId) -> Self {
        Self { id, ..self.clone() }
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}
