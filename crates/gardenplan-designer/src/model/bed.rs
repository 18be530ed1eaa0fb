use gardenplan_core::{BedId, Color, Point};
use serde::{Deserialize, Serialize};

use super::Entity;

/// Where a freshly added bed is placed.
pub const DEFAULT_BED_POSITION: Point = Point { x: 100.0, y: 100.0 };
pub const DEFAULT_BED_STROKE_WIDTH: f64 = 3.0;

/// The five bed shapes offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BedKind {
    Rectangle,
    Square,
    Circle,
    Oval,
    RoundedRectangle,
}

impl BedKind {
    pub const ALL: [BedKind; 5] = [
        BedKind::Rectangle,
        BedKind::Square,
        BedKind::Circle,
        BedKind::Oval,
        BedKind::RoundedRectangle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BedKind::Rectangle => "Rectangle",
            BedKind::Square => "Square",
            BedKind::Circle => "Circle",
            BedKind::Oval => "Oval",
            BedKind::RoundedRectangle => "Rounded Rectangle",
        }
    }
}

/// Size fields of a bed. Each variant carries exactly the fields its kind needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BedShape {
    Rectangle {
        width: f64,
        height: f64,
    },
    Square {
        width: f64,
        height: f64,
    },
    RoundedRectangle {
        width: f64,
        height: f64,
        corner_radius: f64,
    },
    Circle {
        radius: f64,
    },
    Oval {
        radius_x: f64,
        radius_y: f64,
    },
}

impl BedShape {
    /// Default dimensions for a new bed of the given kind.
    pub fn default_for(kind: BedKind) -> Self {
        match kind {
            BedKind::Rectangle => BedShape::Rectangle {
                width: 150.0,
                height: 100.0,
            },
            BedKind::Square => BedShape::Square {
                width: 120.0,
                height: 120.0,
            },
            BedKind::Circle => BedShape::Circle { radius: 60.0 },
            BedKind::Oval => BedShape::Oval {
                radius_x: 80.0,
                radius_y: 50.0,
            },
            BedKind::RoundedRectangle => BedShape::RoundedRectangle {
                width: 150.0,
                height: 100.0,
                corner_radius: 20.0,
            },
        }
    }

    pub fn kind(&self) -> BedKind {
        match self {
            BedShape::Rectangle { .. } => BedKind::Rectangle,
            BedShape::Square { .. } => BedKind::Square,
            BedShape::RoundedRectangle { .. } => BedKind::RoundedRectangle,
            BedShape::Circle { .. } => BedKind::Circle,
            BedShape::Oval { .. } => BedKind::Oval,
        }
    }

    /// All size fields are strictly positive and finite.
    pub fn is_valid(&self) -> bool {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        match *self {
            BedShape::Rectangle { width, height } | BedShape::Square { width, height } => {
                positive(width) && positive(height)
            }
            BedShape::RoundedRectangle {
                width,
                height,
                corner_radius,
            } => positive(width) && positive(height) && positive(corner_radius),
            BedShape::Circle { radius } => positive(radius),
            BedShape::Oval { radius_x, radius_y } => positive(radius_x) && positive(radius_y),
        }
    }
}

/// A placed geometric planting area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bed {
    pub id: BedId,
    pub shape: BedShape,
    pub position: Point,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl Bed {
    /// Creates a bed with the default size and placement for `kind`.
    pub fn new(id: BedId, kind: BedKind, fill: Color) -> Self {
        Self {
            id,
            shape: BedShape::default_for(kind),
            position: DEFAULT_BED_POSITION,
            fill,
            stroke: Color::SLATE,
            stroke_width: DEFAULT_BED_STROKE_WIDTH,
        }
    }

    pub fn kind(&self) -> BedKind {
        self.shape.kind()
    }
}

impl Entity for Bed {
    type Id = BedId;

    fn id(&self) -> BedId {
        self.id
    }

    fn with_id(&self, id: BedId) -> Self {
        Self { id, ..self.clone() }
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}
