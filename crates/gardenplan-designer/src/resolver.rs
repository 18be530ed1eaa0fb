//! Transform resolver.
//!
//! Converts a resize gesture reported by the drawing surface (independent X/Y
//! scale factors plus the node's absolute position) into new stored
//! dimensions. The scale is folded into the stored size so the surface can
//! reset its node scale to 1; repeated resizes therefore compose on the stored
//! dimension instead of on an accumulating transform.
//!
//! Minimum sizes per kind:
//!
//! | Entity | Fields | Minimum |
//! |---|---|---|
//! | rectangle, square, rounded rectangle | width, height | 5 |
//! | circle | radius (X scale only) | 5 |
//! | oval | radius_x, radius_y | 5 |
//! | plant | width, height | 20 |
//! | label | width / font size | 50 / 10 |

use gardenplan_core::{GeometryError, Point, ScaleAxis};
use serde::{Deserialize, Serialize};

use crate::model::{Bed, BedShape, Label, Plant};

pub const MIN_BED_DIMENSION: f64 = 5.0;
pub const MIN_PLANT_DIMENSION: f64 = 20.0;
pub const MIN_LABEL_WIDTH: f64 = 50.0;
pub const MIN_LABEL_FONT_SIZE: f64 = 10.0;

/// Result of a finished resize gesture on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformGesture {
    pub scale_x: f64,
    pub scale_y: f64,
    /// Absolute node position at the end of the gesture.
    pub position: Point,
}

impl TransformGesture {
    pub fn new(scale_x: f64, scale_y: f64, position: Point) -> Self {
        Self {
            scale_x,
            scale_y,
            position,
        }
    }

    /// Rejects zero, negative and non-finite scale factors.
    pub fn validate(&self) -> Result<(), GeometryError> {
        check_scale(ScaleAxis::X, self.scale_x)?;
        check_scale(ScaleAxis::Y, self.scale_y)
    }
}

fn check_scale(axis: ScaleAxis, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidScale { axis, value })
    }
}

/// Scales one stored dimension and clamps it to `min`.
pub fn scale_dimension(value: f64, factor: f64, min: f64) -> f64 {
    (value * factor).max(min)
}

/// Entities whose size can be changed by a resize gesture.
pub trait Resizable: Sized {
    /// Returns a copy with the gesture's scale folded into the stored size and
    /// the gesture's position applied.
    fn resized(&self, gesture: &TransformGesture) -> Result<Self, GeometryError>;
}

impl BedShape {
    /// Applies scale factors to the size fields of this shape.
    pub fn scaled(&self, scale_x: f64, scale_y: f64) -> Self {
        let s = |value: f64, factor: f64| scale_dimension(value, factor, MIN_BED_DIMENSION);
        match *self {
            BedShape::Rectangle { width, height } => BedShape::Rectangle {
                width: s(width, scale_x),
                height: s(height, scale_y),
            },
            BedShape::Square { width, height } => BedShape::Square {
                width: s(width, scale_x),
                height: s(height, scale_y),
            },
            BedShape::RoundedRectangle {
                width,
                height,
                corner_radius,
            } => BedShape::RoundedRectangle {
                width: s(width, scale_x),
                height: s(height, scale_y),
                corner_radius,
            },
            // Circles stay circular: only the X factor is used
            BedShape::Circle { radius } => BedShape::Circle {
                radius: s(radius, scale_x),
            },
            BedShape::Oval { radius_x, radius_y } => BedShape::Oval {
                radius_x: s(radius_x, scale_x),
                radius_y: s(radius_y, scale_y),
            },
        }
    }
}

impl Resizable for Bed {
    fn resized(&self, gesture: &TransformGesture) -> Result<Self, GeometryError> {
        gesture.validate()?;
        Ok(Self {
            shape: self.shape.scaled(gesture.scale_x, gesture.scale_y),
            position: gesture.position,
            ..self.clone()
        })
    }
}

impl Resizable for Plant {
    fn resized(&self, gesture: &TransformGesture) -> Result<Self, GeometryError> {
        gesture.validate()?;
        Ok(Self {
            width: scale_dimension(self.width, gesture.scale_x, MIN_PLANT_DIMENSION),
            height: scale_dimension(self.height, gesture.scale_y, MIN_PLANT_DIMENSION),
            position: gesture.position,
            ..self.clone()
        })
    }
}

impl Resizable for Label {
    /// The Y factor scales the font rather than a height; text reflows at the
    /// new width.
    fn resized(&self, gesture: &TransformGesture) -> Result<Self, GeometryError> {
        gesture.validate()?;
        Ok(Self {
            width: scale_dimension(self.width, gesture.scale_x, MIN_LABEL_WIDTH),
            font_size: scale_dimension(self.font_size, gesture.scale_y, MIN_LABEL_FONT_SIZE),
            position: gesture.position,
            ..self.clone()
        })
    }
}
