//! Render list: the one-way projection of scene state that a drawing surface
//! consumes.
//!
//! Beds are emitted first, then plants, then labels, each in insertion order,
//! so later entries draw on top of earlier ones.

use gardenplan_core::{CanvasSize, Color, EntityRef, GridLine, Point};
use serde::Serialize;

use crate::designer_state::DesignerState;
use crate::model::{Bed, BedShape, Entity, Label, Plant};
use crate::text_edit::EditOverlay;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "primitive", rename_all = "snake_case")]
pub enum RenderPrimitive {
    Rect {
        entity: EntityRef,
        position: Point,
        width: f64,
        height: f64,
        corner_radius: f64,
        fill: Color,
        stroke: Color,
        stroke_width: f64,
    },
    Circle {
        entity: EntityRef,
        center: Point,
        radius: f64,
        fill: Color,
        stroke: Color,
        stroke_width: f64,
    },
    Ellipse {
        entity: EntityRef,
        center: Point,
        radius_x: f64,
        radius_y: f64,
        fill: Color,
        stroke: Color,
        stroke_width: f64,
    },
    /// A plant icon. `icon` is `None` when the plant has none; the surface
    /// draws a placeholder then.
    Image {
        entity: EntityRef,
        position: Point,
        width: f64,
        height: f64,
        icon: Option<String>,
    },
    Text {
        entity: EntityRef,
        position: Point,
        text: String,
        font_size: f64,
        width: f64,
        /// Hidden while the text is being edited in the overlay.
        visible: bool,
    },
}

impl RenderPrimitive {
    pub fn entity(&self) -> EntityRef {
        match self {
            RenderPrimitive::Rect { entity, .. }
            | RenderPrimitive::Circle { entity, .. }
            | RenderPrimitive::Ellipse { entity, .. }
            | RenderPrimitive::Image { entity, .. }
            | RenderPrimitive::Text { entity, .. } => *entity,
        }
    }

    fn from_bed(bed: &Bed) -> Self {
        let entity = bed.entity_ref();
        let (fill, stroke, stroke_width) = (bed.fill, bed.stroke, bed.stroke_width);
        let rect = |width: f64, height: f64, corner_radius: f64| RenderPrimitive::Rect {
            entity,
            position: bed.position,
            width,
            height,
            corner_radius,
            fill,
            stroke,
            stroke_width,
        };
        match bed.shape {
            BedShape::Rectangle { width, height } | BedShape::Square { width, height } => {
                rect(width, height, 0.0)
            }
            BedShape::RoundedRectangle {
                width,
                height,
                corner_radius,
            } => rect(width, height, corner_radius),
            BedShape::Circle { radius } => RenderPrimitive::Circle {
                entity,
                center: bed.position,
                radius,
                fill,
                stroke,
                stroke_width,
            },
            BedShape::Oval { radius_x, radius_y } => RenderPrimitive::Ellipse {
                entity,
                center: bed.position,
                radius_x,
                radius_y,
                fill,
                stroke,
                stroke_width,
            },
        }
    }

    fn from_plant(plant: &Plant) -> Self {
        RenderPrimitive::Image {
            entity: plant.entity_ref(),
            position: plant.position,
            width: plant.width,
            height: plant.height,
            icon: plant.has_icon().then(|| plant.icon.clone()),
        }
    }

    fn from_label(label: &Label, visible: bool) -> Self {
        RenderPrimitive::Text {
            entity: label.entity_ref(),
            position: label.position,
            text: label.text.clone(),
            font_size: label.font_size,
            width: label.width,
            visible,
        }
    }
}

/// Everything the drawing surface needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneView {
    pub size: CanvasSize,
    pub grid: Vec<GridLine>,
    pub primitives: Vec<RenderPrimitive>,
    /// Entity the transform handles are attached to.
    pub highlighted: Option<EntityRef>,
    pub edit_overlay: Option<EditOverlay>,
}

impl SceneView {
    pub fn build(state: &DesignerState) -> Self {
        let size = state.canvas_size();
        let mut primitives = Vec::with_capacity(state.entity_count());

        primitives.extend(state.beds().iter().map(RenderPrimitive::from_bed));
        primitives.extend(state.plants().iter().map(RenderPrimitive::from_plant));
        primitives.extend(
            state
                .labels()
                .iter()
                .map(|label| RenderPrimitive::from_label(label, !state.is_editing(label.id))),
        );

        Self {
            size,
            grid: if state.show_grid() {
                size.grid_lines()
            } else {
                Vec::new()
            },
            primitives,
            highlighted: state.selection().filter(|entity| state.contains(*entity)),
            edit_overlay: state.edit_session().map(|session| session.overlay()),
        }
    }

    pub fn primitive(&self, entity: EntityRef) -> Option<&RenderPrimitive> {
        self.primitives.iter().find(|p| p.entity() == entity)
    }
}
