//! The drawing surface collaborator.
//!
//! The editor never draws anything itself. A surface receives the render list
//! after every change, attaches the transform handles to the selected entity,
//! resets node scale after a resize and produces a bitmap for export.

use gardenplan_core::{EntityRef, ExportError};
use image::RgbaImage;

use crate::designer_state::DesignerState;
use crate::input::EventOutcome;
use crate::render::SceneView;

pub trait DrawingSurface {
    /// Draws a new frame.
    fn render(&mut self, view: &SceneView);

    /// Attaches the transform handles to `entity`, or removes them.
    fn bind_handles(&mut self, entity: Option<EntityRef>);

    /// Resets the node's scale to 1 after its size was folded into the store.
    fn reset_scale(&mut self, entity: EntityRef);

    /// Renders the current frame at `pixel_ratio` times the canvas size.
    fn rasterize(&mut self, pixel_ratio: f64) -> Result<RgbaImage, ExportError>;
}

/// Forwards the side effects of a dispatched event to the surface and redraws.
pub fn present<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    state: &DesignerState,
    outcome: &EventOutcome,
) {
    if let Some(entity) = outcome.reset_scale {
        surface.reset_scale(entity);
    }
    if let Some(handles) = outcome.bind_handles {
        surface.bind_handles(handles);
    }
    surface.render(&SceneView::build(state));
}
