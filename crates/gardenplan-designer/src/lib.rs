//! # Garden Plan Designer
//!
//! Scene state and interaction engine for the garden plan editor.
//!
//! The scene is three ordered entity stores (beds, plants, labels) plus the
//! editor state around them: single selection, a one-slot clipboard, the
//! canvas preset and an optional label text edit session. Input events from a
//! drawing surface go through [`dispatch`], which resolves the target entity,
//! applies the resize rules of the [`resolver`] and commits the result into
//! the owning store. The surface is redrawn from a [`SceneView`] built from
//! store state; nothing flows back from the view into the stores.
//!
//! ```
//! use gardenplan_designer::{dispatch, BedKind, DesignerState, InputEvent};
//! use gardenplan_core::{Color, EntityRef};
//!
//! let mut state = DesignerState::new();
//! let bed = state.add_bed(BedKind::Square, Color::GRASS);
//! dispatch(&mut state, InputEvent::Click { target: EntityRef::Bed(bed) });
//! assert_eq!(state.selection(), Some(EntityRef::Bed(bed)));
//! ```

pub mod catalog;
pub mod clipboard;
pub mod designer_state;
pub mod dispatcher;
pub mod entity_store;
pub mod export;
pub mod font;
pub mod input;
pub mod model;
pub mod panel;
pub mod raster;
pub mod render;
pub mod resolver;
pub mod selection_manager;
pub mod surface;
pub mod text_edit;

pub use catalog::{CatalogCategory, CatalogEntry, CatalogError, PlantCatalog, StaticCatalog};
pub use clipboard::{Clipboard, ClipboardEntry, Snapshot, PASTE_OFFSET};
pub use designer_state::DesignerState;
pub use dispatcher::dispatch;
pub use entity_store::EntityStore;
pub use export::{
    export_plan, export_with, DocumentExporter, ExportRequest, PngExporter,
    DEFAULT_EXPORT_FILE_NAME, EXPORT_PIXEL_RATIO,
};
pub use input::{Action, EventOutcome, InputEvent, Key, KeyChord, Modifiers, PointerTarget};
pub use model::{Bed, BedKind, BedShape, Entity, EntityView, Label, Plant};
pub use panel::UiPanelState;
pub use raster::BitmapSurface;
pub use render::{RenderPrimitive, SceneView};
pub use resolver::{Resizable, TransformGesture};
pub use selection_manager::SelectionManager;
pub use surface::{present, DrawingSurface};
pub use text_edit::{CommitTrigger, EditOverlay, TextEditSession};
