//! Scene state for the garden plan editor.
//!
//! This module is split into submodules:
//! - `entities`: add, move, resize and select entities
//! - `clipboard_ops`: copy, paste and delete of the selected entity
//! - `text_edit`: the label text edit session

mod clipboard_ops;
mod entities;
mod text_edit;

use gardenplan_core::{CanvasPreset, CanvasSize, EntityRef, IdGenerator};
use tracing::debug;

use crate::clipboard::Clipboard;
use crate::entity_store::EntityStore;
use crate::model::{Bed, EntityView, Label, Plant};
use crate::selection_manager::SelectionManager;
use crate::text_edit::TextEditSession;

/// The complete in-memory scene: three entity stores plus the editor's
/// selection, clipboard, canvas preset and edit session.
///
/// The state is owned by one thread and mutated only through its methods and
/// [`crate::dispatch`].
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub(crate) beds: EntityStore<Bed>,
    pub(crate) plants: EntityStore<Plant>,
    pub(crate) labels: EntityStore<Label>,
    pub(crate) selection: SelectionManager,
    pub(crate) clipboard: Clipboard,
    pub(crate) canvas_preset: CanvasPreset,
    pub(crate) show_grid: bool,
    pub(crate) ids: IdGenerator,
    pub(crate) edit_session: Option<TextEditSession>,
}

impl Default for DesignerState {
    fn default() -> Self {
        Self {
            beds: EntityStore::new(),
            plants: EntityStore::new(),
            labels: EntityStore::new(),
            selection: SelectionManager::new(),
            clipboard: Clipboard::new(),
            canvas_preset: CanvasPreset::default(),
            show_grid: true,
            ids: IdGenerator::new(),
            edit_session: None,
        }
    }
}

impl DesignerState {
    /// Creates an empty scene on the default (medium) canvas.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preset(preset: CanvasPreset) -> Self {
        Self {
            canvas_preset: preset,
            ..Self::default()
        }
    }

    pub fn beds(&self) -> &EntityStore<Bed> {
        &self.beds
    }

    pub fn plants(&self) -> &EntityStore<Plant> {
        &self.plants
    }

    pub fn labels(&self) -> &EntityStore<Label> {
        &self.labels
    }

    pub fn selection(&self) -> Option<EntityRef> {
        self.selection.selected()
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn canvas_preset(&self) -> CanvasPreset {
        self.canvas_preset
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas_preset.size()
    }

    /// Switches the canvas size. Placed entities keep their positions and sizes.
    pub fn set_canvas_preset(&mut self, preset: CanvasPreset) {
        if self.canvas_preset != preset {
            debug!(from = %self.canvas_preset, to = %preset, "canvas preset changed");
            self.canvas_preset = preset;
        }
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
    }

    /// Resolves a reference against its owning store.
    pub fn entity(&self, entity: EntityRef) -> Option<EntityView<'_>> {
        match entity {
            EntityRef::Bed(id) => self.beds.find(id).map(EntityView::Bed),
            EntityRef::Plant(id) => self.plants.find(id).map(EntityView::Plant),
            EntityRef::Label(id) => self.labels.find(id).map(EntityView::Label),
        }
    }

    pub fn contains(&self, entity: EntityRef) -> bool {
        self.entity(entity).is_some()
    }

    pub fn entity_count(&self) -> usize {
        self.beds.len() + self.plants.len() + self.labels.len()
    }
}
