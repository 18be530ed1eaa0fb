//! Toolbar and picker state.
//!
//! Owned by the caller, not by the scene: closing a picker or changing the
//! fill color never touches placed entities.

use gardenplan_core::{BedId, Color, PlantId};
use tracing::debug;

use crate::catalog::CatalogEntry;
use crate::designer_state::DesignerState;
use crate::model::BedKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiPanelState {
    color_picker_open: bool,
    plant_picker_open: bool,
    selected_category: Option<String>,
    current_fill: Color,
}

impl Default for UiPanelState {
    fn default() -> Self {
        Self::with_fill(Color::GRASS)
    }
}

impl UiPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(fill: Color) -> Self {
        Self {
            color_picker_open: false,
            plant_picker_open: false,
            selected_category: None,
            current_fill: fill,
        }
    }

    pub fn color_picker_open(&self) -> bool {
        self.color_picker_open
    }

    pub fn plant_picker_open(&self) -> bool {
        self.plant_picker_open
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn current_fill(&self) -> Color {
        self.current_fill
    }

    pub fn toggle_color_picker(&mut self) {
        self.color_picker_open = !self.color_picker_open;
    }

    /// Sets the fill used for beds added from now on.
    pub fn set_fill(&mut self, color: Color) {
        self.current_fill = color;
    }

    pub fn toggle_plant_picker(&mut self) {
        self.plant_picker_open = !self.plant_picker_open;
    }

    pub fn open_category(&mut self, category: impl Into<String>) {
        self.selected_category = Some(category.into());
    }

    pub fn back_to_categories(&mut self) {
        self.selected_category = None;
    }

    /// Adds the chosen plant and closes the picker.
    pub fn choose_plant(&mut self, state: &mut DesignerState, entry: &CatalogEntry) -> PlantId {
        let id = state.add_plant(entry.name.clone(), entry.icon.clone());
        self.plant_picker_open = false;
        self.selected_category = None;
        debug!(%id, "plant picker closed");
        id
    }

    /// Adds a bed filled with the current color.
    pub fn add_bed(&self, state: &mut DesignerState, kind: BedKind) -> BedId {
        state.add_bed(kind, self.current_fill)
    }
}
