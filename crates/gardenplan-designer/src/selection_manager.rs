use gardenplan_core::EntityRef;

/// Tracks which entity, if any, is selected.
///
/// The editor has single selection only: selecting an entity replaces the
/// previous selection. The manager does not check that the referenced entity
/// still exists; [`crate::DesignerState`] clears the selection when it deletes
/// the selected entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionManager {
    selected: Option<EntityRef>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use gardenplan_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn selected(&self) -> Option<EntityRef> {
        self.selected
    }

    pub fn select(&mut self, entity: EntityRef) {
        self.selected = Some(entity);
    }

    /// Clears the selection, returning what was selected.
    pub fn deselect(&mut self) -> Option<EntityRef> {
        self.selected.take()
    }

    pub fn is_selected(&self, entity: EntityRef) -> bool {
        self.selected == Some(entity)
    }
}
