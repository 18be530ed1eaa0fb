//! Copy, paste and delete of the selected entity.

use gardenplan_core::EntityRef;
use tracing::debug;

use super::DesignerState;
use crate::clipboard::{ClipboardEntry, Snapshot, PASTE_OFFSET};

impl DesignerState {
    /// Snapshots the selected entity into the clipboard.
    ///
    /// Returns `false` with nothing selected, or when the selection refers to
    /// an entity that no longer exists. The clipboard is left untouched then.
    pub fn copy_selected(&mut self) -> bool {
        let Some(selected) = self.selection.selected() else {
            debug!("copy ignored, nothing selected");
            return false;
        };

        let entry = match selected {
            EntityRef::Bed(id) => self
                .beds
                .find(id)
                .map(|b| ClipboardEntry::Bed(Snapshot::of(b))),
            EntityRef::Plant(id) => self
                .plants
                .find(id)
                .map(|p| ClipboardEntry::Plant(Snapshot::of(p))),
            EntityRef::Label(id) => self
                .labels
                .find(id)
                .map(|l| ClipboardEntry::Label(Snapshot::of(l))),
        };

        match entry {
            Some(entry) => {
                debug!(entity = %selected, "copied to clipboard");
                self.clipboard.set(entry);
                true
            }
            None => {
                debug!(entity = %selected, "copy ignored, entity not found");
                false
            }
        }
    }

    /// Creates a new entity from the clipboard snapshot, offset by
    /// [`PASTE_OFFSET`] on both axes, and selects it.
    ///
    /// The offset is always relative to the snapshot, so repeated pastes land
    /// on the same spot. Returns `None` when the clipboard is empty.
    pub fn paste(&mut self) -> Option<EntityRef> {
        let Some(entry) = self.clipboard.entry() else {
            debug!("paste ignored, clipboard empty");
            return None;
        };

        let pasted = match entry {
            ClipboardEntry::Bed(snapshot) => {
                let id = self.ids.next();
                self.beds
                    .add(snapshot.instantiate(id, PASTE_OFFSET, PASTE_OFFSET));
                EntityRef::Bed(id)
            }
            ClipboardEntry::Plant(snapshot) => {
                let id = self.ids.next();
                self.plants
                    .add(snapshot.instantiate(id, PASTE_OFFSET, PASTE_OFFSET));
                EntityRef::Plant(id)
            }
            ClipboardEntry::Label(snapshot) => {
                let id = self.ids.next();
                self.labels
                    .add(snapshot.instantiate(id, PASTE_OFFSET, PASTE_OFFSET));
                EntityRef::Label(id)
            }
        };

        debug!(entity = %pasted, "pasted from clipboard");
        self.selection.select(pasted);
        Some(pasted)
    }

    /// Removes the selected entity and clears the selection.
    ///
    /// The clipboard is not touched, so a deleted entity can still be pasted.
    pub fn delete_selected(&mut self) -> Option<EntityRef> {
        let Some(selected) = self.selection.selected() else {
            debug!("delete ignored, nothing selected");
            return None;
        };

        let removed = match selected {
            EntityRef::Bed(id) => self.beds.remove(id).is_some(),
            EntityRef::Plant(id) => self.plants.remove(id).is_some(),
            EntityRef::Label(id) => self.labels.remove(id).is_some(),
        };
        self.selection.deselect();

        if removed {
            debug!(entity = %selected, "deleted");
            Some(selected)
        } else {
            debug!(entity = %selected, "delete ignored, entity not found");
            None
        }
    }
}
