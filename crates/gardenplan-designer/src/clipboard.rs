//! Single-slot clipboard holding an immutable snapshot of one entity.

use gardenplan_core::{EntityKind, Point};

use crate::model::{Bed, Entity, Label, Plant};

/// Offset applied to both coordinates of a pasted entity.
pub const PASTE_OFFSET: f64 = 20.0;

/// An owned copy of an entity taken at copy time.
///
/// Later edits to (or deletion of) the source entity do not reach the
/// snapshot. Pasting twice from the same snapshot yields two entities at the
/// same offset position.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T>(T);

impl<T: Entity> Snapshot<T> {
    pub fn of(entity: &T) -> Self {
        Self(entity.clone())
    }

    pub fn get(&self) -> &T {
        &self.0
    }

    pub fn position(&self) -> Point {
        self.0.position()
    }

    /// Builds a new entity from the snapshot with a fresh id, moved by
    /// `(dx, dy)` relative to the snapshot position.
    pub fn instantiate(&self, id: T::Id, dx: f64, dy: f64) -> T {
        let mut entity = self.0.with_id(id);
        entity.set_position(self.0.position().offset(dx, dy));
        entity
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardEntry {
    Bed(Snapshot<Bed>),
    Plant(Snapshot<Plant>),
    Label(Snapshot<Label>),
}

impl ClipboardEntry {
    pub fn kind(&self) -> EntityKind {
        match self {
            ClipboardEntry::Bed(_) => EntityKind::Bed,
            ClipboardEntry::Plant(_) => EntityKind::Plant,
            ClipboardEntry::Label(_) => EntityKind::Label,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clipboard {
    entry: Option<ClipboardEntry>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the clipboard content.
    pub fn set(&mut self, entry: ClipboardEntry) {
        self.entry = Some(entry);
    }

    pub fn entry(&self) -> Option<&ClipboardEntry> {
        self.entry.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    pub fn kind(&self) -> Option<EntityKind> {
        self.entry.as_ref().map(ClipboardEntry::kind)
    }
}
