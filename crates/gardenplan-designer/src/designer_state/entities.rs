//! Entity creation, placement and resize.

use gardenplan_core::{BedId, Color, EntityRef, GeometryError, LabelId, PlantId, Point};
use tracing::debug;

use super::DesignerState;
use crate::entity_store::EntityStore;
use crate::model::{Bed, BedKind, Entity, Label, Plant};
use crate::resolver::{Resizable, TransformGesture};

impl DesignerState {
    /// Adds a bed of `kind` with its default size at the default position.
    pub fn add_bed(&mut self, kind: BedKind, fill: Color) -> BedId {
        let id = self.ids.next();
        self.beds.add(Bed::new(id, kind, fill));
        debug!(%id, kind = kind.name(), "bed added");
        id
    }

    pub fn add_plant(&mut self, name: impl Into<String>, icon: impl Into<String>) -> PlantId {
        let id = self.ids.next();
        let plant = Plant::new(id, name, icon);
        debug!(%id, name = %plant.name, "plant added");
        self.plants.add(plant);
        id
    }

    pub fn add_label(&mut self) -> LabelId {
        let id = self.ids.next();
        self.labels.add(Label::new(id));
        debug!(%id, "label added");
        id
    }

    /// Inserts a prepared bed under a freshly minted id.
    pub fn insert_bed(&mut self, bed: &Bed) -> BedId {
        let id = self.ids.next();
        self.beds.add(bed.with_id(id));
        id
    }

    pub fn insert_plant(&mut self, plant: &Plant) -> PlantId {
        let id = self.ids.next();
        self.plants.add(plant.with_id(id));
        id
    }

    pub fn insert_label(&mut self, label: &Label) -> LabelId {
        let id = self.ids.next();
        self.labels.add(label.with_id(id));
        id
    }

    /// Moves an entity to an absolute position.
    ///
    /// Returns `false` when the reference is dangling.
    pub fn move_entity(&mut self, entity: EntityRef, position: Point) -> bool {
        fn set<T: Entity>(store: &mut EntityStore<T>, id: T::Id, position: Point) -> bool {
            store.update(id, |current| {
                let mut moved = current.clone();
                moved.set_position(position);
                moved
            })
        }

        let applied = match entity {
            EntityRef::Bed(id) => set(&mut self.beds, id, position),
            EntityRef::Plant(id) => set(&mut self.plants, id, position),
            EntityRef::Label(id) => set(&mut self.labels, id, position),
        };
        if applied {
            debug!(%entity, x = position.x, y = position.y, "entity moved");
        } else {
            debug!(%entity, "move ignored, entity not found");
        }
        applied
    }

    /// Folds a finished resize gesture into the entity's stored size.
    ///
    /// Returns `Ok(false)` when the reference is dangling and an error when
    /// the gesture carries an unusable scale factor. Either way the entity is
    /// left unchanged.
    pub fn resize_entity(
        &mut self,
        entity: EntityRef,
        gesture: &TransformGesture,
    ) -> Result<bool, GeometryError> {
        gesture.validate()?;

        fn apply<T: Entity + Resizable>(
            store: &mut EntityStore<T>,
            id: T::Id,
            gesture: &TransformGesture,
        ) -> Result<bool, GeometryError> {
            let Some(current) = store.find(id) else {
                return Ok(false);
            };
            let resized = current.resized(gesture)?;
            Ok(store.update(id, |_| resized))
        }

        let applied = match entity {
            EntityRef::Bed(id) => apply(&mut self.beds, id, gesture)?,
            EntityRef::Plant(id) => apply(&mut self.plants, id, gesture)?,
            EntityRef::Label(id) => apply(&mut self.labels, id, gesture)?,
        };
        if applied {
            debug!(
                %entity,
                scale_x = gesture.scale_x,
                scale_y = gesture.scale_y,
                "entity resized"
            );
        } else {
            debug!(%entity, "resize ignored, entity not found");
        }
        Ok(applied)
    }

    /// Replaces a label's text. Returns `false` when the label no longer exists.
    pub fn set_label_text(&mut self, id: LabelId, text: impl Into<String>) -> bool {
        let text = text.into();
        self.labels.update(id, |label| Label {
            text,
            ..label.clone()
        })
    }

    /// Selects an entity, replacing any previous selection.
    pub fn select(&mut self, entity: EntityRef) {
        debug!(%entity, "selected");
        self.selection.select(entity);
    }

    pub fn deselect(&mut self) -> Option<EntityRef> {
        let previous = self.selection.deselect();
        if let Some(entity) = previous {
            debug!(%entity, "deselected");
        }
        previous
    }
}
