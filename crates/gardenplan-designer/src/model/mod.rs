//! Placed entities: beds, plants and labels.

use gardenplan_core::{EntityRef, Point};

mod bed;
mod label;
mod plant;

pub use bed::{Bed, BedKind, BedShape};
pub use label::Label;
pub use plant::Plant;

/// Behaviour shared by everything that lives in an [`crate::EntityStore`].
pub trait Entity: Clone {
    type Id: Copy + Eq + std::fmt::Debug + std::fmt::Display + Into<EntityRef>;

    fn id(&self) -> Self::Id;

    /// Returns a copy of this entity carrying a different id.
    fn with_id(&self, id: Self::Id) -> Self;

    fn position(&self) -> Point;

    fn set_position(&mut self, position: Point);

    fn entity_ref(&self) -> EntityRef {
        self.id().into()
    }
}

/// Borrowed view of an entity from any of the three stores.
#[derive(Debug, Clone, Copy)]
pub enum EntityView<'a> {
    Bed(&'a Bed),
    Plant(&'a Plant),
    Label(&'a Label),
}

impl EntityView<'_> {
    pub fn entity_ref(&self) -> EntityRef {
        match self {
            EntityView::Bed(bed) => bed.entity_ref(),
            EntityView::Plant(plant) => plant.entity_ref(),
            EntityView::Label(label) => label.entity_ref(),
        }
    }

    pub fn position(&self) -> Point {
        match self {
            EntityView::Bed(bed) => bed.position,
            EntityView::Plant(plant) => plant.position,
            EntityView::Label(label) => label.position,
        }
    }
}
