//! Typed entity identifiers.
//!
//! Every placed object is addressed by an [`EntityRef`], a tagged union of the
//! entity kind and an opaque numeric id. Dispatch on the kind is a `match`,
//! never an inspection of an id string.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}-{}", $kind.prefix(), self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a bed.
    BedId,
    EntityKind::Bed
);
entity_id!(
    /// Identifier of a plant.
    PlantId,
    EntityKind::Plant
);
entity_id!(
    /// Identifier of a label.
    LabelId,
    EntityKind::Label
);

/// The three kinds of placeable entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Bed,
    Plant,
    Label,
}

impl EntityKind {
    /// Short prefix used when an id is printed.
    pub const fn prefix(self) -> &'static str {
        match self {
            EntityKind::Bed => "bed",
            EntityKind::Plant => "plant",
            EntityKind::Label => "label",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Reference to one entity in one of the three stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum EntityRef {
    Bed(BedId),
    Plant(PlantId),
    Label(LabelId),
}

impl EntityRef {
    pub fn kind(self) -> EntityKind {
        match self {
            EntityRef::Bed(_) => EntityKind::Bed,
            EntityRef::Plant(_) => EntityKind::Plant,
            EntityRef::Label(_) => EntityKind::Label,
        }
    }

    /// The raw numeric id, without its kind.
    pub fn raw(self) -> u64 {
        match self {
            EntityRef::Bed(id) => id.get(),
            EntityRef::Plant(id) => id.get(),
            EntityRef::Label(id) => id.get(),
        }
    }

    pub fn as_label(self) -> Option<LabelId> {
        match self {
            EntityRef::Label(id) => Some(id),
            _ => None,
        }
    }
}

impl From<BedId> for EntityRef {
    fn from(id: BedId) -> Self {
        EntityRef::Bed(id)
    }
}

impl From<PlantId> for EntityRef {
    fn from(id: PlantId) -> Self {
        EntityRef::Plant(id)
    }
}

impl From<LabelId> for EntityRef {
    fn from(id: LabelId) -> Self {
        EntityRef::Label(id)
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityRef::Bed(id) => id.fmt(f),
            EntityRef::Plant(id) => id.fmt(f),
            EntityRef::Label(id) => id.fmt(f),
        }
    }
}

/// Monotonic id source shared by all three stores.
///
/// Ids are never reused within a scene, so a pasted entity can never collide
/// with a deleted one that is still referenced by a stale event.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next_id: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Mints the next id, converted into the requested id type.
    pub fn next<I: From<u64>>(&mut self) -> I {
        let id = self.next_id;
        self.next_id += 1;
        I::from(id)
    }

    /// Peeks at the id the next call to [`IdGenerator::next`] will hand out.
    pub fn peek(&self) -> u64 {
        self.next_id
    }
}
