//! Input events delivered by the drawing surface and the keyboard, and the
//! outcome the dispatcher reports back.

use gardenplan_core::{EntityRef, Point};
use serde::{Deserialize, Serialize};

use crate::resolver::TransformGesture;

/// What a pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerTarget {
    /// The empty canvas (stage) itself.
    Background,
    Entity(EntityRef),
}

impl From<EntityRef> for PointerTarget {
    fn from(entity: EntityRef) -> Self {
        PointerTarget::Entity(entity)
    }
}

/// Keys the editor reacts to. Everything else arrives as `Char` or is never
/// forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    Enter,
    Char(char),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub ctrl: bool,
    /// Cmd on macOS.
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    /// Ctrl or Cmd held.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyChord {
    pub key: Key,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyChord {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    pub fn ctrl(c: char) -> Self {
        Self::new(
            Key::Char(c),
            Modifiers {
                ctrl: true,
                ..Modifiers::NONE
            },
        )
    }

    pub fn meta(c: char) -> Self {
        Self::new(
            Key::Char(c),
            Modifiers {
                meta: true,
                ..Modifiers::NONE
            },
        )
    }

    /// True for Ctrl/Cmd plus `c`, in either case.
    pub fn is_command(&self, c: char) -> bool {
        self.modifiers.command() && matches!(self.key, Key::Char(k) if k.eq_ignore_ascii_case(&c))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    /// A drag finished; `position` is the node's new absolute position.
    DragEnd {
        target: EntityRef,
        position: Point,
    },
    /// A resize finished on the transform handles.
    TransformEnd {
        target: EntityRef,
        gesture: TransformGesture,
    },
    PointerDown {
        target: PointerTarget,
    },
    Click {
        target: EntityRef,
    },
    DoubleClick {
        target: EntityRef,
    },
    KeyDown {
        chord: KeyChord,
    },
    /// The text overlay's content changed.
    EditInput {
        text: String,
    },
    /// The text overlay lost focus.
    EditBlur,
}

/// What the dispatcher did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Nothing to do (no-op condition or unhandled key).
    None,
    /// The event referenced an entity that no longer exists.
    Ignored,
    Moved,
    Resized,
    /// A resize gesture was rejected; the entity is unchanged.
    Rejected,
    Selected,
    Deselected,
    EditOpened,
    EditChanged,
    EditCommitted,
    Deleted,
    Copied,
    Pasted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventOutcome {
    pub action: Action,
    /// The surface should suppress the platform's default handling of the key.
    pub prevent_default: bool,
    /// Node whose scale must be reset to 1 after a transform.
    pub reset_scale: Option<EntityRef>,
    /// Set when the transform handles must be re-bound; `Some(None)` unbinds.
    pub bind_handles: Option<Option<EntityRef>>,
}

impl EventOutcome {
    pub fn new(action: Action) -> Self {
        Self {
            action,
            prevent_default: false,
            reset_scale: None,
            bind_handles: None,
        }
    }

    pub fn none() -> Self {
        Self::new(Action::None)
    }

    pub fn prevent_default(mut self) -> Self {
        self.prevent_default = true;
        self
    }

    pub fn with_reset_scale(mut self, entity: EntityRef) -> Self {
        self.reset_scale = Some(entity);
        self
    }

    pub fn with_handles(mut self, entity: Option<EntityRef>) -> Self {
        self.bind_handles = Some(entity);
        self
    }
}
