//! In-place label text editing.
//!
//! While a session is open, key input goes to the session's draft instead of
//! the editor shortcuts. The label itself is only touched on commit.

use gardenplan_core::{LabelId, Point};
use serde::Serialize;

use crate::model::Label;

/// Geometry of the text input overlay, matching the label it edits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EditOverlay {
    pub position: Point,
    pub width: f64,
    pub font_size: f64,
}

/// What ended an edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTrigger {
    Escape,
    /// Enter without Shift.
    Enter,
    FocusLost,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextEditSession {
    label: LabelId,
    draft: String,
    overlay: EditOverlay,
}

impl TextEditSession {
    /// Opens a session pre-filled with the label's current text.
    pub fn open(label: &Label) -> Self {
        Self {
            label: label.id,
            draft: label.text.clone(),
            overlay: EditOverlay {
                position: label.position,
                width: label.width,
                font_size: label.font_size,
            },
        }
    }

    pub fn label(&self) -> LabelId {
        self.label
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn overlay(&self) -> EditOverlay {
        self.overlay
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn pop_char(&mut self) -> Option<char> {
        self.draft.pop()
    }

    /// Shift+Enter inserts a line break instead of committing.
    pub fn insert_newline(&mut self) {
        self.draft.push('\n');
    }

    /// Ends the session, yielding the label id and the final text.
    pub fn into_commit(self) -> (LabelId, String) {
        (self.label, self.draft)
    }
}
