//! Label text edit session.

use gardenplan_core::LabelId;
use tracing::debug;

use super::DesignerState;
use crate::text_edit::{CommitTrigger, TextEditSession};

impl DesignerState {
    /// Opens an edit session on a label, pre-filled with its text.
    ///
    /// Returns `false` if a session is already open or the label does not
    /// exist.
    pub fn open_text_edit(&mut self, id: LabelId) -> bool {
        if let Some(session) = &self.edit_session {
            debug!(open = %session.label(), requested = %id, "edit session already open");
            return false;
        }
        let Some(label) = self.labels.find(id) else {
            debug!(%id, "edit ignored, label not found");
            return false;
        };
        self.edit_session = Some(TextEditSession::open(label));
        debug!(%id, "edit session opened");
        true
    }

    pub fn edit_session(&self) -> Option<&TextEditSession> {
        self.edit_session.as_ref()
    }

    pub fn edit_session_mut(&mut self) -> Option<&mut TextEditSession> {
        self.edit_session.as_mut()
    }

    pub fn is_editing(&self, id: LabelId) -> bool {
        self.edit_session
            .as_ref()
            .is_some_and(|session| session.label() == id)
    }

    /// Replaces the draft of the open session. Returns `false` when no
    /// session is open.
    pub fn update_draft(&mut self, text: impl Into<String>) -> bool {
        match self.edit_session.as_mut() {
            Some(session) => {
                session.set_draft(text);
                true
            }
            None => false,
        }
    }

    /// Writes the draft verbatim into the label and closes the session.
    ///
    /// Returns the label id when a session was open. If the label was deleted
    /// while the session was open the text goes nowhere.
    pub fn commit_text_edit(&mut self, trigger: CommitTrigger) -> Option<LabelId> {
        let session = self.edit_session.take()?;
        let (id, text) = session.into_commit();
        if self.set_label_text(id, text) {
            debug!(%id, ?trigger, "label text committed");
        } else {
            debug!(%id, ?trigger, "commit ignored, label not found");
        }
        Some(id)
    }
}
