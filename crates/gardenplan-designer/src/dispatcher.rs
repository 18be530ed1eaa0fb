//! Interaction dispatcher.
//!
//! Maps one [`InputEvent`] onto scene operations and reports what happened in
//! an [`EventOutcome`]. Pointer events are resolved against the stores first;
//! events naming a deleted entity are dropped.

use gardenplan_core::EntityRef;
use tracing::{debug, warn};

use crate::designer_state::DesignerState;
use crate::input::{Action, EventOutcome, InputEvent, Key, KeyChord, PointerTarget};
use crate::resolver::TransformGesture;
use crate::text_edit::CommitTrigger;

/// Applies one input event to the scene.
pub fn dispatch(state: &mut DesignerState, event: InputEvent) -> EventOutcome {
    // Any pointer press outside the overlay takes focus away from it.
    if matches!(
        event,
        InputEvent::PointerDown { .. } | InputEvent::Click { .. } | InputEvent::DoubleClick { .. }
    ) && state.edit_session().is_some()
    {
        state.commit_text_edit(CommitTrigger::FocusLost);
    }

    match event {
        InputEvent::DragEnd { target, position } => {
            if state.move_entity(target, position) {
                EventOutcome::new(Action::Moved)
            } else {
                EventOutcome::new(Action::Ignored)
            }
        }
        InputEvent::TransformEnd { target, gesture } => on_transform_end(state, target, &gesture),
        InputEvent::PointerDown {
            target: PointerTarget::Background,
        } => match state.deselect() {
            Some(_) => EventOutcome::new(Action::Deselected).with_handles(None),
            None => EventOutcome::none(),
        },
        // Pressing on an entity never deselects; selection happens on click.
        InputEvent::PointerDown {
            target: PointerTarget::Entity(_),
        } => EventOutcome::none(),
        InputEvent::Click { target } => on_click(state, target),
        InputEvent::DoubleClick { target } => on_double_click(state, target),
        InputEvent::KeyDown { chord } => {
            if state.edit_session().is_some() {
                on_edit_key(state, chord)
            } else {
                on_shortcut(state, chord)
            }
        }
        InputEvent::EditInput { text } => {
            if state.update_draft(text) {
                EventOutcome::new(Action::EditChanged)
            } else {
                debug!("edit input without an open session");
                EventOutcome::none()
            }
        }
        InputEvent::EditBlur => match state.commit_text_edit(CommitTrigger::FocusLost) {
            Some(_) => EventOutcome::new(Action::EditCommitted),
            None => EventOutcome::none(),
        },
    }
}

fn on_transform_end(
    state: &mut DesignerState,
    target: EntityRef,
    gesture: &TransformGesture,
) -> EventOutcome {
    match state.resize_entity(target, gesture) {
        Ok(true) => EventOutcome::new(Action::Resized).with_reset_scale(target),
        Ok(false) => EventOutcome::new(Action::Ignored),
        Err(err) => {
            warn!(entity = %target, error = %err, "resize gesture rejected");
            EventOutcome::new(Action::Rejected).with_reset_scale(target)
        }
    }
}

fn on_click(state: &mut DesignerState, target: EntityRef) -> EventOutcome {
    if !state.contains(target) {
        debug!(entity = %target, "click ignored, entity not found");
        return EventOutcome::new(Action::Ignored);
    }
    state.select(target);
    EventOutcome::new(Action::Selected).with_handles(Some(target))
}

fn on_double_click(state: &mut DesignerState, target: EntityRef) -> EventOutcome {
    let Some(id) = target.as_label() else {
        return EventOutcome::none();
    };
    if state.open_text_edit(id) {
        EventOutcome::new(Action::EditOpened)
    } else {
        EventOutcome::new(Action::Ignored)
    }
}

fn on_edit_key(state: &mut DesignerState, chord: KeyChord) -> EventOutcome {
    let trigger = match chord.key {
        Key::Escape => Some(CommitTrigger::Escape),
        Key::Enter if !chord.modifiers.shift => Some(CommitTrigger::Enter),
        _ => None,
    };
    if let Some(trigger) = trigger {
        state.commit_text_edit(trigger);
        return EventOutcome::new(Action::EditCommitted).prevent_default();
    }

    let Some(session) = state.edit_session_mut() else {
        return EventOutcome::none();
    };
    match chord.key {
        Key::Enter => session.insert_newline(),
        Key::Backspace => {
            session.pop_char();
        }
        Key::Char(c) if !chord.modifiers.command() => session.push_char(c),
        _ => return EventOutcome::none(),
    }
    EventOutcome::new(Action::EditChanged)
}

fn on_shortcut(state: &mut DesignerState, chord: KeyChord) -> EventOutcome {
    match chord.key {
        Key::Delete | Key::Backspace => {
            if state.selection().is_none() {
                return EventOutcome::none();
            }
            let action = match state.delete_selected() {
                Some(_) => Action::Deleted,
                None => Action::Ignored,
            };
            EventOutcome::new(action)
                .with_handles(None)
                .prevent_default()
        }
        _ if chord.is_command('c') => {
            if state.selection().is_none() {
                return EventOutcome::none();
            }
            let action = if state.copy_selected() {
                Action::Copied
            } else {
                Action::Ignored
            };
            EventOutcome::new(action).prevent_default()
        }
        _ if chord.is_command('v') => match state.paste() {
            Some(pasted) => EventOutcome::new(Action::Pasted)
                .with_handles(Some(pasted))
                .prevent_default(),
            None => EventOutcome::none().prevent_default(),
        },
        _ => EventOutcome::none(),
    }
}
