use gardenplan_core::{Color, EntityRef, LabelId};
use gardenplan_designer::{
    dispatch, Action, BedKind, CommitTrigger, DesignerState, InputEvent, Key, KeyChord, Modifiers,
    PointerTarget,
};

fn label_text(state: &DesignerState, id: LabelId) -> &str {
    &state.labels().find(id).unwrap().text
}

fn double_click(id: LabelId) -> InputEvent {
    InputEvent::DoubleClick {
        target: EntityRef::Label(id),
    }
}

#[test]
fn test_double_click_opens_session() {
    let mut state = DesignerState::new();
    let label = state.add_label();

    let outcome = dispatch(&mut state, double_click(label));

    assert_eq!(outcome.action, Action::EditOpened);
    let session = state.edit_session().unwrap();
    assert_eq!(session.label(), label);
    assert_eq!(session.draft(), "Double-click to edit");
}

#[test]
fn test_double_click_on_bed_does_nothing() {
    let mut state = DesignerState::new();
    let bed = state.add_bed(BedKind::Square, Color::GRASS);
    let outcome = dispatch(
        &mut state,
        InputEvent::DoubleClick {
            target: EntityRef::Bed(bed),
        },
    );
    assert_eq!(outcome.action, Action::None);
    assert!(state.edit_session().is_none());
}

#[test]
fn test_second_session_not_opened_directly() {
    let mut state = DesignerState::new();
    let a = state.add_label();
    let b = state.add_label();
    assert!(state.open_text_edit(a));
    assert!(!state.open_text_edit(b));
    assert!(state.is_editing(a));
}

#[test]
fn test_double_click_other_label_commits_then_opens() {
    let mut state = DesignerState::new();
    let a = state.add_label();
    let b = state.add_label();
    assert_eq!(
        dispatch(&mut state, double_click(a)).action,
        Action::EditOpened
    );
    assert!(state.update_draft("Beans"));

    let outcome = dispatch(&mut state, double_click(b));

    assert_eq!(outcome.action, Action::EditOpened);
    assert_eq!(label_text(&state, a), "Beans");
    assert_eq!(label_text(&state, b), "Double-click to edit");
    assert!(state.is_editing(b));
    assert!(!state.is_editing(a));
    assert_eq!(
        state.edit_session().unwrap().draft(),
        "Double-click to edit"
    );
}

#[test]
fn test_escape_commits_draft() {
    let mut state = DesignerState::new();
    let label = state.add_label();
    dispatch(&mut state, double_click(label));
    dispatch(
        &mut state,
        InputEvent::EditInput {
            text: "Peppers".to_string(),
        },
    );

    let outcome = dispatch(
        &mut state,
        InputEvent::KeyDown {
            chord: KeyChord::plain(Key::Escape),
        },
    );

    assert_eq!(outcome.action, Action::EditCommitted);
    assert_eq!(label_text(&state, label), "Peppers");
    assert!(state.edit_session().is_none());
}

#[test]
fn test_shift_enter_inserts_newline() {
    let mut state = DesignerState::new();
    let label = state.add_label();
    state.open_text_edit(label);
    state.update_draft("Row 1");

    let shift = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };
    dispatch(
        &mut state,
        InputEvent::KeyDown {
            chord: KeyChord::new(Key::Enter, shift),
        },
    );
    for c in "Row 2".chars() {
        dispatch(
            &mut state,
            InputEvent::KeyDown {
                chord: KeyChord::plain(Key::Char(c)),
            },
        );
    }
    assert!(state.edit_session().is_some());

    dispatch(&mut state, InputEvent::EditBlur);
    assert_eq!(label_text(&state, label), "Row 1\nRow 2");
}

#[test]
fn test_backspace_edits_text_instead_of_deleting() {
    let mut state = DesignerState::new();
    let label = state.add_label();
    state.select(label.into());
    state.open_text_edit(label);
    state.update_draft("Beans");

    let outcome = dispatch(
        &mut state,
        InputEvent::KeyDown {
            chord: KeyChord::plain(Key::Backspace),
        },
    );

    assert_eq!(outcome.action, Action::EditChanged);
    assert!(state.contains(label.into()));
    assert_eq!(state.edit_session().unwrap().draft(), "Bean");
}

#[test]
fn test_empty_text_is_committed() {
    let mut state = DesignerState::new();
    let label = state.add_label();
    state.open_text_edit(label);
    state.update_draft("");
    assert_eq!(state.commit_text_edit(CommitTrigger::Enter), Some(label));
    assert_eq!(label_text(&state, label), "");
}

#[test]
fn test_pointer_down_elsewhere_commits() {
    let mut state = DesignerState::new();
    let label = state.add_label();
    state.open_text_edit(label);
    state.update_draft("Squash");

    dispatch(
        &mut state,
        InputEvent::PointerDown {
            target: PointerTarget::Background,
        },
    );

    assert!(state.edit_session().is_none());
    assert_eq!(label_text(&state, label), "Squash");
}

#[test]
fn test_commit_after_label_deleted_goes_nowhere() {
    let mut state = DesignerState::new();
    let label = state.add_label();
    let other = state.add_label();
    state.open_text_edit(label);
    state.update_draft("Lost");
    state.select(label.into());
    state.delete_selected();

    assert_eq!(
        state.commit_text_edit(CommitTrigger::FocusLost),
        Some(label)
    );
    assert_eq!(label_text(&state, other), "Double-click to edit");
    assert_eq!(state.labels().len(), 1);
}
