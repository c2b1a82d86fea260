use super::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    Toggle(usize),
    RowActivate(usize),
    ModifierDown,
    ModifierUp,
    Next,
    Previous,
    IntoCheckbox,
    OutOfCheckbox,
    Search(String),
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0usize..3).prop_map(Action::Toggle),
        (0usize..3).prop_map(Action::RowActivate),
        Just(Action::ModifierDown),
        Just(Action::ModifierUp),
        Just(Action::Next),
        Just(Action::Previous),
        Just(Action::IntoCheckbox),
        Just(Action::OutOfCheckbox),
        "[a-z]{0,3}".prop_map(Action::Search),
    ]
}

/// Apply an action, returning any change notification it produced
fn apply(state: &mut FilterState, action: &Action) -> Option<Vec<String>> {
    let values = ["one", "two", "three"];
    match action {
        Action::Toggle(i) => {
            state.toggle_multiple(values[*i]);
            None
        }
        Action::RowActivate(i) => state.row_activate(values[*i]),
        Action::ModifierDown => {
            state.modifier_key_down();
            None
        }
        Action::ModifierUp => {
            state.modifier_key_up();
            None
        }
        Action::Next => {
            state.move_focus(FocusDirection::Next);
            None
        }
        Action::Previous => {
            state.move_focus(FocusDirection::Previous);
            None
        }
        Action::IntoCheckbox => {
            state.move_focus(FocusDirection::IntoCheckbox);
            None
        }
        Action::OutOfCheckbox => {
            state.move_focus(FocusDirection::OutOfCheckbox);
            None
        }
        Action::Search(query) => {
            state.search(query);
            None
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Open then cancel never notifies and never touches the committed value
    #[test]
    fn prop_open_cancel_leaves_committed(
        initial in prop::sample::subsequence(vec!["one", "two", "three"], 0..=3),
    ) {
        let mut state = multiple_state(&initial);
        state.open();
        state.cancel();

        let expected: Vec<String> = initial.iter().map(|v| v.to_string()).collect();
        prop_assert_eq!(state.committed(), expected.as_slice());
        prop_assert!(!state.is_awaiting_value());
    }

    // Any number of staged toggles yields exactly one notification on commit
    #[test]
    fn prop_commit_notifies_once_with_final_staged(
        toggles in prop::collection::vec(0usize..3, 0..20),
    ) {
        let values = ["one", "two", "three"];
        let mut state = multiple_state(&[]);
        state.open();

        let mut notifications = 0;
        for i in &toggles {
            state.toggle_multiple(values[*i]);
        }
        let expected = state.staged().to_vec();

        if let Some(change) = state.commit() {
            notifications += 1;
            prop_assert_eq!(change, expected);
        }
        prop_assert!(state.commit().is_none());
        prop_assert_eq!(notifications, 1);
    }

    // Single mode never stages more than one identifier
    #[test]
    fn prop_single_mode_stages_at_most_one(
        initial in prop::sample::subsequence(vec!["one", "two", "three"], 0..=3),
        actions in prop::collection::vec(action_strategy(), 0..30),
    ) {
        let mut state = single_state(&initial, false);
        state.open();
        prop_assert!(state.staged().len() <= 1);

        for action in &actions {
            apply(&mut state, action);
            prop_assert!(state.staged().len() <= 1);
        }
    }

    // Focus always points at a visible row, or nowhere when none are visible
    #[test]
    fn prop_focus_stays_in_bounds(
        actions in prop::collection::vec(action_strategy(), 0..40),
    ) {
        let mut state = multiple_state(&[]);
        state.open();

        for action in &actions {
            if apply(&mut state, action).is_some() {
                break;
            }
            match state.focus().index() {
                Some(i) => prop_assert!(i < state.visible_len()),
                None => prop_assert_eq!(state.visible_len(), 0),
            }
        }
    }
}
