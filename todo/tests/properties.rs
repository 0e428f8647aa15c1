//! Property tests for the reducers and the selector

use flow_core::Reducer;
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use todo::{
    AppReducer, AppState, Todo, TodoAction, TodoId, TodoList, VisibilityFilter, todo_app,
    visible_todos,
};
use todo::reducer::todos;

fn arb_filter() -> impl Strategy<Value = VisibilityFilter> {
    prop_oneof![
        Just(VisibilityFilter::ShowAll),
        Just(VisibilityFilter::ShowActive),
        Just(VisibilityFilter::ShowCompleted),
        "[A-Z_]{0,12}".prop_map(VisibilityFilter::from),
    ]
}

fn arb_action() -> impl Strategy<Value = TodoAction> {
    prop_oneof![
        (0u64..16, "[a-z ]{0,10}").prop_map(|(id, text)| TodoAction::AddTodo {
            id: TodoId::new(id),
            text,
        }),
        (0u64..16).prop_map(|id| TodoAction::ToggleTodo { id: TodoId::new(id) }),
        arb_filter().prop_map(|filter| TodoAction::SetVisibilityFilter { filter }),
        Just(TodoAction::Other),
    ]
}

fn arb_state() -> impl Strategy<Value = AppState> {
    prop::collection::vec(arb_action(), 0..32)
        .prop_map(|actions| actions.iter().fold(AppState::new(), |s, a| todo_app(&s, a)))
}

fn arb_todos() -> impl Strategy<Value = TodoList> {
    prop::collection::vec(any::<bool>(), 0..24).prop_map(|flags| {
        flags
            .into_iter()
            .enumerate()
            .map(|(i, completed)| Todo {
                id: TodoId::new(i as u64),
                text: format!("todo {i}"),
                completed,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn unknown_action_is_identity(state in arb_state()) {
        let next = AppReducer::new().reduce(&state, &TodoAction::Other, &());

        prop_assert_eq!(&next, &state);
        prop_assert!(next.todos.ptr_eq(&state.todos));
    }

    #[test]
    fn toggling_absent_id_keeps_entities(todos_in in arb_todos(), offset in 0u64..100) {
        let absent = TodoId::new(todos_in.len() as u64 + offset);
        let next = todos(&todos_in, &TodoAction::ToggleTodo { id: absent });

        prop_assert_eq!(&next, &todos_in);
        prop_assert!(next.shares_entities_with(&todos_in));
    }

    #[test]
    fn toggle_flips_exactly_one(todos_in in arb_todos(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!todos_in.is_empty());
        let target = pick.index(todos_in.len());
        let id = todos_in[target].id;

        let next = todos(&todos_in, &TodoAction::ToggleTodo { id });

        prop_assert_eq!(next.len(), todos_in.len());
        for (i, (before, after)) in todos_in.iter().zip(next.iter()).enumerate() {
            if i == target {
                prop_assert_eq!(after.completed, !before.completed);
                prop_assert!(!Arc::ptr_eq(before, after));
            } else {
                prop_assert!(Arc::ptr_eq(before, after));
            }
        }
    }

    #[test]
    fn filter_round_trips_any_string(value in ".*") {
        let state = todo_app(
            &AppState::new(),
            &TodoAction::SetVisibilityFilter { filter: VisibilityFilter::from(value.as_str()) },
        );

        prop_assert_eq!(state.visibility_filter.as_str(), value.as_str());
        prop_assert_eq!(String::from(state.visibility_filter), value);
    }

    #[test]
    fn selector_partitions_list(todos_in in arb_todos()) {
        let completed = visible_todos(&todos_in, &VisibilityFilter::ShowCompleted);
        let active = visible_todos(&todos_in, &VisibilityFilter::ShowActive);

        prop_assert!(completed.iter().all(|t| t.completed));
        prop_assert!(active.iter().all(|t| !t.completed));
        prop_assert_eq!(completed.len() + active.len(), todos_in.len());

        // Order preserved: ids strictly increase in both subsequences
        prop_assert!(completed.windows(2).all(|w| w[0].id < w[1].id));
        prop_assert!(active.windows(2).all(|w| w[0].id < w[1].id));

        prop_assert!(visible_todos(&todos_in, &VisibilityFilter::ShowAll).ptr_eq(&todos_in));
    }

    #[test]
    fn ids_stay_unique(state in arb_state()) {
        let ids: HashSet<TodoId> = state.todos.iter().map(|t| t.id).collect();
        prop_assert_eq!(ids.len(), state.todos.len());
    }

    #[test]
    fn prior_state_never_changes(state in arb_state(), action in arb_action()) {
        let copy = state.clone();
        let json_before = serde_json::to_string(&state).ok();

        let _next = todo_app(&state, &action);

        prop_assert_eq!(&state, &copy);
        prop_assert_eq!(serde_json::to_string(&state).ok(), json_before);
    }
}
