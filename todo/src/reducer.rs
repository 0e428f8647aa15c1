//! Reducer logic for the todo application.
//!
//! Three slice reducers and one root reducer:
//!
//! - [`todo`] / [`TodoReducer`]: a single todo entity
//! - [`todos`] / [`TodosReducer`]: the todo list
//! - [`visibility_filter`] / [`VisibilityFilterReducer`]: the active filter
//! - [`todo_app`] / [`AppReducer`]: maps each `AppState` field to its slice reducer
//!
//! All of them are total: any action they do not handle returns the prior
//! value, sharing its allocation.

use crate::types::{AppState, Todo, TodoAction, TodoList, VisibilityFilter};
use flow_core::reducer::Reducer;
use std::sync::Arc;

/// Reduce a single todo entity
///
/// - `AddTodo` ignores `state` and builds a fresh, not yet completed todo.
/// - `ToggleTodo` returns `state` untouched (same `Arc`) unless its id
///   matches, in which case it returns a copy with `completed` flipped.
/// - Anything else returns `state` untouched.
#[must_use]
pub fn todo(state: Option<&Arc<Todo>>, action: &TodoAction) -> Option<Arc<Todo>> {
    match action {
        TodoAction::AddTodo { id, text } => Some(Arc::new(Todo::new(*id, text.clone()))),
        TodoAction::ToggleTodo { id } => state.map(|todo| {
            if todo.id == *id {
                Arc::new(todo.toggled())
            } else {
                Arc::clone(todo)
            }
        }),
        TodoAction::SetVisibilityFilter { .. } | TodoAction::Other => state.cloned(),
    }
}

/// Reduce the todo list
///
/// - `AddTodo` appends the new todo. If the id is already taken the action
///   is ignored and the prior list is returned as is.
/// - `ToggleTodo` runs [`todo`] over every element. Untouched todos keep
///   their allocation.
/// - Anything else returns the prior list (same allocation).
#[must_use]
pub fn todos(state: &TodoList, action: &TodoAction) -> TodoList {
    match action {
        TodoAction::AddTodo { id, .. } => {
            if state.contains(*id) {
                return state.clone();
            }
            todo(None, action).map_or_else(|| state.clone(), |added| state.appended(added))
        },
        TodoAction::ToggleTodo { .. } => state
            .iter()
            .filter_map(|existing| todo(Some(existing), action))
            .collect(),
        TodoAction::SetVisibilityFilter { .. } | TodoAction::Other => state.clone(),
    }
}

/// Reduce the visibility filter
///
/// `SetVisibilityFilter` replaces the filter verbatim, unknown values
/// included. Anything else keeps the prior filter.
///
/// The filter slice is compared by value, not by reference: keeping an
/// `Other` filter clones its `String`.
#[must_use]
pub fn visibility_filter(state: &VisibilityFilter, action: &TodoAction) -> VisibilityFilter {
    match action {
        TodoAction::SetVisibilityFilter { filter } => filter.clone(),
        TodoAction::AddTodo { .. } | TodoAction::ToggleTodo { .. } | TodoAction::Other => {
            state.clone()
        },
    }
}

/// Reduce the whole application state
///
/// Shorthand for [`AppReducer`] with the default slice reducers.
#[must_use]
pub fn todo_app(state: &AppState, action: &TodoAction) -> AppState {
    AppReducer::new().reduce(state, action, &())
}

/// Reducer for a single todo entity. See [`todo`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = Option<Arc<Todo>>;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &Self::State,
        action: &Self::Action,
        _env: &Self::Environment,
    ) -> Self::State {
        todo(state.as_ref(), action)
    }
}

/// Reducer for the todo list. See [`todos`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TodosReducer;

impl Reducer for TodosReducer {
    type State = TodoList;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &Self::State,
        action: &Self::Action,
        _env: &Self::Environment,
    ) -> Self::State {
        todos(state, action)
    }
}

/// Reducer for the visibility filter. See [`visibility_filter`].
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityFilterReducer;

impl Reducer for VisibilityFilterReducer {
    type State = VisibilityFilter;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &Self::State,
        action: &Self::Action,
        _env: &Self::Environment,
    ) -> Self::State {
        visibility_filter(state, action)
    }
}

/// Root reducer for [`AppState`]
///
/// Each field of `AppState` is owned by exactly one slice reducer, which
/// sees only its own slice and the full action.
#[derive(Clone, Copy, Debug, Default)]
pub struct AppReducer {
    todos: TodosReducer,
    visibility_filter: VisibilityFilterReducer,
}

impl AppReducer {
    /// Creates the root reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: TodosReducer,
            visibility_filter: VisibilityFilterReducer,
        }
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(
        &self,
        state: &Self::State,
        action: &Self::Action,
        env: &Self::Environment,
    ) -> Self::State {
        AppState {
            todos: self.todos.reduce(&state.todos, action, env),
            visibility_filter: self
                .visibility_filter
                .reduce(&state.visibility_filter, action, env),
        }
    }
}
