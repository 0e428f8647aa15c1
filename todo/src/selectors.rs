//! Selectors: pure functions deriving view-ready values from state.

use crate::types::{TodoList, VisibilityFilter};

/// The todos `filter` selects, in list order
///
/// `ShowAll` and unrecognized filters return `todos` itself (same
/// allocation). The other filters return a new list sharing the selected
/// todos with the input.
#[must_use]
pub fn visible_todos(todos: &TodoList, filter: &VisibilityFilter) -> TodoList {
    match filter {
        VisibilityFilter::ShowAll | VisibilityFilter::Other(_) => todos.clone(),
        VisibilityFilter::ShowCompleted => todos.iter().filter(|t| t.completed).cloned().collect(),
        VisibilityFilter::ShowActive => todos.iter().filter(|t| !t.completed).cloned().collect(),
    }
}
