//! Action creators.
//!
//! This is the only place todo ids are minted. The generator is injected, so
//! the reducers never touch a counter and tests can script the ids.

use crate::types::{TodoAction, TodoId, VisibilityFilter};
use flow_core::environment::{IdGenerator, SequentialIdGenerator};

/// Builds [`TodoAction`]s, assigning ids to new todos
///
/// # Example
///
/// ```
/// use todo::{TodoActions, TodoAction, TodoId};
///
/// let actions = TodoActions::default();
///
/// assert_eq!(
///     actions.add_todo("Learn Redux"),
///     TodoAction::AddTodo { id: TodoId::new(0), text: "Learn Redux".to_string() },
/// );
/// assert_eq!(
///     actions.add_todo("Go Shopping"),
///     TodoAction::AddTodo { id: TodoId::new(1), text: "Go Shopping".to_string() },
/// );
/// ```
#[derive(Debug)]
pub struct TodoActions<G = SequentialIdGenerator> {
    ids: G,
}

impl<G: IdGenerator> TodoActions<G> {
    /// Creates action creators drawing ids from `ids`
    #[must_use]
    pub const fn new(ids: G) -> Self {
        Self { ids }
    }

    /// `ADD_TODO` with a freshly minted id
    pub fn add_todo(&self, text: impl Into<String>) -> TodoAction {
        let id = TodoId::new(self.ids.next_id());
        tracing::trace!(%id, "Minted todo id");
        TodoAction::AddTodo {
            id,
            text: text.into(),
        }
    }

    /// `TOGGLE_TODO` for `id`
    #[must_use]
    pub const fn toggle_todo(&self, id: TodoId) -> TodoAction {
        TodoAction::ToggleTodo { id }
    }

    /// `SET_VISIBILITY_FILTER` to `filter`
    pub fn set_visibility_filter(&self, filter: impl Into<VisibilityFilter>) -> TodoAction {
        TodoAction::SetVisibilityFilter {
            filter: filter.into(),
        }
    }
}

impl Default for TodoActions<SequentialIdGenerator> {
    fn default() -> Self {
        Self::new(SequentialIdGenerator::new())
    }
}
