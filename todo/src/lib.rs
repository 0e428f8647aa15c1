//! Todo list application built on unidirectional state management.
//!
//! State only changes by feeding [`TodoAction`]s through [`AppReducer`].
//! Every transition returns a new [`AppState`]; the prior one is never
//! touched, and whatever an action does not affect is shared with it.
//!
//! - [`types`]: todos, the todo list, the visibility filter, actions
//! - [`reducer`]: entity, list, filter, and root reducers
//! - [`selectors`]: deriving what the view shows
//! - [`actions`]: action creators that mint todo ids
//!
//! # Quick Start
//!
//! ```no_run
//! use flow_runtime::Store;
//! use todo::{AppReducer, AppState, TodoActions, VisibilityFilter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new(AppState::new(), AppReducer::new(), ());
//! let actions = TodoActions::default();
//!
//! // Add a todo, then complete it
//! let add = actions.add_todo("Learn Redux");
//! store.send(add).await?;
//! let id = store.state(|s| s.todos[0].id).await;
//! store.send(actions.toggle_todo(id)).await?;
//!
//! // Read state
//! store.send(actions.set_visibility_filter(VisibilityFilter::ShowCompleted)).await?;
//! let visible = store.state(AppState::visible_todos).await;
//! println!("Completed: {}", visible.len());
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod reducer;
pub mod selectors;
pub mod types;

// Re-export commonly used types
pub use actions::TodoActions;
pub use reducer::{AppReducer, TodoReducer, TodosReducer, VisibilityFilterReducer, todo_app};
pub use selectors::visible_todos;
pub use types::{ActionError, AppState, Todo, TodoAction, TodoId, TodoList, VisibilityFilter};
