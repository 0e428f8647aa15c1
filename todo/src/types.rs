//! Domain types for the todo application.
//!
//! State is built from cheaply clonable, immutable pieces: every todo lives
//! behind an `Arc`, and the list itself is an `Arc` slice. A transition that
//! leaves a todo alone hands back the same allocation, so callers can detect
//! "nothing changed" with a pointer comparison instead of a deep compare.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Unique identifier for a todo item
///
/// Assigned by the caller (see [`TodoActions`](crate::actions::TodoActions)),
/// monotonically increasing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// What needs doing
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl Todo {
    /// Creates a new, not yet completed todo
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Returns a copy with `completed` flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Ordered, immutable list of todos
///
/// Insertion order is display order. Cloning is an `Arc` bump.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList(Arc<[Arc<Todo>]>);

impl TodoList {
    /// Creates an empty list
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::from(Vec::new()))
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Arc<Todo>> {
        self.0.iter().find(|todo| todo.id == id)
    }

    /// Checks if a todo with this ID exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.0.iter().filter(|todo| todo.completed).count()
    }

    /// Returns the number of todos still open
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.0.len() - self.completed_count()
    }

    /// Returns a new list with `todo` appended; `self` is untouched
    #[must_use]
    pub fn appended(&self, todo: Arc<Todo>) -> Self {
        self.0.iter().cloned().chain(std::iter::once(todo)).collect()
    }

    /// True when both lists are the same allocation
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// True when both lists hold the very same todo allocations, in order
    ///
    /// Weaker than [`TodoList::ptr_eq`]: the list containers may differ.
    #[must_use]
    pub fn shares_entities_with(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self.0.iter().zip(other.0.iter()).all(|(a, b)| Arc::ptr_eq(a, b))
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for TodoList {
    type Target = [Arc<Todo>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Arc<Todo>;
    type IntoIter = std::slice::Iter<'a, Arc<Todo>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Arc<Todo>> for TodoList {
    fn from_iter<I: IntoIterator<Item = Arc<Todo>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<Todo> for TodoList {
    fn from_iter<I: IntoIterator<Item = Todo>>(iter: I) -> Self {
        iter.into_iter().map(Arc::new).collect()
    }
}

/// Which todos the view should show
///
/// Any string converts into a filter. Strings other than the three known
/// tags are kept verbatim in [`VisibilityFilter::Other`] and select
/// everything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VisibilityFilter {
    /// Every todo
    #[default]
    ShowAll,
    /// Only todos not yet completed
    ShowActive,
    /// Only completed todos
    ShowCompleted,
    /// An unrecognized filter value, stored as given
    Other(String),
}

impl VisibilityFilter {
    /// Wire tag for [`VisibilityFilter::ShowAll`]
    pub const SHOW_ALL: &'static str = "SHOW_ALL";
    /// Wire tag for [`VisibilityFilter::ShowActive`]
    pub const SHOW_ACTIVE: &'static str = "SHOW_ACTIVE";
    /// Wire tag for [`VisibilityFilter::ShowCompleted`]
    pub const SHOW_COMPLETED: &'static str = "SHOW_COMPLETED";

    /// The string form of this filter
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ShowAll => Self::SHOW_ALL,
            Self::ShowActive => Self::SHOW_ACTIVE,
            Self::ShowCompleted => Self::SHOW_COMPLETED,
            Self::Other(value) => value,
        }
    }
}

impl From<String> for VisibilityFilter {
    fn from(value: String) -> Self {
        match value.as_str() {
            Self::SHOW_ALL => Self::ShowAll,
            Self::SHOW_ACTIVE => Self::ShowActive,
            Self::SHOW_COMPLETED => Self::ShowCompleted,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for VisibilityFilter {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<VisibilityFilter> for String {
    fn from(filter: VisibilityFilter) -> Self {
        match filter {
            VisibilityFilter::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for VisibilityFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application state: the todo list plus the active filter
///
/// Cloning is cheap; a clone shares every todo with the original.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// All todos, in insertion order
    pub todos: TodoList,
    /// Filter applied by the view
    pub visibility_filter: VisibilityFilter,
}

impl AppState {
    /// Creates an empty state showing all todos
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The todos the current filter selects
    #[must_use]
    pub fn visible_todos(&self) -> TodoList {
        crate::selectors::visible_todos(&self.todos, &self.visibility_filter)
    }
}

/// Errors from decoding action descriptors
#[derive(Error, Debug)]
pub enum ActionError {
    /// The payload was not a valid action descriptor
    #[error("Failed to decode action: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Actions that can change the application state
///
/// Serialized as a descriptor tagged on `type`, e.g.
/// `{"type":"ADD_TODO","id":0,"text":"Learn Redux"}`. A descriptor with any
/// other `type` decodes to [`TodoAction::Other`], which every reducer treats
/// as a no-op.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append a new todo
    AddTodo {
        /// Caller-assigned id, unique within the list
        id: TodoId,
        /// What needs doing
        text: String,
    },

    /// Flip `completed` on the todo with this id
    ToggleTodo {
        /// Todo to toggle
        id: TodoId,
    },

    /// Replace the visibility filter
    SetVisibilityFilter {
        /// New filter, not validated
        filter: VisibilityFilter,
    },

    /// Any action type this application does not know about
    #[serde(other)]
    Other,
}

impl TodoAction {
    /// The descriptor tag for this action
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddTodo { .. } => "ADD_TODO",
            Self::ToggleTodo { .. } => "TOGGLE_TODO",
            Self::SetVisibilityFilter { .. } => "SET_VISIBILITY_FILTER",
            Self::Other => "OTHER",
        }
    }

    /// Decode an action descriptor from JSON
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Decode`] if `json` is not an object with a
    /// string `type`, or a known type is missing its payload fields.
    pub fn from_json(json: &str) -> Result<Self, ActionError> {
        Ok(serde_json::from_str(json)?)
    }
}
