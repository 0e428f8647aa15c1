//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Run multiple reducers over the same state/action, in order
//! - **`scope_reducer`**: Focus a reducer on one slice of a larger state
//!
//! Slice reducers stay unaware of each other. Adding a new slice means adding
//! a new scoped reducer; existing ones never change.
//!
//! # Examples
//!
//! ## Scoping Slice Reducers
//!
//! ```
//! use flow_core::Reducer;
//! use flow_core::composition::{combine_reducers, scope_reducer};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct AppState {
//!     count: i32,
//!     name: String,
//! }
//!
//! enum AppAction {
//!     Increment,
//!     Rename(String),
//! }
//!
//! struct CountReducer;
//! struct NameReducer;
//!
//! impl Reducer for CountReducer {
//!     type State = i32;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &i32, action: &AppAction, _env: &()) -> i32 {
//!         match action {
//!             AppAction::Increment => state + 1,
//!             AppAction::Rename(_) => *state,
//!         }
//!     }
//! }
//!
//! impl Reducer for NameReducer {
//!     type State = String;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &String, action: &AppAction, _env: &()) -> String {
//!         match action {
//!             AppAction::Rename(name) => name.clone(),
//!             AppAction::Increment => state.clone(),
//!         }
//!     }
//! }
//!
//! let app = combine_reducers::<AppState, AppAction, ()>(vec![
//!     Box::new(scope_reducer(
//!         CountReducer,
//!         |s: &AppState| &s.count,
//!         |s: &AppState, count| AppState { count, ..s.clone() },
//!     )),
//!     Box::new(scope_reducer(
//!         NameReducer,
//!         |s: &AppState| &s.name,
//!         |s: &AppState, name| AppState { name, ..s.clone() },
//!     )),
//! ]);
//!
//! let state = app.reduce(&AppState::default(), &AppAction::Increment, &());
//! let state = app.reduce(&state, &AppAction::Rename("flow".into()), &());
//! assert_eq!(state, AppState { count: 1, name: "flow".into() });
//! ```

use crate::reducer::Reducer;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer sees the state produced by the one before it, in the order
/// given. With no reducers the prior state is returned as a clone.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
/// - `E`: The environment type
///
/// # Examples
///
/// ```
/// use flow_core::Reducer;
/// use flow_core::composition::combine_reducers;
///
/// struct AddOne;
/// struct Double;
///
/// impl Reducer for AddOne {
///     type State = i32;
///     type Action = ();
///     type Environment = ();
///
///     fn reduce(&self, state: &i32, _action: &(), _env: &()) -> i32 {
///         state + 1
///     }
/// }
///
/// impl Reducer for Double {
///     type State = i32;
///     type Action = ();
///     type Environment = ();
///
///     fn reduce(&self, state: &i32, _action: &(), _env: &()) -> i32 {
///         state * 2
///     }
/// }
///
/// let combined = combine_reducers::<i32, (), ()>(vec![Box::new(AddOne), Box::new(Double)]);
/// assert_eq!(combined.reduce(&3, &(), &()), 8);
/// ```
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>>,
) -> CombinedReducer<S, A, E>
where
    S: Clone + 'static,
    A: 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: Clone + 'static,
    A: 'static,
    E: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>>,
}

impl<S, A, E> CombinedReducer<S, A, E>
where
    S: Clone + 'static,
    A: 'static,
    E: 'static,
{
    /// Number of reducers in the chain
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Whether the chain is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: Clone + 'static,
    A: 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &Self::State,
        action: &Self::Action,
        env: &Self::Environment,
    ) -> Self::State {
        let mut reducers = self.reducers.iter();

        let Some(first) = reducers.next() else {
            return state.clone();
        };

        reducers.fold(first.reduce(state, action, env), |next, reducer| {
            reducer.reduce(&next, action, env)
        })
    }
}

/// Scopes a reducer to operate on one slice of a larger state.
///
/// `get_state` borrows the slice out of the parent. `set_state` builds the
/// next parent from the prior parent and the reduced slice, and must copy
/// every other slice through unchanged.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The slice type
/// - `A`: The action type
/// - `E`: The environment type
///
/// # Examples
///
/// ```
/// use flow_core::Reducer;
/// use flow_core::composition::scope_reducer;
///
/// struct Negate;
///
/// impl Reducer for Negate {
///     type State = bool;
///     type Action = ();
///     type Environment = ();
///
///     fn reduce(&self, state: &bool, _action: &(), _env: &()) -> bool {
///         !*state
///     }
/// }
///
/// #[derive(Clone, Default)]
/// struct Parent {
///     flag: bool,
///     label: String,
/// }
///
/// let scoped = scope_reducer(
///     Negate,
///     |p: &Parent| &p.flag,
///     |p: &Parent, flag| Parent { flag, ..p.clone() },
/// );
///
/// let parent = Parent { flag: false, label: "kept".into() };
/// let next = scoped.reduce(&parent, &(), &());
/// assert!(next.flag);
/// assert_eq!(next.label, "kept");
/// ```
pub fn scope_reducer<S, SubS, A, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&S, SubS) -> S,
) -> ScopedReducer<S, SubS, A, E, R>
where
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on one slice of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, E, R>
where
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&S, SubS) -> S,
    _phantom: std::marker::PhantomData<fn(&A, &E)>,
}

impl<S, SubS, A, E, R> Reducer for ScopedReducer<S, SubS, A, E, R>
where
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &Self::State,
        action: &Self::Action,
        env: &Self::Environment,
    ) -> Self::State {
        let slice = self.reducer.reduce((self.get_state)(state), action, env);
        (self.set_state)(state, slice)
    }
}
