//! # Flow Core
//!
//! Core traits for unidirectional state management.
//!
//! This crate provides the fundamental abstractions for building applications
//! whose state only ever changes by feeding actions through pure reducers.
//!
//! ## Core Concepts
//!
//! - **State**: Application data, held by value and replaced on every transition
//! - **Action**: An immutable, tagged description of an intended state change
//! - **Reducer**: Pure function `(&State, &Action, &Environment) → State`
//! - **Slice**: The portion of state owned by one reducer
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Unidirectional Data Flow
//! - Functional Core, Imperative Shell
//! - Slice reducers are mutually unaware of each other
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```
//! use flow_core::Reducer;
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &CounterState, action: &CounterAction, _env: &()) -> CounterState {
//!         match action {
//!             CounterAction::Increment => CounterState { count: state.count + 1 },
//!             CounterAction::Reset => CounterState::default(),
//!         }
//!     }
//! }
//!
//! let before = CounterState::default();
//! let after = CounterReducer.reduce(&before, &CounterAction::Increment, &());
//! assert_eq!(after.count, 1);
//! assert_eq!(before.count, 0);
//! ```

/// Reducer composition utilities (`combine_reducers`, `scope_reducer`)
pub mod composition;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → State`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state (or state slice) this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Contract
    ///
    /// `reduce` borrows the prior state and the action immutably and returns a
    /// new state value. It must not perform I/O, and it must be total: any
    /// action the reducer does not handle yields the prior state unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use flow_core::Reducer;
    ///
    /// enum ToggleAction {
    ///     Flip,
    ///     Ignored,
    /// }
    ///
    /// struct ToggleReducer;
    ///
    /// impl Reducer for ToggleReducer {
    ///     type State = bool;
    ///     type Action = ToggleAction;
    ///     type Environment = ();
    ///
    ///     fn reduce(&self, state: &bool, action: &ToggleAction, _env: &()) -> bool {
    ///         match action {
    ///             ToggleAction::Flip => !*state,
    ///             ToggleAction::Ignored => *state,
    ///         }
    ///     }
    /// }
    ///
    /// assert!(ToggleReducer.reduce(&false, &ToggleAction::Flip, &()));
    /// assert!(!ToggleReducer.reduce(&false, &ToggleAction::Ignored, &()));
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into the next state
        ///
        /// # Arguments
        ///
        /// - `state`: The prior state (never mutated)
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// The next state
        fn reduce(
            &self,
            state: &Self::State,
            action: &Self::Action,
            env: &Self::Environment,
        ) -> Self::State;
    }

    impl<R: Reducer + ?Sized> Reducer for Box<R> {
        type State = R::State;
        type Action = R::Action;
        type Environment = R::Environment;

        fn reduce(
            &self,
            state: &Self::State,
            action: &Self::Action,
            env: &Self::Environment,
        ) -> Self::State {
            (**self).reduce(state, action, env)
        }
    }

    impl<R: Reducer + ?Sized> Reducer for std::sync::Arc<R> {
        type State = R::State;
        type Action = R::Action;
        type Environment = R::Environment;

        fn reduce(
            &self,
            state: &Self::State,
            action: &Self::Action,
            env: &Self::Environment,
        ) -> Self::State {
            (**self).reduce(state, action, env)
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// at the boundary that needs them. Reducers themselves never own global
/// mutable state.
pub mod environment {
    use std::sync::atomic::{AtomicU64, Ordering};

    /// `IdGenerator` trait - hands out entity ids at the action-creation boundary
    ///
    /// Implementations must return strictly increasing values for the
    /// lifetime of the generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use flow_core::environment::{IdGenerator, SequentialIdGenerator};
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), 0);
    /// assert_eq!(ids.next_id(), 1);
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Return the next id
        fn next_id(&self) -> u64;
    }

    impl<G: IdGenerator + ?Sized> IdGenerator for std::sync::Arc<G> {
        fn next_id(&self) -> u64 {
            (**self).next_id()
        }
    }

    /// Production id generator: 0, 1, 2, ...
    ///
    /// Thread-safe. Each generator instance owns its own counter, so two
    /// stores never share an id sequence unless they share the generator.
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator starting at 0
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_at(0)
        }

        /// Create a generator whose first id is `first`
        #[must_use]
        pub const fn starting_at(first: u64) -> Self {
            Self {
                next: AtomicU64::new(first),
            }
        }

        /// Peek at the id the next call to [`IdGenerator::next_id`] returns
        #[must_use]
        pub fn peek(&self) -> u64 {
            self.next.load(Ordering::Acquire)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> u64 {
            self.next.fetch_add(1, Ordering::AcqRel)
        }
    }
}

// Re-export commonly used types
pub use environment::{IdGenerator, SequentialIdGenerator};
pub use reducer::Reducer;
