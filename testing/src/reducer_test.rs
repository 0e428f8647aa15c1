//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use flow_core::reducer::Reducer;

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Type alias for transition assertion functions (prior state, next state)
type TransitionAssertion<S> = Box<dyn FnOnce(&S, &S)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// The reducer runs once per `when_action`, in order, each action seeing the
/// state the previous one produced. State assertions see the final state;
/// transition assertions see the given state and the final state.
///
/// # Example
///
/// ```
/// use flow_core::Reducer;
/// use flow_testing::ReducerTest;
///
/// struct Add;
///
/// impl Reducer for Add {
///     type State = i32;
///     type Action = i32;
///     type Environment = ();
///
///     fn reduce(&self, state: &i32, action: &i32, _env: &()) -> i32 {
///         state + action
///     }
/// }
///
/// ReducerTest::new(Add)
///     .with_env(())
///     .given_state(1)
///     .when_action(2)
///     .when_action(3)
///     .then_state(|state| assert_eq!(*state, 6))
///     .then_transition(|before, after| assert!(after > before))
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    initial_state: Option<S>,
    actions: Vec<A>,
    state_assertions: Vec<StateAssertion<S>>,
    transition_assertions: Vec<TransitionAssertion<S>>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            initial_state: None,
            actions: Vec::new(),
            state_assertions: Vec::new(),
            transition_assertions: Vec::new(),
        }
    }

    /// Set the environment for the test
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// Set the initial state (Given)
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Add an action to reduce (When)
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.actions.push(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S) + 'static,
    {
        self.state_assertions.push(Box::new(assertion));
        self
    }

    /// Add an assertion relating the given state to the resulting state (Then)
    #[must_use]
    pub fn then_transition<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&S, &S) + 'static,
    {
        self.transition_assertions.push(Box::new(assertion));
        self
    }

    /// Run the test and execute all assertions
    ///
    /// # Panics
    ///
    /// Panics if initial state, action, or environment is not set,
    /// or if any assertions fail.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self) {
        let initial = self
            .initial_state
            .expect("Initial state must be set with given_state()");

        let (first, rest) = self
            .actions
            .split_first()
            .expect("At least one action must be set with when_action()");

        let env = self
            .environment
            .expect("Environment must be set with with_env()");

        let mut state = self.reducer.reduce(&initial, first, &env);
        for action in rest {
            state = self.reducer.reduce(&state, action, &env);
        }

        for assertion in self.state_assertions {
            assertion(&state);
        }

        for assertion in self.transition_assertions {
            assertion(&initial, &state);
        }
    }
}

/// Helper assertions for state transitions
pub mod assertions {
    use std::fmt::Debug;
    use std::sync::Arc;

    /// Assert that a transition left the state equal in value
    ///
    /// # Panics
    ///
    /// Panics if `before != after`.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_unchanged<S: PartialEq + Debug>(before: &S, after: &S) {
        assert_eq!(before, after, "Expected state to be unchanged");
    }

    /// Assert that two handles point at the same allocation
    ///
    /// # Panics
    ///
    /// Panics if the `Arc`s are distinct allocations.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_same_allocation<T: ?Sized + Debug>(expected: &Arc<T>, actual: &Arc<T>) {
        assert!(
            Arc::ptr_eq(expected, actual),
            "Expected the same allocation, but {actual:?} is a different allocation than {expected:?}"
        );
    }

    /// Assert that two handles point at different allocations
    ///
    /// # Panics
    ///
    /// Panics if both `Arc`s share one allocation.
    #[allow(clippy::panic)] // Test assertion
    pub fn assert_new_allocation<T: ?Sized + Debug>(prior: &Arc<T>, next: &Arc<T>) {
        assert!(
            !Arc::ptr_eq(prior, next),
            "Expected a new allocation, but {next:?} still shares the prior one"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct TestState {
        count: i32,
        tags: Arc<Vec<String>>,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
        Tag(String),
        Nothing,
    }

    struct TestReducer;

    struct TestEnv;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;

        fn reduce(&self, state: &TestState, action: &TestAction, _env: &TestEnv) -> TestState {
            match action {
                TestAction::Increment => TestState {
                    count: state.count + 1,
                    tags: Arc::clone(&state.tags),
                },
                TestAction::Decrement => TestState {
                    count: state.count - 1,
                    tags: Arc::clone(&state.tags),
                },
                TestAction::Tag(tag) => {
                    let mut tags = (*state.tags).clone();
                    tags.push(tag.clone());
                    TestState {
                        count: state.count,
                        tags: Arc::new(tags),
                    }
                },
                TestAction::Nothing => state.clone(),
            }
        }
    }

    fn empty() -> TestState {
        TestState {
            count: 0,
            tags: Arc::new(Vec::new()),
        }
    }

    #[test]
    fn test_reducer_test_increment() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(empty())
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .run();
    }

    #[test]
    fn test_reducer_test_sequence() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(TestState {
                count: 5,
                ..empty()
            })
            .when_action(TestAction::Decrement)
            .when_action(TestAction::Decrement)
            .when_action(TestAction::Tag("low".to_string()))
            .then_state(|state| {
                assert_eq!(state.count, 3);
                assert_eq!(*state.tags, vec!["low".to_string()]);
            })
            .then_transition(|before, after| {
                assert_eq!(before.count, 5);
                assert!(before.tags.is_empty());
                assertions::assert_new_allocation(&before.tags, &after.tags);
            })
            .run();
    }

    #[test]
    fn test_unchanged_transition() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(empty())
            .when_action(TestAction::Nothing)
            .then_transition(|before, after| {
                assertions::assert_unchanged(before, after);
                assertions::assert_same_allocation(&before.tags, &after.tags);
            })
            .run();
    }

    #[test]
    #[should_panic(expected = "Expected state to be unchanged")]
    fn test_assert_unchanged_detects_change() {
        assertions::assert_unchanged(&1, &2);
    }

    #[test]
    #[should_panic(expected = "Expected the same allocation")]
    fn test_assert_same_allocation_detects_copy() {
        let a = Arc::new(1);
        let b = Arc::new(1);
        assertions::assert_same_allocation(&a, &b);
    }

    #[test]
    #[should_panic(expected = "At least one action")]
    fn test_run_without_action_panics() {
        ReducerTest::new(TestReducer)
            .with_env(TestEnv)
            .given_state(empty())
            .run();
    }
}
