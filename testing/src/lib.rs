//! # Flow Testing
//!
//! Testing utilities and helpers for unidirectional state management.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits
//! - A Given-When-Then builder for reducers
//! - Assertion helpers for state transitions
//! - Test tracing setup
//!
//! ## Example
//!
//! ```ignore
//! use flow_testing::{ReducerTest, assertions};
//!
//! #[test]
//! fn unknown_actions_leave_state_alone() {
//!     ReducerTest::new(AppReducer::new())
//!         .with_env(())
//!         .given_state(AppState::default())
//!         .when_action(TodoAction::Other)
//!         .then_transition(|before, after| assertions::assert_unchanged(before, after))
//!         .run();
//! }
//! ```

use flow_core::environment::{IdGenerator, SequentialIdGenerator};

/// Fluent Given-When-Then reducer tests
pub mod reducer_test;

/// Deterministic implementations of Environment traits
pub mod mocks {
    use super::{IdGenerator, SequentialIdGenerator};
    use std::collections::VecDeque;
    use std::sync::{Mutex, PoisonError};

    /// Id generator that replays a fixed script
    ///
    /// Returns the scripted ids in order. Once the script runs out it keeps
    /// counting up from one past the largest id handed out so far. Scripts may
    /// repeat ids, which is how duplicate-id handling gets exercised.
    ///
    /// # Example
    ///
    /// ```
    /// use flow_testing::mocks::ScriptedIdGenerator;
    /// use flow_core::environment::IdGenerator;
    ///
    /// let ids = ScriptedIdGenerator::new([7, 7]);
    /// assert_eq!(ids.next_id(), 7);
    /// assert_eq!(ids.next_id(), 7);
    /// assert_eq!(ids.next_id(), 8);
    /// ```
    #[derive(Debug, Default)]
    pub struct ScriptedIdGenerator {
        inner: Mutex<Script>,
    }

    #[derive(Debug, Default)]
    struct Script {
        pending: VecDeque<u64>,
        next_fallback: u64,
    }

    impl ScriptedIdGenerator {
        /// Create a generator that replays `ids`
        #[must_use]
        pub fn new(ids: impl IntoIterator<Item = u64>) -> Self {
            Self {
                inner: Mutex::new(Script {
                    pending: ids.into_iter().collect(),
                    next_fallback: 0,
                }),
            }
        }

        /// Number of scripted ids not yet handed out
        #[must_use]
        pub fn remaining(&self) -> usize {
            self.inner
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pending
                .len()
        }
    }

    impl IdGenerator for ScriptedIdGenerator {
        fn next_id(&self) -> u64 {
            let mut script = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            let id = script.pending.pop_front().unwrap_or(script.next_fallback);
            script.next_fallback = script.next_fallback.max(id.saturating_add(1));
            id
        }
    }

    /// Create the default id generator for tests (starts at 0)
    #[must_use]
    pub const fn test_ids() -> SequentialIdGenerator {
        SequentialIdGenerator::new()
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Install a `tracing` subscriber that writes through the test harness
    ///
    /// Honors `RUST_LOG`; defaults to `debug`. Calling it more than once
    /// (from several tests in one binary) is harmless.
    pub fn init_test_tracing() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use mocks::{ScriptedIdGenerator, test_ids};
pub use reducer_test::{ReducerTest, assertions};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_zero() {
        let ids = test_ids();
        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 1);
    }

    #[test]
    fn scripted_ids_replay_then_continue() {
        let ids = ScriptedIdGenerator::new([3, 1, 3]);
        assert_eq!(ids.remaining(), 3);

        let handed_out: Vec<u64> = (0..5).map(|_| ids.next_id()).collect();
        assert_eq!(handed_out, vec![3, 1, 3, 4, 5]);
        assert_eq!(ids.remaining(), 0);
    }

    #[test]
    fn empty_script_counts_from_zero() {
        let ids = ScriptedIdGenerator::default();
        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 1);
    }

    #[test]
    fn init_test_tracing_twice() {
        helpers::init_test_tracing();
        helpers::init_test_tracing();
    }
}
