//! # Flow Runtime
//!
//! Runtime for unidirectional state management.
//!
//! This crate provides the Store: the dispatcher that owns the current state
//! snapshot, feeds actions through the root reducer one at a time, and lets
//! callers read the latest snapshot after each dispatch.
//!
//! ## Core Components
//!
//! - **Store**: Holds state, serializes transitions, exposes reads
//! - **`StoreConfig`**: Labels and logging switches for a store
//! - **`StoreError`**: Why a dispatch was refused
//!
//! ## Example
//!
//! ```ignore
//! use flow_runtime::Store;
//!
//! let store = Store::new(initial_state, root_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use flow_core::reducer::Reducer;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Metric names recorded by the store
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Reducers are total, so the only way a dispatch fails is the store
    /// refusing it.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Store is shutting down and not accepting new actions
        ///
        /// This error is returned when `send()` is called after `shutdown()`.
        #[error("Store is shutting down")]
        ShutdownInProgress,
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use flow_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_label("todos")
///     .with_log_snapshots(true);
///
/// assert_eq!(config.label, "todos");
/// assert!(config.log_snapshots);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Name attached to every log line from this store
    pub label: String,
    /// Emit the full state at `trace` level after each dispatch
    pub log_snapshots: bool,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    #[must_use]
    pub fn new(label: impl Into<String>, log_snapshots: bool) -> Self {
        Self {
            label: label.into(),
            log_snapshots,
        }
    }

    /// Set the store label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Toggle snapshot logging
    #[must_use]
    pub const fn with_log_snapshots(mut self, enabled: bool) -> Self {
        self.log_snapshots = enabled;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            label: "store".to_string(),
            log_snapshots: false,
        }
    }
}

/// Store implementation
pub mod store {
    use super::{Arc, AtomicBool, AtomicU64, Ordering, Reducer, RwLock, StoreConfig, StoreError};

    /// The Store - runtime coordinator for a root reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`; replaced wholesale on every transition)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    ///
    /// Cloning a Store yields another handle to the same state.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(AppState::default(), AppReducer::new(), ());
    ///
    /// store.send(TodoAction::ToggleTodo { id: TodoId::new(0) }).await?;
    /// let snapshot = store.snapshot().await;
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: Arc<R>,
        environment: Arc<E>,
        config: Arc<StoreConfig>,
        shutdown: Arc<AtomicBool>,
        dispatched: Arc<AtomicU64>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: std::fmt::Debug,
        S: std::fmt::Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with a custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer: Arc::new(reducer),
                environment: Arc::new(environment),
                config: Arc::new(config),
                shutdown: Arc::new(AtomicBool::new(false)),
                dispatched: Arc::new(AtomicU64::new(0)),
            }
        }

        /// The configuration this store was built with
        #[must_use]
        pub fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Send an action to the store
        ///
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (prior state, action, environment)
        /// 3. Replaces the held state with the returned value
        ///
        /// Concurrent `send()` calls serialize on the lock: exactly one
        /// action is reduced at a time, and each produces exactly one new
        /// snapshot before the next is accepted.
        ///
        /// The shutdown flag is checked once the write lock is held, so a
        /// `send()` still waiting on the lock when [`Store::shutdown`] runs
        /// is rejected.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::ShutdownInProgress`] if the store is shutting down.
        ///
        /// # Example
        ///
        /// ```ignore
        /// store.send(TodoAction::AddTodo { id, text }).await?;
        /// ```
        #[tracing::instrument(skip(self), fields(store = %self.config.label), name = "store_send")]
        pub async fn send(&self, action: A) -> Result<(), StoreError> {
            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");

            if self.shutdown.load(Ordering::Acquire) {
                tracing::warn!("Rejected action: store is shutting down");
                metrics::counter!(crate::metrics::REJECTED_ACTIONS_TOTAL).increment(1);
                return Err(StoreError::ShutdownInProgress);
            }

            let start = std::time::Instant::now();
            let next = self.reducer.reduce(&*state, &action, &*self.environment);
            metrics::histogram!(crate::metrics::REDUCER_DURATION_SECONDS)
                .record(start.elapsed().as_secs_f64());

            *state = next;

            let sequence = self.dispatched.fetch_add(1, Ordering::AcqRel) + 1;
            metrics::counter!(crate::metrics::ACTIONS_TOTAL).increment(1);
            tracing::debug!(sequence, "Action processed");

            if self.config.log_snapshots {
                tracing::trace!(sequence, state = ?*state, "State after dispatch");
            }

            Ok(())
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released promptly:
        ///
        /// ```ignore
        /// let count = store.state(|s| s.todos.len()).await;
        /// ```
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&*state)
        }

        /// Clone out the current snapshot
        pub async fn snapshot(&self) -> S
        where
            S: Clone,
        {
            self.state(S::clone).await
        }

        /// Number of actions this store has accepted
        #[must_use]
        pub fn dispatched(&self) -> u64 {
            self.dispatched.load(Ordering::Acquire)
        }

        /// Stop accepting actions
        ///
        /// Reads keep working. Every later `send()` returns
        /// [`StoreError::ShutdownInProgress`].
        pub fn shutdown(&self) {
            if !self.shutdown.swap(true, Ordering::AcqRel) {
                tracing::info!(
                    store = %self.config.label,
                    dispatched = self.dispatched(),
                    "Store shut down"
                );
            }
        }

        /// Whether [`Store::shutdown`] has been called
        #[must_use]
        pub fn is_shut_down(&self) -> bool {
            self.shutdown.load(Ordering::Acquire)
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: Arc::clone(&self.reducer),
                environment: Arc::clone(&self.environment),
                config: Arc::clone(&self.config),
                shutdown: Arc::clone(&self.shutdown),
                dispatched: Arc::clone(&self.dispatched),
            }
        }
    }

}

// Re-export for convenience
pub use store::Store;
