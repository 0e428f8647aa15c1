//! Metric names and descriptions recorded by the [`Store`](crate::Store).
//!
//! Metrics go through the `metrics` facade. Nothing is exported unless the
//! host process installs a recorder; until then every call is a no-op.

use metrics::{describe_counter, describe_histogram};

/// Total number of actions accepted by a store
pub const ACTIONS_TOTAL: &str = "store.actions.total";

/// Actions rejected because the store was shut down
pub const REJECTED_ACTIONS_TOTAL: &str = "store.shutdown.rejected_actions";

/// Time spent inside the reducer for one action
pub const REDUCER_DURATION_SECONDS: &str = "store.reducer.duration_seconds";

/// Register descriptions for every store metric.
///
/// Call once after installing a recorder. Safe to call more than once.
pub fn describe_store_metrics() {
    describe_counter!(ACTIONS_TOTAL, "Total number of actions dispatched to a store");
    describe_counter!(
        REJECTED_ACTIONS_TOTAL,
        "Total number of actions rejected after shutdown"
    );
    describe_histogram!(
        REDUCER_DURATION_SECONDS,
        "Time taken by the root reducer to compute the next state"
    );
}
