//! Todo demo binary
//!
//! Dispatches a short script of actions through a store and prints the
//! state after each one.
//!
//! Environment (a `.env` file is honored):
//! - `RUST_LOG`: tracing filter, defaults to `todo=debug,flow_runtime=debug`
//! - `TODO_LOG_SNAPSHOTS`: `1`/`true` to trace every new state

use anyhow::Context;
use flow_runtime::{Store, StoreConfig};
use todo::{AppReducer, AppState, TodoAction, TodoActions, TodoId, VisibilityFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type TodoStore = Store<AppState, TodoAction, (), AppReducer>;

fn snapshot_logging_enabled() -> bool {
    std::env::var("TODO_LOG_SNAPSHOTS")
        .map(|value| matches!(value.trim(), "1" | "true" | "TRUE" | "yes"))
        .unwrap_or(false)
}

async fn print_state(store: &TodoStore) -> anyhow::Result<()> {
    let state = store.snapshot().await;
    let json = serde_json::to_string_pretty(&state).context("serializing state")?;
    println!("CURRENT STATE:\n{json}");
    println!("--------------");
    Ok(())
}

async fn dispatch(store: &TodoStore, action: TodoAction) -> anyhow::Result<()> {
    println!("Dispatching {}", action.kind());
    store
        .send(action)
        .await
        .context("store rejected action")?;
    print_state(store).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=debug,flow_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    flow_runtime::metrics::describe_store_metrics();

    let config = StoreConfig::default()
        .with_label("todos")
        .with_log_snapshots(snapshot_logging_enabled());
    let store = Store::with_config(AppState::new(), AppReducer::new(), (), config);
    let actions = TodoActions::default();

    println!("INITIAL STATE:");
    print_state(&store).await?;

    dispatch(&store, actions.add_todo("Learn Redux")).await?;

    // Id 1 does not exist yet, so nothing changes
    dispatch(&store, actions.toggle_todo(TodoId::new(1))).await?;

    dispatch(&store, actions.add_todo("Go Shopping")).await?;
    dispatch(&store, actions.toggle_todo(TodoId::new(1))).await?;

    // Descriptors can also arrive as JSON
    let from_wire =
        TodoAction::from_json(r#"{"type":"SET_VISIBILITY_FILTER","filter":"SHOW_COMPLETED"}"#)
            .context("decoding action")?;
    dispatch(&store, from_wire).await?;

    let (filter, visible) = store
        .state(|s| (s.visibility_filter.clone(), s.visible_todos()))
        .await;
    println!("Visible with {filter}:");
    for todo in &visible {
        let status = if todo.completed { "✓" } else { " " };
        println!("  [{status}] {} (#{})", todo.text, todo.id);
    }

    dispatch(&store, actions.set_visibility_filter(VisibilityFilter::ShowAll)).await?;

    store.shutdown();
    println!("Dispatched {} actions", store.dispatched());
    Ok(())
}
