//! Domain state for the task-list client.
//!
//! Everything here is plain in-memory data with no browser dependency, so
//! the web front end and the native test suite share the same logic.

pub mod collection;
pub mod config;
pub mod lifetime;
pub mod reconcile;
pub mod remote;
pub mod seed;
pub mod task;
pub mod view;

pub use collection::TaskList;
pub use config::AppConfig;
pub use reconcile::{
  ReconcileSummary,
  reconcile
};
pub use remote::FetchError;
pub use task::{
  Task,
  TaskId
};
pub use view::{
  FETCH_FAILED_NOTICE,
  FullListState,
  SyncStatus,
  ViewState
};
