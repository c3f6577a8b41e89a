//! Per-view state objects.
//!
//! Each screen owns one of these and
//! replaces it wholesale on every
//! update; nothing here is shared
//! between views.

use tracing::{
  info,
  warn
};

use crate::collection::TaskList;
use crate::reconcile::{
  ReconcileSummary,
  reconcile
};
use crate::remote::FetchError;
use crate::task::{
  Task,
  TaskId
};

pub const FETCH_FAILED_NOTICE: &str =
  "Could not load tasks from the API \
   (using local data)";

/// Task list plus add-modal visibility.
/// This is the whole home view state.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct ViewState {
  pub tasks:      TaskList,
  pub modal_open: bool
}

impl ViewState {
  pub fn seeded(tasks: TaskList) -> Self {
    Self {
      tasks,
      modal_open: false
    }
  }

  #[must_use]
  #[tracing::instrument(skip(self))]
  pub fn toggle(
    &self,
    id: TaskId
  ) -> Self {
    Self {
      tasks:      self.tasks.toggle(id),
      modal_open: self.modal_open
    }
  }

  /// Appends a task and dismisses the
  /// modal.
  #[must_use]
  #[tracing::instrument(skip(self))]
  pub fn add(&self, title: &str) -> Self {
    Self {
      tasks:      self.tasks.add(title),
      modal_open: false
    }
  }

  #[must_use]
  pub fn open_modal(&self) -> Self {
    Self {
      tasks:      self.tasks.clone(),
      modal_open: true
    }
  }

  #[must_use]
  pub fn close_modal(&self) -> Self {
    Self {
      tasks:      self.tasks.clone(),
      modal_open: false
    }
  }
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub enum SyncStatus {
  #[default]
  Idle,
  Loading,
  Synced(ReconcileSummary),
  Failed(String)
}

/// Full list view: the shared view
/// state plus the one-shot remote sync.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct FullListState {
  pub view: ViewState,
  pub sync: SyncStatus
}

impl FullListState {
  pub fn seeded(tasks: TaskList) -> Self {
    Self {
      view: ViewState::seeded(tasks),
      sync: SyncStatus::Idle
    }
  }

  pub fn tasks(&self) -> &TaskList {
    &self.view.tasks
  }

  pub fn modal_open(&self) -> bool {
    self.view.modal_open
  }

  pub fn is_loading(&self) -> bool {
    self.sync == SyncStatus::Loading
  }

  pub fn error_notice(
    &self
  ) -> Option<&str> {
    match &self.sync {
      | SyncStatus::Failed(notice) => {
        Some(notice.as_str())
      }
      | _ => None
    }
  }

  #[must_use]
  pub fn toggle(
    &self,
    id: TaskId
  ) -> Self {
    self.with_view(self.view.toggle(id))
  }

  #[must_use]
  pub fn add(&self, title: &str) -> Self {
    self.with_view(self.view.add(title))
  }

  #[must_use]
  pub fn open_modal(&self) -> Self {
    self.with_view(self.view.open_modal())
  }

  #[must_use]
  pub fn close_modal(&self) -> Self {
    self.with_view(self.view.close_modal())
  }

  #[must_use]
  pub fn begin_sync(&self) -> Self {
    info!("starting remote task sync");
    Self {
      view: self.view.clone(),
      sync: SyncStatus::Loading
    }
  }

  /// Applies the fetch outcome. Only a
  /// sync in flight accepts one; on
  /// failure the local tasks stay as
  /// they were.
  #[must_use]
  #[tracing::instrument(skip_all)]
  pub fn finish_sync(
    &self,
    outcome: Result<Vec<Task>, FetchError>
  ) -> Self {
    if !self.is_loading() {
      warn!(
        sync = ?self.sync,
        "ignoring sync result outside \
         of a running sync"
      );
      return self.clone();
    }

    match outcome {
      | Ok(remote) => {
        let (tasks, summary) =
          reconcile(&self.view.tasks, &remote);
        Self {
          view: ViewState {
            tasks,
            modal_open: self
              .view
              .modal_open
          },
          sync: SyncStatus::Synced(summary)
        }
      }
      | Err(error) => {
        warn!(%error, "remote sync failed; keeping local tasks");
        Self {
          view: self.view.clone(),
          sync: SyncStatus::Failed(
            FETCH_FAILED_NOTICE
              .to_string()
          )
        }
      }
    }
  }

  fn with_view(
    &self,
    view: ViewState
  ) -> Self {
    Self {
      view,
      sync: self.sync.clone()
    }
  }
}

#[cfg(test)]
mod view_tests {
  use pretty_assertions::assert_eq;

  use super::*;

  fn seed() -> TaskList {
    TaskList::new(vec![
      Task::new_pending(1, "A"),
      Task::new_pending(2, "B"),
    ])
  }

  #[test]
  fn add_closes_the_modal() {
    let state = ViewState::seeded(seed())
      .open_modal();
    assert!(state.modal_open);

    let state = state.add("C");
    assert!(!state.modal_open);
    assert_eq!(state.tasks.len(), 3);
    assert_eq!(
      state.tasks.as_slice()[2].id,
      3
    );
  }

  #[test]
  fn close_modal_keeps_tasks() {
    let state = ViewState::seeded(seed())
      .open_modal()
      .close_modal();
    assert!(!state.modal_open);
    assert_eq!(state.tasks, seed());
  }

  #[test]
  fn stray_sync_result_is_ignored() {
    let state =
      FullListState::seeded(seed());
    let after = state.finish_sync(Ok(
      vec![Task::new_pending(9, "late")]
    ));
    assert_eq!(after, state);
  }

  #[test]
  fn second_result_after_sync_is_ignored()
  {
    let state =
      FullListState::seeded(seed())
        .begin_sync()
        .finish_sync(Ok(vec![]));
    assert_eq!(
      state.sync,
      SyncStatus::Synced(
        ReconcileSummary::default()
      )
    );

    let again = state.finish_sync(Err(
      FetchError::Network(
        "late".to_string()
      )
    ));
    assert_eq!(again, state);
    assert!(again.error_notice().is_none());
  }

  #[test]
  fn toggle_during_sync_keeps_loading() {
    let state =
      FullListState::seeded(seed())
        .begin_sync()
        .toggle(1);
    assert!(state.is_loading());
    assert!(
      state.tasks().as_slice()[0].completed
    );
  }
}
