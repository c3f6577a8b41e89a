use serde::{
  Deserialize,
  Serialize
};
use tracing::debug;

use crate::task::{
  Task,
  TaskId
};

/// Ordered task collection. Order is
/// insertion order; updates never
/// re-sort and always produce a new
/// value.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(transparent)]
pub struct TaskList {
  tasks: Vec<Task>
}

impl TaskList {
  pub fn new(tasks: Vec<Task>) -> Self {
    Self { tasks }
  }

  pub fn as_slice(&self) -> &[Task] {
    &self.tasks
  }

  pub fn iter(
    &self
  ) -> std::slice::Iter<'_, Task> {
    self.tasks.iter()
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn completed_count(
    &self
  ) -> usize {
    self
      .tasks
      .iter()
      .filter(|task| task.completed)
      .count()
  }

  pub fn contains_id(
    &self,
    id: TaskId
  ) -> bool {
    self.tasks.iter().any(|task| {
      task.id == id
    })
  }

  /// `max(ids, 0) + 1`.
  pub fn next_id(&self) -> TaskId {
    self
      .tasks
      .iter()
      .map(|task| task.id)
      .max()
      .unwrap_or(0)
      .saturating_add(1)
  }

  /// Flips `completed` on every task
  /// carrying `id`. Unknown ids yield an
  /// equal collection.
  #[must_use]
  pub fn toggle(
    &self,
    id: TaskId
  ) -> Self {
    let mut hits = 0_usize;
    let tasks = self
      .tasks
      .iter()
      .map(|task| {
        if task.id == id {
          hits += 1;
          task.toggled()
        } else {
          task.clone()
        }
      })
      .collect();

    debug!(id, hits, "toggled task");
    Self { tasks }
  }

  #[must_use]
  pub fn add(
    &self,
    title: impl Into<String>
  ) -> Self {
    let id = self.next_id();
    let mut tasks = self.tasks.clone();
    tasks.push(Task::new_pending(
      id, title
    ));

    debug!(
      id,
      total = tasks.len(),
      "appended task"
    );
    Self { tasks }
  }

  /// First `limit` tasks in order.
  pub fn preview(
    &self,
    limit: usize
  ) -> &[Task] {
    let end = limit.min(self.tasks.len());
    &self.tasks[..end]
  }

  pub fn into_vec(self) -> Vec<Task> {
    self.tasks
  }
}
