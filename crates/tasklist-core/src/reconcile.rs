use std::collections::BTreeMap;

use serde::{
  Deserialize,
  Serialize
};
use tracing::info;

use crate::collection::TaskList;
use crate::task::{
  Task,
  TaskId
};

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct ReconcileSummary {
  /// Local tasks that also exist
  /// remotely.
  pub matched:  usize,
  /// Remote-only tasks appended after
  /// the local ones.
  pub appended: usize
}

/// Merges a remote snapshot into the
/// local list by id.
///
/// A local task with a remote
/// counterpart keeps its own title and
/// takes every other field from the
/// first remote record with that id.
/// Remote records whose id is unknown
/// locally follow, in remote order.
#[tracing::instrument(skip_all, fields(
  local = local.len(),
  remote = remote.len()
))]
pub fn reconcile(
  local: &TaskList,
  remote: &[Task]
) -> (TaskList, ReconcileSummary) {
  let mut by_id: BTreeMap<
    TaskId,
    &Task
  > = BTreeMap::new();
  for task in remote {
    by_id.entry(task.id).or_insert(task);
  }

  let mut summary =
    ReconcileSummary::default();
  let mut merged: Vec<Task> = local
    .iter()
    .map(|own| {
      match by_id.get(&own.id) {
        | Some(theirs) => {
          summary.matched += 1;
          Task {
            title: own.title.clone(),
            ..(*theirs).clone()
          }
        }
        | None => own.clone()
      }
    })
    .collect();

  let before = merged.len();
  merged.extend(
    remote
      .iter()
      .filter(|task| {
        !local.contains_id(task.id)
      })
      .cloned()
  );
  summary.appended =
    merged.len() - before;

  info!(
    matched = summary.matched,
    appended = summary.appended,
    total = merged.len(),
    "reconciled remote tasks"
  );

  (TaskList::new(merged), summary)
}
