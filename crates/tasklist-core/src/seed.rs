use anyhow::Context;
use serde::Deserialize;
use tracing::{
  error,
  info
};

use crate::collection::TaskList;
use crate::task::Task;

const SEED_TOML: &str =
  include_str!("../assets/seed.toml");

#[derive(Debug, Deserialize)]
struct SeedFile {
  #[serde(default)]
  tasks: Vec<Task>
}

pub fn parse_seed(
  text: &str
) -> anyhow::Result<TaskList> {
  let file: SeedFile =
    toml::from_str(text)
      .context("failed to parse seed tasks")?;
  Ok(TaskList::new(file.tasks))
}

/// Static sample tasks every view
/// starts from. An unreadable seed
/// file degrades to an empty list.
pub fn seed_tasks() -> TaskList {
  match parse_seed(SEED_TOML) {
    | Ok(tasks) => {
      info!(
        count = tasks.len(),
        "loaded seed tasks"
      );
      tasks
    }
    | Err(error) => {
      error!(%error, "failed to load seed tasks; starting empty");
      TaskList::default()
    }
  }
}
