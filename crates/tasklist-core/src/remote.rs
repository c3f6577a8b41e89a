//! Boundary adapter for the remote
//! demo todo API.
//!
//! The API answers with
//! `{"todos": [{"id", "todo",
//! "completed", "userId"}], "total",
//! ...}`. Only the fields a [`Task`]
//! carries survive decoding.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::task::{
  Task,
  TaskId
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
  #[error("request failed: {0}")]
  Network(String),

  #[error(
    "remote answered {status} \
     {status_text}"
  )]
  Status {
    status:      u16,
    status_text: String
  },

  #[error("malformed todo payload: {0}")]
  Decode(String)
}

/// Records may name the title `title`,
/// `todo`, or both; `title` wins.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteTodo {
  pub id:        TaskId,
  #[serde(default)]
  pub title:     Option<String>,
  #[serde(default)]
  pub todo:      Option<String>,
  #[serde(default)]
  pub completed: bool
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteTodosPage {
  pub todos: Vec<RemoteTodo>
}

impl From<RemoteTodo> for Task {
  fn from(todo: RemoteTodo) -> Self {
    Self {
      id:        todo.id,
      title:     todo
        .title
        .or(todo.todo)
        .unwrap_or_default(),
      completed: todo.completed
    }
  }
}

/// Anything outside 2xx is a failure.
pub fn check_status(
  status: u16,
  status_text: &str
) -> Result<(), FetchError> {
  if (200..300).contains(&status) {
    Ok(())
  } else {
    Err(FetchError::Status {
      status,
      status_text: status_text
        .to_string()
    })
  }
}

pub fn decode_todos(
  body: &str
) -> Result<Vec<Task>, FetchError> {
  let page: RemoteTodosPage =
    serde_json::from_str(body).map_err(
      |e| FetchError::Decode(e.to_string())
    )?;

  debug!(
    count = page.todos.len(),
    "decoded remote todos"
  );

  Ok(
    page
      .todos
      .into_iter()
      .map(Task::from)
      .collect()
  )
}

/// Turns a finished response into
/// tasks: status first, then payload.
pub fn tasks_from_response(
  status: u16,
  status_text: &str,
  body: &str
) -> Result<Vec<Task>, FetchError> {
  check_status(status, status_text)?;
  decode_todos(body)
}

#[cfg(test)]
mod remote_tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn decodes_dummyjson_shape() {
    let body = r#"{
      "todos": [
        {"id": 1, "todo": "Do something nice", "completed": true, "userId": 152},
        {"id": 2, "todo": "Memorize a poem", "completed": false, "userId": 13}
      ],
      "total": 254,
      "skip": 0,
      "limit": 30
    }"#;

    let tasks =
      decode_todos(body).expect("decode");

    assert_eq!(
      tasks,
      vec![
        Task {
          id:        1,
          title:     "Do something nice"
            .to_string(),
          completed: true
        },
        Task {
          id:        2,
          title:     "Memorize a poem"
            .to_string(),
          completed: false
        },
      ]
    );
  }

  #[test]
  fn accepts_title_field_and_missing_flags()
  {
    let body = r#"{"todos": [{"id": 9, "title": "plain"}, {"id": 10}]}"#;

    let tasks =
      decode_todos(body).expect("decode");

    assert_eq!(tasks[0].title, "plain");
    assert!(!tasks[0].completed);
    assert_eq!(tasks[1].title, "");
  }

  #[test]
  fn title_wins_when_both_names_are_present()
  {
    let body = r#"{"todos": [{"id": 1, "title": "t", "todo": "x", "completed": true}]}"#;

    let tasks =
      decode_todos(body).expect("decode");

    assert_eq!(
      tasks,
      vec![Task {
        id:        1,
        title:     "t".to_string(),
        completed: true
      }]
    );
  }

  #[test]
  fn response_pipeline_checks_status_before_body()
  {
    let body = r#"{"todos": [{"id": 4, "todo": "walk"}]}"#;

    let tasks =
      tasks_from_response(200, "OK", body)
        .expect("ok response");
    assert_eq!(tasks[0].title, "walk");

    assert!(matches!(
      tasks_from_response(
        404,
        "Not Found",
        body
      ),
      Err(FetchError::Status {
        status: 404,
        ..
      })
    ));
    assert!(matches!(
      tasks_from_response(200, "OK", ""),
      Err(FetchError::Decode(_))
    ));
  }

  #[test]
  fn missing_todos_array_is_a_decode_error()
  {
    let err = decode_todos(
      r#"{"items": []}"#
    )
    .expect_err("should fail");
    assert!(matches!(
      err,
      FetchError::Decode(_)
    ));
  }

  #[test]
  fn garbage_body_is_a_decode_error() {
    assert!(matches!(
      decode_todos("<html>"),
      Err(FetchError::Decode(_))
    ));
  }

  #[test]
  fn non_success_status_is_rejected() {
    assert!(check_status(200, "OK").is_ok());
    assert!(
      check_status(204, "No Content")
        .is_ok()
    );

    let err = check_status(
      503,
      "Service Unavailable"
    )
    .expect_err("503 should fail");
    assert_eq!(
      err.to_string(),
      "remote answered 503 Service \
       Unavailable"
    );
  }
}
