use gloo::net::http::Request;
use tasklist_core::remote::tasks_from_response;
use tasklist_core::{
  FetchError,
  Task
};

/// One GET against the demo todo API.
/// Transport, status and payload
/// problems all come back as
/// [`FetchError`].
pub async fn fetch_remote_tasks(
  url: &str
) -> Result<Vec<Task>, FetchError> {
  tracing::debug!(url, "fetching remote tasks");

  let response = Request::get(url)
    .send()
    .await
    .map_err(|e| {
      FetchError::Network(e.to_string())
    })?;

  let body =
    response.text().await.map_err(|e| {
      FetchError::Network(e.to_string())
    })?;

  tasks_from_response(
    response.status(),
    &response.status_text(),
    &body
  )
}
