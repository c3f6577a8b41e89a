//! Ties background work to the view
//! that started it.

use std::future::Future;

use futures::future::{
  AbortHandle,
  Abortable
};
use tracing::debug;

/// Handle held by a mounted view. Ending
/// it drops the bound future at its next
/// poll, so nothing it would do after
/// that point happens.
#[derive(Debug, Clone)]
pub struct ViewLifetime {
  handle: AbortHandle
}

impl ViewLifetime {
  pub fn end(&self) {
    debug!("view lifetime ended");
    self.handle.abort();
  }

  pub fn is_ended(&self) -> bool {
    self.handle.is_aborted()
  }
}

/// Wraps `work` so it resolves to
/// `None` once the returned lifetime has
/// ended.
pub fn bind_to_view<F>(
  work: F
) -> (
  impl Future<Output = Option<F::Output>>,
  ViewLifetime
)
where
  F: Future
{
  let (handle, registration) =
    AbortHandle::new_pair();
  let bound = async move {
    Abortable::new(work, registration)
      .await
      .ok()
  };
  (bound, ViewLifetime { handle })
}
