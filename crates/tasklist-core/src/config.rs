use anyhow::Context;
use serde::Deserialize;
use tracing::{
  error,
  info,
  warn
};

pub const DEFAULT_REMOTE_URL: &str =
  "https://dummyjson.com/todos";
pub const DEFAULT_HOME_PREVIEW_LIMIT:
  usize = 4;
pub const DEFAULT_APP_TITLE: &str =
  "Task Manager";

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct AppConfig {
  pub remote_url:         String,
  pub home_preview_limit: usize,
  pub app_title:          String
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      remote_url:         DEFAULT_REMOTE_URL
        .to_string(),
      home_preview_limit:
        DEFAULT_HOME_PREVIEW_LIMIT,
      app_title:          DEFAULT_APP_TITLE
        .to_string()
    }
  }
}

impl AppConfig {
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let cfg: Self = toml::from_str(text)
      .context(
        "failed to parse app config"
      )?;
    Ok(cfg.sanitized())
  }

  /// Parses `text`, falling back to the
  /// built-in defaults on any error.
  pub fn load_or_default(
    text: &str
  ) -> Self {
    match Self::from_toml_str(text) {
      | Ok(cfg) => {
        info!(
          remote_url = %cfg.remote_url,
          home_preview_limit =
            cfg.home_preview_limit,
          "loaded app config"
        );
        cfg
      }
      | Err(error) => {
        error!(%error, "failed to load app config; using defaults");
        Self::default()
      }
    }
  }

  fn sanitized(mut self) -> Self {
    if self.remote_url.trim().is_empty() {
      warn!(
        "remote_url was empty; using \
         default endpoint"
      );
      self.remote_url =
        DEFAULT_REMOTE_URL.to_string();
    }
    if self.home_preview_limit == 0 {
      warn!(
        "home_preview_limit was 0; using \
         default limit"
      );
      self.home_preview_limit =
        DEFAULT_HOME_PREVIEW_LIMIT;
    }
    if self.app_title.trim().is_empty() {
      self.app_title =
        DEFAULT_APP_TITLE.to_string();
    }
    self
  }
}
