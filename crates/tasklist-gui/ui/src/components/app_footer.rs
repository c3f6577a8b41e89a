use chrono::{
  Datelike,
  Local
};
use tasklist_core::AppConfig;
use yew::{
  Html,
  function_component,
  html,
  use_context
};

#[function_component(AppFooter)]
pub fn app_footer() -> Html {
  let config = use_context::<AppConfig>()
    .unwrap_or_default();
  let year = Local::now().year();

  html! {
      <footer class="app-footer">
          <p>{ format!("© {year} {} - All rights reserved", config.app_title) }</p>
      </footer>
  }
}
