use tasklist_core::AppConfig;
use yew::{
  Html,
  function_component,
  html,
  use_context
};
use yew_router::prelude::Link;

use crate::app::Route;

#[function_component(AppHeader)]
pub fn app_header() -> Html {
  let config = use_context::<AppConfig>()
    .unwrap_or_default();

  html! {
      <header class="app-header">
          <div class="container">
              <Link<Route> to={Route::Home} classes="brand">
                  { config.app_title.clone() }
              </Link<Route>>
              <nav>
                  <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
                  <Link<Route> to={Route::Tasks}>{ "Tasks" }</Link<Route>>
              </nav>
          </div>
      </header>
  }
}
