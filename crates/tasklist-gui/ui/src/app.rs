use gloo::console::log;
use tasklist_core::AppConfig;
use yew::{
  ContextProvider,
  Html,
  function_component,
  html,
  use_memo
};
use yew_router::prelude::*;

use crate::pages::{
  FullListPage,
  HomePage,
  NotFoundPage
};

const APP_CONFIG_TOML: &str =
  include_str!("../assets/app.toml");

#[derive(
  Clone, Routable, PartialEq, Eq, Debug,
)]
pub enum Route {
  #[at("/")]
  Home,
  #[at("/tasks")]
  Tasks,
  #[not_found]
  #[at("/404")]
  NotFound
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_memo((), |_| {
    AppConfig::load_or_default(
      APP_CONFIG_TOML
    )
  });

  html! {
      <ContextProvider<AppConfig> context={(*config).clone()}>
          <BrowserRouter>
              <Switch<Route> render={switch} />
          </BrowserRouter>
      </ContextProvider<AppConfig>>
  }
}

fn switch(route: Route) -> Html {
  ui_debug(
    "router.switch",
    &format!("{route:?}")
  );
  match route {
    | Route::Home => {
      html! { <HomePage /> }
    }
    | Route::Tasks => {
      html! { <FullListPage /> }
    }
    | Route::NotFound => {
      html! { <NotFoundPage /> }
    }
  }
}

pub fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
