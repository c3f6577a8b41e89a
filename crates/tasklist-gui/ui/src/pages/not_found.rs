use yew::{
  Html,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::app::Route;
use crate::components::AppHeader;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
  html! {
      <div class="page">
          <AppHeader />
          <main class="container">
              <section class="empty">
                  <p>{ "This page does not exist." }</p>
                  <Link<Route> to={Route::Home} classes="btn">{ "Back home" }</Link<Route>>
              </section>
          </main>
      </div>
  }
}
