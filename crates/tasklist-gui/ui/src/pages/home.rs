use tasklist_core::seed::seed_tasks;
use tasklist_core::{
  AppConfig,
  TaskId,
  ViewState
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_context,
  use_reducer
};
use yew_router::prelude::Link;

use crate::app::Route;
use crate::components::{
  AppFooter,
  AppHeader,
  TaskGrid,
  TaskModal
};
use crate::store::{
  HomeStore,
  ViewAction
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
  let config = use_context::<AppConfig>()
    .unwrap_or_default();
  let store = use_reducer(|| {
    HomeStore(ViewState::seeded(
      seed_tasks()
    ))
  });

  let on_toggle = {
    let store = store.dispatcher();
    Callback::from(move |id: TaskId| {
      store.dispatch(ViewAction::Toggle(id));
    })
  };
  let on_open_modal = {
    let store = store.dispatcher();
    Callback::from(move |_| {
      store.dispatch(ViewAction::OpenModal);
    })
  };
  let on_add = {
    let store = store.dispatcher();
    Callback::from(move |title: String| {
      tracing::info!(title = %title, "adding task from home view");
      store.dispatch(ViewAction::Add(title));
    })
  };
  let on_close = {
    let store = store.dispatcher();
    Callback::from(move |()| {
      store
        .dispatch(ViewAction::CloseModal);
    })
  };

  let state = &store.0;
  let preview = state
    .tasks
    .preview(config.home_preview_limit)
    .to_vec();

  html! {
      <div class="page">
          <AppHeader />

          <main class="container">
              <section class="hero">
                  <h1>{ format!("Welcome to {}", config.app_title) }</h1>
                  <p>{ "Organise your tasks simply and efficiently" }</p>
                  <div class="actions">
                      <Link<Route> to={Route::Tasks} classes="btn">{ "See All Tasks" }</Link<Route>>
                      <button type="button" class="btn add" onclick={on_open_modal}>{ "Add Task" }</button>
                  </div>
              </section>

              <section>
                  <h2>{ "Your Recent Tasks" }</h2>
                  {
                      if state.tasks.is_empty() {
                          html! {
                              <div class="empty">
                                  <p>{ "No tasks yet" }</p>
                              </div>
                          }
                      } else {
                          html! { <TaskGrid tasks={preview} on_toggle={on_toggle} /> }
                      }
                  }
              </section>

              <section class="how-to">
                  <h2>{ "How to use" }</h2>
                  <div class="steps">
                      <div class="step">
                          <h3>{ "1. Add tasks" }</h3>
                          <p>{ "Use the Add Task button to create new tasks" }</p>
                      </div>
                      <div class="step">
                          <h3>{ "2. Mark as done" }</h3>
                          <p>{ "Click a task to toggle its status" }</p>
                      </div>
                      <div class="step">
                          <h3>{ "3. See everything" }</h3>
                          <p>{ "Open the full task page" }</p>
                      </div>
                  </div>
              </section>
          </main>

          {
              if state.modal_open {
                  html! { <TaskModal on_submit={on_add} on_close={on_close} /> }
              } else {
                  html! {}
              }
          }

          <AppFooter />
      </div>
  }
}
