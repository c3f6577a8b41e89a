use tasklist_core::lifetime::bind_to_view;
use tasklist_core::seed::seed_tasks;
use tasklist_core::{
  AppConfig,
  FullListState,
  TaskId
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_context,
  use_effect_with,
  use_reducer
};

use crate::api::fetch_remote_tasks;
use crate::app::ui_debug;
use crate::components::{
  AppHeader,
  ErrorBanner,
  LoadingScreen,
  TaskGrid,
  TaskModal
};
use crate::store::{
  FullListAction,
  FullListStore,
  ViewAction
};

#[function_component(FullListPage)]
pub fn full_list_page() -> Html {
  let config = use_context::<AppConfig>()
    .unwrap_or_default();
  let store = use_reducer(|| {
    FullListStore(FullListState::seeded(
      seed_tasks()
    ))
  });

  {
    let dispatcher = store.dispatcher();
    let remote_url =
      config.remote_url.clone();
    use_effect_with((), move |_| {
      ui_debug(
        "tasks.mounted",
        "starting remote sync"
      );
      dispatcher
        .dispatch(FullListAction::BeginSync);

      let (sync, lifetime) =
        bind_to_view(async move {
          let outcome =
            fetch_remote_tasks(&remote_url)
              .await;
          if let Err(err) = &outcome {
            tracing::error!(
              error = %err,
              url = %remote_url,
              "remote task fetch failed"
            );
          }
          dispatcher.dispatch(
            FullListAction::FinishSync(
              outcome
            )
          );
        });

      wasm_bindgen_futures::spawn_local(
        async move {
          if sync.await.is_none() {
            tracing::debug!(
              "remote task fetch dropped \
               after unmount"
            );
          }
        }
      );

      move || lifetime.end()
    });
  }

  let on_toggle = {
    let store = store.dispatcher();
    Callback::from(move |id: TaskId| {
      store.dispatch(FullListAction::View(
        ViewAction::Toggle(id)
      ));
    })
  };
  let on_open_modal = {
    let store = store.dispatcher();
    Callback::from(move |_| {
      store.dispatch(FullListAction::View(
        ViewAction::OpenModal
      ));
    })
  };
  let on_add = {
    let store = store.dispatcher();
    Callback::from(move |title: String| {
      tracing::info!(title = %title, "adding task from full list view");
      store.dispatch(FullListAction::View(
        ViewAction::Add(title)
      ));
    })
  };
  let on_close = {
    let store = store.dispatcher();
    Callback::from(move |()| {
      store.dispatch(FullListAction::View(
        ViewAction::CloseModal
      ));
    })
  };

  let state = &store.0;
  if state.is_loading() {
    return html! { <LoadingScreen /> };
  }

  html! {
      <div class="page">
          <AppHeader />

          <main class="container">
              {
                  if let Some(notice) = state.error_notice() {
                      html! { <ErrorBanner message={notice.to_string()} /> }
                  } else {
                      html! {}
                  }
              }

              <div class="actions">
                  <button type="button" class="btn add" onclick={on_open_modal}>{ "Add Task" }</button>
                  <span class="summary">
                      { format!(" {} of {} done", state.tasks().completed_count(), state.tasks().len()) }
                  </span>
              </div>

              <TaskGrid tasks={state.tasks().as_slice().to_vec()} on_toggle={on_toggle} />
          </main>

          {
              if state.modal_open() {
                  html! { <TaskModal on_submit={on_add} on_close={on_close} /> }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
