use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  SubmitEvent,
  TargetCast,
  function_component,
  html,
  use_state
};

use crate::app::ui_debug;

/// Collects a title and hands it to
/// `on_submit`; `on_close` asks the
/// owner to dismiss. No validation.
#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
  pub on_submit: Callback<String>,
  pub on_close:  Callback<()>
}

#[function_component(TaskModal)]
pub fn task_modal(
  props: &TaskModalProps
) -> Html {
  let draft_title = use_state(String::new);

  let on_input = {
    let draft_title = draft_title.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        draft_title.set(input.value());
      }
    )
  };

  let on_form_submit = {
    let draft_title = draft_title.clone();
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: SubmitEvent| {
        e.prevent_default();
        ui_debug(
          "modal.submit",
          "add task submitted"
        );
        on_submit
          .emit((*draft_title).clone());
        draft_title.set(String::new());
      }
    )
  };

  let on_close_click = {
    let on_close = props.on_close.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_close.emit(());
      }
    )
  };

  html! {
      <div class="modal-backdrop" onclick={on_close_click.clone()}>
          <div class="modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
              <div class="header">{ "New Task" }</div>
              <form class="content" onsubmit={on_form_submit}>
                  <div class="field">
                      <label for="task-title">{ "Title" }</label>
                      <input
                          id="task-title"
                          value={(*draft_title).clone()}
                          oninput={on_input}
                          placeholder="What needs doing?"
                          autofocus=true
                      />
                  </div>
                  <div class="footer">
                      <button type="button" class="btn ghost" onclick={on_close_click}>{ "Cancel" }</button>
                      <button type="submit" class="btn add">{ "Add" }</button>
                  </div>
              </form>
          </div>
      </div>
  }
}
