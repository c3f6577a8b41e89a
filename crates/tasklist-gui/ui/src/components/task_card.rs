use tasklist_core::{
  Task,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskCardProps {
  pub task:      Task,
  pub on_toggle: Callback<TaskId>
}

#[function_component(TaskCard)]
pub fn task_card(
  props: &TaskCardProps
) -> Html {
  let id = props.task.id;
  let class = if props.task.completed {
    "task-card done"
  } else {
    "task-card pending"
  };
  let on_toggle =
    props.on_toggle.clone();

  html! {
      <div class={class} onclick={move |_| on_toggle.emit(id)}>
          <h3>{ &props.task.title }</h3>
          <p class="status">{ props.task.status_label() }</p>
      </div>
  }
}
