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

use super::TaskCard;

#[derive(Properties, PartialEq)]
pub struct TaskGridProps {
  pub tasks:     Vec<Task>,
  pub on_toggle: Callback<TaskId>
}

#[function_component(TaskGrid)]
pub fn task_grid(
  props: &TaskGridProps
) -> Html {
  html! {
      <div class="task-grid">
          {
              for props.tasks.iter().cloned().map(|task| html! {
                  <TaskCard
                      task={task}
                      on_toggle={props.on_toggle.clone()}
                  />
              })
          }
      </div>
  }
}
