use yew::{
  Html,
  function_component,
  html
};

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
  html! {
      <div class="loading">
          <div class="spinner"></div>
          <span>{ "Updating tasks..." }</span>
      </div>
  }
}
