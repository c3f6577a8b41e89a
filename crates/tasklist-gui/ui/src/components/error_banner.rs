use yew::{
  AttrValue,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
  pub message: AttrValue
}

#[function_component(ErrorBanner)]
pub fn error_banner(
  props: &ErrorBannerProps
) -> Html {
  html! {
      <div class="banner-warning" role="alert">
          <p>{ props.message.clone() }</p>
      </div>
  }
}
