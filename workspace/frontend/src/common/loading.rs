use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
            {if let Some(text) = &props.text {
                html! { <p class="loading-text">{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}

/// Centered spinner without text.
#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="loading">
            <div class="spinner"></div>
        </div>
    }
}
