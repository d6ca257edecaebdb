use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Inline error box with an optional retry action.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="error-message">
            <span>{&props.message}</span>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button
                        class="btn btn-retry"
                        onclick={Callback::from(move |_| {
                            log::debug!("User clicked retry button");
                            on_retry.emit(());
                        })}
                    >
                        {"Try Again"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
