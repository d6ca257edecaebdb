use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<(String, ToastKind)>,
    pub remove_toast: Callback<usize>,
}

impl ToastContext {
    pub fn show_success(&self, message: String) {
        self.add_toast.emit((message, ToastKind::Success));
    }

    pub fn show_error(&self, message: String) {
        self.add_toast.emit((message, ToastKind::Error));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Provides [`ToastContext`] to the tree and renders the toast stack.
/// Toasts stay until clicked away.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_state(Vec::<Toast>::new);
    let next_id = use_state(|| 0usize);

    let add_toast = {
        let toasts = toasts.clone();
        let next_id = next_id.clone();
        Callback::from(move |(message, kind): (String, ToastKind)| {
            let id = *next_id;
            next_id.set(id + 1);
            let mut list = (*toasts).clone();
            list.push(Toast { id, message, kind });
            toasts.set(list);
        })
    };

    let remove_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: usize| {
            let list: Vec<Toast> = toasts.iter().filter(|t| t.id != id).cloned().collect();
            toasts.set(list);
        })
    };

    let context = ToastContext { add_toast, remove_toast: remove_toast.clone() };

    html! {
        <ContextProvider<ToastContext> context={context}>
            { for props.children.iter() }
            <div class="toast-stack">
                { for toasts.iter().map(|toast| {
                    let remove_toast = remove_toast.clone();
                    let id = toast.id;
                    html! {
                        <div
                            key={toast.id}
                            class={classes!("toast", toast.kind.class())}
                            onclick={Callback::from(move |_| remove_toast.emit(id))}
                        >
                            {&toast.message}
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
