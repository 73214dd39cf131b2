use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::booking::Notifier;
use crate::config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastList {
    next_id: u32,
    items: Vec<Toast>,
}

pub enum ToastAction {
    Push { title: String, body: String },
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push { title, body } => {
                next.items.push(Toast { id: next.next_id, title, body });
                next.next_id += 1;
            }
            ToastAction::Dismiss(id) => {
                if !next.items.iter().any(|toast| toast.id == id) {
                    return self;
                }
                next.items.retain(|toast| toast.id != id);
            }
        }
        Rc::new(next)
    }
}

/// Context handle through which any component can raise a toast.
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    push: Callback<(String, String)>,
}

impl Notifier for ToastHandle {
    fn notify(&self, title: &str, body: &str) {
        self.push.emit((title.to_string(), body.to_string()));
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            (),
        );
    }

    let close = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class="toast" role="status">
            <div class="toast-text">
                <div class="toast-title">{&props.toast.title}</div>
                <div class="toast-body">{&props.toast.body}</div>
            </div>
            <button class="toast-close" onclick={close} aria-label="Dismiss">{"×"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    #[prop_or_default]
    pub children: Children,
}

/// Provides a [`ToastHandle`] to its children and renders raised toasts in
/// the bottom-right corner until they expire.
#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let toasts = use_reducer(ToastList::default);

    let handle = {
        let dispatcher = toasts.dispatcher();
        use_memo(
            move |_| ToastHandle {
                push: Callback::from(move |(title, body): (String, String)| {
                    dispatcher.dispatch(ToastAction::Push { title, body });
                }),
            },
            (),
        )
    };

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastHandle> context={(*handle).clone()}>
            <style>
                {r#"
                    .toast-stack {
                        position: fixed;
                        right: 1.5rem;
                        bottom: 6rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        z-index: 100;
                    }
                    .toast {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        min-width: 280px;
                        max-width: 360px;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: rgba(255, 255, 255, 0.95);
                        border: 1px solid rgba(59, 130, 246, 0.2);
                        box-shadow: 0 16px 32px rgba(15, 23, 42, 0.15);
                        backdrop-filter: blur(10px);
                        animation: toastIn 0.4s ease-out forwards;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast-title {
                        font-weight: 600;
                        color: #0f172a;
                    }
                    .toast-body {
                        font-size: 0.9rem;
                        color: #475569;
                    }
                    .toast-close {
                        margin-left: auto;
                        background: none;
                        border: none;
                        font-size: 1.25rem;
                        line-height: 1;
                        color: #64748b;
                        cursor: pointer;
                    }
                "#}
            </style>
            { for props.children.iter() }
            <div class="toast-stack">
                { for toasts.items.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
        </ContextProvider<ToastHandle>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(list: Rc<ToastList>, title: &str) -> Rc<ToastList> {
        list.reduce(ToastAction::Push {
            title: title.to_string(),
            body: String::new(),
        })
    }

    #[test]
    fn toasts_get_increasing_ids() {
        let list = push(push(Rc::new(ToastList::default()), "first"), "second");
        let ids: Vec<u32> = list.items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let list = push(push(Rc::new(ToastList::default()), "first"), "second");
        let list = list.reduce(ToastAction::Dismiss(0));
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].title, "second");
    }

    #[test]
    fn dismissing_unknown_toast_keeps_state() {
        let list = push(Rc::new(ToastList::default()), "only");
        let after = Rc::clone(&list).reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&list, &after));
    }
}
