//! App-wide toast notifications.
//!
//! Mutations report their outcome here instead of painting ad-hoc banners
//! into the page. The service lives in the global context; `ToastHost` is
//! rendered once in the shell and stacks active toasts in a corner overlay.

use leptos::prelude::*;
use leptos::task::spawn_local;

use gloo_timers::future::TimeoutFuture;

const SUCCESS_VISIBLE_MS: u32 = 3_500;
const ERROR_VISIBLE_MS: u32 = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }

    fn visible_ms(&self) -> u32 {
        match self {
            ToastKind::Error => ERROR_VISIBLE_MS,
            _ => SUCCESS_VISIBLE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.with_value(|v| *v + 1);
        self.next_id.set_value(id);
        self.toasts.update(|list| list.push(Toast { id, kind, message }));

        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(kind.visible_ms()).await;
            service.dismiss(id);
        });
    }
}

/// Fixed overlay listing active toasts; clicking one dismisses it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<ToastService>();
    let items = move || toasts.toasts.get();

    view! {
        <div class="toast-host">
            <For each=items key=|toast| toast.id let:toast>
                {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.css_class()
                            on:click=move |_| toasts.dismiss(id)
                        >
                            {toast.message.clone()}
                        </div>
                    }
                }
            </For>
        </div>
    }
}
