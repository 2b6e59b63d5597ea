use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::toast::{ToastHost, ToastService};

#[component]
pub fn App() -> impl IntoView {
    // Shared shell state and the toast service, provided once for the whole app.
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());

    view! {
        <Shell />
        <ToastHost />
    }
}
