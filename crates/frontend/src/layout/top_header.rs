use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;

/// Application top bar: sidebar toggle and brand only. Auth, theming and
/// notifications live outside this frontend.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || {
                        if is_sidebar_visible() { "Ẩn menu" } else { "Hiện menu" }
                    }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Quản trị nhân sự"</span>
            </div>
        </div>
    }
}
