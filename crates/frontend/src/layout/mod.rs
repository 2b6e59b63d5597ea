pub mod global_context;
pub mod sidebar;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;

use global_context::AppGlobalContext;
use sidebar::Sidebar;
use tabs::Tabs;
use top_header::TopHeader;

/// Top-level frame: header on top, sidebar and tab workspace below.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside
                    class="app-sidebar"
                    data-zone="left"
                    class:hidden=move || !ctx.left_open.get()
                >
                    <Sidebar />
                </aside>
                <main class="app-main" data-zone="center">
                    <Tabs />
                </main>
            </div>
        </div>
    }
}
